/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

//! Tests for the request entity mapping

use entity::request::{self, Priority};
use entity::request_status::Status;
use sea_orm::ActiveValue::Set;
use sea_orm::{
    ActiveModelTrait, DatabaseBackend, EntityTrait, MockDatabase, QueryTrait, entity::prelude::*,
};

#[test]
fn test_status_is_stored_in_shadow_column() {
    let arequest = request::ActiveModel {
        status_id: Set(Status::EmAnalise.code()),
        priority: Set(Priority::Alta),
        ..Default::default()
    };

    let sql = request::Entity::insert(arequest)
        .build(DatabaseBackend::Postgres)
        .to_string();

    assert!(sql.contains("\"id_status\""));
    assert!(!sql.contains("\"status_id\""));
    assert!(sql.contains("'Alta'"));
    assert!(!sql.contains("Alta Prioridade"));
}

#[test]
fn test_filter_by_priority_uses_name() {
    let sql = request::Entity::find()
        .filter(request::Column::Priority.eq(Priority::Urgente))
        .build(DatabaseBackend::Postgres)
        .to_string();

    assert!(sql.contains("'Urgente'"));
}

#[tokio::test]
async fn test_request_insert_returns_model() -> Result<(), DbErr> {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![request::Model {
            id: 1,
            status_id: Status::Novo.code(),
            priority: Priority::Urgente,
        }]])
        .into_connection();

    let arequest = request::ActiveModel {
        status_id: Set(Status::Novo.code()),
        priority: Set(Priority::Urgente),
        ..Default::default()
    };

    let request = arequest.insert(&db).await?;

    assert_eq!(request.id, 1);
    assert_eq!(Status::from_code(request.status_id), Some(Status::Novo));
    assert_eq!(request.priority, Priority::Urgente);

    Ok(())
}
