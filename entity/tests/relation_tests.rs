/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

//! Tests for the department and report relations

use entity::*;
use sea_orm::{DatabaseBackend, MockDatabase, ModelTrait, QueryTrait, entity::prelude::*};

fn ti() -> department::Model {
    department::Model {
        id: 1,
        name: "TI".to_owned(),
        active: true,
    }
}

#[test]
fn test_linked_departments_go_through_join_table() {
    let report = report::Model {
        id: 7,
        title: "Falha de rede".to_owned(),
        description: None,
        department_id: 1,
    };

    let sql = report
        .find_linked(report::LinkedDepartments)
        .build(DatabaseBackend::Postgres)
        .to_string();

    assert!(sql.contains("\"department_report\""));
    assert!(sql.contains("\"report_id\""));
}

#[test]
fn test_primary_reports_use_foreign_key() {
    let sql = ti()
        .find_related(report::Entity)
        .build(DatabaseBackend::Postgres)
        .to_string();

    assert!(sql.contains("\"report\".\"department_id\""));
    assert!(!sql.contains("\"department_report\""));
}

#[tokio::test]
async fn test_department_with_reports() -> Result<(), DbErr> {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![ti()]])
        .append_query_results([vec![report::Model {
            id: 1,
            title: "Falha de rede".to_owned(),
            description: Some("Switch do andar 2".to_owned()),
            department_id: 1,
        }]])
        .into_connection();

    let department = department::Entity::find_by_id(1).one(&db).await?;
    assert_eq!(department, Some(ti()));

    let reports = ti().find_related(report::Entity).all(&db).await?;
    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0].title, "Falha de rede");

    Ok(())
}
