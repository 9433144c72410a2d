/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

#![allow(dead_code)]

use domain::departments::{NewDepartment, create_department};
use domain::reports::{NewStandaloneReport, create_report};
use domain::types::*;
use migration::Migrator;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use sea_orm_migration::MigratorTrait;

/// Fresh in-memory SQLite database with all migrations applied. A single
/// connection keeps every query on the same in-memory database.
pub async fn setup_db() -> DatabaseConnection {
    let mut opt = ConnectOptions::new("sqlite::memory:");
    opt.max_connections(1)
        .min_connections(1)
        .sqlx_logging(false);

    let db = Database::connect(opt).await.unwrap();
    Migrator::up(&db, None).await.unwrap();
    db
}

pub async fn department(db: &DatabaseConnection, name: &str) -> MDepartment {
    create_department(
        db,
        NewDepartment {
            name: name.to_string(),
            active: true,
        },
    )
    .await
    .unwrap()
}

pub async fn report(db: &DatabaseConnection, title: &str, department_id: i32) -> MReport {
    create_report(
        db,
        NewStandaloneReport {
            title: title.to_string(),
            description: None,
            department_id: Some(department_id),
        },
    )
    .await
    .unwrap()
}
