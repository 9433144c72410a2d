/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

pub use sea_orm_migration::prelude::*;

mod m20251018_000001_create_table_department;
mod m20251018_000002_create_table_report;
mod m20251018_000003_create_table_department_report;
mod m20251018_000004_create_table_request_status;
mod m20251018_000005_create_table_request;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251018_000001_create_table_department::Migration),
            Box::new(m20251018_000002_create_table_report::Migration),
            Box::new(m20251018_000003_create_table_department_report::Migration),
            Box::new(m20251018_000004_create_table_request_status::Migration),
            Box::new(m20251018_000005_create_table_request::Migration),
        ]
    }
}
