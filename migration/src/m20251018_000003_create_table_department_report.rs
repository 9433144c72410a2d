/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // No unique index on (report_id, department_id): duplicates are
        // filtered by the link set before insert.
        manager
            .create_table(
                Table::create()
                    .table(DepartmentReport::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(DepartmentReport::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(DepartmentReport::ReportId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(DepartmentReport::DepartmentId)
                            .integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-department_report-report")
                            .from(DepartmentReport::Table, DepartmentReport::ReportId)
                            .to(Report::Table, Report::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-department_report-department")
                            .from(DepartmentReport::Table, DepartmentReport::DepartmentId)
                            .to(Department::Table, Department::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(DepartmentReport::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum DepartmentReport {
    Table,
    Id,
    ReportId,
    DepartmentId,
}

#[derive(DeriveIden)]
enum Report {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Department {
    Table,
    Id,
}
