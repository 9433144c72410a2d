/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use entity::request::Priority;
use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_orm::{ActiveEnum, Iterable};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Request::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Request::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Request::IdStatus).integer().not_null())
                    .col(
                        ColumnDef::new(Request::Priority)
                            .string_len(20)
                            .not_null()
                            .check(
                                Expr::col(Request::Priority)
                                    .is_in(Priority::iter().map(|priority| priority.to_value())),
                            ),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-request-request_status")
                            .from(Request::Table, Request::IdStatus)
                            .to(RequestStatus::Table, RequestStatus::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Request::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Request {
    Table,
    Id,
    IdStatus,
    Priority,
}

#[derive(DeriveIden)]
enum RequestStatus {
    Table,
    Id,
}
