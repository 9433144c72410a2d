/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use entity::request_status::{self, Status};
use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_orm::{ConnectionTrait, Iterable};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(RequestStatus::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(RequestStatus::Id)
                            .integer()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(RequestStatus::Description)
                            .string_len(200)
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // One row per Status member, ids equal to the enum codes
        let mut seed = Query::insert();
        seed.into_table(RequestStatus::Table)
            .columns([RequestStatus::Id, RequestStatus::Description]);

        for row in Status::iter().map(request_status::Model::seed) {
            seed.values([row.id.into(), row.description.into()])
                .map_err(|e| DbErr::Migration(e.to_string()))?;
        }

        let db = manager.get_connection();
        db.execute(db.get_database_backend().build(&seed)).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(RequestStatus::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum RequestStatus {
    Table,
    Id,
    Description,
}
