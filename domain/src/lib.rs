/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

pub mod consts;
pub mod database;
pub mod departments;
pub mod error;
pub mod input;
pub mod model;
pub mod reports;
pub mod requests;
pub mod types;

use anyhow::{Context, Result};
use database::{connect_db, reset_schema};
use migration::Migrator;
use sea_orm_migration::MigratorTrait;
use std::sync::Arc;
use types::*;

pub async fn init_state(cli: Cli) -> Result<Arc<ServerState>> {
    tracing::info!("Starting Registro Server on {}:{}", cli.ip, cli.port);

    let db = connect_db(&cli).await?;

    if cli.reset_database {
        reset_schema(&db, cli.environment).await?;
    } else {
        Migrator::up(&db, None)
            .await
            .context("Failed to run database migrations")?;
    }

    Ok(Arc::new(ServerState { db, cli }))
}
