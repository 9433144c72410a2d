/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use anyhow::{Context, Result};
use migration::Migrator;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use sea_orm_migration::MigratorTrait;
use std::time::Duration;
use tracing::log::LevelFilter;

use super::types::*;

pub fn database_url(cli: &Cli) -> Result<String> {
    if let Some(file) = &cli.database_url_file {
        let url = std::fs::read_to_string(file).context("Failed to read database url from file")?;
        Ok(url.trim().to_string())
    } else if let Some(url) = &cli.database_url {
        Ok(url.clone())
    } else {
        anyhow::bail!("No database url provided")
    }
}

pub async fn connect_db(cli: &Cli) -> Result<DatabaseConnection> {
    let mut opt = ConnectOptions::new(database_url(cli)?);

    // Only enable SQL logging at debug level
    if cli.log_level == "debug" {
        opt.sqlx_logging(true)
            .sqlx_logging_level(LevelFilter::Debug);
    } else {
        opt.sqlx_logging(false);
    }

    opt.max_connections(cli.max_connections)
        .min_connections(1)
        .connect_timeout(Duration::from_secs(8))
        .acquire_timeout(Duration::from_secs(8));

    Database::connect(opt)
        .await
        .context("Failed to connect to database")
}

/// Drops every table and reapplies all migrations, reseeding the status
/// lookup. Refuses to run unless `environment` is development.
pub async fn reset_schema(db: &DatabaseConnection, environment: Environment) -> Result<()> {
    if environment != Environment::Development {
        anyhow::bail!(
            "Refusing to reset the database schema in {:?} environment",
            environment
        );
    }

    tracing::warn!("Resetting database schema, all data will be lost");

    Migrator::fresh(db)
        .await
        .context("Failed to reset database schema")
}
