/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

//! Tests for the status seed, schema reset and configuration

mod common;

use clap::Parser;
use common::*;
use domain::database::{database_url, reset_schema};
use domain::input::*;
use domain::requests::list_statuses;
use domain::types::*;
use entity::request_status::Status;
use sea_orm::{EntityTrait, Iterable, PaginatorTrait};

#[tokio::test]
async fn test_status_lookup_is_seeded_from_enum() {
    let db = setup_db().await;

    let statuses = list_statuses(&db).await.unwrap();
    assert_eq!(statuses.len(), Status::iter().count());

    for (row, status) in statuses.iter().zip(Status::iter()) {
        assert_eq!(row.id, status.code());
        assert_eq!(row.description, status.name());
    }

    assert_eq!(statuses.last().unwrap().description, "Reaberto");
}

#[tokio::test]
async fn test_reset_refused_in_production() {
    let db = setup_db().await;
    department(&db, "TI").await;

    let err = reset_schema(&db, Environment::Production).await.unwrap_err();
    assert!(err.to_string().contains("Refusing"));

    assert_eq!(EDepartment::find().count(&db).await.unwrap(), 1);
}

#[tokio::test]
async fn test_reset_in_development() {
    let db = setup_db().await;
    let ti = department(&db, "TI").await;
    report(&db, "Falha de rede", ti.id).await;

    reset_schema(&db, Environment::Development).await.unwrap();

    assert_eq!(EDepartment::find().count(&db).await.unwrap(), 0);
    assert_eq!(EReport::find().count(&db).await.unwrap(), 0);
    assert_eq!(ERequestStatus::find().count(&db).await.unwrap(), 9);
}

#[test]
fn test_cli_defaults() {
    let cli = Cli::parse_from(["registro-server", "--database-url", "sqlite::memory:"]);

    assert_eq!(cli.port, 3000);
    assert_eq!(cli.max_connections, 10);
    assert_eq!(cli.environment, Environment::Production);
    assert!(!cli.reset_database);
    assert!(!cli.seed_demo_requests);
    assert_eq!(database_url(&cli).unwrap(), "sqlite::memory:");
}

#[test]
fn test_cli_rejects_invalid_values() {
    assert!(Cli::try_parse_from(["registro-server", "--port", "0"]).is_err());
    assert!(Cli::try_parse_from(["registro-server", "--max-connections", "0"]).is_err());
    assert!(Cli::try_parse_from(["registro-server", "--environment", "staging"]).is_err());
}

#[test]
fn test_database_url_file_wins() {
    let path = std::env::temp_dir().join(format!("registro-db-url-{}", std::process::id()));
    std::fs::write(&path, "sqlite::memory:\n").unwrap();

    let cli = Cli::parse_from([
        "registro-server",
        "--database-url",
        "postgres://ignored",
        "--database-url-file",
        path.to_str().unwrap(),
    ]);
    assert_eq!(database_url(&cli).unwrap(), "sqlite::memory:");

    std::fs::remove_file(&path).unwrap();
}

#[test]
fn test_input_checks() {
    assert_eq!(port_in_range("8080"), Ok(8080));
    assert!(port_in_range("0").is_err());
    assert!(port_in_range("70000").is_err());
    assert!(port_in_range("http").is_err());

    assert_eq!(greater_than_zero::<u32>("5"), Ok(5));
    assert!(greater_than_zero::<u32>("0").is_err());
    assert!(greater_than_zero::<i32>("-1").is_err());

    assert_eq!(check_required("name", "TI"), Ok(()));
    assert_eq!(
        check_required("name", " \t"),
        Err(InputError::Required("name"))
    );
}
