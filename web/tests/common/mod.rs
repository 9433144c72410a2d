/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

#![allow(dead_code)]

use axum_test::TestServer;
use domain::types::*;
use migration::Migrator;
use sea_orm::{ConnectOptions, Database, DatabaseBackend, MockDatabase};
use sea_orm_migration::MigratorTrait;
use std::sync::Arc;

pub fn create_mock_cli() -> Cli {
    Cli {
        log_level: "info".to_string(),
        ip: "127.0.0.1".to_string(),
        port: 3000,
        database_url: Some("sqlite::memory:".to_string()),
        database_url_file: None,
        max_connections: 1,
        environment: Environment::Development,
        reset_database: false,
        seed_demo_requests: false,
    }
}

pub fn create_mock_state() -> Arc<ServerState> {
    let cli = create_mock_cli();
    let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();

    Arc::new(ServerState { db, cli })
}

pub async fn create_test_state(cli: Cli) -> Arc<ServerState> {
    let mut opt = ConnectOptions::new("sqlite::memory:");
    opt.max_connections(1)
        .min_connections(1)
        .sqlx_logging(false);

    let db = Database::connect(opt).await.unwrap();
    Migrator::up(&db, None).await.unwrap();

    Arc::new(ServerState { db, cli })
}

pub async fn create_test_server() -> TestServer {
    create_test_server_with(create_mock_cli()).await
}

pub async fn create_test_server_with(cli: Cli) -> TestServer {
    let state = create_test_state(cli).await;
    TestServer::new(web::create_router(state)).unwrap()
}
