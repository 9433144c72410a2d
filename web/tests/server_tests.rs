/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

mod common;

use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::{Value, json};

#[tokio::test]
async fn test_health() {
    let server = TestServer::new(web::create_router(common::create_mock_state())).unwrap();

    let res = server.get("/api/health").await;
    res.assert_status_ok();
    res.assert_json(&json!({ "error": false, "message": "200 ALIVE" }));
}

#[tokio::test]
async fn test_unknown_route() {
    let server = TestServer::new(web::create_router(common::create_mock_state())).unwrap();

    let res = server.get("/api/unknown").await;
    res.assert_status(StatusCode::NOT_FOUND);

    let body: Value = res.json();
    assert_eq!(body["error"], true);
}

#[tokio::test]
async fn test_lookups() {
    let server = common::create_test_server().await;

    let res = server.get("/api/statuses").await;
    res.assert_status_ok();
    let body: Value = res.json();
    let statuses = body["message"].as_array().unwrap();
    assert_eq!(statuses.len(), 9);
    assert_eq!(statuses[0], json!({ "id": 1, "description": "Novo" }));
    assert_eq!(statuses[8], json!({ "id": 9, "description": "Reaberto" }));

    let res = server.get("/api/priorities").await;
    res.assert_status_ok();
    let body: Value = res.json();
    assert_eq!(
        body["message"][1],
        json!({ "code": 2, "name": "Media", "label": "Média Prioridade" })
    );
}

#[test]
fn test_data_errors_map_to_status_codes() {
    use axum::response::IntoResponse;
    use domain::error::DataError;
    use domain::input::InputError;
    use web::error::WebError;

    let status = |err: DataError| WebError::from(err).into_response().status();

    assert_eq!(
        status(DataError::Validation(InputError::Required("name"))),
        StatusCode::BAD_REQUEST
    );
    assert_eq!(status(DataError::NotFound("Report")), StatusCode::NOT_FOUND);
    assert_eq!(
        status(DataError::Integrity("FOREIGN KEY constraint failed".to_string())),
        StatusCode::CONFLICT
    );
    assert_eq!(
        status(DataError::Database(sea_orm::DbErr::Custom("boom".to_string()))),
        StatusCode::INTERNAL_SERVER_ERROR
    );
}
