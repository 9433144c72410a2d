/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

pub mod endpoints;
pub mod error;

use axum::Router;
use axum::routing::{get, post, put};
use domain::types::{Environment, ServerState};
use http::header::{ACCEPT, CONTENT_TYPE};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;

pub fn create_router(state: Arc<ServerState>) -> Router {
    let app = Router::new()
        .route(
            "/api/departments",
            get(endpoints::departments::get).post(endpoints::departments::post),
        )
        .route(
            "/api/departments/{department}",
            get(endpoints::departments::get_department)
                .delete(endpoints::departments::delete_department),
        )
        .route(
            "/api/departments/{department}/reports",
            post(endpoints::departments::post_department_reports),
        )
        .route(
            "/api/departments/{department}/linked-reports",
            get(endpoints::departments::get_department_linked_reports),
        )
        .route(
            "/api/reports",
            get(endpoints::reports::get).post(endpoints::reports::post),
        )
        .route("/api/reports/{report}", get(endpoints::reports::get_report))
        .route(
            "/api/reports/{report}/departments",
            get(endpoints::reports::get_report_departments)
                .delete(endpoints::reports::delete_report_departments),
        )
        .route(
            "/api/reports/{report}/departments/{department}",
            put(endpoints::reports::put_report_department)
                .delete(endpoints::reports::delete_report_department),
        )
        .route(
            "/api/requests",
            get(endpoints::requests::get).post(endpoints::requests::post),
        )
        .route(
            "/api/requests/{request}",
            get(endpoints::requests::get_request)
                .patch(endpoints::requests::patch_request)
                .delete(endpoints::requests::delete_request),
        )
        .route("/api/statuses", get(endpoints::lookups::get_statuses))
        .route("/api/priorities", get(endpoints::lookups::get_priorities))
        .route("/api/health", get(endpoints::get_health))
        .fallback(endpoints::handle_404);

    let app = if state.cli.environment == Environment::Development {
        app.layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_headers(vec![ACCEPT, CONTENT_TYPE]),
        )
    } else {
        app
    };

    app.layer(
        TraceLayer::new_for_http()
            .on_request(DefaultOnRequest::new().level(Level::INFO))
            .on_response(DefaultOnResponse::new().level(Level::INFO)),
    )
    .with_state(state)
}

pub async fn serve_web(state: Arc<ServerState>) -> std::io::Result<()> {
    let server_url = format!("{}:{}", state.cli.ip, state.cli.port);
    let app = create_router(Arc::clone(&state));

    let listener = tokio::net::TcpListener::bind(&server_url).await?;
    tracing::info!("Listening on {}", server_url);

    axum::serve(listener, app).await
}
