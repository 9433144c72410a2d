/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use crate::error::{WebError, WebResult};
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::Json;
use domain::model::Request;
use domain::requests;
use domain::types::*;
use entity::request::Priority;
use entity::request_status::Status;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Serialize, Deserialize, Debug)]
pub struct MakeRequestRequest {
    pub status: String,
    pub priority: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct PatchRequestRequest {
    pub status: Option<String>,
    pub priority: Option<String>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct RequestResponse {
    pub id: Option<i32>,
    /// `None` when the stored code has no status member.
    pub status: Option<String>,
    pub status_code: i32,
    pub priority: String,
    pub priority_label: String,
}

impl From<&Request> for RequestResponse {
    fn from(request: &Request) -> Self {
        Self {
            id: request.id(),
            status: request.status().map(|status| status.name().to_string()),
            status_code: request.status_code(),
            priority: request.priority().name(),
            priority_label: request.priority().label().to_string(),
        }
    }
}

fn parse_status(value: &str) -> WebResult<Status> {
    value
        .parse()
        .map_err(|e| WebError::invalid_value("status", e))
}

fn parse_priority(value: &str) -> WebResult<Priority> {
    Priority::from_label(value).map_err(|e| WebError::invalid_value("priority", e))
}

pub async fn get(
    state: State<Arc<ServerState>>,
) -> WebResult<Json<BaseResponse<Vec<RequestResponse>>>> {
    if state.cli.seed_demo_requests {
        requests::seed_demo_requests(&state.db).await?;
    }

    let requests = requests::list_requests(&state.db).await?;

    let res = BaseResponse {
        error: false,
        message: requests.iter().map(RequestResponse::from).collect(),
    };

    Ok(Json(res))
}

pub async fn post(
    state: State<Arc<ServerState>>,
    body: Result<Json<MakeRequestRequest>, JsonRejection>,
) -> WebResult<Json<BaseResponse<RequestResponse>>> {
    let Json(body) = body?;

    let status = parse_status(&body.status)?;
    let priority = parse_priority(&body.priority)?;

    let request = requests::create_request(&state.db, status, priority).await?;

    let res = BaseResponse {
        error: false,
        message: RequestResponse::from(&request),
    };

    Ok(Json(res))
}

pub async fn get_request(
    state: State<Arc<ServerState>>,
    Path(request_id): Path<i32>,
) -> WebResult<Json<BaseResponse<RequestResponse>>> {
    let request = requests::get_request(&state.db, request_id).await?;

    let res = BaseResponse {
        error: false,
        message: RequestResponse::from(&request),
    };

    Ok(Json(res))
}

pub async fn patch_request(
    state: State<Arc<ServerState>>,
    Path(request_id): Path<i32>,
    body: Result<Json<PatchRequestRequest>, JsonRejection>,
) -> WebResult<Json<BaseResponse<RequestResponse>>> {
    let Json(body) = body?;

    let status = body.status.as_deref().map(parse_status).transpose()?;
    let priority = body.priority.as_deref().map(parse_priority).transpose()?;

    let request = requests::update_request(&state.db, request_id, status, priority).await?;

    let res = BaseResponse {
        error: false,
        message: RequestResponse::from(&request),
    };

    Ok(Json(res))
}

pub async fn delete_request(
    state: State<Arc<ServerState>>,
    Path(request_id): Path<i32>,
) -> WebResult<Json<BaseResponse<String>>> {
    requests::delete_request(&state.db, request_id).await?;

    let res = BaseResponse {
        error: false,
        message: "Request deleted".to_string(),
    };

    Ok(Json(res))
}
