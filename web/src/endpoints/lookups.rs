/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use crate::error::WebResult;
use axum::extract::State;
use axum::Json;
use domain::requests::list_statuses;
use domain::types::*;
use entity::request::Priority;
use sea_orm::Iterable;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Serialize, Deserialize, Debug)]
pub struct StatusItem {
    pub id: i32,
    pub description: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct PriorityItem {
    pub code: i32,
    pub name: String,
    pub label: String,
}

pub async fn get_statuses(
    state: State<Arc<ServerState>>,
) -> WebResult<Json<BaseResponse<Vec<StatusItem>>>> {
    let statuses = list_statuses(&state.db)
        .await?
        .into_iter()
        .map(|status| StatusItem {
            id: status.id,
            description: status.description,
        })
        .collect();

    let res = BaseResponse {
        error: false,
        message: statuses,
    };

    Ok(Json(res))
}

pub async fn get_priorities() -> WebResult<Json<BaseResponse<Vec<PriorityItem>>>> {
    let priorities = Priority::iter()
        .map(|priority| PriorityItem {
            code: priority.code(),
            name: priority.name(),
            label: priority.label().to_string(),
        })
        .collect();

    let res = BaseResponse {
        error: false,
        message: priorities,
    };

    Ok(Json(res))
}
