/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use crate::error::WebResult;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::Json;
use domain::departments::{self, NewDepartment, NewReport};
use domain::types::*;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

fn default_active() -> bool {
    true
}

#[derive(Serialize, Deserialize, Debug)]
pub struct MakeDepartmentRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default = "default_active")]
    pub active: bool,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct MakeReportRequest {
    #[serde(default)]
    pub title: String,
    pub description: Option<String>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct ReportItem {
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct CreatedDepartment {
    pub id: i32,
    pub name: String,
    pub active: bool,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct DepartmentResponse {
    pub id: i32,
    pub name: String,
    pub active: bool,
    pub reports: Vec<ReportItem>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct DepartmentReportsResponse {
    pub id: i32,
    pub reports: Vec<ReportItem>,
}

impl From<MReport> for ReportItem {
    fn from(report: MReport) -> Self {
        Self {
            id: report.id,
            title: report.title,
            description: report.description,
        }
    }
}

impl From<MDepartment> for CreatedDepartment {
    fn from(department: MDepartment) -> Self {
        Self {
            id: department.id,
            name: department.name,
            active: department.active,
        }
    }
}

impl From<(MDepartment, Vec<MReport>)> for DepartmentResponse {
    fn from((department, reports): (MDepartment, Vec<MReport>)) -> Self {
        Self {
            id: department.id,
            name: department.name,
            active: department.active,
            reports: reports.into_iter().map(ReportItem::from).collect(),
        }
    }
}

pub async fn get(
    state: State<Arc<ServerState>>,
) -> WebResult<Json<BaseResponse<Vec<DepartmentResponse>>>> {
    let departments = departments::list_departments(&state.db).await?;

    let res = BaseResponse {
        error: false,
        message: departments
            .into_iter()
            .map(DepartmentResponse::from)
            .collect(),
    };

    Ok(Json(res))
}

pub async fn post(
    state: State<Arc<ServerState>>,
    body: Result<Json<MakeDepartmentRequest>, JsonRejection>,
) -> WebResult<Json<BaseResponse<CreatedDepartment>>> {
    let Json(body) = body?;

    let department = departments::create_department(
        &state.db,
        NewDepartment {
            name: body.name,
            active: body.active,
        },
    )
    .await?;

    let res = BaseResponse {
        error: false,
        message: department.into(),
    };

    Ok(Json(res))
}

pub async fn get_department(
    state: State<Arc<ServerState>>,
    Path(department_id): Path<i32>,
) -> WebResult<Json<BaseResponse<DepartmentResponse>>> {
    let department = departments::get_department(&state.db, department_id).await?;

    let res = BaseResponse {
        error: false,
        message: department.into(),
    };

    Ok(Json(res))
}

pub async fn delete_department(
    state: State<Arc<ServerState>>,
    Path(department_id): Path<i32>,
) -> WebResult<Json<BaseResponse<String>>> {
    departments::delete_department(&state.db, department_id).await?;

    let res = BaseResponse {
        error: false,
        message: "Department deleted".to_string(),
    };

    Ok(Json(res))
}

pub async fn post_department_reports(
    state: State<Arc<ServerState>>,
    Path(department_id): Path<i32>,
    body: Result<Json<Vec<MakeReportRequest>>, JsonRejection>,
) -> WebResult<Json<BaseResponse<DepartmentReportsResponse>>> {
    let Json(body) = body?;

    let reports = body
        .into_iter()
        .map(|report| NewReport {
            title: report.title,
            description: report.description,
        })
        .collect();

    let reports = departments::add_reports_to_department(&state.db, department_id, reports).await?;

    let res = BaseResponse {
        error: false,
        message: DepartmentReportsResponse {
            id: department_id,
            reports: reports.into_iter().map(ReportItem::from).collect(),
        },
    };

    Ok(Json(res))
}

pub async fn get_department_linked_reports(
    state: State<Arc<ServerState>>,
    Path(department_id): Path<i32>,
) -> WebResult<Json<BaseResponse<Vec<ReportItem>>>> {
    let reports = departments::linked_reports(&state.db, department_id).await?;

    let res = BaseResponse {
        error: false,
        message: reports.into_iter().map(ReportItem::from).collect(),
    };

    Ok(Json(res))
}
