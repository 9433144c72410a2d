/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use crate::error::WebResult;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::Json;
use domain::model::Report;
use domain::reports::{self, NewStandaloneReport};
use domain::types::*;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Serialize, Deserialize, Debug)]
pub struct MakeReportRequest {
    #[serde(default)]
    pub title: String,
    pub description: Option<String>,
    pub department_id: Option<i32>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct DepartmentItem {
    pub id: i32,
    pub name: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct ReportResponse {
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
    pub department: Option<DepartmentItem>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct CreatedReport {
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
    pub department_id: i32,
}

/// Department ids linked to a report through the join table.
#[derive(Serialize, Deserialize, Debug)]
pub struct ReportLinksResponse {
    pub id: i32,
    pub departments: Vec<i32>,
}

impl From<MDepartment> for DepartmentItem {
    fn from(department: MDepartment) -> Self {
        Self {
            id: department.id,
            name: department.name,
        }
    }
}

impl From<(MReport, Option<MDepartment>)> for ReportResponse {
    fn from((report, department): (MReport, Option<MDepartment>)) -> Self {
        Self {
            id: report.id,
            title: report.title,
            description: report.description,
            department: department.map(DepartmentItem::from),
        }
    }
}

impl From<&Report> for ReportLinksResponse {
    fn from(report: &Report) -> Self {
        Self {
            id: report.id,
            departments: report.departments().collect(),
        }
    }
}

pub async fn get(
    state: State<Arc<ServerState>>,
) -> WebResult<Json<BaseResponse<Vec<ReportResponse>>>> {
    let reports = reports::list_reports(&state.db).await?;

    let res = BaseResponse {
        error: false,
        message: reports.into_iter().map(ReportResponse::from).collect(),
    };

    Ok(Json(res))
}

pub async fn post(
    state: State<Arc<ServerState>>,
    body: Result<Json<MakeReportRequest>, JsonRejection>,
) -> WebResult<Json<BaseResponse<CreatedReport>>> {
    let Json(body) = body?;

    let report = reports::create_report(
        &state.db,
        NewStandaloneReport {
            title: body.title,
            description: body.description,
            department_id: body.department_id,
        },
    )
    .await?;

    let res = BaseResponse {
        error: false,
        message: CreatedReport {
            id: report.id,
            title: report.title,
            description: report.description,
            department_id: report.department_id,
        },
    };

    Ok(Json(res))
}

pub async fn get_report(
    state: State<Arc<ServerState>>,
    Path(report_id): Path<i32>,
) -> WebResult<Json<BaseResponse<ReportResponse>>> {
    let report = reports::get_report(&state.db, report_id).await?;

    let res = BaseResponse {
        error: false,
        message: report.into(),
    };

    Ok(Json(res))
}

pub async fn get_report_departments(
    state: State<Arc<ServerState>>,
    Path(report_id): Path<i32>,
) -> WebResult<Json<BaseResponse<Vec<DepartmentItem>>>> {
    let departments = reports::linked_departments(&state.db, report_id).await?;

    let res = BaseResponse {
        error: false,
        message: departments.into_iter().map(DepartmentItem::from).collect(),
    };

    Ok(Json(res))
}

pub async fn put_report_department(
    state: State<Arc<ServerState>>,
    Path((report_id, department_id)): Path<(i32, i32)>,
) -> WebResult<Json<BaseResponse<ReportLinksResponse>>> {
    let mut report = reports::load_report(&state.db, report_id).await?;
    report.add_department(department_id);
    reports::save_report_links(&state.db, &mut report).await?;

    let res = BaseResponse {
        error: false,
        message: ReportLinksResponse::from(&report),
    };

    Ok(Json(res))
}

pub async fn delete_report_department(
    state: State<Arc<ServerState>>,
    Path((report_id, department_id)): Path<(i32, i32)>,
) -> WebResult<Json<BaseResponse<ReportLinksResponse>>> {
    let mut report = reports::load_report(&state.db, report_id).await?;
    report.remove_department(department_id);
    reports::save_report_links(&state.db, &mut report).await?;

    let res = BaseResponse {
        error: false,
        message: ReportLinksResponse::from(&report),
    };

    Ok(Json(res))
}

pub async fn delete_report_departments(
    state: State<Arc<ServerState>>,
    Path(report_id): Path<i32>,
) -> WebResult<Json<BaseResponse<ReportLinksResponse>>> {
    let mut report = reports::load_report(&state.db, report_id).await?;
    report.clear_departments();
    reports::save_report_links(&state.db, &mut report).await?;

    let res = BaseResponse {
        error: false,
        message: ReportLinksResponse::from(&report),
    };

    Ok(Json(res))
}
