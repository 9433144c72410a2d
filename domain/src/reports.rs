/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use super::error::{DataError, DataResult};
use super::input::{InputError, check_required};
use super::model::Report;
use super::types::*;
use entity::department;
use entity::report::LinkedDepartments;
use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, ModelTrait,
    QueryFilter, QueryOrder, TransactionTrait,
};

#[derive(Clone, Debug)]
pub struct NewStandaloneReport {
    pub title: String,
    pub description: Option<String>,
    pub department_id: Option<i32>,
}

/// Reports with their primary department.
pub async fn list_reports<C: ConnectionTrait>(
    db: &C,
) -> DataResult<Vec<(MReport, Option<MDepartment>)>> {
    let reports = EReport::find()
        .order_by_asc(CReport::Id)
        .find_also_related(department::Entity)
        .all(db)
        .await?;

    Ok(reports)
}

pub async fn get_report<C: ConnectionTrait>(
    db: &C,
    id: i32,
) -> DataResult<(MReport, Option<MDepartment>)> {
    EReport::find_by_id(id)
        .find_also_related(department::Entity)
        .one(db)
        .await?
        .ok_or(DataError::NotFound("Report"))
}

/// Validates title and primary department before anything is written. An
/// unknown department is a validation failure here, unlike an edge added
/// through [`Report::add_department`], which only fails on save.
pub async fn create_report(
    db: &DatabaseConnection,
    new: NewStandaloneReport,
) -> DataResult<MReport> {
    check_required("title", &new.title)?;

    let department_id = new.department_id.ok_or(InputError::Required("department_id"))?;

    let department = EDepartment::find_by_id(department_id).one(db).await?;
    if department.is_none() {
        return Err(InputError::Invalid(format!("department {} does not exist", department_id)).into());
    }

    let txn = db.begin().await?;

    let areport = AReport {
        id: NotSet,
        title: Set(new.title),
        description: Set(new.description),
        department_id: Set(department_id),
    };

    let report = areport.insert(&txn).await?;
    txn.commit().await?;

    tracing::info!("Created report {} in department {}", report.id, department_id);
    Ok(report)
}

pub async fn load_report<C: ConnectionTrait>(db: &C, id: i32) -> DataResult<Report> {
    let report = EReport::find_by_id(id)
        .one(db)
        .await?
        .ok_or(DataError::NotFound("Report"))?;

    let edges = EDepartmentReport::find()
        .filter(CDepartmentReport::ReportId.eq(id))
        .order_by_asc(CDepartmentReport::Id)
        .all(db)
        .await?;

    Ok(Report::new(report, edges))
}

/// Persists pending edge changes of `report` in one transaction. Edges to
/// departments that do not exist fail here with [`DataError::Integrity`].
pub async fn save_report_links(db: &DatabaseConnection, report: &mut Report) -> DataResult<()> {
    if !report.links().has_changes() {
        return Ok(());
    }

    let txn = db.begin().await?;
    report.save_links(&txn).await?;
    txn.commit().await?;

    Ok(())
}

/// Departments reached through the join table, independent of the primary
/// department.
pub async fn linked_departments<C: ConnectionTrait>(
    db: &C,
    id: i32,
) -> DataResult<Vec<MDepartment>> {
    let report = EReport::find_by_id(id)
        .one(db)
        .await?
        .ok_or(DataError::NotFound("Report"))?;

    let departments = report
        .find_linked(LinkedDepartments)
        .order_by_asc(CDepartment::Id)
        .all(db)
        .await?;

    Ok(departments)
}
