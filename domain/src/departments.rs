/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use super::error::{DataError, DataResult};
use super::input::{InputError, check_required};
use super::model::Department;
use super::types::*;
use entity::department::LinkedReports;
use entity::report;
use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, ModelTrait,
    QueryFilter, QueryOrder, TransactionTrait,
};

#[derive(Clone, Debug)]
pub struct NewDepartment {
    pub name: String,
    pub active: bool,
}

#[derive(Clone, Debug)]
pub struct NewReport {
    pub title: String,
    pub description: Option<String>,
}

/// Departments with the reports whose primary department they are.
pub async fn list_departments<C: ConnectionTrait>(
    db: &C,
) -> DataResult<Vec<(MDepartment, Vec<MReport>)>> {
    let departments = EDepartment::find()
        .order_by_asc(CDepartment::Id)
        .find_with_related(report::Entity)
        .order_by_asc(CReport::Id)
        .all(db)
        .await?;

    Ok(departments)
}

pub async fn get_department<C: ConnectionTrait>(
    db: &C,
    id: i32,
) -> DataResult<(MDepartment, Vec<MReport>)> {
    let department = EDepartment::find_by_id(id)
        .one(db)
        .await?
        .ok_or(DataError::NotFound("Department"))?;

    let reports = department
        .find_related(report::Entity)
        .order_by_asc(CReport::Id)
        .all(db)
        .await?;

    Ok((department, reports))
}

pub async fn create_department(
    db: &DatabaseConnection,
    new: NewDepartment,
) -> DataResult<MDepartment> {
    check_required("name", &new.name)?;

    let txn = db.begin().await?;

    let adepartment = ADepartment {
        id: NotSet,
        name: Set(new.name),
        active: Set(new.active),
    };

    let department = adepartment.insert(&txn).await?;
    txn.commit().await?;

    tracing::info!("Created department {}", department.id);
    Ok(department)
}

/// Creates reports with `id` as their primary department. Either all of them
/// are written or none.
pub async fn add_reports_to_department(
    db: &DatabaseConnection,
    id: i32,
    reports: Vec<NewReport>,
) -> DataResult<Vec<MReport>> {
    let department = EDepartment::find_by_id(id)
        .one(db)
        .await?
        .ok_or(DataError::NotFound("Department"))?;

    if reports.is_empty() {
        return Err(InputError::Invalid("report list is empty".to_string()).into());
    }

    for report in &reports {
        check_required("title", &report.title)?;
    }

    let txn = db.begin().await?;

    for report in reports {
        let areport = AReport {
            id: NotSet,
            title: Set(report.title),
            description: Set(report.description),
            department_id: Set(department.id),
        };

        areport.insert(&txn).await?;
    }

    let reports = department
        .find_related(report::Entity)
        .order_by_asc(CReport::Id)
        .all(&txn)
        .await?;

    txn.commit().await?;

    Ok(reports)
}

/// Fails with [`DataError::Integrity`] while reports or edges still reference
/// the department.
pub async fn delete_department(db: &DatabaseConnection, id: i32) -> DataResult<()> {
    let txn = db.begin().await?;

    let department = EDepartment::find_by_id(id)
        .one(&txn)
        .await?
        .ok_or(DataError::NotFound("Department"))?;

    department.delete(&txn).await?;
    txn.commit().await?;

    tracing::info!("Deleted department {}", id);
    Ok(())
}

pub async fn load_department<C: ConnectionTrait>(db: &C, id: i32) -> DataResult<Department> {
    let department = EDepartment::find_by_id(id)
        .one(db)
        .await?
        .ok_or(DataError::NotFound("Department"))?;

    let edges = EDepartmentReport::find()
        .filter(CDepartmentReport::DepartmentId.eq(id))
        .order_by_asc(CDepartmentReport::Id)
        .all(db)
        .await?;

    Ok(Department::new(department, edges))
}

/// Persists pending edge changes of `department` in one transaction.
pub async fn save_department_links(
    db: &DatabaseConnection,
    department: &mut Department,
) -> DataResult<()> {
    if !department.links().has_changes() {
        return Ok(());
    }

    let txn = db.begin().await?;
    department.save_links(&txn).await?;
    txn.commit().await?;

    Ok(())
}

/// Reports reached through the join table.
pub async fn linked_reports<C: ConnectionTrait>(db: &C, id: i32) -> DataResult<Vec<MReport>> {
    let department = EDepartment::find_by_id(id)
        .one(db)
        .await?
        .ok_or(DataError::NotFound("Department"))?;

    let reports = department
        .find_linked(LinkedReports)
        .order_by_asc(CReport::Id)
        .all(db)
        .await?;

    Ok(reports)
}
