/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use super::consts::DEMO_REQUESTS;
use super::error::{DataError, DataResult};
use super::model::Request;
use super::types::*;
use entity::request::Priority;
use entity::request_status::Status;
use sea_orm::{
    ConnectionTrait, DatabaseConnection, DbErr, EntityTrait, ModelTrait, QueryOrder,
    TransactionTrait,
};

pub async fn list_requests<C: ConnectionTrait>(db: &C) -> DataResult<Vec<Request>> {
    let requests = ERequest::find()
        .order_by_asc(CRequest::Id)
        .all(db)
        .await?
        .into_iter()
        .map(Request::from)
        .collect();

    Ok(requests)
}

pub async fn get_request<C: ConnectionTrait>(db: &C, id: i32) -> DataResult<Request> {
    ERequest::find_by_id(id)
        .one(db)
        .await?
        .map(Request::from)
        .ok_or(DataError::NotFound("Request"))
}

/// Inserts or updates `request` in its own transaction. A status code without
/// a lookup row fails here with [`DataError::Integrity`].
pub async fn save_request(db: &DatabaseConnection, request: &mut Request) -> DataResult<()> {
    let txn = db.begin().await?;

    match request.save(&txn).await {
        Ok(()) => {}
        Err(DbErr::RecordNotUpdated) => return Err(DataError::NotFound("Request")),
        Err(err) => return Err(err.into()),
    }

    txn.commit().await?;
    Ok(())
}

pub async fn create_request(
    db: &DatabaseConnection,
    status: Status,
    priority: Priority,
) -> DataResult<Request> {
    let mut request = Request::new(status, priority);
    save_request(db, &mut request).await?;

    tracing::info!(
        "Created request {:?} with status {} and priority {}",
        request.id(),
        status,
        priority.name()
    );
    Ok(request)
}

pub async fn update_request(
    db: &DatabaseConnection,
    id: i32,
    status: Option<Status>,
    priority: Option<Priority>,
) -> DataResult<Request> {
    let mut request = get_request(db, id).await?;

    if let Some(status) = status {
        request.set_status(status);
    }

    if let Some(priority) = priority {
        request.set_priority(priority);
    }

    save_request(db, &mut request).await?;
    Ok(request)
}

pub async fn delete_request(db: &DatabaseConnection, id: i32) -> DataResult<()> {
    let txn = db.begin().await?;

    let request = ERequest::find_by_id(id)
        .one(&txn)
        .await?
        .ok_or(DataError::NotFound("Request"))?;

    request.delete(&txn).await?;
    txn.commit().await?;

    Ok(())
}

/// Inserts the fixture requests in one transaction.
pub async fn seed_demo_requests(db: &DatabaseConnection) -> DataResult<()> {
    let txn = db.begin().await?;

    for (status, priority) in DEMO_REQUESTS {
        Request::new(status, priority).save(&txn).await?;
    }

    txn.commit().await?;
    Ok(())
}

pub async fn list_statuses<C: ConnectionTrait>(db: &C) -> DataResult<Vec<MRequestStatus>> {
    let statuses = ERequestStatus::find()
        .order_by_asc(CRequestStatus::Id)
        .all(db)
        .await?;

    Ok(statuses)
}
