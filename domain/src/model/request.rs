/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use crate::types::*;
use entity::request::Priority;
use entity::request_status::Status;
use sea_orm::ActiveValue::{NotSet, Set, Unchanged};
use sea_orm::{ActiveModelTrait, ConnectionTrait, DbErr};

/// A request with typed status and priority.
///
/// The status is held as the raw lookup id, the same value stored in the
/// `id_status` column. Any integer is accepted in memory; the foreign key to
/// `request_status` decides on save whether it is valid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Request {
    id: Option<i32>,
    status_id: i32,
    priority: Priority,
}

impl Request {
    pub fn new(status: Status, priority: Priority) -> Self {
        Self {
            id: None,
            status_id: status.code(),
            priority,
        }
    }

    pub fn id(&self) -> Option<i32> {
        self.id
    }

    /// `None` when the stored code has no `Status` member.
    pub fn status(&self) -> Option<Status> {
        Status::from_code(self.status_id)
    }

    pub fn status_code(&self) -> i32 {
        self.status_id
    }

    pub fn set_status(&mut self, status: Status) -> &mut Self {
        self.status_id = status.code();
        self
    }

    /// Unchecked: no lookup happens until the request is saved.
    pub fn set_status_code(&mut self, code: i32) -> &mut Self {
        self.status_id = code;
        self
    }

    pub fn priority(&self) -> Priority {
        self.priority
    }

    pub fn set_priority(&mut self, priority: Priority) -> &mut Self {
        self.priority = priority;
        self
    }

    /// Inserts the request on first save, updates it afterwards.
    pub async fn save<C: ConnectionTrait>(&mut self, db: &C) -> Result<(), DbErr> {
        let arequest = ARequest {
            id: match self.id {
                Some(id) => Unchanged(id),
                None => NotSet,
            },
            status_id: Set(self.status_id),
            priority: Set(self.priority),
        };

        let request = match self.id {
            Some(_) => arequest.update(db).await?,
            None => arequest.insert(db).await?,
        };

        self.id = Some(request.id);
        Ok(())
    }
}

impl From<MRequest> for Request {
    fn from(model: MRequest) -> Self {
        Self {
            id: Some(model.id),
            status_id: model.status_id,
            priority: model.priority,
        }
    }
}
