/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use crate::types::*;
use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::{ActiveModelTrait, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter};
use serde::Serialize;

/// One department/report edge. `id` is `None` until the edge is saved.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Link {
    pub id: Option<i32>,
    pub report_id: i32,
    pub department_id: i32,
}

impl From<MDepartmentReport> for Link {
    fn from(model: MDepartmentReport) -> Self {
        Self {
            id: Some(model.id),
            report_id: model.report_id,
            department_id: model.department_id,
        }
    }
}

/// Duplicate-free set of edges with pending changes.
///
/// Edges hold raw ids; nothing here checks that either side exists. A dangling
/// id is rejected by the store when [`LinkSet::save`] runs.
///
/// Concurrent inserts can leave the same pair stored twice. Extra rows found
/// on load are queued for deletion, so the next save collapses them.
#[derive(Clone, Debug, Default)]
pub struct LinkSet {
    links: Vec<Link>,
    removed: Vec<i32>,
}

impl LinkSet {
    pub fn new(rows: Vec<MDepartmentReport>) -> Self {
        let mut set = Self::default();

        for row in rows {
            if set.contains(row.report_id, row.department_id) {
                set.removed.push(row.id);
                continue;
            }
            set.links.push(row.into());
        }

        set
    }

    pub fn contains(&self, report_id: i32, department_id: i32) -> bool {
        self.links
            .iter()
            .any(|l| l.report_id == report_id && l.department_id == department_id)
    }

    /// Returns `false` when the edge was already present.
    pub fn insert(&mut self, report_id: i32, department_id: i32) -> bool {
        if self.contains(report_id, department_id) {
            return false;
        }

        self.links.push(Link {
            id: None,
            report_id,
            department_id,
        });

        true
    }

    /// Returns `false` when there was no such edge.
    pub fn remove(&mut self, report_id: i32, department_id: i32) -> bool {
        let Some(index) = self
            .links
            .iter()
            .position(|l| l.report_id == report_id && l.department_id == department_id)
        else {
            return false;
        };

        let link = self.links.remove(index);
        if let Some(id) = link.id {
            self.removed.push(id);
        }

        true
    }

    pub fn clear(&mut self) {
        self.removed
            .extend(self.links.drain(..).filter_map(|link| link.id));
    }

    pub fn iter(&self) -> impl Iterator<Item = &Link> + Clone {
        self.links.iter()
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    pub fn has_changes(&self) -> bool {
        !self.removed.is_empty() || self.links.iter().any(|l| l.id.is_none())
    }

    /// Writes removed and new edges. Run it inside a transaction: a failing
    /// insert leaves earlier statements to be rolled back by the caller.
    pub async fn save<C: ConnectionTrait>(&mut self, db: &C) -> Result<(), DbErr> {
        if !self.removed.is_empty() {
            EDepartmentReport::delete_many()
                .filter(CDepartmentReport::Id.is_in(self.removed.clone()))
                .exec(db)
                .await?;
        }

        let mut inserted = Vec::new();
        for (index, link) in self.links.iter().enumerate() {
            if link.id.is_some() {
                continue;
            }

            let alink = ADepartmentReport {
                id: NotSet,
                report_id: Set(link.report_id),
                department_id: Set(link.department_id),
            };

            let row = alink.insert(db).await?;
            inserted.push((index, row.id));
        }

        for (index, id) in inserted {
            self.links[index].id = Some(id);
        }
        self.removed.clear();

        Ok(())
    }
}
