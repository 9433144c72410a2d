/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use super::links::LinkSet;
use crate::types::*;
use sea_orm::{ConnectionTrait, DbErr};

/// A persisted report together with its department edges.
///
/// `department_id` is the primary department (foreign key on the report row).
/// The edges are a separate many-to-many relation and do not have to include
/// it.
#[derive(Clone, Debug)]
pub struct Report {
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
    pub department_id: i32,
    links: LinkSet,
}

impl Report {
    pub fn new(model: MReport, edges: Vec<MDepartmentReport>) -> Self {
        let edges = edges
            .into_iter()
            .filter(|edge| edge.report_id == model.id)
            .collect();

        Self {
            id: model.id,
            title: model.title,
            description: model.description,
            department_id: model.department_id,
            links: LinkSet::new(edges),
        }
    }

    /// Links a department. Calling it again with the same id is a no-op.
    pub fn add_department(&mut self, department_id: i32) -> &mut Self {
        self.links.insert(self.id, department_id);
        self
    }

    /// Unlinks a department. Unknown ids are ignored.
    pub fn remove_department(&mut self, department_id: i32) -> &mut Self {
        self.links.remove(self.id, department_id);
        self
    }

    pub fn clear_departments(&mut self) -> &mut Self {
        self.links.clear();
        self
    }

    /// Ids of the linked departments, in insertion order.
    pub fn departments(&self) -> impl Iterator<Item = i32> + Clone + '_ {
        self.links.iter().map(|link| link.department_id)
    }

    pub fn links(&self) -> &LinkSet {
        &self.links
    }

    pub async fn save_links<C: ConnectionTrait>(&mut self, db: &C) -> Result<(), DbErr> {
        self.links.save(db).await
    }
}
