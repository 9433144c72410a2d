/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use super::links::LinkSet;
use crate::types::*;
use sea_orm::{ConnectionTrait, DbErr};

/// A persisted department together with its report edges.
#[derive(Clone, Debug)]
pub struct Department {
    pub id: i32,
    pub name: String,
    pub active: bool,
    links: LinkSet,
}

impl Department {
    pub fn new(model: MDepartment, edges: Vec<MDepartmentReport>) -> Self {
        let edges = edges
            .into_iter()
            .filter(|edge| edge.department_id == model.id)
            .collect();

        Self {
            id: model.id,
            name: model.name,
            active: model.active,
            links: LinkSet::new(edges),
        }
    }

    pub fn add_report(&mut self, report_id: i32) -> &mut Self {
        self.links.insert(report_id, self.id);
        self
    }

    pub fn remove_report(&mut self, report_id: i32) -> &mut Self {
        self.links.remove(report_id, self.id);
        self
    }

    pub fn clear_reports(&mut self) -> &mut Self {
        self.links.clear();
        self
    }

    pub fn reports(&self) -> impl Iterator<Item = i32> + Clone + '_ {
        self.links.iter().map(|link| link.report_id)
    }

    pub fn links(&self) -> &LinkSet {
        &self.links
    }

    pub async fn save_links<C: ConnectionTrait>(&mut self, db: &C) -> Result<(), DbErr> {
        self.links.save(db).await
    }
}
