/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Deserialize, Serialize)]
#[sea_orm(table_name = "department")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub active: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Reports whose primary department is this one.
    #[sea_orm(has_many = "super::report::Entity")]
    Report,
    #[sea_orm(has_many = "super::department_report::Entity")]
    DepartmentReport,
}

impl Related<super::report::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Report.def()
    }
}

impl Related<super::department_report::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DepartmentReport.def()
    }
}

/// Reports reached through the `department_report` join rows.
///
/// `Related<report::Entity>` already points at the primary foreign key, so the
/// many-to-many path is exposed as a separate link.
#[derive(Debug)]
pub struct LinkedReports;

impl Linked for LinkedReports {
    type FromEntity = Entity;
    type ToEntity = super::report::Entity;

    fn link(&self) -> Vec<RelationDef> {
        vec![
            super::department_report::Relation::Department.def().rev(),
            super::department_report::Relation::Report.def(),
        ]
    }
}

impl ActiveModelBehavior for ActiveModel {}
