/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Deserialize, Serialize)]
#[sea_orm(table_name = "report")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
    pub department_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::department::Entity",
        from = "Column::DepartmentId",
        to = "super::department::Column::Id",
        on_delete = "Restrict"
    )]
    Department,
    #[sea_orm(has_many = "super::department_report::Entity")]
    DepartmentReport,
}

impl Related<super::department::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Department.def()
    }
}

impl Related<super::department_report::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DepartmentReport.def()
    }
}

/// Departments reached through the `department_report` join rows, independent
/// of the primary `department_id`.
#[derive(Debug)]
pub struct LinkedDepartments;

impl Linked for LinkedDepartments {
    type FromEntity = Entity;
    type ToEntity = super::department::Entity;

    fn link(&self) -> Vec<RelationDef> {
        vec![
            super::department_report::Relation::Report.def().rev(),
            super::department_report::Relation::Department.def(),
        ]
    }
}

impl ActiveModelBehavior for ActiveModel {}
