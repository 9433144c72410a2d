/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use sea_orm::entity::prelude::*;
use sea_orm::{ActiveEnum, Iterable};
use serde::{Deserialize, Serialize};

/// Request priority, persisted as its symbolic name (`"Baixa"`, never the
/// label and never the numeric code).
#[derive(
    Copy, Clone, Debug, PartialEq, Eq, Hash, DeriveActiveEnum, EnumIter, Deserialize, Serialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
pub enum Priority {
    #[sea_orm(string_value = "Baixa")]
    Baixa,
    #[sea_orm(string_value = "Media")]
    Media,
    #[sea_orm(string_value = "Alta")]
    Alta,
    #[sea_orm(string_value = "Urgente")]
    Urgente,
}

impl Priority {
    pub fn code(self) -> i32 {
        match self {
            Priority::Baixa => 1,
            Priority::Media => 2,
            Priority::Alta => 3,
            Priority::Urgente => 4,
        }
    }

    /// Symbolic name, the value stored in the `priority` column.
    pub fn name(self) -> String {
        self.to_value()
    }

    /// Human readable label. Presentation only.
    pub fn label(self) -> &'static str {
        match self {
            Priority::Baixa => "Baixa Prioridade",
            Priority::Media => "Média Prioridade",
            Priority::Alta => "Alta Prioridade",
            Priority::Urgente => "Urgente",
        }
    }

    /// Accepts either the label or the symbolic name, ignoring case.
    pub fn from_label(s: &str) -> Result<Self, String> {
        Priority::iter()
            .find(|priority| {
                priority.label().to_lowercase() == s.to_lowercase()
                    || priority.name().eq_ignore_ascii_case(s)
            })
            .ok_or_else(|| format!("Unknown priority: {}", s))
    }
}

impl std::str::FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Priority::try_from_value(&s.to_string()).map_err(|_| format!("Unknown priority: {}", s))
    }
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Deserialize, Serialize)]
#[sea_orm(table_name = "request")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Foreign key into `request_status`. Callers go through the `Request`
    /// aggregate in `domain`, which exposes it as a `Status`.
    #[sea_orm(column_name = "id_status")]
    pub status_id: i32,
    pub priority: Priority,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::request_status::Entity",
        from = "Column::StatusId",
        to = "super::request_status::Column::Id",
        on_delete = "Restrict"
    )]
    RequestStatus,
}

impl Related<super::request_status::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RequestStatus.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
