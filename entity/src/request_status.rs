/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use sea_orm::Iterable;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Business status of a request.
///
/// Each member has a row with the same id in the `request_status` lookup
/// table. The seed rows are generated from [`Status::iter`], so adding a
/// member here is the only step needed to extend the lookup.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, EnumIter)]
#[repr(i32)]
pub enum Status {
    Novo = 1,
    EmAndamento = 2,
    Cancelado = 3,
    Pendente = 4,
    Resolvido = 5,
    Finalizado = 6,
    EmAnalise = 7,
    Recusado = 8,
    Reaberto = 9,
}

impl Status {
    pub fn code(self) -> i32 {
        self as i32
    }

    /// Symbolic name, also used as the lookup row description.
    pub fn name(self) -> &'static str {
        match self {
            Status::Novo => "Novo",
            Status::EmAndamento => "EmAndamento",
            Status::Cancelado => "Cancelado",
            Status::Pendente => "Pendente",
            Status::Resolvido => "Resolvido",
            Status::Finalizado => "Finalizado",
            Status::EmAnalise => "EmAnalise",
            Status::Recusado => "Recusado",
            Status::Reaberto => "Reaberto",
        }
    }

    pub fn from_code(code: i32) -> Option<Self> {
        Status::iter().find(|status| status.code() == code)
    }
}

impl std::str::FromStr for Status {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Status::iter()
            .find(|status| status.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("Unknown status: {}", s))
    }
}

impl std::convert::TryFrom<i32> for Status {
    type Error = String;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        Status::from_code(code).ok_or_else(|| format!("Unknown status code: {}", code))
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Deserialize, Serialize)]
#[sea_orm(table_name = "request_status")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i32,
    #[sea_orm(column_type = "String(StringLen::N(200))")]
    pub description: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::request::Entity")]
    Request,
}

impl Related<super::request::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Request.def()
    }
}

impl Model {
    /// Lookup row for a status, as seeded at schema creation.
    pub fn seed(status: Status) -> Self {
        Self {
            id: status.code(),
            description: status.name().to_string(),
        }
    }

    pub fn status(&self) -> Option<Status> {
        Status::from_code(self.id)
    }
}

impl ActiveModelBehavior for ActiveModel {}
