/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use super::input::InputError;
use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DataError {
    #[error(transparent)]
    Validation(#[from] InputError),
    #[error("{0} not found")]
    NotFound(&'static str),
    /// A foreign key or unique constraint rejected the write. The surrounding
    /// transaction has been rolled back.
    #[error("referential integrity violation: {0}")]
    Integrity(String),
    #[error(transparent)]
    Database(DbErr),
}

impl From<DbErr> for DataError {
    fn from(err: DbErr) -> Self {
        match err.sql_err() {
            Some(SqlErr::ForeignKeyConstraintViolation(msg)) => DataError::Integrity(msg),
            Some(SqlErr::UniqueConstraintViolation(msg)) => DataError::Integrity(msg),
            _ if is_foreign_key_message(&err) => DataError::Integrity(err.to_string()),
            _ => DataError::Database(err),
        }
    }
}

fn is_foreign_key_message(err: &DbErr) -> bool {
    let message = err.to_string().to_lowercase();
    message.contains("foreign key constraint")
}

pub type DataResult<T> = Result<T, DataError>;
