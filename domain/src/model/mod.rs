/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

//! Aggregates built on top of the entity models.
//!
//! Department and Report share one edge representation ([`LinkSet`]); each side
//! fixes its own id and varies the other. Request hides its status foreign key
//! behind a typed accessor.

mod department;
mod links;
mod report;
mod request;

pub use department::Department;
pub use links::{Link, LinkSet};
pub use report::Report;
pub use request::Request;
