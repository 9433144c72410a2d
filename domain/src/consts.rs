/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use entity::request::Priority;
use entity::request_status::Status;
use std::ops::RangeInclusive;

pub const PORT_RANGE: RangeInclusive<usize> = 1..=65535;

/// Rows inserted by `GET /api/requests` when `--seed-demo-requests` is on.
pub const DEMO_REQUESTS: [(Status, Priority); 2] = [
    (Status::Resolvido, Priority::Alta),
    (Status::Finalizado, Priority::Urgente),
];
