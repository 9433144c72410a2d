/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

pub mod department;
pub mod department_report;
pub mod report;
pub mod request;
pub mod request_status;
