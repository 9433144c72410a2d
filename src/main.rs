/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use anyhow::Result;
use clap::Parser;
use domain::init_state;
use domain::types::Cli;
use std::sync::Arc;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
pub async fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(cli.log_level.as_str())),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let state = init_state(cli).await?;

    web::serve_web(Arc::clone(&state)).await?;

    Ok(())
}
