/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use super::input::{greater_than_zero, port_in_range};
use clap::{Parser, ValueEnum};
use entity::*;
use sea_orm::DatabaseConnection;
use serde::{Deserialize, Serialize};

#[derive(Parser, Debug, Clone)]
#[command(name = "Registro", display_name = "Registro", bin_name = "registro-server", author = "Wavelens", version, about, long_about = None)]
pub struct Cli {
    #[arg(long, env = "REGISTRO_LOG_LEVEL", default_value = "info")]
    pub log_level: String,
    #[arg(long, env = "REGISTRO_IP", default_value = "127.0.0.1")]
    pub ip: String,
    #[arg(long, env = "REGISTRO_PORT", value_parser = port_in_range, default_value_t = 3000)]
    pub port: u16,
    #[arg(long, env = "REGISTRO_DATABASE_URL")]
    pub database_url: Option<String>,
    #[arg(long, env = "REGISTRO_DATABASE_URL_FILE")]
    pub database_url_file: Option<String>,
    #[arg(long, env = "REGISTRO_MAX_CONNECTIONS", value_parser = greater_than_zero::<u32>, default_value = "10")]
    pub max_connections: u32,
    #[arg(long, env = "REGISTRO_ENVIRONMENT", value_enum, default_value_t = Environment::Production)]
    pub environment: Environment,
    /// Drop and recreate the schema on startup. Only honoured in development.
    #[arg(long, env = "REGISTRO_RESET_DATABASE", default_value = "false")]
    pub reset_database: bool,
    #[arg(long, env = "REGISTRO_SEED_DEMO_REQUESTS", default_value = "false")]
    pub seed_demo_requests: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Environment {
    Development,
    Production,
}

#[derive(Debug)]
pub struct ServerState {
    pub db: DatabaseConnection,
    pub cli: Cli,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct BaseResponse<T> {
    pub error: bool,
    pub message: T,
}

pub type EDepartment = department::Entity;
pub type EDepartmentReport = department_report::Entity;
pub type EReport = report::Entity;
pub type ERequest = request::Entity;
pub type ERequestStatus = request_status::Entity;

pub type MDepartment = department::Model;
pub type MDepartmentReport = department_report::Model;
pub type MReport = report::Model;
pub type MRequest = request::Model;
pub type MRequestStatus = request_status::Model;

pub type ADepartment = department::ActiveModel;
pub type ADepartmentReport = department_report::ActiveModel;
pub type AReport = report::ActiveModel;
pub type ARequest = request::ActiveModel;

pub type CDepartment = department::Column;
pub type CDepartmentReport = department_report::Column;
pub type CReport = report::Column;
pub type CRequest = request::Column;
pub type CRequestStatus = request_status::Column;
