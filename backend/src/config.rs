use std::env;
use std::net::SocketAddr;

use crate::error::AppError;

pub const DEFAULT_DATABASE_URL: &str = "sqlite://database.db";
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";
pub const DEFAULT_IMPORT_FILE: &str = "assignments.xlsx";

#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,
    pub bind_addr: SocketAddr,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let database_url = database_url();
        let bind_addr = env::var("BIND_ADDR")
            .unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());

        Self::new(database_url, &bind_addr)
    }

    pub fn new(database_url: String, bind_addr: &str) -> Result<Self, AppError> {
        let bind_addr = bind_addr
            .parse()
            .map_err(|e| AppError::Config(format!("BIND_ADDR {:?} is invalid: {}", bind_addr, e)))?;

        Ok(Self {
            database_url,
            bind_addr,
        })
    }
}

pub fn database_url() -> String {
    env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string())
}

/// Spreadsheet path for the importer: explicit argument, then `IMPORT_FILE`.
pub fn import_file(arg: Option<String>) -> String {
    arg.or_else(|| env::var("IMPORT_FILE").ok())
        .unwrap_or_else(|| DEFAULT_IMPORT_FILE.to_string())
}
