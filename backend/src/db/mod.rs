pub mod repository;

use std::str::FromStr;

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tracing::info;

use crate::error::AppError;

const CREATE_ASSIGNMENTS_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS assignments (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        course TEXT NOT NULL,
        due_date TEXT NOT NULL,
        type TEXT NOT NULL,
        completed BOOLEAN DEFAULT 0
    )
"#;

/// Opens a pool on `database_url`, creating the database file if missing.
pub async fn connect(database_url: &str) -> Result<SqlitePool, AppError> {
    let options = SqliteConnectOptions::from_str(database_url)
        .map_err(AppError::StoreUnavailable)?
        .create_if_missing(true);

    SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await
        .map_err(AppError::StoreUnavailable)
}

pub async fn ensure_schema(db: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(CREATE_ASSIGNMENTS_TABLE).execute(db).await?;
    info!("assignments table ready");
    Ok(())
}

/// Single-connection in-memory pool with the schema in place.
#[cfg(test)]
pub(crate) async fn setup_test_db() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to create test db");

    ensure_schema(&pool)
        .await
        .expect("Failed to create schema");

    pool
}
