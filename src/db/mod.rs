pub mod models;
pub mod repository;

use std::path::Path;

use sqlx::sqlite::SqliteConnectOptions;

use crate::config::DatabaseConfig;

pub use repository::*;

/// Connection options for the booking database.
///
/// The file is opened read-only: bookings are written by another process and
/// a missing database file is an error rather than something to create.
pub fn connect_options(config: &DatabaseConfig) -> SqliteConnectOptions {
    let db_path = config
        .url
        .strip_prefix("sqlite://")
        .or_else(|| config.url.strip_prefix("sqlite:"))
        .unwrap_or(&config.url);

    tracing::info!("Using booking database: {}", Path::new(db_path).display());

    SqliteConnectOptions::new()
        .filename(db_path)
        .read_only(true)
}

#[cfg(test)]
pub mod testing;
