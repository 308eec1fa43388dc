//! Throwaway SQLite databases for tests.

use std::path::PathBuf;

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode};
use sqlx::{ConnectOptions, Connection};

use crate::config::DatabaseConfig;

pub struct TestDb {
    path: PathBuf,
}

impl TestDb {
    /// Create a fresh database file with an empty `reserve_bookings` table.
    pub async fn new() -> Self {
        let path = std::env::temp_dir().join(format!("court-schedule-{}.db", uuid::Uuid::new_v4()));
        let db = TestDb { path };

        let mut conn = db.writable().connect().await.unwrap();
        sqlx::query(
            r#"
            CREATE TABLE reserve_bookings (
                court INTEGER NOT NULL,
                time_range TEXT NOT NULL,
                name TEXT NOT NULL,
                note TEXT,
                created_at TIMESTAMP
            )
            "#,
        )
        .execute(&mut conn)
        .await
        .unwrap();
        conn.close().await.unwrap();

        db
    }

    fn writable(&self) -> SqliteConnectOptions {
        SqliteConnectOptions::new()
            .filename(&self.path)
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Delete)
    }

    pub async fn insert(
        &self,
        court: i64,
        time_range: &str,
        name: &str,
        note: Option<&str>,
        created_at: &str,
    ) {
        self.insert_row(court, time_range, name, note, Some(created_at)).await;
    }

    /// Like [`TestDb::insert`], but `created_at` may be NULL.
    pub async fn insert_row(
        &self,
        court: i64,
        time_range: &str,
        name: &str,
        note: Option<&str>,
        created_at: Option<&str>,
    ) {
        let mut conn = self.writable().connect().await.unwrap();
        sqlx::query(
            "INSERT INTO reserve_bookings (court, time_range, name, note, created_at) VALUES (?, ?, ?, ?, ?)",
        )
        .bind(court)
        .bind(time_range)
        .bind(name)
        .bind(note)
        .bind(created_at)
        .execute(&mut conn)
        .await
        .unwrap();
        conn.close().await.unwrap();
    }

    pub fn config(&self) -> DatabaseConfig {
        DatabaseConfig {
            url: format!("sqlite://{}", self.path.display()),
        }
    }

    /// Read-only options, as the service itself opens the file.
    pub fn options(&self) -> SqliteConnectOptions {
        crate::db::connect_options(&self.config())
    }
}

impl Drop for TestDb {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.path);
    }
}
