use chrono::NaiveDate;
use sqlx::sqlite::SqliteConnectOptions;
use sqlx::{ConnectOptions, Connection};

use crate::db::models::Booking;
use crate::error::{AppError, AppResult};

/// Read access to the `reserve_bookings` table.
pub struct BookingRepository;

impl BookingRepository {
    /// Load the bookings created on `date`, or every booking when `date` is `None`.
    ///
    /// Rows come back in creation order (`created_at`, then `rowid`); when two
    /// bookings cover the same court and slot the later one wins on the board.
    /// Each call opens its own connection and closes it before returning.
    ///
    /// `created_at` goes through `datetime()`, so a value SQLite cannot read as a
    /// timestamp comes back as `None` instead of failing the whole load.
    pub async fn find_by_date(
        options: &SqliteConnectOptions,
        date: Option<NaiveDate>,
    ) -> AppResult<Vec<Booking>> {
        let mut conn = options.connect().await.map_err(AppError::Database)?;

        let rows = match date {
            Some(date) => {
                sqlx::query_as::<_, Booking>(
                    r#"
                    SELECT rowid AS id, court, time_range, name, note, datetime(created_at) AS created_at
                    FROM reserve_bookings
                    WHERE DATE(created_at) = DATE(?)
                    ORDER BY created_at, rowid
                    "#,
                )
                .bind(date.format("%Y-%m-%d").to_string())
                .fetch_all(&mut conn)
                .await
            }
            None => {
                sqlx::query_as::<_, Booking>(
                    r#"
                    SELECT rowid AS id, court, time_range, name, note, datetime(created_at) AS created_at
                    FROM reserve_bookings
                    ORDER BY created_at, rowid
                    "#,
                )
                .fetch_all(&mut conn)
                .await
            }
        }
        .map_err(AppError::Database)?;

        conn.close().await.map_err(AppError::Database)?;

        tracing::debug!(
            date = ?date,
            count = rows.len(),
            "Loaded reservation rows"
        );

        Ok(rows)
    }
}
