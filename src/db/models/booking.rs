use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// ============================================================================
// Reservation rows (written by the booking workflow, read-only here)
// ============================================================================

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Booking {
    pub id: i64,
    pub court: i64,
    /// `HH:MM - HH:MM`, half-open.
    pub time_range: String,
    pub name: String,
    pub note: Option<String>,
    /// Only used to filter and order rows; may be missing in older rows.
    pub created_at: Option<NaiveDateTime>,
}

impl Booking {
    /// The note, with a missing value read as empty.
    pub fn note(&self) -> &str {
        self.note.as_deref().unwrap_or("")
    }
}
