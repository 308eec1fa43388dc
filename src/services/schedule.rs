use chrono::{DateTime, FixedOffset, NaiveDate};
use serde::Serialize;
use sqlx::sqlite::SqliteConnectOptions;
use tracing::warn;

use crate::config::ScheduleConfig;
use crate::db::models::Booking;
use crate::db::BookingRepository;
use crate::error::AppResult;
use crate::services::thai_date::{format_last_updated, format_thai_date};
use crate::services::timerange::{generate_slots, TimeRange, TimeRangeError};

/// What a single (court, slot) cell shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SlotStatus {
    Free,
    PendingPayment,
    Booked { name: String },
}

impl SlotStatus {
    /// Status a booking paints onto the slots it covers.
    ///
    /// An empty marker never matches, so every booking shows its name.
    pub fn for_booking(booking: &Booking, pending_marker: &str) -> Self {
        if !pending_marker.is_empty() && booking.note().contains(pending_marker) {
            SlotStatus::PendingPayment
        } else {
            SlotStatus::Booked {
                name: booking.name.clone(),
            }
        }
    }
}

/// Per-court, per-slot statuses for one day.
#[derive(Debug, Clone)]
pub struct ScheduleGrid {
    courts: Vec<i64>,
    slots: Vec<TimeRange>,
    // cells[court_index][slot_index]
    cells: Vec<Vec<SlotStatus>>,
}

impl ScheduleGrid {
    pub fn new(courts: &[i64], slots: &[TimeRange]) -> Self {
        Self {
            courts: courts.to_vec(),
            slots: slots.to_vec(),
            cells: vec![vec![SlotStatus::Free; slots.len()]; courts.len()],
        }
    }

    #[cfg(test)]
    pub fn status(&self, court: i64, slot_index: usize) -> Option<&SlotStatus> {
        let row = self.courts.iter().position(|&c| c == court)?;
        self.cells[row].get(slot_index)
    }

    /// Paint `booking` onto every slot its range overlaps, replacing whatever
    /// was there. Returns the number of slots touched; bookings for courts
    /// that are not on the board touch nothing.
    pub fn apply(&mut self, booking: &Booking, pending_marker: &str) -> Result<usize, TimeRangeError> {
        let range: TimeRange = booking.time_range.parse()?;

        let Some(row) = self.courts.iter().position(|&c| c == booking.court) else {
            warn!(
                "Skipping booking {} for unknown court {}",
                booking.id, booking.court
            );
            return Ok(0);
        };

        let status = SlotStatus::for_booking(booking, pending_marker);
        let mut touched = 0;
        for (cell, slot) in self.cells[row].iter_mut().zip(&self.slots) {
            if slot.overlaps(&range) {
                *cell = status.clone();
                touched += 1;
            }
        }

        Ok(touched)
    }

    pub fn into_rows(self) -> Vec<CourtRow> {
        self.courts
            .into_iter()
            .zip(self.cells)
            .map(|(court, cells)| CourtRow { court, cells })
            .collect()
    }
}

/// Build the grid from bookings in processing order: the last booking to
/// overlap a cell decides its status.
pub fn build_grid(
    bookings: &[Booking],
    courts: &[i64],
    slots: &[TimeRange],
    pending_marker: &str,
) -> Result<ScheduleGrid, TimeRangeError> {
    let mut grid = ScheduleGrid::new(courts, slots);
    for booking in bookings {
        grid.apply(booking, pending_marker)?;
    }
    Ok(grid)
}

#[derive(Debug, Clone, Serialize)]
pub struct CourtRow {
    pub court: i64,
    pub cells: Vec<SlotStatus>,
}

/// Everything needed to draw the board for one day.
#[derive(Debug, Clone, Serialize)]
pub struct ScheduleView {
    pub venue: String,
    pub date: NaiveDate,
    /// Thai long-form date for the heading.
    pub caption: String,
    pub updated_at: String,
    pub slots: Vec<TimeRange>,
    pub rows: Vec<CourtRow>,
}

/// Load bookings and lay them out on the board.
///
/// `date` selects bookings created on that day; `None` loads every booking
/// and captions the board with today's date at the venue.
pub async fn build_schedule(
    db: &SqliteConnectOptions,
    config: &ScheduleConfig,
    date: Option<NaiveDate>,
    now: DateTime<FixedOffset>,
) -> AppResult<ScheduleView> {
    let bookings = BookingRepository::find_by_date(db, date).await?;

    let slots = generate_slots(config.open_hour as u16, config.close_hour as u16);
    let grid = build_grid(&bookings, &config.courts, &slots, &config.pending_marker)?;

    let date = date.unwrap_or_else(|| now.date_naive());

    Ok(ScheduleView {
        venue: config.venue_name.clone(),
        date,
        caption: format_thai_date(date, now.time()),
        updated_at: format_last_updated(now),
        slots,
        rows: grid.into_rows(),
    })
}
