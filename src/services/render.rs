//! HTML page for the schedule board, rendered from `templates/schedule.html`.

use askama::Template;

use crate::i18n::{self, Labels};
use crate::services::schedule::{ScheduleView, SlotStatus};
use crate::services::timerange::TimeRange;

#[derive(Template)]
#[template(path = "schedule.html")]
pub struct SchedulePage {
    pub lang: String,
    pub labels: &'static Labels,
    pub venue: String,
    pub caption: String,
    /// `YYYY-MM-DD`, prefilled into the date picker.
    pub date: String,
    pub slots: Vec<TimeRange>,
    pub rows: Vec<CourtRowView>,
    pub last_updated: String,
}

pub struct CourtRowView {
    pub label: String,
    pub cells: Vec<CellView>,
}

pub struct CellView {
    pub class: &'static str,
    pub text: String,
}

impl CellView {
    fn from_status(status: &SlotStatus, labels: &Labels) -> Self {
        match status {
            SlotStatus::Free => Self {
                class: "free",
                text: labels.free.clone(),
            },
            SlotStatus::PendingPayment => Self {
                class: "badge pending",
                text: labels.pending.clone(),
            },
            SlotStatus::Booked { name } => Self {
                class: "badge booked",
                text: name.clone(),
            },
        }
    }
}

impl SchedulePage {
    pub fn new(view: ScheduleView, lang: &str) -> Self {
        let labels = i18n::labels(lang);

        let rows = view
            .rows
            .iter()
            .map(|row| CourtRowView {
                label: i18n::fill(&labels.court, &[("court", row.court.to_string().as_str())]),
                cells: row
                    .cells
                    .iter()
                    .map(|status| CellView::from_status(status, labels))
                    .collect(),
            })
            .collect();

        Self {
            lang: lang.to_string(),
            labels,
            last_updated: i18n::fill(&labels.last_updated, &[("time", view.updated_at.as_str())]),
            date: view.date.format("%Y-%m-%d").to_string(),
            venue: view.venue,
            caption: view.caption,
            slots: view.slots,
            rows,
        }
    }
}
