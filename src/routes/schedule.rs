use std::sync::Arc;

use askama::Template;
use axum::{
    extract::{Query, State},
    response::Html,
    routing::get,
    Json, Router,
};
use chrono::NaiveDate;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::i18n;
use crate::services::render::SchedulePage;
use crate::services::schedule::{build_schedule, ScheduleView};
use crate::services::thai_date::venue_now;
use crate::AppState;

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(schedule_page))
        .route("/api/schedule", get(schedule_json))
}

#[derive(Debug, Default, Deserialize)]
pub struct ScheduleQuery {
    /// `YYYY-MM-DD`; empty or missing means today at the venue.
    pub date: Option<String>,
    pub lang: Option<String>,
    /// JSON only: ignore the date and lay out every booking.
    #[serde(default)]
    pub all: bool,
}

/// The requested language, or `default` when none was asked for. An unsupported
/// request is reported in `default`, since the caller's language is unknown.
fn resolve_lang(requested: Option<&str>, default: &str) -> AppResult<String> {
    let lang = i18n::normalize_language(requested.unwrap_or(default));
    if i18n::is_supported_language(&lang) {
        Ok(lang)
    } else {
        let labels = i18n::labels(default);
        Err(AppError::Validation(i18n::fill(
            &labels.unsupported_language,
            &[("lang", lang.as_str())],
        )))
    }
}

fn parse_date(raw: Option<&str>, lang: &str) -> AppResult<Option<NaiveDate>> {
    match raw.map(str::trim).filter(|s| !s.is_empty()) {
        None => Ok(None),
        Some(raw) => NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .map(Some)
            .map_err(|_| {
                let labels = i18n::labels(lang);
                AppError::BadRequest(i18n::fill(&labels.invalid_date, &[("date", raw)]))
            }),
    }
}

/// The board as an HTML page.
async fn schedule_page(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ScheduleQuery>,
) -> AppResult<Html<String>> {
    let config = &state.config.schedule;
    let lang = resolve_lang(query.lang.as_deref(), &config.default_lang)?;
    let now = venue_now(config.utc_offset_hours);
    let date = parse_date(query.date.as_deref(), &lang)?.unwrap_or_else(|| now.date_naive());

    let view = build_schedule(&state.db, config, Some(date), now).await?;

    Ok(Html(SchedulePage::new(view, &lang).render()?))
}

/// The same board as JSON.
async fn schedule_json(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ScheduleQuery>,
) -> AppResult<Json<ScheduleView>> {
    let config = &state.config.schedule;
    let lang = resolve_lang(query.lang.as_deref(), &config.default_lang)?;
    let now = venue_now(config.utc_offset_hours);

    let date = if query.all {
        None
    } else {
        Some(parse_date(query.date.as_deref(), &lang)?.unwrap_or_else(|| now.date_naive()))
    };

    let view = build_schedule(&state.db, config, date, now).await?;

    Ok(Json(view))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_date_means_today() {
        assert_eq!(parse_date(None, "th").unwrap(), None);
        assert_eq!(parse_date(Some("  "), "th").unwrap(), None);
    }

    #[test]
    fn parses_iso_dates() {
        assert_eq!(
            parse_date(Some("2024-01-01"), "th").unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 1)
        );
    }

    #[test]
    fn rejects_bad_dates_in_requested_language() {
        match parse_date(Some("2024-02-30"), "en") {
            Err(AppError::BadRequest(msg)) => assert_eq!(msg, "Invalid date: 2024-02-30"),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn language_resolution() {
        assert_eq!(resolve_lang(None, "th").unwrap(), "th");
        assert_eq!(resolve_lang(None, "en").unwrap(), "en");
        assert_eq!(resolve_lang(Some("en-US"), "th").unwrap(), "en");
    }

    #[test]
    fn unsupported_language_is_reported_in_default_language() {
        match resolve_lang(Some("fr"), "en") {
            Err(AppError::Validation(msg)) => assert_eq!(msg, "Unsupported language: fr"),
            other => panic!("unexpected result: {other:?}"),
        }
        match resolve_lang(Some("fr"), "th") {
            Err(AppError::Validation(msg)) => assert_eq!(msg, "ไม่รองรับภาษา: fr"),
            other => panic!("unexpected result: {other:?}"),
        }
    }
}
