//! UI strings for the board, in Thai (default) and English.
//!
//! Each language is one embedded JSON table deserialized into [`Labels`], so a
//! missing string is a startup panic rather than a key leaking onto the page.
//! Placeholders use single braces (`{court}`) and are filled with [`fill`].

use std::collections::HashMap;
use std::sync::OnceLock;

use serde::Deserialize;

pub const DEFAULT_LANG: &str = "th";

#[derive(Debug, Deserialize)]
pub struct Labels {
    pub title: String,
    pub heading: String,
    pub pick_date: String,
    pub show: String,
    /// `{time}`
    pub last_updated: String,
    pub corner: String,
    /// `{court}`
    pub court: String,
    pub free: String,
    pub pending: String,
    /// `{date}`
    pub invalid_date: String,
    /// `{lang}`
    pub unsupported_language: String,
}

static LABELS: OnceLock<HashMap<&'static str, Labels>> = OnceLock::new();

const TH_JSON: &str = r#"
{
  "title": "ตารางคอร์ดแบดมินตัน",
  "heading": "📋 ตารางแสดงสถานะคอร์ด (Reserve)",
  "pick_date": "📅 เลือกวันที่แสดงตาราง",
  "show": "แสดง",
  "last_updated": "🕒 ตารางอัปเดตล่าสุด: {time}",
  "corner": "Court / เวลา",
  "court": "Court {court}",
  "free": "ว่าง",
  "pending": "รอชำระ",
  "invalid_date": "วันที่ไม่ถูกต้อง: {date}",
  "unsupported_language": "ไม่รองรับภาษา: {lang}"
}
"#;

const EN_JSON: &str = r#"
{
  "title": "Badminton court schedule",
  "heading": "📋 Court status (Reserve)",
  "pick_date": "📅 Pick a date",
  "show": "Show",
  "last_updated": "🕒 Last updated: {time}",
  "corner": "Court / Time",
  "court": "Court {court}",
  "free": "Free",
  "pending": "Awaiting payment",
  "invalid_date": "Invalid date: {date}",
  "unsupported_language": "Unsupported language: {lang}"
}
"#;

fn load() -> HashMap<&'static str, Labels> {
    [("th", TH_JSON), ("en", EN_JSON)]
        .into_iter()
        .map(|(lang, json)| {
            let labels = serde_json::from_str(json).unwrap_or_else(|e| {
                panic!("failed to parse {} labels in i18n module: {}", lang, e);
            });
            (lang, labels)
        })
        .collect()
}

/// Labels for `lang`, or for [`DEFAULT_LANG`] when `lang` has none.
pub fn labels(lang: &str) -> &'static Labels {
    let all = LABELS.get_or_init(load);
    all.get(lang).unwrap_or_else(|| &all[DEFAULT_LANG])
}

/// Normalize a language tag into a short, lowercase code (e.g. "en-US" -> "en").
pub fn normalize_language(lang: &str) -> String {
    lang.split('-').next().unwrap_or(lang).to_lowercase()
}

pub fn is_supported_language(lang: &str) -> bool {
    LABELS.get_or_init(load).contains_key(lang)
}

/// Replace `{name}` placeholders in `template`.
pub fn fill(template: &str, params: &[(&str, &str)]) -> String {
    params.iter().fold(template.to_string(), |s, (k, v)| {
        s.replace(&format!("{{{}}}", k), v)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_per_language() {
        assert_eq!(labels("th").free, "ว่าง");
        assert_eq!(labels("en").free, "Free");
    }

    #[test]
    fn unknown_language_falls_back_to_thai() {
        assert_eq!(labels("fr").pending, "รอชำระ");
    }

    #[test]
    fn fill_replaces_placeholders() {
        assert_eq!(fill(&labels("th").court, &[("court", "3")]), "Court 3");
        assert_eq!(
            fill(&labels("en").last_updated, &[("time", "18:00:00")]),
            "🕒 Last updated: 18:00:00"
        );
        assert_eq!(fill("no placeholders", &[("x", "y")]), "no placeholders");
    }

    #[test]
    fn supported_languages() {
        assert!(is_supported_language("th"));
        assert!(is_supported_language("en"));
        assert!(!is_supported_language("fr"));
    }

    #[test]
    fn normalizes_language_tags() {
        assert_eq!(normalize_language("en-US"), "en");
        assert_eq!(normalize_language("th"), "th");
        assert_eq!(normalize_language("TH-th"), "th");
    }
}
