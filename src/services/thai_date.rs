use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, NaiveTime, Offset, Utc};

/// Weekday names, Monday first (matches `Weekday::num_days_from_monday`).
pub const THAI_WEEKDAYS: [&str; 7] = [
    "วันจันทร์",
    "วันอังคาร",
    "วันพุธ",
    "วันพฤหัสบดี",
    "วันศุกร์",
    "วันเสาร์",
    "วันอาทิตย์",
];

pub const THAI_MONTHS: [&str; 12] = [
    "มกราคม",
    "กุมภาพันธ์",
    "มีนาคม",
    "เมษายน",
    "พฤษภาคม",
    "มิถุนายน",
    "กรกฎาคม",
    "สิงหาคม",
    "กันยายน",
    "ตุลาคม",
    "พฤศจิกายน",
    "ธันวาคม",
];

/// Buddhist Era year.
pub fn buddhist_year(date: NaiveDate) -> i32 {
    date.year() + 543
}

/// Caption for the board, e.g. `วันจันทร์ที่ 1 มกราคม 2567 เวลา 18:30:00`.
pub fn format_thai_date(date: NaiveDate, time: NaiveTime) -> String {
    let weekday = THAI_WEEKDAYS[date.weekday().num_days_from_monday() as usize];
    let month = THAI_MONTHS[date.month0() as usize];

    format!(
        "{}ที่ {} {} {} เวลา {}",
        weekday,
        date.day(),
        month,
        buddhist_year(date),
        time.format("%H:%M:%S")
    )
}

/// "Last updated" stamp, `dd/mm/YYYY HH:MM:SS` on the venue clock.
pub fn format_last_updated(now: DateTime<FixedOffset>) -> String {
    now.format("%d/%m/%Y %H:%M:%S").to_string()
}

/// The venue's UTC offset. Out-of-range values fall back to UTC.
pub fn venue_offset(utc_offset_hours: i32) -> FixedOffset {
    FixedOffset::east_opt(utc_offset_hours * 3600).unwrap_or_else(|| {
        tracing::warn!("Invalid UTC offset {}h, using UTC", utc_offset_hours);
        Utc.fix()
    })
}

/// Current wall clock at the venue.
pub fn venue_now(utc_offset_hours: i32) -> DateTime<FixedOffset> {
    Utc::now().with_timezone(&venue_offset(utc_offset_hours))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn time(h: u32, m: u32, s: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, s).unwrap()
    }

    #[test]
    fn new_year_2024_is_a_monday_in_2567() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        assert_eq!(
            format_thai_date(date, time(18, 5, 9)),
            "วันจันทร์ที่ 1 มกราคม 2567 เวลา 18:05:09"
        );
    }

    #[test]
    fn sunday_and_december_are_the_last_entries() {
        let date = NaiveDate::from_ymd_opt(2023, 12, 31).unwrap();
        assert_eq!(
            format_thai_date(date, time(0, 0, 0)),
            "วันอาทิตย์ที่ 31 ธันวาคม 2566 เวลา 00:00:00"
        );
    }

    #[test]
    fn leap_day() {
        let date = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
        assert_eq!(
            format_thai_date(date, time(23, 59, 59)),
            "วันพฤหัสบดีที่ 29 กุมภาพันธ์ 2567 เวลา 23:59:59"
        );
    }

    #[test]
    fn last_updated_uses_venue_clock() {
        let utc = DateTime::parse_from_rfc3339("2024-01-01T20:30:15Z").unwrap();
        let bangkok = utc.with_timezone(&venue_offset(7));
        assert_eq!(format_last_updated(bangkok), "02/01/2024 03:30:15");
    }

    #[test]
    fn venue_offset_is_seven_hours_for_bangkok() {
        assert_eq!(venue_offset(7).local_minus_utc(), 7 * 3600);
        assert_eq!(venue_offset(99).local_minus_utc(), 0);
    }
}
