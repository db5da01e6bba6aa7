//! Calendar-date parsing for the reading log.
//!
//! Finish dates arrive as bare `YYYY-MM-DD` strings. Parsing them as UTC
//! timestamps would shift them a day backwards for viewers behind UTC, so
//! the three components are taken as a plain local calendar date instead.

use time::{format_description::well_known::Rfc3339, Date, Month, OffsetDateTime};

/// Parse a `YYYY-MM-DD` string into a calendar date. Full RFC 3339
/// timestamps are accepted as a fallback; anything else is `None`.
pub fn parse_local_date(raw: &str) -> Option<Date> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    let parts: Vec<&str> = raw.split('-').collect();
    if let [year, month, day] = parts[..] {
        if let Some(date) = calendar_date(year, month, day) {
            return Some(date);
        }
    }

    OffsetDateTime::parse(raw, &Rfc3339)
        .ok()
        .map(|stamp| stamp.date())
}

fn calendar_date(year: &str, month: &str, day: &str) -> Option<Date> {
    let year: i32 = year.trim().parse().ok()?;
    let month: u8 = month.trim().parse().ok()?;
    let day: u8 = day.trim().parse().ok()?;
    let month = Month::try_from(month).ok()?;
    Date::from_calendar_date(year, month, day).ok()
}

/// Full month name for a 1-based month number.
pub fn month_name(month: u8) -> &'static str {
    match month {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        12 => "December",
        _ => "—",
    }
}

/// Abbreviated month name for chart axes.
pub fn month_abbrev(month: u8) -> &'static str {
    match month {
        1 => "Jan",
        2 => "Feb",
        3 => "Mar",
        4 => "Apr",
        5 => "May",
        6 => "Jun",
        7 => "Jul",
        8 => "Aug",
        9 => "Sep",
        10 => "Oct",
        11 => "Nov",
        12 => "Dec",
        _ => "—",
    }
}
