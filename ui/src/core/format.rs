//! Formatting helpers for presenting dates and chart figures.

use time::{macros::format_description, Date};

use super::date::month_name;

/// Short date for cover cards, e.g. "Jan 5, 2024".
pub fn format_short_date(date: Date) -> String {
    date.format(&format_description!(
        "[month repr:short] [day padding:none], [year]"
    ))
    .unwrap_or_else(|_| "—".to_string())
}

/// "July 2023" style label for calendar headers.
pub fn format_month_year(year: i32, month: u8) -> String {
    format!("{} {year}", month_name(month))
}

/// Percentage with one decimal, as shown in chart legends.
pub fn format_percent(value: f64) -> String {
    if value.is_finite() {
        format!("{value:.1}%")
    } else {
        "—".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::{Date, Month};

    #[test]
    fn short_date_has_no_day_padding() {
        let date = Date::from_calendar_date(2024, Month::January, 5).unwrap();
        assert_eq!(format_short_date(date), "Jan 5, 2024");
    }

    #[test]
    fn month_year_label() {
        assert_eq!(format_month_year(2023, 7), "July 2023");
    }

    #[test]
    fn percent_formatting() {
        assert_eq!(format_percent(66.666), "66.7%");
        assert_eq!(format_percent(f64::NAN), "—");
    }
}
