//! Calendar view: one month at a time, with each day's cell showing the
//! books being read (or finished) that day.

use std::collections::BTreeSet;

use dioxus::prelude::*;
use time::{Date, Duration, Month};

use crate::core::{
    book::Book,
    filter,
    format::format_month_year,
    language::Language,
    text::extract_image_url,
};

pub const WEEKDAY_HEADERS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// A book's presence on one calendar day.
#[derive(Debug, Clone, PartialEq)]
pub struct CalendarSpan {
    pub title: String,
    pub language: &'static str,
    pub color: &'static str,
    /// The reading span begins on this day.
    pub starts: bool,
    /// The book was finished on this day.
    pub ends: bool,
    pub cover_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CalendarDay {
    pub day: u8,
    pub spans: Vec<CalendarSpan>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CalendarModel {
    pub year: i32,
    pub month: u8,
    pub title: String,
    /// Empty cells before day 1, counted from Sunday.
    pub leading_blanks: u8,
    pub days: Vec<CalendarDay>,
}

/// Distinct (year, month) pairs with at least one finished book, most
/// recent first. Feeds the calendar's own month dropdown.
pub fn calendar_months(books: &[Book]) -> Vec<(i32, u8)> {
    let months: BTreeSet<(i32, u8)> = filter::finished_books(books)
        .iter()
        .map(|entry| (entry.finished_on.year(), entry.finished_on.month() as u8))
        .collect();
    months.into_iter().rev().collect()
}

/// Lay one month out as a Sunday-first grid. `None` only for an invalid
/// year/month pair.
pub fn build_calendar(books: &[Book], year: i32, month: u8) -> Option<CalendarModel> {
    let month_enum = Month::try_from(month).ok()?;
    let first = Date::from_calendar_date(year, month_enum, 1).ok()?;
    let leading_blanks = first.weekday().number_days_from_sunday();
    let day_count = time::util::days_in_year_month(year, month_enum);

    let spans: Vec<(Date, Date, &Book)> = books
        .iter()
        .filter_map(|book| {
            let finish = book.finished_on()?;
            let start = book
                .started_on()
                .filter(|start| *start <= finish)
                .unwrap_or(finish);
            Some((start, finish, book))
        })
        .collect();

    let days = (0..day_count)
        .map(|offset| {
            let date = first + Duration::days(i64::from(offset));
            let day_spans = spans
                .iter()
                .filter(|(start, finish, _)| *start <= date && date <= *finish)
                .map(|(start, finish, book)| {
                    let language = Language::classify(&book.language);
                    let cover = extract_image_url(&book.url);
                    CalendarSpan {
                        title: book.name.clone(),
                        language: language.label(),
                        color: language.color().bg,
                        starts: *start == date,
                        ends: *finish == date,
                        cover_url: (!cover.is_empty()).then_some(cover),
                    }
                })
                .collect();
            CalendarDay {
                day: offset + 1,
                spans: day_spans,
            }
        })
        .collect();

    Some(CalendarModel {
        year,
        month,
        title: format_month_year(year, month),
        leading_blanks,
        days,
    })
}

#[component]
pub fn CalendarCard(books: Vec<Book>) -> Element {
    let months = calendar_months(&books);
    let mut selection = use_signal(|| None::<(i32, u8)>);

    // Fall back to the most recent month with data when nothing is picked
    // or the picked month dropped out of scope.
    let current = selection()
        .filter(|picked| months.contains(picked))
        .or_else(|| months.first().copied());

    let model = current.and_then(|(year, month)| build_calendar(&books, year, month));

    rsx! {
        section { class: "calendar-view",
            if months.is_empty() {
                p { class: "covers-empty", "No finished books available" }
            } else {
                div { class: "calendar-controls",
                    label { r#for: "bookstats-calendar-select", "Month:" }
                    select {
                        id: "bookstats-calendar-select",
                        class: "calendar-month-select",
                        onchange: move |evt| selection.set(parse_month_value(&evt.value())),
                        for (year, month) in months.iter().copied() {
                            option {
                                value: "{year}-{month}",
                                selected: current == Some((year, month)),
                                "{format_month_year(year, month)}"
                            }
                        }
                    }
                }

                if let Some(model) = model.as_ref() {
                    div { class: "calendar-header",
                        for name in WEEKDAY_HEADERS.iter() {
                            span { class: "calendar-day-name", "{name}" }
                        }
                    }
                    div { class: "calendar-grid",
                        for _ in 0..model.leading_blanks {
                            div { class: "calendar-cell calendar-cell-empty" }
                        }
                        for day in model.days.iter() {
                            div { class: "calendar-cell",
                                div { class: "calendar-date", "{day.day}" }
                                div { class: "calendar-lines",
                                    for span in day.spans.iter() {
                                        {calendar_line(span)}
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn calendar_line(span: &CalendarSpan) -> Element {
    let class = format!(
        "calendar-line{}{}",
        if span.starts { " calendar-line-start" } else { "" },
        if span.ends { " calendar-line-end" } else { "" },
    );

    rsx! {
        div { class: "{class}", title: "{span.title} ({span.language})",
            div { class: "calendar-line-body", style: "background-color: {span.color}" }
            if span.starts {
                if let Some(url) = span.cover_url.as_ref() {
                    div { class: "calendar-cover", style: "background-image: url('{url}')" }
                }
            }
        }
    }
}

fn parse_month_value(value: &str) -> Option<(i32, u8)> {
    let (year, month) = value.split_once('-')?;
    Some((year.parse().ok()?, month.parse().ok()?))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book(name: &str, start: Option<&str>, finish: &str) -> Book {
        Book {
            name: name.into(),
            start_date: start.map(str::to_string),
            finish_date: Some(finish.into()),
            language: "Korean".into(),
            ..Book::default()
        }
    }

    #[test]
    fn leading_blanks_match_the_weekday_of_day_one() {
        // July 2023 began on a Saturday.
        let model = build_calendar(&[], 2023, 7).unwrap();
        assert_eq!(model.leading_blanks, 6);
        assert_eq!(model.days.len(), 31);
        assert_eq!(model.title, "July 2023");
    }

    #[test]
    fn spans_cover_start_through_finish() {
        let books = vec![book("a", Some("2023-07-03"), "2023-07-05")];
        let model = build_calendar(&books, 2023, 7).unwrap();

        assert!(model.days[1].spans.is_empty()); // July 2
        let third = &model.days[2].spans[0];
        assert!(third.starts && !third.ends);
        assert!(!model.days[3].spans[0].starts);
        let fifth = &model.days[4].spans[0];
        assert!(fifth.ends && !fifth.starts);
        assert!(model.days[5].spans.is_empty()); // July 6
    }

    #[test]
    fn finish_only_books_occupy_a_single_day() {
        let books = vec![book("b", None, "2023-07-10")];
        let model = build_calendar(&books, 2023, 7).unwrap();
        let tenth = &model.days[9].spans[0];
        assert!(tenth.starts && tenth.ends);
    }

    #[test]
    fn months_list_is_distinct_and_recent_first() {
        let books = vec![
            book("a", None, "2023-02-10"),
            book("b", None, "2023-02-20"),
            book("c", None, "2024-01-05"),
        ];
        assert_eq!(calendar_months(&books), [(2024, 1), (2023, 2)]);
    }

    #[test]
    fn invalid_month_yields_none() {
        assert!(build_calendar(&[], 2023, 13).is_none());
    }

    #[test]
    fn month_values_round_trip() {
        assert_eq!(parse_month_value("2023-7"), Some((2023, 7)));
        assert_eq!(parse_month_value("garbage"), None);
    }
}
