//! Duration chart: how long each book took, as proportional bars.

use dioxus::prelude::*;

use crate::core::{book::Book, language::Language};

#[derive(Debug, Clone, PartialEq)]
pub struct DurationEntry {
    pub title: String,
    pub language: &'static str,
    pub days: i64,
    /// Bar width relative to the longest read, 0..=100.
    pub width_pct: f64,
    pub color: &'static str,
}

/// Reading spans for every finished book with a usable start date,
/// longest first. Same-day reads count as one day; spans that run
/// backwards are dropped.
pub fn build_durations(books: &[Book]) -> Vec<DurationEntry> {
    let mut entries: Vec<DurationEntry> = books
        .iter()
        .filter_map(|book| {
            let finish = book.finished_on()?;
            let start = book.started_on()?;
            let days =
                i64::from(finish.to_julian_day()) - i64::from(start.to_julian_day()) + 1;
            if days < 1 {
                return None;
            }
            let language = Language::classify(&book.language);
            Some(DurationEntry {
                title: book.name.clone(),
                language: language.label(),
                days,
                width_pct: 0.0,
                color: language.color().bg,
            })
        })
        .collect();

    entries.sort_by(|a, b| b.days.cmp(&a.days));

    if let Some(max_days) = entries.first().map(|entry| entry.days) {
        for entry in &mut entries {
            entry.width_pct = entry.days as f64 / max_days as f64 * 100.0;
        }
    }
    entries
}

#[component]
pub fn DurationCard(books: Vec<Book>) -> Element {
    let entries = build_durations(&books);

    rsx! {
        section { class: "duration-chart",
            if entries.is_empty() {
                p { class: "covers-empty", "No finished books with reading dates available" }
            } else {
                for entry in entries.iter() {
                    div { class: "duration-row",
                        span { class: "duration-label", title: "{entry.title}", "{entry.title}" }
                        div { class: "duration-bar-container",
                            div {
                                class: "duration-bar",
                                style: "width: {entry.width_pct:.2}%; background-color: {entry.color}",
                                "{entry.days}d"
                            }
                        }
                    }
                }
            }
        }
    }
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
    fn durations_are_inclusive_day_counts() {
        let books = vec![
            book("quick", Some("2023-03-10"), "2023-03-10"),
            book("slow", Some("2023-01-01"), "2023-01-10"),
        ];
        let entries = build_durations(&books);

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].title, "slow");
        assert_eq!(entries[0].days, 10);
        assert_eq!(entries[0].width_pct, 100.0);
        assert_eq!(entries[1].days, 1);
        assert!((entries[1].width_pct - 10.0).abs() < 1e-9);
    }

    #[test]
    fn missing_or_backward_spans_are_dropped() {
        let books = vec![
            book("no start", None, "2023-05-01"),
            book("backwards", Some("2023-06-01"), "2023-05-01"),
        ];
        assert!(build_durations(&books).is_empty());
    }
}
