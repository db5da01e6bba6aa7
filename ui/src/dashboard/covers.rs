//! Covers grid: finished books as a wall of cover cards, filterable by
//! month when a specific year is selected.

use dioxus::prelude::*;
use serde::Serialize;

use crate::core::{
    book::Book,
    filter::{self, MonthFilter, MonthOption, YearFilter},
    format::format_short_date,
    language::Language,
    text::extract_image_url,
};

use super::{ExportPanel, MonthFilterBar};

/// Why the grid came out empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CoversEmpty {
    /// The scoped list contains no finished books at all.
    NoneFinished,
    /// Finished books exist, but the month filter removed every one.
    NoMatches,
}

impl CoversEmpty {
    pub fn message(self) -> &'static str {
        match self {
            Self::NoneFinished => "No finished books available",
            Self::NoMatches => "No books match the selected filters",
        }
    }
}

/// One cover card, ready to render. Strings are kept raw here; escaping
/// happens at the markup boundary (rsx escapes implicitly, the HTML
/// export escapes explicitly).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CoverEntry {
    pub title: String,
    pub author: String,
    pub finished: String,
    pub language: String,
    pub color: &'static str,
    pub cover_url: Option<String>,
    pub link: Option<String>,
}

/// Render-ready description of the covers tab.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CoversGridModel {
    pub month_options: Vec<MonthOption>,
    pub entries: Vec<CoverEntry>,
    pub empty: Option<CoversEmpty>,
}

/// Build the covers grid for a book list and the current selection.
/// Pure: identical inputs always produce an identical model.
pub fn build_covers_grid(books: &[Book], year: YearFilter, month: MonthFilter) -> CoversGridModel {
    let mut finished = filter::finished_books(books);
    filter::sort_by_finish_desc(&mut finished);

    if finished.is_empty() {
        return CoversGridModel {
            empty: Some(CoversEmpty::NoneFinished),
            ..CoversGridModel::default()
        };
    }

    let (month_options, visible) = match year {
        // "All time": no month selector, full sorted list.
        YearFilter::All => (Vec::new(), finished),
        YearFilter::Year(target) => {
            let options = filter::month_options(&finished, target, month);
            if options.is_empty() {
                (options, finished)
            } else {
                (options, filter::filter_by_month(&finished, month))
            }
        }
    };

    let entries: Vec<CoverEntry> = visible.iter().map(cover_entry).collect();
    let empty = entries.is_empty().then_some(CoversEmpty::NoMatches);

    CoversGridModel {
        month_options,
        entries,
        empty,
    }
}

fn cover_entry(entry: &filter::Finished<'_>) -> CoverEntry {
    let book = entry.book;
    let language = Language::classify(&book.language);
    let cover = extract_image_url(&book.url);

    CoverEntry {
        title: book.name.clone(),
        author: book.author_label().to_string(),
        finished: format_short_date(entry.finished_on),
        language: language.label().to_string(),
        color: language.color().bg,
        cover_url: (!cover.is_empty()).then_some(cover),
        link: book
            .link
            .clone()
            .filter(|link| !link.trim().is_empty()),
    }
}

#[component]
pub fn CoversCard(books: Vec<Book>, year: YearFilter, month: Signal<MonthFilter>) -> Element {
    let model = build_covers_grid(&books, year, month());

    rsx! {
        section { class: "covers-card",
            if !model.month_options.is_empty() {
                MonthFilterBar { options: model.month_options.clone(), selection: month }
            }

            if let Some(empty) = model.empty {
                p { class: "covers-empty", "{empty.message()}" }
            } else {
                div { class: "covers-grid",
                    for entry in model.entries.iter() {
                        {cover_tile(entry)}
                    }
                }
            }

            ExportPanel { model: model.clone() }
        }
    }
}

fn cover_tile(entry: &CoverEntry) -> Element {
    rsx! {
        div { class: "cover-item",
            if let Some(link) = entry.link.as_ref() {
                a {
                    class: "cover-link",
                    href: "{link}",
                    target: "_blank",
                    rel: "noopener noreferrer",
                    {cover_image(entry)}
                }
            } else {
                {cover_image(entry)}
            }

            div { class: "cover-details",
                div { class: "cover-title", "{entry.title}" }
                div { class: "cover-author", "{entry.author}" }
                div { class: "cover-date", "{entry.finished}" }
                div { class: "cover-language", style: "background-color: {entry.color}", "{entry.language}" }
            }
        }
    }
}

fn cover_image(entry: &CoverEntry) -> Element {
    match entry.cover_url.as_deref() {
        Some(url) => rsx! {
            div { class: "cover-image", style: "background-image: url('{url}')" }
        },
        None => rsx! {
            div {
                class: "cover-image cover-image-placeholder",
                style: "background-color: {entry.color}",
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book(name: &str, finish: &str, language: &str) -> Book {
        Book {
            name: name.into(),
            finish_date: Some(finish.into()),
            language: language.into(),
            ..Book::default()
        }
    }

    fn sample() -> Vec<Book> {
        vec![
            book("First", "2023-02-10", "Korean"),
            book("Second", "2023-07-01", "Japanese"),
            book("Third", "2024-01-01", "Korean"),
        ]
    }

    #[test]
    fn all_time_has_no_month_selector() {
        let model = build_covers_grid(&sample(), YearFilter::All, MonthFilter::All);
        assert!(model.month_options.is_empty());
        assert_eq!(model.entries.len(), 3);
        assert!(model.empty.is_none());
        // Most recent first.
        assert_eq!(model.entries[0].title, "Third");
    }

    #[test]
    fn specific_year_offers_its_months() {
        let model = build_covers_grid(&sample(), YearFilter::Year(2023), MonthFilter::All);
        let labels: Vec<&str> = model
            .month_options
            .iter()
            .map(|o| o.label.as_str())
            .collect();
        assert_eq!(labels, ["All Year", "February", "July"]);
    }

    #[test]
    fn month_filter_narrows_entries() {
        let model = build_covers_grid(&sample(), YearFilter::Year(2023), MonthFilter::Month(7));
        assert_eq!(model.entries.len(), 1);
        assert_eq!(model.entries[0].title, "Second");
        assert!(model.month_options[2].selected);
    }

    #[test]
    fn empty_states_are_distinguished() {
        let none = build_covers_grid(&[], YearFilter::All, MonthFilter::All);
        assert_eq!(none.empty, Some(CoversEmpty::NoneFinished));

        // Finished books exist, but March has none.
        let filtered = build_covers_grid(&sample(), YearFilter::Year(2023), MonthFilter::Month(3));
        assert_eq!(filtered.empty, Some(CoversEmpty::NoMatches));
        assert_ne!(
            CoversEmpty::NoneFinished.message(),
            CoversEmpty::NoMatches.message()
        );
    }

    #[test]
    fn builder_is_idempotent() {
        let books = sample();
        let first = build_covers_grid(&books, YearFilter::Year(2023), MonthFilter::Month(2));
        let second = build_covers_grid(&books, YearFilter::Year(2023), MonthFilter::Month(2));
        assert_eq!(first, second);
    }

    #[test]
    fn entry_fields_are_derived() {
        let mut books = sample();
        books[0].url = "=IMAGE(\"http://covers/first.png\")".into();
        books[1].author = Some("Natsume Sōseki".into());

        let model = build_covers_grid(&books, YearFilter::All, MonthFilter::All);
        let first = model
            .entries
            .iter()
            .find(|e| e.title == "First")
            .unwrap();
        assert_eq!(first.cover_url.as_deref(), Some("http://covers/first.png"));
        assert_eq!(first.author, "Unknown Author");
        assert_eq!(first.finished, "Feb 10, 2023");
        assert_eq!(first.language, "Korean");

        let second = model
            .entries
            .iter()
            .find(|e| e.title == "Second")
            .unwrap();
        assert_eq!(second.author, "Natsume Sōseki");
        assert!(second.cover_url.is_none());
    }
}
