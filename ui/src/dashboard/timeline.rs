//! Timeline: per-language tracks with each finish positioned
//! proportionally along the visible date range.

use dioxus::prelude::*;
use time::{Date, Month};

use crate::core::{
    book::Book,
    date::month_abbrev,
    filter::{self, YearFilter},
    format::format_short_date,
    language::Language,
    text::extract_image_url,
};

#[derive(Debug, Clone, PartialEq)]
pub struct TimelineEntry {
    pub title: String,
    pub finished: String,
    /// Horizontal position within the track, 0..=100.
    pub offset_pct: f64,
    pub color: &'static str,
    pub cover_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TimelineLane {
    pub language: &'static str,
    pub color: &'static str,
    pub entries: Vec<TimelineEntry>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct TimelineModel {
    pub lanes: Vec<TimelineLane>,
    pub axis: Vec<String>,
}

const LANE_ORDER: [Language; 5] = [
    Language::Korean,
    Language::Japanese,
    Language::ChineseTraditional,
    Language::ChineseSimplified,
    Language::Other,
];

/// Lay the finished set out along the selected range. A specific year
/// spans January through December; "all time" spans the finish dates
/// actually present. Languages without entries get no lane.
pub fn build_timeline(books: &[Book], year: YearFilter) -> TimelineModel {
    let finished = filter::finished_books(books);
    if finished.is_empty() {
        return TimelineModel::default();
    }

    let (range_start, range_end, axis) = match year {
        YearFilter::Year(target) => {
            let Some((start, end)) = year_bounds(target) else {
                return TimelineModel::default();
            };
            let axis = (1..=12).map(|m| month_abbrev(m).to_string()).collect();
            (start, end, axis)
        }
        YearFilter::All => {
            let mut dates: Vec<Date> = finished.iter().map(|e| e.finished_on).collect();
            dates.sort();
            let start = dates[0];
            let end = dates[dates.len() - 1];
            let axis = (start.year()..=end.year()).map(|y| y.to_string()).collect();
            (start, end, axis)
        }
    };

    let span = (range_end.to_julian_day() - range_start.to_julian_day()).max(1) as f64;

    let lanes = LANE_ORDER
        .into_iter()
        .filter_map(|language| {
            let entries: Vec<TimelineEntry> = finished
                .iter()
                .filter(|entry| Language::classify(&entry.book.language) == language)
                .map(|entry| {
                    let offset = (entry.finished_on.to_julian_day()
                        - range_start.to_julian_day()) as f64
                        / span
                        * 100.0;
                    let cover = extract_image_url(&entry.book.url);
                    TimelineEntry {
                        title: entry.book.name.clone(),
                        finished: format_short_date(entry.finished_on),
                        offset_pct: offset.clamp(0.0, 100.0),
                        color: language.color().bg,
                        cover_url: (!cover.is_empty()).then_some(cover),
                    }
                })
                .collect();
            (!entries.is_empty()).then_some(TimelineLane {
                language: language.label(),
                color: language.color().bg,
                entries,
            })
        })
        .collect();

    TimelineModel { lanes, axis }
}

fn year_bounds(year: i32) -> Option<(Date, Date)> {
    let start = Date::from_calendar_date(year, Month::January, 1).ok()?;
    let end = Date::from_calendar_date(year, Month::December, 31).ok()?;
    Some((start, end))
}

#[component]
pub fn TimelineCard(books: Vec<Book>, year: YearFilter) -> Element {
    let model = build_timeline(&books, year);

    rsx! {
        section { class: "timeline-wrapper",
            if model.lanes.is_empty() {
                p { class: "covers-empty", "No finished books available" }
            } else {
                div { class: "timeline-axis",
                    span { class: "timeline-axis-label" }
                    div { class: "timeline-axis-track",
                        for label in model.axis.iter() {
                            span { "{label}" }
                        }
                    }
                }
                div { class: "timeline-container",
                    for lane in model.lanes.iter() {
                        div { class: "timeline-language",
                            span { class: "timeline-label", "{lane.language}" }
                            div { class: "timeline-track",
                                for entry in lane.entries.iter() {
                                    div {
                                        class: "timeline-book",
                                        style: "left: {entry.offset_pct:.2}%; background-color: {entry.color}",
                                        title: "{entry.title} · {entry.finished}",
                                        span { class: "timeline-book-label", "{entry.title}" }
                                        if let Some(url) = entry.cover_url.as_ref() {
                                            div {
                                                class: "timeline-cover",
                                                style: "background-image: url('{url}')",
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
    }
}
