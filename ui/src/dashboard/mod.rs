mod covers;
pub use covers::{build_covers_grid, CoverEntry, CoversCard, CoversEmpty, CoversGridModel};

mod pie;
pub use pie::{language_breakdown, pie_slices, PieCard, PieModel, Slice};

mod authors;
pub use authors::{author_counts, AuthorRow, AuthorsCard};

mod timeline;
pub use timeline::{build_timeline, TimelineCard, TimelineModel};

mod duration;
pub use duration::{build_durations, DurationCard, DurationEntry};

mod monthly;
pub use monthly::{monthly_totals, MonthlyCard, MonthlyTotals};

mod calendar;
pub use calendar::{build_calendar, calendar_months, CalendarCard, CalendarModel};

mod export;
pub use export::{render_covers_html, ExportPanel};

use dioxus::prelude::*;

use crate::core::{
    book::Book,
    filter::{MonthFilter, MonthOption},
    source,
};

/// Shared state for the dashboard view: the loaded book list or the load
/// error to surface.
#[derive(Debug, Clone, Default)]
pub struct DashboardState {
    pub books: Vec<Book>,
    pub error: Option<String>,
}

impl DashboardState {
    pub fn load() -> Self {
        match source::load_bundled() {
            Ok(books) => Self {
                books,
                error: None,
            },
            Err(err) => Self {
                books: Vec::new(),
                error: Some(format!("Couldn't load the reading log: {err}")),
            },
        }
    }
}

/// Month dropdown shared by the pie and covers tabs. The selection signal
/// is owned by the dashboard view; changing it re-renders the active card
/// with the new filter.
#[component]
pub fn MonthFilterBar(options: Vec<MonthOption>, selection: Signal<MonthFilter>) -> Element {
    let mut selection = selection;

    rsx! {
        div { class: "covers-month-filter",
            label { r#for: "bookstats-month-select", "Filter by Month: " }
            select {
                id: "bookstats-month-select",
                class: "covers-month-select",
                onchange: move |evt| selection.set(MonthFilter::parse(&evt.value())),
                for opt in options.into_iter() {
                    option { value: "{opt.value}", selected: opt.selected, "{opt.label}" }
                }
            }
        }
    }
}
