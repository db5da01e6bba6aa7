use dioxus::prelude::*;

use crate::core::{
    book::Book,
    filter::{years_with_data, MonthFilter, YearFilter},
};
use crate::dashboard::{
    AuthorsCard, CalendarCard, CoversCard, DashboardState, DurationCard, MonthlyCard, PieCard,
    TimelineCard,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tab {
    Pie,
    Covers,
    Authors,
    Timeline,
    Duration,
    Monthly,
    Calendar,
}

impl Tab {
    const ALL: [Tab; 7] = [
        Tab::Pie,
        Tab::Covers,
        Tab::Authors,
        Tab::Timeline,
        Tab::Duration,
        Tab::Monthly,
        Tab::Calendar,
    ];

    fn label(self) -> &'static str {
        match self {
            Tab::Pie => "Pie Chart",
            Tab::Covers => "Covers",
            Tab::Authors => "Authors",
            Tab::Timeline => "Timeline",
            Tab::Duration => "Duration",
            Tab::Monthly => "Monthly",
            Tab::Calendar => "Calendar",
        }
    }
}

#[cfg(debug_assertions)]
fn log_dashboard_render(year: YearFilter, book_count: usize) {
    // Lightweight render trace for diagnosing filter refresh issues.
    println!(
        "[dashboard] render (year={}, books={book_count})",
        year.as_value()
    );
}

#[component]
pub fn Dashboard() -> Element {
    let state = use_signal(DashboardState::load);

    // The most recent year with data is preselected; the month filter
    // resets whenever the year changes.
    let mut year = use_signal(move || {
        years_with_data(&state.peek().books)
            .first()
            .map(|y| YearFilter::Year(*y))
            .unwrap_or(YearFilter::All)
    });
    let mut month = use_signal(|| MonthFilter::All);
    let mut tab = use_signal(|| Tab::Pie);

    let snapshot = state();
    let years = years_with_data(&snapshot.books);
    let selected_year = year();
    let active_tab = tab();
    let scoped = scope_by_year(&snapshot.books, selected_year);

    #[cfg(debug_assertions)]
    {
        log_dashboard_render(selected_year, scoped.len());
    }

    rsx! {
        section { class: "page page-dashboard bookstats-wrapper",
            h1 { "Books by Language" }

            if let Some(error) = snapshot.error.as_ref() {
                div { class: "error", "{error}" }
            }

            if !years.is_empty() {
                div { class: "year-filter-container",
                    label {
                        class: "year-filter-label",
                        r#for: "bookstats-year-filter",
                        "Filter by Year:"
                    }
                    select {
                        id: "bookstats-year-filter",
                        class: "year-filter-select",
                        onchange: move |evt| {
                            year.set(YearFilter::parse(&evt.value()));
                            month.set(MonthFilter::All);
                        },
                        option {
                            value: "all",
                            selected: selected_year == YearFilter::All,
                            "All Time"
                        }
                        for y in years.iter().copied() {
                            option {
                                value: "{y}",
                                selected: selected_year == YearFilter::Year(y),
                                "{y}"
                            }
                        }
                    }
                }
            }

            div { class: "bookstats-tabs",
                for t in Tab::ALL {
                    button {
                        class: format!(
                            "bookstats-tab {}",
                            if active_tab == t { "active" } else { "" }
                        ),
                        onclick: move |_| tab.set(t),
                        "{t.label()}"
                    }
                }
            }

            div { class: "bookstats-tab-content active",
                match active_tab {
                    Tab::Pie => rsx! {
                        PieCard { books: scoped.clone(), year: selected_year, month }
                    },
                    Tab::Covers => rsx! {
                        CoversCard { books: scoped.clone(), year: selected_year, month }
                    },
                    Tab::Authors => rsx! {
                        AuthorsCard { books: scoped.clone() }
                    },
                    Tab::Timeline => rsx! {
                        TimelineCard { books: scoped.clone(), year: selected_year }
                    },
                    Tab::Duration => rsx! {
                        DurationCard { books: scoped.clone() }
                    },
                    Tab::Monthly => rsx! {
                        MonthlyCard { books: scoped.clone() }
                    },
                    Tab::Calendar => rsx! {
                        CalendarCard { books: scoped.clone() }
                    },
                }
            }
        }
    }
}

/// Restrict the book list to a finish year. In-progress books never
/// appear in any card, so a year scope keeps finished books only.
fn scope_by_year(books: &[Book], year: YearFilter) -> Vec<Book> {
    match year {
        YearFilter::All => books.to_vec(),
        YearFilter::Year(target) => books
            .iter()
            .filter(|book| {
                book.finished_on()
                    .map(|date| date.year() == target)
                    .unwrap_or(false)
            })
            .cloned()
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book(finish: Option<&str>) -> Book {
        Book {
            name: "x".into(),
            finish_date: finish.map(str::to_string),
            ..Book::default()
        }
    }

    #[test]
    fn year_scope_keeps_matching_finishes_only() {
        let books = vec![
            book(Some("2023-03-01")),
            book(Some("2024-03-01")),
            book(None),
        ];
        assert_eq!(scope_by_year(&books, YearFilter::Year(2023)).len(), 1);
        assert_eq!(scope_by_year(&books, YearFilter::All).len(), 3);
    }
}
