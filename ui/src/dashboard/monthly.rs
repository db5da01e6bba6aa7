//! Monthly chart: books finished and pages read per calendar month.

use dioxus::prelude::*;

use crate::core::{
    book::Book,
    date::month_abbrev,
    filter,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthStat {
    pub month: u8,
    pub label: &'static str,
    pub books: u32,
    pub pages: u32,
}

/// Twelve aligned buckets plus the maxima used to scale the bars.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthlyTotals {
    pub stats: Vec<MonthStat>,
    pub max_books: u32,
    pub max_pages: u32,
}

/// Bucket a finished set by calendar month. When the caller scopes to a
/// single year this is that year's profile; over all time it aggregates
/// the same month across years.
pub fn monthly_totals(finished: &[filter::Finished<'_>]) -> MonthlyTotals {
    let mut books = [0u32; 12];
    let mut pages = [0u32; 12];

    for entry in finished {
        let idx = entry.finished_on.month() as usize - 1;
        books[idx] += 1;
        pages[idx] += entry.book.pages.unwrap_or(0);
    }

    let stats = (1..=12u8)
        .map(|month| MonthStat {
            month,
            label: month_abbrev(month),
            books: books[month as usize - 1],
            pages: pages[month as usize - 1],
        })
        .collect();

    MonthlyTotals {
        stats,
        max_books: books.iter().copied().max().unwrap_or(0),
        max_pages: pages.iter().copied().max().unwrap_or(0),
    }
}

#[component]
pub fn MonthlyCard(books: Vec<Book>) -> Element {
    let finished = filter::finished_books(&books);
    let totals = monthly_totals(&finished);

    rsx! {
        section { class: "monthly-chart",
            if totals.max_books == 0 {
                p { class: "covers-empty", "No finished books available" }
            } else {
                for stat in totals.stats.iter() {
                    div { class: "monthly-row",
                        span { class: "monthly-label", "{stat.label}" }
                        div { class: "monthly-bars",
                            div {
                                class: "monthly-bar monthly-bar-books",
                                style: "width: {bar_width(stat.books, totals.max_books):.2}%",
                                if stat.books > 0 { "{stat.books}" }
                            }
                            div {
                                class: "monthly-bar monthly-bar-pages",
                                style: "width: {bar_width(stat.pages, totals.max_pages):.2}%",
                                if stat.pages > 0 { "{stat.pages}p" }
                            }
                        }
                    }
                }
                div { class: "monthly-legend",
                    span { class: "monthly-legend__books", "Books" }
                    span { class: "monthly-legend__pages", "Pages" }
                }
            }
        }
    }
}

fn bar_width(value: u32, max: u32) -> f64 {
    if max == 0 {
        0.0
    } else {
        f64::from(value) / f64::from(max) * 100.0
    }
}
