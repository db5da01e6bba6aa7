//! Language pie chart over the finished set, drawn as inline SVG.
//!
//! The four study languages get fixed buckets in a fixed order; books in
//! any other language are not represented here, matching the upstream
//! widget. Re-rendering replaces the whole SVG, so there is no retained
//! chart handle to destroy.

use dioxus::prelude::*;

use crate::core::{
    book::Book,
    filter::{self, MonthFilter, YearFilter},
    format::format_percent,
    language::{LanguageCounts, CHART_ORDER},
};

use super::MonthFilterBar;

/// Fixed labels, aligned values, and precomputed slice geometry.
#[derive(Debug, Clone, PartialEq)]
pub struct PieModel {
    pub labels: [&'static str; 4],
    pub values: [u32; 4],
    pub total: u32,
    pub slices: Vec<Slice>,
}

/// One drawn wedge. Zero-valued buckets produce no slice.
#[derive(Debug, Clone, PartialEq)]
pub struct Slice {
    pub label: &'static str,
    pub value: u32,
    /// Fraction of the charted total, 0..=1.
    pub share: f64,
    /// SVG path in the 200x200 view box.
    pub path: String,
    pub color: &'static str,
    pub border: &'static str,
}

/// Aggregate a book list into the four fixed buckets.
pub fn language_breakdown<'a>(books: impl IntoIterator<Item = &'a Book>) -> PieModel {
    let counts = LanguageCounts::tally(books);
    let values = counts.charted_values();

    PieModel {
        labels: CHART_ORDER.map(|language| language.label()),
        values,
        total: counts.charted_total(),
        slices: pie_slices(values),
    }
}

const CX: f64 = 100.0;
const CY: f64 = 100.0;
const R: f64 = 90.0;

/// Wedge geometry for values in chart order, starting at twelve o'clock
/// and sweeping clockwise.
pub fn pie_slices(values: [u32; 4]) -> Vec<Slice> {
    let total: u32 = values.iter().sum();
    if total == 0 {
        return Vec::new();
    }

    let mut slices = Vec::new();
    let mut angle = -90.0_f64;
    for (language, value) in CHART_ORDER.into_iter().zip(values) {
        if value == 0 {
            continue;
        }
        let share = f64::from(value) / f64::from(total);
        let sweep = share * 360.0;
        let path = if value == total {
            full_circle_path()
        } else {
            wedge_path(angle, angle + sweep)
        };
        slices.push(Slice {
            label: language.label(),
            value,
            share,
            path,
            color: language.color().bg,
            border: language.color().border,
        });
        angle += sweep;
    }
    slices
}

fn rim_point(angle_deg: f64) -> (f64, f64) {
    let rad = angle_deg.to_radians();
    (CX + R * rad.cos(), CY + R * rad.sin())
}

fn wedge_path(start: f64, end: f64) -> String {
    let (x1, y1) = rim_point(start);
    let (x2, y2) = rim_point(end);
    let large_arc = i32::from(end - start > 180.0);
    format!("M {CX:.2} {CY:.2} L {x1:.2} {y1:.2} A {R:.2} {R:.2} 0 {large_arc} 1 {x2:.2} {y2:.2} Z")
}

/// A single bucket holding every book degenerates the wedge arc, so a
/// full disc is drawn with two half arcs instead.
fn full_circle_path() -> String {
    let top = CY - R;
    let bottom = CY + R;
    format!(
        "M {CX:.2} {top:.2} A {R:.2} {R:.2} 0 1 1 {CX:.2} {bottom:.2} A {R:.2} {R:.2} 0 1 1 {CX:.2} {top:.2} Z"
    )
}

#[component]
pub fn PieCard(books: Vec<Book>, year: YearFilter, month: Signal<MonthFilter>) -> Element {
    let mut finished = filter::finished_books(&books);
    filter::sort_by_finish_desc(&mut finished);

    let (options, visible) = match year {
        YearFilter::All => (Vec::new(), finished),
        YearFilter::Year(target) => {
            let options = filter::month_options(&finished, target, month());
            if options.is_empty() {
                (options, finished)
            } else {
                (options, filter::filter_by_month(&finished, month()))
            }
        }
    };

    let model = language_breakdown(visible.iter().map(|entry| entry.book));

    rsx! {
        section { class: "chart-card",
            if !options.is_empty() {
                MonthFilterBar { options: options.clone(), selection: month }
            }

            if model.total == 0 {
                p { class: "covers-empty", "No finished books available" }
            } else {
                div { class: "chart-container",
                    svg { view_box: "0 0 200 200", role: "img",
                        for slice in model.slices.iter() {
                            path {
                                d: "{slice.path}",
                                fill: "{slice.color}",
                                stroke: "{slice.border}",
                                stroke_width: "2",
                            }
                        }
                    }
                }

                ul { class: "chart-legend",
                    for slice in model.slices.iter() {
                        li { class: "chart-legend__item",
                            span {
                                class: "chart-legend__swatch",
                                style: "background-color: {slice.color}",
                            }
                            span {
                                "{slice.label}: {slice.value} books ({format_percent(slice.share * 100.0)})"
                            }
                        }
                    }
                }

                div { class: "breakdown",
                    h2 { "Books Read" }
                    div { class: "breakdown-total", "{model.total} books" }
                }
            }
        }
    }
}
