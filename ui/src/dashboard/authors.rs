//! Authors table: finished books grouped by author.

use std::collections::BTreeMap;

use dioxus::prelude::*;

use crate::core::{book::Book, filter};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorRow {
    pub name: String,
    pub count: u32,
}

/// Group a finished set by author label, most-read author first, ties
/// broken alphabetically.
pub fn author_counts(finished: &[filter::Finished<'_>]) -> Vec<AuthorRow> {
    let mut counts: BTreeMap<String, u32> = BTreeMap::new();
    for entry in finished {
        *counts
            .entry(entry.book.author_label().to_string())
            .or_insert(0) += 1;
    }

    let mut rows: Vec<AuthorRow> = counts
        .into_iter()
        .map(|(name, count)| AuthorRow { name, count })
        .collect();
    // BTreeMap already yields names ascending; the stable sort keeps that
    // order within equal counts.
    rows.sort_by(|a, b| b.count.cmp(&a.count));
    rows
}

#[component]
pub fn AuthorsCard(books: Vec<Book>) -> Element {
    let finished = filter::finished_books(&books);
    let rows = author_counts(&finished);
    let total_books: u32 = rows.iter().map(|row| row.count).sum();

    rsx! {
        section { class: "authors-card",
            if rows.is_empty() {
                p { class: "authors-empty", "No finished books available" }
            } else {
                table { class: "authors-table",
                    thead {
                        tr {
                            th { "Author" }
                            th { class: "authors-count", "Books" }
                        }
                    }
                    tbody {
                        for row in rows.iter() {
                            tr {
                                td { "{row.name}" }
                                td { class: "authors-count", "{row.count}" }
                            }
                        }
                    }
                }
                p { class: "authors-total", "{rows.len()} authors · {total_books} books" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book(author: Option<&str>, finish: &str) -> Book {
        Book {
            name: "x".into(),
            author: author.map(str::to_string),
            finish_date: Some(finish.into()),
            ..Book::default()
        }
    }

    #[test]
    fn counts_group_and_sort() {
        let books = vec![
            book(Some("Kim"), "2023-01-01"),
            book(Some("Abe"), "2023-02-01"),
            book(Some("Kim"), "2023-03-01"),
            book(None, "2023-04-01"),
        ];
        let finished = filter::finished_books(&books);
        let rows = author_counts(&finished);

        assert_eq!(rows[0].name, "Kim");
        assert_eq!(rows[0].count, 2);
        // Ties resolve alphabetically.
        assert_eq!(rows[1].name, "Abe");
        assert_eq!(rows[2].name, "Unknown Author");
    }

    #[test]
    fn empty_input_yields_no_rows() {
        assert!(author_counts(&[]).is_empty());
    }
}
