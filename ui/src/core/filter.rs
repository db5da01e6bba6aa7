//! Filtering and grouping over the reading log.
//!
//! Every dashboard card starts from the same pipeline: restrict to
//! finished books with a parseable finish date, sort most recent first,
//! then narrow by the year/month selection the view holds.

use std::collections::BTreeSet;

use time::Date;

use super::book::Book;
use super::date::month_name;

/// Year selection carried by the dashboard view. Parses from and renders
/// back to the select-element values (`"all"` or a four-digit year).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum YearFilter {
    #[default]
    All,
    Year(i32),
}

impl YearFilter {
    pub fn parse(value: &str) -> Self {
        match value.trim().parse::<i32>() {
            Ok(year) => Self::Year(year),
            Err(_) => Self::All,
        }
    }

    pub fn as_value(self) -> String {
        match self {
            Self::All => "all".to_string(),
            Self::Year(year) => year.to_string(),
        }
    }
}

/// Month selection within a year (`"all"` or `"1"`..`"12"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MonthFilter {
    #[default]
    All,
    Month(u8),
}

impl MonthFilter {
    pub fn parse(value: &str) -> Self {
        match value.trim().parse::<u8>() {
            Ok(month) if (1..=12).contains(&month) => Self::Month(month),
            _ => Self::All,
        }
    }

    pub fn as_value(self) -> String {
        match self {
            Self::All => "all".to_string(),
            Self::Month(month) => month.to_string(),
        }
    }
}

/// A finished book together with its parsed finish date. Books whose
/// finish date fails to parse never make it into one of these.
#[derive(Debug, Clone, Copy)]
pub struct Finished<'a> {
    pub book: &'a Book,
    pub finished_on: Date,
}

/// Finished books, in input order. Unparseable finish dates are dropped.
pub fn finished_books(books: &[Book]) -> Vec<Finished<'_>> {
    books
        .iter()
        .filter(|book| book.is_finished())
        .filter_map(|book| {
            book.finished_on().map(|finished_on| Finished {
                book,
                finished_on,
            })
        })
        .collect()
}

/// Most recent finish first. The underlying sort is stable, so books
/// sharing a date keep their input order.
pub fn sort_by_finish_desc(finished: &mut [Finished<'_>]) {
    finished.sort_by(|a, b| b.finished_on.cmp(&a.finished_on));
}

/// Distinct 1-12 month numbers with at least one finish in `year`,
/// ascending.
pub fn available_months(finished: &[Finished<'_>], year: i32) -> Vec<u8> {
    let months: BTreeSet<u8> = finished
        .iter()
        .filter(|entry| entry.finished_on.year() == year)
        .map(|entry| entry.finished_on.month() as u8)
        .collect();
    months.into_iter().collect()
}

/// Narrow to a finish year. `All` passes everything through.
pub fn filter_by_year<'a>(finished: &[Finished<'a>], year: YearFilter) -> Vec<Finished<'a>> {
    match year {
        YearFilter::All => finished.to_vec(),
        YearFilter::Year(target) => finished
            .iter()
            .copied()
            .filter(|entry| entry.finished_on.year() == target)
            .collect(),
    }
}

/// Narrow to a finish month (the caller has already scoped by year).
pub fn filter_by_month<'a>(finished: &[Finished<'a>], month: MonthFilter) -> Vec<Finished<'a>> {
    match month {
        MonthFilter::All => finished.to_vec(),
        MonthFilter::Month(target) => finished
            .iter()
            .copied()
            .filter(|entry| entry.finished_on.month() as u8 == target)
            .collect(),
    }
}

/// Distinct finish years, most recent first. Feeds the year dropdown.
pub fn years_with_data(books: &[Book]) -> Vec<i32> {
    let years: BTreeSet<i32> = finished_books(books)
        .iter()
        .map(|entry| entry.finished_on.year())
        .collect();
    years.into_iter().rev().collect()
}

/// One row of a month-selector dropdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthOption {
    pub value: String,
    pub label: String,
    pub selected: bool,
}

/// Dropdown rows for a year's available months, led by "All Year".
/// Empty when the year has no finished books at all.
pub fn month_options(
    finished: &[Finished<'_>],
    year: i32,
    selection: MonthFilter,
) -> Vec<MonthOption> {
    let months = available_months(finished, year);
    if months.is_empty() {
        return Vec::new();
    }

    let mut options = vec![MonthOption {
        value: "all".to_string(),
        label: "All Year".to_string(),
        selected: selection == MonthFilter::All,
    }];
    for month in months {
        options.push(MonthOption {
            value: month.to_string(),
            label: month_name(month).to_string(),
            selected: selection == MonthFilter::Month(month),
        });
    }
    options
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book(name: &str, finish: &str) -> Book {
        Book {
            name: name.into(),
            finish_date: Some(finish.into()),
            ..Book::default()
        }
    }

    fn sample() -> Vec<Book> {
        vec![
            book("a", "2023-02-10"),
            book("b", "2023-02-20"),
            book("c", "2023-07-01"),
            book("d", "2024-01-01"),
        ]
    }

    #[test]
    fn finished_set_membership() {
        let mut books = sample();
        books.push(Book {
            name: "reading".into(),
            finish_date: Some("2024-02-02".into()),
            currently_reading: true,
            ..Book::default()
        });
        books.push(Book {
            name: "no date".into(),
            ..Book::default()
        });
        books.push(book("bad date", "not-a-date"));

        let finished = finished_books(&books);
        let names: Vec<&str> = finished.iter().map(|e| e.book.name.as_str()).collect();
        assert_eq!(names, ["a", "b", "c", "d"]);
    }

    #[test]
    fn sorts_most_recent_first() {
        let books = vec![
            book("a", "2023-01-05"),
            book("b", "2024-06-01"),
            book("c", "2023-12-31"),
        ];
        let mut finished = finished_books(&books);
        sort_by_finish_desc(&mut finished);
        let dates: Vec<String> = finished
            .iter()
            .map(|e| e.book.finish_date.clone().unwrap())
            .collect();
        assert_eq!(dates, ["2024-06-01", "2023-12-31", "2023-01-05"]);
    }

    #[test]
    fn available_months_are_distinct_and_ascending() {
        let books = sample();
        let finished = finished_books(&books);
        assert_eq!(available_months(&finished, 2023), [2, 7]);
        assert_eq!(available_months(&finished, 2024), [1]);
        assert!(available_months(&finished, 2020).is_empty());
    }

    #[test]
    fn year_and_month_filters_narrow() {
        let books = sample();
        let finished = finished_books(&books);

        let in_2023 = filter_by_year(&finished, YearFilter::Year(2023));
        assert_eq!(in_2023.len(), 3);

        let feb = filter_by_month(&in_2023, MonthFilter::Month(2));
        assert_eq!(feb.len(), 2);

        assert_eq!(filter_by_month(&in_2023, MonthFilter::All).len(), 3);
    }

    #[test]
    fn years_listed_most_recent_first() {
        assert_eq!(years_with_data(&sample()), [2024, 2023]);
    }

    #[test]
    fn filters_parse_select_values() {
        assert_eq!(YearFilter::parse("all"), YearFilter::All);
        assert_eq!(YearFilter::parse("2023"), YearFilter::Year(2023));
        assert_eq!(MonthFilter::parse("7"), MonthFilter::Month(7));
        assert_eq!(MonthFilter::parse("all"), MonthFilter::All);
        assert_eq!(MonthFilter::parse("13"), MonthFilter::All);
        assert_eq!(MonthFilter::Month(7).as_value(), "7");
    }

    #[test]
    fn month_options_mark_current_selection() {
        let books = sample();
        let finished = finished_books(&books);
        let options = month_options(&finished, 2023, MonthFilter::Month(7));

        let labels: Vec<&str> = options.iter().map(|o| o.label.as_str()).collect();
        assert_eq!(labels, ["All Year", "February", "July"]);
        assert!(!options[0].selected);
        assert!(options[2].selected);

        assert!(month_options(&finished, 2021, MonthFilter::All).is_empty());
    }
}
