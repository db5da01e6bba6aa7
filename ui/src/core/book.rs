//! The reading-log record supplied by the upstream sheet snapshot.

use serde::{Deserialize, Serialize};

use super::date::parse_local_date;
use time::Date;

/// One row of the reading log. Field names follow the exported sheet
/// snapshot (camelCase keys).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub finish_date: Option<String>,
    #[serde(default)]
    pub currently_reading: bool,
    #[serde(default)]
    pub language: String,
    #[serde(default)]
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pages: Option<u32>,
}

impl Book {
    /// A book counts as finished once it carries a finish date and is no
    /// longer marked as in progress.
    pub fn is_finished(&self) -> bool {
        !self.currently_reading
            && self
                .finish_date
                .as_deref()
                .map(|raw| !raw.trim().is_empty())
                .unwrap_or(false)
    }

    /// Parsed finish date, `None` when absent or malformed. Malformed
    /// dates drop the book from every date-driven view (fail closed).
    pub fn finished_on(&self) -> Option<Date> {
        if self.currently_reading {
            return None;
        }
        self.finish_date.as_deref().and_then(parse_local_date)
    }

    /// Parsed start date, when one was recorded.
    pub fn started_on(&self) -> Option<Date> {
        self.start_date.as_deref().and_then(parse_local_date)
    }

    /// Author for display, with the shared fallback label.
    pub fn author_label(&self) -> &str {
        match self.author.as_deref() {
            Some(author) if !author.trim().is_empty() => author,
            _ => "Unknown Author",
        }
    }
}
