//! Language normalization and the fixed display palette.
//!
//! Raw labels in the sheet are free-form ("Korean", "한국어", "Chinese
//! (Simplified)", …). Every view maps them onto the same small set of
//! categories so colors and chart buckets stay consistent.

use super::book::Book;

/// Normalized language category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    Korean,
    Japanese,
    ChineseTraditional,
    ChineseSimplified,
    Other,
}

/// Background/border color pair for one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageColor {
    pub bg: &'static str,
    pub border: &'static str,
}

/// Bucket order used by the pie chart. "Other" is intentionally absent:
/// the chart only tracks the four study languages.
pub const CHART_ORDER: [Language; 4] = [
    Language::Korean,
    Language::Japanese,
    Language::ChineseTraditional,
    Language::ChineseSimplified,
];

impl Language {
    /// Map a raw sheet label onto a category. Unrecognized labels land in
    /// `Other`; a bare "Chinese" is treated as Traditional.
    pub fn classify(raw: &str) -> Self {
        let lower = raw.trim().to_lowercase();
        if lower.is_empty() {
            Self::Other
        } else if lower.contains("korean") || lower.contains("한국") {
            Self::Korean
        } else if lower.contains("japanese") || lower.contains("日本") {
            Self::Japanese
        } else if lower.contains("simplified") || lower.contains("简") {
            Self::ChineseSimplified
        } else if lower.contains("traditional")
            || lower.contains("繁")
            || lower.contains("chinese")
            || lower.contains("中文")
        {
            Self::ChineseTraditional
        } else {
            Self::Other
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Korean => "Korean",
            Self::Japanese => "Japanese",
            Self::ChineseTraditional => "Traditional Chinese",
            Self::ChineseSimplified => "Simplified Chinese",
            Self::Other => "Other",
        }
    }

    pub fn color(self) -> LanguageColor {
        match self {
            Self::Korean => LanguageColor {
                bg: "#1976d2",
                border: "#1565c0",
            },
            Self::Japanese => LanguageColor {
                bg: "#e15759",
                border: "#c94a4c",
            },
            Self::ChineseTraditional => LanguageColor {
                bg: "#59a14f",
                border: "#4a8a42",
            },
            Self::ChineseSimplified => LanguageColor {
                bg: "#f28e2b",
                border: "#d97c1f",
            },
            Self::Other => LanguageColor {
                bg: "#999999",
                border: "#7f7f7f",
            },
        }
    }
}

/// Convenience wrappers mirroring the two lookups every view performs.
pub fn normalize_language(raw: &str) -> &'static str {
    Language::classify(raw).label()
}

pub fn language_color(raw: &str) -> LanguageColor {
    Language::classify(raw).color()
}

/// Per-category tallies over a book list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LanguageCounts {
    pub korean: u32,
    pub japanese: u32,
    pub chinese_traditional: u32,
    pub chinese_simplified: u32,
    pub other: u32,
}

impl LanguageCounts {
    pub fn tally<'a>(books: impl IntoIterator<Item = &'a Book>) -> Self {
        let mut counts = Self::default();
        for book in books {
            match Language::classify(&book.language) {
                Language::Korean => counts.korean += 1,
                Language::Japanese => counts.japanese += 1,
                Language::ChineseTraditional => counts.chinese_traditional += 1,
                Language::ChineseSimplified => counts.chinese_simplified += 1,
                Language::Other => counts.other += 1,
            }
        }
        counts
    }

    /// Values aligned with [`CHART_ORDER`].
    pub fn charted_values(&self) -> [u32; 4] {
        [
            self.korean,
            self.japanese,
            self.chinese_traditional,
            self.chinese_simplified,
        ]
    }

    /// Total across the four charted buckets. Books in other languages
    /// are not represented in the pie and are excluded here as well.
    pub fn charted_total(&self) -> u32 {
        self.charted_values().iter().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_common_labels() {
        assert_eq!(Language::classify("Korean"), Language::Korean);
        assert_eq!(Language::classify("한국어"), Language::Korean);
        assert_eq!(Language::classify("japanese"), Language::Japanese);
        assert_eq!(
            Language::classify("Chinese (Simplified)"),
            Language::ChineseSimplified
        );
        assert_eq!(
            Language::classify("Traditional Chinese"),
            Language::ChineseTraditional
        );
        assert_eq!(
            Language::classify("Chinese"),
            Language::ChineseTraditional
        );
        assert_eq!(Language::classify("French"), Language::Other);
        assert_eq!(Language::classify(""), Language::Other);
    }

    #[test]
    fn tally_counts_each_bucket() {
        let books: Vec<Book> = ["Korean", "Korean", "Japanese", "French"]
            .iter()
            .map(|lang| Book {
                name: "x".into(),
                language: (*lang).into(),
                ..Book::default()
            })
            .collect();

        let counts = LanguageCounts::tally(&books);
        assert_eq!(counts.charted_values(), [2, 1, 0, 0]);
        assert_eq!(counts.charted_total(), 3);
        assert_eq!(counts.other, 1);
    }
}
