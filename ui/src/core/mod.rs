//! Pure, platform-agnostic building blocks for the dashboard.

pub mod book;
pub mod date;
pub mod filter;
pub mod format;
pub mod language;
pub mod platform;
pub mod source;
pub mod text;
