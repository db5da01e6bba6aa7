//! Shared UI crate for BookStats. Cross-platform logic and views live here.

pub mod core;
pub mod dashboard;
pub mod views;
