//! CLI library components for reclink.

pub mod logging;
pub mod records;
pub mod report;
