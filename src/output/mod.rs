//! Output module
//! Report structures and formatters for console, JSON, and CSV

pub mod formatter;
pub mod report;
