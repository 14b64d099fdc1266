//! CLI module for minscan.
//!
//! Each command is a thin composition of the library stages: a schema
//! source, the audit pipeline and a report sink, plus terminal output.

pub mod audit;
pub mod error;
pub mod output;
pub mod schema;
