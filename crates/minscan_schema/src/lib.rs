//! Shared data model for minscan: the extracted relational schema and the
//! findings the analysis stages produce over it.
//!
//! This crate is deliberately free of I/O so the extraction backend, the
//! analysis and the report sinks can all depend on it without pulling in each
//! other's stacks.

mod findings;
mod model;

pub use findings::{Advisory, KeywordMatch, FALLBACK_CITATION};
pub use model::{Column, Schema, Table};
