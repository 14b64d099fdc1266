//! Minscan core library.
//!
//! Classifies the columns of an extracted database schema against a
//! sensitive-keyword vocabulary and attaches remediation advisories.
//! Extraction backends live in `minscan_db`, report sinks in
//! `minscan_sinks`; this crate hosts the pure analysis stages and the CLI.

pub mod audit;
