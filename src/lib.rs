//! p4ci - change detection and labeling for Perforce-backed CI pipelines
//!
//! This library builds injection-safe `p4` command lines, parses the tool's
//! loosely-structured textual output into structured change records, and
//! manages build labels and workspace bootstrap through injected
//! collaborators.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod output;
pub mod p4;
pub mod parser;
