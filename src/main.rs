//! p4ci - change detection and labeling for Perforce-backed CI pipelines
//!
//! Thin binary wrapper; all behavior lives in the library's `cli` module.

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

/// Main entry point for the p4ci CLI
fn main() {
    if let Err(err) = p4ci::cli::run() {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}
