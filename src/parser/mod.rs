//! Parsers for the tool's textual output
//!
//! The tool has no machine-readable protocol, so change detection scrapes
//! two loosely-structured text formats. Both parsers are line-oriented and
//! tolerant: each line is classified independently, unrecognized lines are
//! dropped, and a single malformed block never aborts the whole parse.
//!
//! - [`ChangesParser`] - phase 1, the `changes` listing
//! - [`DescribeParser`] - phase 2, the `describe` expansion

mod changes;
mod describe;

pub use changes::ChangesParser;
pub use describe::DescribeParser;
