//! Change records extracted from the tool's output
//!
//! Phase 1 of change detection produces [`ChangeListEntry`] records from the
//! `changes` listing; phase 2 expands them into one [`Modification`] per
//! affected file. A change list touching N files yields N modifications.

use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;

/// A submitted change list as reported by the `changes` listing
///
/// Intermediate record: produced by phase-1 parsing, consumed immediately by
/// phase 2, never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeListEntry {
    /// Change list number, kept textual for command assembly
    pub number: String,

    /// Submission date as printed in the listing
    pub date: NaiveDate,

    /// Submitting user
    pub author: String,
}

/// One modified file within a submitted change list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Modification {
    /// Number of the change list this file belongs to
    pub change_number: String,

    /// User who submitted the change list
    pub author: String,

    /// Submission instant from the describe header
    pub date: NaiveDateTime,

    /// Full change list description
    pub comment: String,

    /// Leaf file name within the depot
    pub file_name: String,

    /// Depot folder containing the file
    pub folder_name: String,

    /// Revision action verbatim from the tool (`add`, `edit`, `delete`, ...)
    #[serde(rename = "type")]
    pub modification_type: String,
}
