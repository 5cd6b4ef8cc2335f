//! Phase-1 parser for the `changes` listing
//!
//! With tagged output enabled the listing looks like:
//!
//! ```text
//! info: Change 3328 on 2002/10/31 by someone@somewhere 'Something important '
//! info: Change 3327 on 2002/10/31 by someone@somewhere 'Joe's test '
//! exit: 0
//! ```
//!
//! Only the `info: Change ...` lines matter; the `exit:` trailer and any
//! other framing are ignored. An output with no matching lines is a normal
//! empty window, not an error.

use chrono::NaiveDate;
use regex::Regex;

use crate::core::models::ChangeListEntry;

/// Parses `changes` listings into ordered change list entries
#[derive(Debug)]
pub struct ChangesParser {
    change_line: Regex,
}

impl Default for ChangesParser {
    fn default() -> Self {
        Self::new()
    }
}

impl ChangesParser {
    /// Create a parser with its line grammar compiled
    #[must_use]
    pub fn new() -> Self {
        Self {
            change_line: Regex::new(
                r"^info: Change (\d+) on (\d{4}/\d{2}/\d{2}) by ([^@\s]+)@(\S+) '(.*)'\s*$",
            )
            .expect("change line grammar is valid"),
        }
    }

    /// Extract change list entries, preserving input order
    #[must_use]
    pub fn parse(&self, output: &str) -> Vec<ChangeListEntry> {
        output
            .lines()
            .filter_map(|line| self.parse_line(line))
            .collect()
    }

    fn parse_line(&self, line: &str) -> Option<ChangeListEntry> {
        let caps = self.change_line.captures(line.trim_end())?;
        let date = NaiveDate::parse_from_str(&caps[2], "%Y/%m/%d").ok()?;
        Some(ChangeListEntry {
            number: caps[1].to_string(),
            date,
            author: caps[3].to_string(),
        })
    }
}
