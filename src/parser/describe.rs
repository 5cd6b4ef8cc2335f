//! Phase-2 parser for the `describe` expansion
//!
//! With tagged output enabled, each change list is framed as:
//!
//! ```text
//! text: Change 3328 by someone@somewhere on 2002/10/31 18:20:59
//! text:
//! text: \tSomething important
//! text:
//! text: Affected files ...
//! text:
//! info1: //depot/myproject/docs/readme.txt#3 edit
//! ```
//!
//! Lines are classified one at a time into the [`DescribeLine`] variants;
//! a malformed header drops its whole block (files must never be attributed
//! to the wrong change list), while any other unrecognized line is skipped
//! on its own. Partial extraction always wins over total failure.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use regex::Regex;

use crate::core::models::Modification;

/// One classified line of describe output
#[derive(Debug)]
enum DescribeLine {
    /// Well-formed change list header
    Header {
        number: String,
        author: String,
        date: NaiveDateTime,
    },
    /// A header-shaped line failing the full grammar; poisons its block
    MalformedHeader,
    /// Tab-indented description text under the current header
    Comment(String),
    /// The `Affected files ...` marker opening the file listing
    AffectedFiles,
    /// One affected file with its revision action
    File {
        folder: String,
        file: String,
        action: String,
    },
    /// Framing, blank lines, exit status: carries no content
    Ignorable,
}

/// Block state carried between lines while scanning
#[derive(Debug)]
struct CurrentChange {
    number: String,
    author: String,
    date: NaiveDateTime,
    comment_lines: Vec<String>,
    comment: String,
    in_files: bool,
}

impl CurrentChange {
    fn seal_comment(&mut self) {
        self.comment = self.comment_lines.join("\n").trim_end().to_string();
        self.in_files = true;
    }
}

/// Parses `describe` output into one [`Modification`] per affected file
#[derive(Debug)]
pub struct DescribeParser {
    header_line: Regex,
    file_line: Regex,
}

impl Default for DescribeParser {
    fn default() -> Self {
        Self::new()
    }
}

impl DescribeParser {
    /// Create a parser with its line grammars compiled
    #[must_use]
    pub fn new() -> Self {
        Self {
            header_line: Regex::new(
                r"^text: Change (\d+) by ([^@\s]+)@(\S+) on (\d{4}/\d{2}/\d{2})(?: (\d{2}:\d{2}:\d{2}))?$",
            )
            .expect("header line grammar is valid"),
            file_line: Regex::new(r"^info1: (.+)#(\d+) (\S+)$").expect("file line grammar is valid"),
        }
    }

    /// Extract modifications, flattened across all change list blocks
    #[must_use]
    pub fn parse(&self, output: &str) -> Vec<Modification> {
        let mut modifications = Vec::new();
        let mut current: Option<CurrentChange> = None;

        for line in output.lines() {
            match self.classify(line) {
                DescribeLine::Header {
                    number,
                    author,
                    date,
                } => {
                    current = Some(CurrentChange {
                        number,
                        author,
                        date,
                        comment_lines: Vec::new(),
                        comment: String::new(),
                        in_files: false,
                    });
                },
                DescribeLine::MalformedHeader => {
                    current = None;
                },
                DescribeLine::Comment(text) => {
                    if let Some(change) = current.as_mut() {
                        if !change.in_files {
                            change.comment_lines.push(text);
                        }
                    }
                },
                DescribeLine::AffectedFiles => {
                    if let Some(change) = current.as_mut() {
                        change.seal_comment();
                    }
                },
                DescribeLine::File {
                    folder,
                    file,
                    action,
                } => {
                    if let Some(change) = current.as_mut() {
                        if !change.in_files {
                            change.seal_comment();
                        }
                        modifications.push(Modification {
                            change_number: change.number.clone(),
                            author: change.author.clone(),
                            date: change.date,
                            comment: change.comment.clone(),
                            file_name: file,
                            folder_name: folder,
                            modification_type: action,
                        });
                    }
                },
                DescribeLine::Ignorable => {},
            }
        }

        modifications
    }

    fn classify(&self, line: &str) -> DescribeLine {
        let line = line.trim_end();
        if let Some(rest) = line.strip_prefix("text: ") {
            if rest.starts_with("Change ") {
                return self.classify_header(line);
            }
            if rest.starts_with("Affected files") {
                return DescribeLine::AffectedFiles;
            }
            if let Some(comment) = rest.strip_prefix('\t') {
                return DescribeLine::Comment(comment.to_string());
            }
            return DescribeLine::Ignorable;
        }
        if line.starts_with("info1: ") {
            return self.classify_file(line);
        }
        DescribeLine::Ignorable
    }

    fn classify_header(&self, line: &str) -> DescribeLine {
        let Some(caps) = self.header_line.captures(line) else {
            return DescribeLine::MalformedHeader;
        };
        let Ok(date) = NaiveDate::parse_from_str(&caps[4], "%Y/%m/%d") else {
            return DescribeLine::MalformedHeader;
        };
        let time = caps
            .get(5)
            .and_then(|t| NaiveTime::parse_from_str(t.as_str(), "%H:%M:%S").ok())
            .unwrap_or(NaiveTime::MIN);
        DescribeLine::Header {
            number: caps[1].to_string(),
            author: caps[2].to_string(),
            date: date.and_time(time),
        }
    }

    fn classify_file(&self, line: &str) -> DescribeLine {
        let Some(caps) = self.file_line.captures(line) else {
            return DescribeLine::Ignorable;
        };
        let Some((folder, file)) = caps[1].rsplit_once('/') else {
            return DescribeLine::Ignorable;
        };
        DescribeLine::File {
            folder: folder.to_string(),
            file: file.to_string(),
            action: caps[3].to_string(),
        }
    }
}
