//! Section splitting
//!
//!     A grammar file is a sequence of titled sections holding rule text:
//!
//!         [[ Expressions ]]          % level 1 header
//!         expr = <term> | <term> "+" <expr> ;
//!         [ Literals ]               % level 2 header, nested under the above
//!         literal = <number> | <string> ;
//!
//!     Splitting works line by line. A `%` starts a comment running to the end of
//!     the line. Lines that are empty once the comment and surrounding spaces are
//!     gone are dropped. Header lines open a new section (closing the current one),
//!     every other line is appended, newline-terminated, to the open section's body.
//!
//!     The first meaningful line must be a level 1 header: content or a level 2
//!     header with no enclosing section is rejected.

use crate::syntax::error::GrammarError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

/// `[[ Title ]]`, the whole line
static SECTION_HEADER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\[\[([A-Za-z ]+)\]\]\s*$").unwrap());

/// `[ Title ]`, the whole line
static SUBSECTION_HEADER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\[([A-Za-z ]+)\]\s*$").unwrap());

/// Nesting level of a section
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Section,
    Subsection,
}

/// A titled group of rule text
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    pub title: String,
    pub level: Level,
    pub body: String,
}

impl Section {
    pub fn new(title: impl Into<String>, level: Level, body: impl Into<String>) -> Self {
        Section {
            title: title.into(),
            level,
            body: body.into(),
        }
    }
}

/// Remove a `%` comment and the surrounding spaces of a line
pub fn strip_line(line: &str) -> &str {
    let code = match line.find('%') {
        Some(index) => &line[..index],
        None => line,
    };
    code.trim_start_matches(' ').trim_end()
}

/// Split grammar source into its sections, in file order.
pub fn split_sections(source: &str) -> Result<Vec<Section>, GrammarError> {
    let mut sections = Vec::new();
    let mut current: Option<Section> = None;

    for (index, raw) in source.lines().enumerate() {
        let line_number = index + 1;
        let line = strip_line(raw);
        if line.is_empty() {
            continue;
        }

        if let Some(captures) = SECTION_HEADER.captures(line) {
            if let Some(open) = current.take() {
                sections.push(open);
            }
            current = Some(Section::new(captures[1].trim(), Level::Section, ""));
            continue;
        }

        if let Some(captures) = SUBSECTION_HEADER.captures(line) {
            let open = current.take().ok_or(GrammarError::NoEnclosingSection {
                line: line_number,
            })?;
            sections.push(open);
            current = Some(Section::new(captures[1].trim(), Level::Subsection, ""));
            continue;
        }

        let open = current.as_mut().ok_or(GrammarError::NoEnclosingSection {
            line: line_number,
        })?;
        open.body.push_str(line);
        open.body.push('\n');
    }

    if let Some(open) = current {
        sections.push(open);
    }

    log::debug!("split source into {} sections", sections.len());
    Ok(sections)
}
