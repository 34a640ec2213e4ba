//! Presentation modes
//!
//! Each mode is a pure function from the section sequence to a [`Document`]:
//!
//! - `collected`: one heading and one rules block per section, rules in
//!   source order.
//! - `ordered`: alternatives of identically named productions are merged
//!   across all sections, then names and alternatives are sorted. Identical
//!   alternatives from different sections are kept, not deduplicated.
//! - `keywords`: the sorted union of the keyword terminals of every
//!   alternative.

use crate::syntax::document::{Block, Document, Production};
use crate::syntax::error::GrammarError;
use crate::syntax::keywords::collect_keywords;
use crate::syntax::rendering::{render_rule, Fragment};
use crate::syntax::rules::{split_rule, split_rules};
use crate::syntax::sections::Section;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Collected,
    Ordered,
    Keywords,
}

impl Mode {
    pub const ALL: [Mode; 3] = [Mode::Collected, Mode::Ordered, Mode::Keywords];

    pub fn name(self) -> &'static str {
        match self {
            Mode::Collected => "collected",
            Mode::Ordered => "ordered",
            Mode::Keywords => "keywords",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Mode::Collected => "Rules per section, in source order",
            Mode::Ordered => "All productions merged and alphabetized",
            Mode::Keywords => "Sorted index of keyword terminals",
        }
    }

    /// Run this mode's driver over the sections
    pub fn run(self, sections: &[Section]) -> Result<Document, GrammarError> {
        log::debug!("running {} mode over {} sections", self, sections.len());
        match self {
            Mode::Collected => collected(sections),
            Mode::Ordered => ordered(sections),
            Mode::Keywords => keywords(sections),
        }
    }
}

impl FromStr for Mode {
    type Err = GrammarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Mode::ALL
            .into_iter()
            .find(|mode| mode.name() == s)
            .ok_or_else(|| GrammarError::UnknownMode(s.to_string()))
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Headings and rules of every section, in file order
pub fn collected(sections: &[Section]) -> Result<Document, GrammarError> {
    let mut document = Document::new(Mode::Collected);

    for section in sections {
        document.push(Block::Heading {
            level: section.level,
            title: section.title.clone(),
        });

        let productions = split_rules(&section.body)
            .into_iter()
            .map(|rule| render_rule(rule).map(Production::new))
            .collect::<Result<Vec<_>, _>>()?;
        if !productions.is_empty() {
            document.push(Block::Rules { productions });
        }
    }

    Ok(document)
}

/// Alternatives of every production name across all sections
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductionTable {
    productions: BTreeMap<String, Vec<String>>,
}

impl ProductionTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the alternatives of one rule string
    pub fn insert_rule(&mut self, rule: &str) -> Result<(), GrammarError> {
        let parts = split_rule(rule)?;
        self.productions
            .entry(parts.name.to_string())
            .or_default()
            .extend(parts.alternatives.into_iter().map(str::to_string));
        Ok(())
    }

    /// Add every rule of a section
    pub fn merge_section(mut self, section: &Section) -> Result<Self, GrammarError> {
        for rule in split_rules(&section.body) {
            self.insert_rule(rule)?;
        }
        Ok(self)
    }

    pub fn len(&self) -> usize {
        self.productions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.productions.is_empty()
    }

    /// Alternatives of a name, in insertion order
    pub fn alternatives(&self, name: &str) -> Option<&[String]> {
        self.productions.get(name).map(Vec::as_slice)
    }

    /// Names ascending, each with its alternatives ascending
    pub fn into_sorted(self) -> Vec<(String, Vec<String>)> {
        self.productions
            .into_iter()
            .map(|(name, mut alternatives)| {
                alternatives.sort();
                (name, alternatives)
            })
            .collect()
    }
}

/// Merge the rules of all sections into one table
pub fn merge_productions(sections: &[Section]) -> Result<ProductionTable, GrammarError> {
    sections
        .iter()
        .try_fold(ProductionTable::new(), |table, section| {
            table.merge_section(section)
        })
}

/// One block per production name, alphabetized
pub fn ordered(sections: &[Section]) -> Result<Document, GrammarError> {
    let table = merge_productions(sections)?;
    if table.is_empty() {
        log::warn!("no productions found in {} sections", sections.len());
    } else {
        log::debug!("merged {} production names", table.len());
    }

    let mut document = Document::new(Mode::Ordered);
    for (name, alternatives) in table.into_sorted() {
        let mut fragments = vec![Fragment::production_name(name), Fragment::Produces];
        for (index, alternative) in alternatives.iter().enumerate() {
            if index > 0 {
                fragments.push(Fragment::Alternation);
            }
            fragments.extend(render_rule(alternative)?);
        }
        document.push(Block::Rules {
            productions: vec![Production::new(fragments)],
        });
    }

    Ok(document)
}

/// Keywords of every alternative of every rule
pub fn collect_section_keywords(sections: &[Section]) -> Result<BTreeSet<String>, GrammarError> {
    let mut keywords = BTreeSet::new();
    for section in sections {
        for rule in split_rules(&section.body) {
            for alternative in split_rule(rule)?.alternatives {
                keywords.extend(collect_keywords(alternative)?);
            }
        }
    }
    Ok(keywords)
}

/// A single keyword index block
pub fn keywords(sections: &[Section]) -> Result<Document, GrammarError> {
    let keywords = collect_section_keywords(sections)?;
    log::debug!("collected {} keywords", keywords.len());

    let mut document = Document::new(Mode::Keywords);
    document.push(Block::Keywords {
        keywords: keywords.into_iter().collect(),
    });
    Ok(document)
}
