//! Formatter lookup
//!
//! Backends are registered under their [`Formatter::name`]. The processor
//! resolves the configured `output.format` here before doing any grammar work.

use crate::syntax::document::Document;
use std::collections::BTreeMap;
use thiserror::Error as ThisError;

#[derive(ThisError, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    #[error("Format '{0}' not found")]
    FormatNotFound(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

/// A backend turning a [`Document`] into text
pub trait Formatter: Send + Sync {
    /// Name selected with `--format`
    fn name(&self) -> &str;

    fn serialize(&self, doc: &Document) -> Result<String, FormatError>;

    /// One line for `--list-formats`
    fn description(&self) -> &str;
}

/// Formatters keyed by name, iterated in name order
#[derive(Default)]
pub struct FormatRegistry {
    formatters: BTreeMap<String, Box<dyn Formatter>>,
}

impl FormatRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// The LaTeX and JSON backends with their default settings
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(super::LatexFormatter::default());
        registry.register(super::JsonFormatter);
        registry
    }

    /// Add a formatter, replacing any registered under the same name
    pub fn register<F: Formatter + 'static>(&mut self, formatter: F) {
        self.formatters
            .insert(formatter.name().to_string(), Box::new(formatter));
    }

    /// Look up a formatter, failing with [`FormatError::FormatNotFound`]
    pub fn get(&self, name: &str) -> Result<&dyn Formatter, FormatError> {
        self.formatters
            .get(name)
            .map(|formatter| formatter.as_ref())
            .ok_or_else(|| FormatError::FormatNotFound(name.to_string()))
    }

    pub fn formatters(&self) -> impl Iterator<Item = &dyn Formatter> {
        self.formatters.values().map(|formatter| formatter.as_ref())
    }

    pub fn names(&self) -> Vec<&str> {
        self.formatters.keys().map(String::as_str).collect()
    }
}
