//! File processing API
//!
//! Ties the stages together: read the grammar source, split it into sections,
//! run a mode driver and serialize the resulting document with a registered
//! formatter.
//!
//! ```rust,ignore
//! use gramdoc::syntax::modes::Mode;
//! use gramdoc::syntax::processor::Processor;
//!
//! let processor = Processor::default();
//! let latex = processor.process_file("syntax.ebnf", Mode::Ordered, "latex")?;
//! ```

use crate::syntax::config::GramdocConfig;
use crate::syntax::document::Document;
use crate::syntax::error::GrammarError;
use crate::syntax::formats::{FormatError, FormatRegistry, LatexFormatter};
use crate::syntax::modes::Mode;
use crate::syntax::sections::split_sections;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error as ThisError;

/// Errors that can occur during processing
#[derive(ThisError, Debug)]
pub enum ProcessingError {
    #[error("Could not read {}: {source}", .path.display())]
    Io { path: PathBuf, source: io::Error },

    #[error(transparent)]
    Grammar(#[from] GrammarError),

    #[error(transparent)]
    Format(#[from] FormatError),
}

pub struct Processor {
    registry: FormatRegistry,
}

impl Processor {
    pub fn new(registry: FormatRegistry) -> Self {
        Processor { registry }
    }

    /// Default formatters, with the LaTeX backend tuned by the configuration
    pub fn from_config(config: &GramdocConfig) -> Self {
        let mut registry = FormatRegistry::with_defaults();
        registry.register(LatexFormatter::new(config.output.latex.keyword_columns));
        Processor { registry }
    }

    pub fn registry(&self) -> &FormatRegistry {
        &self.registry
    }

    /// Build the document for a mode without serializing it
    pub fn render(&self, source: &str, mode: Mode) -> Result<Document, ProcessingError> {
        let sections = split_sections(source)?;
        Ok(mode.run(&sections)?)
    }

    /// Render grammar source and serialize it with the named format
    pub fn process_source(
        &self,
        source: &str,
        mode: Mode,
        format: &str,
    ) -> Result<String, ProcessingError> {
        // Fail on a bad format name before doing any grammar work
        let formatter = self.registry.get(format)?;
        let document = self.render(source, mode)?;
        Ok(formatter.serialize(&document)?)
    }

    /// Read a grammar file in full and process it
    pub fn process_file<P: AsRef<Path>>(
        &self,
        path: P,
        mode: Mode,
        format: &str,
    ) -> Result<String, ProcessingError> {
        let path = path.as_ref();
        log::info!("reading grammar from {}", path.display());
        let source = fs::read_to_string(path).map_err(|source| ProcessingError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        self.process_source(&source, mode, format)
    }
}

impl Default for Processor {
    fn default() -> Self {
        Self::new(FormatRegistry::with_defaults())
    }
}

/// Process a grammar file with the default formatters
pub fn process_file<P: AsRef<Path>>(
    path: P,
    mode: Mode,
    format: &str,
) -> Result<String, ProcessingError> {
    Processor::default().process_file(path, mode, format)
}
