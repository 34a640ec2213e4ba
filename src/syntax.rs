//! Grammar notation to typeset grammar listings
//!
//! The pipeline, leaves first:
//!
//! - [`lexing`]: rule text to tokens (logos)
//! - [`sections`]: source text to titled, leveled sections
//! - [`rules`]: section bodies to rules, rules to name and alternatives
//! - [`rendering`]: rule text to typeset fragments
//! - [`keywords`]: rule text to keyword terminals
//! - [`modes`]: the `collected`, `ordered` and `keywords` drivers
//! - [`formats`]: document serializers (LaTeX, JSON)
//! - [`processor`]: file in, formatted text out

pub mod config;
pub mod document;
pub mod error;
pub mod formats;
pub mod keywords;
pub mod lexing;
pub mod modes;
pub mod processor;
pub mod rendering;
pub mod rules;
pub mod sections;

pub use error::GrammarError;
