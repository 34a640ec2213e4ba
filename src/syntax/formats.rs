//! Output format implementations for rendered documents
//!
//! This module contains the backends that serialize a
//! [`Document`](crate::syntax::document::Document):
//! - `latex`: the reference manual's macro vocabulary
//! - `json`: the document model itself, for tooling

pub mod json;
pub mod latex;
pub mod registry;

pub use json::JsonFormatter;
pub use latex::LatexFormatter;
pub use registry::{FormatError, FormatRegistry, Formatter};
