//! # gramdoc
//!
//! Typesets a grammar written in a compact EBNF-like notation into the syntax
//! listings of a language reference manual. See the [syntax module](syntax).

pub mod syntax;
