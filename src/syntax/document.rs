//! Backend-neutral output of the mode drivers
//!
//! A [`Document`] is a flat sequence of blocks. Formatters in
//! [`formats`](crate::syntax::formats) turn it into markup.

use crate::syntax::modes::Mode;
use crate::syntax::rendering::Fragment;
use crate::syntax::sections::Level;
use serde::Serialize;

/// Fragments of one rendered production
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Production {
    pub fragments: Vec<Fragment>,
}

impl Production {
    pub fn new(fragments: Vec<Fragment>) -> Self {
        Production { fragments }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "block", rename_all = "kebab-case")]
pub enum Block {
    Heading { level: Level, title: String },
    /// One aligned block of productions, one production per line group
    Rules { productions: Vec<Production> },
    /// Sorted, deduplicated keyword index
    Keywords { keywords: Vec<String> },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Document {
    pub mode: Mode,
    pub blocks: Vec<Block>,
}

impl Document {
    pub fn new(mode: Mode) -> Self {
        Document {
            mode,
            blocks: Vec::new(),
        }
    }

    pub fn push(&mut self, block: Block) {
        self.blocks.push(block);
    }

    /// All productions of the document, in output order
    pub fn productions(&self) -> impl Iterator<Item = &Production> {
        self.blocks
            .iter()
            .filter_map(|block| match block {
                Block::Rules { productions } => Some(productions),
                _ => None,
            })
            .flatten()
    }
}
