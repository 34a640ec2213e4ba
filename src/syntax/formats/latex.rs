//! LaTeX output
//!
//!     Rules are typeset inside `flalign*` environments using a small set of
//!     macros (see [`LatexFormatter::preamble`]):
//!
//!         \pr{name}   production label        \pn{name}  nonterminal reference
//!         \sm{text}   bold terminal           \pp        produces arrow
//!         \oo         alternation bar         \ww        thin space
//!
//!     Each production ends with `&`, productions within one block are
//!     separated by `\\`. An alternation breaks the line so every alternative
//!     gets its own row. The keyword index is an `itemize` list inside a
//!     `multicols` environment.

use super::registry::{FormatError, Formatter};
use crate::syntax::document::{Block, Document, Production};
use crate::syntax::rendering::Fragment;
use crate::syntax::sections::Level;

/// Macro definitions used by the generated markup
const PREAMBLE: &str = r"\usepackage{amsmath}
\usepackage{multicol}
% Production name
\newcommand{\pn}[1]{\langle \textnormal{#1} \rangle}
% Produces
\newcommand{\pp}{\rightarrow}
% Or
\newcommand{\oo}{\; \mid \;}
% Dots
\newcommand{\sk}{\dots }
% Space
\newcommand{\ww}{\;}
% Null
\newcommand{\nn}{\perp}
% Symbol terminal
\newcommand{\sm}[1]{\textnormal{\bf #1}}
% Descriptive terminal
\newcommand{\sd}[1]{\textnormal{\it #1}}
% Production rule
\newcommand{\pr}[1]{\hspace{5mm}\sd{#1}}
% Keyword
\providecommand{\w}[1]{#1}
";

pub const DEFAULT_KEYWORD_COLUMNS: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LatexFormatter {
    keyword_columns: usize,
}

impl LatexFormatter {
    pub fn new(keyword_columns: usize) -> Self {
        LatexFormatter {
            keyword_columns: keyword_columns.max(1),
        }
    }

    pub fn keyword_columns(&self) -> usize {
        self.keyword_columns
    }

    /// Macro definitions to include in the enclosing document's preamble
    pub fn preamble() -> &'static str {
        PREAMBLE
    }

    fn write_block(&self, out: &mut String, block: &Block) {
        match block {
            Block::Heading { level, title } => {
                let command = match level {
                    Level::Section => "subsection",
                    Level::Subsection => "subsubsection",
                };
                out.push_str(&format!("\\{}{{{}}}\n", command, escape(title)));
            }
            Block::Rules { productions } => {
                out.push_str("\\begin{flalign*}\n");
                let rows: Vec<String> = productions.iter().map(render_production).collect();
                out.push_str(&rows.join("\\\\\n"));
                out.push_str("\n\\end{flalign*}\n");
            }
            Block::Keywords { keywords } => {
                if keywords.is_empty() {
                    return;
                }
                out.push_str(&format!(
                    "\\begin{{multicols}}{{{}}}\n\\begin{{itemize}}\n",
                    self.keyword_columns
                ));
                for keyword in keywords {
                    out.push_str(&format!("\\item[] $\\sm{{\\w{{{}}}}}$\n", escape(keyword)));
                }
                out.push_str("\\end{itemize}\n\\end{multicols}\n");
            }
        }
    }
}

impl Default for LatexFormatter {
    fn default() -> Self {
        Self::new(DEFAULT_KEYWORD_COLUMNS)
    }
}

impl Formatter for LatexFormatter {
    fn name(&self) -> &str {
        "latex"
    }

    fn serialize(&self, doc: &Document) -> Result<String, FormatError> {
        let mut blocks = Vec::with_capacity(doc.blocks.len());
        for block in &doc.blocks {
            let mut out = String::new();
            self.write_block(&mut out, block);
            if !out.is_empty() {
                blocks.push(out);
            }
        }
        Ok(blocks.join("\n"))
    }

    fn description(&self) -> &str {
        "LaTeX markup for the reference manual"
    }
}

/// Escape characters that are special inside the macro arguments
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(c, '{' | '}' | '&' | '#' | '_' | '$') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// One production row, closed by its alignment marker
fn render_production(production: &Production) -> String {
    let mut parts: Vec<String> = production.fragments.iter().map(render_fragment).collect();
    parts.push("&".to_string());
    parts.join(" ")
}

fn render_fragment(fragment: &Fragment) -> String {
    match fragment {
        Fragment::ProductionName { name } => format!("\\pr{{{}}}\\ww", escape(name)),
        Fragment::Terminal { text } => format!("\\sm{{{}}}\\ww", escape(text)),
        Fragment::NonTerminal { name } => format!("\\pn{{{}}}\\ww", escape(name)),
        Fragment::IndexedList { index } => format!("\\{{_{{{}}}\\ww", index),
        Fragment::IndexedListWithSeparator { index, separator } => {
            format!("\\{{_{{{}}}\\ww\\sm{{{}}}\\ww", index, escape(separator))
        }
        Fragment::ListEnd => "\\}\\ww".to_string(),
        Fragment::Produces => "\\pp & \\ww".to_string(),
        Fragment::Alternation => "&\\\\\n\\oo & \\ww".to_string(),
    }
}
