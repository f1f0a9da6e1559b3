//! Canonical printer for HCL syntax trees
//!
//! Re-emits a parsed tree with tab indentation, one blank line between
//! top-level items and list layout taken from the source lines.
//!
//! # Example
//!
//! ```
//! use hclfmt_core::ast::Node;
//! use hclfmt_core::parser;
//! use hclfmt_core::printer::{print, PrintConfig};
//!
//! let tree = parser::parse("foo = \"bar\"\nbaz = [1,2]").unwrap();
//! let printed = print(&Node::from(tree), &PrintConfig::default());
//!
//! assert_eq!(printed.text, "foo = \"bar\"\n\nbaz = [1, 2]");
//! assert!(printed.diagnostics.is_empty());
//! ```

mod config;
mod nodes;

use std::fmt;
use std::io;

use crate::ast::{Node, NodeKind, Pos};

pub use config::PrintConfig;

/// A node the printer skipped
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub kind: NodeKind,
    pub pos: Pos,
}

impl Diagnostic {
    fn unsupported(node: &Node) -> Self {
        Self {
            kind: node.kind(),
            pos: node.pos(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unsupported {} node at {}, skipped", self.kind, self.pos)
    }
}

/// Result of printing a tree
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Printed {
    pub text: String,
    pub diagnostics: Vec<Diagnostic>,
}

/// Render `node` to text
pub fn print(node: &Node, config: &PrintConfig) -> Printed {
    let mut printer = nodes::Printer::new(config);
    let text = printer.print_node(node);
    Printed {
        text,
        diagnostics: printer.into_diagnostics(),
    }
}

/// Render `node` into `output`, returning the nodes that were skipped
pub fn fprint<W: io::Write>(
    output: &mut W,
    node: &Node,
    config: &PrintConfig,
) -> io::Result<Vec<Diagnostic>> {
    let printed = print(node, config);
    output.write_all(printed.text.as_bytes())?;
    Ok(printed.diagnostics)
}
