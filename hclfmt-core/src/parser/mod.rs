//! Parser - Parse HCL source into the syntax tree
//!
//! Uses pest; see `hcl.pest` for the accepted grammar

mod builder;

use pest::Parser;
use pest_derive::Parser;

use crate::ast::{File, ObjectList};

#[derive(Parser)]
#[grammar = "parser/hcl.pest"]
struct HclParser;

/// Parse error with the 1-based location it was detected at
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Parse error at {line}:{column}: {message}")]
pub struct ParseError {
    pub message: String,
    pub line: usize,
    pub column: usize,
}

impl From<pest::error::Error<Rule>> for ParseError {
    fn from(err: pest::error::Error<Rule>) -> Self {
        let (line, column) = match err.line_col {
            pest::error::LineColLocation::Pos((l, c)) => (l, c),
            pest::error::LineColLocation::Span((l, c), _) => (l, c),
        };
        ParseError {
            message: err.variant.message().to_string(),
            line,
            column,
        }
    }
}

/// Parse a whole file into its top-level object list, dropping comments
pub fn parse(source: &str) -> Result<ObjectList, ParseError> {
    parse_file(source).map(|file| file.node)
}

/// Parse a whole file, keeping its comments alongside the tree
pub fn parse_file(source: &str) -> Result<File, ParseError> {
    let pairs = HclParser::parse(Rule::file, source)?;
    let comments = builder::collect_comments(pairs.clone());
    let node = builder::build_file(pairs)?;
    log::debug!(
        "parsed {} top-level item(s), {} comment(s)",
        node.items.len(),
        comments.len()
    );
    Ok(File { node, comments })
}
