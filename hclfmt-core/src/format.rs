//! Source-to-source formatting

use crate::ast::{Node, Pos};
use crate::parser::{self, ParseError};
use crate::printer::{self, Diagnostic, PrintConfig};

/// Error returned by [`format`] and [`needs_format`]
#[derive(Debug, thiserror::Error)]
pub enum FormatError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// The printer cannot reproduce comments, so commented sources are left alone
    #[error("{count} comment(s) would be lost, first at {first}")]
    Comments { count: usize, first: Pos },

    #[error("{0}")]
    Unsupported(Diagnostic),
}

/// Format HCL source
///
/// Non-empty output ends with exactly one newline. Sources containing
/// comments are rejected rather than stripped.
pub fn format(source: &str, config: &PrintConfig) -> Result<String, FormatError> {
    let file = parser::parse_file(source)?;
    if let Some(first) = file.comments.first() {
        return Err(FormatError::Comments {
            count: file.comments.len(),
            first: first.start,
        });
    }

    let printed = printer::print(&Node::ObjectList(file.node), config);
    if let Some(diagnostic) = printed.diagnostics.into_iter().next() {
        return Err(FormatError::Unsupported(diagnostic));
    }

    let mut output = printed.text;
    if !output.is_empty() {
        output.push('\n');
    }
    Ok(output)
}

/// Check if source needs formatting
pub fn needs_format(source: &str, config: &PrintConfig) -> Result<bool, FormatError> {
    let formatted = format(source, config)?;
    Ok(formatted != source)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_normalizes_spacing() {
        let input = "foo=\"bar\"\nbaz   =   [1,2]";
        let result = format(input, &PrintConfig::default()).unwrap();
        assert_eq!(result, "foo = \"bar\"\n\nbaz = [1, 2]\n");
    }

    #[test]
    fn test_format_normalizes_indentation() {
        let input = "server {\n    port = 80\n        host = \"localhost\"\n}";
        let result = format(input, &PrintConfig::default()).unwrap();
        assert_eq!(
            result,
            "server = {\n\tport = 80\n\thost = \"localhost\"\n}\n"
        );
    }

    #[test]
    fn test_format_keeps_multi_line_lists() {
        let input = "ports = [\n  80,\n  443\n]";
        let result = format(input, &PrintConfig::default()).unwrap();
        assert_eq!(result, "ports = [\n\t80, \n\t443,\n]\n");
    }

    #[test]
    fn test_format_empty_source() {
        assert_eq!(format("", &PrintConfig::default()).unwrap(), "");
        assert_eq!(format(" \n\n", &PrintConfig::default()).unwrap(), "");
    }

    #[test]
    fn test_format_refuses_to_drop_comments() {
        let err = format("# keep me\na = 1 // note\n", &PrintConfig::default()).unwrap_err();
        match err {
            FormatError::Comments { count, first } => {
                assert_eq!(count, 2);
                assert_eq!(first.line, 1);
            }
            other => panic!("Expected comments error, got {:?}", other),
        }
        assert_eq!(
            format("a = 1 /* x */", &PrintConfig::default())
                .unwrap_err()
                .to_string(),
            "1 comment(s) would be lost, first at 1:7"
        );
    }

    #[test]
    fn test_format_idempotent() {
        let input = "a \"b\" {\nc = [1,\n2]\nd {\ne = true\n}\n}\nf = -1.5";
        let config = PrintConfig::default();

        let first = format(input, &config).unwrap();
        let second = format(&first, &config).unwrap();

        assert_eq!(first, second, "Formatting should be idempotent");
    }

    #[test]
    fn test_format_reports_parse_errors() {
        let err = format("a = ", &PrintConfig::default()).unwrap_err();
        assert!(matches!(err, FormatError::Parse(_)));
    }

    #[test]
    fn test_needs_format() {
        let config = PrintConfig::default();

        let formatted = "provider = {\n\tregion = \"eu-west-1\"\n}\n";
        assert!(!needs_format(formatted, &config).unwrap());

        let unformatted = "provider {\nregion=\"eu-west-1\"\n}";
        assert!(needs_format(unformatted, &config).unwrap());
    }
}
