//! hclfmt Core
//!
//! Parser and canonical printer for HCL configuration files
//!
//! # Example
//!
//! ```
//! use hclfmt_core::{format, PrintConfig};
//!
//! let source = "service \"web\" {\nport=8080\n}";
//! let formatted = format(source, &PrintConfig::default()).unwrap();
//!
//! assert_eq!(formatted, "service \"web\" = {\n\tport = 8080\n}\n");
//! ```

pub mod ast;
mod format;
pub mod parser;
pub mod printer;

pub use format::{FormatError, format, needs_format};
pub use printer::PrintConfig;
