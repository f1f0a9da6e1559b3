//! Printing configuration

/// Printing options
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrintConfig {
    /// Blanks appended after the tab of every indentation level (default: 0)
    pub space_width: usize,
}

impl PrintConfig {
    pub fn new(space_width: usize) -> Self {
        Self { space_width }
    }

    /// Get the string to use for a single level of indentation
    pub fn indent_string(&self) -> String {
        let mut prefix = String::with_capacity(1 + self.space_width);
        prefix.push('\t');
        prefix.push_str(&" ".repeat(self.space_width));
        prefix
    }
}
