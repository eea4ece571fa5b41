//! Configuration for markup serialization

/// Configuration options for markup output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkupConfig {
    /// Whether to prefix the output with an XML declaration
    pub standalone: bool,

    /// Whether to format output with indentation
    pub pretty_print: bool,

    /// Spaces per nesting level when pretty-printing
    pub indent_width: usize,
}

impl Default for MarkupConfig {
    fn default() -> Self {
        Self {
            standalone: false,
            pretty_print: false,
            indent_width: 2,
        }
    }
}

impl MarkupConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration for a standalone `.svg` file
    pub fn document() -> Self {
        Self::new().with_standalone(true).with_pretty_print(true)
    }

    /// Set whether output is standalone
    pub fn with_standalone(mut self, standalone: bool) -> Self {
        self.standalone = standalone;
        self
    }

    /// Set whether to pretty-print output
    pub fn with_pretty_print(mut self, pretty: bool) -> Self {
        self.pretty_print = pretty;
        self
    }

    /// Set the indentation width
    pub fn with_indent_width(mut self, width: usize) -> Self {
        self.indent_width = width;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = MarkupConfig::default();
        assert!(!config.standalone);
        assert!(!config.pretty_print);
        assert_eq!(config.indent_width, 2);
    }

    #[test]
    fn test_builder_pattern() {
        let config = MarkupConfig::new()
            .with_standalone(true)
            .with_pretty_print(true)
            .with_indent_width(4);

        assert!(config.standalone);
        assert!(config.pretty_print);
        assert_eq!(config.indent_width, 4);
    }

    #[test]
    fn test_document_preset() {
        assert_eq!(
            MarkupConfig::document(),
            MarkupConfig::new().with_standalone(true).with_pretty_print(true)
        );
    }
}
