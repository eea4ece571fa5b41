//! Error types for loading and validating brand definitions

use ariadne::{Color, Label, Report, ReportKind, Source};
use thiserror::Error;

/// Byte range in source text
pub type Span = std::ops::Range<usize>;

#[derive(Error, Debug)]
pub enum BrandError {
    #[error("Failed to read brand file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse brand TOML: {}", .0.message())]
    Toml(#[from] toml::de::Error),

    #[error("invalid color '{value}' for {field}")]
    InvalidColor {
        field: String,
        value: String,
        span: Option<Span>,
    },

    #[error("icon shape {index} ({kind}): {reason}")]
    InvalidShape {
        index: usize,
        kind: String,
        reason: String,
    },

    #[error("unknown icon kind '{0}' (expected 'vector' or 'raster')")]
    UnknownIconKind(String),

    #[error("{0} icon is missing required field '{1}'")]
    MissingIconField(&'static str, &'static str),

    #[error("wordmark must have at least one part")]
    EmptyWordmark,
}

impl BrandError {
    pub fn invalid_color(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidColor {
            field: field.into(),
            value: value.into(),
            span: None,
        }
    }

    /// An invalid color whose location in the brand file is known
    pub fn invalid_color_at(
        field: impl Into<String>,
        value: impl Into<String>,
        span: Span,
    ) -> Self {
        Self::InvalidColor {
            field: field.into(),
            value: value.into(),
            span: Some(span),
        }
    }

    pub fn invalid_shape(index: usize, kind: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidShape {
            index,
            kind: kind.into(),
            reason: reason.into(),
        }
    }

    /// Get the source span if available
    pub fn span(&self) -> Option<Span> {
        match self {
            Self::Toml(err) => err.span(),
            Self::InvalidColor { span, .. } => span.clone(),
            _ => None,
        }
    }

    /// Format the error with source context using ariadne
    ///
    /// Errors without a source location fall back to their plain message.
    pub fn format(&self, source: &str, filename: &str) -> String {
        let Some(span) = self.span() else {
            return format!("{}: {}", filename, self);
        };

        let mut buf = Vec::new();
        let written = Report::build(ReportKind::Error, filename, span.start)
            .with_message(self.to_string())
            .with_label(
                Label::new((filename, span))
                    .with_message(self.to_string())
                    .with_color(Color::Red),
            )
            .finish()
            .write((filename, Source::from(source)), &mut buf);

        match written {
            Ok(()) => String::from_utf8_lossy(&buf).into_owned(),
            Err(_) => format!("{}: {}", filename, self),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toml_error_has_span() {
        let err: BrandError = toml::from_str::<toml::Value>("[brand\nid = 1")
            .unwrap_err()
            .into();
        assert!(err.span().is_some());
    }

    #[test]
    fn test_format_with_span_mentions_filename() {
        let source = "[brand\nid = 1";
        let err: BrandError = toml::from_str::<toml::Value>(source).unwrap_err().into();
        let report = err.format(source, "broken.toml");
        assert!(report.contains("broken.toml"));
    }

    #[test]
    fn test_format_without_span_falls_back_to_message() {
        let err = BrandError::EmptyWordmark;
        assert_eq!(
            err.format("", "brand.toml"),
            "brand.toml: wordmark must have at least one part"
        );
    }

    #[test]
    fn test_invalid_color_message() {
        let err = BrandError::invalid_color("palette.light.primary", "blue-ish");
        assert_eq!(
            err.to_string(),
            "invalid color 'blue-ish' for palette.light.primary"
        );
    }
}
