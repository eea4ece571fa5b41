//! Logomark - brand logo rendering
//!
//! This library renders brand logos in three variants (icon, text, full), two
//! themes and four sizes, exports the icon as standalone markup, and builds
//! showcase pages and downloadable asset sets.
//!
//! # Example
//!
//! ```rust
//! use logomark::{render, Brand, LogoConfig};
//!
//! let html = render(&Brand::studypal(), &LogoConfig::default());
//! assert!(html.contains("<svg"));
//! assert!(html.contains("Study"));
//! ```

pub mod brand;
pub mod error;
pub mod logo;
pub mod renderer;
pub mod showcase;

pub use brand::{Brand, BrandRegistry, Palette};
pub use error::BrandError;
pub use logo::{Logo, LogoConfig, Size, Theme, Variant};
pub use renderer::{serialize_logo_markup, svg_document, MarkupConfig, Node};
pub use showcase::{Showcase, ShowcaseConfig};

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors from brand lookup and file output
#[derive(Debug, Error)]
pub enum LogomarkError {
    /// Error loading a brand definition
    #[error("brand error: {0}")]
    Brand(#[from] BrandError),

    /// No brand registered under this id
    #[error("unknown brand '{}'{}", .name, format_suggestions(.suggestions))]
    UnknownBrand {
        name: String,
        suggestions: Vec<String>,
    },

    /// The brand draws its icon locally and has no remote image
    #[error("brand '{id}' has a vector icon and no image URL; use `export` instead")]
    NotRaster { id: String },

    /// A brand with this id is already registered
    #[error("duplicate brand id '{id}'")]
    DuplicateBrand { id: String },

    /// The HTTP client for asset downloads could not be built
    #[error("HTTP client error: {0}")]
    Fetch(#[from] showcase::FetchError),

    /// Error writing output
    #[error("failed to write '{}': {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl LogomarkError {
    pub fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else {
        format!(" (did you mean: {}?)", suggestions.join(", "))
    }
}

/// The remote image URL of a raster brand
pub fn image_url(brand: &Brand) -> Result<&str, LogomarkError> {
    brand.image_url().ok_or_else(|| LogomarkError::NotRaster {
        id: brand.id.clone(),
    })
}

/// Render a logo to compact HTML
///
/// # Example
///
/// ```rust
/// use logomark::{render, Brand, LogoConfig, Variant};
///
/// let html = render(
///     &Brand::boomerang(),
///     &LogoConfig::new().with_variant(Variant::Text),
/// );
/// assert!(html.contains(".study"));
/// assert!(!html.contains("<img"));
/// ```
pub fn render(brand: &Brand, config: &LogoConfig) -> String {
    render_with_config(brand, config, &MarkupConfig::default())
}

/// Render a logo with custom markup settings
pub fn render_with_config(brand: &Brand, config: &LogoConfig, markup: &MarkupConfig) -> String {
    tracing::trace!(
        brand = %brand.id,
        variant = %config.variant,
        size = %config.size,
        theme = %config.theme,
        "rendering logo"
    );
    Logo::new(brand, config.clone()).render().to_markup(markup)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_full_logo() {
        let html = render(&Brand::studypal(), &LogoConfig::default());
        assert!(html.starts_with("<div class=\"flex items-center space-x-2\">"));
        assert!(html.contains("<svg"));
        assert!(html.contains("pal</span>"));
    }

    #[test]
    fn test_render_pretty() {
        let html = render_with_config(
            &Brand::studypal(),
            &LogoConfig::new().with_variant(Variant::Icon),
            &MarkupConfig::new().with_pretty_print(true),
        );
        assert!(html.starts_with("<div>\n  <svg"));
        assert!(html.contains("\n    <rect"));
        assert!(html.ends_with("</svg>\n</div>"));
    }

    #[test]
    fn test_unknown_brand_message() {
        let err = LogomarkError::UnknownBrand {
            name: "studypl".to_string(),
            suggestions: vec!["studypal".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "unknown brand 'studypl' (did you mean: studypal?)"
        );
    }

    #[test]
    fn test_image_url_requires_raster_brand() {
        let boomerang = Brand::boomerang();
        assert_eq!(image_url(&boomerang).ok(), boomerang.image_url());

        let err = image_url(&Brand::studypal()).unwrap_err();
        assert!(matches!(err, LogomarkError::NotRaster { ref id } if id == "studypal"));
        assert_eq!(
            err.to_string(),
            "brand 'studypal' has a vector icon and no image URL; use `export` instead"
        );
    }

    #[test]
    fn test_unknown_brand_without_suggestions() {
        let err = LogomarkError::UnknownBrand {
            name: "acme".to_string(),
            suggestions: vec![],
        };
        assert_eq!(err.to_string(), "unknown brand 'acme'");
    }
}
