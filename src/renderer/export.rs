//! Standalone icon markup for copy and download flows

use crate::brand::{Brand, Icon};
use crate::logo::Theme;

use super::svg::{icon_node, IconSizing};
use super::MarkupConfig;

/// Pixel size used when no size is requested
pub const DEFAULT_EXPORT_SIZE: u32 = 40;

/// Serialize the icon as self-contained markup at a pixel size
///
/// Only inline attributes are used, so the result can be pasted into an email
/// or document. Vector icons keep their 40x40 viewBox; only `width` and
/// `height` follow `pixel_size`. The output is deterministic byte for byte.
///
/// # Example
///
/// ```rust
/// use logomark::{serialize_logo_markup, Brand, Theme};
///
/// let svg = serialize_logo_markup(&Brand::studypal(), Theme::Light, 200);
/// assert!(svg.contains(r#"width="200" height="200""#));
/// ```
pub fn serialize_logo_markup(brand: &Brand, theme: Theme, pixel_size: u32) -> String {
    icon_node(
        &brand.icon,
        brand.palette(theme),
        &IconSizing::Pixels(pixel_size),
    )
    .to_markup(&MarkupConfig::default())
}

/// A complete `.svg` file for the icon, or `None` for raster brands
pub fn svg_document(brand: &Brand, theme: Theme, pixel_size: u32) -> Option<String> {
    match brand.icon {
        Icon::Vector(_) => Some(
            icon_node(
                &brand.icon,
                brand.palette(theme),
                &IconSizing::Pixels(pixel_size),
            )
            .to_markup(&MarkupConfig::document()),
        ),
        Icon::Raster(_) => None,
    }
}
