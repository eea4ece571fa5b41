//! Brand definitions
//!
//! A brand is the static visual definition the logo component is parameterized
//! by: a palette per theme, the wordmark split into colored parts, and either
//! vector icon shapes or a remote raster image. Definitions are written in TOML;
//! the built-in brands are embedded in the binary.

pub mod palette;
pub mod registry;
pub mod shape;

use std::path::Path;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::BrandError;
use crate::logo::Theme;

pub use palette::{ColorRole, Paint, Palette};
pub use registry::BrandRegistry;
pub use shape::{Geometry, IconShape};

const STUDYPAL: &str = include_str!("../../brands/studypal.toml");
const BOOMERANG: &str = include_str!("../../brands/boomerang.toml");

/// One segment of the wordmark text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordmarkPart {
    pub text: String,
    pub color: ColorRole,
    /// Rendered at the smaller suffix scale
    pub suffix: bool,
}

/// A remote raster image used in place of vector shapes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterIcon {
    pub url: String,
    pub alt: String,
    /// CSS filter applied on top of the image
    pub filter: Option<String>,
    /// File extension used when the image is downloaded
    pub format: String,
}

/// The icon half of a logo
#[derive(Debug, Clone, PartialEq)]
pub enum Icon {
    Vector(Vec<IconShape>),
    Raster(RasterIcon),
}

/// A brand's complete visual definition
#[derive(Debug, Clone, PartialEq)]
pub struct Brand {
    /// Registry key, also used as the file name stem for exported assets
    pub id: String,
    /// Human readable name
    pub name: String,
    pub tagline: Option<String>,
    pub wordmark: Vec<WordmarkPart>,
    pub light: Palette,
    pub dark: Palette,
    pub icon: Icon,
}

/// TOML structure for deserializing brand files
#[derive(Deserialize)]
struct TomlBrand {
    brand: TomlMetadata,
    wordmark: Vec<TomlWordmarkPart>,
    palette: TomlPalettes,
    icon: TomlIcon,
}

#[derive(Deserialize)]
struct TomlMetadata {
    id: String,
    name: String,
    tagline: Option<String>,
}

#[derive(Deserialize)]
struct TomlWordmarkPart {
    text: String,
    color: Option<String>,
    #[serde(default)]
    suffix: bool,
}

#[derive(Deserialize)]
struct TomlPalettes {
    light: palette::TomlPalette,
    dark: palette::TomlPalette,
}

#[derive(Deserialize)]
struct TomlIcon {
    kind: String,
    #[serde(default)]
    shapes: Vec<shape::TomlShape>,
    url: Option<String>,
    alt: Option<String>,
    filter: Option<String>,
    format: Option<String>,
}

impl Brand {
    /// Load a brand from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, BrandError> {
        let content = std::fs::read_to_string(path)?;
        let brand: Brand = content.parse()?;
        tracing::debug!(brand = %brand.id, path = %path.display(), "loaded brand definition");
        Ok(brand)
    }

    /// The built-in Studypal brand: a vector book-and-lightbulb icon
    pub fn studypal() -> Self {
        STUDYPAL
            .parse()
            .expect("Built-in studypal brand should be valid TOML")
    }

    /// The built-in Boomerang.study brand: a remote raster icon
    pub fn boomerang() -> Self {
        BOOMERANG
            .parse()
            .expect("Built-in boomerang brand should be valid TOML")
    }

    /// All built-in brands
    pub fn builtins() -> Vec<Self> {
        vec![Self::studypal(), Self::boomerang()]
    }

    /// Resolve the palette for a theme
    pub fn palette(&self, theme: Theme) -> &Palette {
        match theme {
            Theme::Light => &self.light,
            Theme::Dark => &self.dark,
        }
    }

    /// Fixed remote asset URL, for brands whose icon is a raster image
    pub fn image_url(&self) -> Option<&str> {
        match &self.icon {
            Icon::Raster(raster) => Some(&raster.url),
            Icon::Vector(_) => None,
        }
    }

    /// The full wordmark text, e.g. "Boomerang.study"
    pub fn wordmark_text(&self) -> String {
        self.wordmark.iter().map(|p| p.text.as_str()).collect()
    }
}

impl FromStr for Brand {
    type Err = BrandError;

    fn from_str(content: &str) -> Result<Self, Self::Err> {
        let parsed: TomlBrand = toml::from_str(content)?;

        if parsed.wordmark.is_empty() {
            return Err(BrandError::EmptyWordmark);
        }
        let wordmark = parsed
            .wordmark
            .into_iter()
            .enumerate()
            .map(|(i, part)| -> Result<WordmarkPart, BrandError> {
                let color = match part.color {
                    Some(value) => {
                        ColorRole::parse_field(&format!("wordmark[{}].color", i), &value)?
                    }
                    None => ColorRole::Text,
                };
                Ok(WordmarkPart {
                    text: part.text,
                    color,
                    suffix: part.suffix,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let TomlPalettes { light, dark } = parsed.palette;
        let light = light.into_palette("light")?;
        let dark = dark.into_palette("dark")?;

        let icon = match parsed.icon.kind.as_str() {
            "vector" => Icon::Vector(
                parsed
                    .icon
                    .shapes
                    .into_iter()
                    .enumerate()
                    .map(|(i, s)| s.into_shape(i))
                    .collect::<Result<Vec<_>, _>>()?,
            ),
            "raster" => Icon::Raster(RasterIcon {
                url: parsed
                    .icon
                    .url
                    .ok_or(BrandError::MissingIconField("raster", "url"))?,
                alt: parsed
                    .icon
                    .alt
                    .unwrap_or_else(|| parsed.brand.name.clone()),
                filter: parsed.icon.filter,
                format: parsed.icon.format.unwrap_or_else(|| "png".to_string()),
            }),
            other => return Err(BrandError::UnknownIconKind(other.to_string())),
        };

        Ok(Brand {
            id: parsed.brand.id,
            name: parsed.brand.name,
            tagline: parsed.brand.tagline,
            wordmark,
            light,
            dark,
            icon,
        })
    }
}
