//! Theme palettes and paint references

use std::fmt;

use serde::Deserialize;
use toml::Spanned;

use crate::error::BrandError;

/// The resolved colors a logo uses for one theme
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    /// Icon and highlighted wordmark color
    pub primary: String,
    /// Secondary brand color
    pub accent: String,
    /// Wordmark base color
    pub text: String,
}

impl Palette {
    /// Look up the color assigned to a role
    pub fn color(&self, role: ColorRole) -> &str {
        match role {
            ColorRole::Primary => &self.primary,
            ColorRole::Accent => &self.accent,
            ColorRole::Text => &self.text,
        }
    }

    /// All three colors in role order
    pub fn colors(&self) -> [&str; 3] {
        [&self.primary, &self.accent, &self.text]
    }
}

/// A `[palette.<theme>]` table, with the location of each color kept for errors
#[derive(Debug, Deserialize)]
pub(crate) struct TomlPalette {
    primary: Spanned<String>,
    accent: Spanned<String>,
    text: Spanned<String>,
}

impl TomlPalette {
    pub(crate) fn into_palette(self, theme: &str) -> Result<Palette, BrandError> {
        let roles = [
            ("primary", &self.primary),
            ("accent", &self.accent),
            ("text", &self.text),
        ];
        for (role, value) in roles {
            if !is_hex_color(value.get_ref()) {
                return Err(BrandError::invalid_color_at(
                    format!("palette.{}.{}", theme, role),
                    value.get_ref().as_str(),
                    value.span(),
                ));
            }
        }
        Ok(Palette {
            primary: self.primary.into_inner(),
            accent: self.accent.into_inner(),
            text: self.text.into_inner(),
        })
    }
}

/// A named slot in a palette
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ColorRole {
    Primary,
    Accent,
    #[default]
    Text,
}

impl ColorRole {
    pub const ALL: [ColorRole; 3] = [ColorRole::Primary, ColorRole::Accent, ColorRole::Text];

    pub fn as_str(self) -> &'static str {
        match self {
            ColorRole::Primary => "primary",
            ColorRole::Accent => "accent",
            ColorRole::Text => "text",
        }
    }

    fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|role| role.as_str() == value)
    }

    pub(crate) fn parse_field(field: &str, value: &str) -> Result<Self, BrandError> {
        Self::parse(value).ok_or_else(|| BrandError::invalid_color(field, value))
    }
}

impl fmt::Display for ColorRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a fill or stroke is painted
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Paint {
    /// Explicitly unpainted (`none`)
    None,
    /// A palette slot, resolved per theme
    Role(ColorRole),
    /// A fixed hex color, identical in every theme
    Literal(String),
}

impl Paint {
    /// Parse a paint reference: a role name, `none`, or a hex color
    pub fn parse(field: &str, value: &str) -> Result<Self, BrandError> {
        if value == "none" {
            return Ok(Paint::None);
        }
        if let Some(role) = ColorRole::parse(value) {
            return Ok(Paint::Role(role));
        }
        if is_hex_color(value) {
            return Ok(Paint::Literal(value.to_string()));
        }
        Err(BrandError::invalid_color(field, value))
    }

    /// Resolve to a concrete attribute value
    pub fn resolve<'a>(&'a self, palette: &'a Palette) -> &'a str {
        match self {
            Paint::None => "none",
            Paint::Role(role) => palette.color(*role),
            Paint::Literal(color) => color,
        }
    }
}

/// Check for `#rgb`, `#rrggbb` or `#rrggbbaa`
pub fn is_hex_color(value: &str) -> bool {
    match value.strip_prefix('#') {
        Some(digits) => {
            matches!(digits.len(), 3 | 6 | 8) && digits.chars().all(|c| c.is_ascii_hexdigit())
        }
        None => false,
    }
}
