//! Logo configuration: variant, size, theme and container class

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Error returned when a variant, size or theme name is not recognised
#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid {kind} '{value}' (expected one of: {expected})")]
pub struct ParseOptionError {
    kind: &'static str,
    value: String,
    expected: String,
}

macro_rules! named_options {
    (
        $(#[$meta:meta])*
        $name:ident, $kind:literal {
            $($(#[$vmeta:meta])* $variant:ident => $text:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
        pub enum $name {
            $($(#[$vmeta])* $variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $text),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = ParseOptionError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::ALL
                    .iter()
                    .copied()
                    .find(|o| o.as_str().eq_ignore_ascii_case(s))
                    .ok_or_else(|| ParseOptionError {
                        kind: $kind,
                        value: s.to_string(),
                        expected: Self::ALL
                            .iter()
                            .map(|o| o.as_str())
                            .collect::<Vec<_>>()
                            .join(", "),
                    })
            }
        }
    };
}

named_options!(
    /// Which parts of the logo to render
    Variant, "variant" {
        #[default]
        Full => "full",
        Icon => "icon",
        Text => "text",
    }
);

named_options!(
    /// Size tier, ordered from smallest to largest
    Size, "size" {
        Sm => "sm",
        #[default]
        Md => "md",
        Lg => "lg",
        Xl => "xl",
    }
);

named_options!(
    /// Color palette selector
    Theme, "theme" {
        #[default]
        Light => "light",
        Dark => "dark",
    }
);

impl Variant {
    pub fn includes_icon(self) -> bool {
        matches!(self, Variant::Full | Variant::Icon)
    }

    pub fn includes_text(self) -> bool {
        matches!(self, Variant::Full | Variant::Text)
    }
}

/// Input to a single logo render
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogoConfig {
    pub variant: Variant,
    pub size: Size,
    pub theme: Theme,
    /// Opaque class string appended to the outer container
    pub container_class: String,
}

impl LogoConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self
    }

    pub fn with_size(mut self, size: Size) -> Self {
        self.size = size;
        self
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Set the class string passed through to the outer container
    pub fn with_container_class(mut self, class: impl Into<String>) -> Self {
        self.container_class = class.into();
        self
    }
}
