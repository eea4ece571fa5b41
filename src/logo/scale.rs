//! Size tier lookup tables

use super::Size;

/// Class names and pixel equivalents for one size tier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeScale {
    /// Icon height class
    pub height_class: &'static str,
    pub height_px: u32,
    /// Wordmark font size class
    pub text_class: &'static str,
    pub text_px: u32,
    /// Font size class for suffix wordmark parts
    pub suffix_class: &'static str,
    pub suffix_px: u32,
}

const SM: SizeScale = SizeScale {
    height_class: "h-6",
    height_px: 24,
    text_class: "text-lg",
    text_px: 18,
    suffix_class: "text-sm",
    suffix_px: 14,
};

const MD: SizeScale = SizeScale {
    height_class: "h-8",
    height_px: 32,
    text_class: "text-xl",
    text_px: 20,
    suffix_class: "text-base",
    suffix_px: 16,
};

const LG: SizeScale = SizeScale {
    height_class: "h-12",
    height_px: 48,
    text_class: "text-2xl",
    text_px: 24,
    suffix_class: "text-lg",
    suffix_px: 18,
};

const XL: SizeScale = SizeScale {
    height_class: "h-16",
    height_px: 64,
    text_class: "text-3xl",
    text_px: 30,
    suffix_class: "text-xl",
    suffix_px: 20,
};

impl Size {
    /// Resolve the lookup table entry for this tier
    pub fn scale(self) -> &'static SizeScale {
        match self {
            Size::Sm => &SM,
            Size::Md => &MD,
            Size::Lg => &LG,
            Size::Xl => &XL,
        }
    }
}
