//! Logo component
//!
//! Maps a [`LogoConfig`] and a brand to markup: the variant picks which parts
//! are drawn, the theme picks the palette and the size picks the scale.

pub mod component;
pub mod options;
pub mod scale;

pub use component::Logo;
pub use options::{LogoConfig, ParseOptionError, Size, Theme, Variant};
pub use scale::SizeScale;
