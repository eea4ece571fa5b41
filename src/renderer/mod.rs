//! Markup renderer
//!
//! Logos are built as a small [`Node`] tree and serialized to HTML or SVG
//! text. Icon generation is shared between the on-screen component and the
//! standalone export.

pub mod config;
pub mod export;
pub mod node;
pub mod svg;

pub use config::MarkupConfig;
pub use export::{serialize_logo_markup, svg_document, DEFAULT_EXPORT_SIZE};
pub use node::{escape_xml, Element, Node};
pub use svg::{icon_node, IconSizing, VIEW_BOX_SIZE};
