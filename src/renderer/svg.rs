//! Icon element generation
//!
//! Both the on-screen logo and the exported markup build their icon here, so
//! the two stay visually identical.

use crate::brand::{Geometry, Icon, IconShape, Palette, RasterIcon};

use super::node::{Element, Node};

/// Side length of the icon coordinate space
pub const VIEW_BOX_SIZE: u32 = 40;

const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

/// How the icon's rendered size is expressed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IconSizing {
    /// Utility classes, e.g. `h-12 w-auto`
    Class(String),
    /// Inline width and height attributes
    Pixels(u32),
}

/// Build the icon element for a palette
pub fn icon_node(icon: &Icon, palette: &Palette, sizing: &IconSizing) -> Node {
    match icon {
        Icon::Vector(shapes) => vector_icon(shapes, palette, sizing),
        Icon::Raster(raster) => raster_icon(raster, sizing),
    }
}

fn vector_icon(shapes: &[IconShape], palette: &Palette, sizing: &IconSizing) -> Node {
    let mut svg = Element::new("svg")
        .with_attr("xmlns", SVG_NAMESPACE)
        .with_attr(
            "viewBox",
            format!("0 0 {} {}", VIEW_BOX_SIZE, VIEW_BOX_SIZE),
        );
    svg = match sizing {
        IconSizing::Class(class) => svg.with_class(class),
        IconSizing::Pixels(px) => svg
            .with_attr("width", px.to_string())
            .with_attr("height", px.to_string()),
    };
    svg.with_attr("fill", "none")
        .with_children(shapes.iter().map(|s| shape_node(s, palette)))
        .into()
}

fn raster_icon(raster: &RasterIcon, sizing: &IconSizing) -> Node {
    let img = Element::new("img")
        .with_attr("src", raster.url.as_str())
        .with_attr("alt", raster.alt.as_str());
    let filter = raster
        .filter
        .as_deref()
        .map(|f| format!("filter: {};", f))
        .unwrap_or_default();

    match sizing {
        IconSizing::Class(class) => {
            let img = img.with_class(&format!("{} object-contain", class));
            if filter.is_empty() {
                img.into()
            } else {
                img.with_attr("style", filter).into()
            }
        }
        IconSizing::Pixels(px) => {
            let style = if filter.is_empty() {
                "object-fit: contain;".to_string()
            } else {
                format!("object-fit: contain; {}", filter)
            };
            img.with_attr("width", px.to_string())
                .with_attr("height", px.to_string())
                .with_attr("style", style)
                .into()
        }
    }
}

/// Build one shape element with its paints resolved
pub fn shape_node(shape: &IconShape, palette: &Palette) -> Node {
    let mut el = Element::new(shape.geometry.tag());
    el = match &shape.geometry {
        Geometry::Rect {
            x,
            y,
            width,
            height,
            rx,
        } => {
            let el = el
                .with_attr("x", x.to_string())
                .with_attr("y", y.to_string())
                .with_attr("width", width.to_string())
                .with_attr("height", height.to_string());
            match rx {
                Some(rx) => el.with_attr("rx", rx.to_string()),
                None => el,
            }
        }
        Geometry::Line { x1, y1, x2, y2 } => el
            .with_attr("x1", x1.to_string())
            .with_attr("y1", y1.to_string())
            .with_attr("x2", x2.to_string())
            .with_attr("y2", y2.to_string()),
        Geometry::Circle { cx, cy, r } => el
            .with_attr("cx", cx.to_string())
            .with_attr("cy", cy.to_string())
            .with_attr("r", r.to_string()),
        Geometry::Path { d } => el.with_attr("d", d.as_str()),
    };

    if let Some(fill) = &shape.fill {
        el = el.with_attr("fill", fill.resolve(palette));
    }
    if let Some(opacity) = shape.fill_opacity {
        el = el.with_attr("fill-opacity", opacity.to_string());
    }
    if let Some(stroke) = &shape.stroke {
        el = el.with_attr("stroke", stroke.resolve(palette));
    }
    if let Some(width) = shape.stroke_width {
        el = el.with_attr("stroke-width", width.to_string());
    }
    if let Some(cap) = &shape.stroke_linecap {
        el = el.with_attr("stroke-linecap", cap.as_str());
    }
    if let Some(join) = &shape.stroke_linejoin {
        el = el.with_attr("stroke-linejoin", join.as_str());
    }
    el.into()
}
