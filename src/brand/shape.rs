//! Vector icon shapes in the 40x40 icon coordinate space

use serde::Deserialize;

use crate::error::BrandError;

use super::palette::Paint;

/// Shape geometry, in icon units
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    Rect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        rx: Option<f64>,
    },
    Line {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
    },
    Circle {
        cx: f64,
        cy: f64,
        r: f64,
    },
    Path {
        d: String,
    },
}

impl Geometry {
    /// The SVG element name for this geometry
    pub fn tag(&self) -> &'static str {
        match self {
            Geometry::Rect { .. } => "rect",
            Geometry::Line { .. } => "line",
            Geometry::Circle { .. } => "circle",
            Geometry::Path { .. } => "path",
        }
    }

    /// Numeric attributes by name, flagged when the value is a length
    fn values(&self) -> Vec<(&'static str, f64, bool)> {
        match *self {
            Geometry::Rect {
                x,
                y,
                width,
                height,
                rx,
            } => {
                let mut values = vec![
                    ("x", x, false),
                    ("y", y, false),
                    ("width", width, true),
                    ("height", height, true),
                ];
                values.extend(rx.map(|rx| ("rx", rx, true)));
                values
            }
            Geometry::Line { x1, y1, x2, y2 } => vec![
                ("x1", x1, false),
                ("y1", y1, false),
                ("x2", x2, false),
                ("y2", y2, false),
            ],
            Geometry::Circle { cx, cy, r } => {
                vec![("cx", cx, false), ("cy", cy, false), ("r", r, true)]
            }
            Geometry::Path { .. } => Vec::new(),
        }
    }
}

/// One drawn element of a vector icon
#[derive(Debug, Clone, PartialEq)]
pub struct IconShape {
    pub geometry: Geometry,
    pub fill: Option<Paint>,
    pub fill_opacity: Option<f64>,
    pub stroke: Option<Paint>,
    pub stroke_width: Option<f64>,
    pub stroke_linecap: Option<String>,
    pub stroke_linejoin: Option<String>,
}

/// TOML structure for a single `[[icon.shapes]]` entry
#[derive(Debug, Deserialize)]
pub(crate) struct TomlShape {
    shape: String,
    x: Option<f64>,
    y: Option<f64>,
    width: Option<f64>,
    height: Option<f64>,
    rx: Option<f64>,
    x1: Option<f64>,
    y1: Option<f64>,
    x2: Option<f64>,
    y2: Option<f64>,
    cx: Option<f64>,
    cy: Option<f64>,
    r: Option<f64>,
    d: Option<String>,
    fill: Option<String>,
    fill_opacity: Option<f64>,
    stroke: Option<String>,
    stroke_width: Option<f64>,
    stroke_linecap: Option<String>,
    stroke_linejoin: Option<String>,
}

const LINECAPS: &[&str] = &["butt", "round", "square"];
const LINEJOINS: &[&str] = &["miter", "round", "bevel"];

impl TomlShape {
    pub(crate) fn into_shape(self, index: usize) -> Result<IconShape, BrandError> {
        let kind = self.shape.clone();
        let require = |value: Option<f64>, name: &str| {
            value.ok_or_else(|| {
                BrandError::invalid_shape(index, &kind, format!("missing field '{}'", name))
            })
        };

        let geometry = match self.shape.as_str() {
            "rect" => Geometry::Rect {
                x: require(self.x, "x")?,
                y: require(self.y, "y")?,
                width: require(self.width, "width")?,
                height: require(self.height, "height")?,
                rx: self.rx,
            },
            "line" => Geometry::Line {
                x1: require(self.x1, "x1")?,
                y1: require(self.y1, "y1")?,
                x2: require(self.x2, "x2")?,
                y2: require(self.y2, "y2")?,
            },
            "circle" => Geometry::Circle {
                cx: require(self.cx, "cx")?,
                cy: require(self.cy, "cy")?,
                r: require(self.r, "r")?,
            },
            "path" => Geometry::Path {
                d: self.d.clone().ok_or_else(|| {
                    BrandError::invalid_shape(index, &kind, "missing field 'd'")
                })?,
            },
            other => {
                return Err(BrandError::invalid_shape(
                    index,
                    other,
                    "expected one of rect, line, circle, path",
                ))
            }
        };

        let numbers = geometry
            .values()
            .into_iter()
            .chain(self.stroke_width.map(|w| ("stroke_width", w, true)));
        for (name, value, is_length) in numbers {
            if !value.is_finite() {
                return Err(BrandError::invalid_shape(
                    index,
                    &kind,
                    format!("{} must be a finite number, got {}", name, value),
                ));
            }
            if is_length && value < 0.0 {
                return Err(BrandError::invalid_shape(
                    index,
                    &kind,
                    format!("{} must not be negative, got {}", name, value),
                ));
            }
        }

        if let Some(opacity) = self.fill_opacity {
            if !(0.0..=1.0).contains(&opacity) {
                return Err(BrandError::invalid_shape(
                    index,
                    &kind,
                    format!("fill_opacity {} is outside 0..=1", opacity),
                ));
            }
        }
        if let Some(cap) = &self.stroke_linecap {
            if !LINECAPS.contains(&cap.as_str()) {
                return Err(BrandError::invalid_shape(
                    index,
                    &kind,
                    format!("unknown stroke_linecap '{}'", cap),
                ));
            }
        }
        if let Some(join) = &self.stroke_linejoin {
            if !LINEJOINS.contains(&join.as_str()) {
                return Err(BrandError::invalid_shape(
                    index,
                    &kind,
                    format!("unknown stroke_linejoin '{}'", join),
                ));
            }
        }

        let field = |name: &str| format!("icon.shapes[{}].{}", index, name);
        let fill = self
            .fill
            .as_deref()
            .map(|v| Paint::parse(&field("fill"), v))
            .transpose()?;
        let stroke = self
            .stroke
            .as_deref()
            .map(|v| Paint::parse(&field("stroke"), v))
            .transpose()?;

        Ok(IconShape {
            geometry,
            fill,
            fill_opacity: self.fill_opacity,
            stroke,
            stroke_width: self.stroke_width,
            stroke_linecap: self.stroke_linecap,
            stroke_linejoin: self.stroke_linejoin,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::brand::palette::ColorRole;

    fn parse(src: &str) -> Result<IconShape, BrandError> {
        let shape: TomlShape = toml::from_str(src).expect("valid TOML");
        shape.into_shape(0)
    }

    #[test]
    fn test_rect_with_integer_coordinates() {
        let shape = parse(
            r#"
shape = "rect"
x = 8
y = 12
width = 24
height = 20
rx = 2
fill = "primary"
"#,
        )
        .unwrap();
        assert_eq!(
            shape.geometry,
            Geometry::Rect {
                x: 8.0,
                y: 12.0,
                width: 24.0,
                height: 20.0,
                rx: Some(2.0)
            }
        );
        assert_eq!(shape.fill, Some(Paint::Role(ColorRole::Primary)));
        assert_eq!(shape.stroke, None);
    }

    #[test]
    fn test_missing_geometry_field() {
        let err = parse(
            r#"
shape = "circle"
cx = 1
cy = 2
"#,
        )
        .unwrap_err();
        assert_eq!(err.to_string(), "icon shape 0 (circle): missing field 'r'");
    }

    #[test]
    fn test_unknown_shape_kind() {
        let err = parse(r#"shape = "hexagon""#).unwrap_err();
        assert!(matches!(err, BrandError::InvalidShape { ref kind, .. } if kind == "hexagon"));
    }

    #[test]
    fn test_bad_linecap() {
        let err = parse(
            r#"
shape = "path"
d = "M0 0 L1 1"
stroke_linecap = "pointy"
"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("stroke_linecap"));
    }

    #[test]
    fn test_opacity_out_of_range() {
        let err = parse(
            r#"
shape = "path"
d = "M0 0"
fill_opacity = 1.5
"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("fill_opacity"));
    }

    #[test]
    fn test_infinite_coordinate_rejected() {
        let err = parse(
            r#"
shape = "rect"
x = inf
y = 12
width = 24
height = 20
"#,
        )
        .unwrap_err();
        assert_eq!(
            err.to_string(),
            "icon shape 0 (rect): x must be a finite number, got inf"
        );
    }

    #[test]
    fn test_nan_stroke_width_rejected() {
        let err = parse(
            r#"
shape = "line"
x1 = 0
y1 = 0
x2 = 10
y2 = 10
stroke_width = nan
"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("stroke_width must be a finite number"));
    }

    #[test]
    fn test_negative_lengths_rejected() {
        let err = parse(
            r#"
shape = "circle"
cx = 20
cy = 20
r = -4
"#,
        )
        .unwrap_err();
        assert_eq!(
            err.to_string(),
            "icon shape 0 (circle): r must not be negative, got -4"
        );

        let err = parse(
            r#"
shape = "rect"
x = 0
y = 0
width = 10
height = 10
rx = -1
"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("rx must not be negative"));
    }

    #[test]
    fn test_negative_coordinates_allowed() {
        let shape = parse(
            r#"
shape = "line"
x1 = -2
y1 = -2
x2 = 4
y2 = 4
"#,
        )
        .unwrap();
        assert_eq!(shape.geometry.tag(), "line");
    }

    #[test]
    fn test_bad_paint_names_field() {
        let err = parse(
            r#"
shape = "path"
d = "M0 0"
stroke = "violet"
"#,
        )
        .unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid color 'violet' for icon.shapes[0].stroke"
        );
    }
}
