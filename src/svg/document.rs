use std::fmt;

use super::format::{escape_xml_attr, format_number};
use crate::math::Point2;

/// Builds the `d` attribute for a closed polygon.
///
/// Returns an empty string for fewer than 2 points, since nothing visible
/// can be drawn.
#[must_use]
pub fn path_data(points: &[Point2]) -> String {
    if points.len() < 2 {
        return String::new();
    }
    let mut parts = Vec::with_capacity(points.len() + 1);
    for (i, p) in points.iter().enumerate() {
        let cmd = if i == 0 { "M" } else { "L" };
        parts.push(format!("{cmd} {} {}", format_number(p.x), format_number(p.y)));
    }
    parts.push("Z".to_owned());
    parts.join(" ")
}

/// One `<path>` element of the drawing.
#[derive(Debug, Clone, PartialEq)]
pub struct PathElement {
    /// Unique element id, unescaped.
    pub id: String,
    /// Original body name, emitted as `data-name`, unescaped.
    pub display_name: String,
    /// Path `d` attribute.
    pub path_data: String,
    /// Stroke color as `#RRGGBB`.
    pub stroke: String,
}

impl fmt::Display for PathElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            r#"<path id="{}" data-name="{}" d="{}" stroke="{}"/>"#,
            escape_xml_attr(&self.id),
            escape_xml_attr(&self.display_name),
            self.path_data,
            self.stroke,
        )
    }
}

/// A complete SVG drawing in millimetres.
///
/// The view box matches the physical size, so one user unit is one
/// millimetre.
#[derive(Debug, Clone, PartialEq)]
pub struct SvgDocument {
    /// Rendered width in millimetres.
    pub width: f64,
    /// Rendered height in millimetres.
    pub height: f64,
    /// View box width in user units.
    pub view_box_width: f64,
    /// View box height in user units.
    pub view_box_height: f64,
    /// Stroke width applied to the whole group.
    pub stroke_width: f64,
    /// Paths in drawing order.
    pub elements: Vec<PathElement>,
}

impl SvgDocument {
    /// Creates an empty document whose view box equals its size.
    #[must_use]
    pub fn new(width: f64, height: f64, stroke_width: f64) -> Self {
        Self {
            width,
            height,
            view_box_width: width,
            view_box_height: height,
            stroke_width,
            elements: Vec::new(),
        }
    }

    /// Renders the document as one string, lines joined by `\n` with no
    /// trailing newline.
    #[must_use]
    pub fn to_svg_string(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for SvgDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, r#"<?xml version="1.0" encoding="UTF-8"?>"#)?;
        writeln!(
            f,
            r#"<svg xmlns="http://www.w3.org/2000/svg" version="1.1" width="{}mm" height="{}mm" viewBox="0 0 {} {}" overflow="visible">"#,
            format_number(self.width),
            format_number(self.height),
            format_number(self.view_box_width),
            format_number(self.view_box_height),
        )?;
        writeln!(
            f,
            r#"<g fill="none" stroke-width="{}" stroke-linecap="round" stroke-linejoin="round">"#,
            format_number(self.stroke_width),
        )?;
        for element in &self.elements {
            writeln!(f, "{element}")?;
        }
        writeln!(f, "</g>")?;
        write!(f, "</svg>")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn element(id: &str, name: &str) -> PathElement {
        PathElement {
            id: id.to_owned(),
            display_name: name.to_owned(),
            path_data: "M 0.0000 0.0000 L 1.0000 0.0000 Z".to_owned(),
            stroke: "#C67EA6".to_owned(),
        }
    }

    #[test]
    fn path_data_closes_polygon() {
        let points = [
            Point2::new(0.0, 0.0),
            Point2::new(20.0, 0.0),
            Point2::new(20.0, 10.5),
        ];
        assert_eq!(
            path_data(&points),
            "M 0.0000 0.0000 L 20.0000 0.0000 L 20.0000 10.5000 Z"
        );
    }

    #[test]
    fn path_data_needs_two_points() {
        assert_eq!(path_data(&[]), "");
        assert_eq!(path_data(&[Point2::new(1.0, 1.0)]), "");
        assert_eq!(
            path_data(&[Point2::new(1.0, 1.0), Point2::new(2.0, 2.0)]),
            "M 1.0000 1.0000 L 2.0000 2.0000 Z"
        );
    }

    #[test]
    fn element_escapes_attributes() {
        let rendered = element("a_b", "a&b \"q\"").to_string();
        assert_eq!(
            rendered,
            r##"<path id="a_b" data-name="a&amp;b &quot;q&quot;" d="M 0.0000 0.0000 L 1.0000 0.0000 Z" stroke="#C67EA6"/>"##
        );
    }

    #[test]
    fn empty_document_layout() {
        let doc = SvgDocument::new(25.0, 1.0, 1.0);
        let expected = [
            r#"<?xml version="1.0" encoding="UTF-8"?>"#,
            r#"<svg xmlns="http://www.w3.org/2000/svg" version="1.1" width="25.0000mm" height="1.0000mm" viewBox="0 0 25.0000 1.0000" overflow="visible">"#,
            r#"<g fill="none" stroke-width="1.0000" stroke-linecap="round" stroke-linejoin="round">"#,
            "</g>",
            "</svg>",
        ]
        .join("\n");
        assert_eq!(doc.to_svg_string(), expected);
    }

    #[test]
    fn elements_in_order_without_trailing_newline() {
        let mut doc = SvgDocument::new(2.0, 2.0, 0.5);
        doc.elements.push(element("first", "first"));
        doc.elements.push(element("second", "second"));
        let svg = doc.to_svg_string();
        let lines: Vec<&str> = svg.split('\n').collect();
        assert_eq!(lines.len(), 7);
        assert!(lines[3].starts_with(r#"<path id="first""#));
        assert!(lines[4].starts_with(r#"<path id="second""#));
        assert!(!svg.ends_with('\n'));
    }
}
