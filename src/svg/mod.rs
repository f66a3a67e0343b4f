//! SVG markup for projected outlines.

mod color;
mod document;
mod format;
mod ids;

pub use color::color_for;
pub use document::{path_data, PathElement, SvgDocument};
pub use format::{escape_xml_attr, format_number};
pub use ids::{sanitize_id, IdAllocator};
