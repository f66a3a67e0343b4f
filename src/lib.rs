pub mod error;
pub mod export;
pub mod geometry;
pub mod math;
pub mod operations;
pub mod source;
pub mod svg;
pub mod topology;

pub use error::{BrepSvgError, Result};
pub use export::{svg_output_path, ExportParams, ExportReport, ExportSvg};
pub use source::{BrepSource, CoEdgeRecord};
