//! End-to-end export of visible bodies to one SVG file.

mod export_svg;
mod output_path;
mod report;

pub use export_svg::{ExportSvg, SvgDrawing};
pub use output_path::svg_output_path;
pub use report::ExportReport;

/// Parameters controlling an SVG export.
#[derive(Debug, Clone, Copy)]
pub struct ExportParams {
    /// Factor from kernel length units to millimetres.
    pub unit_scale: f64,
    /// Merge distance in kernel units; scaled by `unit_scale` before use.
    pub merge_factor: f64,
    /// Sine-of-angle threshold below which a vertex counts as collinear.
    pub collinear_tolerance: f64,
    /// Stroke width of every path, in millimetres.
    pub stroke_width: f64,
}

impl ExportParams {
    /// Merge distance in drawing units.
    #[must_use]
    pub fn merge_tolerance(&self) -> f64 {
        self.merge_factor * self.unit_scale
    }

    /// Squared merge distance in drawing units.
    #[must_use]
    pub fn tolerance_sq(&self) -> f64 {
        let tol = self.merge_tolerance();
        tol * tol
    }
}

impl Default for ExportParams {
    fn default() -> Self {
        Self {
            unit_scale: 10.0,
            merge_factor: 1e-4,
            collinear_tolerance: 1e-6,
            stroke_width: 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_merge_tolerance() {
        let params = ExportParams::default();
        approx::assert_relative_eq!(params.merge_tolerance(), 1e-3);
        approx::assert_relative_eq!(params.tolerance_sq(), 1e-6);
    }
}
