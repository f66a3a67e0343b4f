use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::{debug, info, warn};

use super::{ExportParams, ExportReport};
use crate::error::{ExportError, OperationError, Result};
use crate::geometry::Polygon;
use crate::operations::modification::simplify_polyline;
use crate::operations::query::{SceneBounds, SelectFace, WalkOuterLoop};
use crate::source::BrepSource;
use crate::svg::{color_for, path_data, IdAllocator, PathElement, SvgDocument};

/// A drawing built from a design but not yet written.
#[derive(Debug, Clone)]
pub struct SvgDrawing {
    /// The serializable document.
    pub document: SvgDocument,
    /// Visible bodies that produced no outline.
    pub skipped: usize,
    /// Visible bodies considered.
    pub total: usize,
}

/// Exports the outlines of every visible body to one SVG file.
///
/// Each body is represented by the outer boundary of its largest planar
/// face parallel to the XY plane. Bodies without such a face, or whose
/// outline collapses during simplification, are skipped and counted.
pub struct ExportSvg {
    path: PathBuf,
    params: ExportParams,
}

impl ExportSvg {
    /// Creates a new `ExportSvg` operation writing to `path`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            params: ExportParams::default(),
        }
    }

    /// Overrides the default export parameters.
    #[must_use]
    pub fn with_params(mut self, params: ExportParams) -> Self {
        self.params = params;
        self
    }

    /// Builds the drawing without touching the file system.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::NoVisibleBodies`] if nothing is shown,
    /// [`ExportError::NoExportableGeometry`] if no visible body yields an
    /// outline, and an [`OperationError`] if the parameters are unusable.
    pub fn build<S: BrepSource>(&self, source: &S) -> Result<SvgDrawing> {
        self.validate_params()?;

        let bodies = collect_visible_bodies(source)?;
        if bodies.is_empty() {
            return Err(ExportError::NoVisibleBodies.into());
        }
        let total = bodies.len();

        let mut names = Vec::new();
        let mut outlines = Vec::new();
        let mut skipped = 0;
        for body in bodies {
            let outline = source
                .body_name(body)
                .and_then(|name| Ok((self.body_outline(source, body)?, name)));
            match outline {
                Ok((Some(polygon), name)) => {
                    names.push(name);
                    outlines.push(polygon);
                }
                Ok((None, name)) => {
                    debug!(body = %name, "skipping body without a usable outline");
                    skipped += 1;
                }
                Err(err) => {
                    warn!(error = %err, "skipping body the source could not resolve");
                    skipped += 1;
                }
            }
        }

        let Some(bounds) = SceneBounds::from_polygons(&outlines) else {
            return Err(ExportError::NoExportableGeometry { bodies: total }.into());
        };

        let mut document =
            SvgDocument::new(bounds.width(), bounds.height(), self.params.stroke_width);
        let mut ids = IdAllocator::new();
        let normalized = bounds.normalize(&outlines);
        let paths = normalized
            .iter()
            .zip(names)
            .map(|(polygon, name)| (path_data(&polygon.points), name))
            .filter(|(d, _)| !d.is_empty());
        for (index, (d, name)) in paths.enumerate() {
            document.elements.push(PathElement {
                id: ids.id_for(&name),
                display_name: name,
                path_data: d,
                stroke: color_for(index),
            });
        }

        Ok(SvgDrawing {
            document,
            skipped,
            total,
        })
    }

    /// Builds the drawing and writes it to the destination.
    ///
    /// The file is written to a temporary sibling first and then moved over
    /// the destination, so a failed export never leaves a partial file.
    ///
    /// # Errors
    ///
    /// Returns the errors of [`build`](Self::build), or [`ExportError::Io`]
    /// if the destination cannot be written.
    pub fn execute<S: BrepSource>(&self, source: &S) -> Result<ExportReport> {
        let drawing = self.build(source)?;
        write_atomically(&self.path, &drawing.document.to_svg_string())?;

        let report = ExportReport {
            path: self.path.clone(),
            exported: drawing.document.elements.len(),
            skipped: drawing.skipped,
            total: drawing.total,
        };
        info!(
            path = %report.path.display(),
            exported = report.exported,
            skipped = report.skipped,
            "wrote SVG drawing"
        );
        Ok(report)
    }

    fn validate_params(&self) -> Result<()> {
        let p = &self.params;
        if !(p.unit_scale.is_finite() && p.unit_scale > 0.0) {
            return Err(OperationError::InvalidInput("unit scale must be positive".into()).into());
        }
        if !(p.merge_factor.is_finite() && p.merge_factor >= 0.0) {
            return Err(
                OperationError::InvalidInput("merge factor must not be negative".into()).into(),
            );
        }
        if !(p.collinear_tolerance.is_finite() && p.collinear_tolerance >= 0.0) {
            return Err(OperationError::InvalidInput(
                "collinear tolerance must not be negative".into(),
            )
            .into());
        }
        if !(p.stroke_width.is_finite() && p.stroke_width >= 0.0) {
            return Err(
                OperationError::InvalidInput("stroke width must not be negative".into()).into(),
            );
        }
        Ok(())
    }

    /// Projects one body to a simplified closed outline, or `None` if it has
    /// nothing drawable.
    fn body_outline<S: BrepSource>(&self, source: &S, body: S::Body) -> Result<Option<Polygon>> {
        let Some(face) = SelectFace::new(body).execute(source)? else {
            debug!("no planar face parallel to the drawing plane");
            return Ok(None);
        };
        let walk = WalkOuterLoop::new(face, self.params.unit_scale, self.params.tolerance_sq());
        let Some(outline) = walk.execute(source)? else {
            debug!("selected face has no outer loop");
            return Ok(None);
        };
        let simplified = Polygon::closed(simplify_polyline(
            &outline.points,
            true,
            self.params.collinear_tolerance,
        ));
        if simplified.is_degenerate() {
            debug!(points = simplified.len(), "outline collapsed during simplification");
            return Ok(None);
        }
        Ok(Some(simplified))
    }
}

/// Visible bodies of the root component, then of each occurrence in order.
///
/// A body whose visibility cannot be read is left out.
fn collect_visible_bodies<S: BrepSource>(source: &S) -> Result<Vec<S::Body>> {
    let mut visible = Vec::new();
    let groups = std::iter::once(source.root_bodies()).chain(source.occurrence_bodies()?);
    for body in groups.flatten() {
        match source.body_is_visible(body) {
            Ok(true) => visible.push(body),
            Ok(false) => {}
            Err(err) => warn!(error = %err, "ignoring body with unreadable visibility"),
        }
    }
    Ok(visible)
}

fn write_atomically(path: &Path, contents: &str) -> Result<()> {
    let io_error = |source: std::io::Error| ExportError::Io {
        path: path.to_path_buf(),
        source,
    };
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut file = NamedTempFile::new_in(dir).map_err(io_error)?;
    if let Some(permissions) = output_permissions(path) {
        file.as_file()
            .set_permissions(permissions)
            .map_err(io_error)?;
    }
    file.write_all(contents.as_bytes()).map_err(io_error)?;
    file.as_file().sync_all().map_err(io_error)?;
    file.persist(path).map_err(|err| io_error(err.error))?;
    Ok(())
}

/// Permissions for the written file: those of the file being replaced, or
/// the usual `0644` for a new file. Temporary files start out owner-only.
fn output_permissions(path: &Path) -> Option<fs::Permissions> {
    match fs::metadata(path) {
        Ok(meta) => Some(meta.permissions()),
        Err(_) => default_permissions(),
    }
}

#[cfg(unix)]
fn default_permissions() -> Option<fs::Permissions> {
    use std::os::unix::fs::PermissionsExt;
    Some(fs::Permissions::from_mode(0o644))
}

#[cfg(not(unix))]
fn default_permissions() -> Option<fs::Permissions> {
    None
}
