use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type for the B-rep to SVG exporter.
#[derive(Debug, Error)]
pub enum BrepSvgError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Topology(#[from] TopologyError),

    #[error(transparent)]
    Operation(#[from] OperationError),

    #[error(transparent)]
    Export(#[from] ExportError),
}

/// Errors related to geometric computations.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("degenerate geometry: {0}")]
    Degenerate(String),

    #[error("zero-length vector")]
    ZeroVector,
}

/// Errors related to topology lookups.
#[derive(Debug, Error)]
pub enum TopologyError {
    #[error("entity not found: {0}")]
    EntityNotFound(String),

    #[error("invalid topology: {0}")]
    InvalidTopology(String),
}

/// Errors related to building or querying topology.
#[derive(Debug, Error)]
pub enum OperationError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("operation failed: {0}")]
    Failed(String),
}

/// Failures surfaced by an SVG export.
///
/// Bodies that cannot be projected are not errors; they are counted in
/// [`ExportReport::skipped`](crate::export::ExportReport::skipped).
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("no visible bodies to export")]
    NoVisibleBodies,

    #[error("none of the {bodies} visible bodies produced an exportable outline")]
    NoExportableGeometry { bodies: usize },

    #[error("failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Convenience type alias for results using [`BrepSvgError`].
pub type Result<T> = std::result::Result<T, BrepSvgError>;
