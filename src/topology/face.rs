use crate::geometry::surface::{Plane, SurfaceType};

use super::loops::LoopId;

slotmap::new_key_type! {
    /// Unique identifier for a face in the topology store.
    pub struct FaceId;
}

/// The geometric surface associated with a face.
#[derive(Debug, Clone)]
pub enum FaceSurface {
    /// A planar surface.
    Plane(Plane),
    /// A non-planar surface. Only its kind is retained.
    Curved(SurfaceType),
}

impl FaceSurface {
    /// Returns the surface kind.
    #[must_use]
    pub fn surface_type(&self) -> SurfaceType {
        match self {
            Self::Plane(_) => SurfaceType::Plane,
            Self::Curved(kind) => *kind,
        }
    }
}

/// Data associated with a topological face.
///
/// A face is a bounded region on a surface. One of its loops should be
/// flagged outer; the others describe holes.
#[derive(Debug, Clone)]
pub struct FaceData {
    /// The geometric surface on which this face lies.
    pub surface: FaceSurface,
    /// Boundary loops in kernel order.
    pub loops: Vec<LoopId>,
}
