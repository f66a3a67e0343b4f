mod plane;

pub use plane::Plane;

/// Kind of surface supporting a face.
///
/// Only planar faces carry geometry this crate uses; the remaining kinds are
/// reported by kernels so that curved faces can be recognised and rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceType {
    /// A planar surface.
    Plane,
    /// A cylindrical surface.
    Cylinder,
    /// A conical surface.
    Cone,
    /// A spherical surface.
    Sphere,
    /// A toroidal surface.
    Torus,
    /// Any other surface (NURBS, swept, offset, ...).
    Other,
}

impl SurfaceType {
    /// Returns `true` for [`SurfaceType::Plane`].
    #[must_use]
    pub fn is_plane(self) -> bool {
        self == Self::Plane
    }
}
