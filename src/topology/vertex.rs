use crate::math::Point3;

slotmap::new_key_type! {
    /// Unique identifier for a vertex in the topology store.
    pub struct VertexId;
}

/// A topological vertex and its position in the kernel's native frame.
#[derive(Debug, Clone)]
pub struct VertexData {
    /// The 3D position of the vertex, in kernel units.
    pub point: Point3,
}

impl VertexData {
    /// Creates a new vertex at the given point.
    #[must_use]
    pub fn new(point: Point3) -> Self {
        Self { point }
    }
}
