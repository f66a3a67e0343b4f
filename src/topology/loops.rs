use super::edge::EdgeId;

slotmap::new_key_type! {
    /// Unique identifier for a loop in the topology store.
    pub struct LoopId;
}

/// A directed use of an edge within a loop.
#[derive(Debug, Clone, Copy)]
pub struct CoEdge {
    /// The edge identifier.
    pub edge: EdgeId,
    /// If `true`, the loop traverses the edge from its end vertex to its
    /// start vertex.
    pub opposed: bool,
}

impl CoEdge {
    /// Creates a co-edge following the edge's own direction.
    #[must_use]
    pub fn forward(edge: EdgeId) -> Self {
        Self {
            edge,
            opposed: false,
        }
    }

    /// Creates a co-edge running against the edge's own direction.
    #[must_use]
    pub fn reversed(edge: EdgeId) -> Self {
        Self { edge, opposed: true }
    }
}

/// A closed boundary loop of a face.
///
/// The co-edges are stored in cyclic order: the last one connects back to
/// the first.
#[derive(Debug, Clone)]
pub struct LoopData {
    /// The co-edges in traversal order.
    pub coedges: Vec<CoEdge>,
    /// `true` for the loop enclosing the face, `false` for holes.
    pub is_outer: bool,
}
