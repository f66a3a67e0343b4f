use crate::error::{OperationError, Result};
use crate::math::Point3;
use crate::topology::{CoEdge, EdgeData, LoopData, LoopId, TopologyStore, VertexData};

/// Creates a closed polygonal loop through a sequence of 3D points.
///
/// One vertex is created per point and one edge per consecutive pair, the
/// last edge closing back to the first point. Edges always run in point
/// order; with [`opposed`](Self::opposed) the loop instead uses every edge
/// backwards, so it is traversed in reverse point order.
pub struct MakeLoop {
    points: Vec<Point3>,
    is_outer: bool,
    opposed: bool,
}

impl MakeLoop {
    /// Creates a new `MakeLoop` operation for an outer loop.
    #[must_use]
    pub fn new(points: Vec<Point3>) -> Self {
        Self {
            points,
            is_outer: true,
            opposed: false,
        }
    }

    /// Marks the loop as an inner loop (hole).
    #[must_use]
    pub fn hole(mut self) -> Self {
        self.is_outer = false;
        self
    }

    /// Traverses every edge against its own direction.
    #[must_use]
    pub fn opposed(mut self) -> Self {
        self.opposed = true;
        self
    }

    /// Executes the operation, creating the loop in the topology store.
    ///
    /// # Errors
    ///
    /// Returns an error if fewer than 2 points are given.
    pub fn execute(&self, store: &mut TopologyStore) -> Result<LoopId> {
        let n = self.points.len();
        if n < 2 {
            return Err(OperationError::InvalidInput(format!(
                "a loop needs at least 2 points, got {n}"
            ))
            .into());
        }

        let vertices: Vec<_> = self
            .points
            .iter()
            .map(|&p| store.add_vertex(VertexData::new(p)))
            .collect();
        let edges: Vec<_> = (0..n)
            .map(|i| store.add_edge(EdgeData::new(vertices[i], vertices[(i + 1) % n])))
            .collect();

        let coedges = if self.opposed {
            edges.iter().rev().map(|&e| CoEdge::reversed(e)).collect()
        } else {
            edges.iter().map(|&e| CoEdge::forward(e)).collect()
        };

        Ok(store.add_loop(LoopData {
            coedges,
            is_outer: self.is_outer,
        }))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::source::BrepSource;

    fn square() -> Vec<Point3> {
        vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(1.0, 1.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
        ]
    }

    #[test]
    fn forward_loop_is_connected() {
        let mut store = TopologyStore::new();
        let lp = MakeLoop::new(square()).execute(&mut store).unwrap();
        let records = store.loop_coedges(lp).unwrap();
        assert_eq!(records.len(), 4);
        for i in 0..4 {
            let (_, to) = records[i].oriented();
            let (from, _) = records[(i + 1) % 4].oriented();
            assert_eq!(to, from);
        }
        assert_eq!(records[0].oriented().0, Point3::new(0.0, 0.0, 0.0));
    }

    #[test]
    fn opposed_loop_runs_backwards() {
        let mut store = TopologyStore::new();
        let lp = MakeLoop::new(square()).opposed().execute(&mut store).unwrap();
        let records = store.loop_coedges(lp).unwrap();
        assert!(records.iter().all(|r| r.opposed));
        // Starts at the first point and heads to the last one.
        assert_eq!(records[0].oriented().0, Point3::new(0.0, 0.0, 0.0));
        assert_eq!(records[0].oriented().1, Point3::new(0.0, 1.0, 0.0));
        for i in 0..4 {
            assert_eq!(records[i].oriented().1, records[(i + 1) % 4].oriented().0);
        }
    }

    #[test]
    fn hole_flag() {
        let mut store = TopologyStore::new();
        let lp = MakeLoop::new(square()).hole().execute(&mut store).unwrap();
        assert!(!store.loop_is_outer(lp).unwrap());
    }

    #[test]
    fn single_point_rejected() {
        let mut store = TopologyStore::new();
        let result = MakeLoop::new(vec![Point3::origin()]).execute(&mut store);
        assert!(result.is_err());
    }
}
