use crate::error::{GeometryError, OperationError, Result};
use crate::geometry::Plane;
use crate::math::polygon_2d::signed_area_2d;
use crate::math::{Point2, Point3, Vector3, TOLERANCE};
use crate::topology::{
    BodyData, BodyId, CoEdge, EdgeData, EdgeId, FaceId, FaceSurface, LoopData, TopologyStore,
    VertexData,
};

use super::{BodyOwner, MakeFace};

/// Creates a straight prism body by extruding a polygonal profile along Z.
///
/// The profile is given in the XY plane of the kernel frame. Vertices and
/// edges are shared between adjacent faces. Faces are created in the order
/// top, bottom, then one side face per profile edge; all loops are oriented
/// so that the face normals point out of the solid.
pub struct MakePrism {
    name: String,
    profile: Vec<Point2>,
    z_min: f64,
    z_max: f64,
    owner: BodyOwner,
}

impl MakePrism {
    /// Creates a new `MakePrism` operation.
    #[must_use]
    pub fn new(name: impl Into<String>, profile: Vec<Point2>, z_min: f64, z_max: f64) -> Self {
        Self {
            name: name.into(),
            profile,
            z_min,
            z_max,
            owner: BodyOwner::Root,
        }
    }

    /// Sets the component the body is attached to.
    #[must_use]
    pub fn owned_by(mut self, owner: BodyOwner) -> Self {
        self.owner = owner;
        self
    }

    /// Executes the operation, creating the prism in the topology store.
    ///
    /// # Errors
    ///
    /// Returns an error if the profile has fewer than 3 points or zero area,
    /// if `z_max <= z_min`, or if the owning occurrence does not exist.
    pub fn execute(&self, store: &mut TopologyStore) -> Result<BodyId> {
        let n = self.profile.len();
        if n < 3 {
            return Err(OperationError::InvalidInput(format!(
                "prism profile needs at least 3 points, got {n}"
            ))
            .into());
        }
        if self.z_max - self.z_min < TOLERANCE {
            return Err(OperationError::InvalidInput(format!(
                "prism height must be positive (z_min = {}, z_max = {})",
                self.z_min, self.z_max
            ))
            .into());
        }
        let area = signed_area_2d(&self.profile);
        if area.abs() < TOLERANCE {
            return Err(GeometryError::Degenerate("prism profile has zero area".into()).into());
        }
        let ccw = area > 0.0;

        let bottom: Vec<_> = self
            .profile
            .iter()
            .map(|p| store.add_vertex(VertexData::new(Point3::new(p.x, p.y, self.z_min))))
            .collect();
        let top: Vec<_> = self
            .profile
            .iter()
            .map(|p| store.add_vertex(VertexData::new(Point3::new(p.x, p.y, self.z_max))))
            .collect();

        let bottom_edges: Vec<EdgeId> = (0..n)
            .map(|i| store.add_edge(EdgeData::new(bottom[i], bottom[(i + 1) % n])))
            .collect();
        let top_edges: Vec<EdgeId> = (0..n)
            .map(|i| store.add_edge(EdgeData::new(top[i], top[(i + 1) % n])))
            .collect();
        let vertical_edges: Vec<EdgeId> = (0..n)
            .map(|i| store.add_edge(EdgeData::new(bottom[i], top[i])))
            .collect();

        let mut faces = Vec::with_capacity(n + 2);

        // Top: counter-clockwise seen from +Z.
        let top_loop = if ccw {
            forward_cycle(&top_edges)
        } else {
            reversed_cycle(&top_edges)
        };
        faces.push(self.cap(store, top_loop, self.z_max, Vector3::z())?);

        // Bottom: counter-clockwise seen from -Z.
        let bottom_loop = if ccw {
            reversed_cycle(&bottom_edges)
        } else {
            forward_cycle(&bottom_edges)
        };
        faces.push(self.cap(store, bottom_loop, self.z_min, -Vector3::z())?);

        for i in 0..n {
            let j = (i + 1) % n;
            let coedges = if ccw {
                vec![
                    CoEdge::forward(bottom_edges[i]),
                    CoEdge::forward(vertical_edges[j]),
                    CoEdge::reversed(top_edges[i]),
                    CoEdge::reversed(vertical_edges[i]),
                ]
            } else {
                vec![
                    CoEdge::forward(vertical_edges[i]),
                    CoEdge::forward(top_edges[i]),
                    CoEdge::reversed(vertical_edges[j]),
                    CoEdge::reversed(bottom_edges[i]),
                ]
            };
            let a = self.profile[i];
            let b = self.profile[j];
            let direction = Vector3::new(b.x - a.x, b.y - a.y, 0.0);
            let outward = if ccw {
                direction.cross(&Vector3::z())
            } else {
                Vector3::z().cross(&direction)
            };
            let plane = Plane::from_normal(Point3::new(a.x, a.y, self.z_min), outward)?;
            let lp = store.add_loop(LoopData {
                coedges,
                is_outer: true,
            });
            faces.push(MakeFace::new(FaceSurface::Plane(plane), vec![lp]).execute(store)?);
        }

        let body = store.add_body(BodyData::new(self.name.clone(), faces));
        match self.owner {
            BodyOwner::Root => store.attach_to_root(body)?,
            BodyOwner::Occurrence(occurrence) => store.attach_to_occurrence(occurrence, body)?,
        }
        Ok(body)
    }

    fn cap(
        &self,
        store: &mut TopologyStore,
        coedges: Vec<CoEdge>,
        z: f64,
        normal: Vector3,
    ) -> Result<FaceId> {
        let plane = Plane::from_normal(Point3::new(self.profile[0].x, self.profile[0].y, z), normal)?;
        let lp = store.add_loop(LoopData {
            coedges,
            is_outer: true,
        });
        MakeFace::new(FaceSurface::Plane(plane), vec![lp]).execute(store)
    }
}

fn forward_cycle(edges: &[EdgeId]) -> Vec<CoEdge> {
    edges.iter().map(|&e| CoEdge::forward(e)).collect()
}

fn reversed_cycle(edges: &[EdgeId]) -> Vec<CoEdge> {
    edges.iter().rev().map(|&e| CoEdge::reversed(e)).collect()
}
