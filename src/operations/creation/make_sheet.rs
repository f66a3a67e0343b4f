use crate::error::{GeometryError, Result};
use crate::geometry::Plane;
use crate::math::polygon_2d::newell_normal;
use crate::math::{Point3, TOLERANCE};
use crate::topology::{BodyData, BodyId, FaceSurface, TopologyStore};

use super::{BodyOwner, MakeFace, MakeLoop};

/// Creates a body made of a single planar face.
///
/// The face lies in the plane of the outer boundary, which may have any
/// orientation. Its normal follows the boundary winding (right-hand rule).
pub struct MakeSheet {
    name: String,
    outer: Vec<Point3>,
    holes: Vec<Vec<Point3>>,
    owner: BodyOwner,
}

impl MakeSheet {
    /// Creates a new `MakeSheet` operation.
    #[must_use]
    pub fn new(name: impl Into<String>, outer: Vec<Point3>) -> Self {
        Self {
            name: name.into(),
            outer,
            holes: Vec::new(),
            owner: BodyOwner::Root,
        }
    }

    /// Adds an inner boundary.
    #[must_use]
    pub fn with_hole(mut self, hole: Vec<Point3>) -> Self {
        self.holes.push(hole);
        self
    }

    /// Sets the component the body is attached to.
    #[must_use]
    pub fn owned_by(mut self, owner: BodyOwner) -> Self {
        self.owner = owner;
        self
    }

    /// Executes the operation, creating the sheet body in the topology store.
    ///
    /// # Errors
    ///
    /// Returns an error if the outer boundary has zero area, a hole does not
    /// lie in its plane, or the owning occurrence does not exist.
    pub fn execute(&self, store: &mut TopologyStore) -> Result<BodyId> {
        let normal = newell_normal(&self.outer);
        if normal.norm() < TOLERANCE {
            return Err(GeometryError::Degenerate("sheet boundary has zero area".into()).into());
        }
        let plane = Plane::from_normal(self.outer[0], normal)?;

        let mut loops = vec![MakeLoop::new(self.outer.clone()).execute(store)?];
        for hole in &self.holes {
            loops.push(MakeLoop::new(hole.clone()).hole().execute(store)?);
        }
        let face = MakeFace::new(FaceSurface::Plane(plane), loops).execute(store)?;

        let body = store.add_body(BodyData::new(self.name.clone(), vec![face]));
        match self.owner {
            BodyOwner::Root => store.attach_to_root(body)?,
            BodyOwner::Occurrence(occurrence) => store.attach_to_occurrence(occurrence, body)?,
        }
        Ok(body)
    }
}
