use crate::error::Result;
use crate::geometry::SurfaceType;
use crate::math::Vector3;
use crate::operations::query::FaceArea;
use crate::source::{BrepSource, CoEdgeRecord};

use super::{BodyId, FaceId, FaceSurface, LoopId, TopologyStore};

impl BrepSource for TopologyStore {
    type Body = BodyId;
    type Face = FaceId;
    type Loop = LoopId;

    fn root_bodies(&self) -> Vec<BodyId> {
        self.root_bodies.clone()
    }

    fn occurrence_bodies(&self) -> Result<Vec<Vec<BodyId>>> {
        self.occurrence_order
            .iter()
            .map(|&id| Ok(self.occurrence(id)?.bodies.clone()))
            .collect()
    }

    fn body_is_visible(&self, body: BodyId) -> Result<bool> {
        Ok(self.body(body)?.visible)
    }

    fn body_name(&self, body: BodyId) -> Result<String> {
        Ok(self.body(body)?.name.clone())
    }

    fn body_faces(&self, body: BodyId) -> Result<Vec<FaceId>> {
        Ok(self.body(body)?.faces.clone())
    }

    fn face_surface_type(&self, face: FaceId) -> Result<SurfaceType> {
        Ok(self.face(face)?.surface.surface_type())
    }

    fn face_normal_is_parallel(&self, face: FaceId, axis: &Vector3) -> Result<bool> {
        Ok(match &self.face(face)?.surface {
            FaceSurface::Plane(plane) => plane.is_parallel_to(axis),
            FaceSurface::Curved(_) => false,
        })
    }

    fn face_area(&self, face: FaceId) -> Result<f64> {
        FaceArea::new(face).execute(self)
    }

    fn face_loops(&self, face: FaceId) -> Result<Vec<LoopId>> {
        Ok(self.face(face)?.loops.clone())
    }

    fn loop_is_outer(&self, lp: LoopId) -> Result<bool> {
        Ok(self.loop_data(lp)?.is_outer)
    }

    fn loop_coedges(&self, lp: LoopId) -> Result<Vec<CoEdgeRecord>> {
        let data = self.loop_data(lp)?;
        let mut records = Vec::with_capacity(data.coedges.len());
        for coedge in &data.coedges {
            let edge = self.edge(coedge.edge)?;
            records.push(CoEdgeRecord {
                start: self.vertex(edge.start)?.point,
                end: self.vertex(edge.end)?.point,
                opposed: coedge.opposed,
            });
        }
        Ok(records)
    }
}
