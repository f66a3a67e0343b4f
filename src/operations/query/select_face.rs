use tracing::debug;

use crate::error::Result;
use crate::math::Vector3;
use crate::source::BrepSource;

/// The fixed projection axis: Z in the body's native frame.
#[must_use]
pub fn projection_axis() -> Vector3 {
    Vector3::z()
}

/// Returns `true` if `face` is planar and its normal is parallel to the
/// projection axis.
///
/// Parallelism is decided by the source with its own kernel tolerance.
///
/// # Errors
///
/// Returns an error if the source cannot resolve the face.
pub fn is_projectable_face<S: BrepSource>(source: &S, face: S::Face) -> Result<bool> {
    if !source.face_surface_type(face)?.is_plane() {
        return Ok(false);
    }
    source.face_normal_is_parallel(face, &projection_axis())
}

/// Picks the face of a body whose outline represents the body in plan view.
///
/// Among planar faces parallel to the projection plane, the one with the
/// largest area wins; on equal areas the first face in kernel order is kept.
pub struct SelectFace<B> {
    body: B,
}

impl<B: Copy> SelectFace<B> {
    /// Creates a new `SelectFace` query.
    #[must_use]
    pub fn new(body: B) -> Self {
        Self { body }
    }

    /// Executes the query, returning `None` if no face qualifies.
    ///
    /// # Errors
    ///
    /// Returns an error if the source cannot resolve the body or its faces.
    pub fn execute<S: BrepSource<Body = B>>(&self, source: &S) -> Result<Option<S::Face>> {
        let mut best: Option<(S::Face, f64)> = None;
        for face in source.body_faces(self.body)? {
            if !is_projectable_face(source, face)? {
                continue;
            }
            let area = source.face_area(face)?;
            if best.as_ref().is_none_or(|&(_, best_area)| area > best_area) {
                best = Some((face, area));
            }
        }
        if let Some((_, area)) = &best {
            debug!(area, "selected projection face");
        }
        Ok(best.map(|(face, _)| face))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::geometry::{Plane, SurfaceType};
    use crate::math::{Point2, Point3};
    use crate::operations::creation::{MakeFace, MakeLoop, MakePrism, MakeSheet};
    use crate::topology::{BodyData, FaceSurface, TopologyStore};

    fn xy_rect(store: &mut TopologyStore, w: f64, h: f64, z: f64, normal: Vector3) -> crate::topology::FaceId {
        let lp = MakeLoop::new(vec![
            Point3::new(0.0, 0.0, z),
            Point3::new(w, 0.0, z),
            Point3::new(w, h, z),
            Point3::new(0.0, h, z),
        ])
        .execute(store)
        .unwrap();
        let plane = Plane::from_normal(Point3::new(0.0, 0.0, z), normal).unwrap();
        MakeFace::new(FaceSurface::Plane(plane), vec![lp])
            .execute(store)
            .unwrap()
    }

    #[test]
    fn largest_parallel_face_wins() {
        let mut store = TopologyStore::new();
        let small = xy_rect(&mut store, 1.0, 1.0, 0.0, Vector3::z());
        let large = xy_rect(&mut store, 3.0, 2.0, 1.0, Vector3::z());
        let body = store.add_body(BodyData::new("b", vec![small, large]));
        assert_eq!(SelectFace::new(body).execute(&store).unwrap(), Some(large));
    }

    #[test]
    fn equal_areas_keep_first() {
        let mut store = TopologyStore::new();
        let body = MakePrism::new(
            "p",
            vec![
                Point2::new(0.0, 0.0),
                Point2::new(5.0, 0.0),
                Point2::new(5.0, 5.0),
            ],
            0.0,
            10.0,
        )
        .execute(&mut store)
        .unwrap();
        let faces = store.body_faces(body).unwrap();
        // Side faces are larger, but not parallel; top and bottom tie.
        assert_eq!(SelectFace::new(body).execute(&store).unwrap(), Some(faces[0]));
    }

    #[test]
    fn curved_and_tilted_faces_ignored() {
        let mut store = TopologyStore::new();
        let lp = MakeLoop::new(vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(9.0, 0.0, 0.0),
            Point3::new(9.0, 9.0, 0.0),
        ])
        .execute(&mut store)
        .unwrap();
        let curved = MakeFace::new(FaceSurface::Curved(SurfaceType::Sphere), vec![lp])
            .execute(&mut store)
            .unwrap();
        let body = store.add_body(BodyData::new("c", vec![curved]));
        assert_eq!(SelectFace::new(body).execute(&store).unwrap(), None);

        let ramp = MakeSheet::new(
            "ramp",
            vec![
                Point3::new(0.0, 0.0, 0.0),
                Point3::new(1.0, 0.0, 0.0),
                Point3::new(1.0, 1.0, 1.0),
            ],
        )
        .execute(&mut store)
        .unwrap();
        assert_eq!(SelectFace::new(ramp).execute(&store).unwrap(), None);
    }

    #[test]
    fn downward_face_counts_as_parallel() {
        let mut store = TopologyStore::new();
        let face = xy_rect(&mut store, 1.0, 1.0, 0.0, -Vector3::z());
        assert!(is_projectable_face(&store, face).unwrap());
    }
}
