use crate::error::Result;
use crate::math::polygon_2d::planar_area_3d;
use crate::math::Point3;
use crate::source::BrepSource;
use crate::topology::{FaceId, TopologyStore};

/// Computes the area of a face from its boundary loops.
///
/// The outer loop contributes positively and every inner loop is subtracted.
/// Loops are treated as planar polygons through their vertices, which is
/// exact for planar faces with straight edges.
pub struct FaceArea {
    face: FaceId,
}

impl FaceArea {
    /// Creates a new `FaceArea` query.
    #[must_use]
    pub fn new(face: FaceId) -> Self {
        Self { face }
    }

    /// Executes the query, returning the face area in kernel units squared.
    ///
    /// # Errors
    ///
    /// Returns an error if the face or any of its loops cannot be resolved.
    pub fn execute(&self, store: &TopologyStore) -> Result<f64> {
        let mut area = 0.0;
        for lp in store.face_loops(self.face)? {
            let points: Vec<Point3> = store
                .loop_coedges(lp)?
                .iter()
                .map(|record| record.oriented().0)
                .collect();
            let loop_area = planar_area_3d(&points);
            if store.loop_is_outer(lp)? {
                area += loop_area;
            } else {
                area -= loop_area;
            }
        }
        Ok(area.max(0.0))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::Point2;
    use crate::operations::creation::{MakePrism, MakeSheet};

    #[test]
    fn prism_face_areas() {
        let mut store = TopologyStore::new();
        let body = MakePrism::new(
            "block",
            vec![
                Point2::new(0.0, 0.0),
                Point2::new(2.0, 0.0),
                Point2::new(2.0, 3.0),
                Point2::new(0.0, 3.0),
            ],
            0.0,
            4.0,
        )
        .execute(&mut store)
        .unwrap();

        let areas: Vec<f64> = store
            .body_faces(body)
            .unwrap()
            .into_iter()
            .map(|f| FaceArea::new(f).execute(&store).unwrap())
            .collect();
        let expected = [6.0, 6.0, 8.0, 12.0, 8.0, 12.0];
        for (got, want) in areas.iter().zip(expected) {
            approx::assert_relative_eq!(*got, want, epsilon = 1e-9);
        }
    }

    #[test]
    fn hole_is_subtracted() {
        let mut store = TopologyStore::new();
        let body = MakeSheet::new(
            "washer",
            vec![
                Point3::new(0.0, 0.0, 0.0),
                Point3::new(4.0, 0.0, 0.0),
                Point3::new(4.0, 4.0, 0.0),
                Point3::new(0.0, 4.0, 0.0),
            ],
        )
        .with_hole(vec![
            Point3::new(1.0, 1.0, 0.0),
            Point3::new(1.0, 3.0, 0.0),
            Point3::new(3.0, 3.0, 0.0),
            Point3::new(3.0, 1.0, 0.0),
        ])
        .execute(&mut store)
        .unwrap();

        let face = store.body_faces(body).unwrap()[0];
        let area = FaceArea::new(face).execute(&store).unwrap();
        approx::assert_relative_eq!(area, 12.0, epsilon = 1e-9);
    }
}
