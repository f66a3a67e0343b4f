use crate::error::Result;
use crate::geometry::Polygon;
use crate::math::distance_2d::points_close;
use crate::math::{Point2, Point3};
use crate::source::BrepSource;

/// Projects a kernel point onto the drawing plane.
///
/// The Y axis is negated because SVG's origin is top-left with Y pointing
/// down, while the kernel frame is right-handed with Y up.
#[must_use]
pub fn project_to_drawing(point: &Point3, unit_scale: f64) -> Point2 {
    Point2::new(point.x * unit_scale, -point.y * unit_scale)
}

/// Walks the outer loop of a face into a closed 2D polygon.
///
/// Co-edges are visited once each in the loop's cyclic order. A point closer
/// than the merge tolerance to the previously accepted point is dropped, and
/// so is a final point that closes back onto the first.
pub struct WalkOuterLoop<F> {
    face: F,
    unit_scale: f64,
    tolerance_sq: f64,
}

impl<F: Copy> WalkOuterLoop<F> {
    /// Creates a new `WalkOuterLoop` query.
    ///
    /// `tolerance_sq` is the squared merge distance, in drawing units.
    #[must_use]
    pub fn new(face: F, unit_scale: f64, tolerance_sq: f64) -> Self {
        Self {
            face,
            unit_scale,
            tolerance_sq,
        }
    }

    /// Executes the walk.
    ///
    /// Returns `None` if the face has no outer loop or the loop has no
    /// co-edges.
    ///
    /// # Errors
    ///
    /// Returns an error if the source cannot resolve the face or its loops.
    pub fn execute<S: BrepSource<Face = F>>(&self, source: &S) -> Result<Option<Polygon>> {
        let mut outer = None;
        for lp in source.face_loops(self.face)? {
            if source.loop_is_outer(lp)? {
                outer = Some(lp);
                break;
            }
        }
        let Some(outer) = outer else {
            return Ok(None);
        };

        let coedges = source.loop_coedges(outer)?;
        if coedges.is_empty() {
            return Ok(None);
        }

        let mut points: Vec<Point2> = Vec::with_capacity(coedges.len());
        for record in &coedges {
            let (from, to) = record.oriented();
            if points.is_empty() {
                points.push(project_to_drawing(&from, self.unit_scale));
            }
            let end = project_to_drawing(&to, self.unit_scale);
            if let Some(last) = points.last() {
                if !points_close(last, &end, self.tolerance_sq) {
                    points.push(end);
                }
            }
        }

        if points.len() > 1 && points_close(&points[0], &points[points.len() - 1], self.tolerance_sq)
        {
            points.pop();
        }

        Ok(Some(Polygon::closed(points)))
    }
}
