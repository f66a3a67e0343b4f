use super::{Point2, Point3, Vector3, TOLERANCE};

/// Signed area of a 2D polygon by the shoelace formula.
///
/// Counter-clockwise polygons have positive area. Fewer than 3 points give 0.
#[must_use]
pub fn signed_area_2d(points: &[Point2]) -> f64 {
    if points.len() < 3 {
        return 0.0;
    }
    let twice: f64 = points
        .iter()
        .zip(points.iter().cycle().skip(1))
        .map(|(a, b)| a.x * b.y - b.x * a.y)
        .sum();
    twice * 0.5
}

/// Computes the Newell normal of a 3D polygon.
///
/// The result points along the polygon normal (right-hand rule on the vertex
/// order) and its length is twice the polygon area. Returns the zero vector
/// for fewer than 3 points.
#[must_use]
pub fn newell_normal(points: &[Point3]) -> Vector3 {
    let n = points.len();
    let mut normal = Vector3::zeros();
    if n < 3 {
        return normal;
    }
    for i in 0..n {
        let a = points[i].coords;
        let b = points[(i + 1) % n].coords;
        normal += a.cross(&b);
    }
    normal
}

/// Computes the area of a planar 3D polygon using Newell's method.
///
/// The polygon may lie in any plane. Returns 0 for fewer than 3 points.
#[must_use]
pub fn planar_area_3d(points: &[Point3]) -> f64 {
    newell_normal(points).norm() * 0.5
}

/// Rotates a closed polygon to begin at its leftmost vertex, the lowest one
/// among vertices sharing that x within [`TOLERANCE`].
///
/// Used to compare closed polygons independently of where they start.
#[must_use]
pub fn rotate_to_canonical_start(points: &[Point2]) -> Vec<Point2> {
    let start = points.iter().enumerate().fold(0, |best, (i, pt)| {
        let b = &points[best];
        let further_left = pt.x < b.x - TOLERANCE;
        let same_column_lower = (pt.x - b.x).abs() < TOLERANCE && pt.y < b.y;
        if further_left || same_column_lower {
            i
        } else {
            best
        }
    });
    let mut rotated = points.to_vec();
    rotated.rotate_left(start);
    rotated
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    #[test]
    fn signed_area_ccw_square() {
        let pts = vec![p(0.0, 0.0), p(1.0, 0.0), p(1.0, 1.0), p(0.0, 1.0)];
        assert!((signed_area_2d(&pts) - 1.0).abs() < TOLERANCE);
    }

    #[test]
    fn signed_area_cw_square() {
        let pts = vec![p(0.0, 0.0), p(0.0, 1.0), p(1.0, 1.0), p(1.0, 0.0)];
        assert!((signed_area_2d(&pts) + 1.0).abs() < TOLERANCE);
    }

    #[test]
    fn signed_area_degenerate() {
        assert!(signed_area_2d(&[p(0.0, 0.0)]).abs() < TOLERANCE);
        assert!(signed_area_2d(&[]).abs() < TOLERANCE);
    }

    #[test]
    fn planar_area_xy_rectangle() {
        let pts = vec![
            Point3::new(0.0, 0.0, 2.0),
            Point3::new(4.0, 0.0, 2.0),
            Point3::new(4.0, 3.0, 2.0),
            Point3::new(0.0, 3.0, 2.0),
        ];
        assert!((planar_area_3d(&pts) - 12.0).abs() < 1e-9);
    }

    #[test]
    fn planar_area_vertical_rectangle() {
        // 2 x 5 rectangle in the XZ plane; orientation does not matter.
        let pts = vec![
            Point3::new(0.0, 1.0, 0.0),
            Point3::new(0.0, 1.0, 5.0),
            Point3::new(2.0, 1.0, 5.0),
            Point3::new(2.0, 1.0, 0.0),
        ];
        assert!((planar_area_3d(&pts) - 10.0).abs() < 1e-9);
    }

    #[test]
    fn newell_normal_follows_winding() {
        let ccw = vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
        ];
        let n = newell_normal(&ccw);
        assert!(n.z > 0.0);
        let cw: Vec<Point3> = ccw.iter().rev().copied().collect();
        assert!(newell_normal(&cw).z < 0.0);
    }

    #[test]
    fn canonical_start_rotation() {
        let pts = vec![p(1.0, 0.0), p(1.0, 1.0), p(0.0, 1.0), p(0.0, 0.0)];
        let rotated = rotate_to_canonical_start(&pts);
        assert_eq!(rotated[0], p(0.0, 0.0));
        assert_eq!(rotated[1], p(1.0, 0.0));
    }

    #[test]
    fn canonical_start_already_leftmost() {
        let pts = vec![p(0.0, 0.0), p(1.0, 0.0), p(1.0, 1.0)];
        assert_eq!(rotate_to_canonical_start(&pts), pts);
    }
}
