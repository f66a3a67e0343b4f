use super::Point2;

/// Returns the squared Euclidean distance between two points.
#[must_use]
pub fn distance_sq(a: &Point2, b: &Point2) -> f64 {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    dx * dx + dy * dy
}

/// Returns `true` if `a` and `b` are within the tolerance whose square is
/// `tolerance_sq`.
///
/// The comparison is inclusive, so points exactly one tolerance apart are
/// merged.
#[must_use]
pub fn points_close(a: &Point2, b: &Point2, tolerance_sq: f64) -> bool {
    distance_sq(a, b) <= tolerance_sq
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_sq_basic() {
        let a = Point2::new(0.0, 0.0);
        let b = Point2::new(3.0, 4.0);
        assert!((distance_sq(&a, &b) - 25.0).abs() < 1e-12);
    }

    #[test]
    fn close_within_tolerance() {
        let tol_sq = 1e-3 * 1e-3;
        let a = Point2::new(1.0, 1.0);
        let b = Point2::new(1.0 + 5e-4, 1.0);
        assert!(points_close(&a, &b, tol_sq));
        assert!(points_close(&b, &a, tol_sq));
    }

    #[test]
    fn not_close_beyond_tolerance() {
        let tol_sq = 1e-3 * 1e-3;
        let a = Point2::new(1.0, 1.0);
        let b = Point2::new(1.0, 1.002);
        assert!(!points_close(&a, &b, tol_sq));
    }

    #[test]
    fn identical_points_close_with_zero_tolerance() {
        let a = Point2::new(-2.5, 7.0);
        assert!(points_close(&a, &a, 0.0));
    }
}
