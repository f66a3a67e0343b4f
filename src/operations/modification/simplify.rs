use crate::math::Point2;

/// Returns `true` if `b` lies on the line through `a` and `c`, within an
/// angular tolerance.
///
/// The test compares `|ab × bc|` against `tolerance * |ab| * |bc|`, i.e. the
/// sine of the turning angle at `b`, so it does not depend on edge length.
/// A zero-length `ab` or `bc` counts as collinear.
#[must_use]
pub fn is_collinear(a: &Point2, b: &Point2, c: &Point2, tolerance: f64) -> bool {
    let ab = b - a;
    let bc = c - b;
    let len_ab = ab.norm();
    let len_bc = bc.norm();
    if len_ab == 0.0 || len_bc == 0.0 {
        return true;
    }
    let cross = ab.x * bc.y - ab.y * bc.x;
    cross.abs() <= tolerance * len_ab * len_bc
}

/// Removes points that are collinear with their neighbours.
///
/// Inputs with fewer than 3 points are returned unchanged.
///
/// An open polyline is scanned once from left to right: its end points are
/// always kept and each interior point is tested against the last kept point
/// and its successor.
///
/// A closed polyline is reduced in full passes until a pass removes nothing
/// or fewer than 3 points remain. Every point of a pass is tested against its
/// neighbours as they stood at the start of that pass. The result may have
/// fewer than 3 points, in which case the polygon is degenerate.
#[must_use]
pub fn simplify_polyline(points: &[Point2], closed: bool, tolerance: f64) -> Vec<Point2> {
    if points.len() < 3 {
        return points.to_vec();
    }
    if closed {
        simplify_closed(points, tolerance)
    } else {
        simplify_open(points, tolerance)
    }
}

fn simplify_open(points: &[Point2], tolerance: f64) -> Vec<Point2> {
    let n = points.len();
    let mut result = Vec::with_capacity(n);
    result.push(points[0]);
    for i in 1..n - 1 {
        let prev = result[result.len() - 1];
        if !is_collinear(&prev, &points[i], &points[i + 1], tolerance) {
            result.push(points[i]);
        }
    }
    result.push(points[n - 1]);
    result
}

fn simplify_closed(points: &[Point2], tolerance: f64) -> Vec<Point2> {
    let mut current = points.to_vec();
    loop {
        let n = current.len();
        if n < 3 {
            break;
        }
        let kept: Vec<Point2> = (0..n)
            .filter(|&i| {
                let prev = &current[(i + n - 1) % n];
                let next = &current[(i + 1) % n];
                !is_collinear(prev, &current[i], next, tolerance)
            })
            .map(|i| current[i])
            .collect();
        if kept.len() == n {
            break;
        }
        current = kept;
    }
    current
}
