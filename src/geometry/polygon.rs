use crate::math::Point2;

/// An ordered sequence of 2D points, open or closed.
///
/// A closed polygon never repeats its first point at the end; the closing
/// segment is implied.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    /// The ordered vertices.
    pub points: Vec<Point2>,
    /// Whether the last vertex connects back to the first.
    pub closed: bool,
}

impl Polygon {
    /// Creates a closed polygon.
    #[must_use]
    pub fn closed(points: Vec<Point2>) -> Self {
        Self {
            points,
            closed: true,
        }
    }

    /// Creates an open polyline.
    #[must_use]
    pub fn open(points: Vec<Point2>) -> Self {
        Self {
            points,
            closed: false,
        }
    }

    /// Number of vertices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if the polygon has no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns `true` if the polygon cannot be drawn as a shape: fewer than
    /// 3 points when closed, fewer than 2 when open.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        let min = if self.closed { 3 } else { 2 };
        self.points.len() < min
    }

    /// Returns a copy translated by `(dx, dy)`.
    #[must_use]
    pub fn translated(&self, dx: f64, dy: f64) -> Self {
        Self {
            points: self
                .points
                .iter()
                .map(|p| Point2::new(p.x + dx, p.y + dy))
                .collect(),
            closed: self.closed,
        }
    }
}
