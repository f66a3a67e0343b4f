use crate::geometry::Polygon;

/// Axis-aligned bounds of every polygon in a drawing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneBounds {
    /// Smallest x over all points.
    pub min_x: f64,
    /// Smallest y over all points.
    pub min_y: f64,
    /// Largest x over all points.
    pub max_x: f64,
    /// Largest y over all points.
    pub max_y: f64,
}

impl SceneBounds {
    /// Computes the bounds over the pooled points of all polygons.
    ///
    /// Returns `None` if there are no points at all.
    #[must_use]
    pub fn from_polygons(polygons: &[Polygon]) -> Option<Self> {
        let mut points = polygons.iter().flat_map(|poly| poly.points.iter());
        let first = points.next()?;
        let init = Self {
            min_x: first.x,
            min_y: first.y,
            max_x: first.x,
            max_y: first.y,
        };
        Some(points.fold(init, |b, p| Self {
            min_x: b.min_x.min(p.x),
            min_y: b.min_y.min(p.y),
            max_x: b.max_x.max(p.x),
            max_y: b.max_y.max(p.y),
        }))
    }

    /// Drawing width, clamped to 1.0 when the scene has no horizontal extent.
    #[must_use]
    pub fn width(&self) -> f64 {
        clamp_extent(self.max_x - self.min_x)
    }

    /// Drawing height, clamped to 1.0 when the scene has no vertical extent.
    #[must_use]
    pub fn height(&self) -> f64 {
        clamp_extent(self.max_y - self.min_y)
    }

    /// Translates every polygon so the scene's minimum corner lands on the
    /// origin.
    #[must_use]
    pub fn normalize(&self, polygons: &[Polygon]) -> Vec<Polygon> {
        polygons
            .iter()
            .map(|poly| poly.translated(-self.min_x, -self.min_y))
            .collect()
    }
}

fn clamp_extent(extent: f64) -> f64 {
    if extent <= 0.0 {
        1.0
    } else {
        extent
    }
}
