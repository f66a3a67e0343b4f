use crate::error::{GeometryError, Result};
use crate::math::{Point3, Vector3, TOLERANCE};

/// An infinite plane in 3D space.
///
/// Defined by an origin point and a unit normal.
#[derive(Debug, Clone)]
pub struct Plane {
    origin: Point3,
    normal: Vector3,
}

impl Plane {
    /// Creates a plane from an origin and a normal vector.
    ///
    /// # Errors
    ///
    /// Returns an error if the normal vector is zero-length.
    pub fn from_normal(origin: Point3, normal: Vector3) -> Result<Self> {
        let len = normal.norm();
        if len < TOLERANCE {
            return Err(GeometryError::ZeroVector.into());
        }
        Ok(Self {
            origin,
            normal: normal / len,
        })
    }

    /// Returns the unit normal of the plane.
    #[must_use]
    pub fn plane_normal(&self) -> &Vector3 {
        &self.normal
    }

    /// Returns `true` if the plane normal is parallel or anti-parallel to `axis`.
    ///
    /// Uses the kernel [`TOLERANCE`] on the sine of the enclosed angle.
    /// A zero-length axis is never parallel.
    #[must_use]
    pub fn is_parallel_to(&self, axis: &Vector3) -> bool {
        let len = axis.norm();
        if len < TOLERANCE {
            return false;
        }
        self.normal.cross(&(axis / len)).norm() < TOLERANCE
    }

    /// Returns the signed distance from `point` to the plane along its normal.
    #[must_use]
    pub fn signed_distance(&self, point: &Point3) -> f64 {
        (point - self.origin).dot(&self.normal)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn xy_plane_parallel_to_z() {
        let plane = Plane::from_normal(Point3::origin(), Vector3::z()).unwrap();
        assert!(plane.is_parallel_to(&Vector3::z()));
    }

    #[test]
    fn flipped_normal_still_parallel() {
        let plane = Plane::from_normal(Point3::new(0.0, 0.0, 3.0), -Vector3::z()).unwrap();
        assert!(plane.is_parallel_to(&Vector3::z()));
    }

    #[test]
    fn side_plane_not_parallel() {
        let plane = Plane::from_normal(Point3::origin(), Vector3::x()).unwrap();
        assert!(!plane.is_parallel_to(&Vector3::z()));
    }

    #[test]
    fn tilted_plane_not_parallel() {
        let plane = Plane::from_normal(Point3::origin(), Vector3::new(0.0, 0.01, 1.0)).unwrap();
        assert!(!plane.is_parallel_to(&Vector3::z()));
    }

    #[test]
    fn zero_normal_rejected() {
        assert!(Plane::from_normal(Point3::origin(), Vector3::zeros()).is_err());
    }

    #[test]
    fn signed_distance_along_normal() {
        let plane = Plane::from_normal(Point3::new(0.0, 0.0, 2.0), Vector3::z()).unwrap();
        assert!((plane.signed_distance(&Point3::new(5.0, -1.0, 3.5)) - 1.5).abs() < 1e-12);
    }
}
