pub mod polygon;
pub mod surface;

pub use polygon::Polygon;
pub use surface::{Plane, SurfaceType};
