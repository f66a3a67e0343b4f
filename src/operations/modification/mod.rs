mod simplify;

pub use simplify::{is_collinear, simplify_polyline};
