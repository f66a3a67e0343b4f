mod area;
mod bounding_box;
mod outer_loop;
mod select_face;

pub use area::FaceArea;
pub use bounding_box::SceneBounds;
pub use outer_loop::{project_to_drawing, WalkOuterLoop};
pub use select_face::{is_projectable_face, projection_axis, SelectFace};
