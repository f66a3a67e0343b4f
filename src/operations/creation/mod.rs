mod make_face;
mod make_loop;
mod make_prism;
mod make_sheet;

pub use make_face::MakeFace;
pub use make_loop::MakeLoop;
pub use make_prism::MakePrism;
pub use make_sheet::MakeSheet;

use crate::topology::OccurrenceId;

/// Component a newly created body is attached to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BodyOwner {
    /// The root component.
    #[default]
    Root,
    /// A sub-component occurrence.
    Occurrence(OccurrenceId),
}
