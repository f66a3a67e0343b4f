use super::face::FaceId;

slotmap::new_key_type! {
    /// Unique identifier for a body in the topology store.
    pub struct BodyId;
}

/// A solid body as seen by the exporter: a named, possibly hidden set of
/// faces.
#[derive(Debug, Clone)]
pub struct BodyData {
    /// Display name. Not required to be unique.
    pub name: String,
    /// Whether the body is shown in the host document.
    pub visible: bool,
    /// Candidate faces in kernel enumeration order.
    pub faces: Vec<FaceId>,
}

impl BodyData {
    /// Creates a visible body with the given name and faces.
    #[must_use]
    pub fn new(name: impl Into<String>, faces: Vec<FaceId>) -> Self {
        Self {
            name: name.into(),
            visible: true,
            faces,
        }
    }
}
