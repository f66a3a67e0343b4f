use super::body::BodyId;

slotmap::new_key_type! {
    /// Unique identifier for a component occurrence in the topology store.
    pub struct OccurrenceId;
}

/// A placed sub-component of the root assembly and the bodies it owns.
#[derive(Debug, Clone, Default)]
pub struct OccurrenceData {
    /// Occurrence name, for diagnostics.
    pub name: String,
    /// Bodies owned by this occurrence, in kernel order.
    pub bodies: Vec<BodyId>,
}

impl OccurrenceData {
    /// Creates an empty occurrence.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            bodies: Vec::new(),
        }
    }
}
