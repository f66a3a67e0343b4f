pub mod body;
pub mod edge;
pub mod face;
pub mod loops;
pub mod occurrence;
mod source;
pub mod vertex;

pub use body::{BodyData, BodyId};
pub use edge::{EdgeData, EdgeId};
pub use face::{FaceData, FaceId, FaceSurface};
pub use loops::{CoEdge, LoopData, LoopId};
pub use occurrence::{OccurrenceData, OccurrenceId};
pub use vertex::{VertexData, VertexId};

use crate::error::TopologyError;
use slotmap::SlotMap;

/// Central arena that owns all topological entities of one design.
///
/// Entities reference each other via typed IDs (generational indices),
/// avoiding self-referential structures. The store also records which
/// bodies belong to the root component and the order of sub-component
/// occurrences, since export order depends on both.
#[derive(Debug, Default)]
pub struct TopologyStore {
    vertices: SlotMap<VertexId, VertexData>,
    edges: SlotMap<EdgeId, EdgeData>,
    loops: SlotMap<LoopId, LoopData>,
    faces: SlotMap<FaceId, FaceData>,
    bodies: SlotMap<BodyId, BodyData>,
    occurrences: SlotMap<OccurrenceId, OccurrenceData>,
    root_bodies: Vec<BodyId>,
    occurrence_order: Vec<OccurrenceId>,
}

impl TopologyStore {
    /// Creates a new, empty topology store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- Vertex operations ---

    /// Inserts a vertex and returns its ID.
    pub fn add_vertex(&mut self, data: VertexData) -> VertexId {
        self.vertices.insert(data)
    }

    /// Returns a reference to the vertex data.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the store.
    pub fn vertex(&self, id: VertexId) -> Result<&VertexData, TopologyError> {
        self.vertices
            .get(id)
            .ok_or_else(|| TopologyError::EntityNotFound("vertex".into()))
    }

    // --- Edge operations ---

    /// Inserts an edge and returns its ID.
    pub fn add_edge(&mut self, data: EdgeData) -> EdgeId {
        self.edges.insert(data)
    }

    /// Returns a reference to the edge data.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the store.
    pub fn edge(&self, id: EdgeId) -> Result<&EdgeData, TopologyError> {
        self.edges
            .get(id)
            .ok_or_else(|| TopologyError::EntityNotFound("edge".into()))
    }

    // --- Loop operations ---

    /// Inserts a loop and returns its ID.
    pub fn add_loop(&mut self, data: LoopData) -> LoopId {
        self.loops.insert(data)
    }

    /// Returns a reference to the loop data.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the store.
    pub fn loop_data(&self, id: LoopId) -> Result<&LoopData, TopologyError> {
        self.loops
            .get(id)
            .ok_or_else(|| TopologyError::EntityNotFound("loop".into()))
    }

    // --- Face operations ---

    /// Inserts a face and returns its ID.
    pub fn add_face(&mut self, data: FaceData) -> FaceId {
        self.faces.insert(data)
    }

    /// Returns a reference to the face data.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the store.
    pub fn face(&self, id: FaceId) -> Result<&FaceData, TopologyError> {
        self.faces
            .get(id)
            .ok_or_else(|| TopologyError::EntityNotFound("face".into()))
    }

    // --- Body operations ---

    /// Inserts a body without attaching it to any component.
    ///
    /// Detached bodies are never exported; see [`attach_to_root`](Self::attach_to_root)
    /// and [`attach_to_occurrence`](Self::attach_to_occurrence).
    pub fn add_body(&mut self, data: BodyData) -> BodyId {
        self.bodies.insert(data)
    }

    /// Returns a reference to the body data.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the store.
    pub fn body(&self, id: BodyId) -> Result<&BodyData, TopologyError> {
        self.bodies
            .get(id)
            .ok_or_else(|| TopologyError::EntityNotFound("body".into()))
    }

    /// Returns a mutable reference to the body data.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the store.
    pub fn body_mut(&mut self, id: BodyId) -> Result<&mut BodyData, TopologyError> {
        self.bodies
            .get_mut(id)
            .ok_or_else(|| TopologyError::EntityNotFound("body".into()))
    }

    // --- Assembly structure ---

    /// Makes `body` a direct child of the root component.
    ///
    /// # Errors
    ///
    /// Returns an error if the body is not in the store.
    pub fn attach_to_root(&mut self, body: BodyId) -> Result<(), TopologyError> {
        self.body(body)?;
        self.root_bodies.push(body);
        Ok(())
    }

    /// Bodies owned directly by the root component, in insertion order.
    #[must_use]
    pub fn root_bodies(&self) -> &[BodyId] {
        &self.root_bodies
    }

    /// Inserts an occurrence after all existing ones and returns its ID.
    pub fn add_occurrence(&mut self, data: OccurrenceData) -> OccurrenceId {
        let id = self.occurrences.insert(data);
        self.occurrence_order.push(id);
        id
    }

    /// Returns a reference to the occurrence data.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the store.
    pub fn occurrence(&self, id: OccurrenceId) -> Result<&OccurrenceData, TopologyError> {
        self.occurrences
            .get(id)
            .ok_or_else(|| TopologyError::EntityNotFound("occurrence".into()))
    }

    /// Appends `body` to the bodies owned by `occurrence`.
    ///
    /// # Errors
    ///
    /// Returns an error if either entity is not in the store.
    pub fn attach_to_occurrence(
        &mut self,
        occurrence: OccurrenceId,
        body: BodyId,
    ) -> Result<(), TopologyError> {
        self.body(body)?;
        let data = self
            .occurrences
            .get_mut(occurrence)
            .ok_or_else(|| TopologyError::EntityNotFound("occurrence".into()))?;
        data.bodies.push(body);
        Ok(())
    }

    /// Occurrences in insertion order.
    #[must_use]
    pub fn occurrence_ids(&self) -> &[OccurrenceId] {
        &self.occurrence_order
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::Point3;

    #[test]
    fn missing_entities_are_errors() {
        let mut other = TopologyStore::new();
        let v = other.add_vertex(VertexData::new(Point3::origin()));
        let store = TopologyStore::new();
        assert!(matches!(
            store.vertex(v),
            Err(TopologyError::EntityNotFound(_))
        ));
    }

    #[test]
    fn attach_keeps_order() {
        let mut store = TopologyStore::new();
        let a = store.add_body(BodyData::new("a", vec![]));
        let b = store.add_body(BodyData::new("b", vec![]));
        store.attach_to_root(b).unwrap();
        store.attach_to_root(a).unwrap();
        assert_eq!(store.root_bodies(), &[b, a]);

        let occ1 = store.add_occurrence(OccurrenceData::new("occ1"));
        let occ2 = store.add_occurrence(OccurrenceData::new("occ2"));
        store.attach_to_occurrence(occ2, a).unwrap();
        assert_eq!(store.occurrence_ids(), &[occ1, occ2]);
        assert_eq!(store.occurrence(occ2).unwrap().bodies, vec![a]);
        assert!(store.occurrence(occ1).unwrap().bodies.is_empty());
    }

    #[test]
    fn attach_unknown_body_fails() {
        let mut other = TopologyStore::new();
        let ghost = other.add_body(BodyData::new("ghost", vec![]));
        let mut store = TopologyStore::new();
        assert!(store.attach_to_root(ghost).is_err());
        assert!(store.root_bodies().is_empty());
    }
}
