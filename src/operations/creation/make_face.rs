use crate::error::{OperationError, Result, TopologyError};
use crate::source::BrepSource;
use crate::topology::{FaceData, FaceId, FaceSurface, LoopId, TopologyStore};

/// Maximum distance of a loop vertex from the plane of a planar face.
const PLANARITY_TOLERANCE: f64 = 1e-7;

/// Creates a face from a surface and its boundary loops.
pub struct MakeFace {
    surface: FaceSurface,
    loops: Vec<LoopId>,
}

impl MakeFace {
    /// Creates a new `MakeFace` operation.
    #[must_use]
    pub fn new(surface: FaceSurface, loops: Vec<LoopId>) -> Self {
        Self { surface, loops }
    }

    /// Executes the operation, creating the face in the topology store.
    ///
    /// A face without an outer loop is accepted; exporters skip it.
    ///
    /// # Errors
    ///
    /// Returns an error if a loop does not exist, more than one loop is
    /// flagged outer, or a loop vertex lies off a planar surface.
    pub fn execute(&self, store: &mut TopologyStore) -> Result<FaceId> {
        let mut outer_count = 0;
        for &lp in &self.loops {
            if store.loop_is_outer(lp)? {
                outer_count += 1;
            }
            if let FaceSurface::Plane(plane) = &self.surface {
                for record in store.loop_coedges(lp)? {
                    for p in [record.start, record.end] {
                        let distance = plane.signed_distance(&p).abs();
                        if distance > PLANARITY_TOLERANCE {
                            return Err(OperationError::InvalidInput(format!(
                                "loop vertex ({}, {}, {}) is {distance} off the face plane",
                                p.x, p.y, p.z
                            ))
                            .into());
                        }
                    }
                }
            }
        }
        if outer_count > 1 {
            return Err(TopologyError::InvalidTopology(format!(
                "face has {outer_count} outer loops"
            ))
            .into());
        }

        Ok(store.add_face(FaceData {
            surface: self.surface.clone(),
            loops: self.loops.clone(),
        }))
    }
}
