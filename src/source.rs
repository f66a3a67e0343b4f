//! Read-only view of a B-rep design.
//!
//! [`BrepSource`] is the only thing the exporter knows about a geometry
//! kernel. [`TopologyStore`](crate::topology::TopologyStore) implements it for
//! in-memory designs; bindings to a live CAD kernel implement it over their
//! own handles.

use crate::error::Result;
use crate::geometry::SurfaceType;
use crate::math::{Point3, Vector3};

/// One co-edge of a loop, resolved to the geometry the walker needs.
///
/// `start` and `end` are the intrinsic endpoints of the referenced edge; the
/// `opposed` flag tells whether the loop runs the edge backwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoEdgeRecord {
    /// Position of the edge's start vertex.
    pub start: Point3,
    /// Position of the edge's end vertex.
    pub end: Point3,
    /// `true` if the loop traverses the edge from `end` to `start`.
    pub opposed: bool,
}

impl CoEdgeRecord {
    /// Returns the `(from, to)` endpoints in loop traversal order.
    #[must_use]
    pub fn oriented(&self) -> (Point3, Point3) {
        if self.opposed {
            (self.end, self.start)
        } else {
            (self.start, self.end)
        }
    }
}

/// Read-only queries over a B-rep design.
///
/// Handles are opaque and cheap to copy. Every per-entity query may fail if
/// the handle does not resolve; callers decide whether that is fatal.
pub trait BrepSource {
    /// Handle to a solid body.
    type Body: Copy;
    /// Handle to a face of a body.
    type Face: Copy;
    /// Handle to a boundary loop of a face.
    type Loop: Copy;

    /// Bodies owned directly by the root component, in kernel order.
    fn root_bodies(&self) -> Vec<Self::Body>;

    /// Bodies of every sub-component occurrence, one list per occurrence in
    /// kernel order.
    ///
    /// # Errors
    ///
    /// Returns an error if an occurrence cannot be resolved.
    fn occurrence_bodies(&self) -> Result<Vec<Vec<Self::Body>>>;

    /// Whether the body is currently shown.
    ///
    /// # Errors
    ///
    /// Returns an error if the handle does not resolve.
    fn body_is_visible(&self, body: Self::Body) -> Result<bool>;

    /// The body's display name.
    ///
    /// # Errors
    ///
    /// Returns an error if the handle does not resolve.
    fn body_name(&self, body: Self::Body) -> Result<String>;

    /// The body's faces in kernel enumeration order.
    ///
    /// # Errors
    ///
    /// Returns an error if the handle does not resolve.
    fn body_faces(&self, body: Self::Body) -> Result<Vec<Self::Face>>;

    /// Kind of surface supporting the face.
    ///
    /// # Errors
    ///
    /// Returns an error if the handle does not resolve.
    fn face_surface_type(&self, face: Self::Face) -> Result<SurfaceType>;

    /// Whether the face is planar with a normal parallel (or anti-parallel)
    /// to `axis`, using the kernel's own tolerance. Always `false` for
    /// non-planar faces.
    ///
    /// # Errors
    ///
    /// Returns an error if the handle does not resolve.
    fn face_normal_is_parallel(&self, face: Self::Face, axis: &Vector3) -> Result<bool>;

    /// Area of the face, in kernel units squared.
    ///
    /// # Errors
    ///
    /// Returns an error if the handle does not resolve.
    fn face_area(&self, face: Self::Face) -> Result<f64>;

    /// The face's boundary loops.
    ///
    /// # Errors
    ///
    /// Returns an error if the handle does not resolve.
    fn face_loops(&self, face: Self::Face) -> Result<Vec<Self::Loop>>;

    /// Whether the loop is the face's outer boundary.
    ///
    /// # Errors
    ///
    /// Returns an error if the handle does not resolve.
    fn loop_is_outer(&self, lp: Self::Loop) -> Result<bool>;

    /// The loop's co-edges in cyclic order, starting at the kernel's first
    /// co-edge.
    ///
    /// # Errors
    ///
    /// Returns an error if the handle or any referenced edge or vertex does
    /// not resolve.
    fn loop_coedges(&self, lp: Self::Loop) -> Result<Vec<CoEdgeRecord>>;
}
