#![warn(missing_docs)]
//! Geometry primitives for mouse picking (triangles, rays, mesh extraction).
//!
//! Vector and matrix algebra comes from `glam`; this crate only adds the
//! picking-specific pieces on top of it.

mod mesh;
mod ray;
mod triangle;

pub use mesh::{triangles_from_buffers, validate_buffers};
pub use ray::Ray;
pub use triangle::Triangle;

use thiserror::Error;

/// Errors raised by the hardened geometry constructors.
///
/// A ray missing a triangle is not an error; see [`Ray::intersect_triangle`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    /// Three vertices that are collinear or coincident.
    #[error("triangle is degenerate (collinear or coincident vertices)")]
    DegenerateTriangle,
    /// Position buffer length is not a multiple of three.
    #[error("position buffer length {len} is not a multiple of 3")]
    PositionsNotTriples {
        /// Offending buffer length.
        len: usize,
    },
    /// Index buffer length is not a multiple of three.
    #[error("index buffer length {len} is not a multiple of 3")]
    IndicesNotTriples {
        /// Offending buffer length.
        len: usize,
    },
    /// A face references a vertex past the end of the position buffer.
    #[error("index {index} is out of range for {vertex_count} vertices")]
    IndexOutOfRange {
        /// Offending index value.
        index: u32,
        /// Number of vertices in the position buffer.
        vertex_count: usize,
    },
}
