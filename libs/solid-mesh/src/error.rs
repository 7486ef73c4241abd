//! # Export Errors
//!
//! Error types for the solid mesh export pipeline.
//!
//! ## Error Policy
//!
//! - Any error aborts the export of the current solid
//! - No partial buffers are emitted, nothing is retried
//! - Skipped (non-solid) geometry is not an error

use glam::DVec3;
use thiserror::Error;

use crate::kernel::KernelError;
use crate::sink::SinkError;

/// Errors that can occur while exporting a selection.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The selection did not contain exactly one element.
    #[error("Invalid selection: expected exactly 1 element, got {count}")]
    InvalidSelection { count: usize },

    /// The bounding box cannot be normalized.
    #[error("Degenerate bounding box: min {min}, max {max}")]
    DegenerateBoundingBox { min: DVec3, max: DVec3 },

    /// A flat-mode triangle has collinear corners.
    #[error("Degenerate triangle {triangle} on face {face}: corners are collinear")]
    DegenerateTriangle { face: usize, triangle: usize },

    /// The kernel returned a zero or non-finite surface normal.
    #[error("Degenerate surface normal on face {face}, triangle {triangle}, corner {corner}")]
    DegenerateNormal {
        face: usize,
        triangle: usize,
        corner: usize,
    },

    /// A triangulation references vertices that do not exist.
    #[error("Invalid topology on face {face}: {message}")]
    InvalidTopology { face: usize, message: String },

    /// More triangle corners than a `u32` index can address.
    #[error("Index overflow: {corners} corners exceed the u32 index range")]
    IndexOverflow { corners: usize },

    /// A buffer value cannot be written as a JSON number.
    #[error("Non-finite value in {buffer} buffer at {index}")]
    NonFiniteValue { buffer: &'static str, index: usize },

    /// A geometry kernel capability failed.
    #[error("Kernel error: {0}")]
    Kernel(#[from] KernelError),

    /// JSON encoding or decoding failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The output sink rejected the mesh.
    #[error("Sink error: {0}")]
    Sink(#[from] SinkError),
}

impl ExportError {
    /// Creates an invalid topology error.
    pub fn invalid_topology(face: usize, message: impl Into<String>) -> Self {
        Self::InvalidTopology {
            face,
            message: message.into(),
        }
    }
}

/// Result type alias for export operations.
pub type ExportResult<T> = Result<T, ExportError>;
