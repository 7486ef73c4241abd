//! # Export Buffers
//!
//! Flat position / normal / index buffers for one solid.
//!
//! Every triangle corner gets its own slot: nothing is merged, even when two
//! corners coincide, so each triangle keeps its own normals.
//!
//! ## Layout
//!
//! ```text
//! indices   [0, 1, 2, 3, 4, 5, ...]        3 per triangle
//! positions [x, y, z, x, y, z, ...]        3 per index
//! normals   [nx, ny, nz, nx, ny, nz, ...]  3 per index
//! ```

use glam::DVec3;

use crate::error::{ExportError, ExportResult};
use crate::transform::CoordinateTransform;

// =============================================================================
// BUFFER BUILDER
// =============================================================================

/// Accumulates the buffers of one solid before normalization.
///
/// Positions are pushed in millimeter space; [`BufferBuilder::finish`]
/// applies the unit-cube scale.
///
/// # Example
///
/// ```rust
/// use glam::DVec3;
/// use solid_mesh::buffers::BufferBuilder;
///
/// let mut builder = BufferBuilder::new();
/// builder
///     .push_triangle([DVec3::ZERO, DVec3::X, DVec3::Y], [DVec3::Y; 3])
///     .unwrap();
/// assert_eq!(builder.corner_count(), 3);
/// assert_eq!(builder.triangle_count(), 1);
/// ```
#[derive(Debug, Default)]
pub struct BufferBuilder {
    positions: Vec<f64>,
    normals: Vec<f64>,
    indices: Vec<u32>,
}

impl BufferBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a builder with room for `triangle_count` triangles.
    pub fn with_capacity(triangle_count: usize) -> Self {
        let corners = triangle_count * 3;
        Self {
            positions: Vec::with_capacity(corners * 3),
            normals: Vec::with_capacity(corners * 3),
            indices: Vec::with_capacity(corners),
        }
    }

    /// Number of corners emitted so far.
    #[inline]
    pub fn corner_count(&self) -> usize {
        self.indices.len()
    }

    /// Number of triangles emitted so far.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Appends the three corners of a triangle in the given order.
    pub fn push_triangle(&mut self, positions: [DVec3; 3], normals: [DVec3; 3]) -> ExportResult<()> {
        for (position, normal) in positions.into_iter().zip(normals) {
            self.push_corner(position, normal)?;
        }
        Ok(())
    }

    /// Appends one corner; its index is the corner count before the push.
    fn push_corner(&mut self, position: DVec3, normal: DVec3) -> ExportResult<()> {
        let corners = self.indices.len();
        let index = u32::try_from(corners).map_err(|_| ExportError::IndexOverflow { corners })?;

        self.indices.push(index);
        self.positions.extend_from_slice(&position.to_array());
        self.normals.extend_from_slice(&normal.to_array());

        assert_eq!(self.positions.len(), self.normals.len());
        debug_assert_eq!(self.positions.len(), 3 * self.indices.len());
        Ok(())
    }

    /// Applies the normalization scale to the positions and seals the buffers.
    pub fn finish(mut self, transform: &CoordinateTransform) -> ExportBuffers {
        transform.scale_positions(&mut self.positions);
        ExportBuffers {
            positions: self.positions,
            normals: self.normals,
            indices: self.indices,
        }
    }
}

// =============================================================================
// EXPORT BUFFERS
// =============================================================================

/// Finalized buffers of one solid, ready for serialization.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportBuffers {
    positions: Vec<f64>,
    normals: Vec<f64>,
    indices: Vec<u32>,
}

impl ExportBuffers {
    /// Scaled positions, 3 per corner.
    #[inline]
    pub fn positions(&self) -> &[f64] {
        &self.positions
    }

    /// Unit normals, 3 per corner.
    #[inline]
    pub fn normals(&self) -> &[f64] {
        &self.normals
    }

    /// Corner indices, 3 per triangle.
    #[inline]
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// Number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Number of emitted corners.
    #[inline]
    pub fn corner_count(&self) -> usize {
        self.indices.len()
    }

    /// Returns the position of a corner.
    pub fn position(&self, corner: usize) -> DVec3 {
        DVec3::from_slice(&self.positions[corner * 3..corner * 3 + 3])
    }

    /// Returns the normal of a corner.
    pub fn normal(&self, corner: usize) -> DVec3 {
        DVec3::from_slice(&self.normals[corner * 3..corner * 3 + 3])
    }
}
