//! # Normal Computer
//!
//! Produces the three corner normals of every emitted triangle.
//!
//! ## Modes
//!
//! - [`NormalMode::Flat`]: `normalize(cross(v1 - v0, v2 - v0))` on all three
//!   corners. Collinear corners fail with
//!   [`ExportError::DegenerateTriangle`].
//! - [`NormalMode::Smooth`]: each corner is projected onto the face's
//!   parameter space and the analytic surface normal is evaluated there.
//!
//! Both modes return normals in the remapped (Y-up) axis order.

use config::settings::NormalMode;
use glam::DVec3;

use crate::collector::CollectedFace;
use crate::error::{ExportError, ExportResult};
use crate::kernel::GeometryKernel;
use crate::transform::remap_axes;

/// Unit facet normal of a triangle in source axis order, or `None` when the
/// corners are collinear.
///
/// # Example
///
/// ```rust
/// use glam::DVec3;
/// use solid_mesh::normals::facet_normal;
///
/// let n = facet_normal([DVec3::ZERO, DVec3::X, DVec3::Y]).unwrap();
/// assert_eq!(n, DVec3::Z);
/// assert!(facet_normal([DVec3::ZERO, DVec3::X, DVec3::X * 2.0]).is_none());
/// ```
#[inline]
pub fn facet_normal(corners: [DVec3; 3]) -> Option<DVec3> {
    let [v0, v1, v2] = corners;
    (v1 - v0).cross(v2 - v0).try_normalize()
}

/// Computes corner normals under a fixed [`NormalMode`].
pub struct NormalComputer<'k, K> {
    kernel: &'k K,
    mode: NormalMode,
}

impl<'k, K: GeometryKernel> NormalComputer<'k, K> {
    /// Creates a computer; `kernel` is only consulted in smooth mode.
    pub fn new(kernel: &'k K, mode: NormalMode) -> Self {
        Self { kernel, mode }
    }

    /// Returns the active mode.
    pub fn mode(&self) -> NormalMode {
        self.mode
    }

    /// Returns the remapped normals for the corners of one triangle.
    ///
    /// `corners` are the triangle's source-space positions and `triangle` its
    /// index within `face`.
    pub fn corner_normals(
        &self,
        face: &CollectedFace<K::Face>,
        triangle: usize,
        corners: [DVec3; 3],
    ) -> ExportResult<[DVec3; 3]> {
        match self.mode {
            NormalMode::Flat => {
                let normal = facet_normal(corners).ok_or(ExportError::DegenerateTriangle {
                    face: face.index,
                    triangle,
                })?;
                Ok([remap_axes(normal); 3])
            }
            NormalMode::Smooth => {
                let mut normals = [DVec3::ZERO; 3];
                for (corner, (slot, point)) in normals.iter_mut().zip(corners).enumerate() {
                    *slot = remap_axes(self.surface_normal(face, triangle, corner, point)?);
                }
                Ok(normals)
            }
        }
    }

    /// Samples the face's analytic normal at `point`.
    fn surface_normal(
        &self,
        face: &CollectedFace<K::Face>,
        triangle: usize,
        corner: usize,
        point: DVec3,
    ) -> ExportResult<DVec3> {
        let uv = self.kernel.project(&face.face, point)?;
        let normal = self.kernel.normal_at(&face.face, uv)?;
        normal.try_normalize().ok_or(ExportError::DegenerateNormal {
            face: face.index,
            triangle,
            corner,
        })
    }
}
