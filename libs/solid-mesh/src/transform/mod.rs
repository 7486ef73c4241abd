//! # Coordinate Transform
//!
//! Maps source-space positions (Z-up, decimal feet) into the emitted mesh
//! space (Y-up, unit cube).
//!
//! ## Pipeline
//!
//! ```text
//! p_src → (p_src - midpoint) → × FEET_TO_MILLIMETERS → (x,y,z)→(y,z,x) → × scale
//! ```
//!
//! The last step runs once per solid after its buffers are populated.
//! Normals go through the axis remap only.

use config::constants::{FEET_TO_MILLIMETERS, MIN_SPANNED_AXES, NORMALIZED_EXTENT};
use glam::DVec3;

use crate::error::{ExportError, ExportResult};
use crate::geometry::BoundingBox;

/// Permutes a Z-up vector into the Y-up convention: `(x, y, z) → (y, z, x)`.
///
/// # Example
///
/// ```rust
/// use glam::DVec3;
/// use solid_mesh::transform::remap_axes;
///
/// assert_eq!(remap_axes(DVec3::new(1.0, 2.0, 3.0)), DVec3::new(2.0, 3.0, 1.0));
/// assert_eq!(remap_axes(DVec3::Z), DVec3::Y);
/// ```
#[inline]
pub fn remap_axes(v: DVec3) -> DVec3 {
    DVec3::new(v.y, v.z, v.x)
}

/// Inverse of [`remap_axes`].
#[inline]
pub fn unmap_axes(v: DVec3) -> DVec3 {
    DVec3::new(v.z, v.x, v.y)
}

/// Transform derived from one element's bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordinateTransform {
    midpoint: DVec3,
    scale: f64,
}

impl CoordinateTransform {
    /// Builds the transform for `bbox`.
    ///
    /// `scale = NORMALIZED_EXTENT / max_extent_mm`. A box that spans fewer
    /// than [`MIN_SPANNED_AXES`] axes is rejected with
    /// [`ExportError::DegenerateBoundingBox`]; this also covers the
    /// zero-extent case so the scale never divides by zero.
    pub fn from_bounding_box(bbox: &BoundingBox) -> ExportResult<Self> {
        let degenerate = || ExportError::DegenerateBoundingBox {
            min: bbox.min,
            max: bbox.max,
        };

        if !bbox.min.is_finite() || !bbox.max.is_finite() {
            return Err(degenerate());
        }
        if bbox.spanned_axes() < MIN_SPANNED_AXES {
            return Err(degenerate());
        }

        let max_extent_mm = bbox.max_extent() * FEET_TO_MILLIMETERS;
        if max_extent_mm <= 0.0 {
            return Err(degenerate());
        }

        Ok(Self {
            midpoint: bbox.midpoint(),
            scale: NORMALIZED_EXTENT / max_extent_mm,
        })
    }

    /// Translation origin in source units.
    #[inline]
    pub fn midpoint(&self) -> DVec3 {
        self.midpoint
    }

    /// Unit-cube normalization factor applied to millimeter positions.
    #[inline]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Centers, converts to millimeters and remaps a source point.
    ///
    /// The normalization scale is not applied; see [`Self::scale_positions`].
    #[inline]
    pub fn to_millimeter_space(&self, point: DVec3) -> DVec3 {
        remap_axes((point - self.midpoint) * FEET_TO_MILLIMETERS)
    }

    /// Applies the normalization scale to a flat position buffer in place.
    pub fn scale_positions(&self, positions: &mut [f64]) {
        for value in positions {
            *value *= self.scale;
        }
    }

    /// Full forward transform of one point, including the scale.
    #[inline]
    pub fn apply(&self, point: DVec3) -> DVec3 {
        self.to_millimeter_space(point) * self.scale
    }

    /// Maps an emitted position back to source units.
    ///
    /// # Example
    ///
    /// ```rust
    /// use glam::DVec3;
    /// use solid_mesh::{BoundingBox, transform::CoordinateTransform};
    ///
    /// let bbox = BoundingBox::new(DVec3::ZERO, DVec3::new(4.0, 2.0, 1.0));
    /// let transform = CoordinateTransform::from_bounding_box(&bbox).unwrap();
    /// let p = DVec3::new(3.0, 0.5, 1.0);
    /// assert!((transform.inverse_position(transform.apply(p)) - p).length() < 1e-12);
    /// ```
    pub fn inverse_position(&self, emitted: DVec3) -> DVec3 {
        unmap_axes(emitted / self.scale) / FEET_TO_MILLIMETERS + self.midpoint
    }
}
