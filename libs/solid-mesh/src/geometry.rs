//! # Geometry Types
//!
//! Bounding boxes and per-face triangulations in source units.

use glam::DVec3;

use crate::error::{ExportError, ExportResult};

/// Axis-aligned bounding box of the selected element, in source units.
///
/// # Example
///
/// ```rust
/// use glam::DVec3;
/// use solid_mesh::BoundingBox;
///
/// let bbox = BoundingBox::new(DVec3::ZERO, DVec3::new(10.0, 4.0, 2.0));
/// assert_eq!(bbox.midpoint(), DVec3::new(5.0, 2.0, 1.0));
/// assert_eq!(bbox.max_extent(), 10.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min: DVec3,
    pub max: DVec3,
}

impl BoundingBox {
    /// Creates a bounding box from its corners.
    pub fn new(min: DVec3, max: DVec3) -> Self {
        Self { min, max }
    }

    /// Returns the box center, `min + 0.5 * (max - min)`.
    #[inline]
    pub fn midpoint(&self) -> DVec3 {
        self.min + 0.5 * (self.max - self.min)
    }

    /// Returns the per-axis extent.
    #[inline]
    pub fn extent(&self) -> DVec3 {
        self.max - self.min
    }

    /// Returns the largest axis extent.
    #[inline]
    pub fn max_extent(&self) -> f64 {
        self.extent().max_element()
    }

    /// Returns the number of axes with a positive extent.
    pub fn spanned_axes(&self) -> usize {
        self.extent().to_array().iter().filter(|e| **e > 0.0).count()
    }

    /// Returns true if the point lies inside or on the box.
    pub fn contains(&self, point: DVec3) -> bool {
        point.cmpge(self.min).all() && point.cmple(self.max).all()
    }
}

/// One face's triangulation: vertices plus index triples into them.
///
/// Vertices are not shared with any other face.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FaceMesh {
    /// Vertex positions in source units.
    pub vertices: Vec<DVec3>,
    /// Triangles as indices into `vertices`.
    pub triangles: Vec<[u32; 3]>,
}

impl FaceMesh {
    /// Creates a face mesh.
    pub fn new(vertices: Vec<DVec3>, triangles: Vec<[u32; 3]>) -> Self {
        Self {
            vertices,
            triangles,
        }
    }

    /// Returns the number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Returns true if the face produced no triangles.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    /// Returns the three corner positions of a triangle.
    ///
    /// Call [`FaceMesh::validate`] first; indices are not range-checked here.
    #[inline]
    pub fn corners(&self, triangle: [u32; 3]) -> [DVec3; 3] {
        triangle.map(|i| self.vertices[i as usize])
    }

    /// Checks that every triangle index addresses an existing vertex.
    ///
    /// `face` is only used to label the error.
    pub fn validate(&self, face: usize) -> ExportResult<()> {
        let vertex_count = self.vertices.len();
        for (t, tri) in self.triangles.iter().enumerate() {
            if let Some(bad) = tri.iter().find(|i| **i as usize >= vertex_count) {
                return Err(ExportError::invalid_topology(
                    face,
                    format!(
                        "triangle {t} references vertex {bad}, face has {vertex_count} vertices"
                    ),
                ));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounding_box_midpoint() {
        let bbox = BoundingBox::new(DVec3::new(-2.0, 0.0, 4.0), DVec3::new(2.0, 6.0, 8.0));
        assert_eq!(bbox.midpoint(), DVec3::new(0.0, 3.0, 6.0));
        assert_eq!(bbox.extent(), DVec3::new(4.0, 6.0, 4.0));
        assert_eq!(bbox.max_extent(), 6.0);
    }

    #[test]
    fn test_bounding_box_spanned_axes() {
        let line = BoundingBox::new(DVec3::ZERO, DVec3::new(10.0, 0.0, 0.0));
        assert_eq!(line.spanned_axes(), 1);

        let sheet = BoundingBox::new(DVec3::ZERO, DVec3::new(10.0, 5.0, 0.0));
        assert_eq!(sheet.spanned_axes(), 2);

        let point = BoundingBox::new(DVec3::ONE, DVec3::ONE);
        assert_eq!(point.spanned_axes(), 0);
    }

    #[test]
    fn test_bounding_box_contains() {
        let bbox = BoundingBox::new(DVec3::ZERO, DVec3::ONE);
        assert!(bbox.contains(DVec3::splat(0.5)));
        assert!(bbox.contains(DVec3::ONE));
        assert!(!bbox.contains(DVec3::new(1.5, 0.5, 0.5)));
    }

    #[test]
    fn test_face_mesh_corners() {
        let mesh = FaceMesh::new(vec![DVec3::ZERO, DVec3::X, DVec3::Y], vec![[0, 1, 2]]);
        assert_eq!(mesh.triangle_count(), 1);
        assert_eq!(mesh.corners([2, 0, 1]), [DVec3::Y, DVec3::ZERO, DVec3::X]);
    }

    #[test]
    fn test_face_mesh_validate_rejects_out_of_range() {
        let mesh = FaceMesh::new(vec![DVec3::ZERO, DVec3::X], vec![[0, 1, 2]]);
        let err = mesh.validate(4).unwrap_err();
        assert!(matches!(err, ExportError::InvalidTopology { face: 4, .. }));
    }

    #[test]
    fn test_face_mesh_validate_accepts_valid() {
        let mesh = FaceMesh::new(vec![DVec3::ZERO, DVec3::X, DVec3::Y], vec![[0, 1, 2]]);
        assert!(mesh.validate(0).is_ok());
        assert!(FaceMesh::default().is_empty());
    }
}
