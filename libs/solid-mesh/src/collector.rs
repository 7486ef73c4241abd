//! # Solid Mesh Collector
//!
//! Walks an element's geometry objects, keeps the solids that have faces and
//! asks the kernel to triangulate each of their faces.

use tracing::debug;

use crate::error::ExportResult;
use crate::geometry::FaceMesh;
use crate::kernel::{GeometryKernel, ObjectKind};

/// A triangulated face, scoped to the solid it belongs to.
#[derive(Debug, Clone)]
pub struct CollectedFace<F> {
    /// Kernel face handle, needed again for smooth normals.
    pub face: F,
    /// Position of the face within its solid, in kernel order.
    pub index: usize,
    /// The face's triangulation.
    pub mesh: FaceMesh,
}

/// All triangulated faces of one solid.
#[derive(Debug, Clone)]
pub struct CollectedSolid<F> {
    pub faces: Vec<CollectedFace<F>>,
    /// Faces whose triangulation was empty.
    pub skipped_faces: usize,
}

impl<F> CollectedSolid<F> {
    /// Returns the total number of triangles over all faces.
    pub fn triangle_count(&self) -> usize {
        self.faces.iter().map(|f| f.mesh.triangle_count()).sum()
    }
}

/// Solids picked out of an element's geometry.
#[derive(Debug)]
pub struct SolidSelection<'o, O> {
    /// Solid objects with at least one face, in input order.
    pub solids: Vec<&'o O>,
    /// Objects ignored because they are not solids or have no faces.
    pub skipped_objects: usize,
}

/// Collects per-face triangulations through a [`GeometryKernel`].
pub struct SolidMeshCollector<'k, K> {
    kernel: &'k K,
}

impl<'k, K: GeometryKernel> SolidMeshCollector<'k, K> {
    /// Creates a collector backed by `kernel`.
    pub fn new(kernel: &'k K) -> Self {
        Self { kernel }
    }

    /// Keeps the solids with at least one face; every other object is skipped.
    pub fn select_solids<'o>(&self, objects: &'o [K::Object]) -> SolidSelection<'o, K::Object> {
        let mut solids = Vec::new();
        let mut skipped_objects = 0;

        for (i, object) in objects.iter().enumerate() {
            match self.kernel.kind(object) {
                ObjectKind::Solid if !self.kernel.faces(object).is_empty() => solids.push(object),
                ObjectKind::Solid => {
                    debug!(object = i, "skipping solid without faces");
                    skipped_objects += 1;
                }
                kind => {
                    debug!(object = i, ?kind, "skipping non-solid geometry");
                    skipped_objects += 1;
                }
            }
        }

        SolidSelection {
            solids,
            skipped_objects,
        }
    }

    /// Triangulates every face of `solid`.
    ///
    /// Faces with no triangles are skipped. Triangulations are validated so
    /// later stages can index vertices directly.
    pub fn collect(&self, solid: &K::Object) -> ExportResult<CollectedSolid<K::Face>> {
        let mut faces = Vec::new();
        let mut skipped_faces = 0;

        for (index, face) in self.kernel.faces(solid).into_iter().enumerate() {
            let mesh = self.kernel.triangulate(&face)?;
            if mesh.is_empty() {
                debug!(face = index, "skipping face with empty triangulation");
                skipped_faces += 1;
                continue;
            }
            mesh.validate(index)?;
            faces.push(CollectedFace { face, index, mesh });
        }

        Ok(CollectedSolid {
            faces,
            skipped_faces,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ExportError;
    use crate::fixture::{cube, FixtureFace, FixtureKernel, FixtureObject};
    use glam::DVec3;

    #[test]
    fn test_select_solids_skips_other_kinds() {
        let objects = vec![
            FixtureObject::Curve,
            cube(1.0),
            FixtureObject::Point,
            FixtureObject::Instance,
            FixtureObject::Solid(vec![]),
            cube(2.0),
        ];
        let kernel = FixtureKernel;
        let selection = SolidMeshCollector::new(&kernel).select_solids(&objects);

        assert_eq!(selection.solids.len(), 2);
        assert_eq!(selection.skipped_objects, 4);
        assert!(std::ptr::eq(selection.solids[0], &objects[1]));
        assert!(std::ptr::eq(selection.solids[1], &objects[5]));
    }

    #[test]
    fn test_collect_cube_faces() {
        let kernel = FixtureKernel;
        let solid = cube(1.0);
        let collected = SolidMeshCollector::new(&kernel).collect(&solid).unwrap();

        assert_eq!(collected.faces.len(), 6);
        assert_eq!(collected.triangle_count(), 12);
        assert_eq!(collected.skipped_faces, 0);
        let indices: Vec<usize> = collected.faces.iter().map(|f| f.index).collect();
        assert_eq!(indices, vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_collect_skips_empty_faces() {
        let kernel = FixtureKernel;
        let solid = FixtureObject::Solid(vec![
            FixtureFace::planar(vec![DVec3::ZERO, DVec3::X], vec![]),
            FixtureFace::planar(vec![DVec3::ZERO, DVec3::X, DVec3::Y], vec![[0, 1, 2]]),
        ]);
        let collected = SolidMeshCollector::new(&kernel).collect(&solid).unwrap();

        assert_eq!(collected.faces.len(), 1);
        assert_eq!(collected.faces[0].index, 1);
        assert_eq!(collected.skipped_faces, 1);
    }

    #[test]
    fn test_collect_propagates_kernel_failure() {
        let kernel = FixtureKernel;
        let solid = FixtureObject::Solid(vec![FixtureFace::failing()]);
        let err = SolidMeshCollector::new(&kernel).collect(&solid).unwrap_err();
        assert!(matches!(err, ExportError::Kernel(_)));
    }

    #[test]
    fn test_collect_rejects_bad_indices() {
        let kernel = FixtureKernel;
        let solid = FixtureObject::Solid(vec![FixtureFace::planar(
            vec![DVec3::ZERO, DVec3::X, DVec3::Y],
            vec![[0, 1, 3]],
        )]);
        let err = SolidMeshCollector::new(&kernel).collect(&solid).unwrap_err();
        assert!(matches!(err, ExportError::InvalidTopology { face: 0, .. }));
    }
}
