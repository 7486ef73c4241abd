//! # Mesh Exporter
//!
//! Runs the full pipeline for one selected element.
//!
//! ## Flow
//!
//! ```text
//! selection ─┬─ exactly one element? ── no ──→ InvalidSelection
//!            └─ bounding box → CoordinateTransform
//!                 └─ for each solid:
//!                      collect faces → normals + positions → BufferBuilder
//!                      → finish (scale) → inspector → JSON → sink
//! ```
//!
//! Solids are processed one at a time; each gets fresh buffers that are
//! dropped once its JSON has been delivered. The first error stops the
//! export and nothing of the failing solid reaches the sink.

use config::settings::ExportConfig;
use tracing::{debug, info};

use crate::buffers::{BufferBuilder, ExportBuffers};
use crate::collector::{CollectedSolid, SolidMeshCollector};
use crate::error::{ExportError, ExportResult};
use crate::geometry::BoundingBox;
use crate::inspect::BufferInspector;
use crate::json::to_json;
use crate::kernel::GeometryKernel;
use crate::normals::NormalComputer;
use crate::sink::MeshSink;
use crate::transform::CoordinateTransform;

/// One element picked by the host, with its geometry and bounding box.
#[derive(Debug, Clone)]
pub struct SelectedElement<O> {
    /// Geometry objects of the element, in kernel order.
    pub objects: Vec<O>,
    /// Axis-aligned bounds in source units.
    pub bounding_box: BoundingBox,
}

impl<O> SelectedElement<O> {
    /// Creates a selected element.
    pub fn new(objects: Vec<O>, bounding_box: BoundingBox) -> Self {
        Self {
            objects,
            bounding_box,
        }
    }
}

/// Counts reported after a successful export.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExportSummary {
    /// Solids delivered to the sink.
    pub solids: usize,
    /// Triangles over all delivered solids.
    pub triangles: usize,
    /// Geometry objects ignored because they are not solids with faces.
    pub skipped_objects: usize,
    /// Faces whose triangulation was empty.
    pub skipped_faces: usize,
}

/// Exports the solids of a selected element as mesh JSON.
///
/// # Example
///
/// ```rust,ignore
/// let exporter = MeshExporter::new(&kernel, ExportConfig::default())
///     .with_inspector(TracingInspector);
/// let mut meshes: Vec<String> = Vec::new();
/// let summary = exporter.export(&[element], &mut meshes)?;
/// ```
pub struct MeshExporter<'k, K> {
    kernel: &'k K,
    config: ExportConfig,
    inspector: Option<Box<dyn BufferInspector + 'k>>,
}

impl<'k, K: GeometryKernel> MeshExporter<'k, K> {
    /// Creates an exporter without a diagnostic inspector.
    pub fn new(kernel: &'k K, config: ExportConfig) -> Self {
        Self {
            kernel,
            config,
            inspector: None,
        }
    }

    /// Installs a diagnostic inspector.
    pub fn with_inspector(mut self, inspector: impl BufferInspector + 'k) -> Self {
        self.inspector = Some(Box::new(inspector));
        self
    }

    /// Returns the settings in use.
    pub fn config(&self) -> &ExportConfig {
        &self.config
    }

    /// Exports every solid of the single selected element to `sink`.
    ///
    /// # Errors
    ///
    /// - [`ExportError::InvalidSelection`] unless `selection` holds exactly
    ///   one element; nothing is processed.
    /// - [`ExportError::DegenerateBoundingBox`] before any solid is touched.
    /// - Any per-solid error stops the export. Solids already delivered stay
    ///   delivered; the failing one is never sent.
    pub fn export<S>(
        &self,
        selection: &[SelectedElement<K::Object>],
        sink: &mut S,
    ) -> ExportResult<ExportSummary>
    where
        S: MeshSink + ?Sized,
    {
        let [element] = selection else {
            return Err(ExportError::InvalidSelection {
                count: selection.len(),
            });
        };

        let transform = CoordinateTransform::from_bounding_box(&element.bounding_box)?;
        let collector = SolidMeshCollector::new(self.kernel);
        let selected = collector.select_solids(&element.objects);

        let mut summary = ExportSummary {
            skipped_objects: selected.skipped_objects,
            ..ExportSummary::default()
        };

        for (index, solid) in selected.solids.into_iter().enumerate() {
            let collected = collector.collect(solid)?;
            summary.skipped_faces += collected.skipped_faces;

            let buffers = self.build_buffers(&collected, &transform)?;
            if let Some(inspector) = &self.inspector {
                inspector.inspect(index, &buffers);
            }

            let json = to_json(&buffers)?;
            sink.accept(&json)?;

            info!(
                solid = index,
                faces = collected.faces.len(),
                triangles = buffers.triangle_count(),
                "exported solid mesh"
            );
            summary.solids += 1;
            summary.triangles += buffers.triangle_count();
        }

        debug!(?summary, "export finished");
        Ok(summary)
    }

    /// Builds and finalizes the buffers of one collected solid.
    pub fn build_buffers(
        &self,
        solid: &CollectedSolid<K::Face>,
        transform: &CoordinateTransform,
    ) -> ExportResult<ExportBuffers> {
        let normals = NormalComputer::new(self.kernel, self.config.normal_mode());
        let mut builder = BufferBuilder::with_capacity(solid.triangle_count());

        for face in &solid.faces {
            for (t, triangle) in face.mesh.triangles.iter().enumerate() {
                let corners = face.mesh.corners(*triangle);
                let corner_normals = normals.corner_normals(face, t, corners)?;
                let positions = corners.map(|p| transform.to_millimeter_space(p));
                builder.push_triangle(positions, corner_normals)?;
            }
        }

        Ok(builder.finish(transform))
    }
}
