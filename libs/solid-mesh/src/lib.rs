//! # Solid Mesh
//!
//! Converts the triangulated faces of a solid into normalized,
//! renderer-ready mesh buffers encoded as JSON.
//!
//! ## Architecture
//!
//! ```text
//! GeometryKernel (host)
//!       ↓
//! SolidMeshCollector   per-face triangulations
//!       ↓
//! CoordinateTransform  center → mm → (x,y,z)→(y,z,x)
//! NormalComputer       flat facet / smooth surface normals
//!       ↓
//! BufferBuilder        un-deduplicated position / normal / index buffers
//!       ↓
//! finish (unit-cube scale) → JSON → MeshSink
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use config::settings::ExportConfig;
//! use solid_mesh::{MeshExporter, SelectedElement};
//!
//! let exporter = MeshExporter::new(&kernel, ExportConfig::new(true));
//! let mut meshes: Vec<String> = Vec::new();
//! exporter.export(&[SelectedElement::new(objects, bbox)], &mut meshes)?;
//! ```

pub mod buffers;
pub mod collector;
pub mod error;
pub mod export;
pub mod geometry;
pub mod inspect;
pub mod json;
pub mod kernel;
pub mod normals;
pub mod sink;
pub mod transform;

#[cfg(test)]
mod fixture;

pub use buffers::{BufferBuilder, ExportBuffers};
pub use error::{ExportError, ExportResult};
pub use export::{ExportSummary, MeshExporter, SelectedElement};
pub use geometry::{BoundingBox, FaceMesh};
pub use kernel::{GeometryKernel, KernelError, ObjectKind};
pub use sink::{MeshSink, SinkError, WriterSink};
