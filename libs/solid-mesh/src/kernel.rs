//! # Geometry Kernel
//!
//! The capabilities the export pipeline consumes from the host's geometry
//! kernel. Triangulation, face parameterization and analytic normal
//! evaluation live behind [`GeometryKernel`], so the pipeline can run
//! against synthetic fixtures as well as a real modeling backend.

use glam::{DVec2, DVec3};
use thiserror::Error;

use crate::geometry::FaceMesh;

/// Coarse classification of a geometry object handed over by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObjectKind {
    /// A closed or open solid made of faces.
    Solid,
    /// A curve or edge.
    Curve,
    /// A nested instance of another definition.
    Instance,
    /// A point.
    Point,
    /// Anything else the kernel reports.
    Other,
}

/// Errors reported by kernel capabilities.
#[derive(Debug, Error)]
pub enum KernelError {
    /// Face triangulation failed.
    #[error("Triangulation failed: {message}")]
    Triangulation { message: String },

    /// Projecting a point onto the face's parameter space failed.
    #[error("Projection failed: {message}")]
    Projection { message: String },

    /// Evaluating the face normal at a parameter failed.
    #[error("Normal evaluation failed: {message}")]
    NormalEvaluation { message: String },
}

impl KernelError {
    /// Creates a triangulation error.
    pub fn triangulation(message: impl Into<String>) -> Self {
        Self::Triangulation {
            message: message.into(),
        }
    }

    /// Creates a projection error.
    pub fn projection(message: impl Into<String>) -> Self {
        Self::Projection {
            message: message.into(),
        }
    }

    /// Creates a normal evaluation error.
    pub fn normal_evaluation(message: impl Into<String>) -> Self {
        Self::NormalEvaluation {
            message: message.into(),
        }
    }
}

/// Geometry kernel capabilities used by the exporter.
///
/// All coordinates are in source units (decimal feet).
///
/// # Example
///
/// ```rust,ignore
/// impl GeometryKernel for HostKernel {
///     type Object = HostGeometry;
///     type Face = HostFace;
///
///     fn kind(&self, object: &HostGeometry) -> ObjectKind { /* ... */ }
///     fn faces(&self, object: &HostGeometry) -> Vec<HostFace> { /* ... */ }
///     fn triangulate(&self, face: &HostFace) -> Result<FaceMesh, KernelError> { /* ... */ }
///     fn project(&self, face: &HostFace, point: DVec3) -> Result<DVec2, KernelError> { /* ... */ }
///     fn normal_at(&self, face: &HostFace, uv: DVec2) -> Result<DVec3, KernelError> { /* ... */ }
/// }
/// ```
pub trait GeometryKernel {
    /// Opaque geometry object of an element.
    type Object;
    /// Handle to one face of a solid.
    type Face;

    /// Classifies a geometry object.
    fn kind(&self, object: &Self::Object) -> ObjectKind;

    /// Returns the faces of a solid, in kernel order. Non-solids return none.
    fn faces(&self, object: &Self::Object) -> Vec<Self::Face>;

    /// Triangulates a face into vertices and index triples.
    fn triangulate(&self, face: &Self::Face) -> Result<FaceMesh, KernelError>;

    /// Projects a point on the face into the face's 2D parameter space.
    fn project(&self, face: &Self::Face, point: DVec3) -> Result<DVec2, KernelError>;

    /// Evaluates the face's analytic normal at a parameter.
    fn normal_at(&self, face: &Self::Face, uv: DVec2) -> Result<DVec3, KernelError>;
}
