//! # Buffer Inspection
//!
//! Optional diagnostic hook that sees every finalized buffer set before it
//! is serialized. Nothing is traced unless an inspector is installed.

use tracing::trace;

use crate::buffers::ExportBuffers;

/// Observes the finalized buffers of each exported solid.
///
/// Closures taking `(solid_index, &ExportBuffers)` implement this trait.
pub trait BufferInspector {
    /// Called once per solid, after scaling and before serialization.
    fn inspect(&self, solid: usize, buffers: &ExportBuffers);
}

impl<F> BufferInspector for F
where
    F: Fn(usize, &ExportBuffers),
{
    fn inspect(&self, solid: usize, buffers: &ExportBuffers) {
        self(solid, buffers)
    }
}

/// Traces full buffer contents at `trace` level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingInspector;

impl BufferInspector for TracingInspector {
    fn inspect(&self, solid: usize, buffers: &ExportBuffers) {
        trace!(
            solid,
            triangles = buffers.triangle_count(),
            positions = ?buffers.positions(),
            normals = ?buffers.normals(),
            indices = ?buffers.indices(),
            "finalized solid buffers"
        );
    }
}
