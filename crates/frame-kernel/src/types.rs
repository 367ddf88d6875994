use serde::{Deserialize, Serialize};

/// Opaque handle to a solid in the geometry kernel.
/// NEVER persisted. Valid only for the kernel instance that issued it.
#[derive(Debug, Clone)]
pub struct SolidHandle(pub(crate) u64);

impl SolidHandle {
    pub(crate) fn id(&self) -> u64 {
        self.0
    }
}

/// Errors from kernel operations.
#[derive(Debug, Clone, thiserror::Error)]
pub enum KernelError {
    /// A primitive factory was asked for a geometrically impossible profile:
    /// a non-positive dimension, a flange thicker than half the section
    /// height, or a web thicker than half the section width.
    #[error("invalid cross-section: {reason}")]
    InvalidCrossSection { reason: String },

    /// A boolean fuse could not produce a valid manifold solid.
    #[error("fuse produced no manifold solid: {reason}")]
    NonManifoldResult { reason: String },

    /// A rigid transform was degenerate (near-zero rotation axis).
    #[error("degenerate transform: {reason}")]
    TransformError { reason: String },

    /// A handle did not resolve to a solid in this kernel instance.
    #[error("unknown solid handle {handle}")]
    EntityNotFound { handle: u64 },

    #[error("tessellation failed: {reason}")]
    TessellationFailed { reason: String },
}

/// Tessellated triangle mesh for hand-off to a viewer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderMesh {
    /// Flat array of vertex positions [x0, y0, z0, x1, y1, z1, ...].
    pub vertices: Vec<f32>,
    /// Flat array of vertex normals [nx0, ny0, nz0, nx1, ny1, nz1, ...].
    pub normals: Vec<f32>,
    /// Triangle indices into the vertex array.
    pub indices: Vec<u32>,
    /// Mapping from triangle ranges to B-rep faces.
    pub face_ranges: Vec<FaceRange>,
}

/// Maps a contiguous range of triangle indices to one B-rep face.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FaceRange {
    /// Ordinal of the face within the tessellated solid.
    pub face: u32,
    /// Start index in the indices array (inclusive).
    pub start_index: u32,
    /// End index in the indices array (exclusive).
    pub end_index: u32,
}
