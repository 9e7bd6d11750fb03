use crate::fitting::BvKind;

/// Errors reported when a bounding volume cannot be fitted.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum FitError {
    /// A bounding volume needs at least one point.
    #[error("Cannot fit a bounding volume around an empty point set.")]
    EmptyPointSet,
    /// A primitive index does not refer to a primitive of the mesh.
    #[error("Primitive index {index} is out of bounds (the mesh has {len} primitives).")]
    PrimitiveOutOfBounds {
        /// The faulty primitive index.
        index: u32,
        /// The number of primitives of the mesh.
        len: usize,
    },
    /// A triangle refers to a vertex that does not exist.
    #[error("Vertex index {index} is out of bounds (the mesh has {len} vertices).")]
    VertexOutOfBounds {
        /// The faulty vertex index.
        index: u32,
        /// The number of vertices of the mesh.
        len: usize,
    },
    /// The previous-frame vertex buffer does not match the current one.
    #[error("The previous-frame vertex buffer has {found} vertices instead of {expected}.")]
    PrevVerticesLenMismatch {
        /// The number of vertices of the current frame.
        expected: usize,
        /// The number of vertices of the previous frame.
        found: usize,
    },
    /// Two bounding volumes of different families cannot be merged.
    #[error("Cannot merge a {found:?} bounding volume into a {expected:?} bounding volume.")]
    KindMismatch {
        /// The family of the volume merged into.
        expected: BvKind,
        /// The family of the other volume.
        found: BvKind,
    },
}
