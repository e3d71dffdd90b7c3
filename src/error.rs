//! Error types for traipse.
//!
//! This module defines all error types used throughout the library.

use thiserror::Error;

/// Result type alias using [`MeshError`].
pub type Result<T> = std::result::Result<T, MeshError>;

/// Errors that can occur during mesh distance queries.
#[derive(Error, Debug)]
pub enum MeshError {
    /// The mesh has no vertices.
    #[error("mesh has no vertices")]
    EmptyMesh,

    /// A face references an invalid vertex index.
    #[error("face {face} references invalid vertex index {vertex}")]
    InvalidVertexIndex {
        /// The face index.
        face: usize,
        /// The invalid vertex index.
        vertex: usize,
    },

    /// A face has duplicate vertex indices (degenerate triangle).
    #[error("face {face} is degenerate (has duplicate vertices)")]
    DegenerateFace {
        /// The face index.
        face: usize,
    },

    /// The source vertex index is outside the mesh's vertex range.
    #[error("source vertex {source_vertex} is out of range for {num_vertices} vertices")]
    SourceOutOfRange {
        /// The offending source index.
        source_vertex: usize,
        /// Number of vertices in the mesh.
        num_vertices: usize,
    },

    /// Adjacency lists and vertex positions disagree on the vertex count.
    #[error("adjacency has {adjacency} entries but {num_vertices} vertex positions were given")]
    LengthMismatch {
        /// Number of adjacency entries.
        adjacency: usize,
        /// Number of vertex positions.
        num_vertices: usize,
    },

    /// The priority queue was dequeued while empty.
    #[error("priority queue dequeued while empty")]
    EmptyQueue,
}
