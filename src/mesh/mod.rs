//! Core mesh data structures.
//!
//! This module provides the indexed triangle mesh representation consumed by
//! the distance algorithms.
//!
//! # Overview
//!
//! The primary type is [`TriangleMesh`], a face-vertex representation: an
//! ordered list of 3D positions plus triangle faces as index triples. The
//! algorithms in this crate only ever read positions and face connectivity,
//! so no richer structure (half-edges, topology tables) is maintained.
//!
//! # Index Types
//!
//! Vertices are identified by the type-safe [`VertexId`] wrapper, generic
//! over the underlying integer type ([`MeshIndex`] trait) so `u16`, `u32`,
//! or `u64` can be chosen based on mesh size.
//!
//! # Construction
//!
//! ```
//! use traipse::mesh::{build_from_triangles, TriangleMesh};
//! use nalgebra::Point3;
//!
//! let vertices = vec![
//!     Point3::new(0.0, 0.0, 0.0),
//!     Point3::new(1.0, 0.0, 0.0),
//!     Point3::new(0.5, 1.0, 0.0),
//! ];
//! let faces = vec![[0, 1, 2]];
//!
//! let mesh: TriangleMesh = build_from_triangles(&vertices, &faces).unwrap();
//! ```

mod index;
mod trimesh;

pub use index::{MeshIndex, VertexId};
pub use trimesh::{build_from_triangles, TriangleMesh};
