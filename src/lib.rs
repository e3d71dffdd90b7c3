//! # Traipse
//!
//! Single-source shortest-path distance fields over the edge graphs of
//! triangle meshes.
//!
//! Given a mesh and a query point, traipse finds the mesh vertex nearest
//! the point, then computes the shortest cumulative Euclidean edge length
//! from that vertex to every other vertex using Dijkstra's algorithm over
//! the mesh's vertex adjacency graph. The result is one distance per
//! vertex; vertices with no path to the source report `f64::INFINITY`.
//!
//! Edge-graph distances approximate the true surface geodesic from above
//! and are exact on the graph itself, which is what most downstream uses
//! (distance-driven remeshing weights, falloff fields, proximity masks)
//! actually want.
//!
//! ## Quick Start
//!
//! ```
//! use traipse::prelude::*;
//! use nalgebra::Point3;
//!
//! // A unit right triangle.
//! let vertices = vec![
//!     Point3::new(0.0, 0.0, 0.0),
//!     Point3::new(1.0, 0.0, 0.0),
//!     Point3::new(0.0, 1.0, 0.0),
//! ];
//! let faces = vec![[0, 1, 2]];
//! let mesh: TriangleMesh = build_from_triangles(&vertices, &faces).unwrap();
//!
//! // Distances from the vertex nearest the origin.
//! let field = distance_field(
//!     &mesh,
//!     &Point3::new(0.0, 0.0, 0.0),
//!     &DistanceOptions::default(),
//! )
//! .unwrap();
//!
//! assert_eq!(field.source().index(), 0);
//! assert_eq!(field.distance(VertexId::new(0)), 0.0);
//! assert!((field.distance(VertexId::new(1)) - 1.0).abs() < 1e-12);
//! ```
//!
//! ## Engine Access
//!
//! The pieces compose but are also usable on their own: the adjacency
//! extractor and the engine accept plain slices, so graphs that don't come
//! from a mesh work too.
//!
//! ```
//! use traipse::algo::distance::{shortest_paths, DistanceOptions};
//! use traipse::mesh::VertexId;
//! use nalgebra::Point3;
//!
//! let positions = vec![
//!     Point3::new(0.0, 0.0, 0.0),
//!     Point3::new(1.0, 0.0, 0.0),
//! ];
//! let adjacency: Vec<Vec<VertexId>> = vec![
//!     vec![VertexId::new(1)],
//!     vec![VertexId::new(0)],
//! ];
//!
//! let field = shortest_paths(
//!     &adjacency,
//!     &positions,
//!     VertexId::new(0),
//!     &DistanceOptions::default(),
//! )
//! .unwrap();
//! assert_eq!(field.distances(), &[0.0, 1.0]);
//! ```
//!
//! ## Path Reconstruction
//!
//! Enable predecessor storage to recover the actual vertex sequence of a
//! shortest path:
//!
//! ```
//! use traipse::prelude::*;
//! use nalgebra::Point3;
//!
//! # let vertices = vec![
//! #     Point3::new(0.0, 0.0, 0.0),
//! #     Point3::new(1.0, 0.0, 0.0),
//! #     Point3::new(0.0, 1.0, 0.0),
//! # ];
//! # let faces = vec![[0, 1, 2]];
//! # let mesh: TriangleMesh = build_from_triangles(&vertices, &faces).unwrap();
//! let options = DistanceOptions::default().with_predecessors(true);
//! let field = distance_field(&mesh, &Point3::new(0.0, 0.0, 0.0), &options).unwrap();
//!
//! if let Some(path) = field.path_to(VertexId::new(2)) {
//!     println!("path: {:?}", path);
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod algo;
pub mod error;
pub mod heap;
pub mod mesh;

/// Prelude module for convenient imports.
///
/// This module re-exports the most commonly used types and functions:
///
/// ```
/// use traipse::prelude::*;
/// ```
pub mod prelude {
    pub use crate::algo::distance::{
        distance_field, shortest_paths, vertex_adjacency, DistanceField, DistanceOptions,
    };
    pub use crate::algo::locate::nearest_vertex;
    pub use crate::error::{MeshError, Result};
    pub use crate::mesh::{build_from_triangles, MeshIndex, TriangleMesh, VertexId};
}

// Re-export nalgebra types for convenience
pub use nalgebra;
