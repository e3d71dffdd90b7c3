//! Shortest-path distance fields over mesh edge graphs.
//!
//! This module computes, for a single source, the shortest cumulative
//! Euclidean edge length from that source to every vertex of a triangle
//! mesh. The source is given as an arbitrary 3D point and anchored to the
//! mesh by its nearest vertex.
//!
//! Distances are exact on the edge graph and approximate the true surface
//! geodesic from above: a path confined to edges can never be shorter than
//! the unconstrained surface path.
//!
//! # Example
//!
//! ```
//! use traipse::prelude::*;
//! use nalgebra::Point3;
//!
//! let vertices = vec![
//!     Point3::new(0.0, 0.0, 0.0),
//!     Point3::new(1.0, 0.0, 0.0),
//!     Point3::new(0.0, 1.0, 0.0),
//! ];
//! let faces = vec![[0, 1, 2]];
//! let mesh: TriangleMesh = build_from_triangles(&vertices, &faces).unwrap();
//!
//! let field = distance_field(
//!     &mesh,
//!     &Point3::new(0.0, 0.0, 0.0),
//!     &DistanceOptions::default(),
//! )
//! .unwrap();
//!
//! // One distance per vertex, in index order.
//! assert_eq!(field.len(), 3);
//! let target = VertexId::new(1);
//! println!("distance to {:?}: {}", target, field.distance(target));
//!
//! // Find the farthest vertex.
//! if let Some((v, d)) = field.farthest_vertex() {
//!     println!("farthest vertex: {:?} at distance {}", v, d);
//! }
//! ```

mod adjacency;
mod dijkstra;

pub use adjacency::vertex_adjacency;
pub use dijkstra::{
    distance_field, distance_field_with_progress, shortest_paths, shortest_paths_with_progress,
    DistanceOptions,
};

use crate::mesh::{MeshIndex, VertexId};

/// Result of a shortest-path distance computation.
///
/// Contains the distance from the source to every vertex, the resolved
/// source vertex, and optionally predecessor information for path
/// reconstruction.
#[derive(Debug, Clone)]
pub struct DistanceField<I: MeshIndex = u32> {
    /// Distance from the source to each vertex.
    /// `f64::INFINITY` if the vertex is unreachable.
    distances: Vec<f64>,

    /// Predecessor vertex for each vertex (for path reconstruction).
    /// `None` if predecessors weren't computed or the vertex is the source
    /// or unreachable.
    predecessors: Option<Vec<Option<usize>>>,

    /// The source vertex the distances are measured from.
    source: VertexId<I>,
}

impl<I: MeshIndex> DistanceField<I> {
    /// Create a new distance field.
    pub(crate) fn new(
        distances: Vec<f64>,
        predecessors: Option<Vec<Option<usize>>>,
        source: VertexId<I>,
    ) -> Self {
        Self {
            distances,
            predecessors,
            source,
        }
    }

    /// Get the distance to a vertex.
    ///
    /// Returns `f64::INFINITY` if the vertex is unreachable from the source.
    #[inline]
    pub fn distance(&self, v: VertexId<I>) -> f64 {
        self.distances[v.index()]
    }

    /// Get all distances as a slice, in vertex-index order.
    #[inline]
    pub fn distances(&self) -> &[f64] {
        &self.distances
    }

    /// Get the number of vertices.
    #[inline]
    pub fn len(&self) -> usize {
        self.distances.len()
    }

    /// Check if empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }

    /// Get the source vertex the distances are measured from.
    #[inline]
    pub fn source(&self) -> VertexId<I> {
        self.source
    }

    /// Check if a vertex is reachable from the source.
    #[inline]
    pub fn is_reachable(&self, v: VertexId<I>) -> bool {
        self.distances[v.index()].is_finite()
    }

    /// Count the number of reachable vertices.
    pub fn reachable_count(&self) -> usize {
        self.distances.iter().filter(|d| d.is_finite()).count()
    }

    /// Find the vertex with the maximum finite distance from the source.
    ///
    /// Returns `None` if no vertex has a finite distance.
    pub fn farthest_vertex(&self) -> Option<(VertexId<I>, f64)> {
        let mut max_dist = f64::NEG_INFINITY;
        let mut max_vertex = None;

        for (i, &d) in self.distances.iter().enumerate() {
            if d.is_finite() && d > max_dist {
                max_dist = d;
                max_vertex = Some(i);
            }
        }

        max_vertex.map(|i| (VertexId::new(i), max_dist))
    }

    /// Reconstruct the shortest path from the source to the given vertex.
    ///
    /// Returns `None` if:
    /// - Predecessors weren't stored (use `DistanceOptions::with_predecessors(true)`)
    /// - The vertex is unreachable
    ///
    /// The returned path includes both the source and target vertices; the
    /// path to the source itself is just `[source]`.
    pub fn path_to(&self, target: VertexId<I>) -> Option<Vec<VertexId<I>>> {
        let predecessors = self.predecessors.as_ref()?;

        if !self.distances[target.index()].is_finite() {
            return None;
        }

        let mut path = Vec::new();
        let mut current = target.index();

        loop {
            path.push(VertexId::new(current));

            match predecessors[current] {
                Some(pred) => current = pred,
                None => break, // Reached the source
            }

            // Guard against a corrupt predecessor cycle.
            if path.len() > self.distances.len() {
                return None;
            }
        }

        path.reverse();
        Some(path)
    }

    /// Iterate over all vertices with their distances.
    pub fn iter(&self) -> impl Iterator<Item = (VertexId<I>, f64)> + '_ {
        self.distances
            .iter()
            .enumerate()
            .map(|(i, &d)| (VertexId::new(i), d))
    }

    /// Iterate over only reachable vertices with their distances.
    pub fn reachable_iter(&self) -> impl Iterator<Item = (VertexId<I>, f64)> + '_ {
        self.iter().filter(|(_, d)| d.is_finite())
    }
}
