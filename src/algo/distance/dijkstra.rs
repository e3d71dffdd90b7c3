//! Dijkstra's algorithm over the mesh edge graph.
//!
//! Computes shortest path distances along mesh edges using Dijkstra's
//! algorithm with a binary-heap priority queue. Distances are exact on the
//! edge graph, which approximates true geodesic distances on the surface.

use nalgebra::Point3;

use crate::algo::locate::nearest_vertex;
use crate::algo::Progress;
use crate::error::{MeshError, Result};
use crate::heap::MinHeap;
use crate::mesh::{MeshIndex, TriangleMesh, VertexId};

use super::adjacency::vertex_adjacency;
use super::DistanceField;

/// Options for shortest-path queries.
#[derive(Debug, Clone)]
pub struct DistanceOptions {
    /// Whether to store predecessor information for path reconstruction.
    pub store_predecessors: bool,

    /// Maximum distance to explore. Vertices finalized beyond this distance
    /// do not relax their neighbors. Set to `None` for no limit.
    pub max_distance: Option<f64>,

    /// Target vertex index for early termination.
    /// If set, the algorithm stops once this vertex is finalized.
    pub target: Option<usize>,
}

impl Default for DistanceOptions {
    fn default() -> Self {
        Self {
            store_predecessors: false,
            max_distance: None,
            target: None,
        }
    }
}

impl DistanceOptions {
    /// Enable predecessor storage for path reconstruction.
    pub fn with_predecessors(mut self, store: bool) -> Self {
        self.store_predecessors = store;
        self
    }

    /// Set maximum distance to explore.
    pub fn with_max_distance(mut self, max_dist: f64) -> Self {
        self.max_distance = Some(max_dist);
        self
    }

    /// Set target vertex for early termination.
    pub fn with_target(mut self, target: usize) -> Self {
        self.target = Some(target);
        self
    }
}

/// Compute shortest-path distances from a source vertex to every vertex.
///
/// Runs Dijkstra's algorithm over the given adjacency lists with Euclidean
/// edge lengths derived from `positions`. Unreachable vertices end up at
/// `f64::INFINITY`.
///
/// The queue never supports decrease-key: relaxing a vertex re-enqueues it
/// at the better distance, and the stale higher-distance entry is skipped
/// when it eventually surfaces. Each vertex is therefore finalized exactly
/// once, on its first pop.
///
/// # Errors
///
/// * [`MeshError::EmptyMesh`] if `positions` is empty
/// * [`MeshError::LengthMismatch`] if `adjacency` and `positions` disagree
///   on the vertex count
/// * [`MeshError::SourceOutOfRange`] if `source` is not a valid vertex
///
/// # Example
///
/// ```
/// use traipse::algo::distance::{shortest_paths, DistanceOptions};
/// use traipse::mesh::VertexId;
/// use nalgebra::Point3;
///
/// // A path of three collinear vertices.
/// let positions = vec![
///     Point3::new(0.0, 0.0, 0.0),
///     Point3::new(1.0, 0.0, 0.0),
///     Point3::new(2.0, 0.0, 0.0),
/// ];
/// let adjacency: Vec<Vec<VertexId>> = vec![
///     vec![VertexId::new(1)],
///     vec![VertexId::new(0), VertexId::new(2)],
///     vec![VertexId::new(1)],
/// ];
///
/// let field = shortest_paths(
///     &adjacency,
///     &positions,
///     VertexId::new(0),
///     &DistanceOptions::default(),
/// )
/// .unwrap();
/// assert_eq!(field.distances(), &[0.0, 1.0, 2.0]);
/// ```
pub fn shortest_paths<I: MeshIndex>(
    adjacency: &[Vec<VertexId<I>>],
    positions: &[Point3<f64>],
    source: VertexId<I>,
    options: &DistanceOptions,
) -> Result<DistanceField<I>> {
    shortest_paths_internal(adjacency, positions, source, options, None)
}

/// Compute shortest-path distances with progress reporting.
///
/// Identical to [`shortest_paths`] but reports the number of finalized
/// vertices through the given callback.
pub fn shortest_paths_with_progress<I: MeshIndex>(
    adjacency: &[Vec<VertexId<I>>],
    positions: &[Point3<f64>],
    source: VertexId<I>,
    options: &DistanceOptions,
    progress: &Progress,
) -> Result<DistanceField<I>> {
    shortest_paths_internal(adjacency, positions, source, options, Some(progress))
}

fn shortest_paths_internal<I: MeshIndex>(
    adjacency: &[Vec<VertexId<I>>],
    positions: &[Point3<f64>],
    source: VertexId<I>,
    options: &DistanceOptions,
    progress: Option<&Progress>,
) -> Result<DistanceField<I>> {
    let n = positions.len();
    if n == 0 {
        return Err(MeshError::EmptyMesh);
    }
    if adjacency.len() != n {
        return Err(MeshError::LengthMismatch {
            adjacency: adjacency.len(),
            num_vertices: n,
        });
    }
    if source.index() >= n {
        return Err(MeshError::SourceOutOfRange {
            source_vertex: source.index(),
            num_vertices: n,
        });
    }

    let mut distances = vec![f64::INFINITY; n];
    let mut visited = vec![false; n];
    let mut predecessors: Option<Vec<Option<usize>>> = if options.store_predecessors {
        Some(vec![None; n])
    } else {
        None
    };

    distances[source.index()] = 0.0;

    let mut queue = MinHeap::with_capacity(n);
    queue.enqueue(source.index(), 0.0);

    let mut settled = 0;
    while !queue.is_empty() {
        let i = queue.dequeue()?;

        // A vertex can sit in the queue several times, once per relaxation
        // that improved it. Only the first pop carries its final distance.
        if visited[i] {
            continue;
        }
        visited[i] = true;

        settled += 1;
        if let Some(progress) = progress {
            progress.report(settled, n, "Settling vertices");
        }

        if options.target == Some(i) {
            break;
        }

        let dist_i = distances[i];
        if let Some(max_dist) = options.max_distance {
            if dist_i > max_dist {
                continue;
            }
        }

        let p_i = positions[i];
        for neighbor in &adjacency[i] {
            let j = neighbor.index();
            let candidate = dist_i + (positions[j] - p_i).norm();

            if candidate < distances[j] {
                distances[j] = candidate;

                if let Some(preds) = predecessors.as_mut() {
                    preds[j] = Some(i);
                }

                queue.enqueue(j, candidate);
            }
        }
    }

    Ok(DistanceField::new(distances, predecessors, source))
}

/// Compute the distance field of a mesh from an arbitrary query point.
///
/// The query point is anchored to the mesh by its nearest vertex, which
/// becomes the source of the shortest-path computation. Adjacency is
/// extracted from the mesh's faces. If the mesh has no vertices the locator
/// fails and the engine never runs.
///
/// # Example
///
/// ```
/// use traipse::prelude::*;
/// use nalgebra::Point3;
///
/// let vertices = vec![
///     Point3::new(0.0, 0.0, 0.0),
///     Point3::new(1.0, 0.0, 0.0),
///     Point3::new(0.0, 1.0, 0.0),
/// ];
/// let faces = vec![[0, 1, 2]];
/// let mesh: TriangleMesh = build_from_triangles(&vertices, &faces).unwrap();
///
/// let field = distance_field(
///     &mesh,
///     &Point3::new(0.0, 0.0, 0.0),
///     &DistanceOptions::default(),
/// )
/// .unwrap();
///
/// assert_eq!(field.source().index(), 0);
/// assert!((field.distance(VertexId::new(1)) - 1.0).abs() < 1e-12);
/// ```
pub fn distance_field<I: MeshIndex>(
    mesh: &TriangleMesh<I>,
    query: &Point3<f64>,
    options: &DistanceOptions,
) -> Result<DistanceField<I>> {
    let source = nearest_vertex(mesh.positions(), query)?;
    let adjacency = vertex_adjacency(mesh);
    shortest_paths(&adjacency, mesh.positions(), source, options)
}

/// Compute the distance field of a mesh with progress reporting.
///
/// Identical to [`distance_field`] but reports the number of finalized
/// vertices through the given callback.
pub fn distance_field_with_progress<I: MeshIndex>(
    mesh: &TriangleMesh<I>,
    query: &Point3<f64>,
    options: &DistanceOptions,
    progress: &Progress,
) -> Result<DistanceField<I>> {
    let source = nearest_vertex(mesh.positions(), query)?;
    let adjacency = vertex_adjacency(mesh);
    shortest_paths_with_progress(&adjacency, mesh.positions(), source, options, progress)
}
