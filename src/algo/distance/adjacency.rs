//! Vertex adjacency extraction.
//!
//! Builds the edge graph that the shortest-path engine walks: one neighbor
//! list per vertex, derived from face connectivity.

use crate::mesh::{MeshIndex, TriangleMesh, VertexId};

/// Build per-vertex adjacency lists from a mesh's faces.
///
/// Every face contributes its three edges in both directions, so the result
/// is symmetric even though each face names an edge only once. Interior
/// edges appear in two faces; the duplicates are removed so the engine
/// relaxes each edge once per finalized endpoint.
///
/// The result always has exactly `mesh.num_vertices()` entries. A vertex
/// referenced by no face gets an empty list and stays unreachable.
///
/// No edge weights are computed here; the engine derives lengths lazily
/// from vertex positions.
pub fn vertex_adjacency<I: MeshIndex>(mesh: &TriangleMesh<I>) -> Vec<Vec<VertexId<I>>> {
    let mut adjacency: Vec<Vec<VertexId<I>>> = vec![Vec::new(); mesh.num_vertices()];

    for &[a, b, c] in mesh.faces() {
        for (u, v) in [(a, b), (b, c), (c, a)] {
            adjacency[u.index()].push(v);
            adjacency[v.index()].push(u);
        }
    }

    for neighbors in &mut adjacency {
        neighbors.sort_unstable();
        neighbors.dedup();
    }

    adjacency
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mesh::build_from_triangles;
    use nalgebra::Point3;

    fn quad_vertices() -> Vec<Point3<f64>> {
        vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(1.0, 1.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
        ]
    }

    fn neighbor_indices<I: MeshIndex>(adjacency: &[Vec<VertexId<I>>], v: usize) -> Vec<usize> {
        adjacency[v].iter().map(|n| n.index()).collect()
    }

    #[test]
    fn test_single_triangle() {
        let vertices = quad_vertices();
        let mesh: TriangleMesh = build_from_triangles(&vertices[..3], &[[0, 1, 2]]).unwrap();
        let adjacency = vertex_adjacency(&mesh);

        assert_eq!(adjacency.len(), 3);
        assert_eq!(neighbor_indices(&adjacency, 0), vec![1, 2]);
        assert_eq!(neighbor_indices(&adjacency, 1), vec![0, 2]);
        assert_eq!(neighbor_indices(&adjacency, 2), vec![0, 1]);
    }

    #[test]
    fn test_shared_edge_deduplicated() {
        // Two triangles sharing the diagonal (0, 2).
        let mesh: TriangleMesh =
            build_from_triangles(&quad_vertices(), &[[0, 1, 2], [0, 2, 3]]).unwrap();
        let adjacency = vertex_adjacency(&mesh);

        // The shared edge shows up in both faces but only once per list.
        assert_eq!(neighbor_indices(&adjacency, 0), vec![1, 2, 3]);
        assert_eq!(neighbor_indices(&adjacency, 2), vec![0, 1, 3]);
    }

    #[test]
    fn test_symmetry() {
        let mesh: TriangleMesh =
            build_from_triangles(&quad_vertices(), &[[0, 1, 2], [0, 2, 3]]).unwrap();
        let adjacency = vertex_adjacency(&mesh);

        for (u, neighbors) in adjacency.iter().enumerate() {
            for v in neighbors {
                assert!(
                    adjacency[v.index()].contains(&VertexId::new(u)),
                    "edge ({}, {}) is not mirrored",
                    u,
                    v.index()
                );
            }
        }
    }

    #[test]
    fn test_isolated_vertex_gets_empty_list() {
        // Vertex 3 is in the position list but referenced by no face.
        let mesh: TriangleMesh = build_from_triangles(&quad_vertices(), &[[0, 1, 2]]).unwrap();
        let adjacency = vertex_adjacency(&mesh);

        assert_eq!(adjacency.len(), 4);
        assert!(adjacency[3].is_empty());
    }

    #[test]
    fn test_no_self_loops() {
        let mesh: TriangleMesh =
            build_from_triangles(&quad_vertices(), &[[0, 1, 2], [0, 2, 3]]).unwrap();
        let adjacency = vertex_adjacency(&mesh);

        for (u, neighbors) in adjacency.iter().enumerate() {
            assert!(!neighbors.contains(&VertexId::new(u)));
        }
    }
}
