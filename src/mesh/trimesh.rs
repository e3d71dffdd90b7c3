//! Indexed triangle mesh.
//!
//! A minimal face-vertex representation: an ordered list of vertex positions
//! plus triangle faces as index triples. This is the shape that mesh file
//! formats and host applications hand over, and it carries everything the
//! distance algorithms need — positions and connectivity.

use nalgebra::Point3;

use super::index::{MeshIndex, VertexId};
use crate::error::{MeshError, Result};

/// An indexed triangle mesh.
///
/// Positions and faces are fixed at construction time; all algorithms in
/// this crate treat the mesh as read-only, so a single mesh may be shared
/// across threads for independent queries.
#[derive(Debug, Clone)]
pub struct TriangleMesh<I: MeshIndex = u32> {
    /// Vertex positions, indexed by [`VertexId`].
    vertices: Vec<Point3<f64>>,

    /// Triangle faces as vertex index triples.
    faces: Vec<[VertexId<I>; 3]>,
}

impl<I: MeshIndex> TriangleMesh<I> {
    /// Get the number of vertices.
    #[inline]
    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// Get the number of faces.
    #[inline]
    pub fn num_faces(&self) -> usize {
        self.faces.len()
    }

    /// Get the position of a vertex.
    #[inline]
    pub fn position(&self, v: VertexId<I>) -> &Point3<f64> {
        &self.vertices[v.index()]
    }

    /// Get all vertex positions in index order.
    #[inline]
    pub fn positions(&self) -> &[Point3<f64>] {
        &self.vertices
    }

    /// Get all faces.
    #[inline]
    pub fn faces(&self) -> &[[VertexId<I>; 3]] {
        &self.faces
    }

    /// Iterate over all vertex IDs.
    pub fn vertex_ids(&self) -> impl Iterator<Item = VertexId<I>> + '_ {
        (0..self.vertices.len()).map(VertexId::new)
    }

    /// Compute the axis-aligned bounding box of all vertices.
    ///
    /// Returns `None` for a mesh with no vertices.
    pub fn bounding_box(&self) -> Option<(Point3<f64>, Point3<f64>)> {
        let first = self.vertices.first()?;
        let mut min = *first;
        let mut max = *first;

        for p in &self.vertices[1..] {
            for k in 0..3 {
                min[k] = min[k].min(p[k]);
                max[k] = max[k].max(p[k]);
            }
        }

        Some((min, max))
    }
}

/// Build a triangle mesh from vertices and triangle faces.
///
/// A mesh with zero faces is allowed as long as it has vertices; vertices
/// referenced by no face are kept and simply end up isolated in topology
/// queries.
///
/// # Arguments
/// * `vertices` - List of vertex positions
/// * `faces` - List of triangle faces, each as [v0, v1, v2] indices
///
/// # Errors
///
/// * [`MeshError::EmptyMesh`] if `vertices` is empty
/// * [`MeshError::InvalidVertexIndex`] if a face references a vertex outside
///   the position list
/// * [`MeshError::DegenerateFace`] if a face repeats a vertex
///
/// # Example
/// ```
/// use traipse::mesh::{build_from_triangles, TriangleMesh};
/// use nalgebra::Point3;
///
/// let vertices = vec![
///     Point3::new(0.0, 0.0, 0.0),
///     Point3::new(1.0, 0.0, 0.0),
///     Point3::new(0.5, 1.0, 0.0),
/// ];
/// let faces = vec![[0, 1, 2]];
///
/// let mesh: TriangleMesh = build_from_triangles(&vertices, &faces).unwrap();
/// assert_eq!(mesh.num_vertices(), 3);
/// assert_eq!(mesh.num_faces(), 1);
/// ```
pub fn build_from_triangles<I: MeshIndex>(
    vertices: &[Point3<f64>],
    faces: &[[usize; 3]],
) -> Result<TriangleMesh<I>> {
    if vertices.is_empty() {
        return Err(MeshError::EmptyMesh);
    }

    for (fi, face) in faces.iter().enumerate() {
        for &vi in face {
            if vi >= vertices.len() {
                return Err(MeshError::InvalidVertexIndex { face: fi, vertex: vi });
            }
        }
        if face[0] == face[1] || face[1] == face[2] || face[0] == face[2] {
            return Err(MeshError::DegenerateFace { face: fi });
        }
    }

    Ok(TriangleMesh {
        vertices: vertices.to_vec(),
        faces: faces
            .iter()
            .map(|&[a, b, c]| [VertexId::new(a), VertexId::new(b), VertexId::new(c)])
            .collect(),
    })
}
