//! Nearest-vertex queries.
//!
//! Distance queries take an arbitrary world-space point as their source; the
//! point is anchored to the mesh by finding the closest vertex. This module
//! provides that lookup.

use nalgebra::Point3;

use crate::error::{MeshError, Result};
use crate::mesh::{MeshIndex, VertexId};

/// Find the vertex closest to a query point.
///
/// Performs a linear scan over all positions, tracking the running minimum
/// of the squared Euclidean distance (monotone in the true distance, so the
/// winner is the same). The comparison is strict, so ties resolve to the
/// lowest index. A query coincident with a vertex returns that vertex.
///
/// # Errors
///
/// Returns [`MeshError::EmptyMesh`] if `vertices` is empty: with no vertices
/// there is no valid source, and silently returning a default could mask a
/// caller bug.
///
/// # Example
///
/// ```
/// use traipse::algo::locate::nearest_vertex;
/// use traipse::mesh::VertexId;
/// use nalgebra::Point3;
///
/// let vertices = vec![
///     Point3::new(0.0, 0.0, 0.0),
///     Point3::new(10.0, 0.0, 0.0),
/// ];
/// let v: VertexId = nearest_vertex(&vertices, &Point3::new(2.0, 1.0, 0.0)).unwrap();
/// assert_eq!(v.index(), 0);
/// ```
pub fn nearest_vertex<I: MeshIndex>(
    vertices: &[Point3<f64>],
    query: &Point3<f64>,
) -> Result<VertexId<I>> {
    if vertices.is_empty() {
        return Err(MeshError::EmptyMesh);
    }

    let mut nearest = 0;
    let mut min_dist = f64::INFINITY;

    for (i, p) in vertices.iter().enumerate() {
        let dist = (p - query).norm_squared();
        if dist < min_dist {
            min_dist = dist;
            nearest = i;
        }
    }

    Ok(VertexId::new(nearest))
}
