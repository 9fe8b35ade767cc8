//! Triangle extraction from flat position/index buffers.

use glam::Vec3;

use crate::{GeometryError, Triangle};

/// Build one [`Triangle`] per index triple.
///
/// `positions` holds `x, y, z` per vertex and `indices` holds three
/// zero-based vertex indices per face. Well-formed buffers are the caller's
/// responsibility: a trailing partial index triple is ignored and faces that
/// reference missing vertices are skipped. Use [`validate_buffers`] to reject
/// such input up front.
pub fn triangles_from_buffers(positions: &[f32], indices: &[u32]) -> Vec<Triangle> {
    let vertex_count = positions.len() / 3;
    let vertex = |index: u32| -> Option<Vec3> {
        let index = index as usize;
        (index < vertex_count).then(|| Vec3::from_slice(&positions[index * 3..index * 3 + 3]))
    };

    indices
        .chunks_exact(3)
        .filter_map(|face| {
            let triangle = Triangle::new(vertex(face[0])?, vertex(face[1])?, vertex(face[2])?);
            Some(triangle)
        })
        .collect()
}

/// Check that both buffers come in triples and every index names a vertex.
pub fn validate_buffers(positions: &[f32], indices: &[u32]) -> Result<(), GeometryError> {
    if positions.len() % 3 != 0 {
        return Err(GeometryError::PositionsNotTriples {
            len: positions.len(),
        });
    }
    if indices.len() % 3 != 0 {
        return Err(GeometryError::IndicesNotTriples { len: indices.len() });
    }

    let vertex_count = positions.len() / 3;
    if let Some(&index) = indices.iter().find(|&&i| i as usize >= vertex_count) {
        tracing::debug!(index, vertex_count, "mesh index out of range");
        return Err(GeometryError::IndexOutOfRange {
            index,
            vertex_count,
        });
    }
    Ok(())
}
