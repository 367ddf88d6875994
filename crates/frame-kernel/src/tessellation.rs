//! Tessellation wrapper with face-range metadata.
//!
//! Wraps truck-meshalgo to produce a RenderMesh whose FaceRange entries map
//! triangle index ranges back to B-rep faces.

use crate::types::*;
use truck_meshalgo::prelude::*;
use truck_meshalgo::tessellation::MeshableShape;

type TruckSolid = truck_modeling::Solid;

/// Tessellate a truck Solid into a RenderMesh with per-face tracking.
pub fn tessellate_solid(
    solid: &TruckSolid,
    tolerance: f64,
) -> std::result::Result<RenderMesh, KernelError> {
    let meshed_solid = solid.triangulation(tolerance);

    let mut all_vertices: Vec<f32> = Vec::new();
    let mut all_normals: Vec<f32> = Vec::new();
    let mut all_indices: Vec<u32> = Vec::new();
    let mut face_ranges: Vec<FaceRange> = Vec::new();
    let mut face_ordinal: u32 = 0;

    for shell in meshed_solid.boundaries().iter() {
        for face in shell.face_iter() {
            let face_index = face_ordinal;
            face_ordinal += 1;

            // Each meshed face's surface is Option<PolygonMesh>
            let maybe_mesh: Option<PolygonMesh> = face.surface();
            let Some(face_mesh) = maybe_mesh else {
                continue;
            };

            // If face is inverted, the mesh needs inversion too
            let face_mesh = if !face.orientation() {
                let mut m = face_mesh;
                m.invert();
                m
            } else {
                face_mesh
            };

            let start_index = all_indices.len() as u32;
            let base_vertex = (all_vertices.len() / 3) as u32;

            let positions = face_mesh.positions();
            let normals = face_mesh.normals();
            let tri_faces = face_mesh.tri_faces();

            for pos in positions {
                all_vertices.push(pos[0] as f32);
                all_vertices.push(pos[1] as f32);
                all_vertices.push(pos[2] as f32);
            }

            if normals.is_empty() {
                for _ in 0..positions.len() {
                    all_normals.push(0.0);
                    all_normals.push(0.0);
                    all_normals.push(1.0);
                }
            } else {
                for norm in normals {
                    all_normals.push(norm[0] as f32);
                    all_normals.push(norm[1] as f32);
                    all_normals.push(norm[2] as f32);
                }
            }

            for tri in tri_faces {
                for v in tri.iter() {
                    all_indices.push(v.pos as u32 + base_vertex);
                }
            }

            let end_index = all_indices.len() as u32;
            if end_index > start_index {
                face_ranges.push(FaceRange {
                    face: face_index,
                    start_index,
                    end_index,
                });
            }
        }
    }

    if all_vertices.is_empty() {
        return Err(KernelError::TessellationFailed {
            reason: "no face produced any triangles".to_string(),
        });
    }

    Ok(RenderMesh {
        vertices: all_vertices,
        normals: all_normals,
        indices: all_indices,
        face_ranges,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::Kernel;
    use crate::truck_kernel::TruckKernel;

    #[test]
    fn prism_tessellates_with_full_face_coverage() {
        let mut kernel = TruckKernel::new();
        let handle = kernel.make_rect_prism(100.0, 40.0, 20.0).unwrap();
        let mesh = kernel.tessellate(&handle, 0.1).unwrap();

        assert!(!mesh.vertices.is_empty(), "Mesh should have vertices");
        assert!(!mesh.indices.is_empty(), "Mesh should have indices");
        assert_eq!(
            mesh.vertices.len(),
            mesh.normals.len(),
            "One normal per vertex"
        );
        assert_eq!(mesh.face_ranges.len(), 6, "Prism should have 6 face ranges");

        let total_indices = mesh.indices.len() as u32;
        let covered: u32 = mesh
            .face_ranges
            .iter()
            .map(|r| r.end_index - r.start_index)
            .sum();
        assert_eq!(
            covered, total_indices,
            "Face ranges should cover all indices"
        );
    }
}
