//! TruckKernel — real geometry kernel wrapping truck's API.

use crate::section;
use crate::tessellation;
use crate::traits::Kernel;
use crate::types::*;
use frame_types::Placement;
use std::collections::HashMap;
use tracing::debug;

// Import truck types selectively to avoid shadowing std::result::Result
use truck_modeling::builder;
use truck_modeling::topology::{Edge, Solid, Wire};
use truck_modeling::{InnerSpace, Point3, Rad, Vector3};

/// Tolerance handed to truck's boolean operations.
const FUSE_TOLERANCE: f64 = 0.05;

/// Real geometry kernel backed by the truck B-rep library.
pub struct TruckKernel {
    next_handle: u64,
    solids: HashMap<u64, Solid>,
}

impl TruckKernel {
    pub fn new() -> Self {
        Self {
            next_handle: 1,
            solids: HashMap::new(),
        }
    }

    fn store_solid(&mut self, solid: Solid) -> SolidHandle {
        let handle = SolidHandle(self.next_handle);
        self.next_handle += 1;
        self.solids.insert(handle.id(), solid);
        handle
    }

    pub(crate) fn get_solid(&self, handle: &SolidHandle) -> Result<&Solid, KernelError> {
        self.solids
            .get(&handle.id())
            .ok_or(KernelError::EntityNotFound {
                handle: handle.id(),
            })
    }
}

impl Default for TruckKernel {
    fn default() -> Self {
        Self::new()
    }
}

impl Kernel for TruckKernel {
    fn make_i_section(
        &mut self,
        width: f64,
        height: f64,
        length: f64,
        flange_thickness: f64,
        web_thickness: f64,
    ) -> Result<SolidHandle, KernelError> {
        section::validate_i_section(width, height, length, flange_thickness, web_thickness)?;
        debug!(width, height, length, "building I-section solid");

        let outline = section::i_section_outline(width, height, flange_thickness, web_thickness);
        let pts: Vec<Point3> = outline
            .iter()
            .map(|&(x, y)| Point3::new(x, y, 0.0))
            .collect();

        // Build the wire from consecutive point pairs with shared vertices.
        let n = pts.len();
        let vertices: Vec<_> = pts.iter().map(|&p| builder::vertex(p)).collect();
        let mut wire_edges: Vec<Edge> = Vec::new();
        for i in 0..n {
            let j = (i + 1) % n;
            let edge = Edge::new(
                &vertices[i],
                &vertices[j],
                truck_modeling::geometry::Curve::Line(truck_modeling::geometry::Line(
                    pts[i], pts[j],
                )),
            );
            wire_edges.push(edge);
        }
        let wire = Wire::from_iter(wire_edges);

        let face =
            builder::try_attach_plane(&[wire]).map_err(|e| KernelError::InvalidCrossSection {
                reason: format!("I profile does not bound a planar face: {e}"),
            })?;

        let solid = builder::tsweep(&face, Vector3::new(0.0, 0.0, length));
        Ok(self.store_solid(solid))
    }

    fn make_rect_prism(
        &mut self,
        length: f64,
        width: f64,
        height: f64,
    ) -> Result<SolidHandle, KernelError> {
        section::validate_rect_prism(length, width, height)?;
        debug!(length, width, height, "building rectangular prism");

        // Successive translational sweeps from the -X/-Y/-Z corner so the
        // solid is centered on the origin.
        let corner = builder::vertex(Point3::new(-length / 2.0, -width / 2.0, -height / 2.0));
        let edge = builder::tsweep(&corner, Vector3::new(length, 0.0, 0.0));
        let face = builder::tsweep(&edge, Vector3::new(0.0, width, 0.0));
        let solid = builder::tsweep(&face, Vector3::new(0.0, 0.0, height));
        Ok(self.store_solid(solid))
    }

    fn transform(
        &mut self,
        solid: &SolidHandle,
        placement: &Placement,
    ) -> Result<SolidHandle, KernelError> {
        let mut positioned = self.get_solid(solid)?.clone();

        if let Some(rot) = placement.rotation {
            let axis = Vector3::new(rot.axis[0], rot.axis[1], rot.axis[2]);
            if axis.magnitude() < 1e-12 {
                return Err(KernelError::TransformError {
                    reason: "rotation axis has zero length".to_string(),
                });
            }
            let anchor = Point3::new(rot.anchor[0], rot.anchor[1], rot.anchor[2]);
            positioned = builder::rotated(&positioned, anchor, axis.normalize(), Rad(rot.angle_rad));
        }

        let translation = Vector3::new(
            placement.translation[0],
            placement.translation[1],
            placement.translation[2],
        );
        positioned = builder::translated(&positioned, translation);

        Ok(self.store_solid(positioned))
    }

    fn fuse(&mut self, a: &SolidHandle, b: &SolidHandle) -> Result<SolidHandle, KernelError> {
        let solid_a = self.get_solid(a)?.clone();
        let solid_b = self.get_solid(b)?.clone();
        debug!(a = a.id(), b = b.id(), "fusing solids");

        let result = truck_shapeops::or(&solid_a, &solid_b, FUSE_TOLERANCE).ok_or_else(|| {
            KernelError::NonManifoldResult {
                reason: "truck or() returned None".to_string(),
            }
        })?;
        Ok(self.store_solid(result))
    }

    fn tessellate(
        &mut self,
        solid: &SolidHandle,
        tolerance: f64,
    ) -> Result<RenderMesh, KernelError> {
        let truck_solid = self.get_solid(solid)?;
        tessellation::tessellate_solid(truck_solid, tolerance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounding_box(kernel: &TruckKernel, handle: &SolidHandle) -> ([f64; 3], [f64; 3]) {
        let solid = kernel.get_solid(handle).unwrap();
        let mut min = [f64::MAX; 3];
        let mut max = [f64::MIN; 3];
        for shell in solid.boundaries() {
            for v in shell.vertex_iter() {
                let p = v.point();
                for i in 0..3 {
                    min[i] = min[i].min(p[i]);
                    max[i] = max[i].max(p[i]);
                }
            }
        }
        (min, max)
    }

    #[test]
    fn i_section_has_expected_topology() {
        let mut kernel = TruckKernel::new();
        let handle = kernel
            .make_i_section(100.0, 100.0, 4000.0, 10.0, 5.0)
            .unwrap();

        let solid = kernel.get_solid(&handle).unwrap();
        let boundaries = solid.boundaries();
        assert_eq!(boundaries.len(), 1, "I-beam should have 1 shell");

        // 12 profile edges sweep to 12 side faces, plus the two end caps.
        let faces: Vec<_> = boundaries[0].face_iter().collect();
        assert_eq!(faces.len(), 14, "I-beam should have 14 faces");
    }

    #[test]
    fn i_section_spans_its_dimensions() {
        let mut kernel = TruckKernel::new();
        let handle = kernel
            .make_i_section(100.0, 80.0, 4000.0, 10.0, 5.0)
            .unwrap();
        let (min, max) = bounding_box(&kernel, &handle);

        let eps = 1e-10;
        assert!((max[0] - min[0] - 100.0).abs() < eps, "width should be 100");
        assert!((max[1] - min[1] - 80.0).abs() < eps, "height should be 80");
        assert!((max[2] - min[2] - 4000.0).abs() < eps, "length should be 4000");
        assert!(min[2].abs() < eps, "extrusion should start at z = 0");
    }

    #[test]
    fn rect_prism_is_centered() {
        let mut kernel = TruckKernel::new();
        let handle = kernel.make_rect_prism(1000.0, 40.0, 20.0).unwrap();
        let (min, max) = bounding_box(&kernel, &handle);

        let eps = 1e-10;
        assert!((min[0] + 500.0).abs() < eps && (max[0] - 500.0).abs() < eps);
        assert!((min[1] + 20.0).abs() < eps && (max[1] - 20.0).abs() < eps);
        assert!((min[2] + 10.0).abs() < eps && (max[2] - 10.0).abs() < eps);
    }

    #[test]
    fn translation_moves_the_bounding_box() {
        let mut kernel = TruckKernel::new();
        let prism = kernel.make_rect_prism(10.0, 10.0, 10.0).unwrap();
        let moved = kernel
            .transform(&prism, &Placement::translation([0.0, 0.0, 4000.0]))
            .unwrap();

        let (min_orig, _) = bounding_box(&kernel, &prism);
        let (min_moved, _) = bounding_box(&kernel, &moved);
        assert!((min_moved[2] - min_orig[2] - 4000.0).abs() < 1e-10);
    }

    #[test]
    fn rotation_about_x_tilts_the_solid() {
        let mut kernel = TruckKernel::new();
        let prism = kernel.make_rect_prism(10.0, 10.0, 100.0).unwrap();
        // Quarter turn about X maps the Z extent onto Y.
        let rotated = kernel
            .transform(
                &prism,
                &Placement::rotation_then_translation(
                    [0.0, 0.0, 0.0],
                    [1.0, 0.0, 0.0],
                    std::f64::consts::FRAC_PI_2,
                    [0.0, 0.0, 0.0],
                ),
            )
            .unwrap();

        let (min, max) = bounding_box(&kernel, &rotated);
        let eps = 1e-9;
        assert!((max[1] - min[1] - 100.0).abs() < eps, "Y should span 100");
        assert!((max[2] - min[2] - 10.0).abs() < eps, "Z should span 10");
    }

    #[test]
    fn degenerate_axis_is_a_transform_error() {
        let mut kernel = TruckKernel::new();
        let prism = kernel.make_rect_prism(10.0, 10.0, 10.0).unwrap();
        let err = kernel
            .transform(
                &prism,
                &Placement::rotation_then_translation(
                    [0.0, 0.0, 0.0],
                    [0.0, 0.0, 0.0],
                    1.0,
                    [0.0, 0.0, 0.0],
                ),
            )
            .unwrap_err();
        assert!(matches!(err, KernelError::TransformError { .. }));
    }

    #[test]
    fn bad_cross_section_never_reaches_the_store() {
        let mut kernel = TruckKernel::new();
        let err = kernel.make_i_section(100.0, 100.0, 0.0, 10.0, 5.0).unwrap_err();
        assert!(matches!(err, KernelError::InvalidCrossSection { .. }));
        assert!(kernel.solids.is_empty());
    }

    #[test]
    fn stale_handle_is_reported() {
        let mut kernel_a = TruckKernel::new();
        let mut kernel_b = TruckKernel::new();
        let handle = kernel_a.make_rect_prism(1.0, 1.0, 1.0).unwrap();
        let err = kernel_b
            .transform(&handle, &Placement::identity())
            .unwrap_err();
        assert!(matches!(err, KernelError::EntityNotFound { .. }));
    }
}
