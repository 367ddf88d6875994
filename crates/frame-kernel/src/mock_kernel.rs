//! MockKernel — deterministic test double implementing Kernel.
//!
//! Records primitive requests, applied placements, and fuse order instead of
//! building real geometry. Used by frame-assembler for unit testing.

use crate::section;
use crate::traits::Kernel;
use crate::types::*;
use frame_types::Placement;
use std::collections::HashMap;

/// A primitive request recorded by the mock.
#[derive(Debug, Clone, PartialEq)]
pub enum MockPrimitive {
    ISection {
        width: f64,
        height: f64,
        length: f64,
        flange_thickness: f64,
        web_thickness: f64,
    },
    RectPrism {
        length: f64,
        width: f64,
        height: f64,
    },
}

/// A solid as the mock sees it: a single (possibly moved) part, or a fusion
/// of previously positioned parts.
#[derive(Debug, Clone)]
pub enum MockSolid {
    /// A primitive with the placements applied to it, innermost first.
    Part {
        primitive: MockPrimitive,
        placements: Vec<Placement>,
    },
    /// A fusion. `parts` holds constituent part handles flattened in fuse
    /// order, so the full left-to-right chain is observable on the result.
    Fused { parts: Vec<u64> },
}

impl MockSolid {
    /// Number of constituent parts.
    pub fn part_count(&self) -> usize {
        match self {
            MockSolid::Part { .. } => 1,
            MockSolid::Fused { parts } => parts.len(),
        }
    }
}

/// One entry in the mock's operation log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MockOp {
    MakeISection { result: u64 },
    MakeRectPrism { result: u64 },
    Transform { source: u64, result: u64 },
    Fuse { a: u64, b: u64, result: u64 },
}

/// Deterministic test double for the geometry kernel.
pub struct MockKernel {
    next_handle: u64,
    solids: HashMap<u64, MockSolid>,
    log: Vec<MockOp>,
    fuses_executed: usize,
    /// When set, the Nth fuse call (counting from zero) fails with
    /// `NonManifoldResult`. Lets tests exercise mid-chain fuse failures.
    pub fail_fuse_at: Option<usize>,
}

impl MockKernel {
    pub fn new() -> Self {
        Self {
            next_handle: 1,
            solids: HashMap::new(),
            log: Vec::new(),
            fuses_executed: 0,
            fail_fuse_at: None,
        }
    }

    fn store(&mut self, solid: MockSolid) -> SolidHandle {
        let handle = SolidHandle(self.next_handle);
        self.next_handle += 1;
        self.solids.insert(handle.id(), solid);
        handle
    }

    fn get(&self, handle: &SolidHandle) -> Result<&MockSolid, KernelError> {
        self.solids
            .get(&handle.id())
            .ok_or(KernelError::EntityNotFound {
                handle: handle.id(),
            })
    }

    /// Look up a recorded solid.
    pub fn solid(&self, handle: &SolidHandle) -> Option<&MockSolid> {
        self.solids.get(&handle.id())
    }

    /// Look up a recorded solid by the raw id the operation log reports.
    pub fn solid_by_id(&self, id: u64) -> Option<&MockSolid> {
        self.solids.get(&id)
    }

    /// Every operation executed so far, in call order.
    pub fn log(&self) -> &[MockOp] {
        &self.log
    }

    /// Number of fuse operations executed (successfully or not).
    pub fn fuse_count(&self) -> usize {
        self.fuses_executed
    }
}

impl Default for MockKernel {
    fn default() -> Self {
        Self::new()
    }
}

impl Kernel for MockKernel {
    fn make_i_section(
        &mut self,
        width: f64,
        height: f64,
        length: f64,
        flange_thickness: f64,
        web_thickness: f64,
    ) -> Result<SolidHandle, KernelError> {
        section::validate_i_section(width, height, length, flange_thickness, web_thickness)?;
        let handle = self.store(MockSolid::Part {
            primitive: MockPrimitive::ISection {
                width,
                height,
                length,
                flange_thickness,
                web_thickness,
            },
            placements: Vec::new(),
        });
        self.log.push(MockOp::MakeISection {
            result: handle.id(),
        });
        Ok(handle)
    }

    fn make_rect_prism(
        &mut self,
        length: f64,
        width: f64,
        height: f64,
    ) -> Result<SolidHandle, KernelError> {
        section::validate_rect_prism(length, width, height)?;
        let handle = self.store(MockSolid::Part {
            primitive: MockPrimitive::RectPrism {
                length,
                width,
                height,
            },
            placements: Vec::new(),
        });
        self.log.push(MockOp::MakeRectPrism {
            result: handle.id(),
        });
        Ok(handle)
    }

    fn transform(
        &mut self,
        solid: &SolidHandle,
        placement: &Placement,
    ) -> Result<SolidHandle, KernelError> {
        if let Some(rot) = placement.rotation {
            let [x, y, z] = rot.axis;
            if (x * x + y * y + z * z).sqrt() < 1e-12 {
                return Err(KernelError::TransformError {
                    reason: "rotation axis has zero length".to_string(),
                });
            }
        }

        let moved = match self.get(solid)?.clone() {
            MockSolid::Part {
                primitive,
                mut placements,
            } => {
                placements.push(*placement);
                MockSolid::Part {
                    primitive,
                    placements,
                }
            }
            // The mock does not track geometry of fusions; a moved fusion
            // keeps its constituent list.
            fused @ MockSolid::Fused { .. } => fused,
        };
        let source = solid.id();
        let handle = self.store(moved);
        self.log.push(MockOp::Transform {
            source,
            result: handle.id(),
        });
        Ok(handle)
    }

    fn fuse(&mut self, a: &SolidHandle, b: &SolidHandle) -> Result<SolidHandle, KernelError> {
        let index = self.fuses_executed;
        self.fuses_executed += 1;
        if self.fail_fuse_at == Some(index) {
            return Err(KernelError::NonManifoldResult {
                reason: format!("mock fuse {index} configured to fail"),
            });
        }

        let flatten = |solid: &MockSolid, handle: &SolidHandle| match solid {
            MockSolid::Part { .. } => vec![handle.id()],
            MockSolid::Fused { parts } => parts.clone(),
        };
        let mut parts = flatten(self.get(a)?, a);
        parts.extend(flatten(self.get(b)?, b));

        let (a, b) = (a.id(), b.id());
        let handle = self.store(MockSolid::Fused { parts });
        self.log.push(MockOp::Fuse {
            a,
            b,
            result: handle.id(),
        });
        Ok(handle)
    }

    fn tessellate(
        &mut self,
        solid: &SolidHandle,
        _tolerance: f64,
    ) -> Result<RenderMesh, KernelError> {
        // One synthetic unit triangle per constituent part.
        let count = self.get(solid)?.part_count() as u32;
        let mut mesh = RenderMesh {
            vertices: Vec::new(),
            normals: Vec::new(),
            indices: Vec::new(),
            face_ranges: Vec::new(),
        };
        for i in 0..count {
            let base = mesh.vertices.len() as u32 / 3;
            mesh.vertices.extend([
                0.0,
                0.0,
                i as f32,
                1.0,
                0.0,
                i as f32,
                0.0,
                1.0,
                i as f32,
            ]);
            mesh.normals.extend([0.0, 0.0, 1.0].repeat(3));
            let start_index = mesh.indices.len() as u32;
            mesh.indices.extend([base, base + 1, base + 2]);
            mesh.face_ranges.push(FaceRange {
                face: i,
                start_index,
                end_index: mesh.indices.len() as u32,
            });
        }
        Ok(mesh)
    }
}
