use crate::types::{KernelError, RenderMesh, SolidHandle};
use frame_types::Placement;

/// The capability interface the frame assembler consumes.
///
/// Covers primitive construction, rigid transforms, and boolean fusion.
/// Implemented by `TruckKernel` (wraps the truck B-rep crates) and
/// `MockKernel` (deterministic test double).
pub trait Kernel {
    /// Build an I-section solid: a profile of the given overall width and
    /// height in the local XY plane, extruded along +Z by `length`. The
    /// profile is centered on the local origin.
    fn make_i_section(
        &mut self,
        width: f64,
        height: f64,
        length: f64,
        flange_thickness: f64,
        web_thickness: f64,
    ) -> Result<SolidHandle, KernelError>;

    /// Build a rectangular prism spanning `length` along X, `width` along Y,
    /// and `height` along Z, centered on the local origin.
    fn make_rect_prism(
        &mut self,
        length: f64,
        width: f64,
        height: f64,
    ) -> Result<SolidHandle, KernelError>;

    /// Apply a rigid transform, returning a new positioned solid.
    /// The input solid is left untouched (copy semantics).
    fn transform(
        &mut self,
        solid: &SolidHandle,
        placement: &Placement,
    ) -> Result<SolidHandle, KernelError>;

    /// Boolean union of two solids.
    fn fuse(&mut self, a: &SolidHandle, b: &SolidHandle) -> Result<SolidHandle, KernelError>;

    /// Tessellate a solid to a triangle mesh.
    fn tessellate(
        &mut self,
        solid: &SolidHandle,
        tolerance: f64,
    ) -> Result<RenderMesh, KernelError>;
}
