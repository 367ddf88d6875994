//! The assembly pipeline: prototypes, positioning, and the sequential fuse
//! chain.
//!
//! One linear pass per invocation. Any kernel failure aborts the whole
//! assembly and surfaces the part whose step failed; no partial frame is ever
//! returned.

use frame_kernel::{Kernel, KernelError, SolidHandle};
use frame_types::{FrameParameters, PartLabel, PurlinLayout};
use tracing::{debug, info, instrument};

use crate::plan::{plan, FramePlan, ISectionSpec, PrismSpec, Prototype};

/// The fused frame handed back to the caller.
#[derive(Debug, Clone)]
pub struct FrameSolid {
    /// Handle to the composite solid in the kernel that built it.
    pub handle: SolidHandle,
    /// How many parts were fused into the composite.
    pub part_count: usize,
}

/// Errors from the assembly pipeline, tagged with the failing part.
#[derive(Debug, Clone, thiserror::Error)]
pub enum AssemblyError {
    #[error("building {part} shape: {source}")]
    Shape {
        part: PartLabel,
        source: KernelError,
    },

    #[error("positioning {part}: {source}")]
    Position {
        part: PartLabel,
        source: KernelError,
    },

    #[error("fusing {part} into the frame: {source}")]
    Fuse {
        part: PartLabel,
        source: KernelError,
    },
}

/// Assemble a portal frame with the default purlin layout.
pub fn assemble(
    kernel: &mut dyn Kernel,
    params: &FrameParameters,
) -> Result<FrameSolid, AssemblyError> {
    assemble_with_layout(kernel, params, &PurlinLayout::default())
}

/// Assemble a portal frame: build the three prototype shapes, position each
/// part per the plan, then fold the positioned parts left-to-right with the
/// kernel's fuse. The fold is strictly sequential; each step consumes the
/// previous composite.
#[instrument(skip(kernel))]
pub fn assemble_with_layout(
    kernel: &mut dyn Kernel,
    params: &FrameParameters,
    layout: &PurlinLayout,
) -> Result<FrameSolid, AssemblyError> {
    let plan = plan(params, layout);
    let mut positioned: Vec<(PartLabel, SolidHandle)> = Vec::with_capacity(plan.parts.len());

    let column = make_i_section(kernel, &plan.column, PartLabel::Column { index: 1 })?;
    position_parts(kernel, &plan, Prototype::Column, &column, &mut positioned)?;

    let rafter = make_i_section(kernel, &plan.rafter, PartLabel::RafterA)?;
    position_parts(kernel, &plan, Prototype::Rafter, &rafter, &mut positioned)?;

    let purlin = make_rect_prism(kernel, &plan.purlin, PartLabel::Purlin { index: 0 })?;
    position_parts(kernel, &plan, Prototype::Purlin, &purlin, &mut positioned)?;

    let part_count = positioned.len();
    let mut parts = positioned.into_iter();
    let (_, mut frame) = parts
        .next()
        .expect("a frame plan always contains the two columns");
    for (label, part) in parts {
        debug!(%label, "fusing part into frame");
        frame = kernel
            .fuse(&frame, &part)
            .map_err(|source| AssemblyError::Fuse {
                part: label,
                source,
            })?;
    }

    info!(parts = part_count, "assembled portal frame");
    Ok(FrameSolid {
        handle: frame,
        part_count,
    })
}

fn make_i_section(
    kernel: &mut dyn Kernel,
    spec: &ISectionSpec,
    part: PartLabel,
) -> Result<SolidHandle, AssemblyError> {
    kernel
        .make_i_section(
            spec.width,
            spec.height,
            spec.length,
            spec.flange_thickness,
            spec.web_thickness,
        )
        .map_err(|source| AssemblyError::Shape { part, source })
}

fn make_rect_prism(
    kernel: &mut dyn Kernel,
    spec: &PrismSpec,
    part: PartLabel,
) -> Result<SolidHandle, AssemblyError> {
    kernel
        .make_rect_prism(spec.length, spec.width, spec.height)
        .map_err(|source| AssemblyError::Shape { part, source })
}

/// Position every instance of one prototype, appending in plan order.
fn position_parts(
    kernel: &mut dyn Kernel,
    plan: &FramePlan,
    prototype: Prototype,
    proto: &SolidHandle,
    positioned: &mut Vec<(PartLabel, SolidHandle)>,
) -> Result<(), AssemblyError> {
    for request in plan.parts_of(prototype) {
        let part = kernel
            .transform(proto, &request.placement)
            .map_err(|source| AssemblyError::Position {
                part: request.label,
                source,
            })?;
        positioned.push((request.label, part));
    }
    Ok(())
}
