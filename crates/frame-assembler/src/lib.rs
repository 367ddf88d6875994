pub mod assemble;
pub mod plan;

pub use assemble::{assemble, assemble_with_layout, AssemblyError, FrameSolid};
pub use plan::{plan, FramePlan, ISectionSpec, PartRequest, PrismSpec, Prototype};
