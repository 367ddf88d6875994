pub mod mock_kernel;
pub mod section;
pub mod tessellation;
pub mod traits;
pub mod truck_kernel;
pub mod types;

pub use mock_kernel::{MockKernel, MockOp, MockPrimitive, MockSolid};
pub use traits::Kernel;
pub use truck_kernel::TruckKernel;
pub use types::*;
