pub mod params;
pub mod parts;
pub mod placement;

pub use params::*;
pub use parts::*;
pub use placement::*;
