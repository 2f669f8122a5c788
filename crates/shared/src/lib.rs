pub mod addon;
pub mod plan;

pub use addon::*;
pub use plan::*;
