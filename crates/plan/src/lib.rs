pub mod addon;
pub mod aggregation;
pub mod builder;
mod error;

pub use addon::apply_addons;
pub use aggregation::combine_plans;
pub use builder::{DEFAULT_DAYS, create_tiffin_plan, try_create_plan};
pub use error::*;
