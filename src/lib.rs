pub mod io;
pub mod math;
pub mod placement;
pub mod plan;
pub mod render;
pub mod scene;

pub use placement::{DistributionMode, PlacementError, VAULT_R, generate_points};
pub use plan::LampPlan;
