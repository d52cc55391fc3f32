//! Reference motion models.
//!
//! | Model                     | Position                         | Streams |
//! |---------------------------|----------------------------------|---------|
//! | [`ConstantPositionModel`] | fixed until `set_position`       | 0       |
//! | [`ConstantVelocityModel`] | linear from a base point         | 0       |
//! | [`RandomWalkModel`]       | piecewise linear, random legs    | 2       |
//! | [`HierarchicalModel`]     | parent + child offset            | sum     |

pub mod constant_position;
pub mod constant_velocity;
pub mod hierarchical;
pub mod random_walk;

pub use constant_position::ConstantPositionModel;
pub use constant_velocity::ConstantVelocityModel;
pub use hierarchical::HierarchicalModel;
pub use random_walk::{Bounds, RandomWalkModel, RandomWalkParams};
