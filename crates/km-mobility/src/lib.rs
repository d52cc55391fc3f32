//! `km-mobility` — the kinematic contract shared by every motion model.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                      |
//! |-----------------|---------------------------------------------------------------|
//! | [`model`]       | `MobilityModel` trait, `MobilityCore` (sinks + role)          |
//! | [`trace`]       | `CourseChangeTrace` — ordered synchronous sinks               |
//! | [`geometry`]    | `distance_from`, `angle_from`, `relative_speed`               |
//! | [`streams`]     | `StreamAllocator` — setup-phase stream partitioning           |
//! | [`role`]        | `RoleAttributes` — terminal/infrastructure flag + identity    |
//! | [`attributes`]  | Named-setting table: `Position`, `Velocity`, `IsTerminal`, `EntityId` |
//! | [`config`]      | `MobilityConfig` — typed per-entity setup record              |
//! | [`models`]      | Constant-position, constant-velocity, random-walk, hierarchical |
//! | [`error`]       | `MobilityError`, `MobilityResult<T>`                          |
//!
//! # Control flow
//!
//! 1. Setup: build models, apply a [`MobilityConfig`] to each, run one
//!    [`StreamAllocator`] pass over all of them.
//! 2. Run: the external scheduler calls [`MobilityModel::update`] at the
//!    times it chooses.  Models announce every position/velocity change
//!    through their course-change trace, synchronously.
//! 3. Any subsystem reads positions, velocities and pairwise geometry at
//!    any point; reads never mutate.
//!
//! Everything is single-threaded: sinks are `Fn` closures without `Send`.

pub mod attributes;
pub mod config;
pub mod error;
pub mod geometry;
pub mod model;
pub mod models;
pub mod role;
pub mod streams;
pub mod trace;


pub use attributes::{AttributeValue, get_attribute, set_attribute, set_attribute_str};
pub use config::MobilityConfig;
pub use error::{MobilityError, MobilityResult};
pub use model::{MobilityCore, MobilityModel};
pub use models::{
    Bounds, ConstantPositionModel, ConstantVelocityModel, HierarchicalModel, RandomWalkModel,
    RandomWalkParams,
};
pub use role::RoleAttributes;
pub use streams::{StreamAllocator, assign_streams_from};
pub use trace::{CourseChangeCallback, CourseChangeTrace};
