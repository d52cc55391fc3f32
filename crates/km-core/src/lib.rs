//! `km-core` — foundational value types for the `km` kinematic core.
//!
//! This crate is a dependency of every other `km-*` crate.  It has no `km-*`
//! dependencies and minimal external ones (only `rand` and `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`vector`]      | `Vector` (3-D position / velocity), `distance`        |
//! | [`time`]        | `SimTime`                                             |
//! | [`ids`]         | `EntityId`, `SinkId`                                  |
//! | [`rng`]         | `RandomStream` (stream-indexed, reseedable)           |
//! | [`error`]       | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public value types.  |

pub mod error;
pub mod ids;
pub mod rng;
pub mod time;
pub mod vector;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{CoreError, CoreResult};
pub use ids::{EntityId, SinkId};
pub use rng::RandomStream;
pub use time::SimTime;
pub use vector::{Vector, distance};
