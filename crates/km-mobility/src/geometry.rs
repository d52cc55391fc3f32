//! Pairwise geometric queries.
//!
//! Each function re-reads both models at call time and has no side effects.
//! The counterpart is always a live reference, so there is no "absent model"
//! case to handle.

use km_core::{Vector, distance};

use crate::MobilityModel;

/// 3-D Euclidean distance between the two current positions.
///
/// Symmetric, and exactly `0.0` when the positions coincide.
pub fn distance_from<A, B>(this: &A, other: &B) -> f64
where
    A: MobilityModel + ?Sized,
    B: MobilityModel + ?Sized,
{
    distance(this.position(), other.position())
}

/// Planar bearing from `this` to `other`, `atan2(dy, dx)`, z ignored.
///
/// Range is `(-π, π]` following `f64::atan2`; identical x/y yields `0.0`.
/// Swapping the arguments shifts the result by π modulo wraparound, it does
/// not negate it.
pub fn angle_from<A, B>(this: &A, other: &B) -> f64
where
    A: MobilityModel + ?Sized,
    B: MobilityModel + ?Sized,
{
    let from = this.position();
    let to = other.position();
    // `+ 0.0` folds a -0.0 delta so a due-west bearing is π, never -π.
    let dy = (to.y - from.y) + 0.0;
    let dx = (to.x - from.x) + 0.0;
    dy.atan2(dx)
}

/// Norm of the velocity difference.  Symmetric; zero iff the velocities are
/// component-wise equal.
pub fn relative_speed<A, B>(this: &A, other: &B) -> f64
where
    A: MobilityModel + ?Sized,
    B: MobilityModel + ?Sized,
{
    let dv: Vector = this.velocity() - other.velocity();
    dv.length()
}
