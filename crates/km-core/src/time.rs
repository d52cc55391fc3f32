//! Simulated time stamps.
//!
//! The kinematic core never advances time itself.  The external scheduler
//! owns the clock and passes the current `SimTime` into
//! `MobilityModel::update`; models that move continuously use it to
//! extrapolate from their last rebase point.
//!
//! Time is an integer nanosecond count so equality and ordering are exact;
//! conversion to `f64` seconds happens only at the kinematics boundary.

use std::fmt;

const NANOS_PER_SEC: f64 = 1e9;

/// An absolute simulated instant, nanoseconds since simulation start.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimTime(pub u64);

impl SimTime {
    pub const ZERO: SimTime = SimTime(0);

    /// Build from fractional seconds.  Negative inputs saturate to zero.
    #[inline]
    pub fn from_secs_f64(secs: f64) -> SimTime {
        SimTime((secs.max(0.0) * NANOS_PER_SEC).round() as u64)
    }

    #[inline]
    pub fn as_secs_f64(self) -> f64 {
        self.0 as f64 / NANOS_PER_SEC
    }

    /// Seconds elapsed from `earlier` to `self`; `0.0` if `earlier` is later.
    #[inline]
    pub fn since(self, earlier: SimTime) -> f64 {
        self.0.saturating_sub(earlier.0) as f64 / NANOS_PER_SEC
    }

    /// The instant `secs` seconds after `self`.
    #[inline]
    pub fn after_secs(self, secs: f64) -> SimTime {
        SimTime(self.0 + SimTime::from_secs_f64(secs).0)
    }
}

impl fmt::Display for SimTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "+{:.3}s", self.as_secs_f64())
    }
}
