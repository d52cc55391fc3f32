//! 2-D random walk: fixed-duration legs with random heading and speed.

use std::f64::consts::TAU;

use km_core::{CoreError, RandomStream, SimTime, Vector};

use crate::{MobilityCore, MobilityModel, MobilityResult};

/// `SimTime` resolution; shorter legs would never advance the clock.
const MIN_INTERVAL_SECS: f64 = 1e-9;

/// Axis-aligned rectangle the walker reflects off.  z is unconstrained.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl Bounds {
    pub fn new(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Self {
        Self { x_min, x_max, y_min, y_max }
    }

    pub fn contains(&self, p: Vector) -> bool {
        (self.x_min..=self.x_max).contains(&p.x) && (self.y_min..=self.y_max).contains(&p.y)
    }
}

/// Tuning for [`RandomWalkModel`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RandomWalkParams {
    /// Leg speed is drawn uniformly from `[speed_min, speed_max)` m/s.
    pub speed_min: f64,
    pub speed_max: f64,

    /// Seconds between heading/speed changes.  Must be at least 1 ns.
    pub change_interval_secs: f64,

    /// Optional reflecting walls.
    pub bounds: Option<Bounds>,

    /// Run-wide seed shared by every stream in the simulation.
    pub run_seed: u64,
}

impl Default for RandomWalkParams {
    fn default() -> Self {
        Self {
            speed_min:            2.0,
            speed_max:            4.0,
            change_interval_secs: 1.0,
            bounds:               None,
            run_seed:             1,
        }
    }
}

/// Walks in straight legs of `change_interval_secs`, drawing a fresh heading
/// and speed at the start of each leg.
///
/// # Randomness
///
/// Two sources: heading and speed.  [`assign_streams`] binds them to
/// `start` and `start + 1` and returns `2`.
///
/// # Course changes
///
/// One notification per new leg, one per wall reflection, one per
/// `set_position`.
///
/// [`assign_streams`]: MobilityModel::assign_streams
#[derive(Debug)]
pub struct RandomWalkModel {
    core:        MobilityCore,
    params:      RandomWalkParams,
    heading:     RandomStream,
    speed:       RandomStream,
    position:    Vector,
    velocity:    Vector,
    last_update: SimTime,
    next_change: SimTime,
}

impl RandomWalkModel {
    pub const STREAMS: i64 = 2;

    /// # Errors
    ///
    /// `CoreError::Config` if a speed is negative or non-finite, the range is
    /// inverted, or the change interval is below the time resolution.
    pub fn new(position: Vector, params: RandomWalkParams) -> MobilityResult<Self> {
        if !(params.change_interval_secs >= MIN_INTERVAL_SECS) {
            return Err(CoreError::Config(format!(
                "random walk change interval must be at least 1 ns, got {}",
                params.change_interval_secs
            ))
            .into());
        }
        let (lo, hi) = (params.speed_min, params.speed_max);
        if !(lo.is_finite() && hi.is_finite() && 0.0 <= lo && lo <= hi) {
            return Err(CoreError::Config(format!(
                "random walk speed range [{}, {}) is invalid",
                params.speed_min, params.speed_max
            ))
            .into());
        }
        Ok(Self {
            core:        MobilityCore::new(),
            heading:     RandomStream::new(params.run_seed),
            speed:       RandomStream::new(params.run_seed),
            params,
            position,
            velocity:    Vector::ZERO,
            last_update: SimTime::ZERO,
            next_change: SimTime::ZERO,
        })
    }

    /// Stream indices bound to the (heading, speed) sources.
    pub fn streams(&self) -> (Option<i64>, Option<i64>) {
        (self.heading.stream(), self.speed.stream())
    }

    fn draw_leg(&mut self) {
        let theta = self.heading.uniform(0.0, TAU);
        let speed = self.speed.uniform(self.params.speed_min, self.params.speed_max);
        self.velocity = Vector::new(theta.cos() * speed, theta.sin() * speed, 0.0);
    }

    /// Move along the current leg to `t`, reflecting off the walls.
    fn advance_to(&mut self, t: SimTime) {
        let dt = t.since(self.last_update);
        self.last_update = self.last_update.max(t);
        if dt == 0.0 {
            return;
        }
        self.position = self.position + self.velocity * dt;
        if let Some(b) = self.params.bounds {
            if b.contains(self.position) {
                return;
            }
            let (x, flip_x) = reflect(self.position.x, b.x_min, b.x_max);
            let (y, flip_y) = reflect(self.position.y, b.y_min, b.y_max);
            self.position.x = x;
            self.position.y = y;
            if flip_x {
                self.velocity.x = -self.velocity.x;
            }
            if flip_y {
                self.velocity.y = -self.velocity.y;
            }
            self.notify_course_change();
        }
    }
}

/// Fold `v` back into `[lo, hi]`.  Returns the folded value and whether an
/// odd number of reflections happened (direction flips).
///
/// An even number of folds lands on the same side with no flip; `advance_to`
/// still announces it because the value was out of range.
pub(crate) fn reflect(v: f64, lo: f64, hi: f64) -> (f64, bool) {
    let span = hi - lo;
    if span <= 0.0 {
        return (lo, false);
    }
    if (lo..=hi).contains(&v) {
        return (v, false);
    }
    let period = 2.0 * span;
    let m = (v - lo).rem_euclid(period);
    if m <= span {
        (lo + m, false)
    } else {
        (hi - (m - span), true)
    }
}

impl MobilityModel for RandomWalkModel {
    fn core(&self) -> &MobilityCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut MobilityCore {
        &mut self.core
    }

    fn position(&self) -> Vector {
        self.position
    }

    /// Teleport and start a fresh leg on the next `update`.
    fn set_position(&mut self, position: Vector) {
        self.position = position;
        self.next_change = self.last_update;
        self.notify_course_change();
    }

    fn velocity(&self) -> Vector {
        self.velocity
    }

    fn assign_streams(&mut self, start: i64) -> i64 {
        self.heading.set_stream(start);
        self.speed.set_stream(start + 1);
        Self::STREAMS
    }

    fn update(&mut self, now: SimTime) {
        while self.next_change <= now {
            let at = self.next_change;
            self.advance_to(at);
            self.draw_leg();
            self.notify_course_change();
            self.next_change = at.after_secs(self.params.change_interval_secs);
        }
        self.advance_to(now);
    }

    fn name(&self) -> &'static str {
        "RandomWalk"
    }
}
