//! Straight-line motion at a fixed velocity.

use km_core::{SimTime, Vector};

use crate::{MobilityCore, MobilityModel};

/// Moves linearly from a base point:
///
///   position(now) = base_position + velocity * (now - base_time)
///
/// `now` is whatever the scheduler last passed to
/// [`update`][MobilityModel::update].  Setting position or velocity rebases
/// at `now` and announces a course change; plain time advance does not.
#[derive(Debug, Default)]
pub struct ConstantVelocityModel {
    core:          MobilityCore,
    base_position: Vector,
    base_time:     SimTime,
    velocity:      Vector,
    now:           SimTime,
}

impl ConstantVelocityModel {
    pub fn new(position: Vector, velocity: Vector) -> Self {
        Self {
            core: MobilityCore::new(),
            base_position: position,
            base_time: SimTime::ZERO,
            velocity,
            now: SimTime::ZERO,
        }
    }

    /// Change velocity, keeping the current position as the new base.
    pub fn set_velocity(&mut self, velocity: Vector) {
        self.rebase();
        self.velocity = velocity;
        self.notify_course_change();
    }

    /// The last time passed to `update`.
    #[inline]
    pub fn now(&self) -> SimTime {
        self.now
    }

    fn rebase(&mut self) {
        self.base_position = self.position();
        self.base_time = self.now;
    }
}

impl MobilityModel for ConstantVelocityModel {
    fn core(&self) -> &MobilityCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut MobilityCore {
        &mut self.core
    }

    fn position(&self) -> Vector {
        self.base_position + self.velocity * self.now.since(self.base_time)
    }

    fn set_position(&mut self, position: Vector) {
        self.base_position = position;
        self.base_time = self.now;
        self.notify_course_change();
    }

    fn velocity(&self) -> Vector {
        self.velocity
    }

    fn update(&mut self, now: SimTime) {
        self.now = self.now.max(now);
    }

    fn name(&self) -> &'static str {
        "ConstantVelocity"
    }
}
