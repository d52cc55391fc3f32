//! The `MobilityModel` trait — the kinematic contract every motion model
//! implements.

use km_core::{EntityId, SimTime, SinkId, Vector};

use crate::trace::{CourseChangeCallback, CourseChangeTrace};
use crate::{RoleAttributes, geometry};

/// Per-instance state that is not kinematics: the course-change subscriber
/// list and the role/identity attributes.
///
/// Concrete models embed one and hand it out through
/// [`MobilityModel::core`] / [`MobilityModel::core_mut`].
#[derive(Debug, Default)]
pub struct MobilityCore {
    pub role:      RoleAttributes,
    course_change: CourseChangeTrace,
}

impl MobilityCore {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn course_change(&self) -> &CourseChangeTrace {
        &self.course_change
    }

    #[inline]
    pub fn course_change_mut(&mut self) -> &mut CourseChangeTrace {
        &mut self.course_change
    }
}

/// Uniform position/velocity access over any motion algorithm.
///
/// # Required methods
///
/// A model supplies its embedded [`MobilityCore`] plus three primitives:
/// [`position`][Self::position], [`set_position`][Self::set_position] and
/// [`velocity`][Self::velocity].  [`assign_streams`][Self::assign_streams]
/// and [`update`][Self::update] default to no-ops for models without
/// randomness or time-driven motion.
///
/// # Notification
///
/// The trait never notifies on its own.  Any method that mutates position or
/// velocity (including `set_position`) must end with
/// [`notify_course_change`][Self::notify_course_change], once per mutation
/// it wants observers to see.
///
/// # Velocity
///
/// `velocity` is the model's best differential estimate, not a guaranteed
/// derivative of `position`.  Models with unmodelled motion may report zero.
pub trait MobilityModel {
    fn core(&self) -> &MobilityCore;

    fn core_mut(&mut self) -> &mut MobilityCore;

    /// Current position.  No side effects.
    fn position(&self) -> Vector;

    /// Relocate.  May reset internal timers or trajectories; implementations
    /// that cannot be repositioned document their own behaviour.
    fn set_position(&mut self, position: Vector);

    /// Current velocity estimate.  No side effects and no setter on the
    /// contract: velocity is always derived by the model.
    fn velocity(&self) -> Vector;

    /// Bind every internal random source to a stream index starting at
    /// `start` and return how many indices were consumed.
    ///
    /// Setup-phase only, called once before any draw.  Calling twice with
    /// overlapping ranges breaks uniqueness and is not detected.
    fn assign_streams(&mut self, _start: i64) -> i64 {
        0
    }

    /// Advance internal motion to `now`.  Invoked by the external scheduler.
    fn update(&mut self, _now: SimTime) {}

    /// Short label for logs.
    fn name(&self) -> &'static str {
        "MobilityModel"
    }

    // ── Provided ──────────────────────────────────────────────────────────

    /// Run every course-change sink with `self`, in connection order.
    fn notify_course_change(&self)
    where
        Self: Sized,
    {
        self.core().course_change().notify(self);
    }

    fn connect_course_change(&mut self, sink: CourseChangeCallback) -> SinkId {
        self.core_mut().course_change_mut().connect_boxed(sink)
    }

    fn disconnect_course_change(&mut self, id: SinkId) -> bool {
        self.core_mut().course_change_mut().disconnect(id)
    }

    /// See [`geometry::distance_from`].
    fn distance_from(&self, other: &dyn MobilityModel) -> f64 {
        geometry::distance_from(self, other)
    }

    /// See [`geometry::angle_from`].
    fn angle_from(&self, other: &dyn MobilityModel) -> f64 {
        geometry::angle_from(self, other)
    }

    /// See [`geometry::relative_speed`].
    fn relative_speed(&self, other: &dyn MobilityModel) -> f64 {
        geometry::relative_speed(self, other)
    }

    fn role(&self) -> RoleAttributes {
        self.core().role
    }

    fn is_terminal(&self) -> bool {
        self.core().role.is_terminal
    }

    fn set_is_terminal(&mut self, is_terminal: bool) {
        self.core_mut().role.is_terminal = is_terminal;
    }

    fn entity_id(&self) -> EntityId {
        self.core().role.entity_id
    }

    fn set_entity_id(&mut self, id: EntityId) {
        self.core_mut().role.entity_id = id;
    }
}
