//! A stationary model: position changes only when explicitly set.

use km_core::Vector;

use crate::{MobilityCore, MobilityModel};

/// Stays where it is put.  Velocity is always zero.
#[derive(Debug, Default)]
pub struct ConstantPositionModel {
    core:     MobilityCore,
    position: Vector,
}

impl ConstantPositionModel {
    pub fn new(position: Vector) -> Self {
        Self { core: MobilityCore::new(), position }
    }
}

impl MobilityModel for ConstantPositionModel {
    fn core(&self) -> &MobilityCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut MobilityCore {
        &mut self.core
    }

    fn position(&self) -> Vector {
        self.position
    }

    fn set_position(&mut self, position: Vector) {
        self.position = position;
        self.notify_course_change();
    }

    fn velocity(&self) -> Vector {
        Vector::ZERO
    }

    fn name(&self) -> &'static str {
        "ConstantPosition"
    }
}
