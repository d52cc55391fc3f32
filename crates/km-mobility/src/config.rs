//! Statically typed per-entity configuration.

use km_core::{EntityId, Vector};
use tracing::debug;

use crate::{MobilityModel, MobilityResult, RoleAttributes, attributes};

/// Initial position and role for one entity.
///
/// Typically deserialized from a scenario file (with the `serde` feature)
/// and applied once before the simulation starts.  Missing fields take the
/// defaults listed on each field.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MobilityConfig {
    /// Starting position.  Default: origin.
    pub position: Vector,

    /// Role flag.  Default: `true` (terminal).
    pub is_terminal: bool,

    /// Caller-assigned identity.  Default: `0`.
    pub entity_id: u64,
}

impl Default for MobilityConfig {
    fn default() -> Self {
        let role = RoleAttributes::default();
        Self {
            position:    Vector::ZERO,
            is_terminal: role.is_terminal,
            entity_id:   role.entity_id.get(),
        }
    }
}

impl MobilityConfig {
    /// Write role, identity, then position into `model`.
    ///
    /// Position goes last so any course-change sinks already connected see
    /// the final role and identity.
    pub fn apply_to(&self, model: &mut dyn MobilityModel) {
        debug!(
            model       = model.name(),
            position    = %self.position,
            is_terminal = self.is_terminal,
            entity_id   = self.entity_id,
            "applying mobility config"
        );
        model.set_is_terminal(self.is_terminal);
        model.set_entity_id(EntityId(self.entity_id));
        model.set_position(self.position);
    }

    /// Snapshot the configurable state of `model`.
    pub fn from_model(model: &dyn MobilityModel) -> Self {
        Self {
            position:    model.position(),
            is_terminal: model.is_terminal(),
            entity_id:   model.entity_id().get(),
        }
    }

    /// Apply `name=value` overrides (e.g. from a command line) on top of
    /// this config, validating each through the attribute table.
    ///
    /// Overrides are applied to a scratch model, so a failure leaves `self`
    /// untouched.
    pub fn with_overrides<'a, I>(&self, overrides: I) -> MobilityResult<Self>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut scratch = crate::ConstantPositionModel::new(self.position);
        scratch.set_is_terminal(self.is_terminal);
        scratch.set_entity_id(EntityId(self.entity_id));
        for (name, value) in overrides {
            attributes::set_attribute_str(&mut scratch, name, value)?;
        }
        Ok(Self::from_model(&scratch))
    }
}
