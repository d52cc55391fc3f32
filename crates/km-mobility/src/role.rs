//! Role and identity carried on every model for downstream radio logic.
//!
//! Nothing in this crate interprets these fields.  Propagation-loss code
//! reads them to pick an asymmetric model (terminal ↔ infrastructure) and to
//! key per-link state.

use km_core::EntityId;

/// Role flag plus caller-assigned identifier.
///
/// Set once during scenario setup and treated as immutable afterwards.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoleAttributes {
    /// `true` for a mobile terminal, `false` for fixed infrastructure.
    pub is_terminal: bool,

    /// Terminal identity when `is_terminal`, otherwise a cell/site identity.
    pub entity_id: EntityId,
}

impl RoleAttributes {
    pub fn infrastructure(entity_id: u64) -> Self {
        Self { is_terminal: false, entity_id: EntityId(entity_id) }
    }
}

impl Default for RoleAttributes {
    fn default() -> Self {
        Self { is_terminal: true, entity_id: EntityId(0) }
    }
}
