//! Named-setting surface for configuration and introspection tooling.
//!
//! # Design
//!
//! The settings every model exposes are listed once in the static
//! [`ATTRIBUTES`] table.  Reads and writes go through
//! [`get_attribute`] / [`set_attribute`], which dispatch on the name and
//! check the value's kind and the entry's access mode.  The table is plain
//! data built on top of [`MobilityModel`]; the model types know nothing
//! about it.
//!
//! | Name         | Kind     | Access     | Default       |
//! |--------------|----------|------------|---------------|
//! | `Position`   | vector   | read-write | `0:0:0`       |
//! | `Velocity`   | vector   | read-only  | ignored       |
//! | `IsTerminal` | bool     | read-write | `true`        |
//! | `EntityId`   | uint64   | read-write | `0`           |

use std::fmt;

use km_core::{EntityId, Vector};
use tracing::warn;

use crate::{MobilityError, MobilityModel, MobilityResult};

/// Value carried through the named-setting surface.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum AttributeValue {
    Vector(Vector),
    Bool(bool),
    Uint(u64),
}

impl AttributeValue {
    pub fn kind(self) -> AttributeKind {
        match self {
            AttributeValue::Vector(_) => AttributeKind::Vector,
            AttributeValue::Bool(_)   => AttributeKind::Bool,
            AttributeValue::Uint(_)   => AttributeKind::Uint,
        }
    }
}

impl fmt::Display for AttributeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttributeValue::Vector(v) => write!(f, "{v}"),
            AttributeValue::Bool(b)   => write!(f, "{b}"),
            AttributeValue::Uint(n)   => write!(f, "{n}"),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum AttributeKind {
    Vector,
    Bool,
    Uint,
}

impl AttributeKind {
    pub fn as_str(self) -> &'static str {
        match self {
            AttributeKind::Vector => "vector",
            AttributeKind::Bool   => "bool",
            AttributeKind::Uint   => "uint64",
        }
    }

    /// Parse `text` into a value of this kind.
    ///
    /// Vectors use `x:y:z`, booleans accept `true`/`false`/`1`/`0`, and
    /// integers must fit an unsigned 64-bit range.
    pub fn parse(self, text: &str) -> Option<AttributeValue> {
        let text = text.trim();
        match self {
            AttributeKind::Vector => text.parse().ok().map(AttributeValue::Vector),
            AttributeKind::Bool => match text.to_ascii_lowercase().as_str() {
                "true" | "1"  => Some(AttributeValue::Bool(true)),
                "false" | "0" => Some(AttributeValue::Bool(false)),
                _             => None,
            },
            AttributeKind::Uint => text.parse().ok().map(AttributeValue::Uint),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Access {
    ReadWrite,
    ReadOnly,
}

/// One entry of the attribute table.
#[derive(Copy, Clone, Debug)]
pub struct AttributeInfo {
    pub name:    &'static str,
    pub help:    &'static str,
    pub kind:    AttributeKind,
    pub access:  Access,
    /// Initial value.  Reported for `Velocity` but never applied.
    pub default: AttributeValue,
}

pub const ATTRIBUTES: [AttributeInfo; 4] = [
    AttributeInfo {
        name:    "Position",
        help:    "The current position of the mobility model.",
        kind:    AttributeKind::Vector,
        access:  Access::ReadWrite,
        default: AttributeValue::Vector(Vector::ZERO),
    },
    AttributeInfo {
        name:    "Velocity",
        help:    "The current velocity of the mobility model.",
        kind:    AttributeKind::Vector,
        access:  Access::ReadOnly,
        default: AttributeValue::Vector(Vector::ZERO),
    },
    AttributeInfo {
        name:    "IsTerminal",
        help:    "Whether this entity is a mobile terminal (true) or fixed infrastructure (false).",
        kind:    AttributeKind::Bool,
        access:  Access::ReadWrite,
        default: AttributeValue::Bool(true),
    },
    AttributeInfo {
        name:    "EntityId",
        help:    "Terminal identity when IsTerminal, otherwise the infrastructure cell identity.",
        kind:    AttributeKind::Uint,
        access:  Access::ReadWrite,
        default: AttributeValue::Uint(0),
    },
];

/// Find the table entry for `name` (exact, case-sensitive).
pub fn lookup(name: &str) -> Option<&'static AttributeInfo> {
    ATTRIBUTES.iter().find(|a| a.name == name)
}

fn lookup_or_err(name: &str) -> MobilityResult<&'static AttributeInfo> {
    lookup(name).ok_or_else(|| MobilityError::UnknownAttribute(name.to_owned()))
}

/// Read the current value of `name` from `model`.
pub fn get_attribute(model: &dyn MobilityModel, name: &str) -> MobilityResult<AttributeValue> {
    let info = lookup_or_err(name)?;
    Ok(match info.name {
        "Position"   => AttributeValue::Vector(model.position()),
        "Velocity"   => AttributeValue::Vector(model.velocity()),
        "IsTerminal" => AttributeValue::Bool(model.is_terminal()),
        "EntityId"   => AttributeValue::Uint(model.entity_id().get()),
        other        => return Err(MobilityError::UnknownAttribute(other.to_owned())),
    })
}

/// Write `value` into `name` on `model`.
///
/// # Errors
///
/// `UnknownAttribute` for names outside the table, `ReadOnlyAttribute` for
/// `Velocity`, `TypeMismatch` when `value` has the wrong kind.
pub fn set_attribute(
    model: &mut dyn MobilityModel,
    name:  &str,
    value: AttributeValue,
) -> MobilityResult<()> {
    let info = lookup_or_err(name)?;
    if info.access == Access::ReadOnly {
        warn!(attribute = info.name, "rejected write to read-only attribute");
        return Err(MobilityError::ReadOnlyAttribute(info.name));
    }
    match (info.name, value) {
        ("Position", AttributeValue::Vector(v))  => model.set_position(v),
        ("IsTerminal", AttributeValue::Bool(b))  => model.set_is_terminal(b),
        ("EntityId", AttributeValue::Uint(n))    => model.set_entity_id(EntityId(n)),
        _ => {
            warn!(attribute = info.name, got = value.kind().as_str(), "rejected attribute write");
            return Err(MobilityError::TypeMismatch {
                name:     info.name,
                expected: info.kind.as_str(),
            });
        }
    }
    Ok(())
}

/// Parse `text` according to the attribute's kind, then write it.
pub fn set_attribute_str(model: &mut dyn MobilityModel, name: &str, text: &str) -> MobilityResult<()> {
    let info = lookup_or_err(name)?;
    let value = info.kind.parse(text).ok_or_else(|| {
        warn!(attribute = info.name, value = text, "unparseable attribute value");
        MobilityError::InvalidValue { name: info.name, value: text.to_owned() }
    })?;
    set_attribute(model, info.name, value)
}
