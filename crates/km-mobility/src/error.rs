use km_core::CoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MobilityError {
    #[error("no attribute named {0:?}")]
    UnknownAttribute(String),

    #[error("attribute {0:?} is read-only")]
    ReadOnlyAttribute(&'static str),

    #[error("attribute {name:?} expects a {expected} value")]
    TypeMismatch {
        name:     &'static str,
        expected: &'static str,
    },

    #[error("invalid value {value:?} for attribute {name:?}")]
    InvalidValue {
        name:  &'static str,
        value: String,
    },

    #[error(transparent)]
    Core(#[from] CoreError),
}

pub type MobilityResult<T> = Result<T, MobilityError>;
