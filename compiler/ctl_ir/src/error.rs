//! Attribute assignment errors.

use thiserror::Error;

/// Why an attribute could not be assigned.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum AttributeError {
    #[error("{type_name} has no attribute `{attribute}`")]
    Unknown {
        type_name: String,
        attribute: String,
    },

    #[error("cannot convert `{literal}` to {expected} for attribute `{attribute}`")]
    Conversion {
        attribute: String,
        literal: String,
        expected: &'static str,
    },

    #[error("`{literal}` is out of range for attribute `{attribute}` ({range})")]
    OutOfRange {
        attribute: String,
        literal: String,
        range: String,
    },

    #[error("attribute `{attribute}` holds a control source, not a literal")]
    ExpectsSource { attribute: String },

    #[error("attribute `{attribute}` does not hold a control source")]
    NotASource { attribute: String },
}

impl AttributeError {
    /// The attribute the failed assignment targeted.
    pub fn attribute(&self) -> &str {
        match self {
            AttributeError::Unknown { attribute, .. }
            | AttributeError::Conversion { attribute, .. }
            | AttributeError::OutOfRange { attribute, .. }
            | AttributeError::ExpectsSource { attribute }
            | AttributeError::NotASource { attribute } => attribute,
        }
    }
}
