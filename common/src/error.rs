//! # Errors
//!
//! Carriers and parcels are validated once, at construction. A bad number is an
//! [`CapacityError::InvalidParameter`] naming the offending [`Field`] and a
//! [`Reason`] code, so callers can match on it instead of parsing messages.

use std::fmt;

use thiserror::Error;

use crate::vehicle::Kind;

/// The parameter that failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Weight,
    MaxWeight,
    Length,
    Width,
    Height,
    Volume,
    Compartments,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name: &str = match self {
            Field::Weight => "weight",
            Field::MaxWeight => "carrying weight",
            Field::Length => "length",
            Field::Width => "width",
            Field::Height => "height",
            Field::Volume => "volume",
            Field::Compartments => "compartment count",
        };
        f.write_str(name)
    }
}

/// Why a parameter was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Reason {
    /// Zero or negative.
    NotPositive,
    /// NaN or infinite.
    NotFinite,
}

impl fmt::Display for Reason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reason::NotPositive => f.write_str("must be positive"),
            Reason::NotFinite => f.write_str("must be a finite number"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum CapacityError {
    #[error("{field} {reason}, got {value}")]
    InvalidParameter {
        field: Field,
        reason: Reason,
        value: f64,
    },
    #[error("{kind} is cargo and cannot be built as a carrier")]
    NotACarrier { kind: Kind },
}

impl CapacityError {
    /// The rejected parameter, for [`CapacityError::InvalidParameter`].
    pub fn field(&self) -> Option<Field> {
        match self {
            CapacityError::InvalidParameter { field, .. } => Some(*field),
            CapacityError::NotACarrier { .. } => None,
        }
    }

    pub fn reason(&self) -> Option<Reason> {
        match self {
            CapacityError::InvalidParameter { reason, .. } => Some(*reason),
            CapacityError::NotACarrier { .. } => None,
        }
    }
}

/// Errors produced while parsing a vehicle spec string such as `wagon:8:6x2.5x3:20:5x2.4x2.5`.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SpecError {
    #[error("spec is empty")]
    Empty,
    #[error("unknown vehicle kind '{0}'")]
    UnknownKind(String),
    #[error("'{kind}' expects {expected} fields, got {got}")]
    FieldCount {
        kind: &'static str,
        expected: &'static str,
        got: usize,
    },
    #[error("invalid number '{0}'")]
    Number(String),
    #[error("invalid dimensions '{0}', expected LxWxH")]
    Dimensions(String),
    #[error(transparent)]
    Invalid(#[from] CapacityError),
}

/// Returns `value` if it is finite and strictly positive.
pub fn ensure_positive(field: Field, value: f64) -> Result<f64, CapacityError> {
    if !value.is_finite() {
        return Err(CapacityError::InvalidParameter {
            field,
            reason: Reason::NotFinite,
            value,
        });
    }
    if value <= 0.0 {
        return Err(CapacityError::InvalidParameter {
            field,
            reason: Reason::NotPositive,
            value,
        });
    }
    Ok(value)
}
