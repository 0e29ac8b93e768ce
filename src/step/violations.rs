//! Field-level validation failures.

use crate::draft::Field;
use thiserror::Error;

/// Why a field keeps its step from advancing.
///
/// These are hints for inline display; they are never raised as errors
/// from navigation.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum FieldViolation {
    #[error("{} is required", .field.label())]
    Missing { field: Field },

    #[error("{} must be a whole number", .field.label())]
    NotANumber { field: Field },

    #[error("{} must be greater than zero", .field.label())]
    NotPositive { field: Field },

    #[error("{} must be between {min} and {max}", .field.label())]
    OutOfRange { field: Field, min: i64, max: i64 },

    #[error("Add at least one entry to {}", .field.label())]
    Empty { field: Field },

    #[error("{} has an unexpected value", .field.label())]
    Invalid { field: Field },

    #[error("Provide a phone number or an email address")]
    NoContact,

    #[error("Step '{step}' is incomplete")]
    Incomplete { step: String },
}

impl FieldViolation {
    /// Field the violation points at, when it concerns a single field.
    pub fn field(&self) -> Option<Field> {
        match self {
            Self::Missing { field }
            | Self::NotANumber { field }
            | Self::NotPositive { field }
            | Self::OutOfRange { field, .. }
            | Self::Empty { field }
            | Self::Invalid { field } => Some(*field),
            Self::NoContact | Self::Incomplete { .. } => None,
        }
    }
}
