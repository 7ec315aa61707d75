use thiserror::Error;

/// A field accessor refused to produce a value.
///
/// Accessors generated by [`bean_fields!`](crate::bean_fields) never fail; hand-written
/// accessors use this to signal that a field is not readable on the given entity.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("field `{field}` is not readable: {reason}")]
pub struct FieldAccessError {
    pub field: String,
    pub reason: String,
}

impl FieldAccessError {
    pub fn new(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ParameterSourceError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Invalid argument: could not read field `{field}`")]
    FieldAccess {
        field: String,
        #[source]
        source: FieldAccessError,
    },

    #[error("Invalid time zone: {0}")]
    InvalidZone(String),

    #[error("Temporal out of range: {instant} has no wall clock in zone {zone}")]
    TemporalOutOfRange { instant: String, zone: String },
}

impl ParameterSourceError {
    /// Whether this error reports caller misuse (as opposed to bad configuration).
    #[must_use]
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            ParameterSourceError::InvalidArgument(_) | ParameterSourceError::FieldAccess { .. }
        )
    }
}

impl From<FieldAccessError> for ParameterSourceError {
    fn from(err: FieldAccessError) -> Self {
        ParameterSourceError::FieldAccess {
            field: err.field.clone(),
            source: err,
        }
    }
}
