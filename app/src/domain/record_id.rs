//! Backend record identifiers.
//!
//! The backend issues opaque string identifiers (document ids). The client
//! never interprets them beyond requiring a non-blank value.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Validation errors returned by [`RecordId::new`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RecordIdValidationError {
    /// The id was blank once trimmed.
    #[error("record id must not be empty")]
    Empty,
    /// The id carried leading or trailing whitespace.
    #[error("record id must not contain surrounding whitespace")]
    Padded,
}

/// Opaque identifier of a backend record (vendor, booking, task, ...).
///
/// # Examples
/// ```
/// use vendor_app::domain::RecordId;
///
/// let id = RecordId::new("65f1c0ffee").expect("valid id");
/// assert_eq!(id.as_ref(), "65f1c0ffee");
/// assert!(RecordId::new("  ").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RecordId(String);

impl RecordId {
    /// Validate and construct a [`RecordId`].
    pub fn new(id: impl Into<String>) -> Result<Self, RecordIdValidationError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(RecordIdValidationError::Empty);
        }
        if id.trim() != id {
            return Err(RecordIdValidationError::Padded);
        }
        Ok(Self(id))
    }
}

impl AsRef<str> for RecordId {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<RecordId> for String {
    fn from(value: RecordId) -> Self {
        value.0
    }
}

impl TryFrom<String> for RecordId {
    type Error = RecordIdValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl std::str::FromStr for RecordId {
    type Err = RecordIdValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::new(value)
    }
}
