//! Record identifier type.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, InvalidInputError};

/// A store-assigned record identifier.
///
/// Opaque to the access layer, but restricted to characters that are safe as
/// a file name so any adapter can use it as a key. Ordering is plain string
/// ordering and is used to break sort ties.
///
/// # Example
///
/// ```
/// use brewlog_core::RecordId;
///
/// let id = RecordId::new("0b9f3c2e8d1a4c7fa1d2e3f4a5b6c7d8").unwrap();
/// assert_eq!(id.as_str(), "0b9f3c2e8d1a4c7fa1d2e3f4a5b6c7d8");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RecordId(String);

impl RecordId {
    /// Create a new record id, validating the format.
    ///
    /// # Errors
    ///
    /// Returns an error if the id is empty, too long, `.`/`..`, or contains a
    /// character outside `a-z A-Z 0-9 . - _ ~`.
    pub fn new(s: impl Into<String>) -> Result<Self, Error> {
        let s = s.into();
        Self::validate(&s)?;
        Ok(Self(s))
    }

    /// Returns the id string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn validate(s: &str) -> Result<(), Error> {
        let reason = if s.is_empty() {
            Some("cannot be empty".to_string())
        } else if s.len() > 512 {
            Some("exceeds maximum length of 512 characters".to_string())
        } else if s == "." || s == ".." {
            Some("cannot be '.' or '..'".to_string())
        } else {
            s.chars()
                .find(|c| !c.is_ascii_alphanumeric() && !matches!(c, '.' | '-' | '_' | '~'))
                .map(|c| format!("contains invalid character '{}'", c))
        };

        match reason {
            Some(reason) => Err(InvalidInputError::RecordId {
                value: s.to_string(),
                reason,
            }
            .into()),
            None => Ok(()),
        }
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for RecordId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for RecordId {
    type Error = Error;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<RecordId> for String {
    fn from(id: RecordId) -> Self {
        id.0
    }
}

impl AsRef<str> for RecordId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_uuid_id() {
        let id = RecordId::new("0b9f3c2e8d1a4c7fa1d2e3f4a5b6c7d8").unwrap();
        assert_eq!(id.to_string(), "0b9f3c2e8d1a4c7fa1d2e3f4a5b6c7d8");
    }

    #[test]
    fn invalid_empty() {
        assert!(RecordId::new("").is_err());
    }

    #[test]
    fn invalid_dot() {
        assert!(RecordId::new("..").is_err());
    }

    #[test]
    fn invalid_path_separator() {
        assert!(RecordId::new("../escape").is_err());
        assert!(RecordId::new("a\\b").is_err());
    }

    #[test]
    fn orders_as_strings() {
        let a = RecordId::new("a1").unwrap();
        let b = RecordId::new("b0").unwrap();
        assert!(a < b);
    }

    #[test]
    fn deserialize_rejects_invalid() {
        let result: Result<RecordId, _> = serde_json::from_str("\"has space\"");
        assert!(result.is_err());
    }
}
