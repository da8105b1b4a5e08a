//! Owner identity type.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, InvalidInputError};

/// The authenticated identity that owns a record.
///
/// Supplied by whatever authenticates the caller; the access layer only
/// compares it for exact equality. Every access-layer operation takes one
/// explicitly, there is no default owner.
///
/// # Example
///
/// ```
/// use brewlog_core::OwnerId;
///
/// let owner = OwnerId::new("google-oauth2|1042").unwrap();
/// assert_eq!(owner.as_str(), "google-oauth2|1042");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct OwnerId(String);

impl OwnerId {
    /// Create a new owner id.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is empty, has surrounding whitespace, or
    /// contains control characters.
    pub fn new(s: impl Into<String>) -> Result<Self, Error> {
        let s = s.into();
        Self::validate(&s)?;
        Ok(Self(s))
    }

    /// Returns the owner id string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn validate(s: &str) -> Result<(), Error> {
        if s.is_empty() {
            return Err(InvalidInputError::OwnerId {
                value: s.to_string(),
                reason: "cannot be empty".to_string(),
            }
            .into());
        }

        if s.trim() != s {
            return Err(InvalidInputError::OwnerId {
                value: s.to_string(),
                reason: "cannot have leading or trailing whitespace".to_string(),
            }
            .into());
        }

        if s.chars().any(char::is_control) {
            return Err(InvalidInputError::OwnerId {
                value: s.to_string(),
                reason: "cannot contain control characters".to_string(),
            }
            .into());
        }

        Ok(())
    }
}

impl fmt::Display for OwnerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for OwnerId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for OwnerId {
    type Error = Error;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<OwnerId> for String {
    fn from(owner: OwnerId) -> Self {
        owner.0
    }
}

impl AsRef<str> for OwnerId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_owner() {
        let owner = OwnerId::new("u1").unwrap();
        assert_eq!(owner.as_str(), "u1");
    }

    #[test]
    fn invalid_empty() {
        assert!(OwnerId::new("").is_err());
    }

    #[test]
    fn invalid_padded() {
        assert!(OwnerId::new(" u1").is_err());
        assert!(OwnerId::new("u1\n").is_err());
    }

    #[test]
    fn comparison_is_exact() {
        assert_ne!(OwnerId::new("u1").unwrap(), OwnerId::new("U1").unwrap());
    }
}
