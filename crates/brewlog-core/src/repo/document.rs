//! Raw stored documents.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

use crate::error::{Error, InvalidInputError};
use crate::types::RecordId;

/// The body of a stored document.
///
/// Guaranteed to be a JSON object; nothing else about its shape is assumed.
/// Interpretation is left to the normalizer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DocumentBody(Map<String, Value>);

impl DocumentBody {
    /// Create a body from a JSON value.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is not a JSON object.
    pub fn new(value: Value) -> Result<Self, Error> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            _ => Err(InvalidInputError::Document {
                reason: "document body must be a JSON object".to_string(),
            }
            .into()),
        }
    }

    /// Create a body from an existing JSON map.
    pub fn from_map(map: Map<String, Value>) -> Self {
        Self(map)
    }

    /// Get a field from the body.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Set a field, returning the previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: Value) -> Option<Value> {
        self.0.insert(key.into(), value)
    }

    /// Borrow the underlying map.
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Consume and return the body as a JSON value.
    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }
}

impl Serialize for DocumentBody {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for DocumentBody {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        DocumentBody::new(value).map_err(serde::de::Error::custom)
    }
}

/// A document as returned by a store adapter.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    /// Store-assigned identifier.
    pub id: RecordId,
    /// Raw body.
    pub body: DocumentBody,
}

impl Document {
    pub fn new(id: RecordId, body: DocumentBody) -> Self {
        Self { id, body }
    }
}
