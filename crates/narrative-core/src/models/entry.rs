//! Lazily validated entries of an imported document.
//!
//! Imports accept any structurally plausible document. Each phase, narrative
//! and response package is decoded on the way in; when decoding fails the raw
//! JSON is kept as-is so it survives a later export, and the error only
//! surfaces once an operation needs the decoded fields.

use serde::{de::DeserializeOwned, Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::error::{PlaybookError, Result};

/// A decoded value, or the raw JSON that could not be decoded.
#[derive(Debug, Clone, PartialEq)]
pub enum Entry<T> {
    Valid(T),
    Malformed { raw: Value, reason: String },
}

impl<T> Entry<T> {
    pub fn valid(&self) -> Option<&T> {
        match self {
            Entry::Valid(value) => Some(value),
            Entry::Malformed { .. } => None,
        }
    }

    pub fn is_malformed(&self) -> bool {
        matches!(self, Entry::Malformed { .. })
    }

    /// Borrow the decoded value, reporting `location` when it is malformed.
    pub fn get(&self, location: impl FnOnce() -> String) -> Result<&T> {
        match self {
            Entry::Valid(value) => Ok(value),
            Entry::Malformed { reason, .. } => {
                Err(PlaybookError::malformed(location()).with_reason(reason.clone()))
            }
        }
    }

    /// Mutably borrow the decoded value, reporting `location` when it is
    /// malformed.
    pub fn get_mut(&mut self, location: impl FnOnce() -> String) -> Result<&mut T> {
        match self {
            Entry::Valid(value) => Ok(value),
            Entry::Malformed { reason, .. } => {
                Err(PlaybookError::malformed(location()).with_reason(reason.clone()))
            }
        }
    }
}

impl<T> From<T> for Entry<T> {
    fn from(value: T) -> Self {
        Entry::Valid(value)
    }
}

impl<T: Serialize> Serialize for Entry<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Entry::Valid(value) => value.serialize(serializer),
            Entry::Malformed { raw, .. } => raw.serialize(serializer),
        }
    }
}

impl<'de, T: DeserializeOwned> Deserialize<'de> for Entry<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = Value::deserialize(deserializer)?;
        Ok(match serde_json::from_value::<T>(raw.clone()) {
            Ok(value) => Entry::Valid(value),
            Err(e) => Entry::Malformed {
                raw,
                reason: e.to_string(),
            },
        })
    }
}
