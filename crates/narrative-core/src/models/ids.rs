//! Identifier types for phases and narratives.

use std::{borrow::Borrow, fmt};

use serde::{Deserialize, Serialize};

/// Prefix of every generated narrative identifier.
pub const NARRATIVE_ID_PREFIX: &str = "narr_";

/// Phases are identified by their display name.
pub type PhaseName = String;

/// Identifier of a narrative, unique across every phase of a plan.
///
/// Generated identifiers have the form `narr_<n>`. Imported documents may
/// carry arbitrary strings as keys, so the numeric suffix is optional.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NarrativeId(String);

impl NarrativeId {
    /// Build the identifier for the `n`-th generated narrative.
    pub fn from_counter(n: u64) -> Self {
        Self(format!("{NARRATIVE_ID_PREFIX}{n}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Numeric suffix of a generated identifier (`narr_7` → `7`).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use narrative_core::models::NarrativeId;
    ///
    /// assert_eq!(NarrativeId::from_counter(7).sequence(), Some(7));
    /// assert_eq!(NarrativeId::from("custom").sequence(), None);
    /// ```
    pub fn sequence(&self) -> Option<u64> {
        self.0
            .strip_prefix(NARRATIVE_ID_PREFIX)
            .and_then(|n| n.parse().ok())
    }
}

impl fmt::Display for NarrativeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NarrativeId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for NarrativeId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl Borrow<str> for NarrativeId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for NarrativeId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
