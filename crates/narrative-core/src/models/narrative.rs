//! Narrative model definition.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{Entry, PackageStatus, ResponsePackage};

/// Text given to every freshly added narrative.
pub const DEFAULT_NARRATIVE_TEXT: &str = "New adversary narrative...";

/// Card label shown for a narrative without a response package.
pub const NOT_STARTED: &str = "Not Started";

/// An anticipated adversary storyline.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Narrative {
    /// Free-form description of the storyline
    pub text: String,

    /// Response package, absent until explicitly created
    #[serde(rename = "nrp", default)]
    pub response_package: Option<Entry<ResponsePackage>>,

    /// Imported keys the planner does not model, exported unchanged
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Default for Narrative {
    fn default() -> Self {
        Self {
            text: DEFAULT_NARRATIVE_TEXT.to_string(),
            response_package: None,
            extra: Map::new(),
        }
    }
}

impl Narrative {
    /// Status of the response package, `None` when none has been started.
    ///
    /// A malformed package reports `None` here as well; its card label is
    /// produced by [`Narrative::card_status`].
    pub fn package_status(&self) -> Option<PackageStatus> {
        self.response_package
            .as_ref()
            .and_then(Entry::valid)
            .map(|package| package.status)
    }

    /// Label shown on the narrative card.
    pub fn card_status(&self) -> &'static str {
        match &self.response_package {
            None => NOT_STARTED,
            Some(Entry::Valid(package)) => package.status.as_str(),
            Some(Entry::Malformed { .. }) => "Malformed",
        }
    }

    /// Short preview of the text used as the editor heading.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use narrative_core::models::Narrative;
    ///
    /// let narrative = Narrative::default();
    /// assert_eq!(narrative.preview(), "New adversary narrative......");
    /// ```
    pub fn preview(&self) -> String {
        let head: String = self.text.chars().take(30).collect();
        format!("{head}...")
    }
}
