//! Result wrapper types for displaying operation outcomes.
//!
//! These format the outcome of create, update, delete and export operations
//! with consistent messaging.

use std::{fmt, path::PathBuf};

use jiff::Timestamp;

use super::datetime::LocalDateTime;
use crate::models::{Entry, Narrative, NarrativeId, Phase, PhaseName, ResponsePackage};

/// Wrapper type for displaying the result of create operations.
///
/// # Examples
///
/// ```rust
/// use narrative_core::{display::CreateResult, models::NarrativeId};
///
/// let result = CreateResult::new(NarrativeId::from_counter(1));
/// assert_eq!(result.to_string(), "Created narrative narr_1\n");
/// ```
pub struct CreateResult<T> {
    pub resource: T,
}

impl<T> CreateResult<T> {
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for CreateResult<NarrativeId> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Created narrative {}", self.resource)
    }
}

impl fmt::Display for CreateResult<PhaseName> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Created phase '{}'", self.resource)
    }
}

/// Wrapper type for displaying the result of update operations, with the
/// list of changes that were applied.
pub struct UpdateResult<T> {
    pub id: NarrativeId,
    pub resource: T,
    pub changes: Vec<String>,
}

impl<T> UpdateResult<T> {
    pub fn with_changes(id: NarrativeId, resource: T, changes: Vec<String>) -> Self {
        Self {
            id,
            resource,
            changes,
        }
    }
}

impl fmt::Display for UpdateResult<ResponsePackage> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Updated response package for {}", self.id)?;

        if !self.changes.is_empty() {
            writeln!(f)?;
            writeln!(f, "Changes made:")?;
            for change in &self.changes {
                writeln!(f, "- {change}")?;
            }
        }

        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

/// Wrapper type for displaying the result of delete operations.
pub struct DeleteResult<T> {
    pub key: String,
    pub resource: T,
}

impl<T> DeleteResult<T> {
    pub fn new(key: impl Into<String>, resource: T) -> Self {
        Self {
            key: key.into(),
            resource,
        }
    }
}

impl fmt::Display for DeleteResult<Entry<Phase>> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.resource {
            Entry::Valid(phase) => writeln!(
                f,
                "Deleted phase '{}' and {} narrative(s)",
                self.key,
                phase.len()
            ),
            Entry::Malformed { .. } => writeln!(f, "Deleted malformed phase '{}'", self.key),
        }
    }
}

impl fmt::Display for DeleteResult<Entry<Narrative>> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.resource {
            Entry::Valid(narrative) if narrative.response_package.is_some() => writeln!(
                f,
                "Deleted narrative '{}' and its response package",
                self.key
            ),
            _ => writeln!(f, "Deleted narrative '{}'", self.key),
        }
    }
}

/// Where and when a playbook was written.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportResult {
    pub path: PathBuf,
    pub exported_on: Timestamp,
}

impl fmt::Display for ExportResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Exported playbook to {} at {}",
            self.path.display(),
            LocalDateTime(&self.exported_on)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ResponsePackageUpdate;

    #[test]
    fn test_create_result_phase() {
        let result = CreateResult::new("Phase 2".to_string());
        assert_eq!(result.to_string(), "Created phase 'Phase 2'\n");
    }

    #[test]
    fn test_update_result_lists_changes() {
        let mut package = ResponsePackage::default();
        let changes = ResponsePackageUpdate {
            social_posts: Some("Thread".to_string()),
            ..Default::default()
        }
        .apply_to(&mut package);

        let output =
            UpdateResult::with_changes(NarrativeId::from_counter(4), package, changes).to_string();

        assert!(output.starts_with("Updated response package for narr_4\n"));
        assert!(output.contains("- Updated social posts"));
        assert!(output.contains("Thread"));
    }

    #[test]
    fn test_delete_result_phase() {
        let result = DeleteResult::new("Phase 3", Entry::Valid(Phase::new()));
        assert_eq!(
            result.to_string(),
            "Deleted phase 'Phase 3' and 0 narrative(s)\n"
        );
    }

    #[test]
    fn test_delete_result_narrative_with_package() {
        let narrative = Narrative {
            response_package: Some(Entry::Valid(ResponsePackage::default())),
            ..Default::default()
        };
        let result = DeleteResult::new("narr_2", Entry::Valid(narrative));
        assert!(result.to_string().contains("and its response package"));
    }
}
