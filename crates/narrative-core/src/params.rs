//! Parameter structures for plan store operations
//!
//! These structures are shared by every interface (CLI, MCP) without
//! framework-specific derives. Interface layers either convert their own
//! argument types into these (`From` impls in the CLI) or deserialize them
//! directly (the MCP server, with the `schema` feature providing
//! `JsonSchema`).
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │    │   MCP Params    │    │  Core Params    │
//! │  (clap derives) │───▶│ (serde derives) │───▶│ (minimal deps)  │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```

use std::str::FromStr;

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{
    error::{PlaybookError, Result},
    models::{ImageryTask, PackageStatus},
};

/// Parameters for renaming the operation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct SetOperationName {
    /// New operation name; may be empty
    pub name: String,
}

/// Parameters for operations addressing a single phase.
///
/// Used by add_narrative and remove_phase.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct PhaseRef {
    /// Name of the phase
    pub phase: String,
}

/// Parameters for operations addressing a single narrative by its global ID.
///
/// Used by begin_edit, ensure_response_package and open_editor.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct NarrativeRef {
    /// Narrative ID, e.g. `narr_3`
    pub id: String,
}

/// Parameters for replacing a narrative's text.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct SetNarrativeText {
    /// Narrative ID, e.g. `narr_3`
    pub id: String,
    /// New narrative text
    pub text: String,
}

/// Parameters for removing a narrative from a phase.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct RemoveNarrative {
    /// Name of the phase holding the narrative
    pub phase: String,
    /// Narrative ID, e.g. `narr_3`
    pub id: String,
}

/// Parameters for a partial response package update.
///
/// Status and imagery tasks arrive as strings and are validated by
/// [`UpdateResponsePackage::validate`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct UpdateResponsePackage {
    /// Narrative ID, e.g. `narr_3`
    pub id: String,
    /// Replacement press release text
    pub press_release: Option<String>,
    /// Replacement social media posts
    pub social_posts: Option<String>,
    /// Replacement imagery tasking: any of "Overhead shot",
    /// "On-the-ground video", "Personnel interviews", "B-roll footage"
    pub imagery_tasks: Option<Vec<String>>,
    /// New status: "Draft", "For Review", "Approved" or "Executed"
    pub status: Option<String>,
}

impl UpdateResponsePackage {
    /// Validate the status and imagery task strings.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use narrative_core::{models::ImageryTask, params::UpdateResponsePackage};
    ///
    /// let params = UpdateResponsePackage {
    ///     id: "narr_1".to_string(),
    ///     imagery_tasks: Some(vec!["b-roll footage".to_string()]),
    ///     ..Default::default()
    /// };
    /// let (status, tasks) = params.validate()?;
    /// assert_eq!(status, None);
    /// assert_eq!(tasks, Some(vec![ImageryTask::BRollFootage]));
    ///
    /// let params = UpdateResponsePackage {
    ///     id: "narr_1".to_string(),
    ///     status: Some("shipped".to_string()),
    ///     ..Default::default()
    /// };
    /// assert!(params.validate().is_err());
    /// # Ok::<(), narrative_core::PlaybookError>(())
    /// ```
    pub fn validate(&self) -> Result<(Option<PackageStatus>, Option<Vec<ImageryTask>>)> {
        let status = match &self.status {
            Some(status) => Some(PackageStatus::from_str(status).map_err(|_| {
                PlaybookError::invalid_input("status").with_reason(format!(
                    "Invalid status: {status}. Must be 'Draft', 'For Review', 'Approved', or 'Executed'"
                ))
            })?),
            None => None,
        };

        let imagery_tasks = match &self.imagery_tasks {
            Some(tasks) => Some(
                tasks
                    .iter()
                    .map(|task| {
                        ImageryTask::from_str(task).map_err(|reason| {
                            PlaybookError::invalid_input("imagery_tasks").with_reason(reason)
                        })
                    })
                    .collect::<Result<Vec<_>>>()?,
            ),
            None => None,
        };

        Ok((status, imagery_tasks))
    }
}

/// Parameters for importing a playbook from its JSON text.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct ImportPlaybook {
    /// Full playbook document as JSON text
    pub document: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_package_validate_accepts_labels() {
        let params = UpdateResponsePackage {
            id: "narr_1".to_string(),
            status: Some("For Review".to_string()),
            imagery_tasks: Some(vec![
                "Overhead shot".to_string(),
                "personnel_interviews".to_string(),
            ]),
            ..Default::default()
        };

        let (status, tasks) = params.validate().expect("valid params");
        assert_eq!(status, Some(PackageStatus::ForReview));
        assert_eq!(
            tasks,
            Some(vec![
                ImageryTask::OverheadShot,
                ImageryTask::PersonnelInterviews
            ])
        );
    }

    #[test]
    fn test_update_package_validate_rejects_unknown_status() {
        let params = UpdateResponsePackage {
            id: "narr_1".to_string(),
            status: Some("pending".to_string()),
            ..Default::default()
        };

        match params.validate() {
            Err(PlaybookError::InvalidInput { field, .. }) => assert_eq!(field, "status"),
            other => panic!("Expected InvalidInput error, got {other:?}"),
        }
    }

    #[test]
    fn test_update_package_validate_rejects_unknown_task() {
        let params = UpdateResponsePackage {
            id: "narr_1".to_string(),
            imagery_tasks: Some(vec!["Drone swarm".to_string()]),
            ..Default::default()
        };

        match params.validate() {
            Err(PlaybookError::InvalidInput { field, reason }) => {
                assert_eq!(field, "imagery_tasks");
                assert!(reason.contains("Drone swarm"));
            }
            other => panic!("Expected InvalidInput error, got {other:?}"),
        }
    }

    #[test]
    fn test_update_package_validate_empty() {
        let params = UpdateResponsePackage {
            id: "narr_1".to_string(),
            ..Default::default()
        };

        assert_eq!(params.validate().expect("valid params"), (None, None));
    }
}
