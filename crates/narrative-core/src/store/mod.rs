//! In-memory plan store.
//!
//! [`PlanStore`] owns one [`Plan`] for the lifetime of a session together
//! with the session-local state that is never exported: the two identifier
//! counters and the response package edit cursor. Every operation is a
//! single synchronous edit; a failing operation leaves the plan unchanged.
//!
//! ## Submodules
//!
//! - [`phase_ops`]: add/remove phases and phase queries
//! - [`narrative_ops`]: add/edit/remove narratives and global lookup
//! - [`package_ops`]: response package editing and the edit cursor
//! - [`document`]: export to and import from the playbook document
//!
//! # Examples
//!
//! ```rust
//! use narrative_core::{models::DEFAULT_PHASE_NAME, PlanStore};
//!
//! let mut store = PlanStore::new();
//! let id = store.add_narrative(DEFAULT_PHASE_NAME)?;
//! assert_eq!(id.as_str(), "narr_1");
//!
//! store.open_response_package_editor(id.as_str())?;
//! assert_eq!(store.editing(), Some(&id));
//! # Ok::<(), narrative_core::PlaybookError>(())
//! ```

use log::debug;

use crate::models::{NarrativeId, Plan, PlanSummary};

pub mod document;
pub mod narrative_ops;
pub mod package_ops;
pub mod phase_ops;


pub use document::Document;

/// Owner of the plan document and its session-local counters.
#[derive(Debug, Clone)]
pub struct PlanStore {
    plan: Plan,
    /// Last narrative sequence handed out; pre-incremented.
    next_narrative_id: u64,
    /// Last phase number handed out; pre-incremented.
    next_phase_id: u64,
    editing: Option<NarrativeId>,
}

impl PlanStore {
    /// Create a store holding the default plan.
    pub fn new() -> Self {
        Self::with_plan(Plan::default())
    }

    /// Create a store around an existing plan with fresh counters.
    ///
    /// The counters are not derived from the plan's contents.
    pub fn with_plan(plan: Plan) -> Self {
        Self {
            plan,
            next_narrative_id: 0,
            next_phase_id: 1,
            editing: None,
        }
    }

    pub fn plan(&self) -> &Plan {
        &self.plan
    }

    pub fn operation_name(&self) -> &str {
        &self.plan.operation_name
    }

    /// Replace the operation name. Empty names are allowed.
    pub fn set_operation_name(&mut self, name: impl Into<String>) {
        self.plan.operation_name = name.into();
        debug!("operation renamed to '{}'", self.plan.operation_name);
    }

    /// Narrative currently open in the response package editor, if any.
    ///
    /// The cursor is not checked against the plan; see
    /// [`PlanStore::editing_narrative`].
    pub fn editing(&self) -> Option<&NarrativeId> {
        self.editing.as_ref()
    }

    pub fn summary(&self) -> PlanSummary {
        PlanSummary::from(&self.plan)
    }

    /// Hand out the next narrative identifier.
    fn next_narrative_id(&mut self) -> NarrativeId {
        self.next_narrative_id += 1;
        NarrativeId::from_counter(self.next_narrative_id)
    }

    /// Hand out the next generated phase name.
    fn next_phase_name(&mut self) -> String {
        self.next_phase_id += 1;
        format!("Phase {}", self.next_phase_id)
    }

    /// Clear the edit cursor when it names `id`.
    fn invalidate_cursor(&mut self, id: &str) {
        if self.editing.as_ref().is_some_and(|current| current.as_str() == id) {
            debug!("edit cursor on '{id}' cleared");
            self.editing = None;
        }
    }
}

impl Default for PlanStore {
    fn default() -> Self {
        Self::new()
    }
}

fn phase_location(phase: &str) -> String {
    format!("phases.{phase}")
}

fn narrative_location(phase: &str, id: &str) -> String {
    format!("phases.{phase}.{id}")
}

fn package_location(phase: &str, id: &str) -> String {
    format!("phases.{phase}.{id}.nrp")
}
