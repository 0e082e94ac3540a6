//! Phase operations for the PlanStore.

use log::{debug, warn};

use super::{phase_location, PlanStore};
use crate::{
    error::{PlaybookError, Result},
    models::{Entry, Phase, PhaseName},
};

impl PlanStore {
    /// Append a new empty phase named `Phase <n>` and return its name.
    ///
    /// The generated name is not checked against existing phases: when a
    /// phase of that name already exists (for example after an import) its
    /// contents are replaced by the empty phase, keeping its position.
    pub fn add_phase(&mut self) -> PhaseName {
        let name = self.next_phase_name();
        if let Some(previous) = self.plan.phases.insert(name.clone(), Entry::Valid(Phase::new())) {
            let lost = previous.valid().map_or(0, Phase::len);
            warn!("generated phase name '{name}' collided with an existing phase; {lost} narrative(s) replaced");
            if let Entry::Valid(previous) = &previous {
                for (id, _) in previous {
                    self.invalidate_cursor(id.as_str());
                }
            }
        }
        debug!("added phase '{name}'");
        name
    }

    /// Permanently delete a phase with all of its narratives and their
    /// response packages, returning the removed phase.
    ///
    /// # Errors
    ///
    /// * `PlaybookError::PreconditionFailed` - When the plan has exactly one
    ///   phase, whichever phase is named
    /// * `PlaybookError::PhaseNotFound` - When `name` is not a current phase
    pub fn remove_phase(&mut self, name: &str) -> Result<Entry<Phase>> {
        if self.plan.phases.len() <= 1 {
            return Err(PlaybookError::precondition(
                "a plan must keep at least one phase",
            ));
        }

        let removed = self
            .plan
            .phases
            .shift_remove(name)
            .ok_or_else(|| PlaybookError::phase_not_found(name))?;

        if let Entry::Valid(phase) = &removed {
            for (id, _) in phase {
                self.invalidate_cursor(id.as_str());
            }
        }
        debug!("removed phase '{name}'");
        Ok(removed)
    }

    /// Phase names in display order.
    pub fn phase_names(&self) -> impl Iterator<Item = &PhaseName> {
        self.plan.phases.keys()
    }

    pub fn phase_count(&self) -> usize {
        self.plan.phases.len()
    }

    /// Look up a phase by name.
    ///
    /// # Errors
    ///
    /// * `PlaybookError::PhaseNotFound` - When `name` is not a current phase
    /// * `PlaybookError::MalformedEntry` - When the imported phase is not a
    ///   narrative map
    pub fn phase(&self, name: &str) -> Result<&Phase> {
        self.plan
            .phases
            .get(name)
            .ok_or_else(|| PlaybookError::phase_not_found(name))?
            .get(|| phase_location(name))
    }

    pub(crate) fn phase_mut(&mut self, name: &str) -> Result<&mut Phase> {
        self.plan
            .phases
            .get_mut(name)
            .ok_or_else(|| PlaybookError::phase_not_found(name))?
            .get_mut(|| phase_location(name))
    }
}
