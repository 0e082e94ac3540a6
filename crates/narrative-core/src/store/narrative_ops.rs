//! Narrative operations for the PlanStore.

use log::{debug, warn};

use super::{narrative_location, PlanStore};
use crate::{
    error::{PlaybookError, Result},
    models::{Entry, Narrative, NarrativeId, Phase, PhaseName, Plan},
};

impl PlanStore {
    /// Append a narrative with the default text to `phase` and return its
    /// new identifier.
    ///
    /// Identifiers come from a session counter that is never reset. After an
    /// import the counter may hand out an identifier the document already
    /// uses; within the same phase that narrative is replaced in place.
    ///
    /// # Errors
    ///
    /// * `PlaybookError::PhaseNotFound` - When `phase` does not exist
    /// * `PlaybookError::MalformedEntry` - When the imported phase is not a
    ///   narrative map
    pub fn add_narrative(&mut self, phase: &str) -> Result<NarrativeId> {
        // Resolve the phase first so a failure does not consume an id.
        self.phase_mut(phase)?;

        let id = self.next_narrative_id();
        let collides_elsewhere = self
            .find_narrative(id.as_str())
            .is_some_and(|(owner, _)| owner != phase);

        let target = self.phase_mut(phase)?;
        if target
            .insert(id.clone(), Entry::Valid(Narrative::default()))
            .is_some()
        {
            warn!("narrative id '{id}' collided with an imported narrative in '{phase}'; replaced");
        } else if collides_elsewhere {
            warn!("narrative id '{id}' is already used by an imported narrative in another phase");
        }

        debug!("added narrative '{id}' to phase '{phase}'");
        Ok(id)
    }

    /// Replace the text of the narrative with the given global identifier.
    ///
    /// # Errors
    ///
    /// * `PlaybookError::NarrativeNotFound` - When no phase holds `id`
    /// * `PlaybookError::MalformedEntry` - When the imported narrative could
    ///   not be decoded
    pub fn set_narrative_text(&mut self, id: &str, text: impl Into<String>) -> Result<()> {
        let narrative = self.narrative_mut(id)?;
        narrative.text = text.into();
        debug!("updated text of narrative '{id}'");
        Ok(())
    }

    /// Delete a narrative and its response package from `phase`, returning
    /// the removed entry. Clears the edit cursor when it pointed at `id`.
    ///
    /// # Errors
    ///
    /// * `PlaybookError::PhaseNotFound` - When `phase` does not exist
    /// * `PlaybookError::NarrativeNotFound` - When `phase` does not hold `id`
    pub fn remove_narrative(&mut self, phase: &str, id: &str) -> Result<Entry<Narrative>> {
        let removed = self
            .phase_mut(phase)?
            .remove(id)
            .ok_or_else(|| PlaybookError::narrative_not_found(id))?;

        self.invalidate_cursor(id);
        debug!("removed narrative '{id}' from phase '{phase}'");
        Ok(removed)
    }

    /// Find a narrative anywhere in the plan, returning the phase holding it.
    ///
    /// Phases are scanned in display order and the first match wins;
    /// malformed phases are skipped.
    pub fn find_narrative(&self, id: &str) -> Option<(&PhaseName, &Entry<Narrative>)> {
        self.plan.phases.iter().find_map(|(name, phase)| {
            phase
                .valid()
                .and_then(|phase| phase.get(id))
                .map(|narrative| (name, narrative))
        })
    }

    /// Look up a decoded narrative by its global identifier.
    ///
    /// # Errors
    ///
    /// * `PlaybookError::NarrativeNotFound` - When no phase holds `id`
    /// * `PlaybookError::MalformedEntry` - When the imported narrative could
    ///   not be decoded
    pub fn narrative(&self, id: &str) -> Result<&Narrative> {
        let (phase, narrative) = self
            .find_narrative(id)
            .ok_or_else(|| PlaybookError::narrative_not_found(id))?;
        narrative.get(|| narrative_location(phase, id))
    }

    /// Total number of narratives across all decodable phases.
    pub fn narrative_count(&self) -> usize {
        self.plan
            .phases
            .values()
            .filter_map(Entry::valid)
            .map(Phase::len)
            .sum()
    }

    /// Mutable counterpart of [`PlanStore::narrative`], also reporting the
    /// owning phase.
    pub(crate) fn locate_mut(&mut self, id: &str) -> Result<(&PhaseName, &mut Narrative)> {
        locate_in(&mut self.plan, id)
    }

    fn narrative_mut(&mut self, id: &str) -> Result<&mut Narrative> {
        self.locate_mut(id).map(|(_, narrative)| narrative)
    }
}

/// Find the decoded narrative `id` and the name of the phase holding it.
pub(super) fn locate_in<'a>(
    plan: &'a mut Plan,
    id: &str,
) -> Result<(&'a PhaseName, &'a mut Narrative)> {
    let (phase, narrative) = plan
        .phases
        .iter_mut()
        .find_map(|(name, phase)| match phase {
            Entry::Valid(phase) => phase.get_mut(id).map(|narrative| (name, narrative)),
            Entry::Malformed { .. } => None,
        })
        .ok_or_else(|| PlaybookError::narrative_not_found(id))?;

    let narrative = narrative.get_mut(|| narrative_location(phase, id))?;
    Ok((phase, narrative))
}
