//! Phase model definition.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::{Entry, Narrative, NarrativeId};

/// Name of the phase every new plan starts with.
pub const DEFAULT_PHASE_NAME: &str = "Phase 0: Shaping";

/// An ordered group of narratives; iteration order is display order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(transparent)]
pub struct Phase {
    narratives: IndexMap<NarrativeId, Entry<Narrative>>,
}

impl Phase {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.narratives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.narratives.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Entry<Narrative>> {
        self.narratives.get(id)
    }

    pub(crate) fn get_mut(&mut self, id: &str) -> Option<&mut Entry<Narrative>> {
        self.narratives.get_mut(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&NarrativeId, &Entry<Narrative>)> {
        self.narratives.iter()
    }

    /// Insert at the end, or overwrite in place when `id` is already present.
    /// Returns the overwritten entry.
    pub(crate) fn insert(
        &mut self,
        id: NarrativeId,
        narrative: Entry<Narrative>,
    ) -> Option<Entry<Narrative>> {
        self.narratives.insert(id, narrative)
    }

    /// Remove a narrative, keeping the order of the remaining ones.
    pub(crate) fn remove(&mut self, id: &str) -> Option<Entry<Narrative>> {
        self.narratives.shift_remove(id)
    }
}

impl<'a> IntoIterator for &'a Phase {
    type Item = (&'a NarrativeId, &'a Entry<Narrative>);
    type IntoIter = indexmap::map::Iter<'a, NarrativeId, Entry<Narrative>>;

    fn into_iter(self) -> Self::IntoIter {
        self.narratives.iter()
    }
}
