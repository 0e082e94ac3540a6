//! Response package operations and the edit cursor for the PlanStore.

use log::{debug, warn};

use super::{narrative_ops::locate_in, package_location, PlanStore};
use crate::{
    error::{PlaybookError, Result},
    models::{Entry, Narrative, NarrativeId, Plan, ResponsePackage, ResponsePackageUpdate},
};

impl PlanStore {
    /// Point the edit cursor at `id`.
    ///
    /// Existence is not checked here. A cursor naming a narrative that no
    /// longer exists resolves to nothing in
    /// [`PlanStore::editing_narrative`] and is cleared by the next package
    /// write aimed at it.
    pub fn begin_edit_response_package(&mut self, id: impl Into<NarrativeId>) {
        let id = id.into();
        debug!("editing response package of '{id}'");
        self.editing = Some(id);
    }

    /// Clear the edit cursor.
    pub fn close_edit(&mut self) {
        if let Some(id) = self.editing.take() {
            debug!("closed response package editor for '{id}'");
        }
    }

    /// Resolve the edit cursor to its narrative.
    ///
    /// Returns `None` when nothing is being edited, or when the cursor is
    /// stale or names a malformed narrative.
    pub fn editing_narrative(&self) -> Option<(&NarrativeId, &Narrative)> {
        let id = self.editing.as_ref()?;
        let (_, narrative) = self.find_narrative(id.as_str())?;
        narrative.valid().map(|narrative| (id, narrative))
    }

    /// Create an empty draft response package for `id` unless one exists.
    ///
    /// Calling this again leaves the existing package untouched.
    ///
    /// # Errors
    ///
    /// * `PlaybookError::NarrativeNotFound` - When no phase holds `id`; a
    ///   cursor naming `id` is cleared
    /// * `PlaybookError::MalformedEntry` - When the narrative or its existing
    ///   package could not be decoded on import
    pub fn ensure_response_package(&mut self, id: &str) -> Result<&ResponsePackage> {
        self.clear_if_stale(id);
        draft_package(&mut self.plan, id)
    }

    /// Apply a partial update to the response package of `id`, returning the
    /// updated package and a description of each change.
    ///
    /// # Errors
    ///
    /// * `PlaybookError::NarrativeNotFound` - When no phase holds `id`; a
    ///   cursor naming `id` is cleared
    /// * `PlaybookError::PreconditionFailed` - When the narrative has no
    ///   response package yet
    /// * `PlaybookError::MalformedEntry` - When the narrative or its package
    ///   could not be decoded on import
    pub fn update_response_package(
        &mut self,
        id: &str,
        update: ResponsePackageUpdate,
    ) -> Result<(&ResponsePackage, Vec<String>)> {
        self.clear_if_stale(id);

        let (phase, narrative) = self.locate_mut(id)?;
        let location = package_location(phase, id);
        let package = narrative
            .response_package
            .as_mut()
            .ok_or_else(|| {
                PlaybookError::precondition(format!(
                    "narrative '{id}' has no response package; open it for editing first"
                ))
            })?
            .get_mut(|| location)?;

        let changes = update.apply_to(package);
        debug!("updated response package of '{id}': {changes:?}");
        Ok((&*package, changes))
    }

    /// Open the response package editor on `id`, creating a draft package
    /// when the narrative has none.
    ///
    /// The cursor only moves when the narrative resolves.
    ///
    /// # Errors
    ///
    /// Same as [`PlanStore::ensure_response_package`].
    pub fn open_response_package_editor(&mut self, id: &str) -> Result<&ResponsePackage> {
        self.clear_if_stale(id);
        let package = draft_package(&mut self.plan, id)?;
        debug!("editing response package of '{id}'");
        self.editing = Some(NarrativeId::from(id));
        Ok(package)
    }

    /// Drop the cursor when it names `id` and `id` no longer exists.
    fn clear_if_stale(&mut self, id: &str) {
        let stale = self.editing.as_ref().is_some_and(|current| current.as_str() == id)
            && self.find_narrative(id).is_none();
        if stale {
            warn!("edit cursor on '{id}' is stale; clearing it");
            self.editing = None;
        }
    }
}

fn draft_package<'a>(plan: &'a mut Plan, id: &str) -> Result<&'a ResponsePackage> {
    let (phase, narrative) = locate_in(plan, id)?;
    let location = package_location(phase, id);
    let package = narrative.response_package.get_or_insert_with(|| {
        debug!("created draft response package for '{id}'");
        Entry::Valid(ResponsePackage::default())
    });
    package.get(|| location)
}
