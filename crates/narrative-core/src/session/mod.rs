//! Interactive session: one plan store plus its file boundary.
//!
//! The store itself never touches the filesystem. A [`Session`] hands it
//! byte buffers read from playbook files and writes the buffers it exports,
//! placing them in the configured playbook directory.

use std::path::{Path, PathBuf};

use log::info;

use crate::{
    display::ExportResult,
    error::{IoResultExt, PlaybookError, Result},
    store::PlanStore,
};

pub mod builder;

pub use builder::SessionBuilder;

/// XDG prefix for the default playbook directory.
pub const XDG_PREFIX: &str = "narrative-planner";

/// A single user's planning session.
#[derive(Debug)]
pub struct Session {
    pub(crate) store: PlanStore,
    pub(crate) playbook_dir: Option<PathBuf>,
}

impl Session {
    pub fn store(&self) -> &PlanStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut PlanStore {
        &mut self.store
    }

    /// Path the current plan exports to when no explicit path is given:
    /// the export file name inside the playbook directory.
    ///
    /// # Errors
    ///
    /// Returns `PlaybookError::XdgDirectory` when no playbook directory was
    /// configured and the XDG data directory cannot be prepared
    pub fn default_export_path(&self) -> Result<PathBuf> {
        let file_name = self.store.export_file_name();
        match &self.playbook_dir {
            Some(dir) => Ok(dir.join(file_name)),
            None => xdg::BaseDirectories::with_prefix(XDG_PREFIX)
                .place_data_file(file_name)
                .map_err(|e| PlaybookError::XdgDirectory(e.to_string())),
        }
    }

    /// Export the plan and write it to `path`, or to
    /// [`Session::default_export_path`] when `path` is `None`.
    ///
    /// # Errors
    ///
    /// Returns `PlaybookError::FileSystem` if the file cannot be written
    pub fn save(&self, path: Option<&Path>) -> Result<ExportResult> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => self.default_export_path()?,
        };

        let document = self.store.export();
        let bytes = document.to_json()?;
        std::fs::write(&path, bytes).at_path(&path)?;

        info!("exported playbook to {}", path.display());
        Ok(ExportResult {
            path,
            exported_on: document.exported_on,
        })
    }

    /// Read a playbook file and import it, replacing the current plan.
    ///
    /// # Errors
    ///
    /// Returns `PlaybookError::FileSystem` if the file cannot be read, and
    /// the import errors of [`PlanStore::import_json`]; the plan is left
    /// unchanged on any failure
    pub fn load(&mut self, path: &Path) -> Result<()> {
        let bytes = std::fs::read(path).at_path(path)?;
        self.store.import_json(&bytes)?;
        info!("loaded playbook from {}", path.display());
        Ok(())
    }
}
