//! Builder for creating and configuring Session instances.

use std::path::{Path, PathBuf};

use log::info;

use super::Session;
use crate::{
    error::{IoResultExt, Result},
    store::PlanStore,
};

/// Builder for creating and configuring Session instances.
#[derive(Debug, Clone, Default)]
pub struct SessionBuilder {
    playbook_dir: Option<PathBuf>,
    operation_name: Option<String>,
    import_path: Option<PathBuf>,
}

impl SessionBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the directory exported playbooks are written to.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/narrative-planner/` or
    /// `~/.local/share/narrative-planner/`
    pub fn with_playbook_dir<P: AsRef<Path>>(mut self, dir: Option<P>) -> Self {
        if let Some(dir) = dir {
            self.playbook_dir = Some(dir.as_ref().to_path_buf());
        }
        self
    }

    /// Sets the operation name of the initial plan.
    pub fn with_operation_name(mut self, name: Option<String>) -> Self {
        if let Some(name) = name {
            self.operation_name = Some(name);
        }
        self
    }

    /// Imports the given playbook file when the session is built.
    pub fn with_import<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.import_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Builds the configured session.
    ///
    /// An imported playbook is applied after the operation name, so its
    /// name wins.
    ///
    /// # Errors
    ///
    /// Returns `PlaybookError::FileSystem` if the playbook directory cannot
    /// be created or the import file cannot be read
    /// Returns `PlaybookError::Parse` or `PlaybookError::InvalidDocument` if
    /// the import file is not a playbook
    pub fn build(self) -> Result<Session> {
        if let Some(dir) = &self.playbook_dir {
            std::fs::create_dir_all(dir).at_path(dir)?;
        }

        let mut store = PlanStore::new();
        if let Some(name) = self.operation_name {
            store.set_operation_name(name);
        }

        let mut session = Session {
            store,
            playbook_dir: self.playbook_dir,
        };
        if let Some(path) = self.import_path {
            session.load(&path)?;
        }

        info!(
            "session started for '{}'",
            session.store().operation_name()
        );
        Ok(session)
    }
}
