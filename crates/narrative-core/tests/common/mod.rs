#![allow(dead_code)]

use narrative_core::{PlanStore, Session, SessionBuilder};
use tempfile::TempDir;

/// Helper function to create a session writing playbooks to a temp dir
pub fn create_test_session() -> (TempDir, Session) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let session = SessionBuilder::new()
        .with_playbook_dir(Some(temp_dir.path()))
        .build()
        .expect("Failed to create session");
    (temp_dir, session)
}

/// Helper function to create a store with `extra` generated phases added
/// after the default one
pub fn store_with_phases(extra: usize) -> PlanStore {
    let mut store = PlanStore::new();
    for _ in 0..extra {
        store.add_phase();
    }
    store
}
