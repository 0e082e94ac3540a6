//! Core library for the narrative planner.
//!
//! A plan organizes anticipated adversary narratives into ordered phases;
//! each narrative may carry a narrative response package (press release,
//! social posts, imagery tasking and a workflow status). This crate holds
//! the in-memory plan store, the portable playbook document it exports and
//! imports, and the session that moves playbooks across the file boundary.
//!
//! # Display Architecture
//!
//! - **Domain Models** ([`models`]): Implement [`std::fmt::Display`] as
//!   markdown
//! - **Display Wrappers** ([`display`]): Operation results and contextual
//!   views such as the response package editor
//! - **Terminal Rendering**: Rich markdown output via the CLI's terminal
//!   renderer
//!
//! # Quick Start
//!
//! ```rust
//! use narrative_core::{
//!     models::{PackageStatus, ResponsePackageUpdate, DEFAULT_PHASE_NAME},
//!     PlanStore,
//! };
//!
//! let mut store = PlanStore::new();
//! store.set_operation_name("Operation Lighthouse");
//!
//! let phase = store.add_phase();
//! let id = store.add_narrative(&phase)?;
//! store.set_narrative_text(id.as_str(), "Claims the port was closed")?;
//!
//! store.ensure_response_package(id.as_str())?;
//! store.update_response_package(
//!     id.as_str(),
//!     ResponsePackageUpdate::status(PackageStatus::ForReview),
//! )?;
//!
//! let bytes = store.export_json()?;
//! let mut restored = PlanStore::new();
//! restored.import_json(&bytes)?;
//! assert_eq!(restored.plan(), store.plan());
//! assert!(restored.phase(DEFAULT_PHASE_NAME)?.is_empty());
//! # Ok::<(), narrative_core::PlaybookError>(())
//! ```

pub mod display;
pub mod error;
pub mod models;
pub mod params;
pub mod session;
pub mod store;

// Re-export commonly used types
pub use display::{CreateResult, DeleteResult, ExportResult, OperationStatus, UpdateResult};
pub use error::{PlaybookError, Result};
pub use models::{
    Entry, ImageryTask, Narrative, NarrativeId, PackageStatus, Phase, PhaseName, Plan,
    PlanSummary, ResponsePackage, ResponsePackageUpdate,
};
pub use session::{Session, SessionBuilder};
pub use store::{Document, PlanStore};
