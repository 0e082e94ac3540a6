//! Data models for plans, phases, narratives and response packages.
//!
//! The document is a tree: a [`Plan`] owns ordered phases, each [`Phase`]
//! owns ordered narratives, and each [`Narrative`] may own one
//! [`ResponsePackage`]. Imported parts of the tree are wrapped in [`Entry`]
//! so that entries with an unexpected shape are carried along instead of
//! rejected. Display implementations live in [`crate::display::models`].

pub mod entry;
pub mod ids;
pub mod narrative;
pub mod package;
pub mod phase;
pub mod plan;
pub mod requests;
pub mod summary;


pub use entry::Entry;
pub use ids::{NarrativeId, PhaseName, NARRATIVE_ID_PREFIX};
pub use narrative::{Narrative, DEFAULT_NARRATIVE_TEXT, NOT_STARTED};
pub use package::{ImageryTask, PackageStatus, ResponsePackage};
pub use phase::{Phase, DEFAULT_PHASE_NAME};
pub use plan::{Phases, Plan, DEFAULT_OPERATION_NAME};
pub use requests::ResponsePackageUpdate;
pub use summary::{PhaseSummary, PlanSummary};
