//! Display formatting and result types.
//!
//! Domain models implement [`std::fmt::Display`] directly (see [`models`]);
//! the wrappers here add context for a particular output such as an
//! operation result. All output is markdown, rendered by the CLI's terminal
//! renderer or returned verbatim over MCP.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │ Wrappers &      │    │   Formatted     │
//! │ (Plan, Package) │───▶│ Result Types    │───▶│    Output       │
//! │                 │    │                 │    │  (Terminal/MCP) │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`models`]: Display implementations for domain models, cards, editor
//! - [`results`]: Operation result types (CreateResult, UpdateResult,
//!   DeleteResult, ExportResult)
//! - [`status`]: Status messages (OperationStatus)
//! - [`datetime`]: Date/time formatting utilities

pub mod datetime;
pub mod models;
pub mod results;
pub mod status;

pub use datetime::LocalDateTime;
pub use models::{NarrativeCard, PackageEditor, PhaseSection};
pub use results::{CreateResult, DeleteResult, ExportResult, UpdateResult};
pub use status::OperationStatus;
