//! Export to and import from the portable playbook document.

use jiff::Timestamp;
use log::info;
use serde::Serialize;
use serde_json::Value;

use super::PlanStore;
use crate::{
    error::{PlaybookError, Result},
    models::{Entry, Phase, Phases, Plan},
};

/// Operation name used when an imported document carries none.
pub const IMPORTED_OPERATION_NAME: &str = "Imported Operation";

/// Suffix of every exported playbook file name.
pub const PLAYBOOK_FILE_SUFFIX: &str = "_Playbook.json";

/// Snapshot of a plan in its portable form.
///
/// Counters and the edit cursor are session-local and never part of it.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Document {
    pub operation_name: String,
    pub phases: Phases,
    pub exported_on: Timestamp,
}

impl Document {
    /// Pretty-printed JSON bytes with two-space indentation.
    pub fn to_json(&self) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec_pretty(self)?)
    }

    /// The document as a JSON value, suitable for [`PlanStore::import`].
    pub fn to_value(&self) -> Result<Value> {
        Ok(serde_json::to_value(self)?)
    }
}

/// Build the export file name for an operation.
///
/// # Examples
///
/// ```rust
/// use narrative_core::store::document::playbook_file_name;
///
/// assert_eq!(playbook_file_name("Unnamed Operation"), "Unnamed_Operation_Playbook.json");
/// ```
pub fn playbook_file_name(operation_name: &str) -> String {
    format!("{}{PLAYBOOK_FILE_SUFFIX}", operation_name.replace(' ', "_"))
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

impl PlanStore {
    /// Take a snapshot of the plan stamped with the current time.
    pub fn export(&self) -> Document {
        Document {
            operation_name: self.plan.operation_name.clone(),
            phases: self.plan.phases.clone(),
            exported_on: Timestamp::now(),
        }
    }

    /// Export straight to pretty-printed JSON bytes.
    pub fn export_json(&self) -> Result<Vec<u8>> {
        self.export().to_json()
    }

    /// File name the current plan exports under.
    pub fn export_file_name(&self) -> String {
        playbook_file_name(&self.plan.operation_name)
    }

    /// Replace the operation name and phases with those of `document`.
    ///
    /// `operation_name` falls back to `"Imported Operation"` when missing or
    /// not a string; `phases` falls back to the single default phase when
    /// missing, not an object, or empty. Phases, narratives and response
    /// packages are taken as they are: entries of an unexpected shape are
    /// kept verbatim and only rejected when an operation touches them. Keys
    /// a narrative or package carries beyond its known fields are kept and
    /// exported again.
    /// `exported_on` and any other keys are ignored.
    ///
    /// The edit cursor is cleared. The identifier counters keep their
    /// in-session values, so later generated ids and phase names may collide
    /// with imported ones.
    ///
    /// # Errors
    ///
    /// * `PlaybookError::InvalidDocument` - When `document` is not an object;
    ///   the plan is left unchanged
    pub fn import(&mut self, document: Value) -> Result<()> {
        let mut fields = match document {
            Value::Object(fields) => fields,
            other => {
                return Err(PlaybookError::InvalidDocument {
                    reason: format!("expected an object, found {}", kind_of(&other)),
                })
            }
        };

        let operation_name = match fields.remove("operation_name") {
            Some(Value::String(name)) => name,
            _ => IMPORTED_OPERATION_NAME.to_string(),
        };

        let phases = match fields.remove("phases") {
            Some(phases @ Value::Object(_)) => serde_json::from_value::<Phases>(phases)?,
            _ => Plan::default_phases(),
        };
        let phases = if phases.is_empty() {
            Plan::default_phases()
        } else {
            phases
        };

        let narratives: usize = phases
            .values()
            .filter_map(Entry::valid)
            .map(Phase::len)
            .sum();
        info!(
            "imported playbook '{operation_name}' with {} phase(s) and {narratives} narrative(s)",
            phases.len()
        );

        self.plan = Plan {
            operation_name,
            phases,
        };
        self.editing = None;
        Ok(())
    }

    /// Parse `bytes` as JSON and import it.
    ///
    /// # Errors
    ///
    /// * `PlaybookError::Parse` - When `bytes` is not well-formed JSON
    /// * `PlaybookError::InvalidDocument` - When the JSON is not an object
    ///
    /// The plan is left unchanged on failure.
    pub fn import_json(&mut self, bytes: &[u8]) -> Result<()> {
        let document: Value = serde_json::from_slice(bytes)?;
        self.import(document)
    }
}
