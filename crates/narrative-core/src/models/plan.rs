//! Plan model definition.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::{Entry, Phase, PhaseName, DEFAULT_PHASE_NAME};

/// Operation name of a freshly created plan.
pub const DEFAULT_OPERATION_NAME: &str = "Unnamed Operation";

/// Ordered phases of a plan, keyed by phase name.
pub type Phases = IndexMap<PhaseName, Entry<Phase>>;

/// Root of the planning document: an operation name and its ordered phases.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Plan {
    /// Free text title of the operation
    pub operation_name: String,

    /// Phases in display order; never empty
    pub phases: Phases,
}

impl Plan {
    /// The phase map every new or phase-less plan starts from.
    pub fn default_phases() -> Phases {
        let mut phases = Phases::new();
        phases.insert(DEFAULT_PHASE_NAME.to_string(), Entry::Valid(Phase::new()));
        phases
    }
}

impl Default for Plan {
    fn default() -> Self {
        Self {
            operation_name: DEFAULT_OPERATION_NAME.to_string(),
            phases: Self::default_phases(),
        }
    }
}
