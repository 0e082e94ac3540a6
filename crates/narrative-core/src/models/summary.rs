//! Plan summary model for compact overviews.

use serde::{Deserialize, Serialize};

use super::{Entry, PackageStatus, Plan};

/// Narrative count for one phase.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PhaseSummary {
    /// Phase name
    pub name: String,

    /// Number of narratives in the phase (zero for a malformed phase)
    pub narratives: usize,

    /// Whether the phase itself could not be decoded on import
    pub malformed: bool,
}

/// Represents a plan summary with per-phase counts and package progress.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlanSummary {
    /// Operation name of the plan
    pub operation_name: String,

    /// Phases in display order
    pub phases: Vec<PhaseSummary>,

    /// Narratives without a response package
    pub not_started: usize,

    /// Narratives per package status, in [`PackageStatus::ALL`] order
    pub by_status: Vec<(PackageStatus, usize)>,

    /// Narratives or packages that could not be decoded on import
    pub malformed: usize,
}

impl PlanSummary {
    /// Total number of narratives across all phases.
    pub fn total_narratives(&self) -> usize {
        self.phases.iter().map(|phase| phase.narratives).sum()
    }
}

impl From<&Plan> for PlanSummary {
    fn from(plan: &Plan) -> Self {
        let mut not_started = 0;
        let mut malformed = 0;
        let mut by_status: Vec<(PackageStatus, usize)> =
            PackageStatus::ALL.iter().map(|status| (*status, 0)).collect();
        let mut phases = Vec::with_capacity(plan.phases.len());

        for (name, phase) in &plan.phases {
            let Entry::Valid(phase) = phase else {
                phases.push(PhaseSummary {
                    name: name.clone(),
                    narratives: 0,
                    malformed: true,
                });
                continue;
            };

            for (_, narrative) in phase {
                match narrative {
                    Entry::Valid(narrative) => match &narrative.response_package {
                        None => not_started += 1,
                        Some(Entry::Valid(package)) => {
                            if let Some(slot) =
                                by_status.iter_mut().find(|(status, _)| *status == package.status)
                            {
                                slot.1 += 1;
                            }
                        }
                        Some(Entry::Malformed { .. }) => malformed += 1,
                    },
                    Entry::Malformed { .. } => malformed += 1,
                }
            }

            phases.push(PhaseSummary {
                name: name.clone(),
                narratives: phase.len(),
                malformed: false,
            });
        }

        Self {
            operation_name: plan.operation_name.clone(),
            phases,
            not_started,
            by_status,
            malformed,
        }
    }
}
