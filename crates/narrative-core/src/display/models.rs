//! Display implementations for domain models.
//!
//! Everything renders as markdown: the plan as one section per phase with a
//! card per narrative, the store as the plan followed by the response package
//! editor when one is open.

use std::fmt;

use crate::{
    models::{
        Entry, ImageryTask, Narrative, NarrativeId, PackageStatus, Phase, Plan, PlanSummary,
        ResponsePackage,
    },
    store::PlanStore,
};

impl fmt::Display for PackageStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for ImageryTask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A narrative rendered as a card inside its phase.
pub struct NarrativeCard<'a> {
    pub id: &'a NarrativeId,
    pub entry: &'a Entry<Narrative>,
}

impl fmt::Display for NarrativeCard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "### {}", self.id)?;
        writeln!(f)?;
        match self.entry {
            Entry::Valid(narrative) => {
                writeln!(f, "{}", narrative.text)?;
                writeln!(f)?;
                writeln!(f, "- NRP Status: {}", narrative.card_status())?;
            }
            Entry::Malformed { reason, .. } => {
                writeln!(f, "_Malformed narrative: {reason}_")?;
            }
        }
        writeln!(f)
    }
}

/// A phase section: heading followed by its narrative cards.
pub struct PhaseSection<'a> {
    pub name: &'a str,
    pub entry: &'a Entry<Phase>,
}

impl fmt::Display for PhaseSection<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## {}", self.name)?;
        writeln!(f)?;

        let phase = match self.entry {
            Entry::Valid(phase) => phase,
            Entry::Malformed { reason, .. } => {
                writeln!(f, "_Malformed phase: {reason}_")?;
                return writeln!(f);
            }
        };

        if phase.is_empty() {
            writeln!(f, "_No narratives in this phase._")?;
            return writeln!(f);
        }
        for (id, entry) in phase {
            write!(f, "{}", NarrativeCard { id, entry })?;
        }
        Ok(())
    }
}

impl fmt::Display for Plan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}", self.operation_name)?;
        writeln!(f)?;
        for (name, entry) in &self.phases {
            write!(f, "{}", PhaseSection { name, entry })?;
        }
        Ok(())
    }
}

impl fmt::Display for ResponsePackage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "- Status: {}", self.status)?;
        if self.imagery_tasks.is_empty() {
            writeln!(f, "- Imagery tasking: none")?;
        } else {
            let tasks: Vec<&str> = self.imagery_tasks.iter().map(ImageryTask::as_str).collect();
            writeln!(f, "- Imagery tasking: {}", tasks.join(", "))?;
        }

        writeln!(f)?;
        writeln!(f, "### Press Release")?;
        writeln!(f)?;
        if self.press_release.is_empty() {
            writeln!(f, "_Empty_")?;
        } else {
            writeln!(f, "{}", self.press_release)?;
        }

        writeln!(f)?;
        writeln!(f, "### Social Posts")?;
        writeln!(f)?;
        if self.social_posts.is_empty() {
            writeln!(f, "_Empty_")
        } else {
            writeln!(f, "{}", self.social_posts)
        }
    }
}

/// The response package editor for one narrative.
pub struct PackageEditor<'a> {
    pub id: &'a NarrativeId,
    pub narrative: &'a Narrative,
}

impl fmt::Display for PackageEditor<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## Edit Narrative Response Package ({})", self.id)?;
        writeln!(f)?;
        writeln!(f, "Editing NRP for: \"{}\"", self.narrative.preview())?;
        writeln!(f)?;
        match &self.narrative.response_package {
            Some(Entry::Valid(package)) => write!(f, "{package}"),
            Some(Entry::Malformed { reason, .. }) => {
                writeln!(f, "_Malformed response package: {reason}_")
            }
            None => writeln!(f, "_No response package yet._"),
        }
    }
}

impl fmt::Display for PlanStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.plan())?;
        if let Some((id, narrative)) = self.editing_narrative() {
            writeln!(f, "---")?;
            writeln!(f)?;
            write!(f, "{}", PackageEditor { id, narrative })?;
        }
        Ok(())
    }
}

impl fmt::Display for PlanSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}", self.operation_name)?;
        writeln!(f)?;
        writeln!(
            f,
            "{} phase(s), {} narrative(s)",
            self.phases.len(),
            self.total_narratives()
        )?;
        writeln!(f)?;

        writeln!(f, "## Phases")?;
        writeln!(f)?;
        for phase in &self.phases {
            if phase.malformed {
                writeln!(f, "- {} (malformed)", phase.name)?;
            } else {
                writeln!(f, "- {}: {} narrative(s)", phase.name, phase.narratives)?;
            }
        }

        writeln!(f)?;
        writeln!(f, "## Response Packages")?;
        writeln!(f)?;
        writeln!(f, "- Not Started: {}", self.not_started)?;
        for (status, count) in &self.by_status {
            writeln!(f, "- {status}: {count}")?;
        }
        if self.malformed > 0 {
            writeln!(f, "- Malformed: {}", self.malformed)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ResponsePackageUpdate, DEFAULT_PHASE_NAME};

    #[test]
    fn test_plan_display_lists_phases_in_order() {
        let mut store = PlanStore::new();
        store.set_operation_name("Op Display");
        let second = store.add_phase();
        store.add_narrative(&second).expect("add");

        let output = store.plan().to_string();

        assert!(output.starts_with("# Op Display\n"));
        let shaping = output.find("## Phase 0: Shaping").expect("first phase");
        let phase2 = output.find("## Phase 2").expect("second phase");
        assert!(shaping < phase2);
        assert!(output.contains("_No narratives in this phase._"));
        assert!(output.contains("### narr_1"));
        assert!(output.contains("- NRP Status: Not Started"));
    }

    #[test]
    fn test_store_display_shows_editor() {
        let mut store = PlanStore::new();
        let id = store.add_narrative(DEFAULT_PHASE_NAME).expect("add");
        store.open_response_package_editor(id.as_str()).expect("open");
        store
            .update_response_package(
                id.as_str(),
                ResponsePackageUpdate {
                    press_release: Some("We categorically deny".to_string()),
                    imagery_tasks: Some(vec![ImageryTask::OverheadShot]),
                    ..Default::default()
                },
            )
            .expect("update");

        let output = store.to_string();

        assert!(output.contains("## Edit Narrative Response Package (narr_1)"));
        assert!(output.contains("Editing NRP for: \"New adversary narrative......\""));
        assert!(output.contains("- Imagery tasking: Overhead shot"));
        assert!(output.contains("We categorically deny"));
        assert!(output.contains("- NRP Status: Draft"));

        store.close_edit();
        assert!(!store.to_string().contains("Edit Narrative Response Package"));
    }

    #[test]
    fn test_summary_display() {
        let mut store = PlanStore::new();
        let id = store.add_narrative(DEFAULT_PHASE_NAME).expect("add");
        store.add_narrative(DEFAULT_PHASE_NAME).expect("add");
        store.ensure_response_package(id.as_str()).expect("ensure");

        let output = store.summary().to_string();

        assert!(output.contains("1 phase(s), 2 narrative(s)"));
        assert!(output.contains("- Phase 0: Shaping: 2 narrative(s)"));
        assert!(output.contains("- Not Started: 1"));
        assert!(output.contains("- Draft: 1"));
    }
}
