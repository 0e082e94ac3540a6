//! Property-based tests for the plan store
//!
//! Tests invariants:
//! - The last phase can never be removed
//! - Generated narrative ids are distinct and increasing
//! - Export followed by import preserves the plan
//! - Ensuring a response package twice changes nothing

mod common;

use narrative_core::{
    models::DEFAULT_PHASE_NAME, ImageryTask, PackageStatus, PlanStore, PlaybookError,
    ResponsePackageUpdate,
};
use proptest::prelude::*;

// ============================================================================
// Strategies for generating test inputs
// ============================================================================

fn arb_status() -> impl Strategy<Value = PackageStatus> {
    prop_oneof![
        Just(PackageStatus::Draft),
        Just(PackageStatus::ForReview),
        Just(PackageStatus::Approved),
        Just(PackageStatus::Executed),
    ]
}

fn arb_tasks() -> impl Strategy<Value = Vec<ImageryTask>> {
    prop::collection::vec(prop::sample::select(ImageryTask::ALL.to_vec()), 0..6)
}

fn arb_update() -> impl Strategy<Value = ResponsePackageUpdate> {
    (
        prop::option::of(".{0,40}"),
        prop::option::of(".{0,40}"),
        prop::option::of(arb_tasks()),
        prop::option::of(arb_status()),
    )
        .prop_map(
            |(press_release, social_posts, imagery_tasks, status)| ResponsePackageUpdate {
                press_release,
                social_posts,
                imagery_tasks,
                status,
            },
        )
}

/// One user action against a store.
#[derive(Debug, Clone)]
enum Action {
    AddPhase,
    AddNarrative(usize),
    SetText(usize, String),
    RemoveNarrative(usize),
    UpdatePackage(usize, ResponsePackageUpdate),
    RemovePhase(usize),
}

fn arb_action() -> impl Strategy<Value = Action> {
    prop_oneof![
        Just(Action::AddPhase),
        (0usize..8).prop_map(Action::AddNarrative),
        (0usize..16, ".{0,60}").prop_map(|(i, text)| Action::SetText(i, text)),
        (0usize..16).prop_map(Action::RemoveNarrative),
        (0usize..16, arb_update()).prop_map(|(i, update)| Action::UpdatePackage(i, update)),
        (0usize..8).prop_map(Action::RemovePhase),
    ]
}

/// Apply an action, ignoring expected failures such as NotFound.
fn apply(store: &mut PlanStore, action: Action) {
    let phases: Vec<String> = store.phase_names().cloned().collect();
    let ids: Vec<(String, String)> = phases
        .iter()
        .flat_map(|phase| {
            store
                .phase(phase)
                .map(|p| {
                    p.iter()
                        .map(|(id, _)| (phase.clone(), id.to_string()))
                        .collect::<Vec<_>>()
                })
                .unwrap_or_default()
        })
        .collect();

    match action {
        Action::AddPhase => {
            store.add_phase();
        }
        Action::AddNarrative(i) => {
            let _ = store.add_narrative(&phases[i % phases.len()]);
        }
        Action::SetText(i, text) => {
            if let Some((_, id)) = ids.get(i) {
                let _ = store.set_narrative_text(id, text);
            }
        }
        Action::RemoveNarrative(i) => {
            if let Some((phase, id)) = ids.get(i) {
                let _ = store.remove_narrative(phase, id);
            }
        }
        Action::UpdatePackage(i, update) => {
            if let Some((_, id)) = ids.get(i) {
                let _ = store.ensure_response_package(id);
                let _ = store.update_response_package(id, update);
            }
        }
        Action::RemovePhase(i) => {
            let _ = store.remove_phase(&phases[i % phases.len()]);
        }
    }
}

proptest! {
    #[test]
    fn prop_last_phase_never_removed(actions in prop::collection::vec(arb_action(), 0..40)) {
        let mut store = PlanStore::new();
        for action in actions {
            apply(&mut store, action);
            prop_assert!(store.phase_count() >= 1);
        }

        while store.phase_count() > 1 {
            let name = store.phase_names().next().cloned().expect("phase");
            store.remove_phase(&name).expect("more than one phase");
        }
        let only = store.phase_names().next().cloned().expect("phase");
        let result = store.remove_phase(&only);
        prop_assert!(matches!(result, Err(PlaybookError::PreconditionFailed { .. })), "expected PreconditionFailed");
        prop_assert_eq!(store.phase_count(), 1);
    }

    #[test]
    fn prop_narrative_ids_increase(targets in prop::collection::vec(0usize..4, 1..50)) {
        let mut store = common::store_with_phases(3);
        let phases: Vec<String> = store.phase_names().cloned().collect();

        let mut last = 0;
        for target in targets {
            let id = store.add_narrative(&phases[target]).expect("phase exists");
            let sequence = id.sequence().expect("generated id");
            prop_assert!(sequence > last);
            last = sequence;
        }
    }

    #[test]
    fn prop_export_import_round_trip(
        name in ".{0,30}",
        actions in prop::collection::vec(arb_action(), 0..40),
    ) {
        let mut store = PlanStore::new();
        store.set_operation_name(name);
        for action in actions {
            apply(&mut store, action);
        }

        let bytes = store.export_json().expect("export");
        let mut restored = PlanStore::new();
        restored.import_json(&bytes).expect("import");

        prop_assert_eq!(restored.operation_name(), store.operation_name());
        prop_assert_eq!(restored.plan(), store.plan());
    }

    #[test]
    fn prop_ensure_package_idempotent(update in arb_update()) {
        let mut store = PlanStore::new();
        let id = store.add_narrative(DEFAULT_PHASE_NAME).expect("add");
        store.ensure_response_package(id.as_str()).expect("ensure");
        store.update_response_package(id.as_str(), update).expect("update");

        let before = store.ensure_response_package(id.as_str()).expect("ensure").clone();
        let after = store.ensure_response_package(id.as_str()).expect("ensure").clone();

        prop_assert_eq!(before, after);
    }
}
