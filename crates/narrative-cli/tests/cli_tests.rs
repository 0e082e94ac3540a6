use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use tempfile::TempDir;

/// Helper function to create a temporary playbook directory for CLI tests
fn create_cli_test_environment() -> TempDir {
    TempDir::new().expect("Failed to create temporary directory")
}

/// Helper function to create a Command with --no-color and a playbook dir
fn np_cmd(playbook_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("np").expect("Failed to find np binary");
    cmd.arg("--no-color")
        .arg("--playbook-dir")
        .arg(playbook_dir.path());
    cmd
}

/// Run a session fed with the given command lines
fn run_session(playbook_dir: &TempDir, lines: &[&str]) -> assert_cmd::assert::Assert {
    let mut script = lines.join("\n");
    script.push('\n');
    np_cmd(playbook_dir)
        .arg("session")
        .write_stdin(script)
        .assert()
}

#[test]
fn test_session_starts_with_default_plan() {
    let temp_dir = create_cli_test_environment();

    run_session(&temp_dir, &["quit"])
        .success()
        .stdout(predicate::str::contains("# Unnamed Operation"))
        .stdout(predicate::str::contains("## Phase 0: Shaping"))
        .stdout(predicate::str::contains("No narratives in this phase."));
}

#[test]
fn test_session_adds_narrative() {
    let temp_dir = create_cli_test_environment();

    run_session(
        &temp_dir,
        &[
            r#"narr add "Phase 0: Shaping""#,
            "narr text narr_1 The convoy was carrying weapons",
        ],
    )
    .success()
    .stdout(predicate::str::contains("Created narrative narr_1"))
    .stdout(predicate::str::contains("The convoy was carrying weapons"))
    .stdout(predicate::str::contains("NRP Status: Not Started"));
}

#[test]
fn test_session_generated_phase_names() {
    let temp_dir = create_cli_test_environment();

    run_session(&temp_dir, &["phase add", "phase add"])
        .success()
        .stdout(predicate::str::contains("Created phase 'Phase 2'"))
        .stdout(predicate::str::contains("Created phase 'Phase 3'"))
        .stdout(predicate::str::contains("## Phase 3"));
}

#[test]
fn test_session_remove_only_phase_fails_and_continues() {
    let temp_dir = create_cli_test_environment();

    run_session(
        &temp_dir,
        &[r#"phase rm "Phase 0: Shaping""#, "name Still Running"],
    )
    .success()
    .stderr(predicate::str::contains("Precondition failed"))
    .stdout(predicate::str::contains("# Still Running"))
    .stdout(predicate::str::contains("## Phase 0: Shaping"));
}

#[test]
fn test_session_update_before_open_fails() {
    let temp_dir = create_cli_test_environment();

    run_session(
        &temp_dir,
        &[
            r#"narr add "Phase 0: Shaping""#,
            "nrp set narr_1 --status approved",
        ],
    )
    .success()
    .stderr(predicate::str::contains("Precondition failed"))
    .stdout(predicate::str::contains("NRP Status: Not Started"));
}

#[test]
fn test_session_response_package_editing() {
    let temp_dir = create_cli_test_environment();

    run_session(
        &temp_dir,
        &[
            r#"narr add "Phase 0: Shaping""#,
            "nrp open narr_1",
            r#"nrp set narr_1 -p "No weapons were aboard." --imagery overhead-shot,b-roll-footage --status for-review"#,
        ],
    )
    .success()
    .stdout(predicate::str::contains(
        "Edit Narrative Response Package (narr_1)",
    ))
    .stdout(predicate::str::contains("Changed status to For Review"))
    .stdout(predicate::str::contains(
        "Imagery tasking: Overhead shot, B-roll footage",
    ))
    .stdout(predicate::str::contains("NRP Status: For Review"));
}

#[test]
fn test_session_unknown_narrative() {
    let temp_dir = create_cli_test_environment();

    run_session(&temp_dir, &["nrp open narr_42"])
        .success()
        .stderr(predicate::str::contains("Narrative 'narr_42' not found"));
}

#[test]
fn test_session_bad_command_continues() {
    let temp_dir = create_cli_test_environment();

    run_session(&temp_dir, &["launch", "name 'unterminated", "name Op Next"])
        .success()
        .stderr(predicate::str::contains("launch"))
        .stderr(predicate::str::contains("Unterminated single quote"))
        .stdout(predicate::str::contains("# Op Next"));
}

#[test]
fn test_session_help_lists_commands() {
    let temp_dir = create_cli_test_environment();

    run_session(&temp_dir, &["help"])
        .success()
        .stdout(predicate::str::contains("narr"))
        .stdout(predicate::str::contains("nrp"))
        .stdout(predicate::str::contains("export"));
}

#[test]
fn test_session_export_writes_playbook() {
    let temp_dir = create_cli_test_environment();

    run_session(
        &temp_dir,
        &[
            "name Operation Harbor",
            "phase add",
            r#"narr add "Phase 2""#,
            "nrp open narr_1",
            "export",
        ],
    )
    .success()
    .stdout(predicate::str::contains("Exported playbook to"));

    let path = temp_dir.path().join("Operation_Harbor_Playbook.json");
    let document: Value =
        serde_json::from_slice(&fs::read(&path).expect("playbook written")).expect("valid JSON");

    assert_eq!(document["operation_name"], "Operation Harbor");
    let phases: Vec<&String> = document["phases"]
        .as_object()
        .expect("phases object")
        .keys()
        .collect();
    assert_eq!(phases, vec!["Phase 0: Shaping", "Phase 2"]);
    assert_eq!(document["phases"]["Phase 2"]["narr_1"]["nrp"]["status"], "Draft");
    assert!(document["exported_on"].is_string());
}

#[test]
fn test_session_import_replaces_plan() {
    let temp_dir = create_cli_test_environment();
    let path = temp_dir.path().join("incoming.json");
    fs::write(&path, r#"{"operation_name": "X"}"#).expect("write playbook");

    run_session(
        &temp_dir,
        &[
            "phase add",
            &format!("import '{}'", path.display()),
            "show",
        ],
    )
    .success()
    .stdout(predicate::str::contains("# X"))
    .stdout(predicate::str::contains("Imported playbook from"));
}

#[test]
fn test_session_import_garbage_keeps_plan() {
    let temp_dir = create_cli_test_environment();
    let path = temp_dir.path().join("garbage.json");
    fs::write(&path, "not a playbook").expect("write file");

    run_session(
        &temp_dir,
        &[
            "name Kept",
            &format!("import '{}'", path.display()),
            "show",
        ],
    )
    .success()
    .stderr(predicate::str::contains("Failed to parse playbook"))
    .stdout(predicate::str::contains("# Kept"));
}

#[test]
fn test_session_with_name_flag() {
    let temp_dir = create_cli_test_environment();

    np_cmd(&temp_dir)
        .args(["session", "--name", "Operation Flag"])
        .write_stdin("quit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("# Operation Flag"));
}

#[test]
fn test_show_renders_playbook() {
    let temp_dir = create_cli_test_environment();
    let path = temp_dir.path().join("Op_Show_Playbook.json");
    fs::write(
        &path,
        r#"{
  "operation_name": "Op Show",
  "phases": {
    "Phase 0: Shaping": {
      "narr_7": { "text": "Port closure rumor", "nrp": {
        "press_release": "", "social_posts": "",
        "imagery_tasks": ["Personnel interviews"], "status": "Executed"
      } }
    },
    "Phase 2": { "narr_8": { "text": "Casualty claims", "nrp": null } }
  },
  "exported_on": "2026-10-17T09:30:00Z"
}"#,
    )
    .expect("write playbook");

    np_cmd(&temp_dir)
        .arg("show")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("# Op Show"))
        .stdout(predicate::str::contains("### narr_7"))
        .stdout(predicate::str::contains("NRP Status: Executed"))
        .stdout(predicate::str::contains("NRP Status: Not Started"));

    np_cmd(&temp_dir)
        .args(["show", "--summary"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("2 phase(s), 2 narrative(s)"))
        .stdout(predicate::str::contains("- Executed: 1"));
}

#[test]
fn test_show_missing_file_fails() {
    let temp_dir = create_cli_test_environment();

    np_cmd(&temp_dir)
        .args(["show"])
        .arg(temp_dir.path().join("missing.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to open playbook"));
}
