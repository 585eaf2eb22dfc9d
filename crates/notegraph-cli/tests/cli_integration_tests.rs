//! End-to-end tests for the `ng` binary
//!
//! Each test builds a small markdown kiln in a temp dir and points the
//! binary at it with an explicit (empty) config file.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn kiln() -> TempDir {
    let temp = TempDir::new().unwrap();
    let notes = temp.path().join("notes");
    fs::create_dir_all(notes.join("Work/Meetings")).unwrap();
    fs::create_dir_all(notes.join("Personal")).unwrap();

    fs::write(
        notes.join("Work/Project Plan.md"),
        "Milestones for Q2 #planning #work",
    )
    .unwrap();
    fs::write(
        notes.join("Work/Meetings/Standup.md"),
        "Discussed the project plan. See [[Project Plan]] and [[Retro]] #work",
    )
    .unwrap();
    fs::write(notes.join("Personal/Journal.md"), "Personal thoughts #life").unwrap();
    fs::write(notes.join("Inbox.md"), "Unsorted [[Project Plan]]").unwrap();
    fs::write(temp.path().join("config.toml"), "").unwrap();
    temp
}

fn ng(temp: &Path) -> Command {
    let mut cmd = Command::cargo_bin("ng").unwrap();
    cmd.env_remove("NOTEGRAPH_NOTES")
        .env_remove("RUST_LOG")
        .arg("--notes")
        .arg(temp.join("notes"))
        .arg("--config")
        .arg(temp.join("config.toml"));
    cmd
}

fn json_output(cmd: &mut Command) -> serde_json::Value {
    let output = cmd.arg("--format").arg("json").output().unwrap();
    assert!(output.status.success(), "command failed: {:?}", output);
    serde_json::from_slice(&output.stdout).unwrap()
}

#[test]
fn test_search_lists_matches() {
    let temp = kiln();
    let hits = json_output(ng(temp.path()).arg("search").arg("project plan"));
    let ids: Vec<&str> = hits
        .as_array()
        .unwrap()
        .iter()
        .map(|hit| hit["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["Inbox", "Work/Meetings/Standup", "Work/Project Plan"]);
}

#[test]
fn test_search_with_folder_and_field() {
    let temp = kiln();
    let hits = json_output(
        ng(temp.path())
            .arg("search")
            .arg("plan")
            .arg("--in")
            .arg("title")
            .arg("--folder")
            .arg("Work"),
    );
    assert_eq!(hits.as_array().unwrap().len(), 1);
    assert_eq!(hits[0]["title"], "Project Plan");
}

#[test]
fn test_backlinks() {
    let temp = kiln();
    let summary = json_output(ng(temp.path()).arg("backlinks").arg("Project Plan"));
    assert_eq!(
        summary["direct"],
        serde_json::json!(["Inbox", "Work/Meetings/Standup"])
    );
    assert_eq!(summary["mentions"], serde_json::json!(["Work/Meetings/Standup"]));
    assert_eq!(summary["tags"], serde_json::json!(["Work/Meetings/Standup"]));
}

#[test]
fn test_backlinks_unknown_note_fails() {
    let temp = kiln();
    ng(temp.path())
        .arg("backlinks")
        .arg("Nonexistent")
        .assert()
        .failure()
        .stderr(predicate::str::contains("No note titled 'Nonexistent'"));
}

#[test]
fn test_tags_and_folders() {
    let temp = kiln();
    let tags = json_output(ng(temp.path()).arg("tags"));
    assert_eq!(tags, serde_json::json!(["life", "planning", "work"]));

    let folders = json_output(ng(temp.path()).arg("folders"));
    assert_eq!(folders, serde_json::json!(["Personal", "Work", "Work/Meetings"]));
}

#[test]
fn test_graph_drops_dangling_links() {
    let temp = kiln();
    let graph = json_output(ng(temp.path()).arg("graph"));
    let links = graph["links"].as_array().unwrap();
    assert_eq!(links.len(), 2);
    assert!(links.iter().all(|l| l["target"] == "Work/Project Plan"));

    let standup = graph["nodes"]
        .as_array()
        .unwrap()
        .iter()
        .find(|n| n["id"] == "Work/Meetings/Standup")
        .unwrap();
    assert_eq!(standup["linkCount"], 2);
}

#[test]
fn test_table_output() {
    let temp = kiln();
    ng(temp.path())
        .arg("tags")
        .arg("--counts")
        .assert()
        .success()
        .stdout(predicate::str::contains("#work"))
        .stdout(predicate::str::contains("Notes"));
}

#[test]
fn test_explicit_config_must_exist() {
    let mut cmd = Command::cargo_bin("ng").unwrap();
    cmd.env_remove("NOTEGRAPH_NOTES")
        .arg("--config")
        .arg(PathBuf::from("/nonexistent/ignored.toml"))
        .arg("links")
        .arg("x");
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read config"));
}

#[test]
fn test_links_extracts_annotations() {
    let temp = kiln();
    let mut cmd = Command::cargo_bin("ng").unwrap();
    cmd.env_remove("NOTEGRAPH_NOTES")
        .arg("--config")
        .arg(temp.path().join("config.toml"))
        .arg("links")
        .arg("See [[Project Plan]] and [[Project Plan]] again #urgent #follow-up");
    let annotations = json_output(&mut cmd);
    assert_eq!(annotations["links"], serde_json::json!(["Project Plan"]));
    assert_eq!(annotations["tags"], serde_json::json!(["urgent", "follow-up"]));
}

#[test]
fn test_missing_notes_flag() {
    let temp = kiln();
    let mut cmd = Command::cargo_bin("ng").unwrap();
    cmd.env_remove("NOTEGRAPH_NOTES")
        .arg("--config")
        .arg(temp.path().join("config.toml"))
        .arg("tags")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--notes"));
}

#[test]
fn test_config_dump_uses_file_values() {
    let temp = kiln();
    fs::write(temp.path().join("config.toml"), "[graph]\nwidth = 1024.0\n").unwrap();
    ng(temp.path())
        .arg("config")
        .arg("dump")
        .assert()
        .success()
        .stdout(predicate::str::contains("width = 1024.0"));
}

#[test]
fn test_empty_kiln_lists_nothing() {
    let temp = TempDir::new().unwrap();
    fs::create_dir(temp.path().join("notes")).unwrap();
    fs::write(temp.path().join("config.toml"), "").unwrap();

    let tags = json_output(ng(temp.path()).arg("tags"));
    assert_eq!(tags, serde_json::json!([]));
}
