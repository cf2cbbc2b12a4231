//! Editing-session flows: debounced history, merging, snapshots, export.

use std::time::{Duration, Instant};

use json_workbench::{Action, Session};

fn at(base: Instant, ms: u64) -> Instant {
    base + Duration::from_millis(ms)
}

#[test]
fn undo_right_after_an_edit_restores_the_settled_buffer() {
    let mut session = Session::in_memory();
    let t0 = Instant::now();

    session.dispatch_at(Action::Edit("{\"v\":1}".into()), at(t0, 0));
    // The second edit settles the first one into history.
    session.dispatch_at(Action::Edit("{\"v\":2}".into()), at(t0, 600));

    session.dispatch_at(Action::Undo, at(t0, 700));
    assert_eq!(session.state().buffer, "{\"v\":1}");
    assert!(session.can_redo());

    session.dispatch_at(Action::Redo, at(t0, 750));
    assert_eq!(session.state().buffer, "{\"v\":2}");
}

#[test]
fn keystroke_bursts_collapse_into_single_steps() {
    let mut session = Session::in_memory();
    let t0 = Instant::now();

    // First burst, then quiet.
    session.dispatch_at(Action::Edit("{".into()), at(t0, 0));
    session.dispatch_at(Action::Edit("{\"a\"".into()), at(t0, 100));
    session.dispatch_at(Action::Edit("{\"a\":1}".into()), at(t0, 200));
    // Second burst, then quiet.
    session.dispatch_at(Action::Edit("{\"a\":1,".into()), at(t0, 900));
    session.dispatch_at(Action::Edit("{\"a\":1,\"b\":2}".into()), at(t0, 1000));
    // Still typing; nothing settled for this text yet.
    session.dispatch_at(Action::Edit("{\"c\":3}".into()), at(t0, 1700));

    session.dispatch_at(Action::Undo, at(t0, 1750));
    assert_eq!(session.state().buffer, "{\"a\":1,\"b\":2}");
    session.dispatch_at(Action::Undo, at(t0, 1800));
    assert_eq!(session.state().buffer, "{\"a\":1}");
    assert!(!session.can_undo());
}

#[test]
fn stepping_with_no_history_changes_nothing() {
    let mut session = Session::in_memory();
    session.dispatch(Action::Edit("{\"v\":1}".into()));
    assert!(!session.can_undo());

    session.dispatch(Action::Undo);
    assert_eq!(session.state().buffer, "{\"v\":1}");
    assert!(session.state().error.is_none());

    session.dispatch(Action::Redo);
    assert_eq!(session.state().buffer, "{\"v\":1}");
    assert!(session.state().error.is_none());
}

#[test]
fn redo_steps_survive_new_edits() {
    let mut session = Session::in_memory();
    let t0 = Instant::now();

    session.dispatch_at(Action::Edit("{\"v\":1}".into()), at(t0, 0));
    session.dispatch_at(Action::Edit("{\"v\":2}".into()), at(t0, 600));
    session.dispatch_at(Action::Undo, at(t0, 700));
    assert!(session.can_redo());

    // A brand new edit; the redo step is kept, not discarded.
    session.dispatch_at(Action::Edit("{\"v\":9}".into()), at(t0, 800));
    assert!(session.can_redo());

    session.dispatch_at(Action::Redo, at(t0, 900));
    assert_eq!(session.state().buffer, "{\"v\":2}");
}

#[test]
fn undoing_a_merge_restores_the_pre_merge_buffer() {
    let mut session = Session::in_memory();
    let t0 = Instant::now();

    session.dispatch_at(Action::Edit("{\"a\":1}".into()), at(t0, 0));
    session.dispatch_at(Action::EditOverlay("{\"b\":2}".into()), at(t0, 100));
    session.dispatch_at(Action::Merge, at(t0, 700));

    assert_eq!(session.state().buffer, "{\n  \"a\": 1,\n  \"b\": 2\n}");
    assert_eq!(session.state().overlay, "");

    session.dispatch_at(Action::Undo, at(t0, 800));
    assert_eq!(session.state().buffer, "{\"a\":1}");
}

#[test]
fn failed_merge_changes_nothing() {
    let mut session = Session::in_memory();
    let t0 = Instant::now();

    session.dispatch_at(Action::Edit("[1,2]".into()), at(t0, 0));
    session.dispatch_at(Action::EditOverlay("{\"b\":2}".into()), at(t0, 100));
    session.dispatch_at(Action::Merge, at(t0, 700));

    assert_eq!(session.state().buffer, "[1,2]");
    assert_eq!(session.state().overlay, "{\"b\":2}");
    let error = session.state().error.clone().unwrap();
    assert!(error.contains("base"), "got: {error}");
}

#[test]
fn loading_a_snapshot_is_undoable_like_any_edit() {
    let mut session = Session::in_memory();
    let t0 = Instant::now();

    session.dispatch_at(Action::Edit("{\"keep\":1}".into()), at(t0, 0));
    session.dispatch_at(Action::Save("one".into()), at(t0, 100));
    let id = session.saves().unwrap()[0].id.clone();

    session.dispatch_at(Action::Edit("{\"work\":2}".into()), at(t0, 800));
    session.dispatch_at(Action::Load(id), at(t0, 1400));
    assert_eq!(session.state().buffer, "{\"keep\":1}");

    session.dispatch_at(Action::Undo, at(t0, 1500));
    assert_eq!(session.state().buffer, "{\"work\":2}");
}

#[test]
fn snapshot_management_actions_round_trip() {
    let mut session = Session::in_memory();
    session.dispatch(Action::Edit("{\"n\":1}".into()));
    session.dispatch(Action::Save("first".into()));
    session.dispatch(Action::Edit("{\"n\":2}".into()));
    session.dispatch(Action::Save("second".into()));

    let saves = session.saves().unwrap();
    assert_eq!(saves.len(), 2);
    assert_eq!(saves[0].name, "second");

    let id = saves[1].id.clone();
    session.dispatch(Action::Rename(id.clone(), "renamed".into()));
    let names: Vec<String> = session
        .saves()
        .unwrap()
        .into_iter()
        .map(|doc| doc.name)
        .collect();
    assert_eq!(names, ["second", "renamed"]);

    session.dispatch(Action::Delete(id));
    assert_eq!(session.saves().unwrap().len(), 1);

    session.dispatch(Action::ClearSaves);
    assert!(session.saves().unwrap().is_empty());
}

#[test]
fn export_writes_the_pretty_buffer() {
    let dir = tempfile::tempdir().unwrap();
    let mut session = Session::in_memory();
    session.dispatch(Action::Edit("{\"a\":1}".into()));
    session.dispatch(Action::Export(dir.path().to_path_buf()));
    assert!(session.state().error.is_none());

    let written = std::fs::read_to_string(dir.path().join("exported.json")).unwrap();
    assert_eq!(written, "{\n  \"a\": 1\n}");
}

#[test]
fn export_of_an_invalid_buffer_reports_and_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let mut session = Session::in_memory();
    session.dispatch(Action::Edit("{nope".into()));
    session.dispatch(Action::Export(dir.path().to_path_buf()));
    assert!(session.state().error.is_some());
    assert!(!dir.path().join("exported.json").exists());
}

#[test]
fn failed_file_import_leaves_the_buffer_alone() {
    let mut session = Session::in_memory();
    session.dispatch(Action::Edit("{\"safe\":true}".into()));
    session.dispatch(Action::ImportFile("/no/such/file.json".into()));
    assert_eq!(session.state().buffer, "{\"safe\":true}");
    let error = session.state().error.clone().unwrap();
    assert!(error.contains("failed to read file"), "got: {error}");
}

#[test]
fn validation_messages_cover_both_outcomes() {
    let mut session = Session::in_memory();
    session.dispatch(Action::EditSchema(
        r#"{"type":"object","required":["name"]}"#.into(),
    ));

    session.dispatch(Action::Edit("{\"name\":\"ok\"}".into()));
    session.dispatch(Action::Validate);
    assert_eq!(
        session.state().validation.as_deref(),
        Some("JSON is valid against the schema")
    );

    session.dispatch(Action::Edit("{}".into()));
    session.dispatch(Action::Validate);
    let message = session.state().validation.clone().unwrap();
    assert!(message.contains("name"), "got: {message}");
}
