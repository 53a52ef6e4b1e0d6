// Integration tests - testing how the editor, history and scripts work together

mod common;

use common::harness::EditorTestHarness;
use timeline::script::{self, DEMO_SCRIPT};
use timeline::{Editor, Operation, Snapshot};

/// The walkthrough from a capacity-15 editor: five edits, then undo to empty
#[test]
fn test_end_to_end_undo_walkthrough() {
    let mut harness = EditorTestHarness::new(15);

    harness.editor_mut().insert(0, "Hello");
    harness.assert_text("Hello");
    harness.editor_mut().insert(5, " World");
    harness.assert_text("Hello World");
    harness.editor_mut().insert(11, "!");
    harness.assert_text("Hello World!");
    harness.editor_mut().delete(5, 11);
    harness.assert_text("Hello!");
    harness.editor_mut().insert(5, " Go");
    harness.assert_text("Hello Go!");

    harness.undo_expecting("Hello!");
    harness.undo_expecting("Hello World!");
    harness.undo_expecting("Hello World");
    harness.undo_expecting("Hello");
    harness.undo_expecting("");

    assert!(!harness.editor().can_undo());
    assert!(!harness.editor_mut().undo());
    harness.assert_text("");
    harness.assert_info(None, 5, false, true);
}

#[test]
fn test_boundary_undo_on_fresh_editor() {
    let mut harness = EditorTestHarness::new(0);

    assert!(!harness.editor().can_undo());
    assert!(!harness.editor_mut().undo());
    harness.assert_text("");
    harness.assert_info(None, 0, false, false);
}

/// After E1..E3 and two undos, a new edit makes E2 and E3 unrecoverable
#[test]
fn test_new_edit_truncates_redo_history() {
    let mut harness = EditorTestHarness::new(10);
    harness.type_text("one");
    harness.type_text(" two");
    harness.type_text(" three");

    harness.undo_expecting("one two");
    harness.undo_expecting("one");

    harness.type_text(" four");
    harness.assert_text("one four");

    assert!(!harness.editor().can_redo());
    assert!(!harness.editor_mut().redo());
    harness.assert_info(Some(1), 2, true, false);

    let texts: Vec<&str> = harness
        .editor()
        .history()
        .snapshots()
        .map(Snapshot::text)
        .collect();
    assert_eq!(texts, vec!["one", "one four"]);
}

/// Eviction keeps only the newest window; undo stops at its start
#[test]
fn test_capacity_limits_undo_depth() {
    let mut harness = EditorTestHarness::new(3);
    for word in ["a", "b", "c", "d", "e", "f"] {
        harness.type_text(word);
        assert!(harness.editor().info().total <= 4);
    }
    harness.assert_info(Some(3), 4, true, false);

    harness.undo_expecting("abcde");
    harness.undo_expecting("abcd");
    harness.undo_expecting("abc");
    // The oldest retained snapshot was "abc"; before it is the empty state
    harness.undo_expecting("");
    assert!(!harness.editor_mut().undo());

    harness.redo_expecting("abc");
}

#[test]
fn test_undo_redo_round_trip_preserves_operations() {
    let mut harness = EditorTestHarness::new(10);
    harness.editor_mut().insert(0, "héllo wörld");
    harness.editor_mut().delete(5, 11);
    harness.assert_text("héllo");

    harness.undo_expecting("héllo wörld");
    harness.redo_expecting("héllo");

    let ops: Vec<&Operation> = harness
        .editor()
        .history()
        .snapshots()
        .map(Snapshot::operation)
        .collect();
    assert_eq!(
        ops,
        vec![&Operation::insert(0, "héllo wörld"), &Operation::delete(5, 11)]
    );
}

#[test]
fn test_noop_edits_create_no_history() {
    let mut harness = EditorTestHarness::new(10);
    harness.type_text("abc");

    harness.editor_mut().insert(1, "");
    harness.editor_mut().delete(2, 2);
    harness.editor_mut().delete(3, 9);

    harness.assert_text("abc");
    harness.assert_info(Some(0), 1, true, false);
}

#[test]
fn test_demo_script_transcript() {
    let commands = script::parse_script(DEMO_SCRIPT).unwrap();
    let mut editor = Editor::new(15);
    let mut out = Vec::new();
    script::run_script(&mut editor, &commands, &mut out).unwrap();
    let transcript = String::from_utf8(out).unwrap();

    let expected = [
        r#"insert "Hello" at 0 -> "Hello""#,
        r#"insert " World" at 5 -> "Hello World""#,
        r#"insert "!" at 11 -> "Hello World!""#,
        r#"delete [5, 11) -> "Hello!""#,
        r#"insert " Go" at 5 -> "Hello Go!""#,
        r#"undo -> "Hello!""#,
        r#"undo -> "Hello World!""#,
        r#"undo -> "Hello World""#,
        r#"undo -> "Hello""#,
        r#"undo -> """#,
        "undo -> (nothing to undo)",
        r#"redo -> "Hello""#,
        r#"redo -> "Hello World""#,
        r#"redo -> "Hello World!""#,
        r#"insert ", Programming" at 11 -> "Hello World, Programming!""#,
        r#"insert " Meow Meow" at end-1 -> "Hello World, Programming Meow Meow!""#,
        "position=4 total=5 can_undo=true can_redo=false",
    ];
    let lines: Vec<&str> = transcript.lines().collect();
    assert_eq!(lines, expected);

    assert_eq!(editor.text(), "Hello World, Programming Meow Meow!");
}
