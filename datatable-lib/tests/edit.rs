//! Tests for the edit session tracker.

use std::cell::RefCell;
use std::rc::Rc;

use datatable_lib::edit::{AbandonPolicy, CellEdit, EditSession, EditTracker};
use datatable_lib::error::EditError;
use datatable_lib::model::Value;

type Edit = CellEdit<&'static str, &'static str>;

/// Tracker whose commits land in a shared log.
fn recording(policy: AbandonPolicy) -> (EditTracker<&'static str, &'static str>, Rc<RefCell<Vec<Edit>>>) {
    let log = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&log);
    let tracker = EditTracker::new()
        .with_abandon_policy(policy)
        .with_commit_handler(move |edit: &Edit| sink.borrow_mut().push(edit.clone()));
    (tracker, log)
}

fn value(text: &str) -> Value {
    Value::from(text)
}

#[test]
fn test_begin_edit_targets_exactly_one_cell() {
    let mut tracker = EditTracker::new();
    tracker
        .begin_edit(Some("row1"), Some("colA"), Some(&value("5")))
        .unwrap();

    assert!(tracker.is_editing(&"row1", &"colA"));
    assert!(!tracker.is_editing(&"row1", &"colB"));
    assert!(!tracker.is_editing(&"row2", &"colA"));
    assert!(!tracker.is_editing(&"row2", &"colB"));
    assert_eq!(tracker.draft(), Some("5"));
}

#[test]
fn test_draft_starts_from_rendered_value() {
    let mut tracker = EditTracker::new();
    tracker
        .begin_edit(Some(3u32), Some("age"), Some(&Value::Int(23)))
        .unwrap();
    assert_eq!(tracker.draft(), Some("23"));

    tracker
        .begin_edit(Some(4u32), Some("age"), Some(&Value::Null))
        .unwrap();
    assert_eq!(tracker.draft(), Some(""));
}

#[test]
fn test_commit_emits_last_draft() {
    let (mut tracker, log) = recording(AbandonPolicy::Discard);
    tracker
        .begin_edit(Some("row1"), Some("colA"), Some(&value("5")))
        .unwrap();
    for text in ["6", "67", "6", "60"] {
        assert!(tracker.update_draft(text));
    }

    let edit = tracker.commit_edit().unwrap();
    assert_eq!(edit.text, "60");
    assert_eq!(
        *log.borrow(),
        vec![CellEdit {
            row: "row1",
            column: "colA",
            text: "60".to_string(),
        }]
    );
}

#[test]
fn test_commit_clears_session() {
    let (mut tracker, _log) = recording(AbandonPolicy::Discard);
    tracker
        .begin_edit(Some("row1"), Some("colA"), Some(&value("5")))
        .unwrap();
    tracker.commit_edit();

    assert!(!tracker.is_active());
    assert!(!tracker.is_editing(&"row1", &"colA"));
    assert_eq!(*tracker.session(), EditSession::Inactive);
    assert_eq!(tracker.draft(), None);
}

#[test]
fn test_commit_without_session_is_noop() {
    let (mut tracker, log) = recording(AbandonPolicy::Discard);
    assert_eq!(tracker.commit_edit(), None);
    assert!(log.borrow().is_empty());
}

#[test]
fn test_update_draft_without_session_is_ignored() {
    let mut tracker: EditTracker<&str, &str> = EditTracker::new();
    assert!(!tracker.update_draft("lost"));
    assert!(!tracker.is_active());
}

#[test]
fn test_switching_cells_discards_previous_draft() {
    let (mut tracker, log) = recording(AbandonPolicy::Discard);
    tracker
        .begin_edit(Some("row1"), Some("colA"), Some(&value("5")))
        .unwrap();
    tracker.update_draft("never committed");
    tracker
        .begin_edit(Some("row2"), Some("colB"), Some(&value("x")))
        .unwrap();

    assert!(!tracker.is_editing(&"row1", &"colA"));
    assert!(tracker.is_editing(&"row2", &"colB"));
    assert_eq!(tracker.draft(), Some("x"));

    tracker.commit_edit();
    let texts: Vec<String> = log.borrow().iter().map(|e| e.text.clone()).collect();
    assert_eq!(texts, vec!["x".to_string()]);
}

#[test]
fn test_switching_cells_auto_commits_previous_draft() {
    let (mut tracker, log) = recording(AbandonPolicy::AutoCommit);
    tracker
        .begin_edit(Some("row1"), Some("colA"), Some(&value("5")))
        .unwrap();
    tracker.update_draft("kept");
    tracker
        .begin_edit(Some("row2"), Some("colB"), Some(&value("x")))
        .unwrap();

    assert!(tracker.is_editing(&"row2", &"colB"));
    assert_eq!(
        *log.borrow(),
        vec![CellEdit {
            row: "row1",
            column: "colA",
            text: "kept".to_string(),
        }]
    );
}

#[test]
fn test_begin_edit_rejects_missing_arguments() {
    let (mut tracker, log) = recording(AbandonPolicy::Discard);

    assert_eq!(
        tracker.begin_edit(None, Some("colA"), Some(&value("5"))),
        Err(EditError::MissingRow)
    );
    assert_eq!(
        tracker.begin_edit(Some("row1"), None, Some(&value("5"))),
        Err(EditError::MissingColumn)
    );
    assert_eq!(
        tracker.begin_edit(Some("row1"), Some("colA"), None),
        Err(EditError::MissingValue)
    );

    assert!(!tracker.is_active());
    assert!(!tracker.is_editing(&"row1", &"colA"));
    assert!(log.borrow().is_empty());
}

#[test]
fn test_rejected_begin_keeps_existing_session() {
    let mut tracker = EditTracker::new();
    tracker
        .begin_edit(Some("row1"), Some("colA"), Some(&value("5")))
        .unwrap();
    tracker.update_draft("55");

    let err = tracker
        .begin_edit(Some("row2"), None, Some(&value("x")))
        .unwrap_err();
    assert_eq!(err.parameter(), "column");
    assert!(tracker.is_editing(&"row1", &"colA"));
    assert_eq!(tracker.draft(), Some("55"));
}

#[test]
fn test_cancel_drops_draft() {
    let (mut tracker, log) = recording(AbandonPolicy::AutoCommit);
    tracker
        .begin_edit(Some("row1"), Some("colA"), Some(&value("5")))
        .unwrap();
    assert!(tracker.cancel_edit());
    assert!(!tracker.cancel_edit());
    assert!(!tracker.is_active());
    assert!(log.borrow().is_empty());
}

#[test]
fn test_rebegin_same_cell_restarts_draft() {
    let (mut tracker, log) = recording(AbandonPolicy::AutoCommit);
    tracker
        .begin_edit(Some("row1"), Some("colA"), Some(&value("5")))
        .unwrap();
    tracker.update_draft("7");
    tracker
        .begin_edit(Some("row1"), Some("colA"), Some(&value("5")))
        .unwrap();

    assert!(tracker.is_editing(&"row1", &"colA"));
    assert_eq!(tracker.draft(), Some("5"));
    assert_eq!(log.borrow().len(), 1);
    assert_eq!(log.borrow()[0].text, "7");
}
