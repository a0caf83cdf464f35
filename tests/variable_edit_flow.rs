mod common;

use std::cell::{Cell, RefCell};

use common::{constant_variable, map_args, RecordingUpdater};
use vareditor::ui::variable_edit::{EditError, VariableEditFlow, VariableEditSession};
use vareditor::variable::{VariableLookup, VariableStore};

#[test]
fn submit_updates_then_dismisses() {
    let events = RefCell::new(Vec::new());
    let updater = RecordingUpdater::default();

    let mut flow = VariableEditFlow::new(
        VariableEditSession::initialize(constant_variable()),
        &updater,
        || {
            let updates = updater.updates.borrow().len();
            events.borrow_mut().push(format!("dismiss after {} update(s)", updates));
        },
    );
    flow.session_mut().change_kind("map");
    flow.session_mut().apply_argument_edit(map_args(&[("x", "1")]), true);

    let submitted = flow.submit().unwrap();

    let updates = updater.updates.borrow();
    assert_eq!(updates.len(), 1);
    assert_eq!(updates[0].0, "v1");
    assert_eq!(updates[0].1, submitted);
    assert_eq!(*events.borrow(), vec!["dismiss after 1 update(s)".to_string()]);
}

#[test]
fn refused_submit_neither_updates_nor_dismisses() {
    let dismissals = Cell::new(0);
    let updater = RecordingUpdater::default();

    let mut flow = VariableEditFlow::new(
        VariableEditSession::initialize(constant_variable()),
        &updater,
        || dismissals.set(dismissals.get() + 1),
    );
    flow.session_mut().change_kind("query");

    assert!(matches!(
        flow.submit(),
        Err(EditError::UnvalidatedSubmit { .. })
    ));
    assert!(updater.updates.borrow().is_empty());
    assert_eq!(dismissals.get(), 0);
    assert!(flow.session().is_open());
}

#[test]
fn cancel_dismisses_and_leaves_source_untouched() {
    let store = VariableStore::new(vec![constant_variable()]).unwrap();
    let dismissals = Cell::new(0);

    let session = VariableEditSession::open(&store, "v1").unwrap();
    let mut flow = VariableEditFlow::new(session, &store, || {
        dismissals.set(dismissals.get() + 1)
    });
    flow.session_mut().change_kind("map");
    flow.cancel();

    assert_eq!(dismissals.get(), 1);
    assert!(!flow.session().is_open());
    assert_eq!(store.find_variable("v1"), Some(constant_variable()));
}

#[test]
fn submit_writes_back_to_store() {
    let store = VariableStore::new(vec![constant_variable()]).unwrap();
    let session = VariableEditSession::open(&store, "v1").unwrap();
    let mut flow = VariableEditFlow::new(session, &store, || {});

    flow.session_mut().change_kind("map");
    flow.session_mut().apply_argument_edit(map_args(&[("x", "1")]), true);
    flow.session_mut().select_default("x");
    flow.submit().unwrap();

    let stored = store.find_variable("v1").unwrap();
    assert_eq!(stored.arguments, map_args(&[("x", "1")]));
    assert_eq!(stored.selected, Some(vec!["x".to_string()]));
}
