use tasklist_core::{
    EventOutcome, Filter, MemoryKeyValueStore, MutationOutcome, RepoError, RowTarget,
    SnapshotTarget, StoreError, TaskListController, TaskListRepository, UiEvent,
    TASKS_STORAGE_KEY,
};

type TestController = TaskListController<MemoryKeyValueStore, SnapshotTarget>;

fn open_empty() -> TestController {
    open_with(MemoryKeyValueStore::new())
}

fn open_with(store: MemoryKeyValueStore) -> TestController {
    TaskListController::open(TaskListRepository::new(store), SnapshotTarget::new()).unwrap()
}

fn writes(controller: &TestController) -> usize {
    controller.repository().store().write_count()
}

fn last_view(controller: &TestController) -> &tasklist_core::TaskListView {
    controller
        .target()
        .last_view()
        .expect("controller should have painted")
}

#[test]
fn open_loads_persisted_tasks_and_paints_once() {
    let store = MemoryKeyValueStore::with_item(
        TASKS_STORAGE_KEY,
        r#"[{"id":"1","text":"a","completed":false}]"#,
    );
    let controller = open_with(store);

    assert_eq!(controller.tasks().len(), 1);
    assert_eq!(controller.active_filter(), Filter::All);
    assert_eq!(controller.target().paint_count(), 1);
    assert_eq!(last_view(&controller).counter_text, "1 tasks");
    assert_eq!(writes(&controller), 0);
}

#[test]
fn add_prepends_newest_first() {
    let mut controller = open_empty();
    controller.add_task("x").unwrap();
    controller.add_task("y").unwrap();

    let texts = controller
        .tasks()
        .iter()
        .map(|task| task.text.as_str())
        .collect::<Vec<_>>();
    assert_eq!(texts, vec!["y", "x"]);
    assert!(controller.tasks().iter().all(|task| !task.completed));
}

#[test]
fn every_mutation_persists_and_repaints() {
    let mut controller = open_empty();
    let id = controller.add_task("a").unwrap();
    controller.toggle_task_completion(&id).unwrap();
    controller.delete_task(&id).unwrap();

    assert_eq!(writes(&controller), 3);
    assert_eq!(controller.target().paint_count(), 4);
}

#[test]
fn unknown_id_leaves_list_unchanged() {
    let mut controller = open_empty();
    controller.add_task("a").unwrap();
    controller.add_task("b").unwrap();
    let before = controller.tasks().to_vec();

    controller.toggle_task_completion("missing").unwrap();
    assert_eq!(controller.tasks(), before.as_slice());

    controller.delete_task("missing").unwrap();
    assert_eq!(controller.tasks(), before.as_slice());
}

#[test]
fn toggle_flips_only_the_matching_task() {
    let mut controller = open_empty();
    let first = controller.add_task("first").unwrap();
    let second = controller.add_task("second").unwrap();

    controller.toggle_task_completion(&first).unwrap();
    let completed = controller
        .tasks()
        .iter()
        .map(|task| (task.id.clone(), task.completed))
        .collect::<Vec<_>>();
    assert_eq!(completed, vec![(second, false), (first.clone(), true)]);

    controller.toggle_task_completion(&first).unwrap();
    assert!(controller.tasks().iter().all(|task| !task.completed));
}

#[test]
fn clear_completed_without_completed_tasks_skips_save_and_paint() {
    let mut controller = open_empty();
    controller.add_task("a").unwrap();
    let before = controller.tasks().to_vec();
    let writes_before = writes(&controller);
    let paints_before = controller.target().paint_count();

    let outcome = controller.clear_completed_tasks().unwrap();

    assert_eq!(outcome, MutationOutcome::Unchanged);
    assert_eq!(controller.tasks(), before.as_slice());
    assert_eq!(writes(&controller), writes_before);
    assert_eq!(controller.target().paint_count(), paints_before);
}

#[test]
fn clear_completed_removes_only_completed_tasks() {
    let mut controller = open_empty();
    let keep = controller.add_task("keep").unwrap();
    let drop_a = controller.add_task("drop a").unwrap();
    let drop_b = controller.add_task("drop b").unwrap();
    controller.toggle_task_completion(&drop_a).unwrap();
    controller.toggle_task_completion(&drop_b).unwrap();

    let outcome = controller.clear_completed_tasks().unwrap();

    assert_eq!(outcome, MutationOutcome::Changed { removed: 2 });
    assert_eq!(controller.tasks().len(), 1);
    assert_eq!(controller.tasks()[0].id, keep);
}

#[test]
fn filter_changes_repaint_without_persisting() {
    let mut controller = open_empty();
    let id = controller.add_task("a").unwrap();
    controller.toggle_task_completion(&id).unwrap();
    let writes_before = writes(&controller);
    let tasks_before = controller.tasks().to_vec();

    controller.set_filter(Filter::Active);
    assert!(last_view(&controller).rows.is_empty());
    assert!(last_view(&controller).list_hidden);

    controller.set_filter(Filter::Completed);
    assert_eq!(last_view(&controller).rows.len(), 1);

    assert_eq!(writes(&controller), writes_before);
    assert_eq!(controller.tasks(), tasks_before.as_slice());
}

#[test]
fn submit_trims_input_and_resets_field() {
    let mut controller = open_empty();

    let outcome = controller
        .dispatch(UiEvent::SubmitTask {
            raw_text: "  Buy milk \n".to_string(),
        })
        .unwrap();

    assert_eq!(outcome, EventOutcome::Applied);
    assert_eq!(controller.tasks()[0].text, "Buy milk");
    assert_eq!(controller.target().input_reset_count(), 1);
}

#[test]
fn blank_submit_is_ignored() {
    let mut controller = open_empty();

    let outcome = controller
        .dispatch(UiEvent::SubmitTask {
            raw_text: "   ".to_string(),
        })
        .unwrap();

    assert_eq!(outcome, EventOutcome::Ignored);
    assert!(controller.tasks().is_empty());
    assert_eq!(controller.target().input_reset_count(), 0);
    assert_eq!(writes(&controller), 0);
}

#[test]
fn row_clicks_route_by_target() {
    let mut controller = open_empty();
    let id = controller.add_task("a").unwrap();

    let label = controller
        .dispatch(UiEvent::RowClicked {
            task_id: id.clone(),
            target: RowTarget::Label,
        })
        .unwrap();
    assert_eq!(label, EventOutcome::Ignored);
    assert!(!controller.tasks()[0].completed);

    controller
        .dispatch(UiEvent::RowClicked {
            task_id: id.clone(),
            target: RowTarget::Checkbox,
        })
        .unwrap();
    assert!(controller.tasks()[0].completed);

    controller
        .dispatch(UiEvent::RowClicked {
            task_id: id,
            target: RowTarget::DeleteButton,
        })
        .unwrap();
    assert!(controller.tasks().is_empty());
}

#[test]
fn clear_completed_event_reports_ignored_when_nothing_to_clear() {
    let mut controller = open_empty();
    controller.add_task("a").unwrap();
    assert_eq!(
        controller.dispatch(UiEvent::ClearCompleted).unwrap(),
        EventOutcome::Ignored
    );
}

#[test]
fn failed_save_is_returned_but_state_and_view_still_update() {
    let mut controller = open_with(MemoryKeyValueStore::with_quota(8));

    let err = controller.add_task("does not fit").unwrap_err();

    assert!(matches!(
        err,
        RepoError::Store(StoreError::QuotaExceeded { .. })
    ));
    assert_eq!(controller.tasks().len(), 1);
    assert_eq!(last_view(&controller).counter_text, "1 tasks");
}

#[test]
fn end_to_end_scenario() {
    let mut controller = open_empty();
    assert!(!last_view(&controller).empty_state_hidden);

    controller
        .dispatch(UiEvent::SubmitTask {
            raw_text: "Buy milk".to_string(),
        })
        .unwrap();
    assert_eq!(controller.tasks().len(), 1);
    assert_eq!(last_view(&controller).counter_text, "1 tasks");
    assert!(last_view(&controller).empty_state_hidden);
    assert!(!last_view(&controller).list_hidden);

    let id = controller.tasks()[0].id.clone();
    controller
        .dispatch(UiEvent::RowClicked {
            task_id: id.clone(),
            target: RowTarget::Checkbox,
        })
        .unwrap();

    controller.dispatch(UiEvent::FilterSelected(Filter::Active)).unwrap();
    assert!(last_view(&controller).rows.is_empty());
    controller
        .dispatch(UiEvent::FilterSelected(Filter::Completed))
        .unwrap();
    assert_eq!(last_view(&controller).rows[0].task_id, id);

    controller
        .dispatch(UiEvent::RowClicked {
            task_id: id,
            target: RowTarget::DeleteButton,
        })
        .unwrap();
    assert!(controller.tasks().is_empty());
    assert!(!last_view(&controller).empty_state_hidden);
    assert!(last_view(&controller).list_hidden);
    assert_eq!(last_view(&controller).counter_text, "0 tasks");
}

#[test]
fn reopen_restores_tasks_but_not_filter() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tasks.db");
    let open = || {
        let store = tasklist_core::SqliteKeyValueStore::new(
            tasklist_core::db::open_db(&path).unwrap(),
            "local",
        );
        TaskListController::open(TaskListRepository::new(store), SnapshotTarget::new()).unwrap()
    };

    let mut first = open();
    first.add_task("persisted").unwrap();
    first.set_filter(Filter::Completed);
    drop(first);

    let second = open();
    assert_eq!(second.active_filter(), Filter::All);
    let texts = second
        .tasks()
        .iter()
        .map(|task| task.text.as_str())
        .collect::<Vec<_>>();
    assert_eq!(texts, vec!["persisted"]);
}

#[test]
fn stored_empty_text_task_survives_later_mutations() {
    let store = MemoryKeyValueStore::with_item(
        TASKS_STORAGE_KEY,
        r#"[{"id":"1","text":"","completed":false}]"#,
    );
    let mut controller = open_with(store);
    assert_eq!(controller.tasks().len(), 1);

    controller.add_task("x").unwrap();

    let reloaded = controller.repository().load().unwrap();
    let ids = reloaded
        .iter()
        .map(|task| task.id.as_str())
        .collect::<Vec<_>>();
    assert_eq!(ids.len(), 2);
    assert_eq!(ids[1], "1");
    assert_eq!(reloaded[1].text, "");
}
