use tidylist_core::db::{open_db_in_memory, DbError};
use tidylist_core::store::RawStore;
use tidylist_core::view::{TaskIntent, ANCHOR_TASK_LIST};
use tidylist_core::{
    ControllerError, ListStore, MemoryListStore, MemorySurface, SqliteListStore, StoreError,
    StoreResult, Task, TaskController, ViewError,
};

/// Reads as empty and rejects every write.
struct ReadOnlyStore;

impl RawStore for ReadOnlyStore {
    fn read_raw(&self, _key: &str) -> StoreResult<Option<String>> {
        Ok(None)
    }

    fn write_raw(&self, _key: &str, _value: &str) -> StoreResult<()> {
        Err(StoreError::Db(DbError::Sqlite(rusqlite::Error::InvalidQuery)))
    }
}

fn controller(store: &MemoryListStore) -> TaskController<&MemoryListStore, MemorySurface> {
    TaskController::new(store, MemorySurface::for_tasks()).unwrap()
}

#[test]
fn add_appends_trimmed_task_and_persists() {
    let store = MemoryListStore::new();
    let mut tasks = controller(&store);
    tasks.add("first").unwrap();

    let id = tasks.add("  second  ").unwrap().expect("non-blank text is accepted");

    assert_eq!(tasks.tasks().len(), 2);
    let last = tasks.tasks().last().unwrap();
    assert_eq!(last.id, id);
    assert_eq!(last.text, "second");
    assert!(!last.completed);

    let saved: Vec<Task> = store.load("tasks");
    assert_eq!(saved, tasks.tasks());
}

#[test]
fn blank_add_is_a_no_op() {
    let store = MemoryListStore::new();
    let mut tasks = controller(&store);
    let renders_before = tasks.surface().task_render_count();

    assert_eq!(tasks.add("   ").unwrap(), None);
    assert_eq!(tasks.add("").unwrap(), None);

    assert!(tasks.tasks().is_empty());
    assert!(store.raw("tasks").is_none());
    assert_eq!(tasks.surface().task_render_count(), renders_before);
}

#[test]
fn toggle_twice_restores_completion() {
    let store = MemoryListStore::new();
    let mut tasks = controller(&store);
    let id = tasks.add("laundry").unwrap().unwrap();

    assert!(tasks.toggle(id).unwrap());
    assert!(tasks.get(id).unwrap().completed);
    assert_eq!(tasks.surface().pending_label(), "0 tasks pending");

    assert!(tasks.toggle(id).unwrap());
    assert!(!tasks.get(id).unwrap().completed);
    assert_eq!(tasks.surface().pending_label(), "1 task pending");
}

#[test]
fn unknown_ids_leave_collection_unchanged() {
    let store = MemoryListStore::new();
    let mut tasks = controller(&store);
    tasks.add("a").unwrap();
    tasks.add("b").unwrap();
    let before = tasks.tasks().to_vec();
    let saved_before = store.raw("tasks");
    let renders_before = tasks.surface().task_render_count();
    let missing = before.iter().map(|task| task.id).max().unwrap() + 1;

    assert!(!tasks.toggle(missing).unwrap());
    assert!(!tasks.edit(missing, Some("x")).unwrap());
    assert!(!tasks.delete(missing).unwrap());

    assert_eq!(tasks.tasks(), before.as_slice());
    assert_eq!(store.raw("tasks"), saved_before);
    assert_eq!(tasks.surface().task_render_count(), renders_before);
}

#[test]
fn edit_replaces_text_unless_blank_or_cancelled() {
    let store = MemoryListStore::new();
    let mut tasks = controller(&store);
    let id = tasks.add("draft").unwrap().unwrap();

    assert!(!tasks.edit(id, None).unwrap());
    assert!(!tasks.edit(id, Some("   ")).unwrap());
    assert_eq!(tasks.get(id).unwrap().text, "draft");

    assert!(tasks.edit(id, Some("  final  ")).unwrap());
    assert_eq!(tasks.get(id).unwrap().text, "final");
}

#[test]
fn edit_with_prompt_offers_current_text() {
    let store = MemoryListStore::new();
    let mut tasks = controller(&store);
    let id = tasks.add("buy milk").unwrap().unwrap();

    let mut seen = Vec::new();
    let mut prompt = |current: &str| {
        seen.push(current.to_string());
        Some(format!("{current} and eggs"))
    };
    assert!(tasks.edit_with_prompt(id, &mut prompt).unwrap());
    assert_eq!(seen, vec!["buy milk"]);
    assert_eq!(tasks.get(id).unwrap().text, "buy milk and eggs");

    let mut cancel = |_: &str| -> Option<String> { None };
    assert!(!tasks.edit_with_prompt(id, &mut cancel).unwrap());
    assert_eq!(tasks.get(id).unwrap().text, "buy milk and eggs");
}

#[test]
fn delete_removes_only_the_match() {
    let store = MemoryListStore::new();
    let mut tasks = controller(&store);
    let a = tasks.add("a").unwrap().unwrap();
    let b = tasks.add("b").unwrap().unwrap();

    assert!(tasks.delete(a).unwrap());
    assert_eq!(tasks.ids(), vec![b]);
    assert_eq!(store.load::<Task>("tasks").len(), 1);
}

#[test]
fn every_mutation_renders_the_full_list() {
    let store = MemoryListStore::new();
    let mut tasks = controller(&store);
    assert_eq!(tasks.surface().task_render_count(), 1);

    let a = tasks.add("a").unwrap().unwrap();
    tasks.add("b").unwrap();
    tasks.toggle(a).unwrap();

    let surface = tasks.surface();
    assert_eq!(surface.task_render_count(), 4);
    let rows = surface.task_rows();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].class_name, "task-item completed");
    assert_eq!(rows[1].class_name, "task-item");
}

#[test]
fn row_intents_route_back_to_the_controller() {
    let store = MemoryListStore::new();
    let mut tasks = controller(&store);
    tasks.add("a").unwrap();
    let row = tasks.surface().task_rows()[0].clone();

    assert!(tasks.handle(row.toggle_intent()).unwrap());
    assert!(tasks.get(row.id).unwrap().completed);
    assert!(tasks.handle(row.edit_intent(Some("renamed".into()))).unwrap());
    assert_eq!(tasks.get(row.id).unwrap().text, "renamed");
    assert!(tasks.handle(row.delete_intent()).unwrap());
    assert!(tasks.tasks().is_empty());
}

#[test]
fn reorder_accepts_permutations_only() {
    let store = MemoryListStore::new();
    let mut tasks = controller(&store);
    let a = tasks.add("a").unwrap().unwrap();
    let b = tasks.add("b").unwrap().unwrap();
    let c = tasks.add("c").unwrap().unwrap();

    tasks.handle(TaskIntent::Reorder(vec![c, a, b])).unwrap();
    assert_eq!(tasks.ids(), vec![c, a, b]);
    let saved: Vec<Task> = store.load("tasks");
    assert_eq!(saved.iter().map(|t| t.id).collect::<Vec<_>>(), vec![c, a, b]);

    for bad in [vec![a, b], vec![a, a, b], vec![a, b, c + 100]] {
        let err = tasks.reorder(&bad).unwrap_err();
        assert!(matches!(err, ControllerError::InvalidReorder(_)));
        assert_eq!(tasks.ids(), vec![c, a, b]);
    }
}

#[test]
fn corrupt_storage_loads_as_empty_collection() {
    let store = MemoryListStore::new();
    store.seed_raw("tasks", "{not json");
    let mut tasks = controller(&store);
    assert!(tasks.tasks().is_empty());

    tasks.add("fresh start").unwrap();
    assert_eq!(store.load::<Task>("tasks").len(), 1);
}

#[test]
fn state_survives_a_new_controller_over_sqlite() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteListStore::new(&conn);
    let (a, b) = {
        let mut tasks = TaskController::new(&store, MemorySurface::for_tasks()).unwrap();
        let a = tasks.add("persisted").unwrap().unwrap();
        let b = tasks.add("also persisted").unwrap().unwrap();
        tasks.toggle(b).unwrap();
        (a, b)
    };

    let mut reloaded = TaskController::new(&store, MemorySurface::for_tasks()).unwrap();
    assert_eq!(reloaded.ids(), vec![a, b]);
    assert!(reloaded.get(b).unwrap().completed);
    assert_eq!(reloaded.surface().task_rows().len(), 2);

    let c = reloaded.add("new").unwrap().unwrap();
    assert!(c > b, "new ids must never reuse persisted ones");
}

#[test]
fn custom_key_is_isolated_from_default() {
    let store = MemoryListStore::new();
    let mut work = TaskController::with_key(&store, MemorySurface::for_tasks(), "work").unwrap();
    work.add("ship it").unwrap();

    let home = controller(&store);
    assert!(home.tasks().is_empty());
    assert_eq!(work.storage_key(), "work");
}

#[test]
fn missing_anchor_is_a_startup_failure() {
    let store = MemoryListStore::new();
    let result = TaskController::new(&store, MemorySurface::with_anchors(&[ANCHOR_TASK_LIST]));
    match result {
        Err(ControllerError::View(ViewError::MissingAnchor(anchor))) => {
            assert_eq!(anchor, "taskCount")
        }
        Err(other) => panic!("unexpected error: {other}"),
        Ok(_) => panic!("controller must not start without anchors"),
    }
}

#[test]
fn failed_save_keeps_change_and_still_renders() {
    let mut tasks = TaskController::new(ReadOnlyStore, MemorySurface::for_tasks()).unwrap();
    let renders_before = tasks.surface().task_render_count();

    let err = tasks.add("unsaved").unwrap_err();

    assert!(matches!(err, ControllerError::Store(_)));
    assert_eq!(tasks.tasks().len(), 1);
    assert_eq!(tasks.tasks()[0].text, "unsaved");
    assert_eq!(tasks.surface().task_render_count(), renders_before + 1);
    assert_eq!(tasks.surface().task_rows().len(), 1);
    assert_eq!(tasks.surface().pending_label(), "1 task pending");

    let id = tasks.ids()[0];
    assert!(matches!(tasks.toggle(id), Err(ControllerError::Store(_))));
    assert!(tasks.get(id).unwrap().completed);
    assert!(tasks.surface().task_rows()[0].completed);
}

#[test]
fn stored_repeated_ids_can_still_be_reordered() {
    let store = MemoryListStore::new();
    store.seed_raw(
        "tasks",
        r#"[
            {"id": 7, "text": "first seven", "completed": false, "createdAt": 1},
            {"id": 8, "text": "eight", "completed": false, "createdAt": 2},
            {"id": 7, "text": "second seven", "completed": true, "createdAt": 3}
        ]"#,
    );
    let mut tasks = controller(&store);
    assert_eq!(tasks.ids(), vec![7, 8, 7]);

    tasks.reorder(&[8, 7, 7]).unwrap();

    let texts: Vec<&str> = tasks.tasks().iter().map(|task| task.text.as_str()).collect();
    assert_eq!(texts, vec!["eight", "first seven", "second seven"]);
    assert_eq!(store.load::<Task>("tasks").len(), 3);

    for bad in [vec![8, 8, 7], vec![7, 7, 7], vec![8, 7]] {
        let err = tasks.reorder(&bad).unwrap_err();
        assert!(matches!(err, ControllerError::InvalidReorder(_)));
        assert_eq!(tasks.ids(), vec![8, 7, 7]);
    }
}
