#[cfg(test)]
mod tests {
    use std::fs;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};
    use todo::db::store::Store;
    use todo::db::tasks::TaskCollection;
    use todo::libs::error::TaskError;
    use todo::libs::task::{Priority, Task, TaskPatch};

    struct StoreTestContext {
        temp_dir: TempDir,
        store: Store,
    }

    impl TestContext for StoreTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let store = Store::new(temp_dir.path().join("data").join("tasks.json"));
            StoreTestContext { temp_dir, store }
        }
    }

    impl StoreTestContext {
        fn write_raw(&self, content: &str) {
            fs::create_dir_all(self.store.path().parent().unwrap()).unwrap();
            fs::write(self.store.path(), content).unwrap();
        }
    }

    fn tags(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_load_missing_file_is_empty(ctx: &mut StoreTestContext) {
        let tasks = ctx.store.load().unwrap();
        assert!(tasks.is_empty());
        assert_eq!(tasks.next_id().unwrap(), 1);
        assert!(!ctx.store.path().exists());
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_load_blank_file_is_empty(ctx: &mut StoreTestContext) {
        ctx.write_raw("  \n");
        assert!(ctx.store.load().unwrap().is_empty());

        ctx.write_raw("[]");
        assert!(ctx.store.load().unwrap().is_empty());
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_save_and_load_round_trip(ctx: &mut StoreTestContext) {
        let mut tasks = TaskCollection::new();
        tasks.add(Task::create("Finish report", Some("high"), Some("2025-10-31"), &tags(&["work", "urgent"])).unwrap()).unwrap();
        tasks.add(Task::create("No extras", None, None, &[]).unwrap()).unwrap();
        ctx.store.save(&tasks).unwrap();

        let loaded = ctx.store.load().unwrap();
        assert_eq!(loaded, tasks);

        let bare = &loaded.tasks()[1];
        assert!(bare.due.is_none());
        assert!(bare.tags.is_empty());
        assert_eq!(bare.priority, Priority::Medium);
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_ids_survive_deleting_newest_across_saves(ctx: &mut StoreTestContext) {
        let mut tasks = ctx.store.load().unwrap();
        tasks.add(Task::create("one", None, None, &[]).unwrap()).unwrap();
        tasks.add(Task::create("two", None, None, &[]).unwrap()).unwrap();
        tasks.remove(2).unwrap();
        ctx.store.save(&tasks).unwrap();

        let mut reloaded = ctx.store.load().unwrap();
        assert_eq!(reloaded.last_id(), 2);
        assert_eq!(reloaded.add(Task::create("three", None, None, &[]).unwrap()).unwrap().id, 3);
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_malformed_file_is_corrupt_and_preserved(ctx: &mut StoreTestContext) {
        ctx.write_raw("{ not json");

        let err = ctx.store.load().unwrap_err();
        assert!(matches!(err, TaskError::CorruptStore { .. }));
        assert_eq!(fs::read_to_string(ctx.store.path()).unwrap(), "{ not json");
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_invalid_records_are_corrupt(ctx: &mut StoreTestContext) {
        ctx.write_raw(
            r#"[{"id":1,"title":"","priority":"low","due":null,"tags":[],"done":false,
                "created_at":"2025-01-01T00:00:00Z","updated_at":"2025-01-01T00:00:00Z"}]"#,
        );
        assert!(matches!(ctx.store.load(), Err(TaskError::CorruptStore { .. })));

        ctx.write_raw(
            r#"[{"id":1,"title":"x","priority":"urgent","due":null,"tags":[],"done":false,
                "created_at":"2025-01-01T00:00:00Z","updated_at":"2025-01-01T00:00:00Z"}]"#,
        );
        assert!(matches!(ctx.store.load(), Err(TaskError::CorruptStore { .. })));

        ctx.write_raw(
            r#"[{"id":1,"title":"x","tags":["Work"],
                "created_at":"2025-01-01T00:00:00Z","updated_at":"2025-01-01T00:00:00Z"}]"#,
        );
        assert!(matches!(ctx.store.load(), Err(TaskError::CorruptStore { .. })));

        ctx.write_raw(r#"{"tasks": 5}"#);
        assert!(matches!(ctx.store.load(), Err(TaskError::CorruptStore { .. })));
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_legacy_array_is_sorted_by_id(ctx: &mut StoreTestContext) {
        ctx.write_raw(
            r#"[
                {"id":7,"title":"later","created_at":"2025-01-01T00:00:00Z","updated_at":"2025-01-01T00:00:00Z"},
                {"id":3,"title":"earlier","tags":["home"],"due":"2025-05-01",
                 "created_at":"2025-01-01T00:00:00Z","updated_at":"2025-01-01T00:00:00Z"}
            ]"#,
        );

        let tasks = ctx.store.load().unwrap();
        assert_eq!(tasks.tasks().iter().map(|t| t.id).collect::<Vec<_>>(), vec![3, 7]);
        assert_eq!(tasks.next_id().unwrap(), 8);
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_failed_update_leaves_disk_unchanged(ctx: &mut StoreTestContext) {
        let mut tasks = TaskCollection::new();
        tasks.add(Task::create("keep me", None, None, &[]).unwrap()).unwrap();
        ctx.store.save(&tasks).unwrap();
        let before = fs::read_to_string(ctx.store.path()).unwrap();

        let mut loaded = ctx.store.load().unwrap();
        let patch = TaskPatch {
            title: Some("changed".to_string()),
            ..TaskPatch::default()
        };
        assert!(matches!(loaded.update(42, &patch), Err(TaskError::NotFound(42))));

        assert_eq!(fs::read_to_string(ctx.store.path()).unwrap(), before);
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_save_leaves_no_temp_files(ctx: &mut StoreTestContext) {
        let mut tasks = TaskCollection::new();
        tasks.add(Task::create("a", None, None, &[]).unwrap()).unwrap();
        ctx.store.save(&tasks).unwrap();
        tasks.add(Task::create("b", None, None, &[]).unwrap()).unwrap();
        ctx.store.save(&tasks).unwrap();

        let entries: Vec<_> = fs::read_dir(ctx.temp_dir.path().join("data"))
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(entries, vec![std::ffi::OsString::from("tasks.json")]);
        assert_eq!(ctx.store.load().unwrap().len(), 2);
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_store_at_id_ceiling_refuses_new_tasks(ctx: &mut StoreTestContext) {
        ctx.write_raw(
            r#"[{"id":4294967295,"title":"x","created_at":"2025-01-01T00:00:00Z","updated_at":"2025-01-01T00:00:00Z"}]"#,
        );
        let before = fs::read_to_string(ctx.store.path()).unwrap();

        let mut tasks = ctx.store.load().unwrap();
        assert_eq!(tasks.len(), 1);

        let err = tasks.add(Task::create("y", None, None, &[]).unwrap()).unwrap_err();
        assert!(matches!(err, TaskError::IdsExhausted(u32::MAX)));
        assert!(err.is_fatal());
        assert_eq!(tasks.len(), 1);
        assert_eq!(fs::read_to_string(ctx.store.path()).unwrap(), before);
    }
}
