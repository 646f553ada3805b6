#[cfg(test)]
mod tests {
    use agenda::libs::appointment::{Appointment, AppointmentList};
    use agenda::libs::calendar::DateTime;
    use agenda::libs::session::Session;
    use agenda::libs::snapshot::{self, SnapshotError, CURRENT_VERSION};
    use agenda::libs::todo::{Priority, TodoItem, TodoList};
    use std::fs;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct SnapshotTestContext {
        temp_dir: TempDir,
    }

    impl TestContext for SnapshotTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            SnapshotTestContext { temp_dir }
        }
    }

    fn sample_appointments() -> AppointmentList {
        let mut list = AppointmentList::new();
        list.add(Appointment::new(DateTime::new(2025, 3, 10, 14, 30), 0, "point event"));
        list.add(Appointment::new(DateTime::new(2025, 1, 30, 9, 0), 4320, "three day offsite"));
        list.add(Appointment::new(DateTime::new(2025, 3, 1, 9, 0), 90, "review, with comma"));
        list
    }

    fn sample_todos() -> TodoList {
        let mut list = TodoList::new();
        list.add(TodoItem::new("ship release", Priority::Urgent, false));
        list.add(TodoItem::new("water plants", Priority::Normal, true));
        list.add(TodoItem::new("write notes \"quoted\"", Priority::High, false));
        list
    }

    #[test_context(SnapshotTestContext)]
    #[test]
    fn test_appointment_round_trip(ctx: &mut SnapshotTestContext) {
        let list = sample_appointments();
        let path = ctx.temp_dir.path().join("appointments.dat");

        snapshot::save_appointments(&list, &path).unwrap();
        let loaded = AppointmentList::from_items(snapshot::load_appointments(&path).unwrap());

        assert_eq!(loaded.len(), list.len());
        for (original, restored) in list.items().iter().zip(loaded.items()) {
            assert_eq!(original, restored);
        }
    }

    #[test_context(SnapshotTestContext)]
    #[test]
    fn test_todo_round_trip(ctx: &mut SnapshotTestContext) {
        let list = sample_todos();
        let path = ctx.temp_dir.path().join("todos.dat");

        snapshot::save_todos(&list, &path).unwrap();
        let loaded = TodoList::from_items(snapshot::load_todos(&path).unwrap());

        assert_eq!(loaded.len(), list.len());
        for (original, restored) in list.items().iter().zip(loaded.items()) {
            assert_eq!(original, restored);
        }
    }

    #[test_context(SnapshotTestContext)]
    #[test]
    fn test_version_gate_rejects_and_leaves_store_untouched(ctx: &mut SnapshotTestContext) {
        let path = ctx.temp_dir.path().join("appointments.dat");

        // A snapshot from some future version: header says 99
        let mut bytes = Vec::new();
        bytes.extend_from_slice(&99i32.to_ne_bytes());
        bytes.extend_from_slice(&0i32.to_ne_bytes());
        fs::write(&path, bytes).unwrap();

        let existing = sample_appointments();
        let result = snapshot::load_appointments(&path);
        match result {
            Err(SnapshotError::VersionMismatch { found, expected }) => {
                assert_eq!(found, 99);
                assert_eq!(expected, CURRENT_VERSION);
            }
            other => panic!("expected a version mismatch, got {:?}", other),
        }

        // The in-memory store the caller held is untouched by the failure
        assert_eq!(existing.len(), 3);
    }

    #[test_context(SnapshotTestContext)]
    #[test]
    fn test_truncated_tail_keeps_leading_records(ctx: &mut SnapshotTestContext) {
        let list = sample_appointments();
        let path = ctx.temp_dir.path().join("appointments.dat");
        snapshot::save_appointments(&list, &path).unwrap();

        // Chop the file in the middle of the last record
        let bytes = fs::read(&path).unwrap();
        fs::write(&path, &bytes[..bytes.len() - 40]).unwrap();

        let loaded = snapshot::load_appointments(&path).unwrap();
        assert_eq!(loaded.len(), list.len() - 1);
    }

    #[test_context(SnapshotTestContext)]
    #[test]
    fn test_session_round_trip(_ctx: &mut SnapshotTestContext) {
        let mut session = Session::load().unwrap();
        assert!(session.appointments.is_empty());
        assert!(session.todos.is_empty());

        session.appointments.add(Appointment::new(DateTime::new(2025, 3, 1, 9, 0), 90, "standup"));
        session.todos.add(TodoItem::new("ship release", Priority::Urgent, false));
        session.save().unwrap();

        let restored = Session::load().unwrap();
        assert_eq!(restored.appointments.len(), 1);
        assert_eq!(restored.appointments.items()[0].description, "standup");
        assert_eq!(restored.todos.len(), 1);
        assert_eq!(restored.todos.items()[0].priority, Priority::Urgent);
    }
}
