//! CSV export and import for todo items.
//!
//! Rows follow the `Description,Priority,Completed` header, with the
//! priority spelled out (`Normal`/`High`/`Urgent`) and completion as
//! `Yes`/`No`. Both directions go through the `csv` crate, so quoting is
//! full RFC 4180 in each direction: descriptions containing commas or
//! doubled quotes round-trip exactly.
//!
//! Import is lenient the way the other interchange codecs are: rows that
//! fail to parse or are missing fields are skipped silently, and unknown
//! priority labels degrade to `Normal`.

use crate::libs::todo::{Priority, TodoItem, TodoList};
use anyhow::Result;
use std::path::Path;

const HEADER: [&str; 3] = ["Description", "Priority", "Completed"];

pub fn export_todos(list: &TodoList, path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;

    writer.write_record(HEADER)?;
    for todo in list.items() {
        writer.write_record([todo.description.as_str(), todo.priority.label(), if todo.completed { "Yes" } else { "No" }])?;
    }

    writer.flush()?;
    Ok(())
}

pub fn import_todos(path: &Path) -> Result<Vec<TodoItem>> {
    let mut reader = csv::ReaderBuilder::new().has_headers(true).flexible(true).from_path(path)?;

    let mut todos = Vec::new();
    for record in reader.records() {
        // Damaged rows are dropped, not surfaced
        let record = match record {
            Ok(record) => record,
            Err(_) => continue,
        };

        let (description, priority, completed) = match (record.get(0), record.get(1), record.get(2)) {
            (Some(description), Some(priority), Some(completed)) => (description, priority, completed),
            _ => continue,
        };

        todos.push(TodoItem::new(description, Priority::from_label(priority), completed == "Yes"));
    }

    Ok(todos)
}
