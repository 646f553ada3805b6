//! The in-memory session: both stores plus their storage location.
//!
//! A `Session` is the explicit context object every command works
//! against. It is constructed by loading the binary snapshots from the
//! data directory and written back with [`Session::save`] when the
//! command is done, mirroring the load-at-startup / save-at-shutdown
//! lifecycle of the host application.
//!
//! Loading is forgiving: a missing snapshot yields an empty store, and a
//! damaged or version-mismatched snapshot yields an empty store plus a
//! warning, leaving the file on disk untouched for inspection. Saving
//! always writes the current version.

use crate::libs::appointment::AppointmentList;
use crate::libs::config::Config;
use crate::libs::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::libs::snapshot;
use crate::libs::todo::TodoList;
use crate::{msg_debug, msg_warning};
use anyhow::Result;

pub const APPOINTMENTS_FILE: &str = "appointments.dat";
pub const TODOS_FILE: &str = "todos.dat";

pub struct Session {
    pub appointments: AppointmentList,
    pub todos: TodoList,
    storage: DataStorage,
}

impl Session {
    /// Loads both stores from the configured data directory.
    pub fn load() -> Result<Self> {
        let config = Config::read().unwrap_or_default();
        Self::load_from(config.storage())
    }

    pub fn load_from(storage: DataStorage) -> Result<Self> {
        let appointments_path = storage.get_path(APPOINTMENTS_FILE)?;
        let appointments = if appointments_path.exists() {
            match snapshot::load_appointments(&appointments_path) {
                Ok(items) => AppointmentList::from_items(items),
                Err(err) => {
                    msg_warning!(Message::SnapshotLoadFailed(APPOINTMENTS_FILE.to_string(), err.to_string()));
                    AppointmentList::new()
                }
            }
        } else {
            AppointmentList::new()
        };

        let todos_path = storage.get_path(TODOS_FILE)?;
        let todos = if todos_path.exists() {
            match snapshot::load_todos(&todos_path) {
                Ok(items) => TodoList::from_items(items),
                Err(err) => {
                    msg_warning!(Message::SnapshotLoadFailed(TODOS_FILE.to_string(), err.to_string()));
                    TodoList::new()
                }
            }
        } else {
            TodoList::new()
        };

        msg_debug!(format!("Session loaded: {} appointment(s), {} todo(s)", appointments.len(), todos.len()));

        Ok(Self { appointments, todos, storage })
    }

    /// Writes both stores back to their snapshots.
    pub fn save(&self) -> Result<()> {
        snapshot::save_appointments(&self.appointments, &self.storage.get_path(APPOINTMENTS_FILE)?)?;
        snapshot::save_todos(&self.todos, &self.storage.get_path(TODOS_FILE)?)?;
        Ok(())
    }

    pub fn storage(&self) -> &DataStorage {
        &self.storage
    }
}
