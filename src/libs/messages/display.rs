//! Display implementation for application messages.
//!
//! All user-facing text lives here, in one place, so wording stays
//! consistent and the call sites stay free of string literals. Messages
//! with dynamic content interpolate their typed parameters.

use super::types::Message;
use std::fmt;

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            // === APPOINTMENT MESSAGES ===
            Message::AppointmentAdded => "Appointment added".to_string(),
            Message::AppointmentUpdated => "Appointment updated".to_string(),
            Message::AppointmentDeleted => "Appointment deleted".to_string(),
            Message::AppointmentIndexInvalid(index) => format!("No appointment at index {}", index),
            Message::AppointmentsHeader(date) => format!("Appointments for {}", date),
            Message::NoAppointmentsOnDate(date) => format!("No appointments on {}", date),
            Message::NoAppointments => "No appointments yet".to_string(),

            // === TODO MESSAGES ===
            Message::TodoAdded => "TODO added".to_string(),
            Message::TodoUpdated => "TODO updated".to_string(),
            Message::TodoDeleted => "TODO deleted".to_string(),
            Message::TodoMarkedDone => "TODO marked as done".to_string(),
            Message::TodoMarkedPending => "TODO marked as pending".to_string(),
            Message::TodoIndexInvalid(index) => format!("No TODO at index {}", index),
            Message::NoTodos => "No TODO items yet".to_string(),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigParseError => "Failed to parse configuration file".to_string(),

            // === PERSISTENCE MESSAGES ===
            Message::SnapshotLoadFailed(file, reason) => {
                format!("Could not load {}: {}. Starting with an empty list", file, reason)
            }

            // === EXPORT/IMPORT MESSAGES ===
            Message::ExportCompleted(path) => format!("Export completed: {}", path),
            Message::ImportedAppointments(count, path) => format!("Imported {} appointment(s) from {}", count, path),
            Message::ImportedTodos(count, path) => format!("Imported {} TODO item(s) from {}", count, path),
            Message::UnsupportedImportFile(path) => {
                format!("Cannot import {}: expected an .ics or .csv file", path)
            }

            // === BACKUP MESSAGES ===
            Message::BackupCreated(path) => format!("Backup created: {}", path),
            Message::BackupRestored(appointments, todos) => {
                format!("Backup restored: {} appointment(s), {} TODO item(s)", appointments, todos)
            }

            // === PROMPTS ===
            Message::PromptTime => "Time (HH:MM)".to_string(),
            Message::PromptDuration => "Duration (e.g. 30m, 4h, 3d2h30m; 0 for none)".to_string(),
            Message::PromptDescription => "Description".to_string(),
            Message::PromptPriority => "Priority".to_string(),
            Message::PromptDataDir => "Data directory (empty for platform default)".to_string(),
            Message::PromptConfirmDelete => "Delete selected item?".to_string(),
            Message::PromptConfirmRestore => "Replace current data with the backup contents?".to_string(),

            // === GENERAL MESSAGES ===
            Message::OperationCancelled => "Operation cancelled".to_string(),
            Message::InvalidTimeFormat => "Expected time as HH:MM".to_string(),
            Message::InvalidDuration(reason) => format!("Invalid duration: {}", reason),
        };

        write!(f, "{}", text)
    }
}
