#[derive(Debug, Clone)]
pub enum Message {
    // === APPOINTMENT MESSAGES ===
    AppointmentAdded,
    AppointmentUpdated,
    AppointmentDeleted,
    AppointmentIndexInvalid(usize),
    AppointmentsHeader(String), // date
    NoAppointmentsOnDate(String),
    NoAppointments,

    // === TODO MESSAGES ===
    TodoAdded,
    TodoUpdated,
    TodoDeleted,
    TodoMarkedDone,
    TodoMarkedPending,
    TodoIndexInvalid(usize),
    NoTodos,

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigParseError,

    // === PERSISTENCE MESSAGES ===
    SnapshotLoadFailed(String, String), // file, reason

    // === EXPORT/IMPORT MESSAGES ===
    ExportCompleted(String),            // path
    ImportedAppointments(usize, String), // count, path
    ImportedTodos(usize, String),        // count, path
    UnsupportedImportFile(String),       // path

    // === BACKUP MESSAGES ===
    BackupCreated(String),        // path
    BackupRestored(usize, usize), // appointments, todos

    // === PROMPTS ===
    PromptTime,
    PromptDuration,
    PromptDescription,
    PromptPriority,
    PromptDataDir,
    PromptConfirmDelete,
    PromptConfirmRestore,

    // === GENERAL MESSAGES ===
    OperationCancelled,
    InvalidTimeFormat,
    InvalidDuration(String), // reason
}
