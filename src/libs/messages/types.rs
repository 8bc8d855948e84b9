use std::path::PathBuf;

#[derive(Debug, Clone)]
pub enum Message {
    // === TASK MESSAGES ===
    TaskAdded(u32, String), // id, title
    TaskUpdated(u32),
    TaskCompleted(u32),
    TaskAlreadyCompleted(u32),
    TaskDeleted(u32),
    TasksHeader,
    NoTasksFound,
    NothingToUpdate,
    ConfirmDeleteTask(u32, String), // id, title

    // === SEARCH MESSAGES ===
    SearchHeader,
    NoMatchingTasks,

    // === EXPORT MESSAGES ===
    ExportCompleted(usize, PathBuf), // count, path
    NothingToExport,

    // === CONFIGURATION MESSAGES ===
    ConfigHeader,
    ConfigSaved(PathBuf),
    PromptStorePath,
    PromptExportDir,

    // === STORE MESSAGES ===
    StoreCorrupt(PathBuf),
    UsingStore(PathBuf),

    // === GENERAL MESSAGES ===
    OperationCancelled,
}
