use super::task::Task;

/// Check whether a task matches a search query: case-insensitive substring
/// match against the name and status columns. An empty query matches all.
pub fn matches_query(task: &Task, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let query = query.to_lowercase();
    task.name.to_lowercase().contains(&query) || task.status.label().contains(&query)
}

/// Derive the visible-row view for the current query: indices into the task
/// collection, in order. Non-matching tasks are hidden, never removed.
pub fn visible_rows(tasks: &[Task], query: &str) -> Vec<usize> {
    tasks
        .iter()
        .enumerate()
        .filter(|(_, task)| matches_query(task, query))
        .map(|(idx, _)| idx)
        .collect()
}
