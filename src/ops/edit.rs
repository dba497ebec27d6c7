use crate::model::api::{BulkUpdateRequest, TaskPackRequest};
use crate::model::filter::FilterCondition;
use crate::parse::query_builder::build_query;

/// Error type for user-driven edit operations. These are surfaced
/// synchronously, before any request leaves the client.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EditError {
    #[error("assignee name is empty")]
    EmptyAssignee,
    #[error("assignee is already present: {0}")]
    DuplicateAssignee(String),
    #[error("no tasks selected")]
    NoTasksSelected,
    #[error("update does not change any field")]
    EmptyUpdate,
    #[error("at least one filter condition is required")]
    EmptyFilter,
}

/// Add an assignee, enforcing the set-like semantics of the field:
/// names are trimmed, blanks rejected, duplicates rejected.
pub fn add_assignee(assignees: &mut Vec<String>, name: &str) -> Result<(), EditError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(EditError::EmptyAssignee);
    }
    if assignees.iter().any(|a| a == name) {
        return Err(EditError::DuplicateAssignee(name.to_string()));
    }
    assignees.push(name.to_string());
    Ok(())
}

/// Remove an assignee by exact name. Removing a name that is not present
/// is a no-op.
pub fn remove_assignee(assignees: &mut Vec<String>, name: &str) {
    assignees.retain(|a| a != name);
}

/// Split comma-separated user input into cleaned list entries.
pub fn split_list_input(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

/// Validate a bulk update before it is sent: at least one task and at
/// least one field to change.
pub fn validate_bulk_update(request: &BulkUpdateRequest) -> Result<(), EditError> {
    if request.task_ids.is_empty() {
        return Err(EditError::NoTasksSelected);
    }
    if request.update.is_empty() {
        return Err(EditError::EmptyUpdate);
    }
    Ok(())
}

/// Validate a task-pack generation request: an empty selection is
/// rejected client-side.
pub fn validate_task_pack(request: &TaskPackRequest) -> Result<(), EditError> {
    if request.task_ids.is_empty() {
        return Err(EditError::NoTasksSelected);
    }
    Ok(())
}

/// Build the query text for persisting a saved view. An all-empty
/// condition builds to the empty string, which must never be saved.
pub fn build_view_query(cond: &FilterCondition) -> Result<String, EditError> {
    let query = build_query(cond);
    if query.trim().is_empty() {
        return Err(EditError::EmptyFilter);
    }
    Ok(query)
}
