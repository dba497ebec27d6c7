use serde::{Deserialize, Serialize};

use crate::model::task::{TaskPriority, TaskStatus};

/// Partial update applied uniformly to a set of tasks.
/// Absent fields are left untouched on every task.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BulkUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<TaskStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<TaskPriority>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignees: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub labels: Option<Vec<String>>,
}

impl BulkUpdate {
    /// True if the update would change nothing
    pub fn is_empty(&self) -> bool {
        self.status.is_none()
            && self.priority.is_none()
            && self.assignees.is_none()
            && self.labels.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BulkUpdateRequest {
    pub task_ids: Vec<String>,
    #[serde(flatten)]
    pub update: BulkUpdate,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BulkUpdateResponse {
    pub updated: usize,
}

/// Audience template for a generated task pack
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskPackTemplate {
    Implement,
    Bugfix,
    Research,
    Review,
}

impl TaskPackTemplate {
    pub const ALL: [TaskPackTemplate; 4] = [
        TaskPackTemplate::Implement,
        TaskPackTemplate::Bugfix,
        TaskPackTemplate::Research,
        TaskPackTemplate::Review,
    ];
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskPackRequest {
    pub project_id: String,
    pub task_ids: Vec<String>,
    pub template: TaskPackTemplate,
    #[serde(default)]
    pub include_related: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskPackResponse {
    pub markdown: String,
    pub task_count: usize,
}

/// Error shape returned by the backend. Carried through the client as-is;
/// the formatters and codecs never retry on it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, thiserror::Error)]
#[error("{message}")]
pub struct ApiError {
    pub error: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}
