use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Task workflow status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    Open,
    InProgress,
    Review,
    Blocked,
    Done,
    Archived,
}

impl TaskStatus {
    /// All statuses, in workflow order
    pub const ALL: [TaskStatus; 6] = [
        TaskStatus::Open,
        TaskStatus::InProgress,
        TaskStatus::Review,
        TaskStatus::Blocked,
        TaskStatus::Done,
        TaskStatus::Archived,
    ];

    /// The wire/metadata-block token for this status
    pub fn as_str(self) -> &'static str {
        match self {
            TaskStatus::Open => "open",
            TaskStatus::InProgress => "in_progress",
            TaskStatus::Review => "review",
            TaskStatus::Blocked => "blocked",
            TaskStatus::Done => "done",
            TaskStatus::Archived => "archived",
        }
    }

    /// Parse a wire token into a status
    pub fn from_str(s: &str) -> Option<TaskStatus> {
        match s {
            "open" => Some(TaskStatus::Open),
            "in_progress" => Some(TaskStatus::InProgress),
            "review" => Some(TaskStatus::Review),
            "blocked" => Some(TaskStatus::Blocked),
            "done" => Some(TaskStatus::Done),
            "archived" => Some(TaskStatus::Archived),
            _ => None,
        }
    }
}

/// Task priority, P0 (most urgent) through P4
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TaskPriority {
    P0,
    P1,
    P2,
    P3,
    P4,
}

impl TaskPriority {
    /// All priorities, most urgent first
    pub const ALL: [TaskPriority; 5] = [
        TaskPriority::P0,
        TaskPriority::P1,
        TaskPriority::P2,
        TaskPriority::P3,
        TaskPriority::P4,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            TaskPriority::P0 => "P0",
            TaskPriority::P1 => "P1",
            TaskPriority::P2 => "P2",
            TaskPriority::P3 => "P3",
            TaskPriority::P4 => "P4",
        }
    }

    pub fn from_str(s: &str) -> Option<TaskPriority> {
        match s {
            "P0" => Some(TaskPriority::P0),
            "P1" => Some(TaskPriority::P1),
            "P2" => Some(TaskPriority::P2),
            "P3" => Some(TaskPriority::P3),
            "P4" => Some(TaskPriority::P4),
            _ => None,
        }
    }
}

/// A task record as served by the backend.
///
/// The structured fields are a materialized view the server derives by
/// parsing `markdown_body`; when editing status/priority/assignees/labels
/// the markdown document is the source of truth.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    #[serde(default)]
    pub project_id: String,
    pub title: String,
    pub status: TaskStatus,
    pub priority: TaskPriority,
    #[serde(default)]
    pub assignees: Vec<String>,
    #[serde(default)]
    pub labels: Vec<String>,
    /// ISO calendar date (YYYY-MM-DD)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    /// ISO calendar date (YYYY-MM-DD)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
    /// Reference to another task id; absent or dangling means root
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    #[serde(default)]
    pub markdown_body: String,
    /// Open-ended secondary fields (summary, actual dates, ...).
    /// Insertion order is preserved; equality ignores key order.
    #[serde(default)]
    pub extra_meta: IndexMap<String, serde_json::Value>,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub archived_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_by: Option<String>,
}

impl Task {
    /// The `summary` entry of `extra_meta`, if it is a string
    pub fn summary(&self) -> Option<&str> {
        self.extra_meta.get("summary").and_then(|v| v.as_str())
    }
}
