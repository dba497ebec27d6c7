use std::sync::LazyLock;

use regex::Regex;

use crate::model::task::{TaskPriority, TaskStatus};

/// `## ID: Title` heading at the top of a task document
static TITLE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^##\s+([A-Z]+-\d+):\s+(.+)$").unwrap());

/// Interior of the fenced metadata block
static YAML_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("(?s)```yaml\n(.*?)\n```").unwrap());

static STATUS_VALUE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"status:\s*(\w+)").unwrap());
static PRIORITY_VALUE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"priority:\s*(\w+)").unwrap());

/// Body scaffold used when a task is created without a description
const DEFAULT_BODY: &str = "## 詳細\n\nタスクの詳細をここに記載します。";

/// The three structural parts of a task document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskParts {
    pub id: String,
    pub title: String,
    /// Interior of the metadata block (without the fences)
    pub metadata: String,
    /// Everything after the metadata block, trimmed
    pub body: String,
}

/// Pull the `## ID: Title` heading, metadata-block interior and body tail
/// out of a task document. Returns `None` when either the heading or the
/// block is missing.
pub fn extract_parts(markdown: &str) -> Option<TaskParts> {
    let title_caps = TITLE_RE.captures(markdown)?;
    let yaml_caps = YAML_RE.captures(markdown)?;

    let block = yaml_caps.get(0)?;
    let body = markdown[block.end()..].trim().to_string();

    Some(TaskParts {
        id: title_caps[1].to_string(),
        title: title_caps[2].trim().to_string(),
        metadata: yaml_caps[1].to_string(),
        body,
    })
}

/// Generate a fresh task document: heading, metadata block, body.
/// `body` falls back to the default scaffold when absent.
pub fn build_task_markdown(
    id: &str,
    title: &str,
    priority: TaskPriority,
    parent_id: Option<&str>,
    body: Option<&str>,
) -> String {
    let parent_line = match parent_id {
        Some(pid) => format!("parent_id: {}\n", pid),
        None => String::new(),
    };
    format!(
        "## {id}: {title}\n\n```yaml\nid: {id}\nstatus: open\npriority: {priority}\n{parent}assignees: []\nlabels: []\n```\n\n{body}\n",
        id = id,
        title = title,
        priority = priority.as_str(),
        parent = parent_line,
        body = body.unwrap_or(DEFAULT_BODY),
    )
}

/// Problems found in a hand-edited task document. Surfaced to the user
/// before any save is attempted.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("metadata block not found (expected ```yaml ... ```)")]
    MissingBlock,
    #[error("metadata block is missing the {0} field")]
    MissingField(&'static str),
    #[error("invalid status: {0}")]
    InvalidStatus(String),
    #[error("invalid priority: {0}")]
    InvalidPriority(String),
    #[error("unclosed code fence (odd number of ``` markers)")]
    UnclosedFence,
}

const REQUIRED_FIELDS: [&str; 5] = ["id", "status", "priority", "assignees", "labels"];

/// Validate a task document before submitting it. Best-effort and
/// accumulate-all: every detectable problem is reported at once.
pub fn validate_markdown(markdown: &str) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if !markdown.contains("```yaml") {
        errors.push(ValidationError::MissingBlock);
    }

    if let Some(caps) = YAML_RE.captures(markdown) {
        let inner = &caps[1];

        for field in REQUIRED_FIELDS {
            if !inner.contains(&format!("{}:", field)) {
                errors.push(ValidationError::MissingField(field));
            }
        }

        if let Some(status) = STATUS_VALUE_RE.captures(inner)
            && TaskStatus::from_str(&status[1]).is_none()
        {
            errors.push(ValidationError::InvalidStatus(status[1].to_string()));
        }

        if let Some(priority) = PRIORITY_VALUE_RE.captures(inner)
            && TaskPriority::from_str(&priority[1]).is_none()
        {
            errors.push(ValidationError::InvalidPriority(priority[1].to_string()));
        }
    }

    if markdown.matches("```").count() % 2 != 0 {
        errors.push(ValidationError::UnclosedFence);
    }

    errors
}
