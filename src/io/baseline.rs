use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use tracing::debug;

use crate::model::task::Task;

/// Error type for baseline snapshot I/O
#[derive(Debug, thiserror::Error)]
pub enum BaselineError {
    #[error("could not read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not parse {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("could not write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not serialize snapshot: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Load a baseline snapshot: a JSON array of task records, as written by
/// `save_baseline`. The pair round-trips exactly — exporting and
/// re-importing yields structurally equal tasks.
pub fn load_baseline(path: &Path) -> Result<Vec<Task>, BaselineError> {
    let content = fs::read_to_string(path).map_err(|source| BaselineError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let tasks: Vec<Task> =
        serde_json::from_str(&content).map_err(|source| BaselineError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
    debug!(path = %path.display(), count = tasks.len(), "baseline loaded");
    Ok(tasks)
}

/// Write a snapshot as pretty-printed JSON. The write goes through a
/// temp file in the target directory and renames into place, so a crash
/// never leaves a half-written baseline.
pub fn save_baseline(path: &Path, tasks: &[Task]) -> Result<(), BaselineError> {
    let json = serde_json::to_string_pretty(tasks)?;

    let dir = path.parent().unwrap_or(Path::new("."));
    let mut tmp = tempfile::NamedTempFile::new_in(dir).map_err(|source| BaselineError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    tmp.write_all(json.as_bytes())
        .map_err(|source| BaselineError::Write {
            path: path.to_path_buf(),
            source,
        })?;
    tmp.persist(path).map_err(|e| BaselineError::Write {
        path: path.to_path_buf(),
        source: e.error,
    })?;
    debug!(path = %path.display(), count = tasks.len(), "baseline saved");
    Ok(())
}

/// Default snapshot filename: `tasks-<project>-<date>.json`
pub fn default_baseline_name(project: &str, date: NaiveDate) -> String {
    format!("tasks-{}-{}.json", project, date.format("%Y-%m-%d"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::task::{TaskPriority, TaskStatus};
    use tempfile::TempDir;

    fn task(id: &str) -> Task {
        Task {
            id: id.into(),
            project_id: "p".into(),
            title: format!("Task {}", id),
            status: TaskStatus::Review,
            priority: TaskPriority::P1,
            assignees: vec!["alice".into()],
            labels: vec!["x".into()],
            start_date: Some("2024-02-01".into()),
            due_date: None,
            parent_id: None,
            markdown_body: "## body".into(),
            extra_meta: [("summary".to_string(), serde_json::json!("s"))]
                .into_iter()
                .collect(),
            created_at: "2024-01-01T00:00:00Z".into(),
            updated_at: "2024-01-02T00:00:00Z".into(),
            completed_at: None,
            archived_at: None,
            created_by: None,
            updated_by: None,
        }
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("baseline.json");
        let tasks = vec![task("T-1"), task("T-2")];

        save_baseline(&path, &tasks).unwrap();
        let loaded = load_baseline(&path).unwrap();
        assert_eq!(loaded, tasks);
    }

    #[test]
    fn test_load_missing_file_errors() {
        let dir = TempDir::new().unwrap();
        let err = load_baseline(&dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, BaselineError::Read { .. }));
    }

    #[test]
    fn test_load_malformed_json_errors() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bad.json");
        fs::write(&path, "not json [").unwrap();
        let err = load_baseline(&path).unwrap_err();
        assert!(matches!(err, BaselineError::Parse { .. }));
    }

    #[test]
    fn test_default_name() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
        assert_eq!(
            default_baseline_name("alpha", date),
            "tasks-alpha-2024-03-09.json"
        );
    }
}
