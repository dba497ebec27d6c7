use std::collections::{HashMap, HashSet};

use serde::Serialize;

use crate::model::task::Task;

/// Set difference between a baseline snapshot and the current task list,
/// keyed by task id. The four sequences are disjoint; every current task
/// lands in exactly one of added/modified/unchanged, and removed holds
/// exactly the baseline tasks whose id disappeared.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DiffResult {
    pub added: Vec<Task>,
    pub removed: Vec<Task>,
    pub modified: Vec<Task>,
    pub unchanged: Vec<Task>,
}

impl DiffResult {
    pub fn is_added(&self, id: &str) -> bool {
        self.added.iter().any(|t| t.id == id)
    }

    pub fn is_modified(&self, id: &str) -> bool {
        self.modified.iter().any(|t| t.id == id)
    }
}

/// Compare two task snapshots. "Modified" means any structural difference
/// at all — field-by-field equality, order-sensitive for arrays (an
/// assignee reorder counts), key-order-insensitive for `extra_meta`.
/// Pure and deterministic; classification order follows input order.
pub fn diff_snapshots(baseline: &[Task], current: &[Task]) -> DiffResult {
    let baseline_by_id: HashMap<&str, &Task> =
        baseline.iter().map(|t| (t.id.as_str(), t)).collect();
    let current_ids: HashSet<&str> = current.iter().map(|t| t.id.as_str()).collect();

    let mut result = DiffResult::default();

    for task in current {
        match baseline_by_id.get(task.id.as_str()) {
            None => result.added.push(task.clone()),
            Some(before) if **before != *task => result.modified.push(task.clone()),
            Some(_) => result.unchanged.push(task.clone()),
        }
    }

    for task in baseline {
        if !current_ids.contains(task.id.as_str()) {
            result.removed.push(task.clone());
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::task::{TaskPriority, TaskStatus};

    fn task(id: &str, title: &str) -> Task {
        Task {
            id: id.into(),
            project_id: "p".into(),
            title: title.into(),
            status: TaskStatus::Open,
            priority: TaskPriority::P2,
            assignees: Vec::new(),
            labels: Vec::new(),
            start_date: None,
            due_date: None,
            parent_id: None,
            markdown_body: String::new(),
            extra_meta: Default::default(),
            created_at: String::new(),
            updated_at: String::new(),
            completed_at: None,
            archived_at: None,
            created_by: None,
            updated_by: None,
        }
    }

    #[test]
    fn test_added_modified_removed() {
        let baseline = [task("1", "X")];
        let current = [task("1", "Y"), task("2", "Z")];
        let diff = diff_snapshots(&baseline, &current);

        assert_eq!(diff.added.len(), 1);
        assert_eq!(diff.added[0].id, "2");
        assert_eq!(diff.modified.len(), 1);
        assert_eq!(diff.modified[0].id, "1");
        assert!(diff.removed.is_empty());
        assert!(diff.unchanged.is_empty());
    }

    #[test]
    fn test_removed_tasks() {
        let baseline = [task("1", "X"), task("2", "Y")];
        let current = [task("1", "X")];
        let diff = diff_snapshots(&baseline, &current);

        assert_eq!(diff.removed.len(), 1);
        assert_eq!(diff.removed[0].id, "2");
        assert_eq!(diff.unchanged.len(), 1);
    }

    #[test]
    fn test_identical_snapshots_are_unchanged() {
        let tasks = [task("1", "X"), task("2", "Y")];
        let diff = diff_snapshots(&tasks, &tasks);
        assert!(diff.added.is_empty());
        assert!(diff.removed.is_empty());
        assert!(diff.modified.is_empty());
        assert_eq!(diff.unchanged.len(), 2);
    }

    #[test]
    fn test_assignee_reorder_counts_as_modified() {
        let mut before = task("1", "X");
        before.assignees = vec!["alice".into(), "bob".into()];
        let mut after = task("1", "X");
        after.assignees = vec!["bob".into(), "alice".into()];

        let diff = diff_snapshots(&[before], &[after]);
        assert_eq!(diff.modified.len(), 1);
    }

    #[test]
    fn test_extra_meta_key_order_is_not_a_change() {
        let mut before = task("1", "X");
        before.extra_meta.insert("a".into(), serde_json::json!("1"));
        before.extra_meta.insert("b".into(), serde_json::json!("2"));
        let mut after = task("1", "X");
        after.extra_meta.insert("b".into(), serde_json::json!("2"));
        after.extra_meta.insert("a".into(), serde_json::json!("1"));

        let diff = diff_snapshots(&[before], &[after]);
        assert_eq!(diff.unchanged.len(), 1);
        assert!(diff.modified.is_empty());
    }

    #[test]
    fn test_partition_is_complete_and_disjoint() {
        let baseline = [task("1", "a"), task("2", "b"), task("3", "c")];
        let current = [task("2", "b"), task("3", "changed"), task("4", "d")];
        let diff = diff_snapshots(&baseline, &current);

        let total = diff.added.len() + diff.modified.len() + diff.unchanged.len();
        assert_eq!(total, current.len());

        let mut seen: Vec<&str> = diff
            .added
            .iter()
            .chain(&diff.modified)
            .chain(&diff.unchanged)
            .map(|t| t.id.as_str())
            .collect();
        seen.sort();
        seen.dedup();
        assert_eq!(seen.len(), current.len());

        assert_eq!(diff.removed.len(), 1);
        assert_eq!(diff.removed[0].id, "1");
    }

    #[test]
    fn test_empty_baseline_means_all_added() {
        let current = [task("1", "a"), task("2", "b")];
        let diff = diff_snapshots(&[], &current);
        assert_eq!(diff.added.len(), 2);
        assert!(diff.is_added("1"));
        assert!(!diff.is_modified("1"));
    }
}
