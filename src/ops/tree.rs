use std::collections::{HashMap, HashSet};

use tracing::warn;

use crate::model::task::Task;

/// A task with its resolved children and hierarchy depth.
/// Built fresh for every render/export; never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskNode {
    pub task: Task,
    pub children: Vec<TaskNode>,
    /// 0 for roots, parent depth + 1 otherwise
    pub depth: usize,
}

/// Build a forest from a flat task list.
///
/// A task whose `parent_id` is absent, dangling or self-referential is a
/// root. Sibling order is input order. Depth is assigned while walking
/// down from the roots, so parents appearing after their children in the
/// input cannot produce a stale depth. Parent-reference cycles are broken
/// at the repeated edge and reported; tasks trapped in a rootless cycle
/// are unreachable and dropped with a warning.
pub fn build_tree(tasks: &[Task]) -> Vec<TaskNode> {
    let ids: HashSet<&str> = tasks.iter().map(|t| t.id.as_str()).collect();

    let mut children_of: HashMap<&str, Vec<&Task>> = HashMap::new();
    let mut roots: Vec<&Task> = Vec::new();
    for task in tasks {
        match task.parent_id.as_deref() {
            Some(pid) if pid == task.id => {
                warn!(task = %task.id, "task is its own parent; treating as root");
                roots.push(task);
            }
            Some(pid) if ids.contains(pid) => {
                children_of.entry(pid).or_default().push(task);
            }
            _ => roots.push(task),
        }
    }

    let mut placed: HashSet<&str> = HashSet::new();
    let forest: Vec<TaskNode> = roots
        .iter()
        .map(|task| attach(task, 0, &children_of, &mut placed))
        .collect();

    if placed.len() != tasks.len() {
        for task in tasks {
            if !placed.contains(task.id.as_str()) {
                warn!(task = %task.id, "unreachable task dropped (parent reference cycle)");
            }
        }
    }

    forest
}

fn attach<'a>(
    task: &'a Task,
    depth: usize,
    children_of: &HashMap<&str, Vec<&'a Task>>,
    placed: &mut HashSet<&'a str>,
) -> TaskNode {
    placed.insert(task.id.as_str());
    let mut node = TaskNode {
        task: task.clone(),
        children: Vec::new(),
        depth,
    };
    if let Some(kids) = children_of.get(task.id.as_str()) {
        for kid in kids {
            if placed.contains(kid.id.as_str()) {
                warn!(child = %kid.id, parent = %task.id, "parent reference cycle broken");
                continue;
            }
            node.children.push(attach(kid, depth + 1, children_of, placed));
        }
    }
    node
}

/// Flatten a forest to pre-order: each node before its children, sibling
/// order preserved. No resorting — display order is input order plus
/// hierarchy.
pub fn flatten(roots: &[TaskNode]) -> Vec<&TaskNode> {
    let mut out = Vec::new();
    for root in roots {
        walk(root, &mut out);
    }
    out
}

fn walk<'a>(node: &'a TaskNode, out: &mut Vec<&'a TaskNode>) {
    out.push(node);
    for child in &node.children {
        walk(child, out);
    }
}
