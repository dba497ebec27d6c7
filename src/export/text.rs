use crate::export::labels::{assignee_prefix, status_label};
use crate::export::{ExportOptions, format_export_date};
use crate::model::prefs::Locale;
use crate::model::task::Task;
use crate::ops::tree::TaskNode;

/// Render flattened tasks as shareable plain text: a `■` header line,
/// then one `・title 【status】 dates assignees` line per task with
/// full-width-space indentation per depth, and a `　⇒summary` line after
/// tasks that carry a summary.
pub fn render_text(header_name: &str, nodes: &[&TaskNode], opts: &ExportOptions) -> String {
    let lb = opts.line_break.as_str();

    let mut lines = vec![format!("■{}", header_name)];
    for node in nodes {
        let task = &node.task;
        let indent = "　".repeat(node.depth);

        let status = status_label(opts.locale, task.status);
        let dates = date_range_fragment(task, opts.locale);
        let assignees = if task.assignees.is_empty() {
            String::new()
        } else {
            format!(
                " {}{}",
                assignee_prefix(opts.locale),
                task.assignees.join(", ")
            )
        };

        lines.push(format!(
            "{}・{} 【{}】{}{}",
            indent, task.title, status, dates, assignees
        ));

        if let Some(summary) = task.summary()
            && !summary.is_empty()
        {
            lines.push(format!("{}　⇒{}", indent, summary));
        }
    }

    lines.join(lb)
}

/// ` start-end`, ` start-` or ` -end` depending on which bounds exist;
/// empty when neither is set. Shared shape with the HTML exporter.
fn date_range_fragment(task: &Task, locale: Locale) -> String {
    match (task.start_date.as_deref(), task.due_date.as_deref()) {
        (Some(start), Some(due)) => format!(
            " {}-{}",
            format_export_date(start, locale),
            format_export_date(due, locale)
        ),
        (Some(start), None) => format!(" {}-", format_export_date(start, locale)),
        (None, Some(due)) => format!(" -{}", format_export_date(due, locale)),
        (None, None) => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::LineBreak;
    use crate::model::task::{TaskPriority, TaskStatus};
    use crate::ops::tree::{build_tree, flatten};
    use pretty_assertions::assert_eq;

    fn task(id: &str, title: &str, parent: Option<&str>) -> Task {
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
            parent_id: parent.map(String::from),
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
    fn test_header_and_task_line() {
        let t = task("T-1", "レポート作成", None);
        let tree = build_tree(std::slice::from_ref(&t));
        let out = render_text("週次タスク", &flatten(&tree), &ExportOptions::default());
        assert_eq!(out, "■週次タスク\n・レポート作成 【未着手】");
    }

    #[test]
    fn test_dates_and_assignees() {
        let mut t = task("T-1", "Deploy", None);
        t.status = TaskStatus::InProgress;
        t.start_date = Some("2024-04-01".into());
        t.due_date = Some("2024-04-05".into());
        t.assignees = vec!["alice".into(), "bob".into()];
        let tree = build_tree(std::slice::from_ref(&t));
        let out = render_text("P", &flatten(&tree), &ExportOptions::default());
        assert_eq!(
            out,
            "■P\n・Deploy 【進行中】 2024/04/01-2024/04/05 担当: alice, bob"
        );
    }

    #[test]
    fn test_half_open_date_ranges() {
        let mut start_only = task("T-1", "A", None);
        start_only.start_date = Some("2024-04-01".into());
        let mut due_only = task("T-2", "B", None);
        due_only.due_date = Some("2024-04-05".into());

        let tasks = [start_only, due_only];
        let tree = build_tree(&tasks);
        let out = render_text("P", &flatten(&tree), &ExportOptions::default());
        assert!(out.contains("・A 【未着手】 2024/04/01-"));
        assert!(out.contains("・B 【未着手】 -2024/04/05"));
    }

    #[test]
    fn test_summary_line_indented_with_task() {
        let mut parent = task("T-1", "Parent", None);
        parent
            .extra_meta
            .insert("summary".into(), serde_json::json!("全体の概要"));
        let mut child = task("T-2", "Child", Some("T-1"));
        child
            .extra_meta
            .insert("summary".into(), serde_json::json!("子の概要"));

        let tasks = [parent, child];
        let tree = build_tree(&tasks);
        let out = render_text("P", &flatten(&tree), &ExportOptions::default());
        let lines: Vec<&str> = out.split('\n').collect();
        assert_eq!(lines[1], "・Parent 【未着手】");
        assert_eq!(lines[2], "　⇒全体の概要");
        assert_eq!(lines[3], "　・Child 【未着手】");
        assert_eq!(lines[4], "　　⇒子の概要");
    }

    #[test]
    fn test_marker_line_break() {
        let tasks = [task("T-1", "A", None), task("T-2", "B", None)];
        let tree = build_tree(&tasks);
        let opts = ExportOptions {
            locale: Locale::Ja,
            line_break: LineBreak::Marker("[[BR]]".into()),
        };
        let out = render_text("P", &flatten(&tree), &opts);
        assert_eq!(out, "■P[[BR]]・A 【未着手】[[BR]]・B 【未着手】");
    }
}
