use crate::export::labels::{field_labels, priority_label, status_label};
use crate::export::{ExportOptions, format_export_date};
use crate::ops::tree::TaskNode;

/// Render flattened tasks as a markdown block: one heading per task,
/// optional blockquoted summary, bulleted metadata, tasks separated by a
/// horizontal rule. Depth nests descendants one heading level deeper and
/// indents the heading text (the `#` markers stay at line start so
/// heading semantics survive).
pub fn render_markdown(nodes: &[&TaskNode], opts: &ExportOptions) -> String {
    let lb = opts.line_break.as_str();
    let labels = field_labels(opts.locale);

    let blocks: Vec<String> = nodes
        .iter()
        .map(|node| {
            let task = &node.task;
            let marker = if node.depth == 0 { "##" } else { "###" };
            let indent = " ".repeat(node.depth);

            let mut lines = Vec::new();
            lines.push(format!("{} {}{}: {}", marker, indent, task.id, task.title));

            if let Some(summary) = task.summary()
                && !summary.is_empty()
            {
                lines.push(format!("> {}", summary));
            }

            lines.push(format!(
                "- **{}**: {}",
                labels.status,
                status_label(opts.locale, task.status)
            ));
            lines.push(format!(
                "- **{}**: {}",
                labels.priority,
                priority_label(opts.locale, task.priority)
            ));
            if let Some(date) = &task.start_date {
                lines.push(format!(
                    "- **{}**: {}",
                    labels.start,
                    format_export_date(date, opts.locale)
                ));
            }
            if let Some(date) = &task.due_date {
                lines.push(format!(
                    "- **{}**: {}",
                    labels.due,
                    format_export_date(date, opts.locale)
                ));
            }
            if !task.assignees.is_empty() {
                lines.push(format!(
                    "- **{}**: {}",
                    labels.assignees,
                    task.assignees.join(", ")
                ));
            }

            lines.join(lb)
        })
        .collect();

    blocks.join(&format!("{lb}---{lb}{lb}"))
}
