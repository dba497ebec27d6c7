use std::sync::LazyLock;

use regex::Regex;

use crate::export::labels::{assignee_prefix, status_label};
use crate::export::line_break::LineBreak;
use crate::export::format_export_date;
use crate::model::prefs::Locale;
use crate::model::task::Task;
use crate::ops::snapshot::DiffResult;
use crate::ops::text_diff::highlight_change;
use crate::ops::tree::{build_tree, flatten};

/// Color used for removed tasks appended at the end of the diff
const REMOVED_COLOR: &str = "#999";

#[derive(Debug, Clone)]
pub struct HtmlExportOptions {
    pub locale: Locale,
    pub line_break: LineBreak,
    /// Highlight color for added tasks and changed fields
    pub highlight_color: String,
}

impl Default for HtmlExportOptions {
    fn default() -> Self {
        HtmlExportOptions {
            locale: Locale::default(),
            line_break: LineBreak::Lf,
            highlight_color: "#0066cc".into(),
        }
    }
}

fn span(color: &str, text: &str) -> String {
    format!("<span style=\"color: {};\">{}</span>", color, text)
}

fn colorize(text: &str, changed: bool, color: Option<&str>) -> String {
    match color {
        Some(c) if changed => span(c, text),
        _ => text.to_string(),
    }
}

/// Render one task as an HTML row (or a bare line in marker mode).
///
/// With `color` and a `baseline`, only fields that differ from the
/// baseline are wrapped: title and summary go through the character-level
/// change highlighter, status/dates/assignees are wrapped whole. With
/// `color` and no baseline (added or removed tasks) every present field
/// is wrapped. Without `color` the row renders plain.
pub fn format_task_html(
    task: &Task,
    depth: usize,
    color: Option<&str>,
    baseline: Option<&Task>,
    opts: &HtmlExportOptions,
) -> String {
    let lb = opts.line_break.as_str();
    let indent = "　".repeat(depth);

    let title_part = match (color, baseline) {
        (Some(c), Some(base)) if base.title != task.title => {
            highlight_change(&base.title, &task.title, |s| span(c, s))
        }
        (Some(c), None) => span(c, &task.title),
        _ => task.title.clone(),
    };

    let status_changed = baseline.is_none_or(|b| b.status != task.status);
    let status_part = colorize(
        &format!("【{}】", status_label(opts.locale, task.status)),
        status_changed,
        color,
    );

    let start_changed = baseline.is_none_or(|b| b.start_date != task.start_date);
    let due_changed = baseline.is_none_or(|b| b.due_date != task.due_date);
    let dates = match (task.start_date.as_deref(), task.due_date.as_deref()) {
        (Some(start), Some(due)) => format!(
            " {}-{}",
            colorize(&format_export_date(start, opts.locale), start_changed, color),
            colorize(&format_export_date(due, opts.locale), due_changed, color),
        ),
        (Some(start), None) => format!(
            " {}-",
            colorize(&format_export_date(start, opts.locale), start_changed, color)
        ),
        (None, Some(due)) => format!(
            " -{}",
            colorize(&format_export_date(due, opts.locale), due_changed, color)
        ),
        (None, None) => String::new(),
    };

    let assignees = if task.assignees.is_empty() {
        String::new()
    } else {
        let assignees_changed = baseline.is_none_or(|b| b.assignees != task.assignees);
        format!(
            " {}{}",
            assignee_prefix(opts.locale),
            colorize(&task.assignees.join(", "), assignees_changed, color)
        )
    };

    let summary = task.summary().unwrap_or("");
    let summary_part = if summary.is_empty() {
        String::new()
    } else {
        match (color, baseline) {
            (Some(c), Some(base)) => {
                let old = base.summary().unwrap_or("");
                if old != summary {
                    highlight_change(old, summary, |s| span(c, s))
                } else {
                    summary.to_string()
                }
            }
            (Some(c), None) => span(c, summary),
            _ => summary.to_string(),
        }
    };

    let main = format!(
        "{}・{} {}{}{}",
        indent, title_part, status_part, dates, assignees
    );
    let summary_line = if summary_part.is_empty() {
        String::new()
    } else {
        format!("{}　⇒{}", indent, summary_part)
    };

    if opts.line_break.is_marker() {
        // Marker mode: inline text, no row tags
        if summary_line.is_empty() {
            main
        } else {
            format!("{}{}{}", main, lb, summary_line)
        }
    } else if summary_line.is_empty() {
        format!("<div>{}</div>", main)
    } else {
        format!("<div>{}</div>{}<div>{}</div>", main, lb, summary_line)
    }
}

/// Render the full diff document: bold project header, current tasks in
/// hierarchical order (added rows fully highlighted, modified rows
/// field-highlighted against their baseline), then removed tasks with
/// strikethrough at the end.
pub fn render_diff_html(
    project_name: &str,
    current: &[Task],
    baseline: &[Task],
    diff: &DiffResult,
    opts: &HtmlExportOptions,
) -> String {
    let lb = opts.line_break.as_str();

    let header = if opts.line_break.is_marker() {
        format!(
            "<span style=\"font-weight: bold;\">■{}</span>{}",
            project_name, lb
        )
    } else {
        format!(
            "<div style=\"font-weight: bold;\">■{}</div>{}",
            project_name, lb
        )
    };

    let tree = build_tree(current);
    let mut parts = Vec::new();
    for node in flatten(&tree) {
        let task = &node.task;
        let html = if diff.is_added(&task.id) {
            format_task_html(task, node.depth, Some(&opts.highlight_color), None, opts)
        } else if diff.is_modified(&task.id) {
            let base = baseline.iter().find(|t| t.id == task.id);
            format_task_html(task, node.depth, Some(&opts.highlight_color), base, opts)
        } else {
            format_task_html(task, node.depth, None, None, opts)
        };
        parts.push(html);
    }

    for task in &diff.removed {
        let html = format_task_html(task, 0, Some(REMOVED_COLOR), None, opts);
        let styled = if opts.line_break.is_marker() {
            format!(
                "<span style=\"text-decoration: line-through;\">{}</span>",
                html
            )
        } else {
            html.replacen("<div", "<div style=\"text-decoration: line-through;\"", 1)
        };
        parts.push(styled);
    }

    format!("{}{}", header, parts.join(lb))
}

static TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new("<[^>]*>").unwrap());

/// Strip markup for the plain-text clipboard fallback.
pub fn strip_tags(html: &str) -> String {
    TAG_RE.replace_all(html, "").replace("&nbsp;", " ")
}
