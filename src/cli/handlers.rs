use std::fs;
use std::path::{Path, PathBuf};

use chrono::Local;
use tracing::debug;

use crate::cli::commands::*;
use crate::cli::output::*;
use crate::export::labels::{assignee_prefix, due_label, status_label};
use crate::export::{
    ExportOptions, HtmlExportOptions, LineBreak, render_diff_html, render_markdown, render_text,
};
use crate::io::baseline::{default_baseline_name, load_baseline, save_baseline};
use crate::io::clipboard::{SystemClipboard, copy_rich, copy_text};
use crate::io::config_io::{load_prefs, save_prefs};
use crate::model::filter::FilterCondition;
use crate::model::prefs::{LineBreakMode, Locale, Preferences, PrefsStore, Theme};
use crate::ops::due::{DueCategory, categorize_due};
use crate::ops::edit::build_view_query;
use crate::ops::snapshot::{DiffResult, diff_snapshots};
use crate::ops::tree::{build_tree, flatten};
use crate::parse::meta_block::set_field;
use crate::parse::query_parser::parse_query;
use crate::parse::task_markdown::{extract_parts, validate_markdown};

type CliResult = Result<(), Box<dyn std::error::Error>>;

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

pub fn dispatch(cli: Cli) -> CliResult {
    let json = cli.json;
    let prefs_path = prefs_path(cli.config.as_deref());
    let prefs = load_prefs(&prefs_path)?;

    match cli.command {
        Commands::Query(cmd) => match cmd.action {
            QueryAction::Parse(args) => cmd_query_parse(args),
            QueryAction::Build(args) => cmd_query_build(args),
        },
        Commands::List(args) => cmd_list(args, &prefs, json),
        Commands::Export(args) => cmd_export(args, &prefs),
        Commands::Diff(args) => cmd_diff(args, &prefs, json),
        Commands::Meta(cmd) => match cmd.action {
            MetaAction::Set(args) => cmd_meta_set(args),
            MetaAction::Show(args) => cmd_meta_show(args, json),
            MetaAction::Check(args) => cmd_meta_check(args, json),
        },
        Commands::Snapshot(args) => cmd_snapshot(args),
        Commands::Prefs(cmd) => match cmd.action {
            PrefsAction::Show => cmd_prefs_show(&prefs, json),
            PrefsAction::Set(args) => cmd_prefs_set(args, prefs, &prefs_path),
        },
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn prefs_path(flag: Option<&str>) -> PathBuf {
    match flag {
        Some(path) => PathBuf::from(path),
        None => PathBuf::from("taskmd.toml"),
    }
}

/// Resolve the line-break token: explicit flags win, preferences are the
/// fallback.
fn resolve_line_break(
    flag: Option<LineBreakArg>,
    marker: Option<String>,
    prefs: &Preferences,
) -> LineBreak {
    let marker = marker.unwrap_or_else(|| prefs.marker.clone());
    match flag {
        Some(LineBreakArg::Lf) => LineBreak::Lf,
        Some(LineBreakArg::Crlf) => LineBreak::CrLf,
        Some(LineBreakArg::Br) => LineBreak::Br,
        Some(LineBreakArg::Marker) => LineBreak::Marker(marker),
        None => match prefs.line_break {
            LineBreakMode::Lf => LineBreak::Lf,
            LineBreakMode::Crlf => LineBreak::CrLf,
            LineBreakMode::Br => LineBreak::Br,
            LineBreakMode::Marker => LineBreak::Marker(marker),
        },
    }
}

fn emit(text: &str, copy: bool) -> CliResult {
    if copy {
        let mut clipboard = SystemClipboard::new()?;
        copy_text(&mut clipboard, text)?;
        eprintln!("copied to clipboard");
    } else {
        println!("{}", text);
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Query
// ---------------------------------------------------------------------------

fn cmd_query_parse(args: QueryParseArgs) -> CliResult {
    let cond = parse_query(&args.query);
    print_json(&cond);
    Ok(())
}

fn cmd_query_build(args: QueryBuildArgs) -> CliResult {
    let cond = FilterCondition {
        status: args.status,
        priority: args.priority,
        assignees: args.assignees,
        labels: args.labels,
        start_date_from: args.start_from,
        start_date_to: args.start_to,
        due_date_from: args.due_from,
        due_date_to: args.due_to,
    };
    let query = build_view_query(&cond)?;
    println!("{}", query);
    Ok(())
}

// ---------------------------------------------------------------------------
// List / export / diff
// ---------------------------------------------------------------------------

fn cmd_list(args: ListArgs, prefs: &Preferences, json: bool) -> CliResult {
    let tasks = load_baseline(Path::new(&args.tasks))?;
    if json {
        print_json(&tasks);
        return Ok(());
    }

    let today = Local::now().date_naive();
    let tree = build_tree(&tasks);
    for node in flatten(&tree) {
        let task = &node.task;
        let indent = "  ".repeat(node.depth);

        let mut line = format!(
            "{}{}  {}  [{}/{}]",
            indent,
            task.id,
            task.title,
            status_label(prefs.locale, task.status),
            task.priority.as_str()
        );
        let due = categorize_due(task.due_date.as_deref(), today);
        if due != DueCategory::NoDue {
            line.push_str(&format!("  ({})", due_label(prefs.locale, due)));
        }
        if !task.assignees.is_empty() {
            line.push_str(&format!(
                "  {}{}",
                assignee_prefix(prefs.locale),
                task.assignees.join(", ")
            ));
        }
        println!("{}", line);
    }
    Ok(())
}

fn cmd_export(args: ExportArgs, prefs: &Preferences) -> CliResult {
    let tasks = load_baseline(Path::new(&args.tasks))?;
    if tasks.is_empty() {
        return Err("snapshot contains no tasks".into());
    }

    let line_break = resolve_line_break(args.line_break, args.marker, prefs);
    let tree = build_tree(&tasks);
    let nodes = flatten(&tree);

    match args.format {
        ExportFormat::Markdown => {
            let opts = ExportOptions {
                locale: prefs.locale,
                line_break,
            };
            emit(&render_markdown(&nodes, &opts), args.copy)
        }
        ExportFormat::Text => {
            let opts = ExportOptions {
                locale: prefs.locale,
                line_break,
            };
            emit(&render_text(&args.name, &nodes, &opts), args.copy)
        }
        ExportFormat::Html => {
            let opts = HtmlExportOptions {
                locale: prefs.locale,
                line_break,
                ..Default::default()
            };
            // No baseline: render every row plain
            let html = render_diff_html(&args.name, &tasks, &[], &DiffResult::default(), &opts);
            if args.copy {
                let mut clipboard = SystemClipboard::new()?;
                copy_rich(&mut clipboard, &html)?;
                eprintln!("copied to clipboard");
                Ok(())
            } else {
                println!("{}", html);
                Ok(())
            }
        }
    }
}

fn cmd_diff(args: DiffArgs, prefs: &Preferences, json: bool) -> CliResult {
    let baseline = load_baseline(Path::new(&args.baseline))?;
    let current = load_baseline(Path::new(&args.current))?;
    let diff = diff_snapshots(&baseline, &current);

    if args.html {
        let opts = HtmlExportOptions {
            locale: prefs.locale,
            line_break: resolve_line_break(args.line_break, args.marker, prefs),
            highlight_color: args.color,
        };
        let html = render_diff_html(&args.name, &current, &baseline, &diff, &opts);
        if args.copy {
            let mut clipboard = SystemClipboard::new()?;
            let outcome = copy_rich(&mut clipboard, &html)?;
            eprintln!("copied to clipboard ({:?})", outcome);
        } else {
            println!("{}", html);
        }
        return Ok(());
    }

    if json {
        print_json(&DiffSummaryJson::from_diff(&diff));
    } else {
        println!("added:     {}", diff.added.len());
        println!("modified:  {}", diff.modified.len());
        println!("removed:   {}", diff.removed.len());
        println!("unchanged: {}", diff.unchanged.len());
        for task in &diff.added {
            println!("  + {} {}", task.id, task.title);
        }
        for task in &diff.modified {
            println!("  ~ {} {}", task.id, task.title);
        }
        for task in &diff.removed {
            println!("  - {} {}", task.id, task.title);
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Meta
// ---------------------------------------------------------------------------

fn cmd_meta_set(args: MetaSetArgs) -> CliResult {
    let body = fs::read_to_string(&args.file)?;
    let updated = set_field(&body, &args.field, &args.value);

    if updated == body {
        // set_field is a silent no-op when the block is missing; surface it
        return Err("document unchanged: no metadata block found or value already set".into());
    }

    if args.write {
        fs::write(&args.file, &updated)?;
        eprintln!("updated {}", args.file);
    } else {
        print!("{}", updated);
    }
    Ok(())
}

fn cmd_meta_show(args: MetaShowArgs, json: bool) -> CliResult {
    let body = fs::read_to_string(&args.file)?;
    let Some(parts) = extract_parts(&body) else {
        return Err("not a task document (missing heading or metadata block)".into());
    };

    if json {
        print_json(&MetaShowJson {
            id: parts.id,
            title: parts.title,
            metadata: parts.metadata,
            body: parts.body,
        });
    } else {
        println!("id:    {}", parts.id);
        println!("title: {}", parts.title);
        println!("---");
        println!("{}", parts.metadata);
    }
    Ok(())
}

fn cmd_meta_check(args: MetaShowArgs, json: bool) -> CliResult {
    let body = fs::read_to_string(&args.file)?;
    let errors = validate_markdown(&body);

    if json {
        print_json(&MetaCheckJson {
            valid: errors.is_empty(),
            errors: errors.iter().map(|e| e.to_string()).collect(),
        });
        return Ok(());
    }

    if errors.is_empty() {
        println!("ok");
        Ok(())
    } else {
        for error in &errors {
            eprintln!("  {}", error);
        }
        Err("validation failed".into())
    }
}

// ---------------------------------------------------------------------------
// Snapshot / prefs
// ---------------------------------------------------------------------------

fn cmd_snapshot(args: SnapshotArgs) -> CliResult {
    let tasks = load_baseline(Path::new(&args.tasks))?;

    let name = default_baseline_name(&args.project, Local::now().date_naive());
    let out_dir = args.out.map(PathBuf::from).unwrap_or_else(|| ".".into());
    let path = out_dir.join(name);

    save_baseline(&path, &tasks)?;
    println!("{}", path.display());
    Ok(())
}

fn cmd_prefs_show(prefs: &Preferences, json: bool) -> CliResult {
    if json {
        print_json(prefs);
    } else {
        println!("theme:      {:?}", prefs.theme);
        println!("locale:     {:?}", prefs.locale);
        println!("line_break: {:?}", prefs.line_break);
        println!("marker:     {}", prefs.marker);
    }
    Ok(())
}

fn cmd_prefs_set(args: PrefsSetArgs, prefs: Preferences, path: &Path) -> CliResult {
    let theme = match args.theme.as_deref() {
        Some("light") => Some(Theme::Light),
        Some("dark") => Some(Theme::Dark),
        Some("system") => Some(Theme::System),
        Some(other) => return Err(format!("unknown theme: {}", other).into()),
        None => None,
    };
    let locale = match args.locale.as_deref() {
        Some("ja") => Some(Locale::Ja),
        Some("en") => Some(Locale::En),
        Some(other) => return Err(format!("unknown locale: {}", other).into()),
        None => None,
    };
    let line_break = args.line_break.map(|mode| match mode {
        LineBreakArg::Lf => LineBreakMode::Lf,
        LineBreakArg::Crlf => LineBreakMode::Crlf,
        LineBreakArg::Br => LineBreakMode::Br,
        LineBreakArg::Marker => LineBreakMode::Marker,
    });

    let mut store = PrefsStore::new(prefs);
    store.subscribe(|p| debug!(?p, "preferences changed"));
    store.update(|p| {
        if let Some(theme) = theme {
            p.theme = theme;
        }
        if let Some(locale) = locale {
            p.locale = locale;
        }
        if let Some(mode) = line_break {
            p.line_break = mode;
        }
        if let Some(marker) = args.marker {
            p.marker = marker;
        }
    });

    save_prefs(path, store.current())?;
    eprintln!("saved {}", path.display());
    Ok(())
}
