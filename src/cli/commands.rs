use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "tmd", about = concat!("taskmd v", env!("CARGO_PKG_VERSION"), " - task lists as shareable text"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Preferences file (default: taskmd.toml in the working directory)
    #[arg(long, global = true)]
    pub config: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse or build saved-view query text
    Query(QueryCmd),
    /// List the tasks in a snapshot with status and due badges
    List(ListArgs),
    /// Export a task snapshot as markdown, plain text or HTML
    Export(ExportArgs),
    /// Diff two task snapshots
    Diff(DiffArgs),
    /// Inspect or edit the metadata block of a task document
    Meta(MetaCmd),
    /// Normalize a snapshot file into a dated baseline
    Snapshot(SnapshotArgs),
    /// Show or change preferences
    Prefs(PrefsCmd),
}

// ---------------------------------------------------------------------------
// Query
// ---------------------------------------------------------------------------

#[derive(Args)]
pub struct QueryCmd {
    #[command(subcommand)]
    pub action: QueryAction,
}

#[derive(Subcommand)]
pub enum QueryAction {
    /// Parse query text into a structured filter
    Parse(QueryParseArgs),
    /// Build canonical query text from filter flags
    Build(QueryBuildArgs),
}

#[derive(Args)]
pub struct QueryParseArgs {
    /// Query text, e.g. "status:(open in_progress) priority:P0"
    pub query: String,
}

#[derive(Args)]
pub struct QueryBuildArgs {
    /// Status filter (repeatable)
    #[arg(long = "status")]
    pub status: Vec<String>,
    /// Priority filter (repeatable)
    #[arg(long = "priority")]
    pub priority: Vec<String>,
    /// Assignee filter (repeatable)
    #[arg(long = "assignee")]
    pub assignees: Vec<String>,
    /// Label filter (repeatable)
    #[arg(long = "label")]
    pub labels: Vec<String>,
    /// Start date lower bound (YYYY-MM-DD)
    #[arg(long)]
    pub start_from: Option<String>,
    /// Start date upper bound
    #[arg(long)]
    pub start_to: Option<String>,
    /// Due date lower bound
    #[arg(long)]
    pub due_from: Option<String>,
    /// Due date upper bound
    #[arg(long)]
    pub due_to: Option<String>,
}

// ---------------------------------------------------------------------------
// List / export / diff
// ---------------------------------------------------------------------------

#[derive(Args)]
pub struct ListArgs {
    /// Snapshot file (JSON array of tasks)
    pub tasks: String,
}

#[derive(Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ExportFormat {
    Markdown,
    Text,
    Html,
}

#[derive(Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum LineBreakArg {
    Lf,
    Crlf,
    Br,
    Marker,
}

#[derive(Args)]
pub struct ExportArgs {
    /// Output format
    #[arg(value_enum)]
    pub format: ExportFormat,
    /// Snapshot file (JSON array of tasks)
    pub tasks: String,
    /// Header/project name for text and HTML output
    #[arg(long, default_value = "tasks")]
    pub name: String,
    /// Line-break token (default: from preferences)
    #[arg(long, value_enum)]
    pub line_break: Option<LineBreakArg>,
    /// Custom marker string for marker mode
    #[arg(long)]
    pub marker: Option<String>,
    /// Copy the result to the clipboard instead of printing it
    #[arg(long)]
    pub copy: bool,
}

#[derive(Args)]
pub struct DiffArgs {
    /// Baseline snapshot file
    pub baseline: String,
    /// Current snapshot file
    pub current: String,
    /// Render the colored HTML diff instead of the summary
    #[arg(long)]
    pub html: bool,
    /// Header/project name for HTML output
    #[arg(long, default_value = "tasks")]
    pub name: String,
    /// Highlight color for added/changed fields
    #[arg(long, default_value = "#0066cc")]
    pub color: String,
    /// Line-break token (default: from preferences)
    #[arg(long, value_enum)]
    pub line_break: Option<LineBreakArg>,
    /// Custom marker string for marker mode
    #[arg(long)]
    pub marker: Option<String>,
    /// Copy the HTML diff (with plain-text fallback) to the clipboard
    #[arg(long)]
    pub copy: bool,
}

// ---------------------------------------------------------------------------
// Meta
// ---------------------------------------------------------------------------

#[derive(Args)]
pub struct MetaCmd {
    #[command(subcommand)]
    pub action: MetaAction,
}

#[derive(Subcommand)]
pub enum MetaAction {
    /// Rewrite one metadata field, printing the new document
    Set(MetaSetArgs),
    /// Show the extracted parts of a task document
    Show(MetaShowArgs),
    /// Validate a task document
    Check(MetaShowArgs),
}

#[derive(Args)]
pub struct MetaSetArgs {
    /// Task markdown file
    pub file: String,
    /// Field name (id, status, priority, start, due, parent_id,
    /// assignees, labels, or any extra key)
    pub field: String,
    /// New value (comma-separated for list fields)
    pub value: String,
    /// Rewrite the file in place instead of printing
    #[arg(long)]
    pub write: bool,
}

#[derive(Args)]
pub struct MetaShowArgs {
    /// Task markdown file
    pub file: String,
}

// ---------------------------------------------------------------------------
// Snapshot / prefs
// ---------------------------------------------------------------------------

#[derive(Args)]
pub struct SnapshotArgs {
    /// Snapshot file (JSON array of tasks)
    pub tasks: String,
    /// Project name used in the output filename
    #[arg(long, default_value = "tasks")]
    pub project: String,
    /// Output directory (default: current directory)
    #[arg(long)]
    pub out: Option<String>,
}

#[derive(Args)]
pub struct PrefsCmd {
    #[command(subcommand)]
    pub action: PrefsAction,
}

#[derive(Subcommand)]
pub enum PrefsAction {
    /// Print current preferences
    Show,
    /// Change preferences
    Set(PrefsSetArgs),
}

#[derive(Args)]
pub struct PrefsSetArgs {
    /// Color scheme: light, dark or system
    #[arg(long)]
    pub theme: Option<String>,
    /// Export label language: ja or en
    #[arg(long)]
    pub locale: Option<String>,
    /// Default line-break token
    #[arg(long, value_enum)]
    pub line_break: Option<LineBreakArg>,
    /// Custom marker string for marker mode
    #[arg(long)]
    pub marker: Option<String>,
}
