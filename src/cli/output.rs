use serde::Serialize;

use crate::ops::snapshot::DiffResult;

// ---------------------------------------------------------------------------
// JSON output structs
// ---------------------------------------------------------------------------

#[derive(Serialize)]
pub struct DiffSummaryJson {
    pub added: Vec<String>,
    pub modified: Vec<String>,
    pub removed: Vec<String>,
    pub unchanged: usize,
}

impl DiffSummaryJson {
    pub fn from_diff(diff: &DiffResult) -> Self {
        DiffSummaryJson {
            added: diff.added.iter().map(|t| t.id.clone()).collect(),
            modified: diff.modified.iter().map(|t| t.id.clone()).collect(),
            removed: diff.removed.iter().map(|t| t.id.clone()).collect(),
            unchanged: diff.unchanged.len(),
        }
    }
}

#[derive(Serialize)]
pub struct MetaCheckJson {
    pub valid: bool,
    pub errors: Vec<String>,
}

#[derive(Serialize)]
pub struct MetaShowJson {
    pub id: String,
    pub title: String,
    pub metadata: String,
    pub body: String,
}

/// Print any serializable value as pretty JSON on stdout.
pub fn print_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("error: could not serialize output: {}", e),
    }
}
