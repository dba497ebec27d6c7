pub mod due;
pub mod edit;
pub mod snapshot;
pub mod text_diff;
pub mod tree;

pub use due::{DueCategory, categorize_due};
pub use edit::{EditError, add_assignee, build_view_query, remove_assignee};
pub use snapshot::{DiffResult, diff_snapshots};
pub use text_diff::highlight_change;
pub use tree::{TaskNode, build_tree, flatten};
