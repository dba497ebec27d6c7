pub mod meta_block;
pub mod query_builder;
pub mod query_parser;
pub mod task_markdown;

pub use meta_block::{set_extra_field, set_field, set_list_field, set_scalar_field};
pub use query_builder::build_query;
pub use query_parser::parse_query;
pub use task_markdown::{build_task_markdown, extract_parts, validate_markdown};
