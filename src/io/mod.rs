pub mod baseline;
pub mod clipboard;
pub mod config_io;

pub use baseline::{BaselineError, default_baseline_name, load_baseline, save_baseline};
pub use clipboard::{ClipboardError, ClipboardSink, CopyOutcome, SystemClipboard, copy_rich, copy_text};
pub use config_io::{ConfigError, load_prefs, save_prefs};
