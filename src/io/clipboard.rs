use tracing::warn;

use crate::export::html::strip_tags;

/// Error type for clipboard access
#[derive(Debug, thiserror::Error)]
pub enum ClipboardError {
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),
    #[error("clipboard write failed: {0}")]
    WriteFailed(String),
}

/// Write side of the system clipboard, kept behind a trait so the
/// fallback logic is testable without a display server.
pub trait ClipboardSink {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError>;
    /// Rich write: HTML plus a plain-text alternative for targets that
    /// cannot take markup.
    fn set_html(&mut self, html: &str, alt_text: &str) -> Result<(), ClipboardError>;
}

pub struct SystemClipboard {
    inner: arboard::Clipboard,
}

impl SystemClipboard {
    pub fn new() -> Result<Self, ClipboardError> {
        let inner =
            arboard::Clipboard::new().map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
        Ok(SystemClipboard { inner })
    }
}

impl ClipboardSink for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.inner
            .set_text(text.to_string())
            .map_err(|e| ClipboardError::WriteFailed(e.to_string()))
    }

    fn set_html(&mut self, html: &str, alt_text: &str) -> Result<(), ClipboardError> {
        self.inner
            .set_html(html.to_string(), Some(alt_text.to_string()))
            .map_err(|e| ClipboardError::WriteFailed(e.to_string()))
    }
}

/// What a rich copy actually wrote
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyOutcome {
    Html,
    /// Rich write failed; the tag-stripped plain text was written instead
    PlainFallback,
}

/// Copy a rendered HTML export with its plain-text fallback: attempt the
/// rich write first, and on rejection retry with plain text only.
pub fn copy_rich(sink: &mut dyn ClipboardSink, html: &str) -> Result<CopyOutcome, ClipboardError> {
    let plain = strip_tags(html);
    match sink.set_html(html, &plain) {
        Ok(()) => Ok(CopyOutcome::Html),
        Err(err) => {
            warn!(%err, "rich clipboard write failed, falling back to plain text");
            sink.set_text(&plain)?;
            Ok(CopyOutcome::PlainFallback)
        }
    }
}

/// Copy plain text (markdown or text exports).
pub fn copy_text(sink: &mut dyn ClipboardSink, text: &str) -> Result<(), ClipboardError> {
    sink.set_text(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct FakeClipboard {
        reject_html: bool,
        reject_text: bool,
        html: Option<(String, String)>,
        text: Option<String>,
    }

    impl ClipboardSink for FakeClipboard {
        fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
            if self.reject_text {
                return Err(ClipboardError::WriteFailed("denied".into()));
            }
            self.text = Some(text.to_string());
            Ok(())
        }

        fn set_html(&mut self, html: &str, alt_text: &str) -> Result<(), ClipboardError> {
            if self.reject_html {
                return Err(ClipboardError::WriteFailed("denied".into()));
            }
            self.html = Some((html.to_string(), alt_text.to_string()));
            Ok(())
        }
    }

    #[test]
    fn test_rich_copy_writes_html_with_plain_alt() {
        let mut clipboard = FakeClipboard::default();
        let outcome = copy_rich(&mut clipboard, "<div>■P</div>").unwrap();
        assert_eq!(outcome, CopyOutcome::Html);
        let (html, alt) = clipboard.html.unwrap();
        assert_eq!(html, "<div>■P</div>");
        assert_eq!(alt, "■P");
        assert!(clipboard.text.is_none());
    }

    #[test]
    fn test_rich_copy_falls_back_to_plain() {
        let mut clipboard = FakeClipboard {
            reject_html: true,
            ..Default::default()
        };
        let outcome = copy_rich(&mut clipboard, "<div>hello</div>").unwrap();
        assert_eq!(outcome, CopyOutcome::PlainFallback);
        assert_eq!(clipboard.text.as_deref(), Some("hello"));
    }

    #[test]
    fn test_rich_copy_surfaces_total_failure() {
        let mut clipboard = FakeClipboard {
            reject_html: true,
            reject_text: true,
            ..Default::default()
        };
        assert!(copy_rich(&mut clipboard, "<div>x</div>").is_err());
    }
}
