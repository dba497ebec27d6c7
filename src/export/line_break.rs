use crate::model::prefs::{LineBreakMode, Preferences};

/// Line-break token shared by all exporters: a real newline, an HTML
/// tag, or a replacement marker the user later swaps via find/replace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineBreak {
    Lf,
    CrLf,
    Br,
    Marker(String),
}

impl LineBreak {
    pub fn as_str(&self) -> &str {
        match self {
            LineBreak::Lf => "\n",
            LineBreak::CrLf => "\r\n",
            LineBreak::Br => "<br>",
            LineBreak::Marker(marker) => marker,
        }
    }

    /// Marker mode changes the HTML exporter's structure (no row tags)
    pub fn is_marker(&self) -> bool {
        matches!(self, LineBreak::Marker(_))
    }

    pub fn from_prefs(prefs: &Preferences) -> Self {
        match prefs.line_break {
            LineBreakMode::Lf => LineBreak::Lf,
            LineBreakMode::Crlf => LineBreak::CrLf,
            LineBreakMode::Br => LineBreak::Br,
            LineBreakMode::Marker => LineBreak::Marker(prefs.marker.clone()),
        }
    }
}

impl Default for LineBreak {
    fn default() -> Self {
        LineBreak::Lf
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::prefs::DEFAULT_MARKER;

    #[test]
    fn test_tokens() {
        assert_eq!(LineBreak::Lf.as_str(), "\n");
        assert_eq!(LineBreak::CrLf.as_str(), "\r\n");
        assert_eq!(LineBreak::Br.as_str(), "<br>");
        assert_eq!(LineBreak::Marker("[[X]]".into()).as_str(), "[[X]]");
    }

    #[test]
    fn test_only_marker_mode_is_marker() {
        assert!(!LineBreak::Br.is_marker());
        // A custom marker that happens to equal a tag is still marker mode
        assert!(LineBreak::Marker("<br>".into()).is_marker());
    }

    #[test]
    fn test_from_prefs_uses_configured_marker() {
        let mut prefs = Preferences::default();
        prefs.line_break = crate::model::prefs::LineBreakMode::Marker;
        assert_eq!(
            LineBreak::from_prefs(&prefs),
            LineBreak::Marker(DEFAULT_MARKER.into())
        );
    }
}
