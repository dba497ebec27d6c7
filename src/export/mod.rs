pub mod html;
pub mod labels;
pub mod line_break;
pub mod markdown;
pub mod text;

pub use html::{HtmlExportOptions, render_diff_html, strip_tags};
pub use line_break::LineBreak;
pub use markdown::render_markdown;
pub use text::render_text;

use chrono::{DateTime, NaiveDate};

use crate::model::prefs::Locale;

/// Options shared by the markdown and plain-text exporters
#[derive(Debug, Clone, Default)]
pub struct ExportOptions {
    pub locale: Locale,
    pub line_break: LineBreak,
}

/// Render a stored date (bare ISO date or RFC 3339 timestamp) in the
/// locale's calendar format. Unparseable input passes through untouched.
pub(crate) fn format_export_date(raw: &str, locale: Locale) -> String {
    let format = labels::date_format(locale);
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.format(format).to_string();
    }
    if let Ok(stamp) = DateTime::parse_from_rfc3339(raw) {
        return stamp.date_naive().format(format).to_string();
    }
    raw.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_export_date() {
        assert_eq!(format_export_date("2024-01-05", Locale::Ja), "2024/01/05");
        assert_eq!(format_export_date("2024-01-05", Locale::En), "2024-01-05");
        assert_eq!(
            format_export_date("2024-01-05T12:30:00+09:00", Locale::Ja),
            "2024/01/05"
        );
        assert_eq!(format_export_date("not a date", Locale::Ja), "not a date");
    }
}
