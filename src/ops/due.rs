use chrono::NaiveDate;

/// How close a due date is, for badge display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DueCategory {
    Overdue,
    Today,
    /// Due within the next 3 days
    Soon,
    Later,
    NoDue,
}

/// Categorize a task's due date relative to `today`. Unparseable dates
/// count as absent.
pub fn categorize_due(due_date: Option<&str>, today: NaiveDate) -> DueCategory {
    let Some(due) = due_date.and_then(parse_date) else {
        return DueCategory::NoDue;
    };

    let days = (due - today).num_days();
    if days < 0 {
        DueCategory::Overdue
    } else if days == 0 {
        DueCategory::Today
    } else if days <= 3 {
        DueCategory::Soon
    } else {
        DueCategory::Later
    }
}

/// Accept a bare ISO date or a timestamp with a date prefix.
fn parse_date(s: &str) -> Option<NaiveDate> {
    let date_part = s.get(..10).unwrap_or(s);
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_categories() {
        let today = day("2024-06-10");
        assert_eq!(categorize_due(Some("2024-06-09"), today), DueCategory::Overdue);
        assert_eq!(categorize_due(Some("2024-06-10"), today), DueCategory::Today);
        assert_eq!(categorize_due(Some("2024-06-13"), today), DueCategory::Soon);
        assert_eq!(categorize_due(Some("2024-06-14"), today), DueCategory::Later);
        assert_eq!(categorize_due(None, today), DueCategory::NoDue);
    }

    #[test]
    fn test_timestamp_prefix_is_accepted() {
        let today = day("2024-06-10");
        assert_eq!(
            categorize_due(Some("2024-06-10T09:00:00Z"), today),
            DueCategory::Today
        );
    }

    #[test]
    fn test_garbage_counts_as_no_due() {
        let today = day("2024-06-10");
        assert_eq!(categorize_due(Some("soon-ish"), today), DueCategory::NoDue);
    }
}
