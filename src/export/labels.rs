use crate::model::prefs::Locale;
use crate::model::task::{TaskPriority, TaskStatus};
use crate::ops::due::DueCategory;

/// Display label for a status
pub fn status_label(locale: Locale, status: TaskStatus) -> &'static str {
    match locale {
        Locale::Ja => match status {
            TaskStatus::Open => "未着手",
            TaskStatus::InProgress => "進行中",
            TaskStatus::Review => "レビュー待ち",
            TaskStatus::Blocked => "ブロック中",
            TaskStatus::Done => "完了",
            TaskStatus::Archived => "アーカイブ",
        },
        Locale::En => match status {
            TaskStatus::Open => "Open",
            TaskStatus::InProgress => "In progress",
            TaskStatus::Review => "In review",
            TaskStatus::Blocked => "Blocked",
            TaskStatus::Done => "Done",
            TaskStatus::Archived => "Archived",
        },
    }
}

/// Display label for a priority
pub fn priority_label(locale: Locale, priority: TaskPriority) -> &'static str {
    match locale {
        Locale::Ja => match priority {
            TaskPriority::P0 => "緊急",
            TaskPriority::P1 => "今すぐ重要",
            TaskPriority::P2 => "計画内重要",
            TaskPriority::P3 => "余裕があれば",
            TaskPriority::P4 => "いつか",
        },
        Locale::En => match priority {
            TaskPriority::P0 => "Urgent",
            TaskPriority::P1 => "Do now",
            TaskPriority::P2 => "Planned",
            TaskPriority::P3 => "Nice to have",
            TaskPriority::P4 => "Someday",
        },
    }
}

/// Bullet labels for the markdown export
pub struct FieldLabels {
    pub status: &'static str,
    pub priority: &'static str,
    pub start: &'static str,
    pub due: &'static str,
    pub assignees: &'static str,
}

pub fn field_labels(locale: Locale) -> &'static FieldLabels {
    match locale {
        Locale::Ja => &FieldLabels {
            status: "ステータス",
            priority: "優先度",
            start: "開始日",
            due: "期限",
            assignees: "担当者",
        },
        Locale::En => &FieldLabels {
            status: "Status",
            priority: "Priority",
            start: "Start",
            due: "Due",
            assignees: "Assignees",
        },
    }
}

/// Inline assignee prefix for the plain-text/HTML exports
pub fn assignee_prefix(locale: Locale) -> &'static str {
    match locale {
        Locale::Ja => "担当: ",
        Locale::En => "Assignees: ",
    }
}

/// Calendar date format for export output
pub fn date_format(locale: Locale) -> &'static str {
    match locale {
        Locale::Ja => "%Y/%m/%d",
        Locale::En => "%Y-%m-%d",
    }
}

/// Badge label for a due-date category
pub fn due_label(locale: Locale, category: DueCategory) -> &'static str {
    match locale {
        Locale::Ja => match category {
            DueCategory::Overdue => "期限切れ",
            DueCategory::Today => "今日",
            DueCategory::Soon => "近日",
            DueCategory::Later => "予定あり",
            DueCategory::NoDue => "期限なし",
        },
        Locale::En => match category {
            DueCategory::Overdue => "Overdue",
            DueCategory::Today => "Today",
            DueCategory::Soon => "Soon",
            DueCategory::Later => "Scheduled",
            DueCategory::NoDue => "No due date",
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_status_has_labels_in_both_locales() {
        for status in TaskStatus::ALL {
            assert!(!status_label(Locale::Ja, status).is_empty());
            assert!(!status_label(Locale::En, status).is_empty());
        }
    }

    #[test]
    fn test_ja_labels_match_wire_values() {
        assert_eq!(status_label(Locale::Ja, TaskStatus::Open), "未着手");
        assert_eq!(priority_label(Locale::Ja, TaskPriority::P0), "緊急");
    }
}
