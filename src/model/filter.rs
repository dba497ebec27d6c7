use serde::{Deserialize, Serialize};

/// A structured filter over a project's tasks.
///
/// Array fields are inclusion filters (OR within a field); an empty array
/// means the field is unconstrained. Date bounds are inclusive ISO dates.
/// The empty condition corresponds to the empty query string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCondition {
    #[serde(default)]
    pub status: Vec<String>,
    #[serde(default)]
    pub priority: Vec<String>,
    #[serde(default)]
    pub assignees: Vec<String>,
    #[serde(default)]
    pub labels: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date_from: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date_to: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date_from: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date_to: Option<String>,
}

impl FilterCondition {
    /// True if no field constrains anything
    pub fn is_empty(&self) -> bool {
        self.status.is_empty()
            && self.priority.is_empty()
            && self.assignees.is_empty()
            && self.labels.is_empty()
            && self.start_date_from.is_none()
            && self.start_date_to.is_none()
            && self.due_date_from.is_none()
            && self.due_date_to.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_empty() {
        assert!(FilterCondition::default().is_empty());
    }

    #[test]
    fn test_any_field_makes_it_non_empty() {
        let cond = FilterCondition {
            status: vec!["open".into()],
            ..Default::default()
        };
        assert!(!cond.is_empty());

        let cond = FilterCondition {
            due_date_to: Some("2024-12-31".into()),
            ..Default::default()
        };
        assert!(!cond.is_empty());
    }
}
