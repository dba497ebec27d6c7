use crate::model::filter::FilterCondition;

/// Build canonical saved-view query text from a filter condition.
///
/// Inverse of `parse_query` for the supported grammar: one element emits
/// the bare form, several the parenthesized form, and date bounds emit
/// `>=`/`<=` tokens. Emission order is fixed (status, priority,
/// assignees, labels, then start/due bounds) so the output is a stable
/// canonical form. An all-empty condition yields the empty string;
/// callers persisting a view must reject that before saving.
pub fn build_query(cond: &FilterCondition) -> String {
    let mut parts: Vec<String> = Vec::new();

    push_values(&mut parts, "status", &cond.status);
    push_values(&mut parts, "priority", &cond.priority);
    push_values(&mut parts, "assignees", &cond.assignees);
    push_values(&mut parts, "labels", &cond.labels);
    push_bound(&mut parts, "start_date", ">=", cond.start_date_from.as_deref());
    push_bound(&mut parts, "start_date", "<=", cond.start_date_to.as_deref());
    push_bound(&mut parts, "due_date", ">=", cond.due_date_from.as_deref());
    push_bound(&mut parts, "due_date", "<=", cond.due_date_to.as_deref());

    parts.join(" ")
}

fn push_values(parts: &mut Vec<String>, key: &str, values: &[String]) {
    let clean: Vec<&str> = values
        .iter()
        .map(String::as_str)
        .filter(|v| !v.trim().is_empty())
        .collect();

    match clean.len() {
        0 => {}
        1 => parts.push(format!("{}:{}", key, clean[0])),
        _ => parts.push(format!("{}:({})", key, clean.join(" "))),
    }
}

fn push_bound(parts: &mut Vec<String>, key: &str, op: &str, bound: Option<&str>) {
    if let Some(date) = bound
        && !date.trim().is_empty()
    {
        parts.push(format!("{}:{}{}", key, op, date));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::query_parser::parse_query;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_build_empty_condition() {
        assert_eq!(build_query(&FilterCondition::default()), "");
    }

    #[test]
    fn test_build_single_and_multi_values() {
        let cond = FilterCondition {
            status: vec!["open".into(), "in_progress".into()],
            priority: vec!["P0".into()],
            ..Default::default()
        };
        assert_eq!(build_query(&cond), "status:(open in_progress) priority:P0");
    }

    #[test]
    fn test_build_fixed_field_order() {
        let cond = FilterCondition {
            labels: vec!["infra".into()],
            assignees: vec!["bob".into(), "alice".into()],
            priority: vec!["P1".into()],
            status: vec!["done".into()],
            start_date_from: Some("2024-01-01".into()),
            start_date_to: Some("2024-03-31".into()),
            due_date_from: Some("2024-02-01".into()),
            due_date_to: Some("2024-04-30".into()),
        };
        assert_eq!(
            build_query(&cond),
            "status:done priority:P1 assignees:(bob alice) labels:infra \
             start_date:>=2024-01-01 start_date:<=2024-03-31 \
             due_date:>=2024-02-01 due_date:<=2024-04-30"
        );
    }

    #[test]
    fn test_build_cleans_blank_entries() {
        let cond = FilterCondition {
            status: vec!["".into(), "open".into(), "  ".into()],
            ..Default::default()
        };
        assert_eq!(build_query(&cond), "status:open");
    }

    #[test]
    fn test_build_skips_blank_date_bounds() {
        let cond = FilterCondition {
            due_date_to: Some("  ".into()),
            status: vec!["open".into()],
            ..Default::default()
        };
        assert_eq!(build_query(&cond), "status:open");
    }

    // --- Round-trip laws ---

    #[test]
    fn test_parse_build_round_trip() {
        let cond = FilterCondition {
            status: vec!["open".into(), "review".into()],
            priority: vec!["P0".into(), "P1".into()],
            assignees: vec!["alice".into()],
            labels: vec!["backend".into(), "api".into(), "urgent".into()],
            start_date_from: Some("2024-01-01".into()),
            due_date_to: Some("2024-12-31".into()),
            ..Default::default()
        };
        assert_eq!(parse_query(&build_query(&cond)), cond);
    }

    #[test]
    fn test_build_parse_build_is_stable() {
        let queries = [
            "status:open",
            "status:(open in_progress) priority:P0",
            "assignees:(alice bob) start_date:>=2024-01-01 due_date:<=2024-12-31",
            "labels:x due_date:>=2024-06-01",
        ];
        for query in queries {
            let rebuilt = build_query(&parse_query(query));
            assert_eq!(rebuilt, query);
            // Canonical form is a fixed point
            assert_eq!(build_query(&parse_query(&rebuilt)), rebuilt);
        }
    }
}
