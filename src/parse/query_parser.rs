use crate::model::filter::FilterCondition;

/// Parse saved-view query text into a structured filter condition.
///
/// Grammar: space-separated `key:value` tokens, where value is a bare
/// scalar, a parenthesized group `(v1 v2 ...)` that may span several
/// tokens, or a `>=`/`<=`-prefixed date bound. Parsing is best-effort:
/// malformed tokens, unknown keys and unusable values are skipped, never
/// raised — the query text is hand-editable.
pub fn parse_query(query: &str) -> FilterCondition {
    let mut cond = FilterCondition::default();
    if query.trim().is_empty() {
        return cond;
    }

    let parts: Vec<&str> = query.split(' ').collect();
    let mut i = 0;

    while i < parts.len() {
        let part = parts[i];
        if part.trim().is_empty() {
            i += 1;
            continue;
        }

        let Some(colon) = part.find(':') else {
            // No key separator — skip
            i += 1;
            continue;
        };
        let key = &part[..colon];
        let value = &part[colon + 1..];

        if let Some(rest) = value.strip_prefix('(') {
            let values = collect_group(rest, &parts, &mut i);
            assign_values(&mut cond, key, values);
        } else {
            match key {
                "start_date" => {
                    if let Some(date) = value.strip_prefix(">=") {
                        cond.start_date_from = non_blank(date);
                    } else if let Some(date) = value.strip_prefix("<=") {
                        cond.start_date_to = non_blank(date);
                    }
                    // Other operators are not part of the grammar — ignore
                }
                "due_date" => {
                    if let Some(date) = value.strip_prefix(">=") {
                        cond.due_date_from = non_blank(date);
                    } else if let Some(date) = value.strip_prefix("<=") {
                        cond.due_date_to = non_blank(date);
                    }
                }
                _ => {
                    if !value.is_empty() {
                        assign_values(&mut cond, key, vec![value.to_string()]);
                    }
                }
            }
        }

        i += 1;
    }

    cond
}

/// Collect a parenthesized group starting at the `(`-bearing token.
///
/// `rest` is the current token with the opening paren stripped. If the
/// group does not close in this token, scan forward until a token ending
/// in `)` is found; `i` is left on the closing token. An unterminated
/// group swallows the remaining tokens.
fn collect_group(rest: &str, parts: &[&str], i: &mut usize) -> Vec<String> {
    let mut values = Vec::new();

    if let Some(inner) = rest.strip_suffix(')') {
        // Whole group in one token: key:(v) or key:()
        if !inner.is_empty() {
            values.push(inner.to_string());
        }
        return values;
    }

    if !rest.is_empty() {
        values.push(rest.to_string());
    }
    *i += 1;
    while *i < parts.len() {
        let current = parts[*i];
        if let Some(last) = current.strip_suffix(')') {
            if !last.is_empty() {
                values.push(last.to_string());
            }
            break;
        }
        if !current.is_empty() {
            values.push(current.to_string());
        }
        *i += 1;
    }

    values
}

fn assign_values(cond: &mut FilterCondition, key: &str, values: Vec<String>) {
    match key {
        "status" => cond.status = values,
        "priority" => cond.priority = values,
        "assignees" => cond.assignees = values,
        "labels" => cond.labels = values,
        // Unrecognized keys are ignored (the group tokens are still consumed)
        _ => {}
    }
}

fn non_blank(s: &str) -> Option<String> {
    if s.trim().is_empty() {
        None
    } else {
        Some(s.to_string())
    }
}
