use std::sync::LazyLock;

use regex::Regex;

/// Fixed-schema fields that hold a single scalar token
const SCALAR_FIELDS: [&str; 6] = ["id", "status", "priority", "parent_id", "start", "due"];

/// Fixed-schema fields that hold a bracketed list literal
const LIST_FIELDS: [&str; 2] = ["assignees", "labels"];

/// Name of the single-line sub-map that carries open-ended keys
const EXTRA_MAP_KEY: &str = "extra_meta";

/// Splits a task document into everything up to and including the opening
/// fence, the block interior, and everything from the closing fence on.
static BLOCK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("(?s)^(.*?```yaml\n)(.*?)(\n```.*)$").unwrap());

struct BlockRegions<'a> {
    head: &'a str,
    inner: &'a str,
    tail: &'a str,
}

fn locate_block(body: &str) -> Option<BlockRegions<'_>> {
    let caps = BLOCK_RE.captures(body)?;
    Some(BlockRegions {
        head: caps.get(1).map_or("", |m| m.as_str()),
        inner: caps.get(2).map_or("", |m| m.as_str()),
        tail: caps.get(3).map_or("", |m| m.as_str()),
    })
}

/// Rewrite one field of the embedded metadata block, returning the new
/// document text. All bytes outside the block interior are preserved
/// exactly; if no block can be located the input is returned unchanged
/// (callers detect the no-op by comparing output to input).
///
/// Fixed-schema scalar fields replace their value token; list fields
/// (`assignees`, `labels`) take a comma-separated `value` and replace the
/// whole bracketed literal; any other field name is upserted into the
/// single-line `extra_meta: {...}` sub-map.
pub fn set_field(body: &str, field: &str, value: &str) -> String {
    if LIST_FIELDS.contains(&field) {
        let values: Vec<String> = value
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        return set_list_field(body, field, &values);
    }
    if SCALAR_FIELDS.contains(&field) {
        return set_scalar_field(body, field, value);
    }
    set_extra_field(body, field, value)
}

/// Replace the scalar value of `field:`, appending the line if absent.
pub fn set_scalar_field(body: &str, field: &str, value: &str) -> String {
    edit_block(body, field, |_| format!("{}: {}", field, value))
}

/// Replace the bracketed list literal of `field:`, each element quoted.
pub fn set_list_field(body: &str, field: &str, values: &[String]) -> String {
    let literal: Vec<String> = values.iter().map(|v| format!("\"{}\"", v)).collect();
    edit_block(body, field, |_| {
        format!("{}: [{}]", field, literal.join(", "))
    })
}

/// Upsert `key` into the single-line `extra_meta` brace literal.
/// Existing pairs keep their order; a new key is appended last. If the
/// sub-map line does not exist it is created with just this key.
pub fn set_extra_field(body: &str, key: &str, value: &str) -> String {
    edit_block(body, EXTRA_MAP_KEY, |existing| {
        let mut pairs = match existing {
            Some(line) => parse_pairs(line),
            None => Vec::new(),
        };
        match pairs.iter_mut().find(|(k, _)| k == key) {
            Some(pair) => pair.1 = value.to_string(),
            None => pairs.push((key.to_string(), value.to_string())),
        }
        let rendered: Vec<String> = pairs
            .iter()
            .map(|(k, v)| format!("\"{}\": \"{}\"", k, v))
            .collect();
        format!("{}: {{{}}}", EXTRA_MAP_KEY, rendered.join(", "))
    })
}

/// Shared line-level edit: find the `field:` line in the block interior
/// and replace it with `rewrite(Some(line))`, or append `rewrite(None)`
/// if the field is not present yet. No block, no change.
fn edit_block(body: &str, field: &str, rewrite: impl Fn(Option<&str>) -> String) -> String {
    let Some(regions) = locate_block(body) else {
        return body.to_string();
    };

    let mut lines: Vec<String> = if regions.inner.is_empty() {
        Vec::new()
    } else {
        regions.inner.split('\n').map(String::from).collect()
    };

    let target = lines.iter().position(|line| is_field_line(line, field));
    match target {
        Some(idx) => {
            let replacement = rewrite(Some(lines[idx].as_str()));
            lines[idx] = replacement;
        }
        None => lines.push(rewrite(None)),
    }

    format!("{}{}{}", regions.head, lines.join("\n"), regions.tail)
}

/// A field line is `field:` at the start of the line (top-level key)
fn is_field_line(line: &str, field: &str) -> bool {
    line.strip_prefix(field)
        .is_some_and(|rest| rest.starts_with(':'))
}

/// Scan the `"key": "value"` pairs out of a single-line brace literal.
/// Quoted strings are collected in order and paired up; this is the
/// narrow format the system itself writes, not general JSON.
fn parse_pairs(line: &str) -> Vec<(String, String)> {
    let Some(open) = line.find('{') else {
        return Vec::new();
    };
    let Some(close) = line.rfind('}') else {
        return Vec::new();
    };
    if close <= open {
        return Vec::new();
    }

    let mut strings = Vec::new();
    let mut current: Option<String> = None;
    for c in line[open + 1..close].chars() {
        match (&mut current, c) {
            (None, '"') => current = Some(String::new()),
            (Some(s), '"') => {
                strings.push(std::mem::take(s));
                current = None;
            }
            (Some(s), c) => s.push(c),
            (None, _) => {}
        }
    }

    strings
        .chunks_exact(2)
        .map(|pair| (pair[0].clone(), pair[1].clone()))
        .collect()
}
