/// Wrap the changed middle of `new_text` in markup, based on the longest
/// common prefix and suffix against `old_text`.
///
/// Character-level and O(n); a display heuristic for short single-field
/// edits (titles, summaries), not a minimal edit script. The suffix scan
/// is bounded so it never overlaps the prefix. Stripping the markup from
/// the result always reproduces `new_text` exactly.
pub fn highlight_change(
    old_text: &str,
    new_text: &str,
    markup: impl Fn(&str) -> String,
) -> String {
    if old_text.is_empty() || old_text == new_text {
        return new_text.to_string();
    }

    let old: Vec<char> = old_text.chars().collect();
    let new: Vec<char> = new_text.chars().collect();

    let mut prefix = 0;
    while prefix < old.len() && prefix < new.len() && old[prefix] == new[prefix] {
        prefix += 1;
    }

    let mut suffix = 0;
    while suffix < old.len() - prefix
        && suffix < new.len() - prefix
        && old[old.len() - 1 - suffix] == new[new.len() - 1 - suffix]
    {
        suffix += 1;
    }

    let changed: String = new[prefix..new.len() - suffix].iter().collect();
    if changed.is_empty() {
        return new_text.to_string();
    }

    let head: String = new[..prefix].iter().collect();
    let tail: String = new[new.len() - suffix..].iter().collect();
    format!("{}{}{}", head, markup(&changed), tail)
}
