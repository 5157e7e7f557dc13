/// Remove HTML/XML tag segments from a string. Unclosed trailing tags are
/// dropped along with everything after the `<`.
pub fn strip_tags(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut in_tag = false;
    for c in input.chars() {
        match c {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            _ if !in_tag => out.push(c),
            _ => {}
        }
    }
    out
}

/// Strip tags and trim surrounding whitespace.
pub fn clean_text(input: &str) -> String {
    strip_tags(input).trim().to_string()
}

/// Normalize a loosely-typed JSON value into a list of non-blank strings.
/// Anything that is not an array coerces to an empty list; non-string and
/// blank entries are dropped.
pub fn sanitize_string_list(value: &serde_json::Value) -> Vec<String> {
    match value.as_array() {
        Some(items) => items
            .iter()
            .filter_map(|v| v.as_str())
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect(),
        None => Vec::new(),
    }
}
