use std::sync::LazyLock;

use regex::Regex;

/// Any `<...>` annotation on a single line, shortest match
static EMAIL_ANNOTATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("<.*?>").expect("email annotation pattern is valid"));

/// Remove every `<...>` annotation from a name and trim the result.
/// `"Alice Smith <alice@example.edu>"` becomes `"Alice Smith"`.
pub fn strip_email(name: &str) -> String {
    EMAIL_ANNOTATION.replace_all(name, "").trim().to_string()
}

/// Truncate a string to a maximum number of bytes on a char boundary,
/// adding a note with the original length if anything was cut.
pub fn truncate_with_note(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        return s.to_string();
    }
    let mut end = max_len;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}... (truncated, {} total bytes)", &s[..end], s.len())
}
