//! Line parser for the minimal `.env` format.
//!
//! UTF-8, line-oriented: blank lines and full-line `#` comments are
//! skipped, the first `=` splits key from value, and a single matching
//! quote pair around the value is stripped.

/// Parse file content into key-value pairs in line order. Lines without a
/// `=`, or whose key trims to nothing, are skipped.
pub(crate) fn parse_content(content: &str) -> Vec<(String, String)> {
    let mut entries = Vec::new();

    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let Some((key, value)) = line.split_once('=') else {
            continue;
        };
        let key = key.trim();
        if key.is_empty() {
            continue;
        }
        entries.push((key.to_string(), strip_quotes(value.trim())));
    }

    entries
}

/// Strip one matching `"…"` or `'…'` pair. Text between the quotes is kept
/// verbatim (no inner trimming); trailing text after the closing quote is
/// trimmed and appended rather than discarded — callers depend on this
/// (e.g. a literal `\n` marker after the closing quote survives into the
/// value). A leading quote with no closer leaves the value untouched.
fn strip_quotes(value: &str) -> String {
    let Some(quote @ ('"' | '\'')) = value.chars().next() else {
        return value.to_string();
    };

    let rest = &value[1..];
    match rest.find(quote) {
        Some(end) => {
            let inner = &rest[..end];
            let suffix = rest[end + 1..].trim();
            format!("{inner}{suffix}")
        }
        None => value.to_string(),
    }
}
