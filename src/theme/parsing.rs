/// What: Strip an inline comment from a config value.
///
/// Inputs:
/// - `s`: Raw value text after `=`
///
/// Output:
/// - Trimmed value without a trailing `# ...` or `// ...` comment.
///
/// Details:
/// - A leading `#` is kept so values such as `#ff0000` survive; only a second
///   `#` starts a comment in that case.
pub(crate) fn strip_inline_comment(mut s: &str) -> &str {
    if let Some(i) = s.find("//") {
        s = &s[..i];
    }
    if let Some(i_rel) = if let Some(stripped) = s.strip_prefix('#') {
        stripped.find('#').map(|j| j + 1)
    } else {
        s.find('#')
    } {
        s = &s[..i_rel];
    }
    s.trim()
}

/// Boolean config value: `true`/`1`/`yes`/`on` and `false`/`0`/`no`/`off`.
pub(crate) fn parse_bool(val: &str) -> Option<bool> {
    match val.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Config key normalized to lowercase with `.`, `-` and spaces mapped to `_`.
pub(crate) fn normalize_key(raw_key: &str) -> String {
    raw_key.trim().to_lowercase().replace(['.', '-', ' '], "_")
}
