use std::sync::LazyLock;

use regex::Regex;

static BRACKETED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[.*?\]").expect("Invalid bracketed pronunciation pattern"));

static SLASHED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/(.*?)/").expect("Invalid slashed pronunciation pattern"));

/// Split a raw definition into an optional `[...]` pronunciation and the rest.
///
/// Only the first bracket group is taken, and only that occurrence is removed.
pub fn split_bracketed(text: &str) -> (Option<String>, String) {
    match BRACKETED.find(text) {
        Some(m) => (
            Some(m.as_str().to_string()),
            remove_span(text, m.start(), m.end()),
        ),
        None => (None, text.trim().to_string()),
    }
}

/// Same as [`split_bracketed`] for `/.../` tokens; the pronunciation is
/// rewrapped as `[...]`.
pub fn split_slashed(text: &str) -> (Option<String>, String) {
    let Some((whole, inner)) = SLASHED
        .captures(text)
        .and_then(|caps| Some((caps.get(0)?, caps.get(1)?)))
    else {
        return (None, text.trim().to_string());
    };

    (
        Some(bracket(inner.as_str())),
        remove_span(text, whole.start(), whole.end()),
    )
}

/// Wrap a bare pronunciation in square brackets
pub fn bracket(inner: &str) -> String {
    format!("[{inner}]")
}

fn remove_span(text: &str, start: usize, end: usize) -> String {
    let mut rest = String::with_capacity(text.len() - (end - start));
    rest.push_str(&text[..start]);
    rest.push_str(&text[end..]);
    rest.trim().to_string()
}
