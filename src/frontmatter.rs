//! Title override lookup in markdown frontmatter.
//!
//! Only one key matters here, `sidebarTitle` unless configured otherwise.
//! Instead of parsing the block as YAML, a permissive pattern picks the key out
//! of a leading `---` fenced block. [`title_value`] is the only entry point, so
//! a structured parser can replace the heuristic without touching the tree
//! builders.
//!
//! ```markdown
//! ---
//! sidebarTitle: "Getting Started"
//! ---
//! ```
//!
//! The value is trimmed, then one layer of matching quotes is removed. Spaces
//! inside the quotes are kept. Anything that does not match (no block, unclosed
//! block, missing key, empty value) simply yields `None`.

use regex::Regex;
use std::sync::LazyLock;

/// Frontmatter key read when the config does not name another one.
pub const DEFAULT_TITLE_KEY: &str = "sidebarTitle";

/// Leading frontmatter block: `---` on the first line, body, closing `---` line.
static BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)\A---[ \t]*\r?\n(.*?)\r?\n---[ \t]*(?:\r?\n|\z)").expect("valid regex")
});

/// `key: value` on a line of its own.
fn key_line(key: &str) -> Option<Regex> {
    Regex::new(&format!(r"(?m)^{}:[ \t]*(.*?)[ \t]*\r?$", regex::escape(key))).ok()
}

/// Return the value of `key` from the leading frontmatter, if any.
pub fn title_value(source: &str, key: &str) -> Option<String> {
    let block = BLOCK.captures(source)?.get(1)?.as_str();
    let raw = key_line(key)?.captures(block)?.get(1)?.as_str();
    let value = strip_quotes(raw.trim());
    (!value.is_empty()).then(|| value.to_string())
}

/// Remove one layer of matching single or double quotes.
fn strip_quotes(value: &str) -> &str {
    for quote in ['"', '\''] {
        if let Some(inner) = value
            .strip_prefix(quote)
            .and_then(|rest| rest.strip_suffix(quote))
        {
            return inner;
        }
    }
    value
}
