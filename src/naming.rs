//! Display titles derived from file and directory names.
//!
//! Two slightly different conventions are in use, and both are kept so the
//! generated titles stay stable:
//!
//! - **Nav titles** ([`nav_title`]): split on `-`, capitalize each piece, join
//!   with single spaces. `getting-started` → "Getting Started".
//! - **Sidebar titles** ([`display_title`]): dashes become spaces, then every
//!   character that starts a word (an alphanumeric or `_` run) is uppercased.
//!   `api-v2.reference` → "Api V2.Reference".
//!
//! They agree on ordinary `kebab-case` names and differ only on punctuation
//! inside a segment.

/// Uppercase the first character of `word`, leaving the rest untouched.
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Title for a top navigation entry.
pub fn nav_title(dir_name: &str) -> String {
    dir_name
        .split('-')
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Title for a sidebar group or page link.
pub fn display_title(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut prev_is_word = false;
    for c in name.chars() {
        let c = if c == '-' { ' ' } else { c };
        let word = is_word_char(c);
        if word && !prev_is_word {
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
        prev_is_word = word;
    }
    out
}

/// Strip `ext` (e.g. `.md`) from the end of `file_name`.
///
/// Returns `None` when the name does not end with the extension or would be
/// empty without it.
pub fn page_stem<'a>(file_name: &'a str, ext: &str) -> Option<&'a str> {
    file_name.strip_suffix(ext).filter(|stem| !stem.is_empty())
}
