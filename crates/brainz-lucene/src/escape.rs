// SPDX-License-Identifier: GPL-3.0-or-later

//! Escaping of Lucene reserved characters.

/// Single characters the query parser treats as syntax.
pub const RESERVED_CHARS: &[char] = &[
    '+', '-', '!', '(', ')', '{', '}', '[', ']', '^', '"', '~', '*', '?', ':', '\\',
];

/// Two-character operators. Only the doubled form is reserved; a lone `&` or
/// `|` passes through untouched.
pub const RESERVED_PAIRS: &[&str] = &["&&", "||"];

pub fn is_reserved(c: char) -> bool {
    RESERVED_CHARS.contains(&c)
}

/// Returns `text` with every reserved character (and each `&&` / `||` pair)
/// prefixed by a single backslash.
///
/// ```
/// use brainz_lucene::escape::escape;
///
/// assert_eq!(escape("ter?m*"), r"ter\?m\*");
/// assert_eq!(escape("&&b"), r"\&&b");
/// assert_eq!(escape("a&b"), "a&b");
/// ```
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 8);
    escape_into(&mut out, text);
    out
}

pub fn escape_into(out: &mut String, text: &str) {
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '&' | '|' if chars.peek() == Some(&c) => {
                chars.next();
                out.push('\\');
                out.push(c);
                out.push(c);
            }
            c if is_reserved(c) => {
                out.push('\\');
                out.push(c);
            }
            c => out.push(c),
        }
    }
}

/// Escapes a regular expression body so it can sit between escaped `/`
/// delimiters: the usual reserved set plus `/` itself.
pub fn escape_regex_into(out: &mut String, pattern: &str) {
    for (i, part) in pattern.split('/').enumerate() {
        if i > 0 {
            out.push_str("\\/");
        }
        escape_into(out, part);
    }
}

/// Escapes only the `/` delimiter, leaving the regex syntax intact.
pub fn escape_slashes_into(out: &mut String, pattern: &str) {
    for c in pattern.chars() {
        if c == '/' {
            out.push('\\');
        }
        out.push(c);
    }
}
