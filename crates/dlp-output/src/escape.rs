//! Markup escaping shared by the XML and HTML writers.
//!
//! Escaping is not best-effort: every piece of text that lands in markup
//! goes through [`escape_markup`], and every element name through
//! [`element_name`].

use std::borrow::Cow;

/// Entity-escape `&`, `<`, `>`, `"` and `'`, and drop control characters
/// that XML 1.0 forbids outright (tab, newline and carriage return stay).
pub fn escape_markup(s: &str) -> Cow<'_, str> {
    if !s.chars().any(needs_escape) {
        return Cow::Borrowed(s);
    }
    let mut out = String::with_capacity(s.len() + 16);
    for c in s.chars() {
        match c {
            '&'  => out.push_str("&amp;"),
            '<'  => out.push_str("&lt;"),
            '>'  => out.push_str("&gt;"),
            '"'  => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            c if is_forbidden_control(c) => {}
            c => out.push(c),
        }
    }
    Cow::Owned(out)
}

fn needs_escape(c: char) -> bool {
    matches!(c, '&' | '<' | '>' | '"' | '\'') || is_forbidden_control(c)
}

fn is_forbidden_control(c: char) -> bool {
    (c < '\u{20}' && !matches!(c, '\t' | '\n' | '\r')) || matches!(c, '\u{FFFE}' | '\u{FFFF}')
}

/// Coerce `name` into a valid XML element name.
///
/// Letters and digits from any script are kept, as are `_`, `.` and `-`;
/// anything else becomes `_`.  A name starting with a digit, `.` or `-`
/// gets a `_` prefix, and an empty name becomes `_`.
pub fn element_name(name: &str) -> Cow<'_, str> {
    let valid_char = |c: char| c.is_alphanumeric() || matches!(c, '_' | '.' | '-');
    let valid_start = |c: char| c.is_alphabetic() || c == '_';

    match name.chars().next() {
        Some(first) if valid_start(first) && name.chars().all(valid_char) => Cow::Borrowed(name),
        None => Cow::Borrowed("_"),
        Some(first) => {
            let mut out = String::with_capacity(name.len() + 1);
            if !valid_start(first) && valid_char(first) {
                out.push('_');
            }
            out.extend(name.chars().map(|c| if valid_char(c) { c } else { '_' }));
            Cow::Owned(out)
        }
    }
}
