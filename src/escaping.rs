//! Backslash escaping for the two contexts a fragment can be rendered in.
//!
//! The metacharacter sets differ on purpose: inside `[...]` most of them are
//! already literal.

const LITERAL_METACHARACTERS: &[char] = &[
    '/', '(', ')', '[', ']', '{', '}', '?', '^', '$', '.', '+', '*', '|',
];

const CLASS_METACHARACTERS: &[char] = &['/', '(', ')', '[', ']', '-'];

/// Escapes `text` for use as a literal in the body of a pattern.
pub fn escape_literal(text: &str) -> String {
    escape_with(text, LITERAL_METACHARACTERS)
}

/// Escapes `chars` for use between the brackets of a character class.
pub fn escape_for_class(chars: &str) -> String {
    escape_with(chars, CLASS_METACHARACTERS)
}

fn escape_with(text: &str, metacharacters: &[char]) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if metacharacters.contains(&c) {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
