use std::fmt::Display;

/// Renders `value` wrapped in double quote marks, for error messages.
pub fn in_quotes(value: &impl Display) -> String {
    format!("\"{}\"", value)
}
