use std::fmt::Display;

/// Formats a single `key: value` porcelain line.
pub(super) fn porcelain_field(key: &str, value: impl Display) -> String {
    format!("{key}: {value}")
}
