//! Traits for output formatting

use serde::Serialize;

use crate::util::OutputFormat;

/// Trait for objects that can be formatted for porcelain output
pub(crate) trait Formattable {
    /// Format for machine-readable output (parseable, stable, human-readable)
    fn format_porcelain(&self) -> String;
}

/// Renders a value in the requested format.
pub(crate) fn render<T: Formattable + Serialize>(
    value: &T,
    format: OutputFormat,
) -> anyhow::Result<String> {
    Ok(match format {
        OutputFormat::Json => serde_json::to_string_pretty(value)?,
        OutputFormat::Porcelain => value.format_porcelain(),
    })
}
