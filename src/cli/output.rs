use serde::Serialize;

use crate::config::OutputFormat;

/// One transformed value, as written by `maskfmt format` / `maskfmt normalize`.
#[derive(Debug, Serialize, PartialEq)]
pub struct OutputRecord<'a> {
    pub input: &'a str,
    pub output: Option<&'a str>,
}

/// Render a record as a single output line (without the trailing newline).
///
/// Text mode prints the bare result, or an empty line when there is no value.
pub fn render_record(
    format: OutputFormat,
    record: &OutputRecord<'_>,
) -> Result<String, anyhow::Error> {
    match format {
        OutputFormat::Text => Ok(record.output.unwrap_or_default().to_string()),
        OutputFormat::Json => Ok(serde_json::to_string(record)?),
    }
}
