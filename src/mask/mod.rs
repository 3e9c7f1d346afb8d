mod error;
pub mod formatter;
pub mod normalizer;
mod pattern;

pub use error::*;
pub use pattern::{CharClass, PatternSpec, PatternToken};

/// The two pure transforms every mask exposes.
pub trait Masker {
    /// Render arbitrary input as a display string, or `None` for no value.
    fn format(&self, input: &str) -> Option<String>;

    /// Reduce arbitrary input to its canonical value, or `None` for no value.
    fn normalize(&self, input: &str) -> Option<String>;
}

impl Masker for PatternSpec {
    fn format(&self, input: &str) -> Option<String> {
        formatter::format(self, input)
    }

    fn normalize(&self, input: &str) -> Option<String> {
        normalizer::normalize(self, input)
    }
}

/// Format `input` against `template` in one call.
///
/// Absent input yields `Ok(None)`; only a blank template is an error.
pub fn format(
    template: &str,
    case_fold: bool,
    input: Option<&str>,
) -> Result<Option<String>, MaskError> {
    let spec = PatternSpec::with_case_fold(template, case_fold)?;
    Ok(input.and_then(|value| formatter::format(&spec, value)))
}

/// Normalize `input` against `template` in one call.
pub fn normalize(
    template: &str,
    case_fold: bool,
    input: Option<&str>,
) -> Result<Option<String>, MaskError> {
    let spec = PatternSpec::with_case_fold(template, case_fold)?;
    Ok(input.and_then(|value| normalizer::normalize(&spec, value)))
}
