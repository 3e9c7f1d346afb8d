use super::{CharClass, PatternToken};
use crate::mask::MaskError;

/// Classify every template character as a slot marker or a literal.
pub(super) fn parse_template(template: &str) -> Result<Vec<PatternToken>, MaskError> {
    if template.is_empty() {
        return Err(MaskError::InvalidPattern("template is empty".into()));
    }
    if template.trim().is_empty() {
        return Err(MaskError::InvalidPattern(
            "template is whitespace-only".into(),
        ));
    }

    Ok(template
        .chars()
        .map(|ch| match CharClass::from_marker(ch) {
            Some(class) => PatternToken::Slot(class),
            None => PatternToken::Literal(ch),
        })
        .collect())
}
