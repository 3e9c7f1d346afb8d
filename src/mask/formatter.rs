use super::normalizer;
use super::pattern::{PatternSpec, PatternToken};

/// Render `input` against the template of `spec`.
///
/// The input is normalized first, so any text is accepted. Literals are
/// emitted verbatim and slots take the next canonical character. Emission
/// stops as soon as the canonical value runs out, so a partial value never
/// ends with a dangling separator. Returns `None` when there is no value.
pub fn format(spec: &PatternSpec, input: &str) -> Option<String> {
    let canonical = normalizer::normalize(spec, input)?;
    let rendered = layout(spec, &canonical);
    tracing::trace!(template = spec.template(), input, output = %rendered, "formatted");
    Some(rendered)
}

/// Place an already-normalized value into the template of `spec`.
pub(crate) fn layout(spec: &PatternSpec, canonical: &str) -> String {
    let mut values = canonical.chars().peekable();
    let mut rendered = String::with_capacity(spec.template().len());

    for token in spec.tokens() {
        if values.peek().is_none() {
            break;
        }
        match *token {
            PatternToken::Literal(literal) => rendered.push(literal),
            PatternToken::Slot(_) => {
                if let Some(ch) = values.next() {
                    rendered.push(spec.fold(ch));
                }
            }
        }
    }

    rendered
}
