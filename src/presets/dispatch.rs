use crate::mask::formatter::layout;
use crate::mask::{Masker, PatternSpec};

/// Chooses between two templates by how many slot characters the value has.
///
/// The value is always normalized against the template with more slots; the
/// shorter layout is used for display while the canonical value still fits
/// in it (e.g. a 10 digit landline vs an 11 digit mobile number). The
/// canonical value is placed into the chosen layout as is, so `format`
/// yields a value exactly when `normalize` does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LengthDispatch {
    short: PatternSpec,
    long: PatternSpec,
}

impl LengthDispatch {
    /// Order of the two specs does not matter; the one with fewer slots
    /// becomes the short layout.
    pub fn new(a: PatternSpec, b: PatternSpec) -> Self {
        if a.slot_count() <= b.slot_count() {
            Self { short: a, long: b }
        } else {
            Self { short: b, long: a }
        }
    }

    pub fn short(&self) -> &PatternSpec {
        &self.short
    }

    pub fn long(&self) -> &PatternSpec {
        &self.long
    }

    /// Layout used to display a canonical value of `len` characters.
    pub fn select(&self, len: usize) -> &PatternSpec {
        if len <= self.short.slot_count() {
            &self.short
        } else {
            &self.long
        }
    }
}

impl Masker for LengthDispatch {
    fn format(&self, input: &str) -> Option<String> {
        let canonical = self.long.normalize(input)?;
        let selected = self.select(canonical.chars().count());
        tracing::trace!(template = selected.template(), "length dispatch selected layout");
        Some(layout(selected, &canonical))
    }

    fn normalize(&self, input: &str) -> Option<String> {
        self.long.normalize(input)
    }
}
