use super::pattern::PatternSpec;

/// Reduce raw or already-formatted text to the canonical value of `spec`.
///
/// Two cursors move forward together: one over `input`, one over the slots.
/// A character the current slot's class accepts is kept (case-folded) and
/// advances the slot cursor; any other character, separators included, is
/// skipped without consuming a slot. Stops once every slot is filled.
/// Returns `None` when nothing was accepted.
pub fn normalize(spec: &PatternSpec, input: &str) -> Option<String> {
    let slots = spec.slot_classes();
    if slots.is_empty() || input.is_empty() {
        return None;
    }

    let mut canonical = String::with_capacity(slots.len());
    let mut slot = 0;

    for ch in input.chars() {
        if !slots[slot].accepts(ch) {
            continue;
        }
        canonical.push(spec.fold(ch));
        slot += 1;
        if slot == slots.len() {
            break;
        }
    }

    tracing::trace!(template = spec.template(), input, %canonical, "normalized");

    if canonical.is_empty() {
        None
    } else {
        Some(canonical)
    }
}
