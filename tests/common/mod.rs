#![allow(dead_code)]

use maskfmt::mask::CharClass;

/// Templates exercised by the property tests.
///
/// Every literal here is punctuation or space. A digit or letter literal is
/// itself accepted by slots when input is scanned, so a display string would
/// not normalize back to its value; those templates are covered by example
/// tests instead.
pub const TEMPLATES: &[&str] = &[
    "NNN.NNN.NNN-NN",
    "NN.NNN.NNN/NNNN-NN",
    "(NN) NNNNN-NNNN",
    "LLL-NANN",
    "AAAAAAAAAAAAAAAAA",
    "+(NN) NNNN-NNNN",
    "A.A/L L-N",
    "[LL]:NN",
    "NNNN",
    "----",
];

/// Regex for one upper-cased character of `class`.
pub fn class_regex(class: CharClass) -> &'static str {
    match class {
        CharClass::Numeric => "[0-9]",
        CharClass::Letter => "[A-Z]",
        CharClass::AlphaNumeric => "[A-Z0-9]",
    }
}
