mod parser;


use super::{MaskError, formatter, normalizer};

/// Character class a slot accepts. Classification is ASCII-only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    /// `A`: letter or digit
    AlphaNumeric,
    /// `N`: digit 0-9
    Numeric,
    /// `L`: letter
    Letter,
}

impl CharClass {
    /// Map a template character to its slot class. Markers are case-sensitive:
    /// `n`, `l` and `a` are literals.
    pub fn from_marker(marker: char) -> Option<Self> {
        match marker {
            'A' => Some(Self::AlphaNumeric),
            'N' => Some(Self::Numeric),
            'L' => Some(Self::Letter),
            _ => None,
        }
    }

    pub fn marker(self) -> char {
        match self {
            Self::AlphaNumeric => 'A',
            Self::Numeric => 'N',
            Self::Letter => 'L',
        }
    }

    pub fn accepts(self, ch: char) -> bool {
        match self {
            Self::AlphaNumeric => ch.is_ascii_alphanumeric(),
            Self::Numeric => ch.is_ascii_digit(),
            Self::Letter => ch.is_ascii_alphabetic(),
        }
    }
}

/// One template position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternToken {
    /// Filled from the canonical value (e.g. `N` in `NNN-NN`)
    Slot(CharClass),
    /// Emitted verbatim in display output (e.g. `-` in `NNN-NN`)
    Literal(char),
}

/// A parsed mask template.
///
/// Built once from a template string and never mutated afterwards, so a
/// single instance can be shared freely between threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternSpec {
    template: String,
    tokens: Vec<PatternToken>,
    slot_classes: Vec<CharClass>,
    case_fold: bool,
}

impl PatternSpec {
    /// Parse `template` with case folding enabled.
    pub fn parse(template: &str) -> Result<Self, MaskError> {
        Self::with_case_fold(template, true)
    }

    /// Parse `template`, upper-casing slot characters when `case_fold` is set.
    pub fn with_case_fold(template: &str, case_fold: bool) -> Result<Self, MaskError> {
        let tokens = parser::parse_template(template)?;
        let slot_classes: Vec<CharClass> = tokens
            .iter()
            .filter_map(|token| match token {
                PatternToken::Slot(class) => Some(*class),
                PatternToken::Literal(_) => None,
            })
            .collect();

        tracing::debug!(
            template,
            slots = slot_classes.len(),
            case_fold,
            "parsed mask template"
        );

        Ok(Self {
            template: template.to_string(),
            tokens,
            slot_classes,
            case_fold,
        })
    }

    pub fn template(&self) -> &str {
        &self.template
    }

    pub fn tokens(&self) -> &[PatternToken] {
        &self.tokens
    }

    pub fn slot_classes(&self) -> &[CharClass] {
        &self.slot_classes
    }

    /// Maximum length of a canonical value for this template.
    pub fn slot_count(&self) -> usize {
        self.slot_classes.len()
    }

    pub fn case_fold(&self) -> bool {
        self.case_fold
    }

    /// See [`normalizer::normalize`].
    pub fn normalize(&self, input: &str) -> Option<String> {
        normalizer::normalize(self, input)
    }

    /// See [`formatter::format`].
    pub fn format(&self, input: &str) -> Option<String> {
        formatter::format(self, input)
    }

    /// Apply the case-folding policy to a slot character.
    pub(super) fn fold(&self, ch: char) -> char {
        if self.case_fold {
            ch.to_ascii_uppercase()
        } else {
            ch
        }
    }
}
