mod dispatch;

pub use dispatch::LengthDispatch;

use crate::mask::{MaskError, Masker, PatternSpec};

/// Template layout of a named mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresetLayout {
    /// A single template.
    Fixed(&'static str),
    /// Two templates chosen by value length (see [`LengthDispatch`]).
    ByLength {
        short: &'static str,
        long: &'static str,
    },
}

/// A built-in named mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Preset {
    pub name: &'static str,
    pub description: &'static str,
    pub layout: PresetLayout,
}

const PRESETS: &[Preset] = &[
    Preset {
        name: "cpf",
        description: "Brazilian individual taxpayer ID",
        layout: PresetLayout::Fixed("NNN.NNN.NNN-NN"),
    },
    Preset {
        name: "cnpj",
        description: "Brazilian company taxpayer ID",
        layout: PresetLayout::Fixed("NN.NNN.NNN/NNNN-NN"),
    },
    Preset {
        name: "cpf-cnpj",
        description: "CPF or CNPJ, chosen by digit count",
        layout: PresetLayout::ByLength {
            short: "NNN.NNN.NNN-NN",
            long: "NN.NNN.NNN/NNNN-NN",
        },
    },
    Preset {
        name: "cep",
        description: "Brazilian postal code",
        layout: PresetLayout::Fixed("NNNNN-NNN"),
    },
    Preset {
        name: "phone-br",
        description: "Brazilian phone, landline (10 digits) or mobile (11 digits)",
        layout: PresetLayout::ByLength {
            short: "(NN) NNNN-NNNN",
            long: "(NN) NNNNN-NNNN",
        },
    },
    Preset {
        name: "plate-br",
        description: "Brazilian vehicle plate, legacy and Mercosul",
        layout: PresetLayout::Fixed("LLL-NANN"),
    },
    Preset {
        name: "vin",
        description: "Vehicle identification number",
        layout: PresetLayout::Fixed("AAAAAAAAAAAAAAAAA"),
    },
    Preset {
        name: "ssn-us",
        description: "US social security number",
        layout: PresetLayout::Fixed("NNN-NN-NNNN"),
    },
    Preset {
        name: "phone-us",
        description: "US phone number",
        layout: PresetLayout::Fixed("(NNN) NNN-NNNN"),
    },
    Preset {
        name: "zip-us",
        description: "US ZIP or ZIP+4",
        layout: PresetLayout::ByLength {
            short: "NNNNN",
            long: "NNNNN-NNNN",
        },
    },
];

/// All built-in presets, in catalogue order.
pub fn all() -> &'static [Preset] {
    PRESETS
}

/// Look up a built-in preset by name.
pub fn find(name: &str) -> Option<&'static Preset> {
    PRESETS.iter().find(|preset| preset.name == name)
}

impl PresetLayout {
    /// The templates this layout uses, short first.
    pub fn templates(&self) -> Vec<&'static str> {
        match *self {
            Self::Fixed(template) => vec![template],
            Self::ByLength { short, long } => vec![short, long],
        }
    }
}

impl Preset {
    /// Parse the preset's template(s) with the given case-folding policy.
    pub fn build(&self, case_fold: bool) -> Result<Mask, MaskError> {
        match self.layout {
            PresetLayout::Fixed(template) => Ok(Mask::Single(PatternSpec::with_case_fold(
                template, case_fold,
            )?)),
            PresetLayout::ByLength { short, long } => {
                Ok(Mask::ByLength(LengthDispatch::new(
                    PatternSpec::with_case_fold(short, case_fold)?,
                    PatternSpec::with_case_fold(long, case_fold)?,
                )))
            }
        }
    }
}

/// A ready-to-use mask built from a preset or a configured entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mask {
    Single(PatternSpec),
    ByLength(LengthDispatch),
}

impl Masker for Mask {
    fn format(&self, input: &str) -> Option<String> {
        match self {
            Self::Single(spec) => spec.format(input),
            Self::ByLength(dispatch) => dispatch.format(input),
        }
    }

    fn normalize(&self, input: &str) -> Option<String> {
        match self {
            Self::Single(spec) => spec.normalize(input),
            Self::ByLength(dispatch) => dispatch.normalize(input),
        }
    }
}
