mod error;

pub use error::*;

use crate::config::{Config, EntryLayout, MaskEntry};
use crate::mask::PatternSpec;
use crate::presets::{self, LengthDispatch, Mask};

/// Where a resolved mask name came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaskOrigin {
    Config,
    Builtin,
}

/// A mask name visible through the registry, for listings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaskListing {
    pub name: String,
    pub origin: MaskOrigin,
    pub templates: Vec<String>,
    pub description: Option<String>,
}

/// Resolves mask names against the user's config and the built-in presets.
///
/// Configured masks shadow built-in presets of the same name.
pub struct MaskRegistry<'a> {
    config: &'a Config,
}

impl<'a> MaskRegistry<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self { config }
    }

    /// Build the mask called `name`.
    ///
    /// Case folding is taken from `case_fold_override` when given, then from
    /// the mask entry, then from the config defaults, and is on otherwise.
    pub fn resolve(
        &self,
        name: &str,
        case_fold_override: Option<bool>,
    ) -> Result<Mask, RegistryError> {
        let default_fold = self.config.case_fold_default();

        if let Some(entry) = self.config.masks.as_ref().and_then(|m| m.get(name)) {
            let case_fold = case_fold_override
                .or(entry.case_fold)
                .unwrap_or(default_fold);
            tracing::debug!(name, case_fold, "resolved configured mask");
            return build_entry(name, entry, case_fold);
        }

        let preset =
            presets::find(name).ok_or_else(|| RegistryError::UnknownMask(name.to_string()))?;
        let case_fold = case_fold_override.unwrap_or(default_fold);
        tracing::debug!(name, case_fold, "resolved built-in preset");
        preset
            .build(case_fold)
            .map_err(|source| RegistryError::Pattern {
                name: name.to_string(),
                source,
            })
    }

    /// Every resolvable mask name; configured masks first, then presets that
    /// are not shadowed by them.
    pub fn list(&self) -> Vec<MaskListing> {
        let configured = self.config.masks.iter().flatten();
        let mut listings: Vec<MaskListing> = configured
            .map(|(name, entry)| MaskListing {
                name: name.clone(),
                origin: MaskOrigin::Config,
                templates: entry_templates(entry),
                description: entry.description.clone(),
            })
            .collect();

        let is_shadowed = |name: &str| {
            self.config
                .masks
                .as_ref()
                .is_some_and(|m| m.contains_key(name))
        };

        listings.extend(
            presets::all()
                .iter()
                .filter(|preset| !is_shadowed(preset.name))
                .map(|preset| MaskListing {
                    name: preset.name.to_string(),
                    origin: MaskOrigin::Builtin,
                    templates: preset
                        .layout
                        .templates()
                        .into_iter()
                        .map(String::from)
                        .collect(),
                    description: Some(preset.description.to_string()),
                }),
        );

        listings
    }
}

fn build_entry(name: &str, entry: &MaskEntry, case_fold: bool) -> Result<Mask, RegistryError> {
    let parse = |template: &str| {
        PatternSpec::with_case_fold(template, case_fold).map_err(|source| {
            RegistryError::Pattern {
                name: name.to_string(),
                source,
            }
        })
    };

    match entry.layout() {
        Some(EntryLayout::Fixed(pattern)) => Ok(Mask::Single(parse(pattern)?)),
        Some(EntryLayout::ByLength { short, long }) => Ok(Mask::ByLength(LengthDispatch::new(
            parse(short)?,
            parse(long)?,
        ))),
        None => Err(RegistryError::IncompleteEntry(name.to_string())),
    }
}

fn entry_templates(entry: &MaskEntry) -> Vec<String> {
    match entry.layout() {
        Some(EntryLayout::Fixed(pattern)) => vec![pattern.to_string()],
        Some(EntryLayout::ByLength { short, long }) => vec![short.to_string(), long.to_string()],
        None => Vec::new(),
    }
}
