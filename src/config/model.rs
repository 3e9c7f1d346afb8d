use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::mask::PatternSpec;

#[derive(Debug, Deserialize, Default, Clone, PartialEq)]
pub struct Config {
    pub defaults: Option<Defaults>,
    pub masks: Option<BTreeMap<String, MaskEntry>>,
}

#[derive(Debug, Deserialize, Default, Clone, PartialEq)]
pub struct Defaults {
    pub case_fold: Option<bool>,
    pub output: Option<OutputFormat>,
}

#[derive(Debug, Deserialize, Serialize, Default, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Each entry under `masks`. Either `pattern` is set, or both `short` and `long`.
#[derive(Debug, Deserialize, Default, Clone, PartialEq)]
pub struct MaskEntry {
    pub pattern: Option<String>,
    pub short: Option<String>,
    pub long: Option<String>,
    pub case_fold: Option<bool>,
    pub description: Option<String>,
}

/// Template layout of a configured mask, borrowed from its entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryLayout<'a> {
    Fixed(&'a str),
    ByLength { short: &'a str, long: &'a str },
}

impl MaskEntry {
    /// Returns None unless exactly one layout form is set.
    pub fn layout(&self) -> Option<EntryLayout<'_>> {
        match (&self.pattern, &self.short, &self.long) {
            (Some(pattern), None, None) => Some(EntryLayout::Fixed(pattern)),
            (None, Some(short), Some(long)) => Some(EntryLayout::ByLength { short, long }),
            _ => None,
        }
    }
}

impl Config {
    pub fn case_fold_default(&self) -> bool {
        self.defaults
            .as_ref()
            .and_then(|d| d.case_fold)
            .unwrap_or(true)
    }

    pub fn output_default(&self) -> OutputFormat {
        self.defaults
            .as_ref()
            .and_then(|d| d.output)
            .unwrap_or_default()
    }

    /// Validate the config structure.
    ///
    /// Collects all validation errors and returns them at once so that users
    /// can fix every issue in a single pass.
    ///
    /// Checks:
    /// - Each mask sets exactly one of `pattern` or `short` + `long`
    /// - Every template is non-blank
    /// - For `short` + `long`, the shorter template's slot classes are a
    ///   prefix of the longer one's, so one canonical value fits both layouts
    pub fn validate(&self) -> Result<(), crate::config::ConfigError> {
        let masks = match &self.masks {
            Some(masks) => masks,
            None => return Ok(()),
        };

        let mut errors = Vec::new();

        for (name, entry) in masks {
            let templates = match entry.layout() {
                Some(EntryLayout::Fixed(pattern)) => vec![("pattern", pattern)],
                Some(EntryLayout::ByLength { short, long }) => {
                    vec![("short", short), ("long", long)]
                }
                None => {
                    errors.push(format!(
                        "masks.{name}: must set either 'pattern' or both 'short' and 'long'"
                    ));
                    continue;
                }
            };

            let mut parsed = Vec::new();
            for (field, template) in templates {
                match PatternSpec::parse(template) {
                    Ok(spec) => parsed.push(spec),
                    Err(e) => errors.push(format!("masks.{name}.{field}: {e}")),
                }
            }

            if let [a, b] = parsed.as_slice() {
                let (short, long) = if a.slot_count() <= b.slot_count() {
                    (a, b)
                } else {
                    (b, a)
                };
                if !long.slot_classes().starts_with(short.slot_classes()) {
                    errors.push(format!(
                        "masks.{name}: slots of '{}' must match the leading slots of '{}'",
                        short.template(),
                        long.template()
                    ));
                }
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(crate::config::ConfigError::Validation(errors))
        }
    }

    /// Merge two configs. `self` is the base (e.g. global), `other` is the override (e.g. local).
    ///
    /// - defaults.case_fold / defaults.output: override (local wins)
    /// - masks: per-key override
    pub fn merge(self, other: Config) -> Config {
        Config {
            defaults: Self::merge_defaults(self.defaults, other.defaults),
            masks: Self::merge_maps(self.masks, other.masks),
        }
    }

    fn merge_defaults(base: Option<Defaults>, over: Option<Defaults>) -> Option<Defaults> {
        match (base, over) {
            (None, None) => None,
            (Some(b), None) => Some(b),
            (None, Some(o)) => Some(o),
            (Some(b), Some(o)) => Some(Defaults {
                case_fold: o.case_fold.or(b.case_fold),
                output: o.output.or(b.output),
            }),
        }
    }

    fn merge_maps<K: Ord, V>(
        base: Option<BTreeMap<K, V>>,
        over: Option<BTreeMap<K, V>>,
    ) -> Option<BTreeMap<K, V>> {
        match (base, over) {
            (Some(mut b), Some(o)) => {
                b.extend(o);
                Some(b)
            }
            (b, o) => b.or(o),
        }
    }
}

/// Parse a YAML string into a `Config`.
pub fn parse_config(yaml: &str) -> Result<Config, crate::config::ConfigError> {
    let config: Config = serde_saphyr::from_str(yaml)?;
    Ok(config)
}
