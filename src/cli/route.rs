use crate::config::Config;
use crate::mask::PatternSpec;
use crate::presets::Mask;
use crate::registry::MaskRegistry;

use super::MaskSource;

/// Build the mask selected on the command line.
///
/// `--pattern` is parsed directly and folds case unless `--no-case-fold` is
/// given or the config defaults turn folding off. `--mask` goes through the
/// registry, so configured masks shadow built-in presets.
pub fn route_mask(
    source: &MaskSource,
    no_case_fold: bool,
    config: &Config,
) -> Result<Mask, anyhow::Error> {
    let case_fold_override = no_case_fold.then_some(false);

    match (&source.pattern, &source.mask) {
        (Some(pattern), None) => {
            let case_fold = case_fold_override.unwrap_or_else(|| config.case_fold_default());
            Ok(Mask::Single(PatternSpec::with_case_fold(pattern, case_fold)?))
        }
        (None, Some(name)) => Ok(MaskRegistry::new(config).resolve(name, case_fold_override)?),
        _ => Err(anyhow::anyhow!(
            "exactly one of --pattern or --mask must be given"
        )),
    }
}

/// Values from the command line, or one per stdin line when none were given.
pub fn route_values(
    args: &[String],
    mut stdin: impl std::io::Read,
) -> Result<Vec<String>, anyhow::Error> {
    if !args.is_empty() {
        return Ok(args.to_vec());
    }

    let mut input = String::new();
    stdin.read_to_string(&mut input)?;
    Ok(input.lines().map(String::from).collect())
}
