mod output;
mod route;

use std::io::Write;

use clap::{Parser, Subcommand};

use crate::config::{Config, OutputFormat};
use crate::mask::Masker;
use crate::registry::{MaskOrigin, MaskRegistry};

pub use output::{OutputRecord, render_record};
pub use route::{route_mask, route_values};

#[derive(Parser)]
#[command(name = "maskfmt")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
#[cfg_attr(test, derive(Debug, PartialEq))]
pub enum Commands {
    /// Render values through a mask (e.g. 12345678900 -> 123.456.789-00)
    Format(MaskArgs),
    /// Strip a mask from values, keeping only the slot characters
    Normalize(MaskArgs),
    /// List built-in presets and configured masks
    Masks,
}

#[derive(clap::Args)]
#[cfg_attr(test, derive(Debug, PartialEq))]
pub struct MaskArgs {
    #[command(flatten)]
    pub source: MaskSource,

    /// Keep slot characters in the case they were typed
    #[arg(long)]
    pub no_case_fold: bool,

    /// Print one JSON object per value instead of plain lines
    #[arg(long)]
    pub json: bool,

    /// Values to transform (read from stdin, one per line, when omitted)
    pub values: Vec<String>,
}

#[derive(clap::Args)]
#[group(required = true, multiple = false)]
#[cfg_attr(test, derive(Debug, PartialEq))]
pub struct MaskSource {
    /// Mask template: N = digit, L = letter, A = letter or digit, anything else is literal
    #[arg(long)]
    pub pattern: Option<String>,

    /// Name of a configured mask or built-in preset
    #[arg(long)]
    pub mask: Option<String>,
}

/// Which of the two transforms to apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transform {
    Format,
    Normalize,
}

/// Execute a parsed command, writing results to `out`.
pub fn run(
    command: Commands,
    config: &Config,
    stdin: impl std::io::Read,
    out: &mut impl Write,
) -> Result<(), anyhow::Error> {
    match command {
        Commands::Format(args) => run_transform(Transform::Format, &args, config, stdin, out),
        Commands::Normalize(args) => {
            run_transform(Transform::Normalize, &args, config, stdin, out)
        }
        Commands::Masks => list_masks(config, out),
    }
}

fn run_transform(
    transform: Transform,
    args: &MaskArgs,
    config: &Config,
    stdin: impl std::io::Read,
    out: &mut impl Write,
) -> Result<(), anyhow::Error> {
    let mask = route_mask(&args.source, args.no_case_fold, config)?;
    let values = route_values(&args.values, stdin)?;
    let output_format = if args.json {
        OutputFormat::Json
    } else {
        config.output_default()
    };

    for value in &values {
        let result = match transform {
            Transform::Format => mask.format(value),
            Transform::Normalize => mask.normalize(value),
        };
        let record = OutputRecord {
            input: value,
            output: result.as_deref(),
        };
        writeln!(out, "{}", render_record(output_format, &record)?)?;
    }

    Ok(())
}

fn list_masks(config: &Config, out: &mut impl Write) -> Result<(), anyhow::Error> {
    for listing in MaskRegistry::new(config).list() {
        let origin = match listing.origin {
            MaskOrigin::Config => "config",
            MaskOrigin::Builtin => "builtin",
        };
        let description = listing.description.unwrap_or_default();
        writeln!(
            out,
            "{}\t{}\t{}\t{}",
            listing.name,
            origin,
            listing.templates.join(" | "),
            description
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::parse_config;
    use indoc::indoc;
    use rstest::rstest;

    fn mask_args(pattern: Option<&str>, mask: Option<&str>, values: &[&str]) -> MaskArgs {
        MaskArgs {
            source: MaskSource {
                pattern: pattern.map(String::from),
                mask: mask.map(String::from),
            },
            no_case_fold: false,
            json: false,
            values: values.iter().map(|v| v.to_string()).collect(),
        }
    }

    #[rstest]
    #[case::format_with_pattern(
        &["maskfmt", "format", "--pattern", "NNN-NNNN", "1234567"],
        Commands::Format(mask_args(Some("NNN-NNNN"), None, &["1234567"])),
    )]
    #[case::normalize_with_mask(
        &["maskfmt", "normalize", "--mask", "cpf", "123.456.789-00", "111"],
        Commands::Normalize(mask_args(None, Some("cpf"), &["123.456.789-00", "111"])),
    )]
    #[case::format_reads_stdin(
        &["maskfmt", "format", "--mask", "cep"],
        Commands::Format(mask_args(None, Some("cep"), &[])),
    )]
    #[case::masks(&["maskfmt", "masks"], Commands::Masks)]
    fn cli_parsing(#[case] argv: &[&str], #[case] expected: Commands) {
        let cli = Cli::parse_from(argv);
        assert_eq!(cli.command, expected);
    }

    #[test]
    fn cli_parses_flags() {
        let cli = Cli::parse_from([
            "maskfmt",
            "format",
            "--pattern",
            "LL",
            "--no-case-fold",
            "--json",
            "ab",
        ]);
        let Commands::Format(args) = cli.command else {
            panic!("expected Format subcommand");
        };
        assert!(args.no_case_fold);
        assert!(args.json);
    }

    #[rstest]
    #[case::neither(&["maskfmt", "format", "123"])]
    #[case::both(&["maskfmt", "format", "--pattern", "NN", "--mask", "cpf", "12"])]
    fn cli_requires_exactly_one_source(#[case] argv: &[&str]) {
        assert!(Cli::try_parse_from(argv).is_err());
    }

    fn run_to_string(argv: &[&str], config: &Config, stdin: &str) -> String {
        let cli = Cli::parse_from(argv);
        let mut out = Vec::new();
        run(cli.command, config, stdin.as_bytes(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[rstest]
    #[case::format_args(
        &["maskfmt", "format", "--pattern", "NNN-NNNN", "1234567", "123", ""],
        "",
        "123-4567\n123\n\n",
    )]
    #[case::normalize_stdin(
        &["maskfmt", "normalize", "--mask", "cpf"],
        "123.456.789-00\nabc\n",
        "12345678900\n\n",
    )]
    #[case::format_json(
        &["maskfmt", "format", "--mask", "plate-br", "--json", "abc1d23", "-"],
        "",
        "{\"input\":\"abc1d23\",\"output\":\"ABC-1D23\"}\n{\"input\":\"-\",\"output\":null}\n",
    )]
    #[case::no_case_fold(
        &["maskfmt", "format", "--pattern", "LL-NN", "--no-case-fold", "ab12"],
        "",
        "ab-12\n",
    )]
    fn run_transforms(#[case] argv: &[&str], #[case] stdin: &str, #[case] expected: &str) {
        assert_eq!(run_to_string(argv, &Config::default(), stdin), expected);
    }

    #[test]
    fn run_uses_configured_output_default() {
        let config = parse_config("defaults: {output: json}").unwrap();
        let out = run_to_string(
            &["maskfmt", "normalize", "--pattern", "NN-NN", "12-34"],
            &config,
            "",
        );
        assert_eq!(out, "{\"input\":\"12-34\",\"output\":\"1234\"}\n");
    }

    #[test]
    fn run_lists_masks() {
        let config = parse_config(indoc! {r#"
            masks:
              order-id:
                pattern: "LL-NNNN"
                description: Order number
        "#})
        .unwrap();
        let out = run_to_string(&["maskfmt", "masks"], &config, "");
        let mut lines = out.lines();
        assert_eq!(
            lines.next(),
            Some("order-id\tconfig\tLL-NNNN\tOrder number")
        );
        assert!(out.contains("phone-br\tbuiltin\t(NN) NNNN-NNNN | (NN) NNNNN-NNNN\t"));
    }

    #[test]
    fn run_unknown_mask_fails() {
        let cli = Cli::parse_from(["maskfmt", "format", "--mask", "passport", "1"]);
        let mut out = Vec::new();
        let err = run(cli.command, &Config::default(), "".as_bytes(), &mut out).unwrap_err();
        assert_eq!(err.to_string(), "unknown mask: 'passport'");
    }

    #[test]
    fn run_blank_pattern_fails() {
        let cli = Cli::parse_from(["maskfmt", "format", "--pattern", "  ", "1"]);
        let mut out = Vec::new();
        let err = run(cli.command, &Config::default(), "".as_bytes(), &mut out).unwrap_err();
        assert!(err.to_string().starts_with("invalid pattern:"), "got {err}");
    }
}
