use std::fs;
use std::path::{Path, PathBuf};

use clap::Parser;
use indoc::indoc;
use maskfmt::cli::{self, Cli};
use maskfmt::config::{Config, ConfigError, ConfigLoader, DefaultConfigLoader};
use maskfmt::mask::Masker;
use maskfmt::registry::{MaskRegistry, RegistryError};
use rstest::{fixture, rstest};
use tempfile::TempDir;

const GLOBAL: &str = indoc! {r#"
    defaults:
      case_fold: true
    masks:
      ticket:
        pattern: "LLL-NNNN"
      doc:
        short: "NNN.NNN.NNN-NN"
        long: "NN.NNN.NNN/NNNN-NN"
"#};

const LOCAL: &str = indoc! {r#"
    defaults:
      output: json
    masks:
      ticket:
        pattern: "LL/NNN"
        case_fold: false
      cep:
        pattern: "NN.NNN-NNN"
"#};

struct Workspace {
    _tmp: TempDir,
    global: PathBuf,
    cwd: PathBuf,
}

impl Workspace {
    fn load(&self) -> Result<Config, ConfigError> {
        DefaultConfigLoader::with_global_path(self.global.clone()).load(&self.cwd)
    }
}

fn write(path: &Path, yaml: &str) {
    fs::write(path, yaml).unwrap();
}

#[fixture]
fn workspace() -> Workspace {
    let tmp = TempDir::new().unwrap();
    let global = tmp.path().join("maskfmt.yml");
    let cwd = tmp.path().join("project");
    fs::create_dir_all(&cwd).unwrap();
    write(&global, GLOBAL);
    write(&cwd.join("maskfmt.yml"), LOCAL);
    Workspace {
        _tmp: tmp,
        global,
        cwd,
    }
}

// ========================================
// Loaded config → registry → mask
// ========================================

#[rstest]
#[case::local_overrides_global_entry("ticket", "ab123", Some("ab/123"))]
#[case::global_by_length_short("doc", "12345678900", Some("123.456.789-00"))]
#[case::global_by_length_long("doc", "12.345.678/0001-90", Some("12.345.678/0001-90"))]
#[case::local_shadows_builtin("cep", "01310100", Some("01.310-100"))]
#[case::builtin_still_available("phone-br", "11987654321", Some("(11) 98765-4321"))]
#[case::no_value("ticket", "--", None)]
fn configured_masks_format(
    workspace: Workspace,
    #[case] name: &str,
    #[case] input: &str,
    #[case] expected: Option<&str>,
) {
    let config = workspace.load().unwrap();
    let mask = MaskRegistry::new(&config).resolve(name, None).unwrap();
    assert_eq!(mask.format(input).as_deref(), expected);
}

#[rstest]
#[case("ticket", "ab/123", Some("ab123"))]
#[case("doc", "123.456.789-00", Some("12345678900"))]
fn configured_masks_normalize(
    workspace: Workspace,
    #[case] name: &str,
    #[case] input: &str,
    #[case] expected: Option<&str>,
) {
    let config = workspace.load().unwrap();
    let mask = MaskRegistry::new(&config).resolve(name, None).unwrap();
    assert_eq!(mask.normalize(input).as_deref(), expected);
}

#[rstest]
fn unknown_mask_is_reported(workspace: Workspace) {
    let config = workspace.load().unwrap();
    let err = MaskRegistry::new(&config).resolve("iban", None).unwrap_err();
    assert!(matches!(err, RegistryError::UnknownMask(_)), "got {err:?}");
}

#[rstest]
fn invalid_local_mask_fails_loading(workspace: Workspace) {
    write(
        &workspace.cwd.join("maskfmt.yml"),
        indoc! {r#"
            masks:
              blank:
                pattern: "  "
              half:
                long: "NNN"
        "#},
    );
    let err = workspace.load().unwrap_err();
    match err {
        ConfigError::InFile { path, source } => {
            assert_eq!(path, workspace.cwd.join("maskfmt.yml"));
            match *source {
                ConfigError::Validation(errors) => assert_eq!(errors.len(), 2),
                other => panic!("expected Validation, got {other:?}"),
            }
        }
        other => panic!("expected InFile, got {other:?}"),
    }
}

// ========================================
// Loaded config → CLI run
// ========================================

#[rstest]
fn cli_uses_configured_output_and_masks(workspace: Workspace) {
    let config = workspace.load().unwrap();
    let cli = Cli::try_parse_from(["maskfmt", "format", "--mask", "ticket"]).unwrap();
    let mut out = Vec::new();
    cli::run(cli.command, &config, "ab123\nxyz\n".as_bytes(), &mut out).unwrap();
    assert_eq!(
        String::from_utf8(out).unwrap(),
        indoc! {r#"
            {"input":"ab123","output":"ab/123"}
            {"input":"xyz","output":"xy"}
        "#}
    );
}
