use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use maskfmt::cli::{self, Cli};
use maskfmt::config::{ConfigLoader, DefaultConfigLoader};

/// Initialize tracing for debug output.
///
/// Enable with `RUST_LOG=maskfmt=debug` or `RUST_LOG=maskfmt=trace`.
fn init_tracing() {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    // Only initialize if RUST_LOG is set
    if std::env::var("RUST_LOG").is_ok() {
        let filter = EnvFilter::from_default_env();
        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_level(true),
            )
            .with(filter)
            .init();
    }
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    let loader = DefaultConfigLoader::new();
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let config = match loader.load(&cwd) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("maskfmt: config error: {e}");
            return ExitCode::from(2);
        }
    };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match cli::run(cli.command, &config, std::io::stdin().lock(), &mut out) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("maskfmt: {e}");
            ExitCode::from(2)
        }
    }
}
