//! Binary-only layer: clap parsing, logging setup, printing.
//!
//! Everything written here goes to stdout (the resolution JSON) or stderr (logs,
//! prompts, diagnostics). The library never prints to stdout.

mod print;
mod setup;

use clap::Parser;
use fileselect::error::Result;
use fileselect::manifest::Manifest;
use fileselect::prompt::Console;
use fileselect::validator::fs::FsValidator;
use setup::Cli;
use std::collections::HashMap;
use tracing_subscriber::EnvFilter;

/// Exit status when `--strict` finds a missing required path.
pub const EXIT_MISSING: i32 = 2;

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .try_init();
}

/// Runs the binary. Returns the process exit status on success.
pub fn run() -> Result<i32> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let manifest = Manifest::load(&cli.manifest)?;
    tracing::debug!(
        manifest = %cli.manifest.display(),
        arguments = manifest.arguments.len(),
        "loaded manifest"
    );

    let mut resolver = manifest.into_resolver(FsValidator)?;
    if cli.quiet {
        resolver.set_quiet(true);
    }

    if cli.usage {
        let program = std::env::args()
            .next()
            .unwrap_or_else(|| "fileselect".to_string());
        let options = setup::options_text(resolver.registry().specs());
        eprint!("{}", resolver.usage(&program, &options));
        return Ok(0);
    }

    let flag_values: HashMap<String, String> = cli.set.into_iter().collect();
    let mut console = Console::stdio();
    let resolution = resolver.resolve_with_flags(&cli.paths, &flag_values, &mut console)?;

    print::print_resolution(&resolution)?;

    if cli.strict && resolution.has_missing() {
        print::print_missing(&resolution);
        return Ok(EXIT_MISSING);
    }
    Ok(0)
}
