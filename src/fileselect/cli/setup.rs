use clap::builder::StyledStr;
use clap::{Command, CommandFactory, Parser};
use fileselect::model::ArgumentSpec;
use std::path::PathBuf;

/// Returns the version string, including git hash and commit date for non-release builds.
/// Format: "0.1.0" for releases, "0.1.0@abc1234 2024-01-15 14:30" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "fileselect", bin_name = "fileselect", version = get_version())]
#[command(
    about = "Resolve file path arguments from positionals, defaults, or prompts",
    long_about = None
)]
pub struct Cli {
    /// JSON manifest declaring the path arguments, in positional order
    #[arg(short, long, value_name = "FILE")]
    pub manifest: PathBuf,

    /// Never prompt; unresolved arguments keep their defaults
    #[arg(short, long)]
    pub quiet: bool,

    /// Exit with status 2 if a required path is missing
    #[arg(long)]
    pub strict: bool,

    /// Value for a flag-bound argument (repeatable)
    #[arg(long = "set", value_name = "NAME=PATH", value_parser = parse_key_val)]
    pub set: Vec<(String, String)>,

    /// Print usage for the manifest's arguments and exit
    #[arg(long)]
    pub usage: bool,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Path values, one per positional argument ("-" skips one)
    #[arg(value_name = "PATH")]
    pub paths: Vec<String>,
}

fn parse_key_val(s: &str) -> Result<(String, String), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=PATH, got '{}'", s))?;
    if key.is_empty() {
        return Err(format!("missing argument name in '{}'", s));
    }
    Ok((key.to_string(), value.to_string()))
}

fn describe(help: Option<&StyledStr>) -> String {
    help.map(|h| h.to_string()).unwrap_or_default()
}

/// Option list in the two-line layout used by the usage text.
/// Flag-bound arguments are listed as `--set` entries.
pub fn options_text(specs: &[ArgumentSpec]) -> String {
    let mut cmd: Command = Cli::command();
    cmd.build();

    let mut out = String::new();
    for arg in cmd.get_arguments().filter(|a| !a.is_positional()) {
        let mut head = match (arg.get_short(), arg.get_long()) {
            (Some(s), Some(l)) => format!("-{}, --{}", s, l),
            (Some(s), None) => format!("-{}", s),
            (None, Some(l)) => format!("--{}", l),
            (None, None) => continue,
        };
        if arg.get_action().takes_values() {
            if let Some(names) = arg.get_value_names() {
                for name in names {
                    head.push_str(&format!(" <{}>", name));
                }
            }
        }
        out.push_str(&format!("  {}\n        {}\n", head, describe(arg.get_help())));
    }

    for spec in specs {
        if let Some(help) = &spec.flag {
            out.push_str(&format!(
                "  --set {}=<PATH>\n        {} (default \"{}\")\n",
                spec.name, help, spec.default_path
            ));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_positionals_and_flags() {
        let cli = Cli::try_parse_from([
            "fileselect",
            "-m",
            "args.json",
            "--quiet",
            "--set",
            "output=out.bin",
            "in.bin",
            "-",
        ])
        .unwrap();

        assert_eq!(cli.manifest, PathBuf::from("args.json"));
        assert!(cli.quiet);
        assert_eq!(cli.set, [("output".to_string(), "out.bin".to_string())]);
        assert_eq!(cli.paths, ["in.bin", "-"]);
    }

    #[test]
    fn rejects_malformed_set() {
        assert!(Cli::try_parse_from(["fileselect", "-m", "a.json", "--set", "novalue"]).is_err());
        assert!(Cli::try_parse_from(["fileselect", "-m", "a.json", "--set", "=x"]).is_err());
    }

    #[test]
    fn set_value_may_be_empty() {
        assert_eq!(parse_key_val("out="), Ok(("out".to_string(), String::new())));
    }

    #[test]
    fn options_text_lists_flags_and_bound_arguments() {
        let mut spec = ArgumentSpec::new("output", "Output file", "out.txt", false);
        spec.flag = Some("Where to write".into());

        let text = options_text(&[spec]);
        assert!(text.contains("  -m, --manifest <FILE>\n"));
        assert!(text.contains("  --strict\n        Exit with status 2"));
        assert!(text.contains("  --set output=<PATH>\n        Where to write (default \"out.txt\")\n"));
        assert!(!text.contains("<PATH>\n        Path values"));
    }
}
