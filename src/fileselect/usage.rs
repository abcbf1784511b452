//! Usage text for programs that take declared path arguments.
//!
//! The flag facility (clap, in the binary) renders its own option list; this module
//! wraps it with the positional path arguments, their messages and defaults.
//! Flag-bound arguments are left out, they already appear in the option list.

use crate::model::ArgumentSpec;

/// Everything a usage formatter gets to work with.
#[derive(Debug, Clone, Copy)]
pub struct UsageContext<'a> {
    /// Program name as invoked (may contain a directory).
    pub program: &'a str,
    /// Option list rendered by the flag facility.
    pub options: &'a str,
    pub specs: &'a [ArgumentSpec],
}

/// Replaceable usage formatter.
pub type UsageFormatter = Box<dyn Fn(&UsageContext<'_>) -> String>;

/// Last path component of `program`, accepting both `/` and `\` separators.
pub fn base_name(program: &str) -> &str {
    program
        .rsplit(['/', '\\'])
        .find(|part| !part.is_empty())
        .unwrap_or(program)
}

pub fn default_usage(ctx: &UsageContext<'_>) -> String {
    let positional: Vec<&ArgumentSpec> = ctx.specs.iter().filter(|s| !s.is_flag()).collect();

    let mut out = String::new();
    out.push_str(&format!("Usage of {}:\n", ctx.program));
    out.push_str(&format!("  {} [options]", base_name(ctx.program)));
    for spec in &positional {
        out.push_str(&format!(" [{}]", spec.name));
    }
    out.push_str("\n\n");

    out.push_str(ctx.options);
    if !ctx.options.is_empty() && !ctx.options.ends_with('\n') {
        out.push('\n');
    }

    for spec in &positional {
        out.push_str(&format!(
            "  [{}]\n        {} (default \"{}\")\n",
            spec.name, spec.message, spec.default_path
        ));
    }
    out
}
