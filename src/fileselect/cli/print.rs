use colored::Colorize;
use fileselect::error::Result;
use fileselect::model::Outcome;
use fileselect::resolver::Resolution;
use serde::Serialize;

#[derive(Serialize)]
struct Entry<'a> {
    name: &'a str,
    #[serde(flatten)]
    outcome: &'a Outcome,
}

pub(super) fn resolution_json(resolution: &Resolution) -> Result<String> {
    let entries: Vec<Entry<'_>> = resolution
        .iter()
        .map(|(name, outcome)| Entry { name, outcome })
        .collect();
    Ok(serde_json::to_string_pretty(&entries)?)
}

pub(super) fn print_resolution(resolution: &Resolution) -> Result<()> {
    println!("{}", resolution_json(resolution)?);
    Ok(())
}

pub(super) fn print_missing(resolution: &Resolution) {
    for (name, outcome) in resolution.iter() {
        if let Outcome::Missing(path) = outcome {
            eprintln!("{} {} ({})", "missing:".red(), name.bold(), path);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fileselect::prompt::Console;
    use fileselect::resolver::Resolver;
    use fileselect::validator::memory::InMemoryPaths;
    use std::io::Cursor;

    #[test]
    fn json_lists_each_argument_in_order() {
        let mut resolver = Resolver::new(InMemoryPaths::new()).with_quiet(true);
        resolver.create("output", "out.txt", "Output");
        resolver.open("input", "in.txt", "Input");
        resolver.open("extra", "x", "Extra");
        let mut console = Console::new(Cursor::new(Vec::new()), Vec::new());
        let resolution = resolver.resolve(&["", "", "-"], &mut console);

        let value: serde_json::Value =
            serde_json::from_str(&resolution_json(&resolution).unwrap()).unwrap();
        assert_eq!(
            value,
            serde_json::json!([
                { "name": "output", "status": "resolved", "value": "out.txt" },
                { "name": "input", "status": "missing", "value": "in.txt" },
                { "name": "extra", "status": "skipped" }
            ])
        );
    }
}
