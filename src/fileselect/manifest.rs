use crate::error::{FileSelectError, Result};
use crate::resolver::Resolver;
use crate::validator::ExistenceCheck;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Declared arguments for the `fileselect` binary, read from a JSON file.
/// The file is only ever read.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Manifest {
    /// Suppress interactive prompts
    #[serde(default)]
    pub quiet: bool,

    /// Arguments in positional order
    #[serde(default)]
    pub arguments: Vec<ManifestArgument>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ManifestArgument {
    pub name: String,

    #[serde(default)]
    pub message: String,

    #[serde(default)]
    pub default: String,

    #[serde(default)]
    pub must_exist: bool,

    /// Help text; binds the argument to a flag instead of a positional slot
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flag: Option<String>,
}

impl Manifest {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref()).map_err(FileSelectError::Io)?;
        Self::from_json(&content)
    }

    pub fn from_json(content: &str) -> Result<Self> {
        let manifest: Manifest =
            serde_json::from_str(content).map_err(FileSelectError::Serialization)?;
        manifest.validate()?;
        Ok(manifest)
    }

    fn validate(&self) -> Result<()> {
        if let Some(pos) = self.arguments.iter().position(|a| a.name.trim().is_empty()) {
            return Err(FileSelectError::Manifest(format!(
                "argument {} has an empty name",
                pos + 1
            )));
        }
        Ok(())
    }

    /// Declares every argument, in order, on a new resolver.
    pub fn into_resolver<V: ExistenceCheck>(self, validator: V) -> Result<Resolver<V>> {
        let mut resolver = Resolver::new(validator).with_quiet(self.quiet);
        for arg in self.arguments {
            let handle = resolver.declare(arg.name, arg.message, arg.default, arg.must_exist);
            if let Some(help) = arg.flag {
                resolver.as_flag(handle, help)?;
            }
        }
        Ok(resolver)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validator::memory::InMemoryPaths;

    const SAMPLE: &str = r#"{
        "quiet": true,
        "arguments": [
            { "name": "input", "message": "Enter input file", "default": "in.txt", "must_exist": true },
            { "name": "output", "message": "Output file", "default": "out.txt", "flag": "Where to write" }
        ]
    }"#;

    #[test]
    fn parses_sample() {
        let manifest = Manifest::from_json(SAMPLE).unwrap();
        assert!(manifest.quiet);
        assert_eq!(manifest.arguments.len(), 2);
        assert!(manifest.arguments[0].must_exist);
        assert!(!manifest.arguments[1].must_exist);
        assert_eq!(manifest.arguments[1].flag.as_deref(), Some("Where to write"));
    }

    #[test]
    fn fields_default_when_absent() {
        let manifest = Manifest::from_json(r#"{"arguments":[{"name":"x"}]}"#).unwrap();
        assert!(!manifest.quiet);
        let arg = &manifest.arguments[0];
        assert_eq!(arg.message, "");
        assert_eq!(arg.default, "");
        assert!(!arg.must_exist);
        assert_eq!(arg.flag, None);
    }

    #[test]
    fn rejects_empty_name() {
        let err = Manifest::from_json(r#"{"arguments":[{"name":"a"},{"name":"  "}]}"#).unwrap_err();
        assert!(matches!(err, FileSelectError::Manifest(msg) if msg.contains("argument 2")));
    }

    #[test]
    fn rejects_invalid_json() {
        let err = Manifest::from_json("{not json").unwrap_err();
        assert!(matches!(err, FileSelectError::Serialization(_)));
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Manifest::load(dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, FileSelectError::Io(_)));
    }

    #[test]
    fn load_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fileselect.json");
        fs::write(&path, SAMPLE).unwrap();

        let manifest = Manifest::load(&path).unwrap();
        assert_eq!(manifest.arguments[0].name, "input");
    }

    #[test]
    fn into_resolver_declares_in_order() {
        let resolver = Manifest::from_json(SAMPLE)
            .unwrap()
            .into_resolver(InMemoryPaths::new())
            .unwrap();

        assert!(resolver.is_quiet());
        let specs = resolver.registry().specs();
        assert_eq!(specs.len(), 2);
        assert_eq!(specs[0].name, "input");
        assert_eq!(specs[0].response, "in.txt");
        assert!(specs[1].is_flag());
    }
}
