use serde::Serialize;
use std::fmt;

/// Value meaning "explicitly no path": never validated, never prompted for again.
pub const SKIP_SENTINEL: &str = "-";

/// Opaque reference to a declared argument, returned at declaration time.
///
/// Handles index into the resolver that issued them. Using a handle with a
/// different resolver is a caller error and is reported as
/// [`FileSelectError::InvalidHandle`](crate::error::FileSelectError::InvalidHandle)
/// (or `None` from the read accessors).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Handle(pub(crate) usize);

impl Handle {
    pub fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Display for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One declared path request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArgumentSpec {
    pub name: String,
    pub message: String,
    /// Offered when the user gives no input. Becomes [`SKIP_SENTINEL`] once adopted
    /// interactively, so a retry never silently re-offers a rejected default.
    pub default_path: String,
    pub must_exist: bool,
    /// Help text when the argument is bound to a named flag instead of a positional slot.
    pub flag: Option<String>,
    pub response: String,
}

impl ArgumentSpec {
    pub fn new(
        name: impl Into<String>,
        message: impl Into<String>,
        default_path: impl Into<String>,
        must_exist: bool,
    ) -> Self {
        let default_path = default_path.into();
        Self {
            name: name.into(),
            message: message.into(),
            response: default_path.clone(),
            default_path,
            must_exist,
            flag: None,
        }
    }

    pub fn is_flag(&self) -> bool {
        self.flag.is_some()
    }

    pub fn is_skipped(&self) -> bool {
        self.response == SKIP_SENTINEL
    }
}

/// Final state of one argument after resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "value", rename_all = "lowercase")]
pub enum Outcome {
    /// A usable path: it exists, or existence was not required.
    Resolved(String),
    /// The skip sentinel was given.
    Skipped,
    /// Existence was required but the path is absent. Only produced in quiet mode,
    /// where the value is kept instead of asking again.
    Missing(String),
}

impl Outcome {
    /// The path carried by the outcome, if any. `Missing` still yields its (unusable) path.
    pub fn path(&self) -> Option<&str> {
        match self {
            Outcome::Resolved(p) | Outcome::Missing(p) => Some(p),
            Outcome::Skipped => None,
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Outcome::Missing(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_spec_starts_at_default() {
        let spec = ArgumentSpec::new("file", "Enter input file", "in.txt", true);
        assert_eq!(spec.response, "in.txt");
        assert_eq!(spec.default_path, "in.txt");
        assert!(!spec.is_flag());
        assert!(!spec.is_skipped());
    }

    #[test]
    fn outcome_serializes_with_status_tag() {
        let json = serde_json::to_string(&Outcome::Resolved("a.txt".into())).unwrap();
        assert_eq!(json, r#"{"status":"resolved","value":"a.txt"}"#);

        let json = serde_json::to_string(&Outcome::Skipped).unwrap();
        assert_eq!(json, r#"{"status":"skipped"}"#);
    }

    #[test]
    fn missing_outcome_keeps_its_path() {
        let outcome = Outcome::Missing("gone.txt".into());
        assert_eq!(outcome.path(), Some("gone.txt"));
        assert!(outcome.is_missing());
        assert_eq!(Outcome::Skipped.path(), None);
    }
}
