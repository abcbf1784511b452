//! # Resolution Engine
//!
//! [`Resolver`] owns the declared arguments, the quiet setting, the existence check and
//! the usage formatter. Callers declare arguments, then call [`Resolver::resolve`] once
//! with the raw positional list and read the returned [`Resolution`].
//!
//! ## Per-argument State Machine
//!
//! ```text
//!            ┌──────────────┐  "-"   ┌─────────┐
//!   start ──▶│  AwaitInput  │───────▶│ Skipped │
//!            └──────────────┘        └─────────┘
//!               │        ▲
//!               ▼        │ missing, interactive
//!            ┌──────────────┐  ok    ┌──────────┐
//!            │  Validating  │───────▶│ Resolved │
//!            └──────────────┘        └──────────┘
//!               │ missing, quiet
//!               ▼
//!            ┌──────────┐
//!            │ Rejected │
//!            └──────────┘
//! ```
//!
//! `AwaitInput` takes a non-empty positional value verbatim, otherwise prompts (or, in
//! quiet mode, keeps the current response). A failed existence check clears the
//! positional slot so the retry prompts instead of re-reading it.
//!
//! The interactive retry is deliberately unbounded: an argument is only left with a
//! path that exists or with the skip sentinel. Quiet mode never loops; it reports the
//! missing path once and records it as [`Outcome::Missing`].

use crate::error::{FileSelectError, Result};
use crate::model::{ArgumentSpec, Handle, Outcome};
use crate::prompt::{self, Console};
use crate::registry::Registry;
use crate::usage::{default_usage, UsageContext, UsageFormatter};
use crate::validator::ExistenceCheck;
use std::collections::HashMap;
use std::io::{BufRead, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    AwaitInput,
    Validating,
    Resolved,
    Skipped,
    Rejected,
}

pub struct Resolver<V: ExistenceCheck> {
    registry: Registry,
    validator: V,
    quiet: bool,
    usage: UsageFormatter,
}

impl<V: ExistenceCheck> Resolver<V> {
    pub fn new(validator: V) -> Self {
        Self {
            registry: Registry::new(),
            validator,
            quiet: false,
            usage: Box::new(default_usage),
        }
    }

    pub fn with_quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    pub fn set_quiet(&mut self, quiet: bool) {
        self.quiet = quiet;
    }

    pub fn is_quiet(&self) -> bool {
        self.quiet
    }

    /// Replaces the usage formatter.
    pub fn set_usage<F>(&mut self, formatter: F)
    where
        F: Fn(&UsageContext<'_>) -> String + 'static,
    {
        self.usage = Box::new(formatter);
    }

    pub fn usage(&self, program: &str, options: &str) -> String {
        (self.usage)(&UsageContext {
            program,
            options,
            specs: self.registry.specs(),
        })
    }

    pub fn declare(
        &mut self,
        name: impl Into<String>,
        message: impl Into<String>,
        default_path: impl Into<String>,
        must_exist: bool,
    ) -> Handle {
        self.registry.declare(name, message, default_path, must_exist)
    }

    pub fn open(
        &mut self,
        name: impl Into<String>,
        default_path: impl Into<String>,
        message: impl Into<String>,
    ) -> Handle {
        self.registry.open(name, default_path, message)
    }

    pub fn create(
        &mut self,
        name: impl Into<String>,
        default_path: impl Into<String>,
        message: impl Into<String>,
    ) -> Handle {
        self.registry.create(name, default_path, message)
    }

    pub fn as_flag(&mut self, handle: Handle, help: impl Into<String>) -> Result<Handle> {
        self.registry.as_flag(handle, help)
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn validator(&self) -> &V {
        &self.validator
    }

    /// Current response of a declared argument.
    pub fn value(&self, handle: Handle) -> Option<&str> {
        self.registry.value(handle)
    }

    /// Aligns positionals and flag values, then resolves.
    pub fn resolve_with_flags<S, R, W>(
        &mut self,
        positional: &[S],
        flag_values: &HashMap<String, String>,
        console: &mut Console<R, W>,
    ) -> Result<Resolution>
    where
        S: AsRef<str>,
        R: BufRead,
        W: Write,
    {
        let raw = self.registry.align_args(positional, flag_values)?;
        Ok(self.resolve(&raw, console))
    }

    /// Resolves against standard input and standard error.
    pub fn resolve_stdio<S: AsRef<str>>(&mut self, raw_args: &[S]) -> Resolution {
        let mut console = Console::stdio();
        self.resolve(raw_args, &mut console)
    }

    /// Resolves every declared argument in declaration order.
    ///
    /// `raw_args[i]` is the positional value for the `i`-th argument; missing or empty
    /// entries fall back to prompting (or the current value in quiet mode).
    pub fn resolve<S, R, W>(&mut self, raw_args: &[S], console: &mut Console<R, W>) -> Resolution
    where
        S: AsRef<str>,
        R: BufRead,
        W: Write,
    {
        let mut slots: Vec<String> = raw_args.iter().map(|s| s.as_ref().to_string()).collect();
        if slots.len() > self.registry.len() {
            tracing::debug!(
                surplus = slots.len() - self.registry.len(),
                "ignoring positional arguments beyond the declared ones"
            );
        }

        let mut outcomes = Vec::with_capacity(self.registry.len());
        for index in 0..self.registry.len() {
            let slot = slots.get_mut(index);
            let Some(spec) = self.registry.get_mut(index) else {
                break;
            };
            let outcome = resolve_one(spec, slot, self.quiet, &self.validator, console);
            outcomes.push((spec.name.clone(), outcome));
        }
        Resolution { outcomes }
    }
}

fn resolve_one<V, R, W>(
    spec: &mut ArgumentSpec,
    mut slot: Option<&mut String>,
    quiet: bool,
    validator: &V,
    console: &mut Console<R, W>,
) -> Outcome
where
    V: ExistenceCheck,
    R: BufRead,
    W: Write,
{
    let mut state = State::AwaitInput;
    loop {
        tracing::debug!(name = %spec.name, ?state, response = %spec.response, "resolving");
        state = match state {
            State::AwaitInput => {
                match slot.as_deref() {
                    Some(raw) if !raw.is_empty() => spec.response = raw.clone(),
                    _ if !quiet => prompt::prompt(spec, console),
                    _ => {}
                }
                if spec.is_skipped() {
                    State::Skipped
                } else {
                    State::Validating
                }
            }
            State::Validating => {
                if !spec.must_exist || validator.exists(&spec.response) {
                    State::Resolved
                } else {
                    console.report(&format!(
                        "File for {} must exist, but '{}' doesn't",
                        spec.name, spec.response
                    ));
                    if let Some(raw) = slot.as_deref_mut() {
                        raw.clear();
                    }
                    if quiet {
                        State::Rejected
                    } else {
                        State::AwaitInput
                    }
                }
            }
            State::Resolved => return Outcome::Resolved(spec.response.clone()),
            State::Skipped => return Outcome::Skipped,
            State::Rejected => return Outcome::Missing(spec.response.clone()),
        };
    }
}

/// Per-argument results of one resolution, in declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    outcomes: Vec<(String, Outcome)>,
}

impl Resolution {
    pub fn get(&self, handle: Handle) -> Option<&Outcome> {
        self.outcomes.get(handle.0).map(|(_, outcome)| outcome)
    }

    /// The resolved path for `handle`; `None` when skipped.
    pub fn value(&self, handle: Handle) -> Option<&str> {
        self.get(handle).and_then(Outcome::path)
    }

    /// Outcome of the first argument declared under `name`.
    pub fn by_name(&self, name: &str) -> Option<&Outcome> {
        self.outcomes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, outcome)| outcome)
    }

    pub fn require(&self, name: &str) -> Result<&Outcome> {
        self.by_name(name)
            .ok_or_else(|| FileSelectError::UnknownArgument(name.to_string()))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Outcome)> {
        self.outcomes.iter().map(|(n, o)| (n.as_str(), o))
    }

    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    pub fn has_missing(&self) -> bool {
        self.outcomes.iter().any(|(_, o)| o.is_missing())
    }
}
