//! # Argument Registry
//!
//! Ordered, append-only list of declared path requests. Insertion order is the
//! expected positional order: index `i` in the registry always pairs with index `i`
//! of the raw argument list handed to the resolver.
//!
//! Declaration happens before resolution and resolution only mutates specs in place,
//! so the registry never reorders or grows once resolution starts.
//!
//! ## Flag-bound Arguments
//!
//! An argument can be bound to a named flag with [`Registry::as_flag`]. It keeps its
//! slot in the ordering, but its raw value comes from the flag instead of the
//! positional list. [`Registry::align_args`] builds the aligned raw list from both.

use crate::error::{FileSelectError, Result};
use crate::model::{ArgumentSpec, Handle};
use std::collections::HashMap;

#[derive(Debug, Default)]
pub struct Registry {
    specs: Vec<ArgumentSpec>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a new spec whose response starts at `default_path`.
    ///
    /// Names are not checked for uniqueness; duplicates resolve independently.
    pub fn declare(
        &mut self,
        name: impl Into<String>,
        message: impl Into<String>,
        default_path: impl Into<String>,
        must_exist: bool,
    ) -> Handle {
        self.specs
            .push(ArgumentSpec::new(name, message, default_path, must_exist));
        Handle(self.specs.len() - 1)
    }

    /// Declares a path that must exist (unless `-` is given).
    pub fn open(
        &mut self,
        name: impl Into<String>,
        default_path: impl Into<String>,
        message: impl Into<String>,
    ) -> Handle {
        self.declare(name, message, default_path, true)
    }

    /// Declares a path that does not have to exist.
    pub fn create(
        &mut self,
        name: impl Into<String>,
        default_path: impl Into<String>,
        message: impl Into<String>,
    ) -> Handle {
        self.declare(name, message, default_path, false)
    }

    /// Binds a declared argument to a flag named after it.
    pub fn as_flag(&mut self, handle: Handle, help: impl Into<String>) -> Result<Handle> {
        let spec = self
            .specs
            .get_mut(handle.0)
            .ok_or(FileSelectError::InvalidHandle(handle.0))?;
        spec.flag = Some(help.into());
        Ok(handle)
    }

    pub fn get(&self, handle: Handle) -> Option<&ArgumentSpec> {
        self.specs.get(handle.0)
    }

    pub(crate) fn get_mut(&mut self, index: usize) -> Option<&mut ArgumentSpec> {
        self.specs.get_mut(index)
    }

    pub fn value(&self, handle: Handle) -> Option<&str> {
        self.get(handle).map(|spec| spec.response.as_str())
    }

    pub fn find(&self, name: &str) -> Option<Handle> {
        self.specs.iter().position(|s| s.name == name).map(Handle)
    }

    pub fn specs(&self) -> &[ArgumentSpec] {
        &self.specs
    }

    pub fn len(&self) -> usize {
        self.specs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }

    /// Builds the raw argument list aligned index-for-index with the registry.
    ///
    /// Flag-bound specs take their flag value (empty when unset) at their own index and
    /// shift later positionals right. Missing positionals are padded with empty strings.
    /// Positionals beyond the registry are kept at the end; the resolver ignores them.
    pub fn align_args<S: AsRef<str>>(
        &self,
        positional: &[S],
        flag_values: &HashMap<String, String>,
    ) -> Result<Vec<String>> {
        if let Some(unknown) = flag_values
            .keys()
            .find(|name| !self.specs.iter().any(|s| s.is_flag() && &s.name == *name))
        {
            return Err(FileSelectError::UnknownArgument(unknown.clone()));
        }

        let mut args: Vec<String> = positional.iter().map(|s| s.as_ref().to_string()).collect();
        for (i, spec) in self.specs.iter().enumerate() {
            if spec.is_flag() {
                let value = flag_values.get(&spec.name).cloned().unwrap_or_default();
                args.insert(i.min(args.len()), value);
                continue;
            }
            if args.len() <= i {
                args.push(String::new());
            }
        }
        Ok(args)
    }
}
