//! # Fileselect Architecture
//!
//! Fileselect resolves a small, ordered set of **file path arguments** for a command-line
//! tool. Each requested path may come from a positional argument, a registered default, or
//! an interactive prompt, and may be required to exist on the filesystem.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses flags with clap, loads the manifest               │
//! │  - Prints the resolution, owns exit codes                   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Resolver (resolver.rs)                                     │
//! │  - Owns the registry, quiet setting and validator           │
//! │  - Runs the per-argument state machine                      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Leaves                                                     │
//! │  - registry.rs: declared ArgumentSpecs, flag alignment      │
//! │  - prompt.rs: line prompt on an injected Console            │
//! │  - validator/: existence checks (fs, in-memory)             │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Resolution in Short
//!
//! For every declared argument, in declaration order:
//!
//! 1. A non-empty positional value wins and is taken verbatim.
//! 2. Otherwise the user is prompted (unless quiet), and an empty answer adopts the default.
//! 3. The skip sentinel `-` ends the argument without any validation.
//! 4. Arguments that must exist are checked; a failure is reported on the diagnostic
//!    stream and, in interactive mode, the same argument is asked for again.
//!
//! ```no_run
//! use fileselect::resolver::Resolver;
//! use fileselect::validator::fs::FsValidator;
//!
//! let mut resolver = Resolver::new(FsValidator);
//! let input = resolver.open("input", "in.txt", "Enter input file");
//! let output = resolver.create("output", "out.txt", "Enter output file");
//!
//! let args: Vec<String> = std::env::args().skip(1).collect();
//! let resolution = resolver.resolve_stdio(&args);
//! println!("{:?} -> {:?}", resolution.value(input), resolution.value(output));
//! ```
//!
//! ## No Global State
//!
//! Everything lives on the [`resolver::Resolver`]: the declared arguments, the quiet flag,
//! the usage formatter. Two resolvers in one process never see each other.
//!
//! ## Module Overview
//!
//! - [`resolver`]: The resolution engine and its result types
//! - [`registry`]: Declared arguments and flag/positional alignment
//! - [`prompt`]: Interactive prompt and quote handling
//! - [`validator`]: Existence checks
//! - [`usage`]: Usage text formatting
//! - [`manifest`]: JSON manifest describing arguments for the binary
//! - [`model`]: Core data types (`ArgumentSpec`, `Handle`, `Outcome`)
//! - [`error`]: Error types
//! - `cli`: Argument parsing and printing for the binary (not part of the lib API)

pub mod error;
pub mod manifest;
pub mod model;
pub mod prompt;
pub mod registry;
pub mod resolver;
pub mod usage;
pub mod validator;
