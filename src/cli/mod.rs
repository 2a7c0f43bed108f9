//! # CLI Module
//!
//! Command-line front end for the annotation compiler, shipped as the `annogen`
//! binary.
//!
//! ## Commands
//!
//! ### `render`
//!
//! Compile plugin properties and print the resulting imports and annotations:
//!
//! ```bash
//! annogen render --config plugin.toml
//! annogen render --set builder=true --set builder.toBuilder=true
//! ```
//!
//! ### `annotate`
//!
//! Print the header a model class (and optionally its mapper) would get:
//!
//! ```bash
//! annogen annotate --config plugin.toml --class User --mapper
//! ```
//!
//! ### `lint`
//!
//! Report keys the compiler would silently ignore:
//!
//! ```bash
//! annogen lint --config plugin.toml --fail-on-error
//! ```
//!
//! ### `features`
//!
//! List the feature catalog.
//!
//! Properties come from `--config` (TOML, YAML or JSON) followed by any
//! `--set key=value` pairs, in command-line order.

mod commands;


pub use commands::{execute, run_cli, Cli, Commands, PropertySource};
