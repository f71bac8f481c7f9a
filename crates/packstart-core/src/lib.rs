//! packstart core - layered option resolution and project scaffolding
//!
//! This library backs the `packstart` CLI. It is organized into layers:
//!
//! - **Options engine** - schema registry, per-source validation, precedence
//!   merge with additive-list accumulation, and interactive completion of
//!   missing keys ([`options`], [`sources`])
//! - **Project generation** - consumers of the resolved option set: template
//!   copying, package.json and bundler-config generation, tool init
//!   ([`project`])
//! - **CLI/TUI interface** - cliclack-based prompt backend (feature-gated)
//!   and the end-to-end run ([`tui`])
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based prompt backend

pub mod options;
pub mod project;
pub mod sources;
pub mod style;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use options::{
    OptionError, OptionKey, OptionKind, OptionValue, PartialOptionBag, Prompter, ResolvedOptions,
    Source,
};
pub use sources::{cli_bag, CliArgs};

#[cfg(feature = "tui")]
pub use tui::run;
