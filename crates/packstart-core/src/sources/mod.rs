//! The partial option sources fed into the resolution pipeline: built-in
//! and user defaults, loaded option files, and CLI flags.

pub mod cli;
pub mod defaults;
pub mod file;

pub use cli::{cli_bag, CliArgs};
pub use defaults::{builtin_defaults, default_options};
pub use file::load_option_files;
