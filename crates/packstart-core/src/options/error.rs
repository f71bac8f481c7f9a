//! Typed errors raised while loading, validating and resolving options.
//!
//! Every variant is fatal to the resolution pipeline; nothing is retried.

use super::schema::OptionKey;
use super::validate::PackageManager;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OptionError {
    /// A source defines a key the schema does not declare.
    #[error("unknown option {name}")]
    UnknownKey { name: String },

    /// A value's runtime shape does not match its declared kind.
    #[error("expected value of type {expected} for {key}, received {found}")]
    TypeMismatch {
        key: OptionKey,
        expected: &'static str,
        found: &'static str,
    },

    /// A choice-constrained value is outside the declared allowed set.
    #[error("invalid value {value} for {key}\nvalid values: {}", allowed.join("/"))]
    InvalidChoice {
        key: OptionKey,
        value: String,
        allowed: Vec<&'static str>,
    },

    /// Mutually exclusive package-manager selectors are both set.
    #[error("you can't use Yarn and pnpm at the same time")]
    ConflictingFlags,

    /// A selector flag requests a tool that is not on the PATH.
    #[error("{tool} doesn't seem to be installed")]
    ExternalToolMissing { tool: PackageManager },

    /// A `--load` file is missing, has the wrong extension or cannot be
    /// parsed.
    #[error("could not load {}: {reason}", path.display())]
    SourceLoad { path: PathBuf, reason: String },

    /// Merge finalization found a required key unset. With a complete
    /// built-in defaults bag and an interactive pass this cannot happen;
    /// surfaced as an error rather than a panic.
    #[error("option {key} was never resolved")]
    Incomplete { key: OptionKey },

    /// The user aborted an interactive prompt.
    #[error("keyboard exit")]
    Cancelled,
}
