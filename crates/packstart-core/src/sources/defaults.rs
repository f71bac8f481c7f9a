//! Built-in and user-level default option bags.

use crate::options::bag::{OptionValue, PartialOptionBag, Source};
use crate::options::error::OptionError;
use crate::options::schema::OptionKey;
use crate::sources::file::bag_from_yaml_str;
use std::path::PathBuf;

/// File name of the per-user defaults, resolved against the home directory.
pub const USER_DEFAULTS_FILE: &str = ".packstart.yaml";

/// The compiled-in defaults bag. Complete for every scalar, flag and
/// choice-set key so merging can always fall back to it; `projectDir` and
/// `author` stay interactive.
pub fn builtin_defaults() -> PartialOptionBag {
    let mut bag = PartialOptionBag::new(Source::BuiltinDefaults);
    bag.set(OptionKey::JsFramework, OptionValue::Str("none".into()));
    bag.set(OptionKey::Typescript, OptionValue::Bool(false));
    bag.set(
        OptionKey::CodeFormatters,
        OptionValue::List(vec!["eslint".into()]),
    );
    bag.set(OptionKey::Sass, OptionValue::Bool(false));
    bag.set(OptionKey::CssFramework, OptionValue::Str("none".into()));
    bag.set(OptionKey::Bundler, OptionValue::Str("webpack".into()));
    bag.set(OptionKey::Plugins, OptionValue::List(Vec::new()));
    bag.set(OptionKey::OtherProdDeps, OptionValue::List(Vec::new()));
    bag.set(OptionKey::OtherDevDeps, OptionValue::List(Vec::new()));
    bag.set(OptionKey::License, OptionValue::Str("mit".into()));
    bag
}

/// Path of the user defaults file, if a home directory can be determined.
pub fn user_defaults_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(USER_DEFAULTS_FILE))
}

/// The defaults bag for this run: the user file wholesale-replaces the
/// built-in bag when present.
pub fn default_options() -> Result<PartialOptionBag, OptionError> {
    let Some(path) = user_defaults_path().filter(|p| p.exists()) else {
        return Ok(builtin_defaults());
    };
    let text = std::fs::read_to_string(&path).map_err(|e| OptionError::SourceLoad {
        path: path.clone(),
        reason: e.to_string(),
    })?;
    bag_from_yaml_str(&text, Source::UserDefaults, &path)
}
