//! Loading option bags from YAML files.

use crate::options::bag::{OptionValue, PartialOptionBag, Source};
use crate::options::error::OptionError;
use crate::options::schema::{kind_of, OptionKey};
use std::path::{Path, PathBuf};

/// Load every `--load` file, in the order given. The first failure aborts;
/// later files are not read.
pub fn load_option_files(paths: &[PathBuf]) -> Result<Vec<PartialOptionBag>, OptionError> {
    let mut bags = Vec::with_capacity(paths.len());
    for (index, path) in paths.iter().enumerate() {
        bags.push(load_option_file(path, index)?);
    }
    Ok(bags)
}

fn load_option_file(path: &Path, index: usize) -> Result<PartialOptionBag, OptionError> {
    if !path.exists() {
        return Err(OptionError::SourceLoad {
            path: path.to_path_buf(),
            reason: "file does not exist".into(),
        });
    }

    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("");
    if !matches!(extension, "yaml" | "yml") {
        return Err(OptionError::SourceLoad {
            path: path.to_path_buf(),
            reason: format!("invalid file type .{extension}, expected .yaml"),
        });
    }

    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("option file")
        .to_string();
    let text = std::fs::read_to_string(path).map_err(|e| OptionError::SourceLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    bag_from_yaml_str(&text, Source::LoadedFile { name, index }, path)
}

/// Parse YAML text into a provenance-tagged bag.
///
/// Only the shapes the schema knows are accepted: strings, booleans and
/// sequences of strings. Everything else is a type mismatch so validation
/// can stay purely about schema kinds.
pub fn bag_from_yaml_str(
    text: &str,
    source: Source,
    path: &Path,
) -> Result<PartialOptionBag, OptionError> {
    let value: serde_yaml::Value =
        serde_yaml::from_str(text).map_err(|e| OptionError::SourceLoad {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

    let serde_yaml::Value::Mapping(mapping) = value else {
        return Err(OptionError::SourceLoad {
            path: path.to_path_buf(),
            reason: "expected a mapping of option names to values".into(),
        });
    };

    let mut bag = PartialOptionBag::new(source);
    for (raw_key, raw_value) in mapping {
        let serde_yaml::Value::String(name) = raw_key else {
            return Err(OptionError::SourceLoad {
                path: path.to_path_buf(),
                reason: "option names must be strings".into(),
            });
        };
        let key = OptionKey::parse(&name)?;
        bag.set(key, option_value(key, raw_value)?);
    }
    Ok(bag)
}

fn option_value(key: OptionKey, value: serde_yaml::Value) -> Result<OptionValue, OptionError> {
    match value {
        serde_yaml::Value::String(s) => Ok(OptionValue::Str(s)),
        serde_yaml::Value::Bool(b) => Ok(OptionValue::Bool(b)),
        serde_yaml::Value::Sequence(items) => {
            let mut list = Vec::with_capacity(items.len());
            for item in items {
                match item {
                    serde_yaml::Value::String(s) => list.push(s),
                    other => {
                        return Err(OptionError::TypeMismatch {
                            key,
                            expected: "array",
                            found: yaml_shape(&other),
                        })
                    }
                }
            }
            Ok(OptionValue::List(list))
        }
        other => Err(OptionError::TypeMismatch {
            key,
            expected: kind_of(key).expected_shape(),
            found: yaml_shape(&other),
        }),
    }
}

fn yaml_shape(value: &serde_yaml::Value) -> &'static str {
    match value {
        serde_yaml::Value::Null => "null",
        serde_yaml::Value::Bool(_) => "boolean",
        serde_yaml::Value::Number(_) => "number",
        serde_yaml::Value::String(_) => "string",
        serde_yaml::Value::Sequence(_) => "array",
        serde_yaml::Value::Mapping(_) => "mapping",
        serde_yaml::Value::Tagged(_) => "tagged value",
    }
}
