//! Option values, provenance-tagged bags and the insertion-ordered map
//! they share.

use super::schema::OptionKey;
use std::fmt;

/// Runtime value of an option before it is validated against the schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionValue {
    Str(String),
    Bool(bool),
    List(Vec<String>),
}

impl OptionValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            OptionValue::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            OptionValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            OptionValue::List(items) => Some(items),
            _ => None,
        }
    }

    /// Shape name used in type-mismatch messages.
    pub fn shape(&self) -> &'static str {
        match self {
            OptionValue::Str(_) => "string",
            OptionValue::Bool(_) => "boolean",
            OptionValue::List(_) => "array",
        }
    }
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionValue::Str(s) => write!(f, "{s}"),
            OptionValue::Bool(b) => write!(f, "{b}"),
            OptionValue::List(items) => write!(f, "{}", items.join(",")),
        }
    }
}

/// Identity of the source a bag came from.
///
/// Ordering of sources is decided by the pipeline, not encoded here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    BuiltinDefaults,
    UserDefaults,
    LoadedFile { name: String, index: usize },
    CliFlags,
    Interactive,
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::BuiltinDefaults => write!(f, "Default options"),
            Source::UserDefaults => write!(f, "User default options"),
            Source::LoadedFile { name, .. } => write!(f, "{name}"),
            Source::CliFlags => write!(f, "CLI options"),
            Source::Interactive => write!(f, "Prompt answers"),
        }
    }
}

/// Insertion-ordered map from option keys to values.
///
/// The key set is tiny and closed, so a Vec beats a hash map and keeps
/// iteration deterministic for validation and audit output.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OptionMap {
    entries: Vec<(OptionKey, OptionValue)>,
}

impl OptionMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace. Replacement keeps the original position so the
    /// source's declaration order is preserved.
    pub fn insert(&mut self, key: OptionKey, value: OptionValue) {
        if let Some(slot) = self.entries.iter_mut().find(|(k, _)| *k == key) {
            slot.1 = value;
        } else {
            self.entries.push((key, value));
        }
    }

    pub fn get(&self, key: OptionKey) -> Option<&OptionValue> {
        self.entries
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v)
    }

    pub fn contains(&self, key: OptionKey) -> bool {
        self.get(key).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (OptionKey, &OptionValue)> {
        self.entries.iter().map(|(k, v)| (*k, v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Copy of this map with every entry of `other` layered on top.
    pub fn overlaid(&self, other: &OptionMap) -> OptionMap {
        let mut merged = self.clone();
        for (key, value) in other.iter() {
            merged.insert(key, value.clone());
        }
        merged
    }
}

/// A partial option mapping tagged with the source it came from.
///
/// Bags are built up by a single source and treated as immutable afterwards;
/// the merge engine only ever reads them.
#[derive(Debug, Clone, PartialEq)]
pub struct PartialOptionBag {
    source: Source,
    values: OptionMap,
}

impl PartialOptionBag {
    pub fn new(source: Source) -> Self {
        Self {
            source,
            values: OptionMap::new(),
        }
    }

    pub fn source(&self) -> &Source {
        &self.source
    }

    pub fn set(&mut self, key: OptionKey, value: OptionValue) {
        self.values.insert(key, value);
    }

    pub fn get(&self, key: OptionKey) -> Option<&OptionValue> {
        self.values.get(key)
    }

    pub fn defines(&self, key: OptionKey) -> bool {
        self.values.contains(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (OptionKey, &OptionValue)> {
        self.values.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn values(&self) -> &OptionMap {
        &self.values
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_replaces_in_place() {
        let mut map = OptionMap::new();
        map.insert(OptionKey::License, OptionValue::Str("mit".into()));
        map.insert(OptionKey::Typescript, OptionValue::Bool(true));
        map.insert(OptionKey::License, OptionValue::Str("apache".into()));

        let keys: Vec<OptionKey> = map.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec![OptionKey::License, OptionKey::Typescript]);
        assert_eq!(
            map.get(OptionKey::License).and_then(|v| v.as_str()),
            Some("apache")
        );
    }

    #[test]
    fn overlaid_prefers_other() {
        let mut base = OptionMap::new();
        base.insert(OptionKey::License, OptionValue::Str("mit".into()));
        base.insert(OptionKey::Sass, OptionValue::Bool(false));

        let mut top = OptionMap::new();
        top.insert(OptionKey::License, OptionValue::Str("gpl".into()));

        let merged = base.overlaid(&top);
        assert_eq!(
            merged.get(OptionKey::License).and_then(|v| v.as_str()),
            Some("gpl")
        );
        assert_eq!(merged.get(OptionKey::Sass).and_then(|v| v.as_bool()), Some(false));
    }
}
