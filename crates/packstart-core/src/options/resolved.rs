//! The terminal, fully-resolved option set handed to downstream generators.

use super::bag::{OptionMap, OptionValue, PartialOptionBag};
use super::error::OptionError;
use super::merge::merge;
use super::schema::OptionKey;

/// Canonical framework value once the "no framework" sentinel has been
/// rewritten.
pub const BLANK_FRAMEWORK: &str = "blank";

/// Every option with precedence applied, validated and normalized.
///
/// Produced once per run, consumed read-only by the project generators.
/// Nullable choices (`cssFramework`, `bundler`, `license`) resolve their
/// "none" choice to `None` so consumers treat absence uniformly;
/// non-interactive flags that were never supplied read as `false`.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedOptions {
    pub project_dir: String,
    pub js_framework: String,
    pub typescript: bool,
    pub code_formatters: Vec<String>,
    pub sass: bool,
    pub css_framework: Option<String>,
    pub bundler: Option<String>,
    pub plugins: Vec<String>,
    pub other_prod_deps: Vec<String>,
    pub other_dev_deps: Vec<String>,
    pub license: Option<String>,
    pub author: Option<String>,
    pub use_yarn: bool,
    pub use_pnpm: bool,
    pub skip_tailwind_init: bool,
    pub skip_eslint_init: bool,
    pub skip_git_init: bool,
}

impl ResolvedOptions {
    /// Merge an ordered list of bags and normalize the result.
    pub fn from_bags(bags: &[PartialOptionBag]) -> Result<Self, OptionError> {
        Self::from_map(merge(bags))
    }

    fn from_map(map: OptionMap) -> Result<Self, OptionError> {
        let js_framework = {
            let raw = require_str(&map, OptionKey::JsFramework)?;
            if raw == "none" {
                BLANK_FRAMEWORK.to_string()
            } else {
                raw
            }
        };

        Ok(Self {
            project_dir: require_str(&map, OptionKey::ProjectDir)?,
            js_framework,
            typescript: require_bool(&map, OptionKey::Typescript)?,
            code_formatters: require_list(&map, OptionKey::CodeFormatters)?,
            sass: require_bool(&map, OptionKey::Sass)?,
            css_framework: nullable_choice(&map, OptionKey::CssFramework)?,
            bundler: nullable_choice(&map, OptionKey::Bundler)?,
            plugins: require_list(&map, OptionKey::Plugins)?,
            other_prod_deps: list_or_empty(&map, OptionKey::OtherProdDeps),
            other_dev_deps: list_or_empty(&map, OptionKey::OtherDevDeps),
            license: nullable_choice(&map, OptionKey::License)?,
            author: optional_str(&map, OptionKey::Author),
            use_yarn: optional_flag(&map, OptionKey::UseYarn),
            use_pnpm: optional_flag(&map, OptionKey::UsePnpm),
            skip_tailwind_init: optional_flag(&map, OptionKey::SkipTailwindInit),
            skip_eslint_init: optional_flag(&map, OptionKey::SkipEslintInit),
            skip_git_init: optional_flag(&map, OptionKey::SkipGitInit),
        })
    }

    /// Template directory name for the resolved framework/typecheck pair.
    pub fn template_name(&self) -> String {
        if self.typescript {
            format!("{}-typescript", self.js_framework)
        } else {
            self.js_framework.clone()
        }
    }

    pub fn has_formatter(&self, name: &str) -> bool {
        self.code_formatters.iter().any(|f| f == name)
    }

    pub fn has_plugin(&self, name: &str) -> bool {
        self.plugins.iter().any(|p| p == name)
    }
}

fn require_str(map: &OptionMap, key: OptionKey) -> Result<String, OptionError> {
    map.get(key)
        .and_then(|v| v.as_str())
        .map(str::to_string)
        .ok_or(OptionError::Incomplete { key })
}

fn require_bool(map: &OptionMap, key: OptionKey) -> Result<bool, OptionError> {
    map.get(key)
        .and_then(OptionValue::as_bool)
        .ok_or(OptionError::Incomplete { key })
}

fn require_list(map: &OptionMap, key: OptionKey) -> Result<Vec<String>, OptionError> {
    map.get(key)
        .and_then(|v| v.as_list())
        .map(<[String]>::to_vec)
        .ok_or(OptionError::Incomplete { key })
}

/// Additive lists no source ever touched resolve to empty.
fn list_or_empty(map: &OptionMap, key: OptionKey) -> Vec<String> {
    map.get(key)
        .and_then(|v| v.as_list())
        .map(<[String]>::to_vec)
        .unwrap_or_default()
}

fn nullable_choice(map: &OptionMap, key: OptionKey) -> Result<Option<String>, OptionError> {
    let value = require_str(map, key)?;
    Ok(if value == "none" { None } else { Some(value) })
}

fn optional_str(map: &OptionMap, key: OptionKey) -> Option<String> {
    map.get(key).and_then(|v| v.as_str()).map(str::to_string)
}

fn optional_flag(map: &OptionMap, key: OptionKey) -> bool {
    map.get(key).and_then(OptionValue::as_bool).unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::bag::Source;
    use crate::sources::defaults::builtin_defaults;

    fn base_bags() -> Vec<PartialOptionBag> {
        let mut interactive = PartialOptionBag::new(Source::Interactive);
        interactive.set(OptionKey::ProjectDir, OptionValue::Str("new-app".into()));
        vec![builtin_defaults(), interactive]
    }

    #[test]
    fn no_framework_sentinel_becomes_blank() {
        let mut bags = base_bags();
        let mut cli = PartialOptionBag::new(Source::CliFlags);
        cli.set(OptionKey::JsFramework, OptionValue::Str("none".into()));
        bags.push(cli);

        let resolved = ResolvedOptions::from_bags(&bags).unwrap();
        assert_eq!(resolved.js_framework, BLANK_FRAMEWORK);
        assert_eq!(resolved.template_name(), "blank");
    }

    #[test]
    fn nullable_choices_become_none() {
        let mut bags = base_bags();
        let mut cli = PartialOptionBag::new(Source::CliFlags);
        cli.set(OptionKey::Bundler, OptionValue::Str("none".into()));
        cli.set(OptionKey::License, OptionValue::Str("none".into()));
        bags.push(cli);

        let resolved = ResolvedOptions::from_bags(&bags).unwrap();
        assert_eq!(resolved.bundler, None);
        assert_eq!(resolved.license, None);
        // Defaults leave cssFramework at "none" already
        assert_eq!(resolved.css_framework, None);
    }

    #[test]
    fn unsupplied_non_interactive_flags_read_false() {
        let resolved = ResolvedOptions::from_bags(&base_bags()).unwrap();
        assert!(!resolved.use_yarn);
        assert!(!resolved.use_pnpm);
        assert!(!resolved.skip_git_init);
        assert_eq!(resolved.author, None);
    }

    #[test]
    fn untouched_additive_lists_resolve_empty() {
        let mut bag = PartialOptionBag::new(Source::CliFlags);
        bag.set(OptionKey::ProjectDir, OptionValue::Str("new-app".into()));
        bag.set(OptionKey::JsFramework, OptionValue::Str("react".into()));
        bag.set(OptionKey::Typescript, OptionValue::Bool(false));
        bag.set(
            OptionKey::CodeFormatters,
            OptionValue::List(vec!["eslint".into()]),
        );
        bag.set(OptionKey::Sass, OptionValue::Bool(false));
        bag.set(OptionKey::CssFramework, OptionValue::Str("none".into()));
        bag.set(OptionKey::Bundler, OptionValue::Str("webpack".into()));
        bag.set(OptionKey::Plugins, OptionValue::List(Vec::new()));
        bag.set(OptionKey::License, OptionValue::Str("none".into()));

        let resolved = ResolvedOptions::from_bags(&[bag]).unwrap();
        assert!(resolved.other_prod_deps.is_empty());
        assert!(resolved.other_dev_deps.is_empty());
    }

    #[test]
    fn missing_required_key_is_reported() {
        // No project directory anywhere in the sources.
        let err = ResolvedOptions::from_bags(&[builtin_defaults()]).unwrap_err();
        assert!(matches!(
            err,
            OptionError::Incomplete { key: OptionKey::ProjectDir }
        ));
    }

    #[test]
    fn typescript_template_name() {
        let mut bags = base_bags();
        let mut cli = PartialOptionBag::new(Source::CliFlags);
        cli.set(OptionKey::JsFramework, OptionValue::Str("react".into()));
        cli.set(OptionKey::Typescript, OptionValue::Bool(true));
        bags.push(cli);

        let resolved = ResolvedOptions::from_bags(&bags).unwrap();
        assert_eq!(resolved.template_name(), "react-typescript");
    }
}
