//! Static option schema: every configurable key, its value kind, allowed
//! choices and prompt label.
//!
//! The schema is declared once and never mutated. Declaration order in
//! [`SCHEMA`] is also the interactive prompt order.

use super::bag::OptionMap;
use super::error::OptionError;
use std::fmt;

/// Closed set of option identifiers.
///
/// The discriminant doubles as the index into [`SCHEMA`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OptionKey {
    ProjectDir,
    JsFramework,
    Typescript,
    CodeFormatters,
    Sass,
    CssFramework,
    Bundler,
    Plugins,
    OtherProdDeps,
    OtherDevDeps,
    License,
    Author,
    UseYarn,
    UsePnpm,
    SkipTailwindInit,
    SkipEslintInit,
    SkipGitInit,
}

impl OptionKey {
    /// All keys in declaration (prompt) order.
    pub const ALL: [OptionKey; 17] = [
        OptionKey::ProjectDir,
        OptionKey::JsFramework,
        OptionKey::Typescript,
        OptionKey::CodeFormatters,
        OptionKey::Sass,
        OptionKey::CssFramework,
        OptionKey::Bundler,
        OptionKey::Plugins,
        OptionKey::OtherProdDeps,
        OptionKey::OtherDevDeps,
        OptionKey::License,
        OptionKey::Author,
        OptionKey::UseYarn,
        OptionKey::UsePnpm,
        OptionKey::SkipTailwindInit,
        OptionKey::SkipEslintInit,
        OptionKey::SkipGitInit,
    ];

    /// The spelling used in option files and audit output.
    pub fn name(self) -> &'static str {
        match self {
            OptionKey::ProjectDir => "projectDir",
            OptionKey::JsFramework => "jsFramework",
            OptionKey::Typescript => "typescript",
            OptionKey::CodeFormatters => "codeFormatters",
            OptionKey::Sass => "sass",
            OptionKey::CssFramework => "cssFramework",
            OptionKey::Bundler => "bundler",
            OptionKey::Plugins => "plugins",
            OptionKey::OtherProdDeps => "otherProdDeps",
            OptionKey::OtherDevDeps => "otherDevDeps",
            OptionKey::License => "license",
            OptionKey::Author => "author",
            OptionKey::UseYarn => "useYarn",
            OptionKey::UsePnpm => "usePnpm",
            OptionKey::SkipTailwindInit => "skipTailwindInit",
            OptionKey::SkipEslintInit => "skipEslintInit",
            OptionKey::SkipGitInit => "skipGitInit",
        }
    }

    /// Look up a key by its option-file spelling.
    pub fn parse(name: &str) -> Result<OptionKey, OptionError> {
        OptionKey::ALL
            .iter()
            .copied()
            .find(|k| k.name() == name)
            .ok_or_else(|| OptionError::UnknownKey {
                name: name.to_string(),
            })
    }
}

impl fmt::Display for OptionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Declared shape and semantics of an option's value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionKind {
    /// Single string, optionally choice-constrained.
    Scalar,
    /// Boolean toggle.
    Flag,
    /// Array of strings, every element choice-constrained.
    ChoiceSet,
    /// Array of unconstrained strings, accumulated across sources.
    AdditiveList,
    /// Boolean settable only via file/CLI sources, never prompted.
    NonInteractive,
}

impl OptionKind {
    /// Human name of the value shape this kind expects.
    pub fn expected_shape(self) -> &'static str {
        match self {
            OptionKind::Scalar => "string",
            OptionKind::Flag | OptionKind::NonInteractive => "boolean",
            OptionKind::ChoiceSet | OptionKind::AdditiveList => "array",
        }
    }
}

/// One allowed value of a choice-constrained option.
#[derive(Debug, Clone, Copy)]
pub struct Choice {
    pub value: &'static str,
    pub title: &'static str,
}

/// Whether a prompt is always shown or gated on previously resolved values.
///
/// Exactly one entry (`author`) is dynamic. The predicate is an explicit
/// schema field rather than a conditional inside the prompt driver, so the
/// prompt order stays declarative.
#[derive(Clone, Copy)]
pub enum Visibility {
    Fixed,
    DependsOn {
        keys: &'static [OptionKey],
        predicate: fn(&OptionMap) -> bool,
    },
}

impl fmt::Debug for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Visibility::Fixed => write!(f, "Fixed"),
            Visibility::DependsOn { keys, .. } => write!(f, "DependsOn({keys:?})"),
        }
    }
}

/// One declared option.
#[derive(Debug)]
pub struct SchemaEntry {
    pub key: OptionKey,
    pub kind: OptionKind,
    pub label: &'static str,
    pub choices: &'static [Choice],
    pub visibility: Visibility,
}

const fn choice(value: &'static str, title: &'static str) -> Choice {
    Choice { value, title }
}

fn author_visible(resolved: &OptionMap) -> bool {
    resolved
        .get(OptionKey::License)
        .and_then(|v| v.as_str())
        .map(|license| license == "mit")
        .unwrap_or(false)
}

/// The option registry, in prompt order.
pub static SCHEMA: [SchemaEntry; 17] = [
    SchemaEntry {
        key: OptionKey::ProjectDir,
        kind: OptionKind::Scalar,
        label: "Project directory",
        choices: &[],
        visibility: Visibility::Fixed,
    },
    SchemaEntry {
        key: OptionKey::JsFramework,
        kind: OptionKind::Scalar,
        label: "JavaScript framework",
        choices: &[
            choice("none", "None"),
            choice("react", "React"),
            choice("vue", "Vue"),
            choice("svelte", "Svelte"),
            choice("preact", "Preact"),
            choice("lit-element", "LitElement"),
        ],
        visibility: Visibility::Fixed,
    },
    SchemaEntry {
        key: OptionKey::Typescript,
        kind: OptionKind::Flag,
        label: "TypeScript",
        choices: &[],
        visibility: Visibility::Fixed,
    },
    SchemaEntry {
        key: OptionKey::CodeFormatters,
        kind: OptionKind::ChoiceSet,
        label: "Code formatters",
        choices: &[choice("eslint", "ESLint"), choice("prettier", "Prettier")],
        visibility: Visibility::Fixed,
    },
    SchemaEntry {
        key: OptionKey::Sass,
        kind: OptionKind::Flag,
        label: "Sass",
        choices: &[],
        visibility: Visibility::Fixed,
    },
    SchemaEntry {
        key: OptionKey::CssFramework,
        kind: OptionKind::Scalar,
        label: "CSS framework",
        choices: &[
            choice("none", "None"),
            choice("tailwindcss", "Tailwind CSS"),
            choice("bootstrap", "Bootstrap"),
        ],
        visibility: Visibility::Fixed,
    },
    SchemaEntry {
        key: OptionKey::Bundler,
        kind: OptionKind::Scalar,
        label: "Bundler",
        choices: &[
            choice("webpack", "Webpack"),
            choice("snowpack", "Snowpack"),
            choice("none", "None"),
        ],
        visibility: Visibility::Fixed,
    },
    SchemaEntry {
        key: OptionKey::Plugins,
        kind: OptionKind::ChoiceSet,
        label: "Other plugins",
        choices: &[
            choice("wtr", "Web Test Runner"),
            choice("postcss", "PostCSS"),
            choice("prs", "Plugin Run Script"),
            choice("pbs", "Plugin Build Script"),
            choice("pgo", "Plugin Optimize"),
        ],
        visibility: Visibility::Fixed,
    },
    SchemaEntry {
        key: OptionKey::OtherProdDeps,
        kind: OptionKind::AdditiveList,
        label: "Other prod dependencies",
        choices: &[],
        visibility: Visibility::Fixed,
    },
    SchemaEntry {
        key: OptionKey::OtherDevDeps,
        kind: OptionKind::AdditiveList,
        label: "Other dev dependencies",
        choices: &[],
        visibility: Visibility::Fixed,
    },
    SchemaEntry {
        key: OptionKey::License,
        kind: OptionKind::Scalar,
        label: "License",
        choices: &[
            choice("mit", "MIT"),
            choice("gpl", "GPL"),
            choice("apache", "Apache"),
            choice("none", "None"),
        ],
        visibility: Visibility::Fixed,
    },
    SchemaEntry {
        key: OptionKey::Author,
        kind: OptionKind::Scalar,
        label: "Author",
        choices: &[],
        visibility: Visibility::DependsOn {
            keys: &[OptionKey::License],
            predicate: author_visible,
        },
    },
    SchemaEntry {
        key: OptionKey::UseYarn,
        kind: OptionKind::NonInteractive,
        label: "Use Yarn",
        choices: &[],
        visibility: Visibility::Fixed,
    },
    SchemaEntry {
        key: OptionKey::UsePnpm,
        kind: OptionKind::NonInteractive,
        label: "Use pnpm",
        choices: &[],
        visibility: Visibility::Fixed,
    },
    SchemaEntry {
        key: OptionKey::SkipTailwindInit,
        kind: OptionKind::NonInteractive,
        label: "Skip TailwindCSS init",
        choices: &[],
        visibility: Visibility::Fixed,
    },
    SchemaEntry {
        key: OptionKey::SkipEslintInit,
        kind: OptionKind::NonInteractive,
        label: "Skip ESLint init",
        choices: &[],
        visibility: Visibility::Fixed,
    },
    SchemaEntry {
        key: OptionKey::SkipGitInit,
        kind: OptionKind::NonInteractive,
        label: "Skip git init",
        choices: &[],
        visibility: Visibility::Fixed,
    },
];

/// Look up the schema entry for a key.
pub fn schema(key: OptionKey) -> &'static SchemaEntry {
    &SCHEMA[key as usize]
}

pub fn kind_of(key: OptionKey) -> OptionKind {
    schema(key).kind
}

pub fn choices_of(key: OptionKey) -> &'static [Choice] {
    schema(key).choices
}

pub fn is_additive(key: OptionKey) -> bool {
    kind_of(key) == OptionKind::AdditiveList
}
