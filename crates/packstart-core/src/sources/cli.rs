//! Command-line surface and the CLI flag bag it produces.

use crate::options::bag::{OptionValue, PartialOptionBag, Source};
use crate::options::schema::OptionKey;
use clap::Parser;
use std::path::PathBuf;

/// Start a new custom Snowpack app.
#[derive(Parser, Debug, Default)]
#[command(name = "packstart", version, about = "Start a new custom Snowpack app")]
pub struct CliArgs {
    /// Project directory
    #[arg(value_name = "project-dir")]
    pub project_dir: Option<String>,

    /// Use default options
    #[arg(short = 'd', long)]
    pub defaults: bool,

    /// Load options from files
    #[arg(long, num_args = 1.., value_name = "FILES")]
    pub load: Vec<PathBuf>,

    /// JavaScript framework <none/react/vue/svelte/preact/lit-element>
    #[arg(long = "js-framework", value_name = "FRAMEWORK")]
    pub js_framework: Option<String>,

    /// Use TypeScript
    #[arg(long, overrides_with = "no_typescript")]
    pub typescript: bool,

    /// Don't use TypeScript
    #[arg(long = "no-typescript", overrides_with = "typescript")]
    pub no_typescript: bool,

    /// Code formatters <eslint/prettier>, <none> for none
    #[arg(long = "code-formatters", num_args = 1.., value_delimiter = ',', value_name = "FORMATTERS")]
    pub code_formatters: Option<Vec<String>>,

    /// Use Sass
    #[arg(long, overrides_with = "no_sass")]
    pub sass: bool,

    /// Don't use Sass
    #[arg(long = "no-sass", overrides_with = "sass")]
    pub no_sass: bool,

    /// CSS framework <none/tailwindcss/bootstrap>
    #[arg(long = "css-framework", value_name = "FRAMEWORK")]
    pub css_framework: Option<String>,

    /// Bundler <webpack/snowpack/none>
    #[arg(short = 'b', long, value_name = "BUNDLER")]
    pub bundler: Option<String>,

    /// Other plugins <wtr/postcss/prs/pbs/pgo>, <none> for none
    #[arg(short = 'p', long, num_args = 1.., value_delimiter = ',', value_name = "PLUGINS")]
    pub plugins: Option<Vec<String>>,

    /// Additional production packages, <none> discards earlier sources
    #[arg(long = "other-prod-deps", num_args = 1.., value_delimiter = ',', value_name = "PACKAGES")]
    pub other_prod_deps: Option<Vec<String>>,

    /// Additional development packages, <none> discards earlier sources
    #[arg(long = "other-dev-deps", num_args = 1.., value_delimiter = ',', value_name = "PACKAGES")]
    pub other_dev_deps: Option<Vec<String>>,

    /// License <mit/gpl/apache/none>
    #[arg(short = 'l', long, value_name = "LICENSE")]
    pub license: Option<String>,

    /// Author
    #[arg(short = 'a', long, value_name = "AUTHOR")]
    pub author: Option<String>,

    /// Use Yarn
    #[arg(long = "use-yarn")]
    pub use_yarn: bool,

    /// Use pnpm
    #[arg(long = "use-pnpm")]
    pub use_pnpm: bool,

    /// Skip TailwindCSS init
    #[arg(long = "skip-tailwind-init")]
    pub skip_tailwind_init: bool,

    /// Skip ESLint init
    #[arg(long = "skip-eslint-init")]
    pub skip_eslint_init: bool,

    /// Skip git init
    #[arg(long = "skip-git-init")]
    pub skip_git_init: bool,
}

impl CliArgs {
    /// Tri-state view of the TypeScript toggle flags.
    fn typescript_choice(&self) -> Option<bool> {
        if self.typescript {
            Some(true)
        } else if self.no_typescript {
            Some(false)
        } else {
            None
        }
    }

    fn sass_choice(&self) -> Option<bool> {
        if self.sass {
            Some(true)
        } else if self.no_sass {
            Some(false)
        } else {
            None
        }
    }
}

/// Build the CLI flag bag, in schema order.
///
/// A literal `none` in a choice-set flag empties that list for this source
/// only; additive lists keep the sentinel so the merge can apply its
/// clearing rule.
pub fn cli_bag(args: &CliArgs) -> PartialOptionBag {
    let mut bag = PartialOptionBag::new(Source::CliFlags);

    if let Some(dir) = &args.project_dir {
        bag.set(OptionKey::ProjectDir, OptionValue::Str(dir.clone()));
    }
    if let Some(framework) = &args.js_framework {
        bag.set(OptionKey::JsFramework, OptionValue::Str(framework.clone()));
    }
    if let Some(ts) = args.typescript_choice() {
        bag.set(OptionKey::Typescript, OptionValue::Bool(ts));
    }
    if let Some(formatters) = &args.code_formatters {
        bag.set(
            OptionKey::CodeFormatters,
            OptionValue::List(clear_on_none(formatters)),
        );
    }
    if let Some(sass) = args.sass_choice() {
        bag.set(OptionKey::Sass, OptionValue::Bool(sass));
    }
    if let Some(framework) = &args.css_framework {
        bag.set(OptionKey::CssFramework, OptionValue::Str(framework.clone()));
    }
    if let Some(bundler) = &args.bundler {
        bag.set(OptionKey::Bundler, OptionValue::Str(bundler.clone()));
    }
    if let Some(plugins) = &args.plugins {
        bag.set(OptionKey::Plugins, OptionValue::List(clear_on_none(plugins)));
    }
    if let Some(deps) = &args.other_prod_deps {
        bag.set(OptionKey::OtherProdDeps, OptionValue::List(deps.clone()));
    }
    if let Some(deps) = &args.other_dev_deps {
        bag.set(OptionKey::OtherDevDeps, OptionValue::List(deps.clone()));
    }
    if let Some(license) = &args.license {
        bag.set(OptionKey::License, OptionValue::Str(license.clone()));
    }
    if let Some(author) = &args.author {
        bag.set(OptionKey::Author, OptionValue::Str(author.clone()));
    }
    if args.use_yarn {
        bag.set(OptionKey::UseYarn, OptionValue::Bool(true));
    }
    if args.use_pnpm {
        bag.set(OptionKey::UsePnpm, OptionValue::Bool(true));
    }
    if args.skip_tailwind_init {
        bag.set(OptionKey::SkipTailwindInit, OptionValue::Bool(true));
    }
    if args.skip_eslint_init {
        bag.set(OptionKey::SkipEslintInit, OptionValue::Bool(true));
    }
    if args.skip_git_init {
        bag.set(OptionKey::SkipGitInit, OptionValue::Bool(true));
    }

    bag
}

fn clear_on_none(values: &[String]) -> Vec<String> {
    if values.iter().any(|v| v == "none") {
        Vec::new()
    } else {
        values.to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_and_bags_basic_flags() {
        let args = CliArgs::parse_from([
            "packstart",
            "my-app",
            "--js-framework",
            "react",
            "--typescript",
            "--plugins",
            "wtr,postcss",
            "-l",
            "apache",
        ]);
        let bag = cli_bag(&args);

        assert_eq!(
            bag.get(OptionKey::ProjectDir).and_then(|v| v.as_str()),
            Some("my-app")
        );
        assert_eq!(
            bag.get(OptionKey::Typescript).and_then(|v| v.as_bool()),
            Some(true)
        );
        assert_eq!(
            bag.get(OptionKey::Plugins).and_then(|v| v.as_list()),
            Some(&["wtr".to_string(), "postcss".to_string()][..])
        );
        assert!(!bag.defines(OptionKey::UseYarn));
    }

    #[test]
    fn no_flags_yield_an_empty_bag() {
        let args = CliArgs::parse_from(["packstart"]);
        assert!(cli_bag(&args).is_empty());
    }

    #[test]
    fn negated_toggle_beats_positive() {
        let args = CliArgs::parse_from(["packstart", "--typescript", "--no-typescript"]);
        let bag = cli_bag(&args);
        assert_eq!(
            bag.get(OptionKey::Typescript).and_then(|v| v.as_bool()),
            Some(false)
        );
    }

    #[test]
    fn none_empties_choice_sets_but_not_additive_lists() {
        let args = CliArgs::parse_from([
            "packstart",
            "--code-formatters",
            "none",
            "--other-prod-deps",
            "none,luxon",
        ]);
        let bag = cli_bag(&args);
        let formatters = bag
            .get(OptionKey::CodeFormatters)
            .and_then(|v| v.as_list())
            .unwrap();
        assert!(formatters.is_empty());
        assert_eq!(
            bag.get(OptionKey::OtherProdDeps).and_then(|v| v.as_list()),
            Some(&["none".to_string(), "luxon".to_string()][..])
        );
    }
}
