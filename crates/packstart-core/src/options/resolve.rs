//! The resolution pipeline: fixed source order, validate-then-append, audit
//! echo, interactive completion, final merge.

use super::bag::PartialOptionBag;
use super::complete::{complete, Prompter};
use super::error::OptionError;
use super::merge::{is_overridden_later, merge};
use super::resolved::ResolvedOptions;
use super::schema::schema;
use super::validate::{PackageManagerProbe, Validator};
use crate::sources::file::load_option_files;
use crate::style;
use std::path::PathBuf;

/// Everything the pipeline needs from the command line.
#[derive(Debug)]
pub struct ResolveRequest {
    /// Merge the defaults bag in as the lowest-precedence source and echo it.
    pub use_defaults: bool,
    /// Option files to load, applied in the order given.
    pub load: Vec<PathBuf>,
    /// The already-assembled CLI flag bag.
    pub cli_bag: PartialOptionBag,
}

/// Resolve the final option set.
///
/// Source order, low to high: defaults (only when `--defaults`) < loaded
/// files in command-line order < CLI flags < interactive answers. Every bag
/// is validated immediately before it is appended; the first failure aborts
/// the run before any later source is read. The defaults bag also seeds the
/// value each prompt shows.
pub fn resolve(
    request: &ResolveRequest,
    defaults: &PartialOptionBag,
    prompter: &mut dyn Prompter,
    probe: &dyn PackageManagerProbe,
) -> Result<ResolvedOptions, OptionError> {
    let validator = Validator::new(probe);
    let loaded = load_option_files(&request.load)?;

    let mut ordered: Vec<PartialOptionBag> = Vec::new();

    if request.use_defaults {
        validate_or_report(&validator, defaults, &ordered)?;
        let mut later: Vec<PartialOptionBag> = loaded.clone();
        later.push(request.cli_bag.clone());
        echo_bag(defaults, &later);
        ordered.push(defaults.clone());
    }

    for (index, bag) in loaded.iter().enumerate() {
        validate_or_report(&validator, bag, &ordered)?;
        let mut later: Vec<PartialOptionBag> = loaded[index + 1..].to_vec();
        later.push(request.cli_bag.clone());
        echo_bag(bag, &later);
        ordered.push(bag.clone());
    }

    if !request.cli_bag.is_empty() {
        validate_or_report(&validator, &request.cli_bag, &ordered)?;
        echo_bag(&request.cli_bag, &[]);
        ordered.push(request.cli_bag.clone());
    }

    let known = merge(&ordered);
    let seeds = {
        let mut with_defaults = vec![defaults.clone()];
        with_defaults.extend(ordered.iter().cloned());
        merge(&with_defaults)
    };
    let answers = complete(&known, &seeds, prompter)?;
    if !answers.is_empty() {
        validate_or_report(&validator, &answers, &ordered)?;
        ordered.push(answers);
    }

    ResolvedOptions::from_bags(&ordered)
}

fn validate_or_report(
    validator: &Validator<'_>,
    bag: &PartialOptionBag,
    earlier: &[PartialOptionBag],
) -> Result<(), OptionError> {
    validator.validate(bag, earlier).inspect_err(|_| {
        eprintln!(
            "{}",
            style::fatal_error(&format!("Error while processing {}", bag.source()))
        );
    })
}

/// Audit echo: one line per entry, marked with whether a later source
/// invalidates it.
fn echo_bag(bag: &PartialOptionBag, later: &[PartialOptionBag]) {
    println!("\n{}", style::accent(&format!("-- {} --", bag.source())));
    for (key, value) in bag.iter() {
        let label = style::strong(schema(key).label);
        let mark = if is_overridden_later(key, later) {
            style::error_msg("x")
        } else {
            style::success_msg("+")
        };
        println!("{mark} {label} {value}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::bag::{OptionValue, Source};
    use crate::options::complete::testing::{CancellingPrompter, EchoPrompter};
    use crate::options::schema::OptionKey;
    use crate::options::validate::{PackageManager, PackageManagerProbe};
    use crate::sources::defaults::builtin_defaults;
    use std::io::Write;

    struct NoToolsProbe;
    impl PackageManagerProbe for NoToolsProbe {
        fn is_installed(&self, _: PackageManager) -> bool {
            false
        }
    }

    fn cli_bag(entries: &[(OptionKey, OptionValue)]) -> PartialOptionBag {
        let mut bag = PartialOptionBag::new(Source::CliFlags);
        for (key, value) in entries {
            bag.set(*key, value.clone());
        }
        bag
    }

    fn write_options_file(dir: &tempfile::TempDir, name: &str, yaml: &str) -> PathBuf {
        let path = dir.path().join(name);
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(yaml.as_bytes()).unwrap();
        path
    }

    #[test]
    fn loaded_file_overrides_defaults_and_suppresses_author_prompt() {
        let dir = tempfile::tempdir().unwrap();
        let file = write_options_file(&dir, "opts.yaml", "license: apache\n");

        let request = ResolveRequest {
            use_defaults: true,
            load: vec![file],
            cli_bag: cli_bag(&[]),
        };
        let mut prompter = EchoPrompter::new().answer_text(OptionKey::ProjectDir, "my-app");

        let resolved = resolve(&request, &builtin_defaults(), &mut prompter, &NoToolsProbe).unwrap();

        assert_eq!(resolved.license.as_deref(), Some("apache"));
        assert!(!prompter.asked.contains(&OptionKey::Author));
        assert!(!prompter.asked.contains(&OptionKey::License));
    }

    #[test]
    fn cli_flags_outrank_loaded_files() {
        let dir = tempfile::tempdir().unwrap();
        let file = write_options_file(&dir, "opts.yaml", "bundler: snowpack\n");

        let request = ResolveRequest {
            use_defaults: true,
            load: vec![file],
            cli_bag: cli_bag(&[(OptionKey::Bundler, OptionValue::Str("webpack".into()))]),
        };
        let mut prompter = EchoPrompter::new().answer_text(OptionKey::ProjectDir, "my-app");

        let resolved = resolve(&request, &builtin_defaults(), &mut prompter, &NoToolsProbe).unwrap();
        assert_eq!(resolved.bundler.as_deref(), Some("webpack"));
    }

    #[test]
    fn invalid_file_aborts_before_prompts() {
        let dir = tempfile::tempdir().unwrap();
        let file = write_options_file(&dir, "opts.yaml", "bundler: rollup\n");

        let request = ResolveRequest {
            use_defaults: false,
            load: vec![file],
            cli_bag: cli_bag(&[]),
        };
        let mut prompter = EchoPrompter::new();

        let err = resolve(&request, &builtin_defaults(), &mut prompter, &NoToolsProbe).unwrap_err();
        assert!(matches!(err, OptionError::InvalidChoice { .. }));
        assert!(prompter.asked.is_empty());
    }

    #[test]
    fn missing_file_is_a_source_load_error() {
        let request = ResolveRequest {
            use_defaults: false,
            load: vec![PathBuf::from("/definitely/not/here.yaml")],
            cli_bag: cli_bag(&[]),
        };
        let err = resolve(
            &request,
            &builtin_defaults(),
            &mut EchoPrompter::new(),
            &NoToolsProbe,
        )
        .unwrap_err();
        assert!(matches!(err, OptionError::SourceLoad { .. }));
    }

    #[test]
    fn conflicting_managers_across_sources_fail_without_probe_success() {
        let dir = tempfile::tempdir().unwrap();
        let file = write_options_file(&dir, "opts.yaml", "useYarn: true\n");

        let request = ResolveRequest {
            use_defaults: false,
            load: vec![file],
            cli_bag: cli_bag(&[(OptionKey::UsePnpm, OptionValue::Bool(true))]),
        };
        // Yarn probe would fail first if it ran for the loaded file's bag.
        struct YarnOnly;
        impl PackageManagerProbe for YarnOnly {
            fn is_installed(&self, manager: PackageManager) -> bool {
                manager == PackageManager::Yarn
            }
        }
        let err = resolve(
            &request,
            &builtin_defaults(),
            &mut EchoPrompter::new(),
            &YarnOnly,
        )
        .unwrap_err();
        assert!(matches!(err, OptionError::ConflictingFlags));
    }

    #[test]
    fn additive_keys_prompted_when_no_source_defines_them() {
        let request = ResolveRequest {
            use_defaults: false,
            load: vec![],
            cli_bag: cli_bag(&[]),
        };
        let mut prompter = EchoPrompter::new().answer_text(OptionKey::ProjectDir, "my-app");

        let resolved = resolve(&request, &builtin_defaults(), &mut prompter, &NoToolsProbe).unwrap();

        assert!(prompter.asked.contains(&OptionKey::OtherProdDeps));
        assert!(prompter.asked.contains(&OptionKey::OtherDevDeps));
        assert!(resolved.other_prod_deps.is_empty());
        assert!(resolved.other_dev_deps.is_empty());
    }

    #[test]
    fn additive_keys_defined_by_a_source_are_not_prompted() {
        let request = ResolveRequest {
            use_defaults: false,
            load: vec![],
            cli_bag: cli_bag(&[(
                OptionKey::OtherProdDeps,
                OptionValue::List(vec!["axios".into()]),
            )]),
        };
        let mut prompter = EchoPrompter::new().answer_text(OptionKey::ProjectDir, "my-app");

        let resolved = resolve(&request, &builtin_defaults(), &mut prompter, &NoToolsProbe).unwrap();

        assert!(!prompter.asked.contains(&OptionKey::OtherProdDeps));
        assert!(prompter.asked.contains(&OptionKey::OtherDevDeps));
        assert_eq!(resolved.other_prod_deps, vec!["axios".to_string()]);
    }

    #[test]
    fn out_of_range_prompt_answers_are_rejected() {
        // A backend returning a value outside the declared choice set must
        // fail validation like any other source.
        struct OffScriptPrompter;
        impl Prompter for OffScriptPrompter {
            fn text(
                &mut self,
                _: &crate::options::schema::SchemaEntry,
                _: Option<&str>,
            ) -> Result<String, OptionError> {
                Ok("my-app".into())
            }
            fn toggle(
                &mut self,
                _: &crate::options::schema::SchemaEntry,
                initial: bool,
            ) -> Result<bool, OptionError> {
                Ok(initial)
            }
            fn select(
                &mut self,
                _: &crate::options::schema::SchemaEntry,
                _: Option<&str>,
            ) -> Result<String, OptionError> {
                Ok("rollup".into())
            }
            fn multiselect(
                &mut self,
                _: &crate::options::schema::SchemaEntry,
                initial: &[String],
            ) -> Result<Vec<String>, OptionError> {
                Ok(initial.to_vec())
            }
            fn list(
                &mut self,
                _: &crate::options::schema::SchemaEntry,
                initial: &[String],
            ) -> Result<Vec<String>, OptionError> {
                Ok(initial.to_vec())
            }
        }

        let request = ResolveRequest {
            use_defaults: false,
            load: vec![],
            cli_bag: cli_bag(&[]),
        };
        let err = resolve(
            &request,
            &builtin_defaults(),
            &mut OffScriptPrompter,
            &NoToolsProbe,
        )
        .unwrap_err();
        assert!(matches!(err, OptionError::InvalidChoice { .. }));
    }

    #[test]
    fn cancellation_produces_no_resolved_set() {
        let request = ResolveRequest {
            use_defaults: true,
            load: vec![],
            cli_bag: cli_bag(&[]),
        };
        let err = resolve(
            &request,
            &builtin_defaults(),
            &mut CancellingPrompter,
            &NoToolsProbe,
        )
        .unwrap_err();
        assert!(matches!(err, OptionError::Cancelled));
    }

    #[test]
    fn end_to_end_defaults_file_cli_precedence() {
        let dir = tempfile::tempdir().unwrap();
        let low = write_options_file(&dir, "low.yaml", "otherProdDeps: [axios]\n");
        let high = write_options_file(&dir, "high.yaml", "otherProdDeps: [none, luxon]\n");

        let request = ResolveRequest {
            use_defaults: true,
            load: vec![low, high],
            cli_bag: cli_bag(&[(OptionKey::Typescript, OptionValue::Bool(true))]),
        };
        let mut prompter = EchoPrompter::new().answer_text(OptionKey::ProjectDir, "my-app");

        let resolved = resolve(&request, &builtin_defaults(), &mut prompter, &NoToolsProbe).unwrap();

        assert_eq!(resolved.other_prod_deps, vec!["luxon".to_string()]);
        assert!(resolved.typescript);
        assert!(!prompter.asked.contains(&OptionKey::Typescript));
        // Defaults were merged in, so only gaps were prompted.
        assert!(prompter.asked.contains(&OptionKey::ProjectDir));
        assert!(prompter.asked.contains(&OptionKey::Author));
    }
}
