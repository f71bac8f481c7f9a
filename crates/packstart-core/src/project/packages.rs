//! Derivation of installable package lists from the resolved option set,
//! and the package-manager invocation that installs them.

use super::frameworks::framework_support;
use crate::options::ResolvedOptions;
use crate::style;
use anyhow::{bail, Context, Result};
use std::path::Path;
use std::process::Command;

/// Packages each optional plugin pulls in.
fn plugin_packages(plugin: &str) -> &'static [&'static str] {
    match plugin {
        "postcss" => &[
            "postcss",
            "postcss-cli",
            "postcss-preset-env",
            "@snowpack/plugin-postcss",
        ],
        "wtr" => &["@web/test-runner", "chai", "@snowpack/web-test-runner-plugin"],
        "prs" => &["@snowpack/plugin-run-script"],
        "pbs" => &["@snowpack/plugin-build-script"],
        "pgo" => &["@snowpack/plugin-optimize"],
        _ => &[],
    }
}

/// Production dependencies: the framework's own packages plus everything
/// accumulated under `otherProdDeps`.
pub fn prod_packages(options: &ResolvedOptions) -> Vec<String> {
    let mut packages: Vec<String> = framework_support(&options.js_framework)
        .prod_packages
        .iter()
        .map(|p| p.to_string())
        .collect();
    packages.extend(options.other_prod_deps.iter().cloned());
    packages
}

/// Development dependencies, assembled in the same order the original
/// selection walks: snowpack itself, framework support, TypeScript, test
/// runner, formatters, Sass, CSS framework, bundler, plugins, then the
/// accumulated `otherDevDeps`.
pub fn dev_packages(options: &ResolvedOptions) -> Vec<String> {
    let support = framework_support(&options.js_framework);
    let mut packages: Vec<String> = vec!["snowpack".into()];

    packages.extend(support.dev_packages.iter().map(|p| p.to_string()));

    if options.typescript {
        packages.extend(support.ts_packages.iter().map(|p| p.to_string()));
        packages.push("typescript".into());
        // Vue ships its own TS integration; Preact brings its own env types.
        if options.js_framework != "vue" {
            packages.push("@snowpack/plugin-typescript".into());
            if options.js_framework != "preact" {
                packages.push("@types/snowpack-env".into());
            }
        }
    }

    if options.has_plugin("wtr") {
        packages.extend(support.wtr_packages.iter().map(|p| p.to_string()));
        if options.typescript {
            packages.push("@types/chai".into());
            if matches!(options.js_framework.as_str(), "react" | "svelte" | "preact") {
                packages.push("@types/mocha".into());
            }
        }
    }

    packages.extend(options.code_formatters.iter().cloned());

    if options.sass {
        packages.push("@snowpack/plugin-sass".into());
    }

    if let Some(css_framework) = &options.css_framework {
        packages.push(css_framework.clone());
    }

    if options.bundler.as_deref() == Some("webpack") {
        packages.push("@snowpack/plugin-webpack".into());
    }

    for plugin in &options.plugins {
        packages.extend(plugin_packages(plugin).iter().map(|p| p.to_string()));
    }
    if options.has_plugin("postcss") && options.bundler.as_deref() != Some("snowpack") {
        packages.push("cssnano".into());
    }

    for dep in &options.other_dev_deps {
        if !packages.contains(dep) {
            packages.push(dep.clone());
        }
    }

    packages
}

/// The install argv prefix for the selected package manager.
pub fn install_command(options: &ResolvedOptions) -> (&'static str, &'static str) {
    if options.use_yarn {
        ("yarn", "add")
    } else if options.use_pnpm {
        ("pnpm", "add")
    } else {
        ("npm", "install")
    }
}

/// Install production and development packages into the project directory.
pub fn install(options: &ResolvedOptions, project_dir: &Path) -> Result<()> {
    println!(
        "\n{}",
        style::accent("- Installing package dependencies. This might take a couple of minutes.")
    );

    let (program, verb) = install_command(options);
    let prod = prod_packages(options);
    if !prod.is_empty() {
        run_install(program, verb, &[], &prod, project_dir)?;
    }
    run_install(program, verb, &["-D"], &dev_packages(options), project_dir)
}

fn run_install(
    program: &str,
    verb: &str,
    extra: &[&str],
    packages: &[String],
    project_dir: &Path,
) -> Result<()> {
    let status = Command::new(program)
        .arg(verb)
        .args(extra)
        .args(packages)
        .current_dir(project_dir)
        .status()
        .with_context(|| format!("failed to run {program}"))?;
    if !status.success() {
        bail!("{program} {verb} exited with {status}");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::project::testing::resolved_fixture;

    #[test]
    fn blank_javascript_app_gets_only_snowpack_and_selections() {
        let options = resolved_fixture();
        assert!(prod_packages(&options).is_empty());
        let dev = dev_packages(&options);
        assert_eq!(dev[0], "snowpack");
        assert!(dev.contains(&"eslint".to_string()));
        assert!(dev.contains(&"@snowpack/plugin-webpack".to_string()));
        assert!(!dev.contains(&"typescript".to_string()));
    }

    #[test]
    fn typescript_react_pulls_type_packages() {
        let mut options = resolved_fixture();
        options.js_framework = "react".into();
        options.typescript = true;

        let prod = prod_packages(&options);
        assert_eq!(prod, vec!["react".to_string(), "react-dom".to_string()]);

        let dev = dev_packages(&options);
        assert!(dev.contains(&"@types/react".to_string()));
        assert!(dev.contains(&"@snowpack/plugin-typescript".to_string()));
        assert!(dev.contains(&"@types/snowpack-env".to_string()));
    }

    #[test]
    fn vue_typescript_skips_the_typescript_plugin() {
        let mut options = resolved_fixture();
        options.js_framework = "vue".into();
        options.typescript = true;

        let dev = dev_packages(&options);
        assert!(dev.contains(&"typescript".to_string()));
        assert!(!dev.contains(&"@snowpack/plugin-typescript".to_string()));
        assert!(!dev.contains(&"@types/snowpack-env".to_string()));
    }

    #[test]
    fn additive_deps_land_in_both_lists() {
        let mut options = resolved_fixture();
        options.other_prod_deps = vec!["axios".into()];
        options.other_dev_deps = vec!["luxon".into()];

        assert!(prod_packages(&options).contains(&"axios".to_string()));
        assert!(dev_packages(&options).contains(&"luxon".to_string()));
    }

    #[test]
    fn snowpack_bundler_drops_cssnano() {
        let mut options = resolved_fixture();
        options.plugins = vec!["postcss".into()];
        options.bundler = Some("snowpack".into());
        let dev = dev_packages(&options);
        assert!(dev.contains(&"@snowpack/plugin-postcss".to_string()));
        assert!(!dev.contains(&"cssnano".to_string()));
    }

    #[test]
    fn install_command_follows_manager_flags() {
        let mut options = resolved_fixture();
        assert_eq!(install_command(&options), ("npm", "install"));
        options.use_yarn = true;
        assert_eq!(install_command(&options), ("yarn", "add"));
        options.use_yarn = false;
        options.use_pnpm = true;
        assert_eq!(install_command(&options), ("pnpm", "add"));
    }
}
