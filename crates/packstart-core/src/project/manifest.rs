//! Generation of the project's `package.json`.

use crate::options::ResolvedOptions;
use anyhow::{Context, Result};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// The generated manifest. Scripts live in a sorted map; npm does not care
/// about ordering.
#[derive(Debug, Serialize)]
pub struct PackageManifest {
    pub private: bool,
    pub scripts: BTreeMap<&'static str, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub browserslist: Option<Vec<&'static str>>,
}

/// Source file extensions the selected framework/TypeScript pair produces,
/// used to scope the formatter globs.
fn source_extensions(options: &ResolvedOptions) -> Vec<&'static str> {
    match (options.js_framework.as_str(), options.typescript) {
        ("react" | "preact", false) => vec!["js", "jsx"],
        ("react" | "preact", true) => vec!["js", "jsx", "ts", "tsx"],
        ("vue", false) => vec!["vue"],
        ("vue", true) => vec!["vue", "ts"],
        ("svelte", false) => vec!["svelte"],
        ("svelte", true) => vec!["svelte", "ts"],
        ("lit-element", false) => vec!["js"],
        ("lit-element", true) => vec!["ts"],
        (_, false) => vec!["js"],
        (_, true) => vec!["ts", "js"],
    }
}

fn format_glob(options: &ResolvedOptions) -> String {
    let exts = source_extensions(options);
    if exts.len() > 1 {
        format!("src/**/*.{{{}}}", exts.join(","))
    } else {
        format!("src/**/*.{}", exts[0])
    }
}

/// Build the manifest contents.
pub fn package_manifest(options: &ResolvedOptions) -> PackageManifest {
    let mut scripts: BTreeMap<&'static str, String> = BTreeMap::new();
    scripts.insert("start", "snowpack dev".into());
    scripts.insert("build", "snowpack build".into());
    scripts.insert(
        "test",
        "echo \"This template does not include a test runner by default.\" && exit 1".into(),
    );

    let eslint_format = "eslint --fix \"src/**/*\"".to_string();
    let eslint_lint = "eslint \"src/**/*\"".to_string();
    let prettier_format = format!("prettier --write \"{}\"", format_glob(options));
    let prettier_lint = format!("prettier --check \"{}\"", format_glob(options));

    match (
        options.has_formatter("eslint"),
        options.has_formatter("prettier"),
    ) {
        (true, false) => {
            scripts.insert("format", eslint_format);
            scripts.insert("lint", eslint_lint);
        }
        (false, true) => {
            scripts.insert("format", prettier_format);
            scripts.insert("lint", prettier_lint);
        }
        // Both selected: separate script names so neither shadows the other.
        (true, true) => {
            scripts.insert("esfix", eslint_format);
            scripts.insert("eslint", eslint_lint);
            scripts.insert("pwrite", prettier_format);
            scripts.insert("pcheck", prettier_lint);
        }
        (false, false) => {}
    }

    if options.js_framework == "vue" && options.typescript {
        scripts.insert("type-check", "tsc".into());
    }

    // The vue and lit-element templates ship no example tests.
    if options.has_plugin("wtr")
        && !matches!(options.js_framework.as_str(), "vue" | "lit-element")
    {
        let mut test_ext = if options.typescript { "ts" } else { "js" }.to_string();
        if matches!(options.js_framework.as_str(), "react" | "preact") {
            test_ext.push('x');
        }
        scripts.insert("test", format!("web-test-runner \"src/**/*.test.{test_ext}\""));
    }

    PackageManifest {
        private: true,
        scripts,
        browserslist: (options.bundler.as_deref() == Some("webpack")).then(|| vec!["defaults"]),
    }
}

/// Write `package.json` into the project directory.
pub fn generate_package_json(options: &ResolvedOptions, project_dir: &Path) -> Result<()> {
    let manifest = package_manifest(options);
    let text = serde_json::to_string_pretty(&manifest).context("could not render package.json")?;
    fs::write(project_dir.join("package.json"), text + "\n")
        .context("could not write package.json")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::project::testing::resolved_fixture;

    #[test]
    fn eslint_only_gets_format_and_lint_scripts() {
        let manifest = package_manifest(&resolved_fixture());
        assert_eq!(manifest.scripts["format"], "eslint --fix \"src/**/*\"");
        assert_eq!(manifest.scripts["lint"], "eslint \"src/**/*\"");
        assert!(!manifest.scripts.contains_key("pwrite"));
    }

    #[test]
    fn both_formatters_get_distinct_script_names() {
        let mut options = resolved_fixture();
        options.code_formatters = vec!["eslint".into(), "prettier".into()];
        let manifest = package_manifest(&options);
        assert!(!manifest.scripts.contains_key("format"));
        assert_eq!(manifest.scripts["esfix"], "eslint --fix \"src/**/*\"");
        assert_eq!(manifest.scripts["pwrite"], "prettier --write \"src/**/*.js\"");
        assert_eq!(manifest.scripts["pcheck"], "prettier --check \"src/**/*.js\"");
    }

    #[test]
    fn prettier_glob_tracks_framework_extensions() {
        let mut options = resolved_fixture();
        options.code_formatters = vec!["prettier".into()];
        options.js_framework = "react".into();
        options.typescript = true;
        let manifest = package_manifest(&options);
        assert_eq!(
            manifest.scripts["format"],
            "prettier --write \"src/**/*.{js,jsx,ts,tsx}\""
        );

        options.js_framework = "vue".into();
        options.typescript = false;
        let manifest = package_manifest(&options);
        assert_eq!(manifest.scripts["format"], "prettier --write \"src/**/*.vue\"");
    }

    #[test]
    fn webpack_bundler_sets_browserslist() {
        let manifest = package_manifest(&resolved_fixture());
        assert_eq!(manifest.browserslist, Some(vec!["defaults"]));

        let mut options = resolved_fixture();
        options.bundler = Some("snowpack".into());
        assert_eq!(package_manifest(&options).browserslist, None);
    }

    #[test]
    fn wtr_plugin_rewrites_the_test_script() {
        let mut options = resolved_fixture();
        options.plugins = vec!["wtr".into()];
        let manifest = package_manifest(&options);
        assert_eq!(manifest.scripts["test"], "web-test-runner \"src/**/*.test.js\"");

        options.js_framework = "react".into();
        options.typescript = true;
        let manifest = package_manifest(&options);
        assert_eq!(manifest.scripts["test"], "web-test-runner \"src/**/*.test.tsx\"");

        options.js_framework = "vue".into();
        let manifest = package_manifest(&options);
        assert!(manifest.scripts["test"].starts_with("echo"));
    }

    #[test]
    fn vue_typescript_gets_type_check() {
        let mut options = resolved_fixture();
        options.js_framework = "vue".into();
        options.typescript = true;
        assert_eq!(package_manifest(&options).scripts["type-check"], "tsc");
    }

    #[test]
    fn writes_manifest_to_disk() {
        let dir = tempfile::tempdir().unwrap();
        generate_package_json(&resolved_fixture(), dir.path()).unwrap();
        let text = fs::read_to_string(dir.path().join("package.json")).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed["private"], true);
        assert!(parsed.get("scripts").is_some());
    }
}
