//! Generation of `snowpack.config.mjs` from the bundled scaffold.
//!
//! The scaffold carries two placeholder lines, `/* plugins */` inside the
//! `plugins` array and `/* optimize */` inside the `optimize` block. Plugin
//! entries and bundler settings are spliced in at those markers.

use super::frameworks::framework_support;
use crate::options::ResolvedOptions;
use super::assets::AssetPaths;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

const PLUGINS_MARKER: &str = "/* plugins */";
const OPTIMIZE_MARKER: &str = "/* optimize */";

const PRS_CONFIG: &str = "[\n      \
'@snowpack/plugin-run-script',\n      \
{\n        \
cmd: 'echo \"production build command.\"',\n        \
watch: 'echo \"dev server command.\"', // (optional)\n      \
}\n    ]";

const PBS_CONFIG: &str = "[\n      \
'@snowpack/plugin-build-script',\n      \
{\n        \
input: [], // files to watch\n        \
output: [], // files to export\n        \
cmd: 'echo \"build command.\"', // cmd to run\n      \
}\n    ]";

/// Settings spliced into `optimize` when snowpack's builtin bundler is
/// selected.
const BUILTIN_BUNDLER_SETTINGS: [&str; 4] = [
    "bundle: true",
    "treeshake: true",
    "minify: true",
    "target: 'es2017'",
];

fn plugin_config_entry(name: &str) -> Option<&'static str> {
    match name {
        "webpack" => Some("'@snowpack/plugin-webpack'"),
        "postcss" => Some("'@snowpack/plugin-postcss'"),
        "prs" => Some(PRS_CONFIG),
        "pbs" => Some(PBS_CONFIG),
        _ => None,
    }
}

/// Entries for the config's `plugins` array, in install order.
fn config_plugins(options: &ResolvedOptions) -> Vec<&'static str> {
    let mut entries: Vec<&'static str> = framework_support(&options.js_framework)
        .config_plugins
        .to_vec();

    if options.typescript {
        match options.js_framework.as_str() {
            // Vue's TS support rides on its own plugin module.
            "vue" => entries.insert(1, "'@snowpack/plugin-vue/plugin-tsx-jsx.js'"),
            "preact" => entries.insert(1, "'@snowpack/plugin-typescript'"),
            _ => entries.push("'@snowpack/plugin-typescript'"),
        }
    }

    if options.sass {
        entries.push("'@snowpack/plugin-sass'");
    }

    if let Some(entry) = options.bundler.as_deref().and_then(plugin_config_entry) {
        entries.push(entry);
    }

    for plugin in &options.plugins {
        if let Some(entry) = plugin_config_entry(plugin) {
            entries.push(entry);
        }
    }

    entries
}

/// Render the config text from a scaffold.
pub fn render_snowpack_config(options: &ResolvedOptions, scaffold: &str) -> String {
    let plugins = config_plugins(options);
    let use_builtin_bundler = options.bundler.as_deref() == Some("snowpack");

    let mut out = String::with_capacity(scaffold.len());
    for line in scaffold.lines() {
        match line.trim() {
            PLUGINS_MARKER if !plugins.is_empty() => {
                for entry in &plugins {
                    out.push_str(&format!("    {entry},\n"));
                }
            }
            OPTIMIZE_MARKER if use_builtin_bundler => {
                for setting in BUILTIN_BUNDLER_SETTINGS {
                    out.push_str(&format!("    {setting},\n"));
                }
            }
            _ => {
                out.push_str(line);
                out.push('\n');
            }
        }
    }
    out
}

/// Write the spliced config into the project directory.
pub fn generate_snowpack_config(
    options: &ResolvedOptions,
    assets: &AssetPaths,
    project_dir: &Path,
) -> Result<()> {
    let source = assets.base_file("snowpack.config.mjs");
    let scaffold = fs::read_to_string(&source)
        .with_context(|| format!("failed to read {}", source.display()))?;
    fs::write(
        project_dir.join("snowpack.config.mjs"),
        render_snowpack_config(options, &scaffold),
    )
    .context("could not write snowpack.config.mjs")?;
    Ok(())
}
