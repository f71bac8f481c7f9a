//! Creation of the project base: directory, template tree, shared files,
//! license.

use super::assets::AssetPaths;
use crate::options::ResolvedOptions;
use anyhow::{bail, Context, Result};
use chrono::Datelike;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Copy the template tree and shared base files into a fresh project
/// directory, returning its path. Fails if the directory already exists.
pub fn create_base(options: &ResolvedOptions, assets: &AssetPaths) -> Result<PathBuf> {
    let project_dir = PathBuf::from(&options.project_dir);
    if project_dir.exists() {
        bail!("project directory {} already exists", project_dir.display());
    }
    fs::create_dir_all(&project_dir)
        .with_context(|| format!("failed to create {}", project_dir.display()))?;

    copy_file(assets.base_file("gitignore"), project_dir.join(".gitignore"))?;

    let template_dir = assets.template_dir(&options.template_name());
    write_readme(options, &template_dir, &project_dir)?;

    copy_tree(&template_dir.join("public"), &project_dir.join("public"))?;
    copy_tree(&template_dir.join("src"), &project_dir.join("src"))?;

    if options.js_framework == "svelte" && options.typescript {
        copy_file(
            template_dir.join("svelte.config.js"),
            project_dir.join("svelte.config.js"),
        )?;
    }

    if options.js_framework == "lit-element" {
        copy_file(
            template_dir.join("babel.config.json"),
            project_dir.join("babel.config.json"),
        )?;
    }

    if options.typescript {
        copy_tree(&template_dir.join("types"), &project_dir.join("types"))?;
        copy_file(
            template_dir.join("tsconfig.json"),
            project_dir.join("tsconfig.json"),
        )?;
    }

    if options.has_formatter("prettier") {
        copy_file(
            assets.base_file("prettierrc"),
            project_dir.join(".prettierrc"),
        )?;
    }

    if options.sass {
        rename_css_to_scss(options, &project_dir)?;
    }

    if options.has_plugin("postcss") {
        write_postcss_config(options, assets, &project_dir)?;
    }

    if options.has_plugin("wtr") {
        copy_file(
            assets.base_file("wtr.config.mjs"),
            project_dir.join("web-test-runner.config.mjs"),
        )?;
    }

    if let Some(license) = &options.license {
        write_license(options, license, assets, &project_dir)?;
    }

    Ok(project_dir)
}

fn copy_file(from: PathBuf, to: PathBuf) -> Result<()> {
    fs::copy(&from, &to)
        .with_context(|| format!("failed to copy {} to {}", from.display(), to.display()))?;
    Ok(())
}

/// Recursively copy a directory tree; missing sources are skipped so
/// templates only carry the directories they need.
fn copy_tree(from: &Path, to: &Path) -> Result<()> {
    if !from.is_dir() {
        return Ok(());
    }
    for entry in WalkDir::new(from) {
        let entry = entry?;
        let relative = entry.path().strip_prefix(from)?;
        let target = to.join(relative);
        if entry.file_type().is_dir() {
            fs::create_dir_all(&target)
                .with_context(|| format!("failed to create {}", target.display()))?;
        } else {
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::copy(entry.path(), &target)
                .with_context(|| format!("failed to copy {}", entry.path().display()))?;
        }
    }
    Ok(())
}

fn write_readme(
    options: &ResolvedOptions,
    template_dir: &Path,
    project_dir: &Path,
) -> Result<()> {
    let source = template_dir.join("README.md");
    let mut readme = fs::read_to_string(&source)
        .with_context(|| format!("failed to read {}", source.display()))?;

    let project_name = project_dir
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("New Project");
    readme = readme.replace("New Project", project_name);

    if options.use_yarn {
        readme = readme.replace("npm run ", "yarn ").replace("npm ", "yarn ");
    } else if options.use_pnpm {
        readme = readme.replace("npm ", "pnpm ");
    }

    fs::write(project_dir.join("README.md"), readme)?;
    Ok(())
}

/// Rename template stylesheets, and patch their references where the
/// template imports them by name. The svelte templates keep styles inline;
/// the vue TypeScript template ships CSS modules next to its components.
fn rename_css_to_scss(options: &ResolvedOptions, project_dir: &Path) -> Result<()> {
    let src = project_dir.join("src");
    let js_ext = if options.typescript { "ts" } else { "js" };

    match options.js_framework.as_str() {
        "blank" | "lit-element" => {
            rename(&src, "index.css", "index.scss")?;
        }
        "vue" if options.typescript => {
            let components = src.join("components");
            rename(&components, "Bar.module.css", "Bar.module.scss")?;
            rename(&components, "Foo.module.css", "Foo.module.scss")?;
        }
        "react" | "preact" => {
            rename(&src, "App.css", "App.scss")?;
            rename(&src, "index.css", "index.scss")?;
            patch(&src.join(format!("App.{js_ext}x")), "App.css", "App.scss")?;
            patch(
                &src.join(format!("index.{js_ext}x")),
                "index.css",
                "index.scss",
            )?;
        }
        _ => {}
    }
    Ok(())
}

fn rename(dir: &Path, from: &str, to: &str) -> Result<()> {
    let source = dir.join(from);
    if source.exists() {
        fs::rename(&source, dir.join(to))
            .with_context(|| format!("failed to rename {}", source.display()))?;
    }
    Ok(())
}

fn patch(file: &Path, target: &str, replacement: &str) -> Result<()> {
    let contents =
        fs::read_to_string(file).with_context(|| format!("failed to read {}", file.display()))?;
    fs::write(file, contents.replace(target, replacement))?;
    Ok(())
}

/// Copy the postcss scaffold, dropping plugin lines the selection doesn't
/// need.
fn write_postcss_config(
    options: &ResolvedOptions,
    assets: &AssetPaths,
    project_dir: &Path,
) -> Result<()> {
    let source = assets.base_file("postcss.config.js");
    let config = fs::read_to_string(&source)
        .with_context(|| format!("failed to read {}", source.display()))?;

    let uses_tailwind = options.css_framework.as_deref() == Some("tailwindcss");
    // Snowpack's built-in bundler runs its own minification.
    let keep_cssnano = options.bundler.as_deref() != Some("snowpack");

    let filtered: String = config
        .lines()
        .filter(|line| uses_tailwind || !line.contains("tailwindcss"))
        .filter(|line| keep_cssnano || !line.contains("cssnano"))
        .map(|line| format!("{line}\n"))
        .collect();

    fs::write(project_dir.join("postcss.config.js"), filtered)?;
    Ok(())
}

fn write_license(
    options: &ResolvedOptions,
    license: &str,
    assets: &AssetPaths,
    project_dir: &Path,
) -> Result<()> {
    let source = assets.license_file(license);
    let mut text = fs::read_to_string(&source)
        .with_context(|| format!("failed to read {}", source.display()))?;

    if license == "mit" {
        let year = chrono::Local::now().year();
        let author = options.author.as_deref().unwrap_or("");
        text = text.replace("YYYY Author", &format!("{year} {author}"));
    }

    fs::write(project_dir.join("LICENSE"), text)?;
    Ok(())
}
