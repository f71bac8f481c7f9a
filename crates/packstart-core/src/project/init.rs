//! Optional tool initialization steps run inside the fresh project.
//!
//! Failures here are reported as warnings; the scaffolded project is still
//! usable without them.

use crate::options::ResolvedOptions;
use crate::style;
use std::path::Path;
use std::process::Command;

fn run_step(program: &str, args: &[&str], project_dir: &Path) -> std::io::Result<bool> {
    Ok(Command::new(program)
        .args(args)
        .current_dir(project_dir)
        .status()?
        .success())
}

fn warn_failed(error: Option<std::io::Error>) {
    if let Some(error) = error {
        eprintln!("{error}");
    }
    eprintln!("\n  - {}", style::warning_msg("Something went wrong.\n"));
}

/// Generate `tailwind.config.js` unless the user opted out.
pub fn init_tailwind(options: &ResolvedOptions, project_dir: &Path) {
    if options.css_framework.as_deref() != Some("tailwindcss") {
        return;
    }
    if options.skip_tailwind_init {
        println!("{}", style::warning_msg("\n- Skipping TailwindCSS init.\n"));
        return;
    }
    println!("{}", style::accent("\n- Generating tailwind.config.js."));
    match run_step("npx", &["tailwindcss", "init"], project_dir) {
        Ok(true) => {}
        Ok(false) => warn_failed(None),
        Err(error) => warn_failed(Some(error)),
    }
}

/// Run the interactive `eslint --init` unless the user opted out.
pub fn init_eslint(options: &ResolvedOptions, project_dir: &Path) {
    if !options.has_formatter("eslint") {
        return;
    }
    if options.skip_eslint_init {
        println!("{}", style::warning_msg("\n- Skipping ESLint init.\n"));
        return;
    }
    println!("{}", style::accent("\n- Initializing ESLint.\n"));
    let (program, prefix) = if options.use_yarn {
        ("yarn", Some("dlx"))
    } else {
        ("npx", None)
    };
    let mut args: Vec<&str> = Vec::new();
    if let Some(prefix) = prefix {
        args.push(prefix);
    }
    args.extend(["eslint", "--init"]);
    match run_step(program, &args, project_dir) {
        Ok(true) => {}
        Ok(false) => warn_failed(None),
        Err(error) => warn_failed(Some(error)),
    }
}

/// Initialize a git repository with an initial commit unless the user opted
/// out.
pub fn init_git(options: &ResolvedOptions, project_dir: &Path) {
    if options.skip_git_init {
        println!("{}", style::warning_msg("\n- Skipping git init.\n"));
        return;
    }
    println!("{}", style::accent("\n- Initializing git repo.\n"));
    let steps: [&[&str]; 3] = [
        &["init"],
        &["add", "-A"],
        &["commit", "-m", "Initial commit"],
    ];
    for args in steps {
        match run_step("git", args, project_dir) {
            Ok(true) => {}
            Ok(false) => return warn_failed(None),
            Err(error) => return warn_failed(Some(error)),
        }
    }
    println!("\n  - {}", style::success_msg("Success!\n"));
}
