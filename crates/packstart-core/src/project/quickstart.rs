//! The closing "what next" message printed after a successful scaffold.

use crate::options::ResolvedOptions;
use crate::style;
use std::path::Path;

fn installer(options: &ResolvedOptions) -> &'static str {
    if options.use_yarn {
        "yarn"
    } else if options.use_pnpm {
        "pnpm"
    } else {
        "npm"
    }
}

fn format_command(command: &str, description: &str) -> String {
    format!("  {command:<17}{description}")
}

/// Print the quickstart instructions for the freshly created project.
pub fn print_quickstart(options: &ResolvedOptions, start_dir: &Path, project_dir: &Path) {
    let installer = installer(options);
    let relative = project_dir
        .strip_prefix(start_dir)
        .unwrap_or(project_dir)
        .display();

    println!();
    println!("{}", style::strong("Quickstart:"));
    println!();
    println!("  cd {relative}");
    println!("  {installer} start");
    println!();
    println!("{}", style::strong("All Commands:"));
    println!();
    println!(
        "{}",
        format_command(&format!("{installer} start"), "Start your development server.")
    );
    let build_prefix = if options.use_yarn {
        installer.to_string()
    } else {
        format!("{installer} run")
    };
    println!(
        "{}",
        format_command(
            &format!("{build_prefix} build"),
            "Build your website for production.",
        )
    );
    println!(
        "{}",
        format_command(&format!("{installer} test"), "Run your tests.")
    );
    println!();
}
