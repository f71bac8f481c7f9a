//! CLI entry: cliclack-based prompts plus the end-to-end scaffold run.
//!
//! This module is optional and only available when the `tui` feature is
//! enabled.

mod prompts;

pub use prompts::CliclackPrompter;

use crate::options::resolve::{resolve, ResolveRequest};
use crate::options::validate::SystemProbe;
use crate::project;
use crate::project::AssetPaths;
use crate::sources::{cli_bag, default_options, CliArgs};
use anyhow::Result;
use std::path::PathBuf;

/// Resolve options and scaffold the project.
pub fn run(args: CliArgs) -> Result<()> {
    cliclack::intro("packstart")?;

    let defaults = default_options()?;
    let request = ResolveRequest {
        use_defaults: args.defaults,
        load: args.load.clone(),
        cli_bag: cli_bag(&args),
    };
    let options = resolve(&request, &defaults, &mut CliclackPrompter, &SystemProbe)?;

    let assets = AssetPaths::discover()?;
    let start_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));

    let project_dir = project::create_base(&options, &assets)?;
    project::generate_package_json(&options, &project_dir)?;
    project::install(&options, &project_dir)?;
    project::generate_snowpack_config(&options, &assets, &project_dir)?;

    project::init_tailwind(&options, &project_dir);
    project::init_eslint(&options, &project_dir);
    project::init_git(&options, &project_dir);

    project::print_quickstart(&options, &start_dir, &project_dir);
    cliclack::outro("Happy coding!")?;

    Ok(())
}
