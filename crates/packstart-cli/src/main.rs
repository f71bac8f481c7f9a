//! packstart - start a new custom Snowpack app

use anyhow::Result;
use clap::Parser;
use packstart_core::{CliArgs, OptionError};

fn main() -> Result<()> {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C gracefully
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();

    let args = CliArgs::parse();
    let result = packstart_core::run(args);

    // Ensure cursor is visible on normal exit
    let _ = console::Term::stderr().show_cursor();

    if let Err(error) = &result {
        if let Some(OptionError::Cancelled) = error.downcast_ref::<OptionError>() {
            eprintln!("{}", packstart_core::style::error_msg("keyboard exit"));
            std::process::exit(130);
        }
    }

    result
}
