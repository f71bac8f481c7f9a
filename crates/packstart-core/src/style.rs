//! Terminal styling helpers shared by the pipeline's audit output and the
//! downstream generators.

use colored::Colorize;

pub fn accent(s: &str) -> String {
    s.bright_cyan().to_string()
}

pub fn strong(s: &str) -> String {
    s.white().bold().to_string()
}

pub fn success_msg(s: &str) -> String {
    s.green().to_string()
}

pub fn warning_msg(s: &str) -> String {
    s.yellow().to_string()
}

pub fn error_msg(s: &str) -> String {
    s.red().to_string()
}

pub fn fatal_error(s: &str) -> String {
    s.white().bold().on_red().to_string()
}
