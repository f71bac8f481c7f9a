//! Charm-style CLI prompts using cliclack

use crate::options::schema::{OptionKey, SchemaEntry};
use crate::options::{OptionError, Prompter};
use std::path::Path;

/// Prompt backend over cliclack. Any interact error, including ESC and
/// ctrl-c, is mapped to [`OptionError::Cancelled`].
pub struct CliclackPrompter;

fn cancelled<E>(_: E) -> OptionError {
    OptionError::Cancelled
}

impl Prompter for CliclackPrompter {
    fn text(&mut self, entry: &SchemaEntry, initial: Option<&str>) -> Result<String, OptionError> {
        let mut input = cliclack::input(entry.label);
        if let Some(initial) = initial {
            input = input.default_input(initial);
        }
        if entry.key == OptionKey::ProjectDir {
            input = input.validate(|value: &String| {
                if value.trim().is_empty() {
                    Err("Enter a directory name")
                } else if Path::new(value).exists() {
                    Err("Path already exists")
                } else {
                    Ok(())
                }
            });
        }
        input.interact().map_err(cancelled)
    }

    fn toggle(&mut self, entry: &SchemaEntry, initial: bool) -> Result<bool, OptionError> {
        cliclack::confirm(entry.label)
            .initial_value(initial)
            .interact()
            .map_err(cancelled)
    }

    fn select(&mut self, entry: &SchemaEntry, initial: Option<&str>) -> Result<String, OptionError> {
        let mut select = cliclack::select(entry.label);
        for choice in entry.choices {
            select = select.item(choice.value.to_string(), choice.title, "");
        }
        if let Some(initial) = initial {
            select = select.initial_value(initial.to_string());
        }
        select.interact().map_err(cancelled)
    }

    fn multiselect(
        &mut self,
        entry: &SchemaEntry,
        initial: &[String],
    ) -> Result<Vec<String>, OptionError> {
        let mut multi = cliclack::multiselect(entry.label).required(false);
        for choice in entry.choices {
            multi = multi.item(choice.value.to_string(), choice.title, "");
        }
        if !initial.is_empty() {
            multi = multi.initial_values(initial.to_vec());
        }
        multi.interact().map_err(cancelled)
    }

    fn list(&mut self, entry: &SchemaEntry, initial: &[String]) -> Result<Vec<String>, OptionError> {
        let mut input = cliclack::input(entry.label).required(false);
        if !initial.is_empty() {
            input = input.default_input(&initial.join(" "));
        }
        let raw: String = input.interact().map_err(cancelled)?;
        Ok(split_list(&raw))
    }
}

/// Split a free-form package list on whitespace and commas.
fn split_list(raw: &str) -> Vec<String> {
    raw.split(|c: char| c.is_whitespace() || c == ',')
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::split_list;

    #[test]
    fn splits_on_whitespace_and_commas() {
        assert_eq!(split_list("axios, luxon  chart.js"), vec!["axios", "luxon", "chart.js"]);
        assert!(split_list("  ").is_empty());
    }
}
