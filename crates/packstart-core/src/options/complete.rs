//! Interactive completion: a single sequential pass that prompts for every
//! schema key still missing after the known sources were merged.
//!
//! Answers to earlier prompts feed the visibility check of later ones, so
//! the pass is strictly ordered and suspends on one prompt at a time.

use super::bag::{OptionMap, OptionValue, PartialOptionBag, Source};
use super::error::OptionError;
use super::schema::{OptionKind, SchemaEntry, Visibility, SCHEMA};

/// Prompt backend. The cliclack implementation lives behind the `tui`
/// feature; tests script a fake.
///
/// Every method blocks for exactly one answer and returns
/// [`OptionError::Cancelled`] if the user aborts, which kills the whole
/// resolution run.
pub trait Prompter {
    /// Free-form text (project directory, author).
    fn text(&mut self, entry: &SchemaEntry, initial: Option<&str>) -> Result<String, OptionError>;

    /// Yes/no toggle.
    fn toggle(&mut self, entry: &SchemaEntry, initial: bool) -> Result<bool, OptionError>;

    /// Single choice out of `entry.choices`.
    fn select(&mut self, entry: &SchemaEntry, initial: Option<&str>) -> Result<String, OptionError>;

    /// Any subset of `entry.choices`.
    fn multiselect(
        &mut self,
        entry: &SchemaEntry,
        initial: &[String],
    ) -> Result<Vec<String>, OptionError>;

    /// Free-form list for additive keys, `"none"` allowed as a clearing
    /// sentinel.
    fn list(&mut self, entry: &SchemaEntry, initial: &[String])
        -> Result<Vec<String>, OptionError>;
}

/// Driver states; the machine only ever moves forward.
enum State {
    Pending(Vec<&'static SchemaEntry>),
    AwaitingAnswer(&'static SchemaEntry, Vec<&'static SchemaEntry>),
    Done,
}

/// Prompt for every missing key and return a bag of exactly the answered
/// ones.
///
/// `known` is the merge of all non-interactive sources; keys present there
/// are never prompted. `seeds` is the merge with the low-precedence defaults
/// layered underneath, supplying the default each prompt shows.
pub fn complete(
    known: &OptionMap,
    seeds: &OptionMap,
    prompter: &mut dyn Prompter,
) -> Result<PartialOptionBag, OptionError> {
    let mut answers = PartialOptionBag::new(Source::Interactive);

    let remaining: Vec<&'static SchemaEntry> = SCHEMA
        .iter()
        .filter(|e| e.kind != OptionKind::NonInteractive)
        .filter(|e| !known.contains(e.key))
        .collect();

    let mut state = State::Pending(remaining);
    loop {
        state = match state {
            State::Pending(mut queue) => {
                if queue.is_empty() {
                    State::Done
                } else {
                    let entry = queue.remove(0);
                    let resolved_so_far = known.overlaid(answers.values());
                    if visible(entry, &resolved_so_far) {
                        State::AwaitingAnswer(entry, queue)
                    } else {
                        // Skipped without prompting; the key stays absent.
                        State::Pending(queue)
                    }
                }
            }
            State::AwaitingAnswer(entry, queue) => {
                let answer = ask(entry, seeds, prompter)?;
                answers.set(entry.key, answer);
                State::Pending(queue)
            }
            State::Done => return Ok(answers),
        };
    }
}

fn visible(entry: &SchemaEntry, resolved_so_far: &OptionMap) -> bool {
    match entry.visibility {
        Visibility::Fixed => true,
        Visibility::DependsOn { predicate, .. } => predicate(resolved_so_far),
    }
}

fn ask(
    entry: &SchemaEntry,
    seeds: &OptionMap,
    prompter: &mut dyn Prompter,
) -> Result<OptionValue, OptionError> {
    let seed = seeds.get(entry.key);
    match entry.kind {
        OptionKind::Scalar if entry.choices.is_empty() => {
            let initial = seed.and_then(|v| v.as_str());
            prompter.text(entry, initial).map(OptionValue::Str)
        }
        OptionKind::Scalar => {
            let initial = seed.and_then(|v| v.as_str());
            prompter.select(entry, initial).map(OptionValue::Str)
        }
        OptionKind::Flag => {
            let initial = seed.and_then(OptionValue::as_bool).unwrap_or(false);
            prompter.toggle(entry, initial).map(OptionValue::Bool)
        }
        OptionKind::ChoiceSet => {
            let initial = seed.and_then(|v| v.as_list()).unwrap_or(&[]);
            prompter.multiselect(entry, initial).map(OptionValue::List)
        }
        OptionKind::AdditiveList => {
            let initial = seed.and_then(|v| v.as_list()).unwrap_or(&[]);
            prompter.list(entry, initial).map(OptionValue::List)
        }
        // Filtered out before the machine starts.
        OptionKind::NonInteractive => unreachable!("non-interactive keys are never prompted"),
    }
}
