//! Schema validation of partial option bags.
//!
//! One call validates one bag; the pipeline validates each bag right before
//! merging it in, so an invalid early source fails before any file or
//! package-manager work begins.

use super::bag::{OptionValue, PartialOptionBag};
use super::error::OptionError;
use super::schema::{choices_of, kind_of, OptionKey, OptionKind};
use std::fmt;
use std::process::Command;

/// External package managers selectable via flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackageManager {
    Yarn,
    Pnpm,
}

impl PackageManager {
    pub fn command(self) -> &'static str {
        match self {
            PackageManager::Yarn => "yarn",
            PackageManager::Pnpm => "pnpm",
        }
    }

    /// The flag key that selects this manager.
    pub fn selector(self) -> OptionKey {
        match self {
            PackageManager::Yarn => OptionKey::UseYarn,
            PackageManager::Pnpm => OptionKey::UsePnpm,
        }
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PackageManager::Yarn => write!(f, "Yarn"),
            PackageManager::Pnpm => write!(f, "pnpm"),
        }
    }
}

/// Presence probe for external package managers.
///
/// The probe shells out, which makes it the only I/O in validation; tests
/// inject a fake instead.
pub trait PackageManagerProbe {
    fn is_installed(&self, manager: PackageManager) -> bool;
}

/// Probe that runs `<tool> --version` synchronously.
pub struct SystemProbe;

impl PackageManagerProbe for SystemProbe {
    fn is_installed(&self, manager: PackageManager) -> bool {
        Command::new(manager.command())
            .arg("--version")
            .output()
            .is_ok_and(|o| o.status.success())
    }
}

pub struct Validator<'a> {
    probe: &'a dyn PackageManagerProbe,
}

impl<'a> Validator<'a> {
    pub fn new(probe: &'a dyn PackageManagerProbe) -> Self {
        Self { probe }
    }

    /// Validate one bag, failing on the first violation found in the bag's
    /// insertion order. `earlier` is every lower-precedence bag already
    /// accepted; the package-manager conflict rule is checked over the
    /// union of those bags and this one, before any probe runs.
    pub fn validate(
        &self,
        bag: &PartialOptionBag,
        earlier: &[PartialOptionBag],
    ) -> Result<(), OptionError> {
        for (key, value) in bag.iter() {
            check_entry(key, value)?;
        }

        let yarn = effective_flag(OptionKey::UseYarn, earlier, bag);
        let pnpm = effective_flag(OptionKey::UsePnpm, earlier, bag);
        if yarn && pnpm {
            return Err(OptionError::ConflictingFlags);
        }

        for manager in [PackageManager::Yarn, PackageManager::Pnpm] {
            let requested = bag
                .get(manager.selector())
                .and_then(OptionValue::as_bool)
                .unwrap_or(false);
            if requested && !self.probe.is_installed(manager) {
                return Err(OptionError::ExternalToolMissing { tool: manager });
            }
        }

        Ok(())
    }
}

/// Shape and choice checks for a single entry.
fn check_entry(key: OptionKey, value: &OptionValue) -> Result<(), OptionError> {
    let kind = kind_of(key);

    let shape_ok = match kind {
        OptionKind::Scalar => matches!(value, OptionValue::Str(_)),
        OptionKind::Flag | OptionKind::NonInteractive => matches!(value, OptionValue::Bool(_)),
        OptionKind::ChoiceSet | OptionKind::AdditiveList => matches!(value, OptionValue::List(_)),
    };
    if !shape_ok {
        return Err(OptionError::TypeMismatch {
            key,
            expected: kind.expected_shape(),
            found: value.shape(),
        });
    }

    let choices = choices_of(key);
    if choices.is_empty() {
        return Ok(());
    }
    let allowed = || choices.iter().map(|c| c.value).collect::<Vec<_>>();

    match (kind, value) {
        (OptionKind::Scalar, OptionValue::Str(s)) => {
            if !choices.iter().any(|c| c.value == s.as_str()) {
                return Err(OptionError::InvalidChoice {
                    key,
                    value: s.clone(),
                    allowed: allowed(),
                });
            }
        }
        (OptionKind::ChoiceSet, OptionValue::List(items)) => {
            for item in items {
                if !choices.iter().any(|c| c.value == item.as_str()) {
                    return Err(OptionError::InvalidChoice {
                        key,
                        value: item.clone(),
                        allowed: allowed(),
                    });
                }
            }
        }
        _ => {}
    }

    Ok(())
}

/// Last definition of a flag across `earlier` then `bag` wins.
fn effective_flag(key: OptionKey, earlier: &[PartialOptionBag], bag: &PartialOptionBag) -> bool {
    earlier
        .iter()
        .chain(std::iter::once(bag))
        .filter_map(|b| b.get(key).and_then(OptionValue::as_bool))
        .last()
        .unwrap_or(false)
}
