//! Merging an ordered list of partial bags into one resolved map, plus the
//! precedence reporter used for audit output.
//!
//! The reporter and the merge walk must never disagree, so both are built on
//! the single [`overrides_earlier`] predicate.

use super::bag::{OptionMap, OptionValue, PartialOptionBag};
use super::schema::{is_additive, OptionKey, SCHEMA};

/// Distinguished additive-list element meaning "discard everything
/// accumulated so far". Applies only to the two additive dependency keys and
/// is deliberately not generalized to other list kinds.
pub const CLEAR_SENTINEL: &str = "none";

/// Does `bag` invalidate whatever an earlier bag contributed for `key`?
///
/// Non-additive keys: any definition overwrites. Additive keys: only a list
/// containing the clearing sentinel discards earlier contributions; merely
/// adding entries preserves them.
pub fn overrides_earlier(key: OptionKey, bag: &PartialOptionBag) -> bool {
    match bag.get(key) {
        None => false,
        Some(value) if is_additive(key) => value
            .as_list()
            .is_some_and(|items| items.iter().any(|i| i == CLEAR_SENTINEL)),
        Some(_) => true,
    }
}

/// Is `key`'s value from some bag invalidated by any bag in `later`?
///
/// Read-only query for the "this value was later overridden" audit marks; it
/// drives no merge decision.
pub fn is_overridden_later(key: OptionKey, later: &[PartialOptionBag]) -> bool {
    later.iter().any(|bag| overrides_earlier(key, bag))
}

/// Combine `bags` (ordered low- to high-precedence) into a single map.
///
/// Non-additive keys: the last bag that defines the key wins. Additive keys:
/// contributions accumulate in order, de-duplicated, with the sentinel
/// clearing everything contributed by strictly earlier elements. An additive
/// key appears in the result only when at least one bag defines it (a
/// defined-but-empty list counts), so a key no source touched stays absent
/// and remains eligible for prompting.
pub fn merge(bags: &[PartialOptionBag]) -> OptionMap {
    let mut resolved = OptionMap::new();

    for entry in SCHEMA.iter() {
        let key = entry.key;
        if is_additive(key) {
            if bags.iter().any(|bag| bag.defines(key)) {
                resolved.insert(key, OptionValue::List(accumulate(key, bags)));
            }
            continue;
        }

        let winner = bags
            .iter()
            .rev()
            .find(|bag| overrides_earlier(key, bag))
            .and_then(|bag| bag.get(key));
        if let Some(value) = winner {
            resolved.insert(key, value.clone());
        }
    }

    resolved
}

fn accumulate(key: OptionKey, bags: &[PartialOptionBag]) -> Vec<String> {
    let mut acc: Vec<String> = Vec::new();

    for bag in bags {
        let Some(items) = bag.get(key).and_then(OptionValue::as_list) else {
            continue;
        };
        for item in items {
            if item == CLEAR_SENTINEL {
                acc.clear();
            } else if !acc.iter().any(|existing| existing == item) {
                acc.push(item.clone());
            }
        }
    }

    acc
}
