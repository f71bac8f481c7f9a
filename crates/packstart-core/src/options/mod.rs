//! The layered option-resolution engine.
//!
//! Sources produce [`bag::PartialOptionBag`]s, the [`validate::Validator`]
//! checks each one against the static [`schema`], the [`merge`] engine folds
//! the ordered list into a single map, [`complete`] prompts for whatever is
//! still missing, and [`resolve`] orchestrates the whole pass into a
//! [`resolved::ResolvedOptions`].

pub mod bag;
pub mod complete;
pub mod error;
pub mod merge;
pub mod resolve;
pub mod resolved;
pub mod schema;
pub mod validate;

pub use bag::{OptionMap, OptionValue, PartialOptionBag, Source};
pub use complete::Prompter;
pub use error::OptionError;
pub use merge::{is_overridden_later, merge as merge_bags, CLEAR_SENTINEL};
pub use resolve::{resolve, ResolveRequest};
pub use resolved::ResolvedOptions;
pub use schema::{schema, Choice, OptionKey, OptionKind, SchemaEntry, Visibility, SCHEMA};
pub use validate::{PackageManager, PackageManagerProbe, SystemProbe, Validator};
