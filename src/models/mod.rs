//! Data models for modlist-html.
//!
//! - [`LoadOrderEntry`]: one retained line of `modlist.txt`, either a mod or a separator
//! - [`ModMetadata`]: the Nexus identifiers read from a mod's `meta.ini`
//! - [`EnrichedEntry`]: a load order entry joined with its metadata, if any was found
//! - [`RunConfig`]: parameters for a run (instance location, titles, output directory)
//!
//! All models are built fresh on every run; only [`RunConfig`] is serializable.

pub mod config;
pub mod load_order;
pub mod metadata;

pub use self::config::{Game, InstanceLayout, RunConfig};
pub use self::load_order::{EnrichedEntry, EntryKind, LoadOrderEntry, Marker, SEPARATOR_SUFFIX};
pub use self::metadata::ModMetadata;
