//! Services module - the modlist-to-HTML pipeline.
//!
//! Each stage is a plain synchronous function or a small struct borrowing the
//! [`RunConfig`](crate::models::RunConfig):
//!
//! 1. [`read_load_order`]: reads `modlist.txt`, drops blank and `#` lines,
//!    reverses the order and classifies separators
//! 2. [`MetadataEnricher`]: reads each mod's `meta.ini` and joins the Nexus
//!    identifiers onto the entries by exact name
//! 3. [`HtmlRenderer`]: renders the list-group page, escaping all text
//! 4. [`write_document`]: writes the page to the output directory
//!
//! [`run`] chains the stages. Only an unreadable load order or an unwritable
//! output is fatal; metadata problems are logged and the mod is left unlinked.
//!
//! ```ignore
//! use modlist_html::models::RunConfig;
//! use modlist_html::services::run;
//!
//! let summary = run(&RunConfig::default())?;
//! println!("{}", summary.summary());
//! ```

pub mod enrich;
pub mod load_order;
pub mod meta_ini;
pub mod pipeline;
pub mod render;
pub mod writer;

pub use enrich::{Enrichment, MetadataEnricher, ModIndex};
pub use load_order::{LoadOrderError, parse_load_order, read_load_order};
pub use meta_ini::{MetaIni, MetadataError, MetadataReader};
pub use pipeline::{PipelineError, RunSummary, run};
pub use render::{HtmlRenderer, RenderedPage, html_escape};
pub use writer::{WriteError, write_document};
