use super::meta_ini::{MetadataError, MetadataReader};
use crate::models::{EnrichedEntry, LoadOrderEntry, ModMetadata, RunConfig};
use indexmap::IndexMap;
use std::collections::HashSet;

/// Metadata found for each mod name, in load order.
pub type ModIndex = IndexMap<String, ModMetadata>;

/// Result of enriching a load order.
#[derive(Debug, Clone, Default)]
pub struct Enrichment {
    pub entries: Vec<EnrichedEntry>,
    /// Mods whose `meta.ini` was missing, incomplete or unreadable
    pub warnings: usize,
}

/// Joins load order entries with the identifiers in each mod's `meta.ini`.
pub struct MetadataEnricher<'a> {
    config: &'a RunConfig,
    reader: MetadataReader,
}

impl<'a> MetadataEnricher<'a> {
    pub fn new(config: &'a RunConfig) -> Self {
        Self {
            config,
            reader: MetadataReader::new(),
        }
    }

    /// Read the `meta.ini` of every mod entry and index the complete ones by name.
    ///
    /// Returns the index and the number of mods that could not be indexed.
    pub fn build_index(&self, entries: &[LoadOrderEntry]) -> (ModIndex, usize) {
        let mut index = ModIndex::new();
        let mut seen = HashSet::new();
        let mut warnings = 0;

        for entry in entries.iter().filter(|e| !e.is_separator()) {
            if !seen.insert(entry.name.as_str()) {
                continue;
            }

            let meta_path = self.config.meta_ini_path(&entry.name);
            match self.reader.read(&meta_path) {
                Ok(metadata) => {
                    tracing::info!(
                        "Indexed mod: {}, ModID={}, FileID={}",
                        entry.name,
                        metadata.mod_id,
                        metadata.file_id
                    );
                    index.insert(entry.name.clone(), metadata);
                }
                Err(MetadataError::NotFound(path)) => {
                    tracing::warn!("meta.ini not found for mod: {} at {}", entry.name, path);
                    warnings += 1;
                }
                Err(e @ MetadataError::MissingFields(_)) => {
                    tracing::warn!("{}", e);
                    warnings += 1;
                }
                Err(e @ MetadataError::Io { .. }) => {
                    tracing::error!("{}", e);
                    warnings += 1;
                }
            }
        }

        (index, warnings)
    }

    /// Attach indexed metadata to each entry by exact name match.
    pub fn enrich(&self, entries: Vec<LoadOrderEntry>) -> Enrichment {
        let (index, warnings) = self.build_index(&entries);

        let entries = entries
            .into_iter()
            .map(|entry| {
                let metadata = if entry.is_separator() {
                    None
                } else {
                    index.get(&entry.name).cloned()
                };
                EnrichedEntry { entry, metadata }
            })
            .collect();

        Enrichment { entries, warnings }
    }
}
