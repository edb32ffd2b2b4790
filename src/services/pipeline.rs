use super::enrich::MetadataEnricher;
use super::load_order::{LoadOrderError, read_load_order};
use super::render::HtmlRenderer;
use super::writer::{WriteError, write_document};
use crate::models::RunConfig;
use camino::Utf8PathBuf;
use thiserror::Error;

/// Fatal run failures. Everything else is logged and skipped.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error(transparent)]
    LoadOrder(#[from] LoadOrderError),

    #[error(transparent)]
    Write(#[from] WriteError),
}

/// Counters for a completed run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub entries: usize,
    pub separators: usize,
    pub linked: usize,
    pub unlinked: usize,
    /// Mods whose metadata could not be used
    pub metadata_warnings: usize,
    pub output_path: Utf8PathBuf,
}

impl RunSummary {
    pub fn summary(&self) -> String {
        format!(
            "{} entries ({} separators, {} linked, {} unlinked), {} metadata warnings",
            self.entries, self.separators, self.linked, self.unlinked, self.metadata_warnings
        )
    }
}

/// Read the load order, enrich it, render it and write the page.
///
/// # Errors
///
/// Fails only if the load order cannot be read or the output cannot be
/// written. Both are logged before returning.
pub fn run(config: &RunConfig) -> Result<RunSummary, PipelineError> {
    let load_order_path = config.load_order_path();

    let entries = {
        let _span = tracing::info_span!("load_order").entered();
        read_load_order(&load_order_path).inspect_err(|e| tracing::error!("{}", e))?
    };

    let enrichment = {
        let _span = tracing::info_span!("metadata").entered();
        MetadataEnricher::new(config).enrich(entries)
    };

    let page = {
        let _span = tracing::info_span!("render").entered();
        HtmlRenderer::new(config).render(&enrichment.entries)
    };

    let output_path = config.output_html_path();
    {
        let _span = tracing::info_span!("write").entered();
        write_document(&output_path, &page.html).inspect_err(|e| tracing::error!("{}", e))?;
    }

    let summary = RunSummary {
        entries: page.total_entries(),
        separators: page.separators,
        linked: page.linked,
        unlinked: page.unlinked,
        metadata_warnings: enrichment.warnings,
        output_path,
    };

    tracing::info!(
        "Generated HTML for {} with {} entries",
        config.modlist,
        summary.entries
    );
    tracing::debug!("Run summary: {}", summary.summary());

    Ok(summary)
}
