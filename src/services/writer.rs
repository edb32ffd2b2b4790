use camino::{Utf8Path, Utf8PathBuf};
use std::fs;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WriteError {
    #[error("Failed to create output directory {path}: {source}")]
    CreateDir {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Error writing {path}: {source}")]
    Write {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Write a rendered document, creating the parent directory if needed.
pub fn write_document(path: &Utf8Path, contents: &str) -> Result<(), WriteError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_str().is_empty()) {
        if !parent.exists() {
            fs::create_dir_all(parent).map_err(|source| WriteError::CreateDir {
                path: parent.to_path_buf(),
                source,
            })?;
            tracing::debug!("Created output directory: {}", parent);
        }
    }

    fs::write(path, contents).map_err(|source| WriteError::Write {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::info!("Saved HTML to {}", path);
    Ok(())
}
