//! First-run bootstrap of the reference dataset and the search page.
//!
//! Seeding is idempotent: a file that already exists is never rewritten,
//! so an edited dataset or page survives restarts.

mod dataset;

pub use dataset::{seed_records, SEED_ROWS};

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::config::Settings;

/// Default search page.
pub const INDEX_PAGE: &str = include_str!("index.html");

/// Errors raised while writing default content.
#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Failed to create directory '{}': {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to encode seed dataset: {0}")]
    Csv(#[from] csv::Error),
}

/// What a seeding run created.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub dataset_created: bool,
    pub page_created: bool,
}

impl SeedReport {
    /// Check if anything was written.
    pub fn created_any(&self) -> bool {
        self.dataset_created || self.page_created
    }
}

/// Write the default dataset and page wherever they are missing.
pub fn ensure_seeded(settings: &Settings) -> Result<SeedReport, SeedError> {
    let dataset_path = settings.dataset_path();
    let page_path = settings.index_page_path();

    let report = SeedReport {
        dataset_created: write_if_absent(&dataset_path, &render_seed_dataset()?)?,
        page_created: write_if_absent(&page_path, INDEX_PAGE.as_bytes())?,
    };

    if report.dataset_created {
        tracing::info!("Seeded default dataset at {}", dataset_path.display());
    }
    if report.page_created {
        tracing::info!("Seeded default page at {}", page_path.display());
    }

    Ok(report)
}

/// Encode the default dataset as CSV, header first.
///
/// The header comes from the record's serde field names.
pub fn render_seed_dataset() -> Result<Vec<u8>, SeedError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for record in seed_records() {
        writer.serialize(&record)?;
    }
    writer
        .into_inner()
        .map_err(|e| SeedError::Csv(io::Error::new(e.error().kind(), e.to_string()).into()))
}

/// Create `path` with `contents` unless it already exists.
///
/// Returns whether the file was created.
fn write_if_absent(path: &Path, contents: &[u8]) -> Result<bool, SeedError> {
    create_new_with(path, |file| file.write_all(contents))
}

/// Create `path` and fill it with `write`, unless it already exists.
///
/// Uses `create_new` so a file that appears between the check and the write
/// is left alone. A failed write removes the partial file, otherwise every
/// later run would treat it as already seeded.
fn create_new_with<F>(path: &Path, write: F) -> Result<bool, SeedError>
where
    F: FnOnce(&mut File) -> io::Result<()>,
{
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| SeedError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    let mut file = match OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
            tracing::debug!("{} already exists, leaving it as is", path.display());
            return Ok(false);
        }
        Err(source) => {
            return Err(SeedError::Write {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    if let Err(source) = write(&mut file).and_then(|()| file.sync_all()) {
        drop(file);
        if let Err(e) = fs::remove_file(path) {
            tracing::warn!("Failed to remove partial {}: {}", path.display(), e);
        }
        return Err(SeedError::Write {
            path: path.to_path_buf(),
            source,
        });
    }

    Ok(true)
}
