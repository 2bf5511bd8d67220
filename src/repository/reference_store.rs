//! In-memory reference store loaded from the bias strategies CSV.

use std::collections::HashSet;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::models::{BiasRecord, DATASET_HEADER};

/// Errors raised while loading the reference table.
///
/// Every variant is fatal at startup: the server does not run without a
/// well-formed table.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Failed to open dataset '{}': {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed dataset: {0}")]
    Csv(#[from] csv::Error),

    #[error("Unexpected dataset header: expected '{expected}', found '{found}'")]
    Header { expected: String, found: String },

    #[error("Line {line}: bias type is empty")]
    EmptyBiasType { line: usize },

    #[error("Line {line}: duplicate bias type '{bias_type}'")]
    DuplicateBiasType { line: usize, bias_type: String },
}

/// Ordered, immutable table of bias records.
#[derive(Debug, Clone)]
pub struct ReferenceStore {
    records: Vec<BiasRecord>,
}

impl ReferenceStore {
    /// Load the table from a CSV file on disk.
    pub fn load(path: &Path) -> Result<Self, StoreError> {
        let file = File::open(path).map_err(|source| StoreError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        let store = Self::from_reader(file)?;
        tracing::debug!(
            "Loaded {} bias records from {}",
            store.len(),
            path.display()
        );
        Ok(store)
    }

    /// Parse the table from any CSV source.
    ///
    /// The header must match [`DATASET_HEADER`] exactly and every row must
    /// have three fields.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, StoreError> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(reader);

        let headers = reader.headers()?.clone();
        if headers.iter().ne(DATASET_HEADER.iter().copied()) {
            return Err(StoreError::Header {
                expected: DATASET_HEADER.join(","),
                found: headers.iter().collect::<Vec<_>>().join(","),
            });
        }

        let records = reader
            .deserialize::<BiasRecord>()
            .collect::<Result<Vec<_>, _>>()?;

        Self::from_records(records)
    }

    /// Build a store from records already in memory.
    pub fn from_records(records: Vec<BiasRecord>) -> Result<Self, StoreError> {
        let mut seen = HashSet::with_capacity(records.len());

        for (idx, record) in records.iter().enumerate() {
            // Line 1 is the header row.
            let line = idx + 2;
            if record.bias_type.trim().is_empty() {
                return Err(StoreError::EmptyBiasType { line });
            }
            if !seen.insert(record.bias_type.as_str()) {
                return Err(StoreError::DuplicateBiasType {
                    line,
                    bias_type: record.bias_type.clone(),
                });
            }
        }

        Ok(Self { records })
    }

    /// All records in file order.
    pub fn records(&self) -> &[BiasRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records whose bias type contains `query`, ignoring case, in file order.
    pub fn matching<'a>(&'a self, query: &str) -> impl Iterator<Item = &'a BiasRecord> + 'a {
        let folded = query.to_lowercase();
        self.records
            .iter()
            .filter(move |record| record.matches_folded(&folded))
    }
}
