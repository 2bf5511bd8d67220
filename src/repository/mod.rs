//! Repository layer for the bias reference table.
//!
//! The table lives in a flat CSV file and is loaded once into memory.
//! There is no write path: the store is read-only after construction.

mod reference_store;

pub use reference_store::{ReferenceStore, StoreError};
