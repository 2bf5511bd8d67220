//! Data models for biascheck.

mod bias_record;

pub use bias_record::{BiasRecord, DATASET_HEADER};
