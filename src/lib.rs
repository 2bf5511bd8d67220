//! biascheck - lookup of machine learning bias types.
//!
//! Keeps a small reference table mapping bias types to a detection method
//! and a mitigation strategy, and serves a case-insensitive substring search
//! over it through a web page and the command line.

pub mod cli;
pub mod config;
pub mod models;
pub mod repository;
pub mod seed;
pub mod server;
pub mod services;
