//! Service layer for biascheck business logic.
//!
//! Services are shared by the CLI and the web server.

pub mod lookup;

pub use lookup::LookupService;
