//! HTTP request handlers for the web server.

mod check;
mod pages;

pub use check::check_bias;
pub use pages::index;
