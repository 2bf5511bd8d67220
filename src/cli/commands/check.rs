//! Check command.

use crate::cli::helpers::{open_lookup, print_records};
use crate::config::Settings;

/// Run a lookup from the terminal.
pub fn cmd_check(settings: &Settings, query: &str, json: bool) -> anyhow::Result<()> {
    let lookup = open_lookup(settings)?;
    print_records(&lookup.search(query), json)
}
