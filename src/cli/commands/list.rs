//! List command.

use crate::cli::helpers::{open_lookup, print_records};
use crate::config::Settings;

/// Print the whole reference table in file order.
pub fn cmd_list(settings: &Settings, json: bool) -> anyhow::Result<()> {
    let lookup = open_lookup(settings)?;
    print_records(lookup.store().records(), json)
}
