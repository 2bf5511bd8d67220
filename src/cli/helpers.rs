//! Shared helper functions for CLI commands.

use console::style;

use crate::config::Settings;
use crate::models::BiasRecord;
use crate::repository::ReferenceStore;
use crate::seed::ensure_seeded;
use crate::services::LookupService;

/// Seed missing files, then load the reference table.
pub fn open_lookup(settings: &Settings) -> anyhow::Result<LookupService> {
    ensure_seeded(settings)?;
    let store = ReferenceStore::load(&settings.dataset_path())?;
    Ok(LookupService::new(store))
}

/// Print records as an indented list, or as a JSON array.
pub fn print_records(records: &[BiasRecord], json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(records)?);
        return Ok(());
    }

    for record in records {
        if record.is_not_found() {
            println!(
                "{} {} ({})",
                style("!").yellow(),
                record.bias_type,
                record.mitigation_strategy
            );
            continue;
        }
        println!("{}", style(&record.bias_type).bold());
        println!("  {} {}", style("detect:").dim(), record.detection_method);
        println!("  {} {}", style("mitigate:").dim(), record.mitigation_strategy);
    }

    Ok(())
}
