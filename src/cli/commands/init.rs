//! Initialize command.

use console::style;

use crate::config::Settings;
use crate::seed::ensure_seeded;

/// Write the default dataset and page if they are missing.
pub fn cmd_init(settings: &Settings) -> anyhow::Result<()> {
    let report = ensure_seeded(settings)?;

    let files = [
        (settings.dataset_path(), report.dataset_created),
        (settings.index_page_path(), report.page_created),
    ];
    for (path, created) in files {
        if created {
            println!("  {} Created {}", style("✓").green(), path.display());
        } else {
            println!("  {} Kept existing {}", style("-").dim(), path.display());
        }
    }

    println!(
        "{} Initialized biascheck in {}",
        style("✓").green(),
        settings.data_dir.display()
    );

    Ok(())
}
