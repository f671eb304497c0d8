//! Apps command implementation

use std::path::Path;

use anyhow::Result;

use voxlaunch::registry::read_entries;

/// List the applications in the apps file.
pub async fn apps_command(apps_file: &Path) -> Result<()> {
    let entries = read_entries(apps_file)?;

    if entries.is_empty() {
        println!("No applications registered in {}.", apps_file.display());
        return Ok(());
    }

    println!("{} application(s) in {}:\n", entries.len(), apps_file.display());
    for entry in &entries {
        println!("  {} -> {}", entry.name.to_lowercase(), entry.path);
    }

    Ok(())
}
