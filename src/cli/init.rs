//! Init command implementation

use std::path::Path;

use anyhow::{Result, bail};
use tracing::info;

use voxlaunch::config::Settings;
use voxlaunch::registry::{AppEntry, write_entries};

/// Write a starter apps file and the default global config.
pub async fn init_command(apps_file: &Path, force: bool) -> Result<()> {
    if apps_file.exists() && !force {
        bail!(
            "{} already exists - use --force to overwrite",
            apps_file.display()
        );
    }

    write_entries(apps_file, &starter_entries())?;
    info!("wrote starter apps file: {}", apps_file.display());
    println!("Created {} - edit it to register your applications.", apps_file.display());

    let config_path = Settings::global_config_path();
    if !config_path.exists() {
        Settings::default().save_to_file(&config_path)?;
        println!("Created {}.", config_path.display());
    }

    Ok(())
}

#[cfg(target_os = "windows")]
fn starter_entries() -> Vec<AppEntry> {
    vec![
        entry("Calculator", "C:/Windows/System32/calc.exe"),
        entry("Notepad", "C:/Windows/System32/notepad.exe"),
    ]
}

#[cfg(target_os = "macos")]
fn starter_entries() -> Vec<AppEntry> {
    vec![
        entry("Calculator", "/System/Applications/Calculator.app/Contents/MacOS/Calculator"),
        entry("Notes", "/System/Applications/Notes.app/Contents/MacOS/Notes"),
    ]
}

#[cfg(not(any(target_os = "windows", target_os = "macos")))]
fn starter_entries() -> Vec<AppEntry> {
    vec![
        entry("Calculator", "/usr/bin/gnome-calculator"),
        entry("Notepad", "/usr/bin/gedit"),
    ]
}

fn entry(name: &str, path: &str) -> AppEntry {
    AppEntry {
        name: name.to_string(),
        path: path.to_string(),
    }
}
