//! Interpret command implementation

use std::path::Path;
use std::sync::Arc;
use std::sync::mpsc;

use anyhow::Result;

use voxlaunch::engine::Interpreter;
use voxlaunch::launcher::{self, SystemLauncher};
use voxlaunch::registry::AppRegistry;

use super::print_events;

/// Interpret a single utterance and perform the resulting action.
///
/// With `dry_run` the action is printed as JSON instead of executed.
pub async fn interpret_command(apps_file: &Path, text: &str, dry_run: bool) -> Result<()> {
    let registry = Arc::new(AppRegistry::new());
    registry.load_file(apps_file);

    let (events_tx, events_rx) = mpsc::channel();
    let interpreter = Interpreter::new(registry.clone(), events_tx.clone());

    let action = interpreter.interpret(text);
    match &action {
        Some(action) if dry_run => {
            print_events(&events_rx);
            println!("{}", serde_json::to_string_pretty(action)?);
        }
        Some(action) => {
            launcher::dispatch(action, &registry, &SystemLauncher, &events_tx);
            print_events(&events_rx);
        }
        None => {
            print_events(&events_rx);
        }
    }

    Ok(())
}
