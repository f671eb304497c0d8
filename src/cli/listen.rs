//! Listen command implementation
//!
//! The speech-recognition engine is an external collaborator: whatever
//! produces finalized utterances can pipe them here, one per line. Each
//! line runs through the full interpretation pipeline and, when it
//! resolves, is dispatched through the system launcher.

use std::io::BufRead;
use std::path::Path;
use std::sync::Arc;
use std::sync::mpsc;

use anyhow::Result;

use voxlaunch::domain::Action;
use voxlaunch::engine::Interpreter;
use voxlaunch::launcher::{self, SystemLauncher};
use voxlaunch::registry::AppRegistry;

use super::print_events;

/// Read utterances line-by-line from stdin until EOF or an exit command.
pub async fn listen_command(apps_file: &Path) -> Result<()> {
    let registry = Arc::new(AppRegistry::new());
    let count = registry.load_file(apps_file);
    println!("Loaded {count} applications. Say 'help' for commands, 'quit' to exit.");

    let (events_tx, events_rx) = mpsc::channel();
    let interpreter = Interpreter::new(registry.clone(), events_tx.clone());
    let launcher = SystemLauncher;

    let stdin = std::io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let action = interpreter.interpret(&line);
        if let Some(action) = &action {
            launcher::dispatch(action, &registry, &launcher, &events_tx);
        }
        print_events(&events_rx);

        if action == Some(Action::Exit) {
            break;
        }
    }

    Ok(())
}
