//! Console rendering of trace events.

use std::sync::mpsc::Receiver;

use voxlaunch::domain::TraceEvent;

/// Render one event the way the log pane shows it.
pub fn render(event: &TraceEvent) -> String {
    format!("[{}] {}", event.kind, event.message)
}

/// Print everything currently queued on the event channel.
pub fn print_events(events: &Receiver<TraceEvent>) {
    for event in events.try_iter() {
        println!("{}", render(&event));
    }
}
