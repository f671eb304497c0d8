//! Injected launch capabilities and action dispatch.
//!
//! The engine only decides *what* to do; performing it is delegated to a
//! [`Launcher`]: launching an executable by path and opening a URL in
//! the default browser. [`dispatch`] bridges the two, turning a resolved
//! [`Action`] into capability calls and Success/Error events.

use std::process::{Command, Stdio};
use std::sync::mpsc::Sender;

use thiserror::Error;
use tracing::info;

use crate::domain::{Action, TraceEvent};
use crate::registry::AppRegistry;

/// Failure at the launch boundary.
#[derive(Debug, Error)]
pub enum LaunchError {
    #[error("failed to launch '{path}': {source}")]
    Spawn {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to open url '{url}': {source}")]
    OpenUrl {
        url: String,
        #[source]
        source: std::io::Error,
    },
}

/// Capabilities the host injects: process spawning and URL opening.
pub trait Launcher: Send + Sync {
    /// Launch an executable by path.
    fn launch(&self, path: &str) -> Result<(), LaunchError>;

    /// Open a URL with the system's default handler.
    fn open_url(&self, url: &str) -> Result<(), LaunchError>;
}

/// The real OS-level launcher.
#[derive(Debug, Default)]
pub struct SystemLauncher;

impl Launcher for SystemLauncher {
    fn launch(&self, path: &str) -> Result<(), LaunchError> {
        info!(path = %path, "spawning application");
        Command::new(path)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map(|_| ())
            .map_err(|source| LaunchError::Spawn {
                path: path.to_string(),
                source,
            })
    }

    fn open_url(&self, url: &str) -> Result<(), LaunchError> {
        info!(url = %url, "opening url");
        let mut command = url_open_command(url);
        command
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map(|_| ())
            .map_err(|source| LaunchError::OpenUrl {
                url: url.to_string(),
                source,
            })
    }
}

#[cfg(target_os = "macos")]
fn url_open_command(url: &str) -> Command {
    let mut command = Command::new("open");
    command.arg(url);
    command
}

#[cfg(target_os = "windows")]
fn url_open_command(url: &str) -> Command {
    let mut command = Command::new("cmd");
    command.args(["/C", "start", "", url]);
    command
}

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
fn url_open_command(url: &str) -> Command {
    let mut command = Command::new("xdg-open");
    command.arg(url);
    command
}

/// Lines rendered for the help action.
pub const HELP_LINES: [&str; 6] = [
    "Available voice commands:",
    "  'open <app>' - Launch an application",
    "  'launch <app>' / 'start <app>' - Launch an application (alternative)",
    "  'search for <query> in <browser>' - Search the web",
    "  'list apps' - Show all available apps",
    "  'help' - Show this help message",
];

/// Perform a resolved action, emitting the outcome as events.
///
/// Collaborator failures are surfaced verbatim as error events and never
/// escape; one failed dispatch does not affect the next utterance.
pub fn dispatch(
    action: &Action,
    registry: &AppRegistry,
    launcher: &dyn Launcher,
    events: &Sender<TraceEvent>,
) {
    match action {
        Action::LaunchApp { name } => match registry.lookup(name) {
            Some(path) => match launcher.launch(&path) {
                Ok(()) => {
                    let _ = events.send(TraceEvent::success(format!("Launched: {name}")));
                }
                Err(e) => {
                    let _ = events.send(TraceEvent::error(format!("Failed to launch: {e}")));
                }
            },
            None => {
                // registry changed between resolution and dispatch
                let _ = events.send(TraceEvent::error(format!("Application not found: {name}")));
            }
        },
        Action::BrowserSearch { browser, url, .. } => match launcher.open_url(url) {
            Ok(()) => {
                let _ = events.send(TraceEvent::success(format!(
                    "Opened {browser} with search results"
                )));
            }
            Err(e) => {
                let _ = events.send(TraceEvent::error(format!("Failed to open browser: {e}")));
            }
        },
        Action::ListApps => {
            let _ = events.send(TraceEvent::info("Available applications:"));
            for name in registry.all_names() {
                let _ = events.send(TraceEvent::info(format!("  - {name}")));
            }
        }
        Action::ShowHelp => {
            for line in HELP_LINES {
                let _ = events.send(TraceEvent::help(line));
            }
        }
        Action::Exit => {
            let _ = events.send(TraceEvent::info("Exiting voice session"));
        }
        Action::Unrecognized { .. } => {
            // the router already emitted the warning and hint
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;
    use std::sync::mpsc;

    use super::*;
    use crate::domain::{Browser, TraceEventKind};
    use crate::registry::AppEntry;

    /// Records calls instead of touching the OS.
    #[derive(Default)]
    struct RecordingLauncher {
        launched: Mutex<Vec<String>>,
        opened: Mutex<Vec<String>>,
        fail: bool,
    }

    impl Launcher for RecordingLauncher {
        fn launch(&self, path: &str) -> Result<(), LaunchError> {
            if self.fail {
                return Err(LaunchError::Spawn {
                    path: path.to_string(),
                    source: std::io::Error::other("boom"),
                });
            }
            self.launched.lock().unwrap().push(path.to_string());
            Ok(())
        }

        fn open_url(&self, url: &str) -> Result<(), LaunchError> {
            self.opened.lock().unwrap().push(url.to_string());
            Ok(())
        }
    }

    fn registry() -> AppRegistry {
        let registry = AppRegistry::new();
        registry.load(vec![AppEntry {
            name: "calculator".to_string(),
            path: "/usr/bin/calc".to_string(),
        }]);
        registry
    }

    #[test]
    fn test_launch_resolves_path_and_reports_success() {
        let launcher = RecordingLauncher::default();
        let (tx, rx) = mpsc::channel();
        let action = Action::LaunchApp {
            name: "calculator".to_string(),
        };

        dispatch(&action, &registry(), &launcher, &tx);

        assert_eq!(*launcher.launched.lock().unwrap(), vec!["/usr/bin/calc"]);
        let events: Vec<TraceEvent> = rx.try_iter().collect();
        assert!(events.iter().any(|e| e.kind == TraceEventKind::Success));
    }

    #[test]
    fn test_launch_failure_is_reported_not_fatal() {
        let launcher = RecordingLauncher {
            fail: true,
            ..Default::default()
        };
        let (tx, rx) = mpsc::channel();
        let action = Action::LaunchApp {
            name: "calculator".to_string(),
        };

        dispatch(&action, &registry(), &launcher, &tx);

        let events: Vec<TraceEvent> = rx.try_iter().collect();
        assert!(events.iter().any(|e| e.kind == TraceEventKind::Error));
    }

    #[test]
    fn test_browser_search_opens_url() {
        let launcher = RecordingLauncher::default();
        let (tx, _rx) = mpsc::channel();
        let action = Action::BrowserSearch {
            browser: Browser::Chrome,
            query: "cute cats".to_string(),
            url: "https://www.google.com/search?q=cute+cats".to_string(),
        };

        dispatch(&action, &registry(), &launcher, &tx);

        assert_eq!(
            *launcher.opened.lock().unwrap(),
            vec!["https://www.google.com/search?q=cute+cats"]
        );
    }

    #[test]
    fn test_list_apps_emits_one_line_per_app() {
        let launcher = RecordingLauncher::default();
        let (tx, rx) = mpsc::channel();

        dispatch(&Action::ListApps, &registry(), &launcher, &tx);

        let infos: Vec<TraceEvent> = rx
            .try_iter()
            .filter(|e| e.kind == TraceEventKind::Info)
            .collect();
        // header plus one line
        assert_eq!(infos.len(), 2);
        assert!(infos[1].message.contains("calculator"));
    }
}
