//! Intent routing: ordered, first-match-wins classification.
//!
//! The router is a deliberately simple state-free classifier over the
//! corrected command string. Rule order is load-bearing: the browser
//! search rule runs before the "open " prefix rule so that
//! "open chrome and search for cats" becomes a search instead of a
//! doomed launch of an app literally named "chrome and search for cats".

use std::sync::mpsc::Sender;

use crate::domain::{Action, Browser, TraceEvent};
use crate::registry::AppRegistry;

use super::{browser, fuzzy};

/// Phrases that end the session, matched exactly.
const EXIT_COMMANDS: [&str; 4] = ["exit", "quit", "close", "stop"];

/// Launch-command prefixes and the rule split between them: "open" also
/// admits the browser-search sub-case, "launch" and "start" do not.
const OPEN_PREFIX: &str = "open";
const LAUNCH_PREFIXES: [&str; 2] = ["launch", "start"];

/// Map a corrected command to at most one action.
///
/// `raw` is the original utterance, carried into `Unrecognized` for
/// diagnostics. Returns `None` when the utterance ended in an input
/// error or an unresolved launch; the events explaining why have
/// already been emitted.
pub fn route(
    command: &str,
    raw: &str,
    registry: &AppRegistry,
    events: &Sender<TraceEvent>,
) -> Option<Action> {
    // Rule 1: exact exit commands.
    if EXIT_COMMANDS.contains(&command) {
        let _ = events.send(TraceEvent::action("Exit command received"));
        return Some(Action::Exit);
    }

    // Rule 2: browser search anywhere in the phrase. Checked before the
    // prefix rules on purpose.
    if command.contains("search") && Browser::detect(command).is_some() {
        return route_search(command, events);
    }

    // Rule 3: "open <app>", with the browser-search sub-case.
    if let Some(name) = strip_command_prefix(command, OPEN_PREFIX) {
        if name.is_empty() {
            let _ = events.send(TraceEvent::error("No application name specified"));
            return None;
        }
        if Browser::detect(name).is_some() && name.contains("search") {
            return route_search(name, events);
        }
        return resolve_launch(name, registry, events);
    }

    // Rule 4: "launch <app>" / "start <app>", no sub-case.
    for prefix in LAUNCH_PREFIXES {
        if let Some(name) = strip_command_prefix(command, prefix) {
            if name.is_empty() {
                let _ = events.send(TraceEvent::error("No application name specified"));
                return None;
            }
            return resolve_launch(name, registry, events);
        }
    }

    // Rule 5: list the registry.
    if command.contains("list") || command.contains("show") {
        return Some(Action::ListApps);
    }

    // Rule 6: help.
    if command.contains("help") {
        return Some(Action::ShowHelp);
    }

    // Rule 7: nothing matched.
    let _ = events.send(TraceEvent::warning(format!("Command not recognized: {raw}")));
    let _ = events.send(TraceEvent::hint("Say 'help' for available commands"));
    Some(Action::Unrecognized {
        raw: raw.to_string(),
    })
}

/// Strip a leading command word, accepting both "open calculator" and a
/// bare "open" (which yields an empty name, reported upstream as an
/// input error rather than an unrecognized command).
fn strip_command_prefix<'a>(command: &'a str, prefix: &str) -> Option<&'a str> {
    let rest = command.strip_prefix(prefix)?;
    if rest.is_empty() {
        return Some("");
    }
    rest.strip_prefix(' ').map(str::trim)
}

fn route_search(phrase: &str, events: &Sender<TraceEvent>) -> Option<Action> {
    match browser::parse(phrase) {
        Some(req) => {
            let _ = events.send(TraceEvent::action(format!(
                "Opening {} and searching for: {}",
                req.browser, req.query
            )));
            Some(Action::BrowserSearch {
                browser: req.browser,
                query: req.query,
                url: req.url,
            })
        }
        None => {
            let _ = events.send(TraceEvent::error("No search query specified"));
            None
        }
    }
}

/// Resolve an extracted name to a launchable registry entry.
///
/// Exact lookup first; on a miss, fall back to fuzzy matching and
/// auto-accept a close candidate. With no candidate the utterance ends
/// in an error plus a hint listing every registered name.
fn resolve_launch(
    name: &str,
    registry: &AppRegistry,
    events: &Sender<TraceEvent>,
) -> Option<Action> {
    let _ = events.send(TraceEvent::action(format!("Attempting to open: {name}")));

    if registry.lookup(name).is_some() {
        return Some(Action::LaunchApp {
            name: name.trim().to_lowercase(),
        });
    }

    let names = registry.all_names();
    let result = fuzzy::best_match(name, &names);
    if let Some(candidate) = result.candidate {
        let _ = events.send(TraceEvent::smart_match(format!("Did you mean: {candidate}?")));
        return Some(Action::LaunchApp { name: candidate });
    }

    let _ = events.send(TraceEvent::error(format!("Application not found: {name}")));
    let _ = events.send(TraceEvent::hint(format!(
        "Available apps: {}",
        names.join(", ")
    )));
    None
}
