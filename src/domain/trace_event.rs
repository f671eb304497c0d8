use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The kind of trace event emitted while processing an utterance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TraceEventKind {
    /// An utterance was received from the speech engine
    Heard,
    /// The correction table changed the utterance
    Corrected,
    /// The engine decided on an action
    Action,
    /// Fuzzy matching substituted a close registry name
    SmartMatch,
    /// Something went wrong (input error or collaborator failure)
    Error,
    /// A hint for the user (e.g., the list of known apps)
    Hint,
    /// A collaborator reported success
    Success,
    /// Non-fatal condition (e.g., capture already running)
    Warning,
    /// General status information
    Info,
    /// A line of the help text
    Help,
}

impl std::fmt::Display for TraceEventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TraceEventKind::Heard => write!(f, "HEARD"),
            TraceEventKind::Corrected => write!(f, "CORRECTED"),
            TraceEventKind::Action => write!(f, "ACTION"),
            TraceEventKind::SmartMatch => write!(f, "SMART MATCH"),
            TraceEventKind::Error => write!(f, "ERROR"),
            TraceEventKind::Hint => write!(f, "HINT"),
            TraceEventKind::Success => write!(f, "SUCCESS"),
            TraceEventKind::Warning => write!(f, "WARNING"),
            TraceEventKind::Info => write!(f, "INFO"),
            TraceEventKind::Help => write!(f, "HELP"),
        }
    }
}

/// A trace event from command interpretation
///
/// The engine defines only the kind and payload; how events are rendered
/// (log pane, console, notification) is the presentation layer's concern.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TraceEvent {
    /// When this event occurred
    pub timestamp: DateTime<Utc>,

    /// The kind of event
    pub kind: TraceEventKind,

    /// Human-readable message
    pub message: String,
}

impl TraceEvent {
    /// Create a new trace event
    pub fn new(kind: TraceEventKind, message: impl Into<String>) -> Self {
        Self {
            timestamp: Utc::now(),
            kind,
            message: message.into(),
        }
    }

    /// Create a heard event
    pub fn heard(message: impl Into<String>) -> Self {
        Self::new(TraceEventKind::Heard, message)
    }

    /// Create a corrected event
    pub fn corrected(message: impl Into<String>) -> Self {
        Self::new(TraceEventKind::Corrected, message)
    }

    /// Create an action event
    pub fn action(message: impl Into<String>) -> Self {
        Self::new(TraceEventKind::Action, message)
    }

    /// Create a smart-match event
    pub fn smart_match(message: impl Into<String>) -> Self {
        Self::new(TraceEventKind::SmartMatch, message)
    }

    /// Create an error event
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(TraceEventKind::Error, message)
    }

    /// Create a hint event
    pub fn hint(message: impl Into<String>) -> Self {
        Self::new(TraceEventKind::Hint, message)
    }

    /// Create a success event
    pub fn success(message: impl Into<String>) -> Self {
        Self::new(TraceEventKind::Success, message)
    }

    /// Create a warning event
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(TraceEventKind::Warning, message)
    }

    /// Create an info event
    pub fn info(message: impl Into<String>) -> Self {
        Self::new(TraceEventKind::Info, message)
    }

    /// Create a help event
    pub fn help(message: impl Into<String>) -> Self {
        Self::new(TraceEventKind::Help, message)
    }
}
