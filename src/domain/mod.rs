//! Core domain types for voxlaunch

mod action;
mod trace_event;

pub use action::{Action, Browser, MatchResult};
pub use trace_event::{TraceEvent, TraceEventKind};
