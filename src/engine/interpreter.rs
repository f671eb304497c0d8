//! Per-utterance orchestration.
//!
//! One `interpret` call takes a raw recognized utterance through the
//! whole pipeline: normalize, correct, classify, resolve. It is
//! synchronous, performs no I/O and never blocks; its only side effects
//! are registry lookups and the trace events sent out the channel.

use std::sync::Arc;
use std::sync::mpsc::Sender;

use crate::domain::{Action, TraceEvent};
use crate::registry::AppRegistry;

use super::{corrections, router};

/// The command interpretation engine.
pub struct Interpreter {
    registry: Arc<AppRegistry>,
    events: Sender<TraceEvent>,
}

impl Interpreter {
    /// Create an interpreter over a registry, emitting trace events on
    /// the given channel.
    pub fn new(registry: Arc<AppRegistry>, events: Sender<TraceEvent>) -> Self {
        Self { registry, events }
    }

    /// The registry this interpreter resolves launches against.
    pub fn registry(&self) -> &AppRegistry {
        &self.registry
    }

    /// Interpret one utterance.
    ///
    /// Returns `Some(action)` when the utterance resolved to something
    /// dispatchable, `None` when it ended in an input error or an
    /// unresolved launch - in both cases the explaining events have
    /// already been emitted. Errors never carry over to the next call.
    pub fn interpret(&self, raw: &str) -> Option<Action> {
        self.emit(TraceEvent::heard(format!("\"{raw}\"")));

        let normalized = raw.to_lowercase().trim().to_string();
        let corrected = corrections::apply(&normalized);
        if corrected != normalized {
            self.emit(TraceEvent::corrected(format!("\"{corrected}\"")));
        }

        router::route(&corrected, raw, &self.registry, &self.events)
    }

    fn emit(&self, event: TraceEvent) {
        // The presentation side may have hung up; that is not our problem.
        let _ = self.events.send(event);
    }
}
