//! Audio capture and speech-engine boundary.
//!
//! Both the audio device and the recognizer are black boxes behind
//! traits: the device blocks delivering PCM frames, the engine consumes
//! frames and occasionally yields a finalized utterance string. The
//! [`Listener`] runs them on a background worker and delivers utterances
//! over a bounded channel; a [`StopToken`] gives cooperative cancellation
//! observed within one frame read.
//!
//! This is the embedding surface for hosts that own a real microphone
//! and recognizer (a GUI shell, a daemon wrapping an offline model):
//! they implement the two traits and feed the utterance channel into
//! [`Interpreter::interpret`]. The shipped CLI instead takes already
//! finalized utterances on stdin, so it never constructs a `Listener`.
//!
//! [`Interpreter::interpret`]: crate::engine::Interpreter::interpret

mod listener;

use anyhow::Result;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

pub use listener::Listener;

/// A source of raw PCM audio frames (typically a microphone).
///
/// `read_frame` blocks until samples are available and returns how many
/// were written into `buf`. Returning `Ok(0)` means the source is
/// exhausted and the capture loop should end.
pub trait AudioSource: Send + 'static {
    fn read_frame(&mut self, buf: &mut [i16]) -> Result<usize>;
}

/// A speech-recognition engine consuming audio frames.
///
/// Feeding a frame may complete an utterance; in that case the finalized
/// text is returned. Partial results are not surfaced.
pub trait SpeechEngine: Send + 'static {
    fn accept_frame(&mut self, samples: &[i16]) -> Result<Option<String>>;
}

/// Cooperative cancellation handle shared with the capture worker.
#[derive(Debug, Clone, Default)]
pub struct StopToken {
    stopped: Arc<AtomicBool>,
}

impl StopToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request the worker to stop. Idempotent.
    pub fn stop(&self) {
        self.stopped.store(true, Ordering::Release);
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped.load(Ordering::Acquire)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stop_token_is_idempotent() {
        let token = StopToken::new();
        assert!(!token.is_stopped());
        token.stop();
        token.stop();
        assert!(token.is_stopped());

        let clone = token.clone();
        assert!(clone.is_stopped());
    }
}
