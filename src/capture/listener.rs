//! Background capture worker.

use std::sync::mpsc::{Receiver, Sender, SyncSender, TrySendError, sync_channel};
use std::thread::JoinHandle;
use std::time::Duration;

use tracing::debug;

use crate::domain::TraceEvent;

use super::{AudioSource, SpeechEngine, StopToken};

struct Worker {
    token: StopToken,
    handle: JoinHandle<()>,
}

/// Owns the capture worker thread and its cancellation token.
///
/// Utterances finalized by the speech engine are delivered over a
/// bounded channel returned from [`Listener::start`]; the interpretation
/// side consumes them at its own pace.
pub struct Listener {
    events: Sender<TraceEvent>,
    frame_samples: usize,
    queue_capacity: usize,
    worker: Option<Worker>,
}

impl Listener {
    pub fn new(events: Sender<TraceEvent>, frame_samples: usize, queue_capacity: usize) -> Self {
        Self {
            events,
            frame_samples,
            queue_capacity,
            worker: None,
        }
    }

    /// Start capturing. Returns the utterance channel, or `None` with a
    /// warning event when capture is already running.
    pub fn start(
        &mut self,
        source: impl AudioSource,
        engine: impl SpeechEngine,
    ) -> Option<Receiver<String>> {
        if self.is_running() {
            let _ = self
                .events
                .send(TraceEvent::warning("Voice capture is already running"));
            return None;
        }
        // reap a worker that ended on its own (source exhausted)
        self.join_worker();

        let (tx, rx) = sync_channel(self.queue_capacity);
        let token = StopToken::new();
        let handle = spawn_worker(
            source,
            engine,
            tx,
            token.clone(),
            self.events.clone(),
            self.frame_samples,
        );
        self.worker = Some(Worker { token, handle });

        let _ = self
            .events
            .send(TraceEvent::info("Microphone activated - speak clearly"));
        Some(rx)
    }

    /// Stop capturing and wait for the worker to finish.
    ///
    /// The stop request is observed within one frame read. Stopping an
    /// already-stopped listener is a no-op.
    pub fn stop(&mut self) {
        if let Some(worker) = &self.worker {
            worker.token.stop();
        }
        self.join_worker();
    }

    /// True while the capture worker is alive.
    pub fn is_running(&self) -> bool {
        self.worker
            .as_ref()
            .is_some_and(|w| !w.handle.is_finished())
    }

    fn join_worker(&mut self) {
        if let Some(worker) = self.worker.take() {
            let _ = worker.handle.join();
        }
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        self.stop();
    }
}

fn spawn_worker(
    mut source: impl AudioSource,
    mut engine: impl SpeechEngine,
    utterances: SyncSender<String>,
    token: StopToken,
    events: Sender<TraceEvent>,
    frame_samples: usize,
) -> JoinHandle<()> {
    std::thread::spawn(move || {
        let mut buf = vec![0i16; frame_samples];

        while !token.is_stopped() {
            match source.read_frame(&mut buf) {
                Ok(0) => break,
                Ok(n) => {
                    if token.is_stopped() {
                        break;
                    }
                    match engine.accept_frame(&buf[..n]) {
                        Ok(Some(text)) if !text.is_empty() => {
                            debug!(utterance = %text, "finalized utterance");
                            if !deliver(&utterances, text, &token) {
                                break;
                            }
                        }
                        Ok(_) => {}
                        Err(e) => {
                            let _ = events
                                .send(TraceEvent::error(format!("Error processing speech: {e:#}")));
                        }
                    }
                }
                Err(e) => {
                    // errors during shutdown are expected and not reported
                    if token.is_stopped() {
                        break;
                    }
                    let _ = events.send(TraceEvent::error(format!("Error reading audio: {e:#}")));
                }
            }
        }

        let _ = events.send(TraceEvent::info("Voice capture stopped"));
    })
}

/// How long to wait between delivery retries when the utterance queue
/// is full. Well below a frame-read interval, so a stop request is
/// still observed in time.
const QUEUE_RETRY_INTERVAL: Duration = Duration::from_millis(10);

/// Deliver an utterance without parking on a full queue.
///
/// A plain `send` would block with no way to observe the stop token;
/// instead, retry `try_send` and re-check the token between waits. A
/// stop request or a hung-up reader drops the utterance and returns
/// `false` to end the capture loop.
fn deliver(utterances: &SyncSender<String>, text: String, token: &StopToken) -> bool {
    let mut pending = text;
    loop {
        if token.is_stopped() {
            return false;
        }
        match utterances.try_send(pending) {
            Ok(()) => return true,
            Err(TrySendError::Full(text)) => {
                pending = text;
                std::thread::sleep(QUEUE_RETRY_INTERVAL);
            }
            Err(TrySendError::Disconnected(_)) => return false,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::mpsc;
    use std::time::Duration;

    use anyhow::Result;

    use super::*;
    use crate::domain::TraceEventKind;

    /// Plays a fixed number of silent frames, then reports exhaustion.
    struct ScriptedSource {
        frames_left: usize,
        frame_delay: Duration,
    }

    impl AudioSource for ScriptedSource {
        fn read_frame(&mut self, buf: &mut [i16]) -> Result<usize> {
            if self.frames_left == 0 {
                return Ok(0);
            }
            self.frames_left -= 1;
            std::thread::sleep(self.frame_delay);
            Ok(buf.len())
        }
    }

    /// Yields the scripted utterances, one per frame, then stays silent.
    struct ScriptedEngine {
        utterances: Vec<Option<String>>,
        next: usize,
    }

    impl ScriptedEngine {
        fn new(utterances: &[Option<&str>]) -> Self {
            Self {
                utterances: utterances
                    .iter()
                    .map(|u| u.map(str::to_string))
                    .collect(),
                next: 0,
            }
        }
    }

    impl SpeechEngine for ScriptedEngine {
        fn accept_frame(&mut self, _samples: &[i16]) -> Result<Option<String>> {
            let result = self.utterances.get(self.next).cloned().flatten();
            self.next += 1;
            Ok(result)
        }
    }

    #[test]
    fn test_delivers_finalized_utterances() {
        let (events_tx, _events_rx) = mpsc::channel();
        let mut listener = Listener::new(events_tx, 256, 4);

        let source = ScriptedSource {
            frames_left: 3,
            frame_delay: Duration::ZERO,
        };
        let engine = ScriptedEngine::new(&[None, Some("open calculator"), None]);

        let rx = listener.start(source, engine).expect("listener started");
        let utterances: Vec<String> = rx.iter().collect();
        assert_eq!(utterances, vec!["open calculator".to_string()]);
    }

    #[test]
    fn test_start_while_running_warns_and_noops() {
        let (events_tx, events_rx) = mpsc::channel();
        let mut listener = Listener::new(events_tx, 256, 4);

        let source = ScriptedSource {
            frames_left: usize::MAX,
            frame_delay: Duration::from_millis(5),
        };
        let engine = ScriptedEngine::new(&[]);
        let _rx = listener.start(source, engine).expect("first start");

        let second = listener.start(
            ScriptedSource {
                frames_left: 1,
                frame_delay: Duration::ZERO,
            },
            ScriptedEngine::new(&[]),
        );
        assert!(second.is_none());
        assert!(
            events_rx
                .try_iter()
                .any(|e| e.kind == TraceEventKind::Warning)
        );

        listener.stop();
        assert!(!listener.is_running());
    }

    /// Finalizes an utterance on every single frame.
    struct ChattyEngine;

    impl SpeechEngine for ChattyEngine {
        fn accept_frame(&mut self, _samples: &[i16]) -> Result<Option<String>> {
            Ok(Some("open calculator".to_string()))
        }
    }

    #[test]
    fn test_stop_returns_promptly_when_queue_is_full() {
        let (events_tx, _events_rx) = mpsc::channel();
        // capacity-1 queue that the worker saturates immediately
        let mut listener = Listener::new(events_tx, 64, 1);

        let source = ScriptedSource {
            frames_left: usize::MAX,
            frame_delay: Duration::from_millis(1),
        };
        let rx = listener.start(source, ChattyEngine).expect("listener started");

        // let the worker fill the queue and start retrying delivery;
        // the receiver stays alive and undrained the whole time
        std::thread::sleep(Duration::from_millis(50));

        let started = std::time::Instant::now();
        listener.stop();
        assert!(
            started.elapsed() < Duration::from_millis(500),
            "stop() took {:?} with a full queue",
            started.elapsed()
        );
        assert!(!listener.is_running());
        drop(rx);
    }

    #[test]
    fn test_stop_while_stopped_is_a_noop() {
        let (events_tx, _events_rx) = mpsc::channel();
        let mut listener = Listener::new(events_tx, 256, 4);
        listener.stop();
        listener.stop();
        assert!(!listener.is_running());
    }

    #[test]
    fn test_empty_utterances_are_dropped() {
        let (events_tx, _events_rx) = mpsc::channel();
        let mut listener = Listener::new(events_tx, 256, 4);

        let source = ScriptedSource {
            frames_left: 2,
            frame_delay: Duration::ZERO,
        };
        let engine = ScriptedEngine::new(&[Some(""), Some("quit")]);

        let rx = listener.start(source, engine).expect("listener started");
        let utterances: Vec<String> = rx.iter().collect();
        assert_eq!(utterances, vec!["quit".to_string()]);
    }
}
