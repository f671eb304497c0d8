//! voxlaunch - voice-driven application launcher.
//!
//! Speak a short phrase, get a typed action: launch a registered app,
//! search the web in a named browser, list the registry, or end the
//! session. The core is the command interpretation engine in [`engine`];
//! audio capture, speech recognition and process spawning sit behind
//! boundary traits so the engine itself stays pure.
//!
//! ## Pipeline
//!
//! 1. The capture worker ([`capture`]) feeds microphone frames to the
//!    speech engine and delivers finalized utterances over a bounded
//!    channel.
//! 2. [`engine::Interpreter::interpret`] normalizes the utterance,
//!    applies the misheard-word correction table, classifies the intent
//!    and resolves app names against the [`registry`] (with fuzzy
//!    fallback).
//! 3. [`launcher::dispatch`] performs the resolved action through the
//!    injected [`launcher::Launcher`] capabilities.
//!
//! Every step narrates itself through [`domain::TraceEvent`]s that a
//! front end renders.

pub mod capture;
pub mod config;
pub mod domain;
pub mod engine;
pub mod launcher;
pub mod registry;

pub use domain::*;
