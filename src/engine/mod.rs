//! Command interpretation engine.
//!
//! Pipeline per utterance: normalize -> correct misheard words ->
//! classify intent -> extract arguments -> resolve against the registry
//! (with fuzzy fallback). The result is a typed [`Action`] plus a
//! stream of trace events describing what happened.
//!
//! [`Action`]: crate::domain::Action

pub mod browser;
pub mod corrections;
pub mod fuzzy;
mod interpreter;
mod router;

pub use browser::SearchRequest;
pub use interpreter::Interpreter;
pub use router::route;
