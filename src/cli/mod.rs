//! CLI command implementations

pub mod apps;
pub mod init;
pub mod interpret;
pub mod listen;
mod render;

pub use render::print_events;
