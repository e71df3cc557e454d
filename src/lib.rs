//! Memory Match (workspace facade crate).
//!
//! Re-exports the workspace crates as `memory_match::{core,data,input,term,types}`
//! and holds the pieces the binary wires together: configuration, logger
//! setup and the screen state machine.

pub use memory_match_core as core;
pub use memory_match_data as data;
pub use memory_match_input as input;
pub use memory_match_term as term;
pub use memory_match_types as types;

pub mod app;
pub mod config;
pub mod logging;
