//! Blockfall (workspace facade crate).
//!
//! The game itself lives in dedicated crates under `crates/`; this package
//! re-exports them as `blockfall::{core,input,term,types}` and adds the pieces
//! only the runner needs: the frame clock and environment configuration.

pub mod clock;
pub mod config;

pub use blockfall_core as core;
pub use blockfall_input as input;
pub use blockfall_term as term;
pub use blockfall_types as types;

pub use clock::GravityClock;
pub use config::{ConfigError, RunConfig};
