//! Shared test utilities for lexfind integration harnesses.
//!
//! Import everything you need via `mod common; use common::*;` at the top of
//! each harness file. Timing-sensitive helpers are deterministic under
//! `tokio::time::pause()`.

pub mod builders;
pub mod fake_syntax_api;
pub mod fixtures;
pub mod recorder;

pub use builders::*;
pub use fixtures::*;
pub use recorder::*;
