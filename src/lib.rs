//! Connect Four (workspace facade crate).
//!
//! Re-exports the engine as `connect_four::{core,types}` while the implementation
//! lives in dedicated crates under `crates/`.

pub use connect_four_core as core;
pub use connect_four_types as types;
