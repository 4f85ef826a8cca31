//! ids-results: session-local run history.
//!
//! Runs live in memory for the lifetime of the session only; there is no
//! on-disk layer and no way to delete or rewrite an appended record.

pub mod store;
pub mod types;

pub use store::RunStore;
pub use types::*;
