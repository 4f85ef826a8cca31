//! ids-core: stable foundation for idsbench.
//!
//! Contains:
//! - score (metric score band + rounding helpers)
//! - error (shared error types)

pub mod error;
pub mod score;

// Re-exports: nice ergonomics for downstream crates
pub use error::{CoreError, CoreResult};
pub use score::*;
