//! Test module for determinism and integration tests.
//!
//! - `determinism.rs`: same seed produces the same duel
//! - `integration.rs`: end-to-end duels through the public operations
//! - `helpers.rs`: catalog and engine factories

mod helpers;

// Re-export for convenience
pub use helpers::*;
