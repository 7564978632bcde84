//! Error types for catalog loading and round transitions.
//!
//! Loading a catalog can fail with a [`CatalogError`]. Everything that happens
//! after a catalog exists fails with a [`CombatError`]. Every rejected
//! operation leaves the state it was given untouched.

use thiserror::Error;

/// Errors raised while building a [`WeaponCatalog`](crate::catalog::WeaponCatalog).
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog source could not be read.
    #[error("failed to read weapon catalog: {0}")]
    Io(#[from] std::io::Error),

    /// The catalog source is not a valid weapon list.
    #[error("malformed weapon catalog: {0}")]
    Parse(#[from] serde_json::Error),

    /// The catalog source parsed but holds no weapons.
    #[error("weapon catalog is empty")]
    Empty,

    /// A weapon record violates a data invariant.
    #[error("invalid weapon '{name}': {reason}")]
    InvalidWeapon {
        /// Name of the offending record (may be blank).
        name: String,
        /// Which invariant was violated.
        reason: &'static str,
    },
}

/// Errors raised by the combat engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CombatError {
    /// A random weapon was requested from a catalog with no weapons.
    #[error("cannot draw a weapon from an empty catalog")]
    EmptyCatalog,

    /// A new round was requested while the initialization guard is set.
    #[error("game not initialized")]
    NotInitialized,

    /// A fight was attempted on a state with no active round.
    #[error("round not initialized")]
    RoundNotInitialized,

    /// A fight was attempted on a round that has already been fought.
    #[error("round already played")]
    AlreadyFought,

    /// A reroll was attempted with no rerolls remaining.
    #[error("no available rerolls left")]
    NoRerollsLeft,

    /// The engine configuration violates a rule invariant.
    #[error("invalid engine config: {reason}")]
    InvalidConfig {
        /// Which invariant was violated.
        reason: &'static str,
    },
}

/// Result alias for engine operations.
pub type Result<T> = std::result::Result<T, CombatError>;
