//! # Skirmish Core
//!
//! Turn-based duel rules engine for Skirmish.
//!
//! Two combatants, the player and the enemy, each wield a weapon drawn from a
//! shared catalog and trade blows once per round until one of them is out of
//! health.
//!
//! ## Architecture
//!
//! - **Catalog**: immutable weapon list, shared behind an `Arc`
//! - **Engine**: owns the catalog, config and an injected RNG; performs every
//!   state transition
//! - **State**: the two combatants plus round lifecycle flags
//! - **Rounds**: typestate wrappers that make re-fighting unrepresentable
//!
//! ## Usage
//!
//! ```rust
//! use std::sync::Arc;
//! use skirmish_core::{Engine, EngineConfig, WeaponCatalog};
//!
//! let catalog = Arc::new(WeaponCatalog::bundled()?);
//! let mut engine = Engine::seeded(catalog, EngineConfig::with_seed(42))?;
//!
//! let mut state = engine.new_game_state()?;
//! engine.reroll_weapon(&mut state)?;
//! engine.fight(&mut state)?;
//!
//! if state.is_game_over() {
//!     println!("{}", state.outcome());
//! } else {
//!     state = engine.new_round(false)?;
//! }
//! # let _ = state;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod catalog;
pub mod config;
pub mod damage;
pub mod engine;
pub mod error;
pub mod round;
pub mod state;
pub mod weapon;

#[cfg(test)]
mod tests;

// Re-exports for convenience
pub use catalog::WeaponCatalog;
pub use config::EngineConfig;
pub use damage::calculate_damage;
pub use engine::{Engine, Exchange};
pub use error::{CatalogError, CombatError, Result};
pub use round::{ReadyRound, ResolvedRound};
pub use state::{Combatant, GameSnapshot, GameState, Outcome, RoundFlags, RoundPhase};
pub use weapon::Weapon;
