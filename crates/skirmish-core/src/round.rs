//! Typestate rounds.
//!
//! [`ReadyRound`] and [`ResolvedRound`] wrap a [`GameState`] so that the round
//! phase is tracked by the type system: [`ReadyRound::fight`] consumes the
//! ready round and returns a resolved one, and a resolved round has no way to
//! fight again. The flag-based [`Engine::fight`] remains available for callers
//! that hold a bare `GameState`.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use skirmish_core::catalog::WeaponCatalog;
//! use skirmish_core::config::EngineConfig;
//! use skirmish_core::engine::Engine;
//!
//! let catalog = Arc::new(WeaponCatalog::bundled()?);
//! let mut engine = Engine::seeded(catalog, EngineConfig::with_seed(7))?;
//!
//! let mut round = engine.start_round()?;
//! round.reroll_weapon(&mut engine)?;
//! let resolved = round.fight(&mut engine);
//!
//! assert!(resolved.state().has_fought());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use rand::Rng;
use std::sync::Arc;

use crate::engine::{ensure_ready, Engine, Exchange};
use crate::error::{CombatError, Result};
use crate::state::{GameState, Outcome};
use crate::weapon::Weapon;

/// A round that has been set up and not yet fought.
#[derive(Debug, Clone, PartialEq)]
pub struct ReadyRound {
    state: GameState,
}

impl ReadyRound {
    /// The wrapped state.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Rerolls the player's weapon.
    ///
    /// # Errors
    ///
    /// [`CombatError::NoRerollsLeft`] if the player has no rerolls left.
    pub fn reroll_weapon<R: Rng>(&mut self, engine: &mut Engine<R>) -> Result<Arc<Weapon>> {
        engine.reroll_weapon(&mut self.state)
    }

    /// Resolves the exchange, consuming the ready round.
    pub fn fight<R: Rng>(mut self, engine: &mut Engine<R>) -> ResolvedRound {
        let exchange = engine.resolve_exchange(&mut self.state);
        ResolvedRound {
            state: self.state,
            exchange,
        }
    }

    /// Unwraps the state.
    #[must_use]
    pub fn into_state(self) -> GameState {
        self.state
    }
}

impl TryFrom<GameState> for ReadyRound {
    type Error = CombatError;

    /// Accepts only states in the `Ready` phase.
    fn try_from(state: GameState) -> Result<Self> {
        ensure_ready(&state)?;
        Ok(Self { state })
    }
}

/// A round whose exchange has been resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedRound {
    state: GameState,
    exchange: Exchange,
}

impl ResolvedRound {
    /// The state after the exchange.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Damage dealt by each side.
    #[must_use]
    pub fn exchange(&self) -> Exchange {
        self.exchange
    }

    /// Whether a combatant went down.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.state.is_game_over()
    }

    /// Who won, if anyone.
    #[must_use]
    pub fn outcome(&self) -> Outcome {
        self.state.outcome()
    }

    /// Unwraps the state.
    #[must_use]
    pub fn into_state(self) -> GameState {
        self.state
    }
}

impl<R: Rng> Engine<R> {
    /// Starts a fresh round in typestate form.
    ///
    /// # Errors
    ///
    /// Whatever [`Engine::new_game_state`] returns.
    pub fn start_round(&mut self) -> Result<ReadyRound> {
        Ok(ReadyRound {
            state: self.new_game_state()?,
        })
    }
}
