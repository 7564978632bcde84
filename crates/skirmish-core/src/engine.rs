//! The combat engine.
//!
//! [`Engine`] owns a shared [`WeaponCatalog`], an [`EngineConfig`] and an
//! injected random number generator. It exposes every state transition of a
//! duel:
//!
//! - [`Engine::init`]: build an engine and its first round
//! - [`Engine::new_game_state`]: fresh round with random weapons
//! - [`Engine::calculate_damage`]: one swing of a weapon
//! - [`Engine::new_round`]: guarded replacement of the current round
//! - [`Engine::fight`]: the simultaneous exchange
//! - [`Engine::reroll_weapon`]: swap the player's weapon
//!
//! # Determinism
//!
//! The engine is generic over [`rand::Rng`]. Given the same catalog, config
//! and RNG state, every operation produces identical results. Draws happen in
//! a fixed order: player weapon, enemy weapon on state creation; player
//! damage, enemy damage on a fight.
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
//! let mut engine = Engine::seeded(catalog, EngineConfig::with_seed(42))?;
//!
//! let mut state = engine.new_game_state()?;
//! let exchange = engine.fight(&mut state)?;
//!
//! assert!(state.has_fought());
//! assert!(exchange.player_damage > 0.0);
//! assert!(engine.fight(&mut state).is_err());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::catalog::WeaponCatalog;
use crate::config::EngineConfig;
use crate::damage;
use crate::error::{CombatError, Result};
use crate::state::{Combatant, GameState, RoundFlags};
use crate::weapon::Weapon;

/// Damage dealt by each side in one exchange.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Exchange {
    /// Damage the player dealt to the enemy.
    pub player_damage: f64,
    /// Damage the enemy dealt to the player.
    pub enemy_damage: f64,
}

/// Rules engine for a two-combatant duel.
///
/// # Invariants
///
/// - The catalog is never empty and the config is valid (both checked in
///   [`Engine::new`])
/// - Failed operations never mutate the `GameState` they were given
pub struct Engine<R = ChaCha8Rng> {
    catalog: Arc<WeaponCatalog>,
    config: EngineConfig,
    rng: R,
}

impl<R> std::fmt::Debug for Engine<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Engine")
            .field("catalog", &format!("[{} weapons]", self.catalog.len()))
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl Engine<ChaCha8Rng> {
    /// Creates an engine backed by `ChaCha8Rng`.
    ///
    /// Uses `config.seed` when set, otherwise seeds from the OS.
    ///
    /// # Errors
    ///
    /// Everything [`Engine::new`] rejects.
    pub fn seeded(catalog: Arc<WeaponCatalog>, config: EngineConfig) -> Result<Self> {
        let rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        Self::new(catalog, config, rng)
    }
}

impl<R: Rng> Engine<R> {
    /// Creates an engine with an explicit RNG.
    ///
    /// # Errors
    ///
    /// - [`CombatError::EmptyCatalog`] if the catalog holds no weapons
    /// - [`CombatError::InvalidConfig`] if `config` fails
    ///   [`EngineConfig::validate`]
    pub fn new(catalog: Arc<WeaponCatalog>, config: EngineConfig, rng: R) -> Result<Self> {
        if catalog.is_empty() {
            tracing::warn!("engine rejected an empty weapon catalog");
            return Err(CombatError::EmptyCatalog);
        }
        config.validate().inspect_err(|e| {
            tracing::warn!(error = %e, "engine rejected its config");
        })?;
        Ok(Self {
            catalog,
            config,
            rng,
        })
    }

    /// Creates an engine and its first round.
    ///
    /// # Errors
    ///
    /// Everything [`Engine::new`] rejects.
    pub fn init(
        catalog: Arc<WeaponCatalog>,
        config: EngineConfig,
        rng: R,
    ) -> Result<(Self, GameState)> {
        let mut engine = Self::new(catalog, config, rng)?;
        let state = engine.new_game_state()?;
        Ok((engine, state))
    }

    /// The shared weapon catalog.
    #[must_use]
    pub fn catalog(&self) -> &Arc<WeaponCatalog> {
        &self.catalog
    }

    /// The engine configuration.
    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Mutable access to the injected RNG.
    pub fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }

    /// Builds a fresh round: both combatants at starting health with
    /// independently drawn weapons, and a full set of rerolls.
    ///
    /// # Errors
    ///
    /// [`CombatError::EmptyCatalog`] from the weapon draw. Engines built
    /// through [`Engine::new`] always hold a non-empty catalog.
    pub fn new_game_state(&mut self) -> Result<GameState> {
        let player = Combatant::new(self.config.starting_health, self.draw_weapon()?);
        let enemy = Combatant::new(self.config.starting_health, self.draw_weapon()?);

        tracing::debug!(
            player_weapon = %player.weapon.name,
            enemy_weapon = %enemy.weapon.name,
            "new game state"
        );

        Ok(GameState::new(player, enemy, self.config.weapon_rerolls))
    }

    /// Damage one swing of `weapon` deals, using the engine's RNG.
    pub fn calculate_damage(&mut self, weapon: &Weapon) -> f64 {
        damage::calculate_damage(weapon, &mut self.rng)
    }

    /// Starts a new round, replacing whatever round came before.
    ///
    /// The round is rejected when `force_reinit` is `true`.
    ///
    /// # Errors
    ///
    /// [`CombatError::NotInitialized`] when `force_reinit` is `true`.
    pub fn new_round(&mut self, force_reinit: bool) -> Result<GameState> {
        if force_reinit {
            tracing::warn!("new round rejected: game not initialized");
            return Err(CombatError::NotInitialized);
        }
        self.new_game_state()
    }

    /// Resolves the round's exchange.
    ///
    /// Both damages are rolled from the pre-exchange state and applied
    /// together; each health is clamped at zero. The round is marked fought,
    /// and game over if either combatant reached zero.
    ///
    /// # Errors
    ///
    /// - [`CombatError::RoundNotInitialized`] if no round is set up
    /// - [`CombatError::AlreadyFought`] if this round was already fought
    ///
    /// On error the state is left untouched.
    pub fn fight(&mut self, state: &mut GameState) -> Result<Exchange> {
        ensure_ready(state).inspect_err(|e| {
            tracing::warn!(error = %e, "fight rejected");
        })?;
        Ok(self.resolve_exchange(state))
    }

    /// Replaces the player's weapon with a fresh random draw.
    ///
    /// The enemy's weapon is never rerolled. Returns the new weapon.
    ///
    /// # Errors
    ///
    /// - [`CombatError::NoRerollsLeft`] if the player has no rerolls left
    /// - [`CombatError::EmptyCatalog`] from the weapon draw
    ///
    /// On error the state is left untouched.
    pub fn reroll_weapon(&mut self, state: &mut GameState) -> Result<Arc<Weapon>> {
        if state.available_weapon_rerolls == 0 {
            tracing::warn!("reroll rejected: no rerolls left");
            return Err(CombatError::NoRerollsLeft);
        }

        let weapon = self.draw_weapon()?;
        state.player.weapon = Arc::clone(&weapon);
        state.available_weapon_rerolls -= 1;

        tracing::debug!(
            weapon = %weapon.name,
            rerolls_left = state.available_weapon_rerolls,
            "player weapon rerolled"
        );

        Ok(weapon)
    }

    /// Applies the exchange without checking the round phase.
    ///
    /// Callers must have established that `state` is `Ready`.
    pub(crate) fn resolve_exchange(&mut self, state: &mut GameState) -> Exchange {
        let exchange = Exchange {
            player_damage: self.calculate_damage(&state.player.weapon),
            enemy_damage: self.calculate_damage(&state.enemy.weapon),
        };

        state.player.take_damage(exchange.enemy_damage);
        state.enemy.take_damage(exchange.player_damage);

        state.flags.insert(RoundFlags::HAS_FOUGHT);
        if state.player.is_defeated() || state.enemy.is_defeated() {
            state.flags.insert(RoundFlags::GAME_OVER);
        }

        tracing::debug!(
            player_damage = exchange.player_damage,
            enemy_damage = exchange.enemy_damage,
            player_health = state.player.health,
            enemy_health = state.enemy.health,
            game_over = state.is_game_over(),
            "exchange resolved"
        );

        exchange
    }

    fn draw_weapon(&mut self) -> Result<Arc<Weapon>> {
        self.catalog.pick_random(&mut self.rng)
    }
}

/// Checks that `state` is in the `Ready` phase.
pub(crate) fn ensure_ready(state: &GameState) -> Result<()> {
    if !state.has_round() {
        return Err(CombatError::RoundNotInitialized);
    }
    if state.has_fought() {
        return Err(CombatError::AlreadyFought);
    }
    Ok(())
}
