//! Game state: the two combatants and the round lifecycle.
//!
//! A [`GameState`] moves through the round phases:
//!
//! ```text
//! NotStarted ──new round──▶ Ready ──fight──▶ Resolved ──(a health hit 0)──▶ GameOver
//! ```
//!
//! The phase is stored as [`RoundFlags`]. The flags are only ever changed by
//! the [`Engine`](crate::engine::Engine), which checks every precondition
//! before touching the state.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

use crate::weapon::Weapon;

bitflags! {
    /// Round lifecycle flags.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    pub struct RoundFlags: u8 {
        /// A round has been set up and may be fought.
        const HAS_ROUND = 1 << 0;
        /// The round's exchange has been resolved.
        const HAS_FOUGHT = 1 << 1;
        /// At least one combatant is at zero health.
        const GAME_OVER = 1 << 2;
    }
}

/// Where a [`GameState`] is in the round lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundPhase {
    /// No round has been set up.
    NotStarted,
    /// The round is set up and waiting for the exchange.
    Ready,
    /// The exchange happened and both combatants are still standing.
    Resolved,
    /// The exchange left at least one combatant at zero health.
    GameOver,
}

/// Who won, if anyone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Both combatants are still standing.
    Ongoing,
    /// The enemy is down and the player is not.
    PlayerWon,
    /// The player is down and the enemy is not.
    EnemyWon,
    /// Both combatants went down in the same exchange.
    Draw,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ongoing => write!(f, "Ongoing"),
            Self::PlayerWon => write!(f, "Player won"),
            Self::EnemyWon => write!(f, "Enemy won"),
            Self::Draw => write!(f, "Draw"),
        }
    }
}

/// One side of the duel.
#[derive(Debug, Clone, PartialEq)]
pub struct Combatant {
    /// Remaining health, never below zero.
    pub health: f64,
    /// Weapon currently wielded, shared with the catalog.
    pub weapon: Arc<Weapon>,
}

impl Combatant {
    /// Creates a combatant at full health.
    #[must_use]
    pub fn new(health: f64, weapon: Arc<Weapon>) -> Self {
        Self { health, weapon }
    }

    /// Subtracts `damage` from health, clamping at zero.
    pub fn take_damage(&mut self, damage: f64) {
        self.health = (self.health - damage).max(0.0);
    }

    /// Returns `true` once health has reached zero.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn is_defeated(&self) -> bool {
        self.health == 0.0
    }
}

/// The state of one round between the player and the enemy.
///
/// Operations that can fail take `&mut GameState` and validate before
/// mutating, so a rejected call leaves the state exactly as it was.
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    /// The player's side.
    pub player: Combatant,
    /// The enemy's side.
    pub enemy: Combatant,
    /// Round lifecycle flags.
    pub flags: RoundFlags,
    /// Weapon rerolls the player has left this round.
    pub available_weapon_rerolls: u32,
}

impl GameState {
    /// Creates a state in the `Ready` phase.
    #[must_use]
    pub fn new(player: Combatant, enemy: Combatant, available_weapon_rerolls: u32) -> Self {
        Self {
            player,
            enemy,
            flags: RoundFlags::HAS_ROUND,
            available_weapon_rerolls,
        }
    }

    /// A round has been set up.
    #[must_use]
    pub fn has_round(&self) -> bool {
        self.flags.contains(RoundFlags::HAS_ROUND)
    }

    /// The round's exchange has been resolved.
    #[must_use]
    pub fn has_fought(&self) -> bool {
        self.flags.contains(RoundFlags::HAS_FOUGHT)
    }

    /// A combatant has reached zero health.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.flags.contains(RoundFlags::GAME_OVER)
    }

    /// Current lifecycle phase.
    #[must_use]
    pub fn phase(&self) -> RoundPhase {
        if !self.has_round() {
            RoundPhase::NotStarted
        } else if !self.has_fought() {
            RoundPhase::Ready
        } else if self.is_game_over() {
            RoundPhase::GameOver
        } else {
            RoundPhase::Resolved
        }
    }

    /// Who won, judged from current health.
    #[must_use]
    pub fn outcome(&self) -> Outcome {
        match (self.player.is_defeated(), self.enemy.is_defeated()) {
            (false, false) => Outcome::Ongoing,
            (false, true) => Outcome::PlayerWon,
            (true, false) => Outcome::EnemyWon,
            (true, true) => Outcome::Draw,
        }
    }

    /// Plain-data copy of the state for display or logging.
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            player: CombatantSnapshot::from(&self.player),
            enemy: CombatantSnapshot::from(&self.enemy),
            phase: self.phase(),
            flags: self.flags,
            available_weapon_rerolls: self.available_weapon_rerolls,
            outcome: self.outcome(),
        }
    }
}

/// Serializable view of a [`Combatant`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CombatantSnapshot {
    /// Remaining health
    pub health: f64,
    /// Name of the wielded weapon
    pub weapon: String,
}

impl From<&Combatant> for CombatantSnapshot {
    fn from(combatant: &Combatant) -> Self {
        Self {
            health: combatant.health,
            weapon: combatant.weapon.name.clone(),
        }
    }
}

/// Serializable view of a [`GameState`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// The player's side
    pub player: CombatantSnapshot,
    /// The enemy's side
    pub enemy: CombatantSnapshot,
    /// Lifecycle phase
    pub phase: RoundPhase,
    /// Raw lifecycle flags
    pub flags: RoundFlags,
    /// Rerolls left
    pub available_weapon_rerolls: u32,
    /// Who won, if anyone
    pub outcome: Outcome,
}
