//! Engine configuration.

use serde::{Deserialize, Serialize};

use crate::error::CombatError;

/// Health each combatant starts a round with.
pub const DEFAULT_STARTING_HEALTH: f64 = 10.0;

/// Weapon rerolls the player gets per round.
pub const DEFAULT_WEAPON_REROLLS: u32 = 2;

/// Configuration for an [`Engine`](crate::engine::Engine).
///
/// Missing fields fall back to their defaults when deserializing, so `{}` is a
/// valid configuration.
///
/// # Example
///
/// ```
/// use skirmish_core::config::EngineConfig;
///
/// let config = EngineConfig::from_json_str(r#"{"seed": 42}"#)?;
/// assert_eq!(config.starting_health, 10.0);
/// assert_eq!(config.weapon_rerolls, 2);
/// assert_eq!(config.seed, Some(42));
/// # Ok::<(), serde_json::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Health both combatants start each round with
    pub starting_health: f64,
    /// Weapon rerolls available to the player per round
    pub weapon_rerolls: u32,
    /// Seed for the engine's RNG (`None` draws one from the OS)
    pub seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            starting_health: DEFAULT_STARTING_HEALTH,
            weapon_rerolls: DEFAULT_WEAPON_REROLLS,
            seed: None,
        }
    }
}

impl EngineConfig {
    /// Create a default config with a fixed RNG seed.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Default::default()
        }
    }

    /// Checks the rule invariants.
    ///
    /// A fresh round must start with both combatants standing, so starting
    /// health has to be a finite positive number.
    ///
    /// # Errors
    ///
    /// [`CombatError::InvalidConfig`] if `starting_health` is zero, negative,
    /// NaN or infinite.
    pub fn validate(&self) -> Result<(), CombatError> {
        if !self.starting_health.is_finite() || self.starting_health <= 0.0 {
            return Err(CombatError::InvalidConfig {
                reason: "starting health must be a positive number",
            });
        }
        Ok(())
    }

    /// Parse a config from JSON.
    ///
    /// # Errors
    ///
    /// Returns the parse error for malformed JSON or mistyped fields.
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
