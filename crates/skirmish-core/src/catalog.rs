//! The weapon catalog.
//!
//! A [`WeaponCatalog`] is built once from a JSON weapon list and then shared
//! read-only (behind an `Arc`) by every engine and game state that draws from
//! it. Weapons are stored as `Arc<Weapon>` so combatants can hold a reference
//! into the catalog without borrowing it.
//!
//! # Example
//!
//! ```
//! use skirmish_core::catalog::WeaponCatalog;
//!
//! let catalog = WeaponCatalog::from_json_str(
//!     r#"[{"name":"Sword","baseDamage":5,"useRandom":false,"damageMultiplier":2}]"#,
//! )?;
//! assert_eq!(catalog.len(), 1);
//! assert!(catalog.get("Sword").is_some());
//! # Ok::<(), skirmish_core::error::CatalogError>(())
//! ```

use rand::seq::SliceRandom;
use rand::Rng;
use std::path::Path;
use std::sync::Arc;

use crate::error::{CatalogError, CombatError};
use crate::weapon::Weapon;

/// Weapon list shipped with the crate.
const BUNDLED_WEAPONS: &str = include_str!("../data/weapons.json");

/// Immutable collection of weapon definitions.
///
/// The default catalog is empty and stands for "not loaded": drawing from it
/// fails with [`CombatError::EmptyCatalog`]. Catalogs produced by the loaders
/// are never empty.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WeaponCatalog {
    weapons: Vec<Arc<Weapon>>,
}

impl WeaponCatalog {
    /// Builds a catalog from weapon records, validating each one.
    ///
    /// # Errors
    ///
    /// - [`CatalogError::Empty`] if `weapons` is empty
    /// - [`CatalogError::InvalidWeapon`] for the first record that fails
    ///   [`Weapon::validate`]
    pub fn from_weapons(weapons: Vec<Weapon>) -> Result<Self, CatalogError> {
        if weapons.is_empty() {
            return Err(CatalogError::Empty);
        }
        for weapon in &weapons {
            weapon.validate()?;
        }

        tracing::info!(weapons = weapons.len(), "weapon catalog loaded");

        Ok(Self {
            weapons: weapons.into_iter().map(Arc::new).collect(),
        })
    }

    /// Parses a JSON array of weapon records.
    ///
    /// # Errors
    ///
    /// [`CatalogError::Parse`] for malformed JSON, plus everything
    /// [`WeaponCatalog::from_weapons`] rejects.
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let weapons: Vec<Weapon> = serde_json::from_str(json)?;
        Self::from_weapons(weapons)
    }

    /// Reads and parses a JSON weapon list from disk.
    ///
    /// # Errors
    ///
    /// [`CatalogError::Io`] if the file cannot be read, plus everything
    /// [`WeaponCatalog::from_json_str`] rejects.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).inspect_err(|e| {
            tracing::warn!(path = %path.display(), error = %e, "weapon catalog unreadable");
        })?;
        Self::from_json_str(&content)
    }

    /// The weapon list shipped with the crate.
    ///
    /// # Errors
    ///
    /// Only if the bundled data file is itself invalid.
    pub fn bundled() -> Result<Self, CatalogError> {
        Self::from_json_str(BUNDLED_WEAPONS)
    }

    /// Returns a uniformly random weapon.
    ///
    /// # Errors
    ///
    /// [`CombatError::EmptyCatalog`] if the catalog holds no weapons.
    pub fn pick_random<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Arc<Weapon>, CombatError> {
        self.weapons
            .choose(rng)
            .map(Arc::clone)
            .ok_or(CombatError::EmptyCatalog)
    }

    /// Looks up the first weapon with the given name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Arc<Weapon>> {
        self.weapons.iter().find(|w| w.name == name)
    }

    /// Number of weapons in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.weapons.len()
    }

    /// Returns `true` for the default, unloaded catalog.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.weapons.is_empty()
    }

    /// Iterates weapons in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<Weapon>> {
        self.weapons.iter()
    }
}
