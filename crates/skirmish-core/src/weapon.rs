//! Weapon definitions.
//!
//! A [`Weapon`] is an immutable record loaded from the weapon catalog. Field
//! names on the wire are camelCase to match the catalog data files.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::CatalogError;

/// A weapon a combatant can wield.
///
/// # Invariants
///
/// - `base_damage >= 1`, so a random roll always lands in `1..=base_damage`
/// - `damage_multiplier` is finite and strictly positive
///
/// Both are checked by [`Weapon::validate`] when a catalog is loaded.
///
/// # Example
///
/// ```
/// use skirmish_core::weapon::Weapon;
///
/// let sword = Weapon::fixed("Sword", 5, 2.0);
/// assert_eq!(sword.max_damage(), 10.0);
/// assert!(sword.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Weapon {
    /// Display name.
    pub name: String,
    /// Flavor text.
    #[serde(default)]
    pub description: String,
    /// Rarity label ("common", "rare", ...).
    #[serde(default)]
    pub rarity: String,
    /// Base damage before the multiplier.
    pub base_damage: u32,
    /// Roll `1..=base_damage` instead of dealing `base_damage` outright.
    pub use_random: bool,
    /// Scales the base or rolled damage.
    pub damage_multiplier: f64,
}

impl Weapon {
    /// Creates a weapon that always deals `base_damage * damage_multiplier`.
    #[must_use]
    pub fn fixed(name: impl Into<String>, base_damage: u32, damage_multiplier: f64) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            rarity: String::new(),
            base_damage,
            use_random: false,
            damage_multiplier,
        }
    }

    /// Creates a weapon that rolls `1..=base_damage` before the multiplier.
    #[must_use]
    pub fn random(name: impl Into<String>, base_damage: u32, damage_multiplier: f64) -> Self {
        Self {
            use_random: true,
            ..Self::fixed(name, base_damage, damage_multiplier)
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the rarity label.
    #[must_use]
    pub fn with_rarity(mut self, rarity: impl Into<String>) -> Self {
        self.rarity = rarity.into();
        self
    }

    /// Lowest damage this weapon can deal in one exchange.
    #[must_use]
    pub fn min_damage(&self) -> f64 {
        if self.use_random {
            self.damage_multiplier
        } else {
            self.max_damage()
        }
    }

    /// Highest damage this weapon can deal in one exchange.
    #[must_use]
    pub fn max_damage(&self) -> f64 {
        f64::from(self.base_damage) * self.damage_multiplier
    }

    /// Checks the weapon's data invariants.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::InvalidWeapon`] for a blank name, a base damage
    /// of zero, or a multiplier that is not a finite positive number.
    pub fn validate(&self) -> Result<(), CatalogError> {
        let reason = if self.name.trim().is_empty() {
            Some("name must not be blank")
        } else if self.base_damage < 1 {
            Some("base damage must be at least 1")
        } else if !self.damage_multiplier.is_finite() || self.damage_multiplier <= 0.0 {
            Some("damage multiplier must be a positive number")
        } else {
            None
        };

        match reason {
            Some(reason) => Err(CatalogError::InvalidWeapon {
                name: self.name.clone(),
                reason,
            }),
            None => Ok(()),
        }
    }
}

impl fmt::Display for Weapon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.use_random {
            write!(
                f,
                "{} (1-{} x{})",
                self.name, self.base_damage, self.damage_multiplier
            )
        } else {
            write!(
                f,
                "{} ({} x{})",
                self.name, self.base_damage, self.damage_multiplier
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod constructor_tests {
        use super::*;

        #[test]
        fn fixed_does_not_roll() {
            let sword = Weapon::fixed("Sword", 5, 2.0);
            assert!(!sword.use_random);
            assert_eq!(sword.base_damage, 5);
        }

        #[test]
        fn random_rolls() {
            let dagger = Weapon::random("Dagger", 1, 3.0)
                .with_rarity("common")
                .with_description("Short and pointy");
            assert!(dagger.use_random);
            assert_eq!(dagger.rarity, "common");
            assert_eq!(dagger.description, "Short and pointy");
        }

        #[test]
        fn damage_bounds() {
            let fixed = Weapon::fixed("Club", 4, 1.5);
            assert_eq!(fixed.min_damage(), 6.0);
            assert_eq!(fixed.max_damage(), 6.0);

            let random = Weapon::random("Flail", 4, 1.5);
            assert_eq!(random.min_damage(), 1.5);
            assert_eq!(random.max_damage(), 6.0);
        }
    }

    mod validate_tests {
        use super::*;

        #[test]
        fn accepts_well_formed_weapon() {
            assert!(Weapon::random("Axe", 6, 1.0).validate().is_ok());
        }

        #[test]
        fn rejects_zero_base_damage() {
            let err = Weapon::random("Twig", 0, 1.0).validate().unwrap_err();
            assert!(matches!(
                err,
                CatalogError::InvalidWeapon { reason: "base damage must be at least 1", .. }
            ));
        }

        #[test]
        fn rejects_non_positive_multiplier() {
            assert!(Weapon::fixed("Pillow", 1, 0.0).validate().is_err());
            assert!(Weapon::fixed("Cursed", 1, -2.0).validate().is_err());
            assert!(Weapon::fixed("Void", 1, f64::NAN).validate().is_err());
            assert!(Weapon::fixed("Singularity", 1, f64::INFINITY).validate().is_err());
        }

        #[test]
        fn rejects_blank_name() {
            assert!(Weapon::fixed("   ", 1, 1.0).validate().is_err());
        }
    }

    mod serde_tests {
        use super::*;

        #[test]
        fn reads_camel_case_fields() {
            let json = r#"{
                "name": "Sword",
                "description": "Sharp",
                "rarity": "common",
                "baseDamage": 5,
                "useRandom": false,
                "damageMultiplier": 2
            }"#;
            let weapon: Weapon = serde_json::from_str(json).unwrap();
            assert_eq!(weapon, Weapon::fixed("Sword", 5, 2.0)
                .with_description("Sharp")
                .with_rarity("common"));
        }

        #[test]
        fn description_and_rarity_are_optional() {
            let json = r#"{"name":"Stick","baseDamage":1,"useRandom":true,"damageMultiplier":1.0}"#;
            let weapon: Weapon = serde_json::from_str(json).unwrap();
            assert!(weapon.description.is_empty());
            assert!(weapon.rarity.is_empty());
        }

        #[test]
        fn rejects_fractional_base_damage() {
            let json = r#"{"name":"Stick","baseDamage":1.5,"useRandom":true,"damageMultiplier":1.0}"#;
            assert!(serde_json::from_str::<Weapon>(json).is_err());
        }
    }

    #[test]
    fn display_shows_damage_profile() {
        assert_eq!(Weapon::fixed("Sword", 5, 2.0).to_string(), "Sword (5 x2)");
        assert_eq!(Weapon::random("Dagger", 4, 1.5).to_string(), "Dagger (1-4 x1.5)");
    }
}
