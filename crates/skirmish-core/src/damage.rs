//! Damage resolution.
//!
//! Fixed weapons always deal `base_damage * damage_multiplier`. Random weapons
//! roll an integer uniformly from `1..=base_damage` and scale it by the
//! multiplier. Fixed weapons never consume randomness, so they do not disturb
//! the sequence a seeded generator produces for the other combatant.
//!
//! Base damage is floored at 1 for both kinds. A validated weapon never hits
//! the floor; it only matters for hand-built records that skipped
//! [`Weapon::validate`].

use rand::Rng;

use crate::weapon::Weapon;

/// Computes the damage one swing of `weapon` deals.
///
/// The result is strictly positive whenever `damage_multiplier` is, which
/// [`Weapon::validate`] guarantees.
///
/// # Example
///
/// ```
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
/// use skirmish_core::damage::calculate_damage;
/// use skirmish_core::weapon::Weapon;
///
/// let mut rng = ChaCha8Rng::seed_from_u64(1);
/// assert_eq!(calculate_damage(&Weapon::fixed("Sword", 5, 2.0), &mut rng), 10.0);
/// assert_eq!(calculate_damage(&Weapon::random("Dagger", 1, 3.0), &mut rng), 3.0);
/// ```
pub fn calculate_damage<R: Rng + ?Sized>(weapon: &Weapon, rng: &mut R) -> f64 {
    let ceiling = weapon.base_damage.max(1);
    let base = if weapon.use_random {
        rng.gen_range(1..=ceiling)
    } else {
        ceiling
    };
    f64::from(base) * weapon.damage_multiplier
}
