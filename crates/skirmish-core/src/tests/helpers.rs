//! Test helper functions for setting up catalogs and engines.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::sync::{Arc, Once};

use crate::catalog::WeaponCatalog;
use crate::config::EngineConfig;
use crate::engine::Engine;
use crate::weapon::Weapon;

static TRACING: Once = Once::new();

/// Installs a `tracing` subscriber that writes through the test harness.
///
/// Safe to call from every test; only the first call installs.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_test_writer()
            .try_init();
    });
}

/// Builds a shared catalog from weapon records.
///
/// # Panics
///
/// If any record is invalid.
pub fn catalog_of(weapons: Vec<Weapon>) -> Arc<WeaponCatalog> {
    Arc::new(WeaponCatalog::from_weapons(weapons).expect("test catalog should be valid"))
}

/// Builds an engine with default rules and a seeded `ChaCha8Rng`.
///
/// # Panics
///
/// If the catalog is empty.
pub fn engine_with(catalog: Arc<WeaponCatalog>, seed: u64) -> Engine {
    Engine::new(catalog, EngineConfig::default(), ChaCha8Rng::seed_from_u64(seed))
        .expect("test engine should build")
}

/// Engine over the bundled catalog with a fixed seed.
pub fn bundled_engine(seed: u64) -> Engine {
    let catalog = WeaponCatalog::bundled().expect("bundled catalog should load");
    engine_with(Arc::new(catalog), seed)
}

/// The single-sword catalog used by the knockout scenario.
pub fn sword_catalog() -> Arc<WeaponCatalog> {
    catalog_of(vec![Weapon::fixed("Sword", 5, 2.0)])
}

/// The single-dagger catalog whose roll is always 1.
pub fn dagger_catalog() -> Arc<WeaponCatalog> {
    catalog_of(vec![Weapon::random("Dagger", 1, 3.0)])
}
