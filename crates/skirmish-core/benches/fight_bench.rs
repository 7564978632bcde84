use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use skirmish_core::{Engine, EngineConfig, WeaponCatalog};
use std::sync::Arc;

fn engine() -> Engine {
    let catalog = Arc::new(WeaponCatalog::bundled().unwrap());
    Engine::new(catalog, EngineConfig::default(), ChaCha8Rng::seed_from_u64(42)).unwrap()
}

fn bench_new_game_state(c: &mut Criterion) {
    let mut engine = engine();

    c.bench_function("new_game_state", |b| {
        b.iter(|| black_box(engine.new_game_state().unwrap()))
    });
}

fn bench_full_round(c: &mut Criterion) {
    let mut engine = engine();

    // Fresh state, one reroll, one exchange
    c.bench_function("full_round", |b| {
        b.iter(|| {
            let mut state = engine.new_game_state().unwrap();
            let _ = engine.reroll_weapon(&mut state);
            black_box(engine.fight(&mut state).unwrap())
        })
    });
}

fn bench_typestate_round(c: &mut Criterion) {
    let mut engine = engine();

    c.bench_function("typestate_round", |b| {
        b.iter(|| black_box(engine.start_round().unwrap().fight(&mut engine)))
    });
}

criterion_group!(benches, bench_new_game_state, bench_full_round, bench_typestate_round);
criterion_main!(benches);
