//! Wall-clock comparisons of the broad-phase strategies.
//!
//! Builds deterministic populations (no RNG needed), times one or more full
//! ticks per strategy, and prints the results. Output is plain `println!` so
//! it can be piped straight into a spreadsheet.

use std::time::Instant;

use crate::simulation::broadphase::{Axis, BroadPhase, ShapeTest};
use crate::simulation::brute_force::BruteForce;
use crate::simulation::engine::Engine;
use crate::simulation::metrics::Metrics;
use crate::simulation::states::{Arena, NVec2, World};
use crate::simulation::sweep_prune::SweepAndPrune;
use crate::simulation::uniform_grid::UniformGrid;

const ARENA_W: f64 = 600.0;
const ARENA_H: f64 = 400.0;
const RADIUS: f64 = 2.5;
const DT: f64 = 1.0 / 60.0;

/// Deterministic scattered population of size `n`.
fn make_world(n: usize) -> World {
    let mut world = World::new();
    for i in 0..n {
        let i_f = i as f64;
        // Deterministic positions, no rand needed
        let pos = NVec2::new(
            ((i_f * 0.37).sin() * 0.5 + 0.5) * ARENA_W,
            ((i_f * 0.13).cos() * 0.5 + 0.5) * ARENA_H,
        );
        let body = world
            .spawn(pos, RADIUS, 1.0)
            .expect("benchmark body parameters are valid");
        body.acc = NVec2::new(0.0, 500.0);
    }
    world
}

fn make_arena() -> Arena {
    Arena::new(ARENA_W, ARENA_H).expect("benchmark arena extents are valid")
}

/// The three strategy families under comparison, freshly parameterized.
fn strategies(arena: &Arena) -> Vec<BroadPhase> {
    vec![
        BroadPhase::BruteForce(BruteForce::new(ShapeTest::Circle)),
        BroadPhase::SweepAndPrune(SweepAndPrune::new(Axis::X, true)),
        BroadPhase::UniformGrid(
            UniformGrid::new(2.0 * RADIUS, arena, ShapeTest::Circle)
                .expect("benchmark cell size is valid"),
        ),
    ]
}

/// Time a single broad-phase pass per strategy across population sizes.
pub fn bench_strategies() {
    let ns = [200, 400, 800, 1600, 3200, 6400];
    let arena = make_arena();

    for n in ns {
        print!("N = {n:5}");
        for mut strategy in strategies(&arena) {
            let mut world = make_world(n);

            // Warm up
            strategy.run(&mut world.bodies, 1);

            let t0 = Instant::now();
            strategy.run(&mut world.bodies, 2);
            let dt = t0.elapsed().as_secs_f64();
            print!(", {} = {dt:8.6} s", strategy.name());
        }
        println!();
    }
}

/// Time full engine ticks (metrics + broad phase + integration).
pub fn bench_steps() {
    let ns = [200, 400, 800, 1600, 3200, 6400];
    let steps = 60;
    let arena = make_arena();

    for n in ns {
        print!("N = {n:5}");
        for strategy in strategies(&arena) {
            let name = strategy.name();
            let metrics =
                Metrics::new(0.05, None).expect("benchmark metrics interval is valid");
            let mut engine = Engine::new(arena, make_world(n), strategy, metrics);

            // Warm up
            engine.step(DT);

            let t0 = Instant::now();
            for _ in 0..steps {
                engine.step(DT);
            }
            let per_step = t0.elapsed().as_secs_f64() / steps as f64;
            print!(", {name} step = {per_step:8.6} s");
        }
        println!();
    }
}

/// Per-tick timing curve across a fine range of N.
/// Paste output directly into a spreadsheet to graph.
pub fn bench_curve() {
    println!("N,brute_ms,sweep_ms,grid_ms");

    let arena = make_arena();
    for n in (200..=6400).step_by(200) {
        // Small n: average over a few ticks to smooth noise.
        // Large n: fewer ticks to keep the brute-force column tolerable.
        let steps = if n <= 800 { 5 } else { 1 };

        let mut cols = Vec::new();
        for mut strategy in strategies(&arena) {
            let mut world = make_world(n);

            let t0 = Instant::now();
            for frame in 1..=steps {
                strategy.run(&mut world.bodies, frame as u64);
            }
            let ms = t0.elapsed().as_secs_f64() * 1000.0 / steps as f64;
            cols.push(format!("{ms:.6}"));
        }
        println!("{},{}", n, cols.join(","));
    }
}
