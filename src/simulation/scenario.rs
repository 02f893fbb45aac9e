//! Build a fully-initialized simulation from configuration.
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime bundle:
//! - arena bounds and the selected broad-phase strategy
//! - the body pool (seeded random population plus explicit bodies)
//! - the metrics collector (interval, optional runtime cap)
//!
//! The bundle is inserted into Bevy as a `Resource` and consumed by the
//! stepping and rendering systems, or driven directly for headless runs.

use bevy::prelude::Resource;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::configuration::config::{AxisConfig, ScenarioConfig, StrategyConfig};
use crate::error::SimError;
use crate::simulation::broadphase::{Axis, BroadPhase, ShapeTest};
use crate::simulation::brute_force::BruteForce;
use crate::simulation::engine::Engine;
use crate::simulation::metrics::Metrics;
use crate::simulation::states::{Arena, NVec2, World};
use crate::simulation::sweep_prune::SweepAndPrune;
use crate::simulation::uniform_grid::UniformGrid;

/// Default seconds between FPS samples.
const DEFAULT_METRICS_INTERVAL: f64 = 0.05;

/// Bevy resource wrapping a fully-initialized simulation engine.
#[derive(Resource)]
pub struct Scenario {
    pub engine: Engine,
}

impl Scenario {
    /// Map a [`ScenarioConfig`] to a runtime [`Engine`], validating all
    /// geometry and strategy parameters on the way.
    pub fn build(cfg: ScenarioConfig) -> Result<Self, SimError> {
        let arena = Arena::new(cfg.engine.width, cfg.engine.height)?;

        let mut world = World::new();

        // Seeded random population: same seed, same bodies.
        let mut spawn_radius = None;
        if let Some(spawn) = &cfg.spawn {
            let mut rng = StdRng::seed_from_u64(spawn.seed);
            let accel = match &spawn.accel {
                Some(v) => vec2(v)?,
                None => NVec2::new(0.0, 500.0),
            };
            let jitter = spawn.accel_jitter.unwrap_or(0.0);
            for _ in 0..spawn.count {
                let pos = NVec2::new(
                    rng.gen_range(0.0..arena.width),
                    rng.gen_range(0.0..arena.height),
                );
                let body = world.spawn(pos, spawn.radius, spawn.mass)?;
                body.acc = accel;
                if jitter > 0.0 {
                    body.acc.x += rng.gen_range(0.0..jitter);
                }
            }
            spawn_radius = Some(spawn.radius);
        }

        // Explicitly placed bodies (the only way to get static ones).
        for bc in &cfg.bodies {
            let pos = vec2(&bc.pos)?;
            let body = world.spawn(pos, bc.radius, bc.mass)?;
            if let Some(v) = &bc.vel {
                body.vel = vec2(v)?;
            }
            if let Some(a) = &bc.acc {
                body.acc = vec2(a)?;
            }
            body.is_static = bc.is_static.unwrap_or(false);
        }

        let strategy = build_strategy(&cfg, &arena, spawn_radius)?;

        let interval = cfg
            .engine
            .metrics_interval
            .unwrap_or(DEFAULT_METRICS_INTERVAL);
        let metrics = Metrics::new(interval, cfg.engine.max_runtime)?;

        let mut engine = Engine::new(arena, world, strategy, metrics);
        engine.print_metrics = cfg.engine.print_metrics.unwrap_or(false);

        log::info!(
            "scenario: {} bodies, strategy {}, arena {}x{}",
            engine.world.bodies.len(),
            engine.strategy.name(),
            cfg.engine.width,
            cfg.engine.height,
        );

        Ok(Self { engine })
    }
}

/// Select and parameterize the broad-phase strategy.
fn build_strategy(
    cfg: &ScenarioConfig,
    arena: &Arena,
    spawn_radius: Option<f64>,
) -> Result<BroadPhase, SimError> {
    let strategy = match cfg.engine.strategy {
        StrategyConfig::BruteForceCircle => {
            BroadPhase::BruteForce(BruteForce::new(ShapeTest::Circle))
        }
        StrategyConfig::BruteForceAabb => BroadPhase::BruteForce(BruteForce::new(ShapeTest::Aabb)),
        StrategyConfig::SweepAndPrune => {
            let axis = match cfg.engine.sort_axis.unwrap_or(AxisConfig::X) {
                AxisConfig::X => Axis::X,
                AxisConfig::Y => Axis::Y,
            };
            let dynamic = cfg.engine.dynamic_axis.unwrap_or(false);
            BroadPhase::SweepAndPrune(SweepAndPrune::new(axis, dynamic))
        }
        StrategyConfig::UniformGrid => {
            // Cell size defaults to twice the spawn radius, which assumes a
            // roughly uniform body size across the population.
            let cell_size = cfg
                .engine
                .cell_size
                .or(spawn_radius.map(|r| 2.0 * r))
                .unwrap_or(1.0);
            BroadPhase::UniformGrid(UniformGrid::new(cell_size, arena, ShapeTest::Circle)?)
        }
    };
    Ok(strategy)
}

/// Interpret a YAML 2-element list as an `NVec2`.
fn vec2(v: &[f64]) -> Result<NVec2, SimError> {
    if v.len() != 2 {
        return Err(SimError::BadVectorLen(v.len()));
    }
    Ok(NVec2::new(v[0], v[1]))
}
