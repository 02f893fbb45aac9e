pub mod benchmark;
pub mod configuration;
pub mod error;
pub mod simulation;
pub mod visualization;

pub use error::SimError;

pub use simulation::broadphase::{Axis, BroadPhase, ShapeTest};
pub use simulation::brute_force::BruteForce;
pub use simulation::engine::Engine;
pub use simulation::integrator::integrate;
pub use simulation::metrics::{Metrics, MetricsReport};
pub use simulation::resolver::resolve;
pub use simulation::scenario::Scenario;
pub use simulation::states::{Aabb, Arena, Body, NVec2, World};
pub use simulation::sweep_prune::SweepAndPrune;
pub use simulation::uniform_grid::UniformGrid;

pub use configuration::config::{
    AxisConfig, BodyConfig, EngineConfig, ScenarioConfig, SpawnConfig, StrategyConfig,
};

pub use visualization::vis2d::run_viewer;

pub use benchmark::benchmark::{bench_curve, bench_steps, bench_strategies};
