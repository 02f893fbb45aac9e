//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! simulation scenario. A scenario consists of:
//!
//! - [`EngineConfig`] – arena size, broad-phase strategy, strategy knobs,
//!   metrics interval and optional runtime cap
//! - [`SpawnConfig`]  – seeded random body population
//! - [`BodyConfig`]   – explicitly placed bodies (may be static)
//! - [`ScenarioConfig`] – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! An example scenario YAML matching these types:
//!
//! ```yaml
//! engine:
//!   width: 600.0
//!   height: 400.0
//!   strategy: "sweep_and_prune"  # or "brute_force_circle",
//!                                # "brute_force_aabb", "uniform_grid"
//!   sort_axis: "x"               # initial sweep-and-prune axis
//!   dynamic_axis: true           # reselect the axis from observed spread
//!   cell_size: 5.0               # uniform grid override (default 2 * radius)
//!   metrics_interval: 0.05       # seconds between FPS samples
//!   max_runtime: 30.0            # optional hard stop, in simulated seconds
//!   print_metrics: false
//!
//! spawn:
//!   count: 1000
//!   seed: 42
//!   radius: 2.5
//!   mass: 1.0
//!   accel: [0.0, 500.0]          # base acceleration for spawned bodies
//!   accel_jitter: 5.0            # added uniformly at random on x
//!
//! bodies:
//!   - pos: [25.0, 25.0]
//!     vel: [0.0, 0.0]
//!     acc: [-30.0, -500.0]
//!     mass: 1.0
//!     radius: 2.5
//!     is_static: false
//! ```
//!
//! The engine maps this configuration into its internal runtime scenario
//! representation; validation of radii, masses, cell sizes and arena extents
//! happens during that mapping.

use serde::Deserialize;

/// Which broad-phase strategy the run uses. Exactly one is active per run.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategyConfig {
    #[serde(rename = "brute_force_circle")] // all pairs, circle-circle narrow phase
    BruteForceCircle,

    #[serde(rename = "brute_force_aabb")] // all pairs, AABB-AABB narrow phase
    BruteForceAabb,

    #[serde(rename = "sweep_and_prune")] // sort-by-axis with early break
    SweepAndPrune,

    #[serde(rename = "uniform_grid")] // spatial hash into fixed-size cells
    UniformGrid,
}

/// Initial sweep-and-prune sort axis.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisConfig {
    #[serde(rename = "x")]
    X,
    #[serde(rename = "y")]
    Y,
}

/// Arena, strategy and metrics settings for a run.
#[derive(Deserialize, Debug, Clone)]
pub struct EngineConfig {
    pub width: f64,  // arena width in simulation units
    pub height: f64, // arena height in simulation units
    pub strategy: StrategyConfig,
    pub sort_axis: Option<AxisConfig>, // sweep-and-prune only; default "x"
    pub dynamic_axis: Option<bool>, // sweep-and-prune only; default false
    pub cell_size: Option<f64>, // uniform grid only; default 2 * spawn radius
    pub metrics_interval: Option<f64>, // default 0.05 s
    pub max_runtime: Option<f64>, // simulated seconds; None runs until closed
    pub print_metrics: Option<bool>, // print each FPS sample as it closes
}

/// Seeded random population spawned inside the arena.
#[derive(Deserialize, Debug, Clone)]
pub struct SpawnConfig {
    pub count: usize,
    pub seed: u64, // StdRng seed, same seed => same population
    pub radius: f64,
    pub mass: f64,
    pub accel: Option<Vec<f64>>, // base acceleration, default [0, 500]
    pub accel_jitter: Option<f64>, // uniform random extra x acceleration
}

/// Configuration for a single explicitly placed body.
#[derive(Deserialize, Debug, Clone)]
pub struct BodyConfig {
    pub pos: Vec<f64>,
    pub vel: Option<Vec<f64>>,
    pub acc: Option<Vec<f64>>,
    pub mass: f64,
    pub radius: f64,
    pub is_static: Option<bool>,
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone)]
pub struct ScenarioConfig {
    pub engine: EngineConfig,
    pub spawn: Option<SpawnConfig>,
    #[serde(default)]
    pub bodies: Vec<BodyConfig>,
}
