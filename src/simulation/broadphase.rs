//! Broad-phase strategy selection.
//!
//! Exactly one strategy is active per run, chosen at construction as a closed
//! variant. Each tick the engine hands the strategy the whole body pool; the
//! strategy generates candidate pairs its own way and funnels every candidate
//! through the same narrow-phase resolver, so strategies can only ever differ
//! in which pairs they *test*, never in the final collision outcome.

use super::brute_force::BruteForce;
use super::states::{Body, NVec2};
use super::sweep_prune::SweepAndPrune;
use super::uniform_grid::UniformGrid;

/// Which exact narrow-phase test a strategy confirms candidates with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeTest {
    Circle,
    Aabb,
}

/// Sort axis for sweep-and-prune.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    /// Component of `v` on this axis.
    pub fn of(self, v: &NVec2) -> f64 {
        match self {
            Axis::X => v.x,
            Axis::Y => v.y,
        }
    }
}

/// The closed set of interchangeable broad-phase strategies.
#[derive(Debug, Clone)]
pub enum BroadPhase {
    /// All unordered pairs, O(n^2); the correctness baseline.
    BruteForce(BruteForce),
    /// Sort by AABB minimum on one axis, early-break on the sorted order.
    SweepAndPrune(SweepAndPrune),
    /// Spatial hash into fixed-size cells, rebuilt from empty every tick.
    UniformGrid(UniformGrid),
}

impl BroadPhase {
    /// Run one broad-phase pass over `bodies` for the tick numbered `frame`,
    /// resolving every confirmed collision in place.
    ///
    /// Returns the confirmed colliding pairs as `(id, id)` with the smaller
    /// id first, deduplicated by construction (each unordered pair is tested
    /// at most once by every strategy).
    pub fn run(&mut self, bodies: &mut [Body], frame: u64) -> Vec<(u64, u64)> {
        match self {
            BroadPhase::BruteForce(s) => s.run(bodies, frame),
            BroadPhase::SweepAndPrune(s) => s.run(bodies, frame),
            BroadPhase::UniformGrid(s) => s.run(bodies, frame),
        }
    }

    /// Short name for logs and benchmark output.
    pub fn name(&self) -> &'static str {
        match self {
            BroadPhase::BruteForce(s) => match s.shape {
                ShapeTest::Circle => "brute_force_circle",
                ShapeTest::Aabb => "brute_force_aabb",
            },
            BroadPhase::SweepAndPrune(_) => "sweep_and_prune",
            BroadPhase::UniformGrid(_) => "uniform_grid",
        }
    }
}

/// Normalize a colliding pair to `(min_id, max_id)`.
pub(crate) fn pair_ids(a: &Body, b: &Body) -> (u64, u64) {
    if a.id <= b.id {
        (a.id, b.id)
    } else {
        (b.id, a.id)
    }
}
