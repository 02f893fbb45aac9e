//! Per-tick orchestrator.
//!
//! One tick runs to completion in a fixed order: metrics update, broad-phase
//! pass (which resolves collisions as it finds them), then integration.
//! Single-threaded and synchronous; the body pool is exclusively borrowed for
//! the duration of a tick. Cancellation is cooperative: the running flag is
//! checked once at the top of each tick, never mid-tick.

use super::broadphase::BroadPhase;
use super::integrator::integrate;
use super::metrics::{Metrics, MetricsReport};
use super::states::{Arena, World};

pub struct Engine {
    pub arena: Arena,
    pub world: World,
    pub strategy: BroadPhase,
    pub metrics: Metrics,
    pub print_metrics: bool,
    running: bool,
}

impl Engine {
    pub fn new(arena: Arena, world: World, strategy: BroadPhase, metrics: Metrics) -> Self {
        Self {
            arena,
            world,
            strategy,
            metrics,
            print_metrics: false,
            running: true,
        }
    }

    /// Advance the simulation by one tick of `dt` seconds.
    pub fn step(&mut self, dt: f64) {
        if !self.running {
            return;
        }

        if let Some(fps) = self.metrics.tick(dt) {
            if self.print_metrics {
                println!("fps: {fps:.1}");
            }
        }
        if self.metrics.cap_exceeded() {
            self.running = false;
            return;
        }

        self.world.frame += 1;
        self.world.t += dt;

        let frame = self.world.frame;
        let collisions = self.strategy.run(&mut self.world.bodies, frame);
        log::debug!(
            "frame {frame}: {} bodies, {} collisions ({})",
            self.world.bodies.len(),
            collisions.len(),
            self.strategy.name(),
        );

        integrate(&mut self.world.bodies, dt, &self.arena);
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Request a stop; takes effect at the next tick boundary.
    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Read-only view of the body pool, sufficient for drawing.
    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn report(&self) -> MetricsReport {
        self.metrics.report()
    }
}
