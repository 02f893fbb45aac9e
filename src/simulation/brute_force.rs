//! Brute-force broad phase: test every unordered pair directly.
//!
//! O(n^2) pair tests per tick with no candidate filtering at all, so it can
//! never miss a true collision. The other strategies are checked against its
//! output.

use super::broadphase::{pair_ids, ShapeTest};
use super::resolver::resolve;
use super::states::Body;

#[derive(Debug, Clone)]
pub struct BruteForce {
    pub shape: ShapeTest,
}

impl BruteForce {
    pub fn new(shape: ShapeTest) -> Self {
        Self { shape }
    }

    /// Narrow-phase every pair `(i, j)` with `i < j` and resolve hits.
    pub fn run(&mut self, bodies: &mut [Body], frame: u64) -> Vec<(u64, u64)> {
        let n = bodies.len();
        let mut collisions = Vec::new();

        for i in 0..n {
            for j in (i + 1)..n {
                if resolve(bodies, i, j, self.shape, frame) {
                    collisions.push(pair_ids(&bodies[i], &bodies[j]));
                }
            }
        }

        collisions
    }
}
