//! # Uniform grid broad phase
//!
//! Partitions the arena into fixed-size cells and only narrow-phase-tests
//! bodies that share a cell. Near O(n) per tick for roughly uniform density.
//!
//! The grid is sized once at construction (cell size defaults to twice the
//! body radius, which assumes roughly uniform body sizes) and its buckets are
//! rebuilt from empty every tick; nothing persists across ticks except the
//! allocations themselves.
//!
//! Pass structure, in body order:
//! 1. Compute the cell range the body's AABB covers (inclusive on both axes,
//!    clamped to the grid so an out-of-arena body never indexes out of
//!    range).
//! 2. Union the occupants already present in those cells into a deduplicated
//!    candidate list. Only earlier-inserted bodies can be in there, so every
//!    co-occupying pair is tested exactly once, from the later body's side.
//! 3. Insert the body into every covered cell.
//! 4. Narrow-phase each candidate and resolve hits. Shared-cell pairs that
//!    do not really touch are expected and filtered here; with a correct
//!    cell range there are no false negatives.

use super::broadphase::{pair_ids, ShapeTest};
use super::resolver::resolve;
use super::states::{Arena, Body};
use crate::error::SimError;

#[derive(Debug, Clone)]
pub struct UniformGrid {
    cell_w: f64,
    cell_h: f64,
    nx: usize,
    ny: usize,
    /// Row-major buckets of body indices, cleared every tick.
    cells: Vec<Vec<usize>>,
    /// Narrow-phase test used to confirm shared-cell candidates.
    pub shape: ShapeTest,
}

impl UniformGrid {
    /// Build a grid covering `arena` with square cells of `cell_size`.
    pub fn new(cell_size: f64, arena: &Arena, shape: ShapeTest) -> Result<Self, SimError> {
        if cell_size <= 0.0 {
            return Err(SimError::InvalidCellSize(cell_size));
        }
        // At least one cell per axis even when the arena is smaller than a
        // single cell.
        let nx = ((arena.width / cell_size).ceil() as usize).max(1);
        let ny = ((arena.height / cell_size).ceil() as usize).max(1);
        Ok(Self {
            cell_w: cell_size,
            cell_h: cell_size,
            nx,
            ny,
            cells: vec![Vec::new(); nx * ny],
            shape,
        })
    }

    pub fn dimensions(&self) -> (usize, usize) {
        (self.nx, self.ny)
    }

    /// Inclusive covered cell range of `body`, clamped to valid indices.
    pub fn cell_range(&self, body: &Body) -> (usize, usize, usize, usize) {
        let bb = body.aabb();
        let (min, max) = (bb.min(), bb.max());
        let clamp = |v: f64, n: usize| -> usize {
            if v <= 0.0 {
                0
            } else {
                (v as usize).min(n - 1)
            }
        };
        let ix0 = clamp((min.x / self.cell_w).floor(), self.nx);
        let ix1 = clamp((max.x / self.cell_w).floor(), self.nx);
        let iy0 = clamp((min.y / self.cell_h).floor(), self.ny);
        let iy1 = clamp((max.y / self.cell_h).floor(), self.ny);
        (ix0, ix1, iy0, iy1)
    }

    /// One grid pass: clear, re-bucket in body order, test shared-cell pairs.
    pub fn run(&mut self, bodies: &mut [Body], frame: u64) -> Vec<(u64, u64)> {
        for cell in self.cells.iter_mut() {
            cell.clear();
        }

        let mut collisions = Vec::new();
        let mut candidates: Vec<usize> = Vec::new();

        for i in 0..bodies.len() {
            let (ix0, ix1, iy0, iy1) = self.cell_range(&bodies[i]);

            // Gather earlier occupants of every covered cell, then insert.
            candidates.clear();
            for ix in ix0..=ix1 {
                for iy in iy0..=iy1 {
                    let cell = &mut self.cells[iy * self.nx + ix];
                    candidates.extend_from_slice(cell);
                    cell.push(i);
                }
            }

            // A body spanning several cells can co-occupy more than one cell
            // with the same neighbor; dedup so the pair is tested once.
            candidates.sort_unstable();
            candidates.dedup();

            for &j in &candidates {
                if resolve(bodies, j, i, self.shape, frame) {
                    collisions.push(pair_ids(&bodies[i], &bodies[j]));
                }
            }
        }

        collisions
    }

    /// Test hook: indices currently bucketed in cell `(ix, iy)`.
    pub fn cell_contents(&self, ix: usize, iy: usize) -> &[usize] {
        &self.cells[iy * self.nx + ix]
    }
}
