//! # Sweep-and-prune broad phase
//!
//! Sorts the body pool along one axis by AABB minimum, then exploits the
//! sorted order to skip pairs that cannot overlap: walking `j` upward from
//! `i`, the first `j` whose minimum lies past `i`'s maximum ends the inner
//! walk, because every later body starts even further along the axis. That
//! early break is only sound against a freshly sorted order, so the sort
//! runs again every tick as bodies move.
//!
//! Surviving pairs get a full both-axes AABB overlap test. Overlap marks both
//! bodies for the renderer and promotes the pair to the narrow phase; the
//! narrow-phase AABB collision test then confirms and resolves. The two
//! stages use the same per-axis formula but stay separate: overlap marking is
//! independently observable, collision marking implies a response.
//!
//! The sort axis is instance state on the strategy, carried across ticks.
//! In variance mode the walk also tracks the min/max AABB bound seen on each
//! axis and hands the next tick whichever axis has the larger spread, which
//! separates clustered bodies better and cuts false candidates.
//!
//! Side effect worth knowing about: the sort permutes the body pool itself,
//! so positional indices into it are unstable across ticks. Identity goes
//! through `Body::id`.

use super::broadphase::{pair_ids, Axis, ShapeTest};
use super::resolver::resolve;
use super::states::Body;

#[derive(Debug, Clone)]
pub struct SweepAndPrune {
    /// Current sort axis, carried across ticks.
    pub axis: Axis,
    /// Reselect the axis each tick from the observed positional spread.
    pub dynamic_axis: bool,
}

impl SweepAndPrune {
    pub fn new(axis: Axis, dynamic_axis: bool) -> Self {
        Self { axis, dynamic_axis }
    }

    /// One sweep pass: sort, prune, overlap-mark, narrow-phase, resolve.
    pub fn run(&mut self, bodies: &mut [Body], frame: u64) -> Vec<(u64, u64)> {
        let axis = self.axis;

        // Ascending by AABB minimum on the sort axis. Equal minimums land in
        // whatever order the sort leaves them; the overlap test is the real
        // filter, so the tie-break carries no meaning.
        bodies.sort_by(|a, b| {
            let ka = axis.of(&a.aabb().min());
            let kb = axis.of(&b.aabb().min());
            ka.partial_cmp(&kb).unwrap_or(std::cmp::Ordering::Equal)
        });

        let n = bodies.len();
        let mut collisions = Vec::new();

        // Spread tracking for dynamic axis reselection.
        let mut lo = [f64::INFINITY; 2];
        let mut hi = [f64::NEG_INFINITY; 2];

        for i in 0..n {
            let max_i = axis.of(&bodies[i].aabb().max());

            if self.dynamic_axis {
                let bb = bodies[i].aabb();
                let (min, max) = (bb.min(), bb.max());
                lo[0] = lo[0].min(min.x);
                hi[0] = hi[0].max(max.x);
                lo[1] = lo[1].min(min.y);
                hi[1] = hi[1].max(max.y);
            }

            for j in (i + 1)..n {
                // Sorted order: once j starts past i's end on this axis, so
                // does every body after j.
                if axis.of(&bodies[j].aabb().min()) > max_i {
                    break;
                }

                // Candidate survived the prune; check the other axis too.
                if !bodies[i].aabb().overlaps(&bodies[j].aabb()) {
                    continue;
                }
                bodies[i].last_overlap_frame = Some(frame);
                bodies[j].last_overlap_frame = Some(frame);

                if resolve(bodies, i, j, ShapeTest::Aabb, frame) {
                    collisions.push(pair_ids(&bodies[i], &bodies[j]));
                }
            }
        }

        if self.dynamic_axis && n > 0 {
            let spread_x = hi[0] - lo[0];
            let spread_y = hi[1] - lo[1];
            self.axis = if spread_x >= spread_y { Axis::X } else { Axis::Y };
        }

        collisions
    }
}
