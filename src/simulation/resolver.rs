//! Narrow-phase tests and collision response.
//!
//! Two exact tests (circle-circle and AABB-AABB) plus the shared response:
//! static bodies reflect the other body, dynamic pairs exchange momentum with
//! a per-axis 1D elastic formula. The per-axis response ignores the contact
//! normal; that is a deliberate modeling simplification of this simulator,
//! not something to correct here.

use super::broadphase::ShapeTest;
use super::states::Body;

/// Run the configured narrow-phase test on `(i, j)` and resolve on success.
///
/// On a confirmed collision both bodies' `last_collision_frame` markers are
/// set to `frame` and their velocities are updated. Returns whether the pair
/// collided.
pub fn resolve(bodies: &mut [Body], i: usize, j: usize, shape: ShapeTest, frame: u64) -> bool {
    let hit = match shape {
        ShapeTest::Circle => circle_test(&bodies[i], &bodies[j]),
        ShapeTest::Aabb => aabb_test(&bodies[i], &bodies[j]),
    };
    if !hit {
        return false;
    }

    let (a, b) = pair_mut(bodies, i, j);
    a.last_collision_frame = Some(frame);
    b.last_collision_frame = Some(frame);
    respond(a, b);
    true
}

/// Circle-circle: squared center distance against squared summed radii.
fn circle_test(a: &Body, b: &Body) -> bool {
    let d = a.pos - b.pos;
    let r = a.radius + b.radius;
    d.dot(&d) <= r * r
}

/// AABB-AABB: independent per-axis separation check.
fn aabb_test(a: &Body, b: &Body) -> bool {
    a.aabb().overlaps(&b.aabb())
}

/// Apply the collision response to a confirmed pair.
fn respond(a: &mut Body, b: &mut Body) {
    match (a.is_static, b.is_static) {
        // Static-static pairs are normally filtered out before the narrow
        // phase ever sees them; if one slips through, do nothing.
        (true, true) => {}
        // Exactly one static body: pure reflection of the moving one.
        (true, false) => b.vel = -b.vel,
        (false, true) => a.vel = -a.vel,
        (false, false) => elastic_exchange(a, b),
    }
}

/// Per-axis 1D elastic collision, applied componentwise to x and y.
///
/// Standard two-body momentum/energy-conserving 1D formula:
///   v_b' = (2*ma*va + mb*vb - ma*vb) / (ma + mb)
///   v_a' = vb + v_b' - va
/// Both velocities are replaced simultaneously so each update sees the
/// pre-collision values of both bodies.
fn elastic_exchange(a: &mut Body, b: &mut Body) {
    let (ma, mb) = (a.mass, b.mass);
    let (va, vb) = (a.vel, b.vel);

    let vb_new = (va * (2.0 * ma) + vb * mb - vb * ma) / (ma + mb);
    let va_new = vb + vb_new - va;

    a.vel = va_new;
    b.vel = vb_new;
}

/// Split one slice borrow into two disjoint `&mut Body`.
fn pair_mut(bodies: &mut [Body], i: usize, j: usize) -> (&mut Body, &mut Body) {
    debug_assert!(i != j);
    if i < j {
        let (lo, hi) = bodies.split_at_mut(j);
        (&mut lo[i], &mut hi[0])
    } else {
        let (lo, hi) = bodies.split_at_mut(i);
        (&mut hi[0], &mut lo[j])
    }
}
