//! Fixed-step time integration for every non-static body.
//!
//! Semi-implicit Euler: velocity first, then position from the new velocity,
//! both in place. Arena edges reflect the offending velocity component rather
//! than clamping position, so a body may overshoot the boundary by up to one
//! frame's travel before turning around.

use super::states::{Arena, Body};

/// Advance all non-static bodies by `dt` seconds and reflect off arena edges.
///
/// `dt` may be zero (a no-op step); callers driving this from a real clock
/// clamp pathological first-frame deltas before getting here. Pure in-place
/// mutation, no allocation, no error path.
pub fn integrate(bodies: &mut [Body], dt: f64, arena: &Arena) {
    for b in bodies.iter_mut() {
        if b.is_static {
            continue;
        }

        // v_n+1 = v_n + a * dt, then x_n+1 = x_n + v_n+1 * dt
        b.vel += b.acc * dt;
        b.pos += b.vel * dt;

        // Edge contact per axis: the AABB leaving [0, extent] negates that
        // axis's velocity and leaves the other axis untouched.
        if b.pos.x - b.radius < 0.0 || b.pos.x + b.radius > arena.width {
            b.vel.x = -b.vel.x;
        }
        if b.pos.y - b.radius < 0.0 || b.pos.y + b.radius > arena.height {
            b.vel.y = -b.vel.y;
        }
    }
}
