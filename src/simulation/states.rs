//! Core state types for the arena simulation.
//!
//! Defines:
//! - `Body` using `NVec2` (position/velocity/acceleration, mass, radius)
//! - `Aabb`, the bounding box derived on demand from a body
//! - `Arena`, the rectangular bounds bodies bounce inside
//! - `World`, the body pool plus the global frame counter and time `t`
//!
//! Per-frame collision/overlap markers live on the body itself so a renderer
//! can color bodies without any extra bookkeeping structure.

use nalgebra::Vector2;

use crate::error::SimError;

pub type NVec2 = Vector2<f64>;

#[derive(Debug, Clone)]
pub struct Body {
    pub pos: NVec2, // position (arena coordinates, origin top-left)
    pub vel: NVec2, // velocity
    pub acc: NVec2, // acceleration
    pub mass: f64, // mass, only the elastic resolver reads it
    pub radius: f64, // circle radius; squared, it is the collision threshold
    pub is_static: bool, // static bodies never move; collisions reflect the other body
    pub id: u64, // unique, monotonic; identity only, never ordering
    pub last_collision_frame: Option<u64>, // frame of the last confirmed narrow-phase hit
    pub last_overlap_frame: Option<u64>, // frame of the last broad-phase AABB overlap
}

impl Body {
    /// Bounding box of this body at its current position.
    ///
    /// Always derived fresh so the center tracks the body; nothing caches an
    /// `Aabb` across a position update.
    pub fn aabb(&self) -> Aabb {
        Aabb {
            center: self.pos,
            half: NVec2::new(self.radius, self.radius),
        }
    }

    /// True iff this body was in a confirmed collision on `frame`.
    pub fn is_colliding(&self, frame: u64) -> bool {
        self.last_collision_frame == Some(frame)
    }

    /// True iff this body's AABB overlapped another's on `frame`.
    pub fn is_overlapping(&self, frame: u64) -> bool {
        self.last_overlap_frame == Some(frame)
    }
}

/// Axis-aligned bounding box as center + half-extents.
///
/// For circular bodies both half-extents equal the radius.
#[derive(Debug, Clone, Copy)]
pub struct Aabb {
    pub center: NVec2,
    pub half: NVec2,
}

impl Aabb {
    pub fn min(&self) -> NVec2 {
        self.center - self.half
    }

    pub fn max(&self) -> NVec2 {
        self.center + self.half
    }

    /// Full both-axes overlap test: separated iff either axis's center
    /// distance exceeds the summed half-extents on that axis.
    pub fn overlaps(&self, other: &Aabb) -> bool {
        (self.center.x - other.center.x).abs() <= self.half.x + other.half.x
            && (self.center.y - other.center.y).abs() <= self.half.y + other.half.y
    }
}

/// Rectangular arena bounds. Bodies reflect off all four edges.
#[derive(Debug, Clone, Copy)]
pub struct Arena {
    pub width: f64,
    pub height: f64,
}

impl Arena {
    pub fn new(width: f64, height: f64) -> Result<Self, SimError> {
        if width <= 0.0 || height <= 0.0 {
            return Err(SimError::InvalidArena { width, height });
        }
        Ok(Self { width, height })
    }
}

/// The body pool plus global tick state.
///
/// The `bodies` order is *not* stable: sweep-and-prune re-sorts it in place
/// every tick, so anything outside a single tick must track bodies by `id`.
#[derive(Debug, Clone)]
pub struct World {
    pub bodies: Vec<Body>,
    pub frame: u64, // global frame counter, compared against the per-body markers
    pub t: f64, // accumulated simulated time
    next_id: u64,
}

impl World {
    pub fn new() -> Self {
        Self {
            bodies: Vec::new(),
            frame: 0,
            t: 0.0,
            next_id: 0,
        }
    }

    /// Add a body, validating its geometry up front. Degenerate radii or
    /// masses are rejected here rather than surfacing as NaNs mid-run.
    pub fn spawn(&mut self, pos: NVec2, radius: f64, mass: f64) -> Result<&mut Body, SimError> {
        if radius <= 0.0 {
            return Err(SimError::InvalidRadius(radius));
        }
        if mass <= 0.0 {
            return Err(SimError::InvalidMass(mass));
        }
        let id = self.next_id;
        self.next_id += 1;
        self.bodies.push(Body {
            pos,
            vel: NVec2::zeros(),
            acc: NVec2::zeros(),
            mass,
            radius,
            is_static: false,
            id,
            last_collision_frame: None,
            last_overlap_frame: None,
        });
        // Just pushed, so last_mut always exists
        Ok(self.bodies.last_mut().unwrap())
    }

    /// Look a body up by id (linear scan; the pool order is unstable).
    pub fn body_by_id(&self, id: u64) -> Option<&Body> {
        self.bodies.iter().find(|b| b.id == id)
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}
