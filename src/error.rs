//! Construction/validation errors for the simulation core.
//!
//! The tick loop itself has no failure paths; everything that can go wrong
//! is rejected here, at construction time.

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum SimError {
    #[error("body radius must be positive, got {0}")]
    InvalidRadius(f64),

    #[error("body mass must be positive, got {0}")]
    InvalidMass(f64),

    #[error("grid cell size must be positive, got {0}")]
    InvalidCellSize(f64),

    #[error("arena extents must be positive, got {width} x {height}")]
    InvalidArena { width: f64, height: f64 },

    #[error("metrics report interval must be positive, got {0}")]
    InvalidInterval(f64),

    #[error("expected a 2-component vector, got {0} components")]
    BadVectorLen(usize),
}
