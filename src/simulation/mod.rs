pub mod states;
pub mod integrator;
pub mod broadphase;
pub mod brute_force;
pub mod sweep_prune;
pub mod uniform_grid;
pub mod resolver;
pub mod metrics;
pub mod engine;
pub mod scenario;
