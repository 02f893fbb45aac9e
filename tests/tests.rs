use colsim::{
    integrate, resolve, Arena, Axis, BroadPhase, BruteForce, Engine, Metrics, NVec2, ShapeTest,
    SimError, SweepAndPrune, UniformGrid, World,
};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Standard test arena matching the default scenario size
fn test_arena() -> Arena {
    Arena::new(600.0, 400.0).unwrap()
}

/// Build a world with bodies at the given (pos, vel) pairs, radius 2.5, mass 1
fn world_with(bodies: &[((f64, f64), (f64, f64))]) -> World {
    let mut world = World::new();
    for ((px, py), (vx, vy)) in bodies {
        let b = world.spawn(NVec2::new(*px, *py), 2.5, 1.0).unwrap();
        b.vel = NVec2::new(*vx, *vy);
    }
    world
}

/// Seeded random population inside the arena (same seed, same bodies)
fn random_world(n: usize, seed: u64, arena: &Arena) -> World {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut world = World::new();
    for _ in 0..n {
        let pos = NVec2::new(
            rng.gen_range(0.0..arena.width),
            rng.gen_range(0.0..arena.height),
        );
        world.spawn(pos, 2.5, 1.0).unwrap();
    }
    world
}

/// Colliding pairs reported by one strategy pass over a clone of `world`
fn pairs_of(mut strategy: BroadPhase, world: &World) -> Vec<(u64, u64)> {
    let mut clone = world.clone();
    let mut pairs = strategy.run(&mut clone.bodies, 1);
    pairs.sort_unstable();
    pairs
}

// ==================================================================================
// Integrator tests
// ==================================================================================

#[test]
fn integration_is_deterministic() {
    let arena = test_arena();
    let mut a = world_with(&[((100.0, 100.0), (3.0, -2.0)), ((50.0, 80.0), (-1.0, 4.0))]);
    a.bodies[0].acc = NVec2::new(0.5, 9.8);
    let mut b = a.clone();

    integrate(&mut a.bodies, 1.0 / 60.0, &arena);
    integrate(&mut b.bodies, 1.0 / 60.0, &arena);

    for (ba, bb) in a.bodies.iter().zip(b.bodies.iter()) {
        assert_eq!(ba.pos, bb.pos, "positions diverged for id {}", ba.id);
        assert_eq!(ba.vel, bb.vel, "velocities diverged for id {}", ba.id);
    }
}

#[test]
fn edge_reflection_flips_one_axis_only() {
    let arena = test_arena();
    // Heading for the right wall; y velocity must be untouched
    let mut world = world_with(&[((599.0, 200.0), (100.0, 7.0))]);

    integrate(&mut world.bodies, 1.0 / 60.0, &arena);

    let b = &world.bodies[0];
    assert_eq!(b.vel.x, -100.0);
    assert_eq!(b.vel.y, 7.0);
}

#[test]
fn static_bodies_never_move() {
    let arena = test_arena();
    let mut world = world_with(&[((300.0, 200.0), (50.0, 50.0))]);
    world.bodies[0].is_static = true;
    world.bodies[0].acc = NVec2::new(0.0, 500.0);

    integrate(&mut world.bodies, 1.0, &arena);

    assert_eq!(world.bodies[0].pos, NVec2::new(300.0, 200.0));
    assert_eq!(world.bodies[0].vel, NVec2::new(50.0, 50.0));
}

#[test]
fn zero_dt_is_a_no_op() {
    let arena = test_arena();
    let mut world = world_with(&[((100.0, 100.0), (3.0, 4.0))]);
    let before = world.bodies[0].clone();

    integrate(&mut world.bodies, 0.0, &arena);

    assert_eq!(world.bodies[0].pos, before.pos);
    assert_eq!(world.bodies[0].vel, before.vel);
}

// ==================================================================================
// Resolver tests
// ==================================================================================

#[test]
fn equal_mass_head_on_exchange() {
    let mut world = world_with(&[((100.0, 100.0), (3.0, 0.0)), ((103.0, 100.0), (-3.0, 0.0))]);

    let hit = resolve(&mut world.bodies, 0, 1, ShapeTest::Circle, 1);

    assert!(hit);
    assert_eq!(world.bodies[0].vel, NVec2::new(-3.0, 0.0));
    assert_eq!(world.bodies[1].vel, NVec2::new(3.0, 0.0));
}

#[test]
fn static_collision_reflects_moving_body() {
    let mut world = world_with(&[((100.0, 100.0), (5.0, -5.0)), ((103.0, 100.0), (0.0, 0.0))]);
    world.bodies[1].is_static = true;

    let hit = resolve(&mut world.bodies, 0, 1, ShapeTest::Circle, 1);

    assert!(hit);
    assert_eq!(world.bodies[0].vel, NVec2::new(-5.0, 5.0));
    assert_eq!(world.bodies[1].vel, NVec2::new(0.0, 0.0));
}

#[test]
fn static_static_pair_does_not_fault() {
    let mut world = world_with(&[((100.0, 100.0), (0.0, 0.0)), ((101.0, 100.0), (0.0, 0.0))]);
    world.bodies[0].is_static = true;
    world.bodies[1].is_static = true;

    let hit = resolve(&mut world.bodies, 0, 1, ShapeTest::Circle, 1);

    assert!(hit);
    assert_eq!(world.bodies[0].vel, NVec2::zeros());
    assert_eq!(world.bodies[1].vel, NVec2::zeros());
}

#[test]
fn collision_marks_both_bodies_for_that_frame() {
    let mut world = world_with(&[((100.0, 100.0), (1.0, 0.0)), ((102.0, 100.0), (0.0, 0.0))]);

    assert!(resolve(&mut world.bodies, 0, 1, ShapeTest::Circle, 7));

    assert!(world.bodies[0].is_colliding(7));
    assert!(world.bodies[1].is_colliding(7));
    assert!(!world.bodies[0].is_colliding(8));
}

#[test]
fn momentum_is_conserved_for_unequal_masses() {
    let mut world = world_with(&[((100.0, 100.0), (4.0, 1.0)), ((103.0, 100.0), (-2.0, 0.0))]);
    world.bodies[0].mass = 3.0;
    world.bodies[1].mass = 1.0;

    let before = world.bodies[0].vel * 3.0 + world.bodies[1].vel * 1.0;
    assert!(resolve(&mut world.bodies, 0, 1, ShapeTest::Circle, 1));
    let after = world.bodies[0].vel * 3.0 + world.bodies[1].vel * 1.0;

    assert!((before - after).norm() < 1e-12, "momentum drift: {:?}", before - after);
}

#[test]
fn separated_circles_do_not_collide() {
    let mut world = world_with(&[((100.0, 100.0), (1.0, 0.0)), ((110.0, 100.0), (0.0, 0.0))]);

    assert!(!resolve(&mut world.bodies, 0, 1, ShapeTest::Circle, 1));
    assert!(!world.bodies[0].is_colliding(1));
}

// ==================================================================================
// Strategy equivalence tests
// ==================================================================================

#[test]
fn aabb_strategies_report_identical_pairs() {
    let arena = test_arena();
    let world = random_world(300, 42, &arena);

    let brute = pairs_of(
        BroadPhase::BruteForce(BruteForce::new(ShapeTest::Aabb)),
        &world,
    );
    let sweep = pairs_of(
        BroadPhase::SweepAndPrune(SweepAndPrune::new(Axis::X, false)),
        &world,
    );
    let grid = pairs_of(
        BroadPhase::UniformGrid(UniformGrid::new(5.0, &arena, ShapeTest::Aabb).unwrap()),
        &world,
    );

    assert!(!brute.is_empty(), "population too sparse to exercise anything");
    assert_eq!(brute, sweep);
    assert_eq!(brute, grid);
}

#[test]
fn sweep_matches_brute_force_on_both_axes() {
    let arena = test_arena();
    let world = random_world(300, 7, &arena);

    let brute = pairs_of(
        BroadPhase::BruteForce(BruteForce::new(ShapeTest::Aabb)),
        &world,
    );
    for axis in [Axis::X, Axis::Y] {
        let sweep = pairs_of(
            BroadPhase::SweepAndPrune(SweepAndPrune::new(axis, false)),
            &world,
        );
        assert_eq!(brute, sweep, "sweep on {axis:?} missed or invented pairs");
    }
}

#[test]
fn circle_grid_matches_circle_brute_force() {
    let arena = test_arena();
    let world = random_world(300, 99, &arena);

    let brute = pairs_of(
        BroadPhase::BruteForce(BruteForce::new(ShapeTest::Circle)),
        &world,
    );
    let grid = pairs_of(
        BroadPhase::UniformGrid(UniformGrid::new(5.0, &arena, ShapeTest::Circle).unwrap()),
        &world,
    );

    assert_eq!(brute, grid);
}

#[test]
fn grid_handles_bodies_outside_the_arena() {
    // AABBs past the arena edge clamp to the boundary cells instead of
    // indexing out of range
    let arena = test_arena();
    let mut world = world_with(&[((-10.0, -10.0), (0.0, 0.0)), ((-12.0, -10.0), (0.0, 0.0))]);

    let mut grid = UniformGrid::new(5.0, &arena, ShapeTest::Circle).unwrap();
    let pairs = grid.run(&mut world.bodies, 1);

    assert_eq!(pairs, vec![(0, 1)]);
}

// ==================================================================================
// Sweep-and-prune tests
// ==================================================================================

#[test]
fn sweep_marks_overlap_frames() {
    let mut world = world_with(&[((100.0, 100.0), (0.0, 0.0)), ((103.0, 101.0), (0.0, 0.0))]);

    let mut sweep = SweepAndPrune::new(Axis::X, false);
    sweep.run(&mut world.bodies, 3);

    assert!(world.bodies[0].is_overlapping(3));
    assert!(world.bodies[1].is_overlapping(3));
}

#[test]
fn distant_bodies_are_never_marked() {
    let mut world = world_with(&[((100.0, 100.0), (0.0, 0.0)), ((300.0, 100.0), (0.0, 0.0))]);

    let mut sweep = SweepAndPrune::new(Axis::X, false);
    let pairs = sweep.run(&mut world.bodies, 1);

    assert!(pairs.is_empty());
    assert!(!world.bodies[0].is_overlapping(1));
}

#[test]
fn dynamic_axis_picks_the_larger_spread() {
    // Bodies strung out along y: the reselection must switch the sort axis
    let mut world = world_with(&[
        ((300.0, 20.0), (0.0, 0.0)),
        ((300.0, 150.0), (0.0, 0.0)),
        ((300.0, 380.0), (0.0, 0.0)),
    ]);

    let mut sweep = SweepAndPrune::new(Axis::X, true);
    sweep.run(&mut world.bodies, 1);

    assert_eq!(sweep.axis, Axis::Y);
}

#[test]
fn sweep_reorders_the_pool_but_keeps_ids() {
    let mut world = world_with(&[((500.0, 100.0), (0.0, 0.0)), ((10.0, 100.0), (0.0, 0.0))]);
    let ids_before: Vec<u64> = world.bodies.iter().map(|b| b.id).collect();

    let mut sweep = SweepAndPrune::new(Axis::X, false);
    sweep.run(&mut world.bodies, 1);

    // Sorted by x now, so positional order changed while ids survived
    assert_eq!(world.bodies[0].id, ids_before[1]);
    assert_eq!(world.bodies[1].id, ids_before[0]);
}

// ==================================================================================
// Uniform grid tests
// ==================================================================================

#[test]
fn body_occupies_exactly_its_covered_cells() {
    let arena = Arena::new(100.0, 100.0).unwrap();
    let mut grid = UniformGrid::new(10.0, &arena, ShapeTest::Circle).unwrap();

    // AABB (7.5, 7.5)..(12.5, 12.5) spans cells (0,0) through (1,1)
    let mut world = world_with(&[((10.0, 10.0), (0.0, 0.0))]);
    grid.run(&mut world.bodies, 1);

    let (nx, ny) = grid.dimensions();
    for ix in 0..nx {
        for iy in 0..ny {
            let expected: &[usize] = if ix <= 1 && iy <= 1 { &[0] } else { &[] };
            assert_eq!(
                grid.cell_contents(ix, iy),
                expected,
                "wrong contents in cell ({ix}, {iy})"
            );
        }
    }
}

#[test]
fn grid_rejects_non_positive_cell_size() {
    let arena = test_arena();
    assert_eq!(
        UniformGrid::new(0.0, &arena, ShapeTest::Circle).unwrap_err(),
        SimError::InvalidCellSize(0.0)
    );
}

#[test]
fn spanning_neighbors_are_tested_once() {
    let arena = Arena::new(100.0, 100.0).unwrap();
    // Both bodies straddle the same cell boundary, co-occupying two cells
    let mut world = world_with(&[((10.0, 5.0), (0.0, 0.0)), ((11.0, 5.0), (0.0, 0.0))]);

    let mut grid = UniformGrid::new(10.0, &arena, ShapeTest::Circle).unwrap();
    let pairs = grid.run(&mut world.bodies, 1);

    assert_eq!(pairs, vec![(0, 1)]);
}

// ==================================================================================
// Metrics tests
// ==================================================================================

#[test]
fn metrics_accumulate_frames_and_runtime() {
    let mut metrics = Metrics::new(0.05, None).unwrap();
    let dt = 1.0 / 60.0;
    let n = 120;

    for _ in 0..n {
        metrics.tick(dt);
    }

    let report = metrics.report();
    assert_eq!(report.total_frames, n);
    assert!((report.total_runtime - n as f64 * dt).abs() < 1e-9);
    assert!((report.average_fps - 60.0).abs() < 1e-6);
}

#[test]
fn fps_samples_close_at_the_interval() {
    let mut metrics = Metrics::new(0.05, None).unwrap();

    // Four 0.02 s ticks: the third closes the 0.05 s interval
    assert_eq!(metrics.tick(0.02), None);
    assert_eq!(metrics.tick(0.02), None);
    let sample = metrics.tick(0.02).expect("interval should have closed");
    assert!((sample - 50.0).abs() < 1e-9); // 3 frames / 0.06 s
    assert_eq!(metrics.tick(0.02), None);
}

#[test]
fn zero_dt_ticks_never_divide_by_zero() {
    let mut metrics = Metrics::new(0.05, None).unwrap();
    for _ in 0..100 {
        assert_eq!(metrics.tick(0.0), None);
    }

    let report = metrics.report();
    assert_eq!(report.total_frames, 100);
    assert!(report.average_fps.is_nan());
}

#[test]
fn metrics_reject_non_positive_interval() {
    assert_eq!(
        Metrics::new(0.0, None).unwrap_err(),
        SimError::InvalidInterval(0.0)
    );
}

// ==================================================================================
// Engine tests
// ==================================================================================

#[test]
fn runtime_cap_stops_the_engine() {
    let arena = test_arena();
    let world = world_with(&[((100.0, 100.0), (10.0, 0.0))]);
    let strategy = BroadPhase::BruteForce(BruteForce::new(ShapeTest::Circle));
    let metrics = Metrics::new(0.05, Some(0.5)).unwrap();
    let mut engine = Engine::new(arena, world, strategy, metrics);

    let dt = 1.0 / 60.0;
    let mut steps = 0;
    while engine.is_running() && steps < 1000 {
        engine.step(dt);
        steps += 1;
    }

    assert!(!engine.is_running());
    assert!(engine.metrics.total_runtime > 0.5);
    // A stopped engine ignores further steps
    let frames = engine.metrics.total_frames;
    engine.step(dt);
    assert_eq!(engine.metrics.total_frames, frames);
}

#[test]
fn engine_tick_detects_and_resolves() {
    let arena = test_arena();
    // Two bodies closing head-on, already touching
    let world = world_with(&[((100.0, 100.0), (3.0, 0.0)), ((104.0, 100.0), (-3.0, 0.0))]);
    let strategy = BroadPhase::BruteForce(BruteForce::new(ShapeTest::Circle));
    let metrics = Metrics::new(0.05, None).unwrap();
    let mut engine = Engine::new(arena, world, strategy, metrics);

    engine.step(1.0 / 60.0);

    let world = engine.world();
    assert_eq!(world.frame, 1);
    assert!(world.bodies[0].is_colliding(1));
    assert!(world.bodies[1].is_colliding(1));
    // Velocities exchanged before integration moved them apart
    assert!(world.bodies[0].vel.x < 0.0);
    assert!(world.bodies[1].vel.x > 0.0);
}

// ==================================================================================
// Construction validation tests
// ==================================================================================

#[test]
fn world_rejects_degenerate_bodies() {
    let mut world = World::new();
    assert_eq!(
        world.spawn(NVec2::zeros(), 0.0, 1.0).unwrap_err(),
        SimError::InvalidRadius(0.0)
    );
    assert_eq!(
        world.spawn(NVec2::zeros(), 1.0, -2.0).unwrap_err(),
        SimError::InvalidMass(-2.0)
    );
    assert!(world.bodies.is_empty());
}

#[test]
fn arena_rejects_non_positive_extents() {
    assert!(Arena::new(0.0, 400.0).is_err());
    assert!(Arena::new(600.0, -1.0).is_err());
}

#[test]
fn spawned_ids_are_unique_and_monotonic() {
    let mut world = World::new();
    for _ in 0..5 {
        world.spawn(NVec2::zeros(), 1.0, 1.0).unwrap();
    }
    let ids: Vec<u64> = world.bodies.iter().map(|b| b.id).collect();
    assert_eq!(ids, vec![0, 1, 2, 3, 4]);
}
