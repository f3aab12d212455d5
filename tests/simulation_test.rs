use flock::{Boid, FlockParams, Simulation, SimulationConfig, UpdateMode, Vector2, Viewport};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha12Rng;

const EPS: f32 = 1e-4;

// Every weight zeroed so a scenario can switch on exactly one rule
fn silent_params() -> FlockParams {
    FlockParams {
        attraction: 0.0,
        avoidance: 0.0,
        alignment: 0.0,
        noise: 0.0,
        bounding: 0.0,
        scattering: 0.0,
        handling: 1.0,
        ..FlockParams::default()
    }
}

fn at_rest(x: f32, y: f32) -> Boid {
    Boid::new(Vector2::new(x, y), Vector2::ZERO)
}

#[test]
fn speed_never_exceeds_max_speed() {
    let mut rng = ChaCha12Rng::seed_from_u64(2024);

    for seed in 0..20 {
        let params = FlockParams {
            max_speed: rng.gen_range(10.0..200.0),
            attraction: rng.gen_range(0.0..50.0),
            avoidance: rng.gen_range(0.0..50.0),
            alignment: rng.gen_range(0.0..5.0),
            noise: rng.gen_range(0.0..5.0),
            bounding: rng.gen_range(0.0..50.0),
            scattering: rng.gen_range(0.0..50.0),
            handling: rng.gen_range(0.1..10.0),
            ..FlockParams::default()
        };
        let config = SimulationConfig {
            population: rng.gen_range(1..60),
            width: rng.gen_range(50.0..500.0),
            height: rng.gen_range(50.0..500.0),
            seed: Some(seed),
            update_mode: if seed % 2 == 0 {
                UpdateMode::Snapshot
            } else {
                UpdateMode::InPlace
            },
            params,
            ..SimulationConfig::default()
        };
        let mut sim = Simulation::new(&config).unwrap();
        sim.set_stimulus(Some(Vector2::new(config.width / 2.0, config.height / 2.0)));

        for _ in 0..15 {
            let dt = rng.gen_range(0.0..0.5);
            sim.step(dt).unwrap();
            for boid in sim.agents() {
                assert!(
                    boid.speed() <= params.max_speed * (1.0 + 1e-4),
                    "seed {seed}: speed {} above {}",
                    boid.speed(),
                    params.max_speed
                );
                assert!(boid.position.x.is_finite() && boid.position.y.is_finite());
            }
        }
    }
}

#[test]
fn identical_seeds_give_identical_trajectories() {
    let config = SimulationConfig {
        population: 80,
        seed: Some(77),
        ..SimulationConfig::default()
    };
    let mut first = Simulation::new(&config).unwrap();
    let mut second = Simulation::new(&config).unwrap();
    assert_eq!(first.agents(), second.agents());

    let deltas = [0.0, 0.016, 0.017, 0.05, 0.016, 0.1, 0.033];
    for (i, &dt) in deltas.iter().cycle().take(60).enumerate() {
        if i == 20 {
            first.set_stimulus(Some(Vector2::new(400.0, 300.0)));
            second.set_stimulus(Some(Vector2::new(400.0, 300.0)));
        }
        first.step(dt).unwrap();
        second.step(dt).unwrap();
    }
    assert_eq!(first.agents(), second.agents());
}

#[test]
fn different_seeds_diverge() {
    let config = |seed| SimulationConfig {
        population: 10,
        seed: Some(seed),
        ..SimulationConfig::default()
    };
    let first = Simulation::new(&config(1)).unwrap();
    let second = Simulation::new(&config(2)).unwrap();
    assert_ne!(first.agents(), second.agents());
}

#[test]
fn lone_boid_feels_no_flocking() {
    let params = FlockParams {
        attraction: 10.0,
        alignment: 10.0,
        avoidance: 10.0,
        ..silent_params()
    };
    let viewport = Viewport::new(200.0, 200.0).unwrap();
    let start = Boid::new(Vector2::new(100.0, 100.0), Vector2::new(10.0, 5.0));
    let mut sim = Simulation::from_agents(vec![start], viewport, params, Some(1)).unwrap();

    sim.step(1.0).unwrap();
    let boid = sim.agents()[0];
    assert_eq!(boid.velocity, start.velocity);
    assert_eq!(boid.position, Vector2::new(110.0, 105.0));
}

#[test]
fn close_pair_separates_head_on() {
    let params = FlockParams {
        min_distance: 20.0,
        avoidance: 1.0,
        ..silent_params()
    };
    let viewport = Viewport::new(200.0, 200.0).unwrap();
    let flock = vec![at_rest(100.0, 100.0), at_rest(110.0, 100.0)];
    let mut sim = Simulation::from_agents(flock, viewport, params, Some(0)).unwrap();

    sim.step(1.0).unwrap();
    let left = sim.agents()[0];
    let right = sim.agents()[1];

    assert!((left.velocity.x + 10.0).abs() < EPS && left.velocity.y.abs() < EPS);
    assert!((right.velocity.x - 10.0).abs() < EPS && right.velocity.y.abs() < EPS);
    assert!(left.speed() <= params.max_speed && right.speed() <= params.max_speed);
    // Pointing directly away from each other
    let dot = left.velocity.x * right.velocity.x + left.velocity.y * right.velocity.y;
    assert!((dot + left.speed() * right.speed()).abs() < EPS);
}

#[test]
fn boid_flees_stimulus() {
    let params = FlockParams {
        scattering: 1.0,
        ..silent_params()
    };
    let viewport = Viewport::new(200.0, 200.0).unwrap();
    let mut sim =
        Simulation::from_agents(vec![at_rest(100.0, 100.0)], viewport, params, Some(0)).unwrap();
    let stimulus = Vector2::new(110.0, 110.0);
    sim.set_stimulus(Some(stimulus));

    sim.step(0.5).unwrap();
    let boid = sim.agents()[0];

    let away = (Vector2::new(100.0, 100.0) - stimulus).normalize();
    let heading = boid.velocity.normalize();
    assert!(boid.speed() > 0.0);
    assert!((heading.x - away.x).abs() < EPS && (heading.y - away.y).abs() < EPS, "{heading:?}");
}

#[test]
fn stimulus_out_of_range_is_ignored() {
    let params = FlockParams {
        scattering: 1.0,
        scatter_range: 50.0,
        ..silent_params()
    };
    let viewport = Viewport::new(200.0, 200.0).unwrap();
    let mut sim =
        Simulation::from_agents(vec![at_rest(100.0, 100.0)], viewport, params, Some(0)).unwrap();
    sim.set_stimulus(Some(Vector2::new(190.0, 100.0)));

    sim.step(1.0).unwrap();
    assert_eq!(sim.agents()[0].velocity, Vector2::ZERO);
}

#[test]
fn escaped_boid_is_pulled_back() {
    let params = FlockParams {
        bounding: 1.0,
        ..silent_params()
    };
    let viewport = Viewport::new(200.0, 100.0).unwrap();
    let mut sim =
        Simulation::from_agents(vec![at_rest(205.0, 50.0)], viewport, params, Some(0)).unwrap();

    sim.step(1.0).unwrap();
    let boid = sim.agents()[0];
    assert!(boid.velocity.x < 0.0);
    assert_eq!(boid.velocity.y, 0.0);
    assert!(boid.position.x < 205.0);
}

#[test]
fn boids_may_leave_the_viewport() {
    let params = silent_params();
    let viewport = Viewport::new(100.0, 100.0).unwrap();
    let flock = vec![Boid::new(Vector2::new(95.0, 50.0), Vector2::new(50.0, 0.0))];
    let mut sim = Simulation::from_agents(flock, viewport, params, Some(0)).unwrap();

    sim.step(1.0).unwrap();
    assert_eq!(sim.agents()[0].position, Vector2::new(145.0, 50.0));
    assert_eq!(sim.stats().outside_viewport, 1);
}

#[test]
fn config_file_round_trip_drives_simulation() {
    let dir = std::env::temp_dir().join(format!("flock-config-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("flock.toml");
    std::fs::write(
        &path,
        r#"
population = 25
width = 400.0
height = 300.0
seed = 5
parallel = true

[params]
noise = 0.0
"#,
    )
    .unwrap();

    let config = SimulationConfig::from_file(&path).unwrap();
    let mut sim = Simulation::new(&config).unwrap();
    assert_eq!(sim.agents().len(), 25);
    assert_eq!(sim.viewport(), Viewport::new(400.0, 300.0).unwrap());

    for _ in 0..30 {
        sim.step(1.0 / 60.0).unwrap();
    }
    assert_eq!(sim.frame(), 30);
    assert_eq!(sim.stats().count, 25);

    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn swapped_params_take_effect_next_step() {
    let viewport = Viewport::new(200.0, 200.0).unwrap();
    let flock = vec![Boid::new(Vector2::new(100.0, 100.0), Vector2::new(80.0, 0.0))];
    let mut sim = Simulation::from_agents(flock, viewport, silent_params(), Some(0)).unwrap();

    sim.set_params(FlockParams {
        max_speed: 20.0,
        ..silent_params()
    })
    .unwrap();
    sim.step(0.1).unwrap();
    assert!((sim.agents()[0].speed() - 20.0).abs() < EPS);
}
