/*
 * Simulation Module
 *
 * This module owns the flock, the viewport, the current stimulus point and
 * the parameter set, and advances every boid by one time step per frame.
 *
 * A step draws one noise direction per boid from the simulation's own
 * generator, then either
 * - computes every delta from a read-only snapshot of the flock and
 *   commits them afterwards (snapshot mode, optionally on the rayon pool), or
 * - updates boids one after another, each seeing the already-updated
 *   state of the boids before it (in-place mode).
 */

use rand::SeedableRng;
use rand_chacha::ChaCha12Rng;
use rayon::prelude::*;

use crate::boid::Boid;
use crate::config::{SimulationConfig, UpdateMode};
use crate::debug::FlockStats;
use crate::error::FlockError;
use crate::params::{FlockParams, Viewport};
use crate::rules::{self, FrameContext};
use crate::vector::Vector2;

pub struct Simulation {
    boids: Vec<Boid>,
    viewport: Viewport,
    stimulus: Option<Vector2>,
    params: FlockParams,
    update_mode: UpdateMode,
    parallel: bool,
    rng: ChaCha12Rng,
    frame: u64,
    // Per-step scratch buffers, reused across frames
    noise_directions: Vec<Vector2>,
    deltas: Vec<Vector2>,
}

fn seeded_rng(seed: Option<u64>) -> ChaCha12Rng {
    match seed {
        Some(seed) => ChaCha12Rng::seed_from_u64(seed),
        None => ChaCha12Rng::from_entropy(),
    }
}

impl Simulation {
    // Build a simulation with a freshly randomized flock
    pub fn new(config: &SimulationConfig) -> Result<Self, FlockError> {
        config.validate()?;
        let viewport = config.viewport()?;
        let mut rng = seeded_rng(config.seed);

        let boids = (0..config.population)
            .map(|_| Boid::random(&mut rng, viewport, config.params.max_speed))
            .collect();

        log::info!(
            "created flock of {} boids in {}x{} viewport (seed: {:?}, mode: {:?})",
            config.population,
            viewport.width(),
            viewport.height(),
            config.seed,
            config.update_mode
        );

        Ok(Self {
            boids,
            viewport,
            stimulus: None,
            params: config.params,
            update_mode: config.update_mode,
            parallel: config.parallel,
            rng,
            frame: 0,
            noise_directions: Vec::with_capacity(config.population),
            deltas: Vec::with_capacity(config.population),
        })
    }

    /// Build a simulation around an explicit flock, e.g. a scripted scenario.
    pub fn from_agents(
        boids: Vec<Boid>,
        viewport: Viewport,
        params: FlockParams,
        seed: Option<u64>,
    ) -> Result<Self, FlockError> {
        if boids.is_empty() {
            return Err(FlockError::EmptyPopulation);
        }
        params.validate()?;

        let population = boids.len();
        Ok(Self {
            boids,
            viewport,
            stimulus: None,
            params,
            update_mode: UpdateMode::Snapshot,
            parallel: false,
            rng: seeded_rng(seed),
            frame: 0,
            noise_directions: Vec::with_capacity(population),
            deltas: Vec::with_capacity(population),
        })
    }

    pub fn with_update_mode(mut self, update_mode: UpdateMode) -> Self {
        self.update_mode = update_mode;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Advance every boid by `delta_seconds`.
    ///
    /// Rejects negative, NaN and infinite time steps without touching any state.
    pub fn step(&mut self, delta_seconds: f32) -> Result<(), FlockError> {
        if !(delta_seconds >= 0.0 && delta_seconds.is_finite()) {
            return Err(FlockError::InvalidTimeStep(delta_seconds));
        }

        self.draw_noise();

        match self.update_mode {
            UpdateMode::Snapshot => self.step_snapshot(delta_seconds),
            UpdateMode::InPlace => self.step_in_place(delta_seconds),
        }

        self.frame += 1;
        log::trace!("frame {} advanced by {delta_seconds:.4}s", self.frame);

        Ok(())
    }

    // One direction per boid, in collection order, so runs stay reproducible
    fn draw_noise(&mut self) {
        self.noise_directions.clear();
        for _ in 0..self.boids.len() {
            self.noise_directions
                .push(rules::random_direction(&mut self.rng));
        }
    }

    fn step_snapshot(&mut self, delta_seconds: f32) {
        let ctx = FrameContext {
            flock: &self.boids,
            stimulus: self.stimulus,
            viewport: self.viewport,
            params: &self.params,
        };
        let noise = &self.noise_directions;

        if self.parallel {
            (0..ctx.flock.len())
                .into_par_iter()
                .map(|i| Boid::steer(&ctx, i, noise[i], delta_seconds))
                .collect_into_vec(&mut self.deltas);
        } else {
            self.deltas.clear();
            self.deltas.extend(
                (0..ctx.flock.len()).map(|i| Boid::steer(&ctx, i, noise[i], delta_seconds)),
            );
        }

        for (boid, &delta) in self.boids.iter_mut().zip(&self.deltas) {
            boid.integrate(delta, &self.params, delta_seconds);
        }
    }

    fn step_in_place(&mut self, delta_seconds: f32) {
        for i in 0..self.boids.len() {
            let ctx = FrameContext {
                flock: &self.boids,
                stimulus: self.stimulus,
                viewport: self.viewport,
                params: &self.params,
            };
            let delta = Boid::steer(&ctx, i, self.noise_directions[i], delta_seconds);
            self.boids[i].integrate(delta, &self.params, delta_seconds);
        }
    }

    pub fn set_stimulus(&mut self, stimulus: Option<Vector2>) {
        if self.stimulus.is_some() != stimulus.is_some() {
            log::debug!("stimulus {}", if stimulus.is_some() { "set" } else { "cleared" });
        }
        self.stimulus = stimulus;
    }

    pub fn stimulus(&self) -> Option<Vector2> {
        self.stimulus
    }

    pub fn resize_viewport(&mut self, width: f32, height: f32) -> Result<(), FlockError> {
        self.viewport = Viewport::new(width, height)?;
        log::debug!("viewport resized to {width}x{height}");
        Ok(())
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn agents(&self) -> &[Boid] {
        &self.boids
    }

    pub fn params(&self) -> &FlockParams {
        &self.params
    }

    /// Swap the parameter set; takes effect on the next step.
    pub fn set_params(&mut self, params: FlockParams) -> Result<(), FlockError> {
        params.validate()?;
        log::debug!("parameters updated: {params:?}");
        self.params = params;
        Ok(())
    }

    pub fn update_mode(&self) -> UpdateMode {
        self.update_mode
    }

    pub fn set_update_mode(&mut self, update_mode: UpdateMode) {
        self.update_mode = update_mode;
    }

    // Grow with random boids or drop boids from the end
    pub fn set_population(&mut self, population: usize) -> Result<(), FlockError> {
        if population == 0 {
            return Err(FlockError::EmptyPopulation);
        }

        let viewport = self.viewport;
        let max_speed = self.params.max_speed;
        let rng = &mut self.rng;
        self.boids
            .resize_with(population, || Boid::random(rng, viewport, max_speed));

        log::debug!("population set to {population}");
        Ok(())
    }

    // Re-randomize every boid and restart the frame counter
    pub fn reset(&mut self) {
        let viewport = self.viewport;
        let max_speed = self.params.max_speed;
        for boid in &mut self.boids {
            *boid = Boid::random(&mut self.rng, viewport, max_speed);
        }
        self.frame = 0;

        log::info!("reset flock of {} boids", self.boids.len());
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn stats(&self) -> FlockStats {
        FlockStats::measure(&self.boids, self.viewport)
    }
}
