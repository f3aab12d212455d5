/*
 * Configuration Module
 *
 * Construction parameters for a Simulation: population size, initial
 * viewport, random seed, update mode and the flock tunables. Loaded from
 * TOML, where every field is optional and falls back to its default.
 */

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::FlockError;
use crate::params::{FlockParams, Viewport};

/// How a step applies the per-boid deltas.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UpdateMode {
    /// Every delta is computed from the pre-step state, then committed.
    #[default]
    Snapshot,
    /// Each boid is written back before the next one is computed, so later
    /// boids see earlier boids' new state within the same frame.
    InPlace,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub population: usize,
    pub width: f32,
    pub height: f32,
    pub seed: Option<u64>,
    pub update_mode: UpdateMode,
    // Compute snapshot deltas on the rayon pool
    pub parallel: bool,
    // Upper bound on a single frame's time step, in seconds
    pub max_frame_delta: f32,
    pub params: FlockParams,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            population: 100,
            width: 800.0,
            height: 600.0,
            seed: None,
            update_mode: UpdateMode::Snapshot,
            parallel: false,
            max_frame_delta: 0.1,
            params: FlockParams::default(),
        }
    }
}

impl SimulationConfig {
    pub fn from_toml_str(contents: &str) -> Result<Self, FlockError> {
        let config: SimulationConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, FlockError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| FlockError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }

    pub fn viewport(&self) -> Result<Viewport, FlockError> {
        Viewport::new(self.width, self.height)
    }

    pub fn validate(&self) -> Result<(), FlockError> {
        if self.population == 0 {
            return Err(FlockError::EmptyPopulation);
        }
        self.viewport()?;
        if !(self.max_frame_delta > 0.0 && self.max_frame_delta.is_finite()) {
            return Err(FlockError::param(
                "max_frame_delta",
                format!("must be finite and positive, but is {}", self.max_frame_delta),
            ));
        }
        self.params.validate()
    }
}
