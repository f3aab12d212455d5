/*
 * Error Module
 *
 * Configuration and input errors reported by the simulation.
 * A step never fails part way: inputs are checked before any agent is touched.
 */

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FlockError {
    #[error("population must contain at least one agent")]
    EmptyPopulation,

    #[error("viewport must have finite positive size, got {width}x{height}")]
    InvalidViewport { width: f32, height: f32 },

    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParam { name: &'static str, reason: String },

    #[error("time step must be finite and non-negative, got {0}")]
    InvalidTimeStep(f32),

    #[error("failed to read {path:?}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse configuration")]
    Config(#[from] toml::de::Error),
}

impl FlockError {
    pub(crate) fn param(name: &'static str, reason: impl Into<String>) -> Self {
        FlockError::InvalidParam {
            name,
            reason: reason.into(),
        }
    }
}
