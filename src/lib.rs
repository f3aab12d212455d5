/*
 * Flock - Module Definitions
 *
 * A boid flocking simulation core: cohesion, separation, alignment, noise,
 * soft boundary containment and repulsion from an external stimulus point.
 * The interactive viewer modules are only built with the `viewer` feature.
 */

// Re-export key components for easier access
pub use boid::Boid;
pub use camera::Camera;
pub use config::{SimulationConfig, UpdateMode};
pub use debug::{DebugInfo, FlockStats};
pub use error::FlockError;
pub use params::{FlockParams, Viewport};
pub use rules::{FrameContext, Steering};
pub use simulation::Simulation;
pub use vector::Vector2;

// Define modules
pub mod boid;
pub mod camera;
pub mod config;
pub mod debug;
pub mod error;
pub mod params;
pub mod rules;
pub mod simulation;
pub mod vector;

#[cfg(feature = "viewer")]
pub mod app;
#[cfg(feature = "viewer")]
pub mod input;
#[cfg(feature = "viewer")]
pub mod renderer;
#[cfg(feature = "viewer")]
pub mod ui;
