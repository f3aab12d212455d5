/*
 * Debug Information Module
 *
 * This module defines the metrics displayed by the debug overlay:
 * - FPS (frames per second) and frame time, filled in by the viewer
 * - FlockStats, a summary of the flock measured from a simulation snapshot
 */

use std::time::Duration;

use crate::boid::Boid;
use crate::params::Viewport;
use crate::vector::Vector2;

// Debug information to display
#[derive(Debug, Clone, Default)]
pub struct DebugInfo {
    pub fps: f32,
    pub frame_time: Duration,
    // Time step actually fed to the simulation after clamping
    pub step_seconds: f32,
    pub stats: FlockStats,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FlockStats {
    pub count: usize,
    pub mean_speed: f32,
    pub max_speed: f32,
    pub outside_viewport: usize,
    pub centroid: Vector2,
}

impl FlockStats {
    pub fn measure(boids: &[Boid], viewport: Viewport) -> Self {
        if boids.is_empty() {
            return Self::default();
        }

        let mut total_speed = 0.0;
        let mut max_speed: f32 = 0.0;
        let mut outside = 0;
        let mut position_sum = Vector2::ZERO;

        for boid in boids {
            let speed = boid.speed();
            total_speed += speed;
            max_speed = max_speed.max(speed);
            position_sum += boid.position;
            if !viewport.contains(boid.position.x, boid.position.y) {
                outside += 1;
            }
        }

        let count = boids.len();
        Self {
            count,
            mean_speed: total_speed / count as f32,
            max_speed,
            outside_viewport: outside,
            centroid: position_sum / count as f32,
        }
    }
}
