/*
 * Boid Module
 *
 * This module defines the Boid struct and its per-frame integration step.
 * A boid only stores position and velocity; everything it reacts to comes
 * in through the FrameContext at call time, so no boid ever holds a
 * reference to another.
 */

use rand::Rng;

use crate::params::{FlockParams, Viewport};
use crate::rules::{self, FrameContext, Steering};
use crate::vector::Vector2;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Boid {
    pub position: Vector2,
    pub velocity: Vector2,
}

impl Boid {
    pub fn new(position: Vector2, velocity: Vector2) -> Self {
        Self { position, velocity }
    }

    // Random position inside the viewport, random heading at full speed
    pub fn random<R: Rng + ?Sized>(rng: &mut R, viewport: Viewport, max_speed: f32) -> Self {
        let x = rng.gen_range(0.0..=viewport.width());
        let y = rng.gen_range(0.0..=viewport.height());
        let velocity = rules::random_direction(rng) * max_speed;

        Self::new(Vector2::new(x, y), velocity)
    }

    pub fn speed(&self) -> f32 {
        self.velocity.magnitude()
    }

    /// Orientation for rendering; `0.0` when the boid is at rest.
    pub fn heading(&self) -> f32 {
        self.velocity.heading()
    }

    /// Delta-velocity for the boid at `index`, already scaled by
    /// `delta_seconds * handling`. Reads only from `ctx`.
    pub fn steer(
        ctx: &FrameContext,
        index: usize,
        noise_direction: Vector2,
        delta_seconds: f32,
    ) -> Vector2 {
        let steering = Steering::evaluate(ctx, index, noise_direction);
        steering.weighted(ctx.params) * (delta_seconds * ctx.params.handling)
    }

    // Apply a delta-velocity, cap the speed and move forward
    pub fn integrate(&mut self, delta: Vector2, params: &FlockParams, delta_seconds: f32) {
        self.velocity += delta;

        // Limit speed
        self.velocity = self.velocity.limit(params.max_speed);

        self.position += self.velocity * delta_seconds;
    }
}
