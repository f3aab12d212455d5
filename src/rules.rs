/*
 * Flocking Rules Module
 *
 * Pure steering computations for one boid against the whole flock.
 * Each rule returns an unweighted "desired adjustment"; the Boid module
 * combines them with the weights from FlockParams.
 *
 * 1. Cohesion: steer toward nearby boids, nearer ones counted more
 * 2. Separation: push away from boids inside the minimum distance
 * 3. Alignment: match the weighted mean velocity of nearby boids
 * 4. Noise: random kick proportional to the boid's current speed
 * 5. Bounds: restoring push once the boid leaves the viewport
 * 6. Scatter: flee the external stimulus point
 *
 * Every neighbor scan is a brute-force pass over the full flock.
 */

use rand::Rng;
use std::f32::consts::TAU;

use crate::boid::Boid;
use crate::params::{FlockParams, Viewport};
use crate::vector::Vector2;

/// Read-only view of one frame's shared state.
#[derive(Debug, Clone, Copy)]
pub struct FrameContext<'a> {
    pub flock: &'a [Boid],
    pub stimulus: Option<Vector2>,
    pub viewport: Viewport,
    pub params: &'a FlockParams,
}

/// The six unweighted rule outputs for a single boid.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Steering {
    pub cohesion: Vector2,
    pub separation: Vector2,
    pub alignment: Vector2,
    pub noise: Vector2,
    pub bounds: Vector2,
    pub scatter: Vector2,
}

impl Steering {
    pub fn evaluate(ctx: &FrameContext, index: usize, noise_direction: Vector2) -> Self {
        let boid = &ctx.flock[index];
        Self {
            cohesion: cohesion(index, ctx.flock, ctx.params),
            separation: separation(index, ctx.flock, ctx.params),
            alignment: alignment(index, ctx.flock, ctx.params),
            noise: noise(boid, noise_direction),
            bounds: bounds(boid.position, ctx.viewport),
            scatter: scatter(boid.position, ctx.stimulus, ctx.params),
        }
    }

    // Combine the rule outputs with their weights
    pub fn weighted(&self, params: &FlockParams) -> Vector2 {
        self.cohesion * params.attraction
            + self.separation * params.avoidance
            + self.alignment * params.alignment
            + self.noise * params.noise
            + self.bounds * params.bounding
            + self.scatter * params.scattering
    }
}

// Every boid except the one at `index`
fn others(index: usize, flock: &[Boid]) -> impl Iterator<Item = &Boid> {
    flock
        .iter()
        .enumerate()
        .filter(move |&(i, _)| i != index)
        .map(|(_, other)| other)
}

// Pull toward neighbors in visual range, nearer ones weighted higher
pub fn cohesion(index: usize, flock: &[Boid], params: &FlockParams) -> Vector2 {
    let position = flock[index].position;
    let mut sum = Vector2::ZERO;
    let mut total_weight = 0.0;

    for other in others(index, flock) {
        let d = position.distance(other.position);
        if d < params.visual_range {
            let weight = 1.0 - d / params.visual_range;
            sum += (other.position - position).normalize() * weight;
            total_weight += weight;
        }
    }

    if total_weight > 0.0 {
        sum / total_weight
    } else {
        Vector2::ZERO
    }
}

// Push away from crowding neighbors, scaled by intrusion depth
pub fn separation(index: usize, flock: &[Boid], params: &FlockParams) -> Vector2 {
    let position = flock[index].position;
    let mut push = Vector2::ZERO;

    for other in others(index, flock) {
        let d = position.distance(other.position);
        if d < params.min_distance {
            push += (position - other.position).normalize() * (params.min_distance - d);
        }
    }

    push
}

/// Velocity correction toward the neighbors' mean velocity, weighted by
/// `((visual_range - d) / visual_range)^2`. Zero when nobody is in range.
pub fn alignment(index: usize, flock: &[Boid], params: &FlockParams) -> Vector2 {
    let boid = &flock[index];
    let mut sum = Vector2::ZERO;
    let mut total_weight = 0.0;

    for other in others(index, flock) {
        let d = boid.position.distance(other.position);
        if d < params.visual_range {
            let falloff = (params.visual_range - d) / params.visual_range;
            let weight = falloff * falloff;
            sum += other.velocity * weight;
            total_weight += weight;
        }
    }

    if total_weight > 0.0 {
        sum / total_weight - boid.velocity
    } else {
        Vector2::ZERO
    }
}

// Random kick scaled by current speed, so fast boids wobble more
pub fn noise(boid: &Boid, direction: Vector2) -> Vector2 {
    direction.normalize() * boid.speed()
}

// Restoring push proportional to how far outside the viewport
pub fn bounds(position: Vector2, viewport: Viewport) -> Vector2 {
    Vector2::new(
        axis_restore(position.x, viewport.width()),
        axis_restore(position.y, viewport.height()),
    )
}

fn axis_restore(coordinate: f32, edge: f32) -> f32 {
    if coordinate > edge {
        edge - coordinate
    } else if coordinate < 0.0 {
        -coordinate
    } else {
        0.0
    }
}

/// Flee the stimulus when it is closer than `scatter_range`.
///
/// The falloff `(1 - d / visual_range)^2` deliberately uses `visual_range`
/// while the gate uses `scatter_range`.
pub fn scatter(position: Vector2, stimulus: Option<Vector2>, params: &FlockParams) -> Vector2 {
    let Some(stimulus) = stimulus else {
        return Vector2::ZERO;
    };

    let d = position.distance(stimulus);
    if d < params.scatter_range {
        let falloff = 1.0 - d / params.visual_range;
        (position - stimulus) * (falloff * falloff)
    } else {
        Vector2::ZERO
    }
}

pub fn random_direction<R: Rng + ?Sized>(rng: &mut R) -> Vector2 {
    Vector2::from_angle(rng.gen_range(0.0..TAU))
}
