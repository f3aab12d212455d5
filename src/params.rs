/*
 * Flock Parameters Module
 *
 * This module defines the FlockParams struct holding every tunable that feeds
 * the weighted sum of steering rules, and the Viewport used for the soft
 * boundary force. Parameters are plain values owned by the Simulation and
 * passed to every rule call; swapping them between steps is the only way
 * to change behavior at runtime.
 */

use serde::{Deserialize, Serialize};

use crate::error::FlockError;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlockParams {
    // Neighbor radius for cohesion and alignment
    pub visual_range: f32,
    // Radius inside which separation activates
    pub min_distance: f32,
    pub max_speed: f32,

    // Rule weights
    pub attraction: f32,
    pub avoidance: f32,
    pub alignment: f32,
    pub noise: f32,
    pub bounding: f32,
    pub scattering: f32,

    // Radius of effect of the stimulus repulsion
    pub scatter_range: f32,
    // Responsiveness multiplier on the combined delta-velocity
    pub handling: f32,
}

impl Default for FlockParams {
    fn default() -> Self {
        Self {
            visual_range: 40.0,
            min_distance: 20.0,
            max_speed: 100.0,
            attraction: 20.0,
            avoidance: 5.0,
            alignment: 1.0,
            noise: 0.5,
            bounding: 2.0,
            scattering: 10.0,
            scatter_range: 120.0,
            handling: 1.0,
        }
    }
}

impl FlockParams {
    /// Check every range constraint, reporting the first violation.
    pub fn validate(&self) -> Result<(), FlockError> {
        check_positive("visual_range", self.visual_range)?;
        check_positive("min_distance", self.min_distance)?;
        if self.min_distance >= self.visual_range {
            return Err(FlockError::param(
                "min_distance",
                format!(
                    "must be smaller than visual_range ({}), but is {}",
                    self.visual_range, self.min_distance
                ),
            ));
        }
        check_positive("max_speed", self.max_speed)?;
        check_positive("scatter_range", self.scatter_range)?;
        check_positive("handling", self.handling)?;

        let weights = [
            ("attraction", self.attraction),
            ("avoidance", self.avoidance),
            ("alignment", self.alignment),
            ("noise", self.noise),
            ("bounding", self.bounding),
            ("scattering", self.scattering),
        ];
        for (name, weight) in weights {
            if !weight.is_finite() {
                return Err(FlockError::param(name, format!("must be finite, but is {weight}")));
            }
        }

        Ok(())
    }

    // Get parameter ranges for UI sliders
    pub fn population_range() -> std::ops::RangeInclusive<usize> {
        1..=2000
    }

    pub fn max_speed_range() -> std::ops::RangeInclusive<f32> {
        10.0..=400.0
    }

    pub fn weight_range() -> std::ops::RangeInclusive<f32> {
        0.0..=50.0
    }

    pub fn radius_range() -> std::ops::RangeInclusive<f32> {
        5.0..=300.0
    }

    pub fn handling_range() -> std::ops::RangeInclusive<f32> {
        0.1..=10.0
    }
}

fn check_positive(name: &'static str, value: f32) -> Result<(), FlockError> {
    // NaN fails this comparison too
    if !(value > 0.0 && value.is_finite()) {
        return Err(FlockError::param(
            name,
            format!("must be finite and positive, but is {value}"),
        ));
    }
    Ok(())
}

// Rectangular bounds [0, width] x [0, height], only built through Viewport::new
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    width: f32,
    height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Result<Self, FlockError> {
        let valid = |side: f32| side.is_finite() && side > 0.0;
        if !valid(width) || !valid(height) {
            return Err(FlockError::InvalidViewport { width, height });
        }
        Ok(Self { width, height })
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn contains(&self, x: f32, y: f32) -> bool {
        (0.0..=self.width).contains(&x) && (0.0..=self.height).contains(&y)
    }
}
