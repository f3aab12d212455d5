/*
 * Camera Module
 *
 * This module defines the Camera struct that maps between simulation space
 * (origin at the top-left corner of the viewport, y pointing down) and
 * window space (origin at the window center, y pointing up), with a zoom
 * about the viewport center.
 */

use crate::vector::Vector2;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub width: f32,
    pub height: f32,
    pub zoom: f32,
    pub min_zoom: f32,
    pub max_zoom: f32,
}

impl Camera {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            zoom: 1.0,
            min_zoom: 0.25,
            max_zoom: 4.0,
        }
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
    }

    // Convert a point from simulation space to window space
    pub fn sim_to_screen(&self, point: Vector2) -> Vector2 {
        Vector2::new(
            (point.x - self.width / 2.0) * self.zoom,
            (self.height / 2.0 - point.y) * self.zoom,
        )
    }

    // Convert a point from window space to simulation space
    pub fn screen_to_sim(&self, point: Vector2) -> Vector2 {
        Vector2::new(
            point.x / self.zoom + self.width / 2.0,
            self.height / 2.0 - point.y / self.zoom,
        )
    }

    /// Rotation to apply in window space for a simulation-space heading.
    /// Flipping the y axis mirrors angles.
    pub fn screen_angle(&self, heading: f32) -> f32 {
        -heading
    }

    // Handle mouse wheel events for zooming
    pub fn zoom_by(&mut self, scroll: f32) {
        let zoom_factor = 1.0 + scroll * 0.1;
        self.zoom = (self.zoom * zoom_factor).clamp(self.min_zoom, self.max_zoom);
    }

    pub fn reset_zoom(&mut self) {
        self.zoom = 1.0;
    }
}
