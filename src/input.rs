/*
 * Input Module
 *
 * This module handles window events for the viewer:
 * - pointer movement sets the stimulus, leaving the window clears it
 * - mouse wheel zooms the camera
 * - resizing the window resizes the simulation viewport
 * - Space pauses, R resets the flock, Z resets the zoom
 */

use nannou::prelude::*;
use nannou::winit::event::{MouseScrollDelta, TouchPhase};

use crate::app::Model;
use crate::vector::Vector2;

// Mouse moved event handler
pub fn mouse_moved(_app: &App, model: &mut Model, pos: Point2) {
    let stimulus = model.camera.screen_to_sim(Vector2::new(pos.x, pos.y));
    model.simulation.set_stimulus(Some(stimulus));
}

pub fn mouse_exited(_app: &App, model: &mut Model) {
    model.simulation.set_stimulus(None);
}

// Mouse wheel event handler for zooming
pub fn mouse_wheel(_app: &App, model: &mut Model, delta: MouseScrollDelta, _phase: TouchPhase) {
    match delta {
        MouseScrollDelta::LineDelta(_, y) => model.camera.zoom_by(y),
        MouseScrollDelta::PixelDelta(pos) => model.camera.zoom_by(pos.y as f32 * 0.01),
    }
}

pub fn resized(_app: &App, model: &mut Model, size: Vec2) {
    // A minimized window reports zero size; keep the last usable viewport
    match model.simulation.resize_viewport(size.x, size.y) {
        Ok(()) => model.camera.resize(size.x, size.y),
        Err(error) => log::debug!("ignored resize: {error}"),
    }
}

pub fn key_pressed(_app: &App, model: &mut Model, key: Key) {
    match key {
        Key::Space => model.controls.paused = !model.controls.paused,
        Key::R => model.simulation.reset(),
        Key::Z => model.camera.reset_zoom(),
        _ => {}
    }
}

// Handle raw window events for egui
pub fn raw_window_event(_app: &App, model: &mut Model, event: &nannou::winit::event::WindowEvent) {
    model.egui.handle_raw_event(event);
}
