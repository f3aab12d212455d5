/*
 * Application Module
 *
 * This module defines the viewer's model and per-frame update. The viewer
 * is a thin driver around Simulation:
 * - the pointer position becomes the stimulus point
 * - window resizes become viewport resizes
 * - wall-clock time between frames becomes the time step
 * Rendering lives in the renderer module, event handlers in the input module.
 */

use nannou::prelude::*;
use nannou_egui::Egui;
use std::sync::OnceLock;

use crate::camera::Camera;
use crate::config::SimulationConfig;
use crate::debug::DebugInfo;
use crate::input;
use crate::renderer;
use crate::simulation::Simulation;
use crate::ui::{self, Controls};

// Configuration resolved before the event loop starts
static STARTUP_CONFIG: OnceLock<SimulationConfig> = OnceLock::new();

// Main model for the application
pub struct Model {
    pub simulation: Simulation,
    pub controls: Controls,
    pub egui: Egui,
    pub debug_info: DebugInfo,
    pub camera: Camera,
    pub max_frame_delta: f32,
    // The first frame advances by zero
    pub first_frame: bool,
}

/// Open the viewer window and run until it is closed.
pub fn run(config: SimulationConfig) {
    if STARTUP_CONFIG.set(config).is_err() {
        log::warn!("viewer already configured, ignoring new configuration");
    }
    nannou::app(model).update(update).run();
}

// Initialize the model
fn model(app: &App) -> Model {
    let config = STARTUP_CONFIG.get().cloned().unwrap_or_default();

    let window_id = app
        .new_window()
        .title("Flock")
        .size(config.width as u32, config.height as u32)
        .view(renderer::view)
        .mouse_moved(input::mouse_moved)
        .mouse_exited(input::mouse_exited)
        .mouse_wheel(input::mouse_wheel)
        .resized(input::resized)
        .key_pressed(input::key_pressed)
        .raw_event(input::raw_window_event)
        .build()
        .expect("Failed to build window");

    let window = app.window(window_id).expect("Window closed during startup");
    let egui = Egui::from_window(&window);

    let simulation = Simulation::new(&config).expect("Configuration was validated at startup");
    let controls = Controls::new(config.population, config.params);

    Model {
        simulation,
        controls,
        egui,
        debug_info: DebugInfo::default(),
        camera: Camera::new(config.width, config.height),
        max_frame_delta: config.max_frame_delta,
        first_frame: true,
    }
}

// Update the model
fn update(app: &App, model: &mut Model, update: Update) {
    model.debug_info.fps = app.fps();
    model.debug_info.frame_time = update.since_last;

    let actions = ui::update_ui(&mut model.egui, &mut model.controls, &model.debug_info);
    apply_controls(model);

    if actions.reset {
        model.simulation.reset();
    }
    if actions.reset_zoom {
        model.camera.reset_zoom();
    }

    let step_seconds = if model.first_frame {
        model.first_frame = false;
        0.0
    } else {
        update.since_last.as_secs_f32().min(model.max_frame_delta)
    };
    model.debug_info.step_seconds = step_seconds;

    if !model.controls.paused {
        if let Err(error) = model.simulation.step(step_seconds) {
            log::warn!("skipped frame: {error}");
        }
    }

    model.debug_info.stats = model.simulation.stats();
}

// Push edited population and parameters into the simulation
fn apply_controls(model: &mut Model) {
    let simulation = &mut model.simulation;
    let controls = &mut model.controls;

    if controls.population != simulation.agents().len() {
        if let Err(error) = simulation.set_population(controls.population) {
            log::warn!("rejected population change: {error}");
            controls.population = simulation.agents().len();
        }
    }

    if controls.params != *simulation.params() {
        if let Err(error) = simulation.set_params(controls.params) {
            // Keep the panel in sync with what is actually running
            log::warn!("rejected parameter change: {error}");
            controls.params = *simulation.params();
        }
    }
}
