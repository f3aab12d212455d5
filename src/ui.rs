/*
 * UI Module
 *
 * This module contains the egui control panel for the viewer. The panel
 * edits a working copy of the flock parameters; the app pushes the copy
 * into the simulation whenever it differs from the live set.
 */

use nannou_egui::{egui, Egui};

use crate::debug::DebugInfo;
use crate::params::FlockParams;

// Values the panel edits between frames
pub struct Controls {
    pub population: usize,
    pub params: FlockParams,
    pub paused: bool,
    pub show_debug: bool,
}

impl Controls {
    pub fn new(population: usize, params: FlockParams) -> Self {
        Self {
            population,
            params,
            paused: false,
            show_debug: false,
        }
    }
}

// What the user asked for this frame
#[derive(Debug, Default, Clone, Copy)]
pub struct UiActions {
    pub reset: bool,
    pub reset_zoom: bool,
}

pub fn update_ui(egui: &mut Egui, controls: &mut Controls, debug_info: &DebugInfo) -> UiActions {
    let mut actions = UiActions::default();
    let ctx = egui.begin_frame();

    egui::Window::new("Flock Controls")
        .default_pos([10.0, 10.0])
        .show(&ctx, |ui| {
            ui.collapsing("Population", |ui| {
                ui.add(
                    egui::Slider::new(&mut controls.population, FlockParams::population_range())
                        .text("Number of Boids"),
                );
                if ui.button("Reset Boids").clicked() {
                    actions.reset = true;
                }
            });

            ui.collapsing("Ranges", |ui| {
                let params = &mut controls.params;
                ui.add(egui::Slider::new(&mut params.visual_range, FlockParams::radius_range()).text("Visual Range"));
                ui.add(egui::Slider::new(&mut params.min_distance, FlockParams::radius_range()).text("Min Distance"));
                ui.add(egui::Slider::new(&mut params.scatter_range, FlockParams::radius_range()).text("Scatter Range"));
                ui.add(egui::Slider::new(&mut params.max_speed, FlockParams::max_speed_range()).text("Max Speed"));
                ui.add(egui::Slider::new(&mut params.handling, FlockParams::handling_range()).text("Handling"));
            });

            ui.collapsing("Rule Weights", |ui| {
                let params = &mut controls.params;
                ui.add(egui::Slider::new(&mut params.attraction, FlockParams::weight_range()).text("Attraction"));
                ui.add(egui::Slider::new(&mut params.avoidance, FlockParams::weight_range()).text("Avoidance"));
                ui.add(egui::Slider::new(&mut params.alignment, FlockParams::weight_range()).text("Alignment"));
                ui.add(egui::Slider::new(&mut params.noise, FlockParams::weight_range()).text("Noise"));
                ui.add(egui::Slider::new(&mut params.bounding, FlockParams::weight_range()).text("Bounding"));
                ui.add(egui::Slider::new(&mut params.scattering, FlockParams::weight_range()).text("Scattering"));
            });

            ui.collapsing("View", |ui| {
                ui.label("Zoom: mouse wheel");
                if ui.button("Reset Zoom").clicked() {
                    actions.reset_zoom = true;
                }
            });

            ui.separator();
            ui.label(format!("FPS: {:.1}", debug_info.fps));
            ui.checkbox(&mut controls.show_debug, "Show Debug Info");
            ui.checkbox(&mut controls.paused, "Pause Simulation");
        });

    actions
}

// Draw debug information on the screen
pub fn draw_debug_info(draw: &nannou::Draw, debug_info: &DebugInfo, window_rect: nannou::geom::Rect, frame: u64) {
    let margin = 20.0;
    let line_height = 20.0;
    let stats = &debug_info.stats;

    let debug_texts = [
        format!("FPS: {:.1}", debug_info.fps),
        format!("Frame time: {:.2} ms", debug_info.frame_time.as_secs_f64() * 1000.0),
        format!("Step: {:.4} s", debug_info.step_seconds),
        format!("Frame: {frame}"),
        format!("Boids: {}", stats.count),
        format!("Outside viewport: {}", stats.outside_viewport),
        format!("Mean speed: {:.1}", stats.mean_speed),
        format!("Max speed: {:.1}", stats.max_speed),
    ];

    let panel_width = 220.0;
    let panel_height = line_height * debug_texts.len() as f32 + margin;
    let panel_x = window_rect.right() - panel_width / 2.0;
    let panel_y = window_rect.top() - panel_height / 2.0;

    draw.rect()
        .x_y(panel_x, panel_y)
        .w_h(panel_width, panel_height)
        .color(nannou::color::rgba(0.0, 0.0, 0.0, 0.7));

    let text_x = window_rect.right() - panel_width + margin;
    let text_y = window_rect.top() - margin;

    for (i, text) in debug_texts.iter().enumerate() {
        let y = text_y - (i as f32 * line_height);

        // Text is centered on its position, so shift right by roughly half its width
        draw.text(text)
            .x_y(text_x + 70.0, y)
            .color(nannou::color::WHITE)
            .font_size(14);
    }
}
