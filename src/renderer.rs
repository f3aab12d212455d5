/*
 * Renderer Module
 *
 * This module draws the flock: one arrow per boid oriented along its
 * velocity, the viewport outline, the stimulus radius and the optional
 * debug overlay.
 */

use nannou::prelude::*;

use crate::app::Model;
use crate::ui;
use crate::vector::Vector2;

// Arrow outline in boid-local coordinates, nose along +x
const ARROW: [(f32, f32); 3] = [(6.0, 0.0), (-6.0, 5.0), (-6.0, -5.0)];

fn to_point(v: Vector2) -> Point2 {
    pt2(v.x, v.y)
}

// Render the model
pub fn view(app: &App, model: &Model, frame: Frame) {
    let draw = app.draw();
    draw.background().color(BLACK);

    let camera = &model.camera;
    let simulation = &model.simulation;
    let viewport = simulation.viewport();
    let params = simulation.params();

    // Viewport outline, visible once zoomed out
    let top_left = camera.sim_to_screen(Vector2::ZERO);
    let bottom_right = camera.sim_to_screen(Vector2::new(viewport.width(), viewport.height()));
    let outline = Rect::from_corners(to_point(top_left), to_point(bottom_right));
    draw.rect()
        .xy(outline.xy())
        .wh(outline.wh())
        .no_fill()
        .stroke_weight(1.0)
        .stroke(rgba(0.3, 0.3, 0.3, 1.0));

    if let Some(stimulus) = simulation.stimulus() {
        draw.ellipse()
            .xy(to_point(camera.sim_to_screen(stimulus)))
            .radius(params.scatter_range * camera.zoom)
            .no_fill()
            .stroke(rgba(1.0, 0.3, 0.3, 0.4))
            .stroke_weight(1.0);
    }

    let points = ARROW.map(|(x, y)| pt2(x * camera.zoom, y * camera.zoom));
    for boid in simulation.agents() {
        draw.polygon()
            .color(rgba(1.0, 1.0, 1.0, 0.5))
            .points(points)
            .xy(to_point(camera.sim_to_screen(boid.position)))
            .rotate(camera.screen_angle(boid.heading()));
    }

    if model.controls.show_debug {
        if let Some(first) = simulation.agents().first() {
            let center = to_point(camera.sim_to_screen(first.position));

            // Neighbor radius
            draw.ellipse()
                .xy(center)
                .radius(params.visual_range * camera.zoom)
                .no_fill()
                .stroke(GREEN)
                .stroke_weight(1.0);

            // Separation radius
            draw.ellipse()
                .xy(center)
                .radius(params.min_distance * camera.zoom)
                .no_fill()
                .stroke(RED)
                .stroke_weight(1.0);

            // Velocity vector, scaled to a quarter second of travel
            let tip = camera.sim_to_screen(first.position + first.velocity * 0.25);
            draw.arrow()
                .start(center)
                .end(to_point(tip))
                .color(YELLOW)
                .stroke_weight(2.0);
        }

        ui::draw_debug_info(&draw, &model.debug_info, app.window_rect(), simulation.frame());
    }

    if let Err(error) = draw.to_frame(app, &frame) {
        log::error!("failed to draw frame: {error:?}");
    }
    if let Err(error) = model.egui.draw_to_frame(&frame) {
        log::error!("failed to draw ui: {error:?}");
    }
}
