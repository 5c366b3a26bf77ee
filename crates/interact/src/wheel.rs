//! Wheel/track stroke mapping.
//!
//! Converts a pair of brush poses into the canvas-space parameters a track
//! material needs: where the stroke starts and ends on the canvas, how it is
//! rotated, how wide it is, how deep the wheel sits, and which slice of the
//! wheel texture rolled over the ground. The roll slice takes the short path
//! across the 0/360 seam so the texture never visibly runs backwards.

use glam::Vec2;

use crate::board::DrawingBoard;
use crate::brush::{BrushBehavior, BrushState, DrawRequest};
use crate::canvas::{Canvas, CanvasCommand};
use crate::constants::{FINAL_DRAW_FRACTION, FULL_TURN_DEGREES, HALF_TURN_DEGREES};
use crate::pose::Pose;
use crate::types::WheelData;

/// Wheel roll range in turns between two roll angles (degrees).
///
/// When the rolls are more than half a turn apart the wheel crossed the
/// seam, and the second value continues past it instead of jumping back.
pub fn wheel_uv(previous_roll: f32, current_roll: f32) -> Vec2 {
    let delta = previous_roll - current_roll;
    let mut range = Vec2::new(previous_roll, current_roll);
    if delta.abs() > HALF_TURN_DEGREES {
        range.y = previous_roll + delta.signum() * (FULL_TURN_DEGREES - delta.abs());
    }
    range / FULL_TURN_DEGREES
}

/// A pose and the wheel's raw height above the board at that pose
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelSample {
    pub pose: Pose,
    pub height: f32,
}

/// Compute the stroke parameters between two wheel samples on `board`.
///
/// `brush_size` is the physical contact size, `canvas_size` the render
/// target size in pixels. The board mapping must be non-degenerate.
pub fn calculate_wheel_info(
    previous: &WheelSample,
    current: &WheelSample,
    board: &DrawingBoard,
    brush_size: Vec2,
    canvas_size: Vec2,
    wheel_radius: f32,
) -> WheelData {
    debug_assert!(canvas_size.x > 0.0, "zero-width canvas");
    debug_assert!(board.interact_height != 0.0, "{} has zero interact height", board.id);

    WheelData {
        uv_range: wheel_uv(previous.pose.roll_degrees(), current.pose.roll_degrees()),
        last_location: board.world_to_canvas_uv(previous.pose.planar()),
        current_location: board.world_to_canvas_uv(current.pose.planar()),
        last_rotation: board.world_to_canvas_rotation(previous.pose.upright_yaw_degrees()),
        current_rotation: board.world_to_canvas_rotation(current.pose.upright_yaw_degrees()),
        width: board.world_to_canvas_size(brush_size).x / canvas_size.x,
        last_height: (previous.height - wheel_radius) / board.interact_height,
        current_height: (current.height - wheel_radius) / board.interact_height,
    }
}

/// Signed shortest rotation from `from` to `to` in degrees, in [-180, 180)
fn shortest_delta(from: f32, to: f32) -> f32 {
    (to - from + HALF_TURN_DEGREES).rem_euclid(FULL_TURN_DEGREES) - HALF_TURN_DEGREES
}

/// Tire track behavior.
///
/// Each stroke step paints one quad spanning the piece of the path between
/// the previous step and this one, carrying the wheel parameters as material
/// data. A fraction that does not advance past the previous one starts a new
/// stroke from the origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelTrackBehavior {
    /// Wheel radius in world units
    pub wheel_radius: f32,
    /// World height of the ground the board lies on
    pub ground_height: f32,
    /// Fraction of the last step drawn
    previous_fraction: f32,
}

impl WheelTrackBehavior {
    pub fn new(wheel_radius: f32, ground_height: f32) -> Self {
        Self {
            wheel_radius,
            ground_height,
            previous_fraction: FINAL_DRAW_FRACTION,
        }
    }

    /// Stroke fraction where the step ending at `fraction` begins
    fn segment_start(&self, fraction: f32) -> f32 {
        if fraction > self.previous_fraction {
            self.previous_fraction
        } else {
            0.0
        }
    }

    fn sample(&self, pose: Pose) -> WheelSample {
        WheelSample {
            pose,
            height: pose.translation.z - self.ground_height,
        }
    }

    /// Wheel data for one stroke step of `brush`
    pub fn step_data(&self, brush: &BrushState, request: &DrawRequest<'_>) -> WheelData {
        let start = brush.stroke_pose(self.segment_start(request.fraction));
        let end = brush.stroke_pose(request.fraction);
        calculate_wheel_info(
            &self.sample(start),
            &self.sample(end),
            request.board,
            brush.size(),
            request.canvas_size,
            self.wheel_radius,
        )
    }
}

impl BrushBehavior for WheelTrackBehavior {
    fn draw_on(&mut self, brush: &BrushState, request: &DrawRequest<'_>, canvas: &mut dyn Canvas) {
        let data = self.step_data(brush, request);
        let from = data.last_location * request.canvas_size;
        let to = data.current_location * request.canvas_size;
        let contact = request.board.world_to_canvas_size(brush.size());

        let rotation =
            data.last_rotation + shortest_delta(data.last_rotation, data.current_rotation) * 0.5;

        canvas.draw(CanvasCommand {
            center: (from + to) * 0.5,
            size: Vec2::new(data.width * request.canvas_size.x, from.distance(to) + contact.y),
            rotation,
            params: data.into(),
        });
        self.previous_fraction = request.fraction;
    }
}
