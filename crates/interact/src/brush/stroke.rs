//! Stroke interpolation: splitting long movements into draw steps

use glam::Vec2;
use tracing::debug;

use crate::board::DrawingBoard;
use crate::canvas::Canvas;
use crate::constants::FINAL_DRAW_FRACTION;

use super::{Brush, DrawRequest};

/// Number of steps needed so no step covers more than `max_draw_distance`
pub fn draw_steps(distance: f32, max_draw_distance: f32) -> u32 {
    debug_assert!(max_draw_distance > 0.0, "max draw distance must be positive");
    (distance / max_draw_distance).ceil().max(1.0) as u32
}

impl Brush {
    /// Issue this tick's draw calls on `board`.
    ///
    /// When multi-draw is enabled, the brush drew on the previous tick and
    /// it traveled farther than the max draw distance, the stroke is split
    /// into `steps` pieces: `steps - 1` intermediate calls at `i / steps`
    /// carrying `steps`, then the final call at fraction 1 with a step count
    /// of 1. Otherwise only the final call is made. Returns the number of
    /// draw calls issued.
    pub fn dispatch_draws(
        &mut self,
        board: &DrawingBoard,
        canvas: &mut dyn Canvas,
        canvas_size: Vec2,
    ) -> u32 {
        let state = &self.state;
        let config = &state.config;
        let distance = state.poses.traveled_distance();

        let split = config.use_multi_draw && distance > config.max_draw_distance;
        let steps = if split && state.drew_last_tick {
            draw_steps(distance, config.max_draw_distance)
        } else {
            1
        };

        if steps > 1 {
            debug!(
                "{}: multi-draw on {} over {:.2} units in {} steps",
                state.id, board.id, distance, steps
            );
        }

        for i in 1..steps {
            let request = DrawRequest {
                board,
                canvas_size,
                fraction: i as f32 / steps as f32,
                steps,
            };
            self.behavior.draw_on(&self.state, &request, canvas);
        }

        let request = DrawRequest {
            board,
            canvas_size,
            fraction: FINAL_DRAW_FRACTION,
            steps: 1,
        };
        self.behavior.draw_on(&self.state, &request, canvas);

        self.state.drew_this_tick = true;
        steps
    }

    /// End-of-tick commit, called once after every board was processed.
    ///
    /// The last-drawn pose only advances when the brush drew this tick.
    pub fn finish_draw(&mut self) {
        let state = &mut self.state;
        state.poses.commit(state.drew_this_tick);
        state.drew_last_tick = state.drew_this_tick;
    }
}
