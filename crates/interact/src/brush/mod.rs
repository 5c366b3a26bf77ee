//! Brushes: moving actors that paint onto drawing boards.
//!
//! A [`Brush`] pairs the engine-owned [`BrushState`] (poses, flags, zone
//! membership, eligible boards) with a [`BrushBehavior`] strategy that decides
//! what a stroke looks like. Per tick the world calls, in order:
//!
//! 1. [`Brush::prepare_for_drawing`] - capture the pose and decide whether to draw
//! 2. [`Brush::should_draw_on`] / [`Brush::dispatch_draws`] - for every board
//! 3. [`Brush::finish_draw`] - commit poses and drawn flags
//!
//! Zone membership changes arrive through [`Brush::enter_zone`] and
//! [`Brush::leave_zone`] at any point between ticks.

mod eligibility;
mod stroke;

use std::collections::HashSet;

use glam::Vec2;
use interact_config::BrushConfig;

use crate::board::DrawingBoard;
use crate::canvas::Canvas;
use crate::pose::{Pose, PoseTracker};
use crate::types::{BoardId, BrushId, ZoneId};

pub use stroke::draw_steps;

/// Parameters of a single stroke step
#[derive(Debug, Clone, Copy)]
pub struct DrawRequest<'a> {
    /// Board being painted
    pub board: &'a DrawingBoard,
    /// Canvas size in pixels
    pub canvas_size: Vec2,
    /// Position of this step between the stroke origin (0) and the current pose (1)
    pub fraction: f32,
    /// Steps the stroke was split into for intermediate calls, 1 for the
    /// final call at fraction 1
    pub steps: u32,
}

/// Strategy deciding how a brush draws.
///
/// Brush variants (wheels, footprints, custom visuals) implement this trait.
pub trait BrushBehavior: Send + Sync {
    /// Last chance to veto a draw once the brush decided to draw this tick.
    ///
    /// Returning false skips drawing for the tick.
    fn update_draw_info(&mut self, _brush: &BrushState) -> bool {
        true
    }

    /// Issue paint commands for one stroke step
    fn draw_on(&mut self, brush: &BrushState, request: &DrawRequest<'_>, canvas: &mut dyn Canvas);
}

/// Behavior that always agrees to draw and paints nothing
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultBehavior;

impl BrushBehavior for DefaultBehavior {
    fn draw_on(
        &mut self,
        _brush: &BrushState,
        _request: &DrawRequest<'_>,
        _canvas: &mut dyn Canvas,
    ) {
    }
}

/// Engine-owned state of a brush
#[derive(Debug, Clone)]
pub struct BrushState {
    id: BrushId,
    config: BrushConfig,
    /// Live transform reported by the host, captured at the start of a tick
    transform: Pose,
    poses: PoseTracker,
    drew_this_tick: bool,
    drew_last_tick: bool,
    draw_once: bool,
    active_in_volume: bool,
    /// Zones the brush currently overlaps (membership only)
    zones: HashSet<ZoneId>,
    /// Boards reachable through `zones`, rebuilt on every membership change
    eligible_boards: HashSet<BoardId>,
}

impl BrushState {
    fn new(id: BrushId, config: BrushConfig, pose: Pose) -> Self {
        debug_assert!(config.validate().is_ok(), "{id}: invalid brush config {config:?}");
        Self {
            id,
            config,
            transform: pose,
            poses: PoseTracker::new(pose),
            drew_this_tick: false,
            drew_last_tick: false,
            draw_once: false,
            active_in_volume: false,
            zones: HashSet::new(),
            eligible_boards: HashSet::new(),
        }
    }

    pub fn id(&self) -> BrushId {
        self.id
    }

    pub fn config(&self) -> &BrushConfig {
        &self.config
    }

    /// Physical brush size in world units
    pub fn size(&self) -> Vec2 {
        Vec2::from_array(self.config.size)
    }

    /// Live transform as last reported by the host
    pub fn transform(&self) -> &Pose {
        &self.transform
    }

    pub fn poses(&self) -> &PoseTracker {
        &self.poses
    }

    pub fn drew_this_tick(&self) -> bool {
        self.drew_this_tick
    }

    pub fn drew_last_tick(&self) -> bool {
        self.drew_last_tick
    }

    /// Whether a one-shot draw is queued
    pub fn draw_once_pending(&self) -> bool {
        self.draw_once
    }

    /// Whether at least one overlapping zone offers a board to draw on
    pub fn active_in_volume(&self) -> bool {
        self.active_in_volume
    }

    pub fn zones(&self) -> &HashSet<ZoneId> {
        &self.zones
    }

    pub fn eligible_boards(&self) -> &HashSet<BoardId> {
        &self.eligible_boards
    }

    /// Where this tick's stroke starts.
    ///
    /// The last-drawn pose when the previous tick drew, so consecutive
    /// strokes join up; otherwise the previous tick's pose.
    pub fn stroke_origin(&self) -> &Pose {
        if self.drew_last_tick {
            self.poses.last_drawn()
        } else {
            self.poses.previous()
        }
    }

    /// Pose at `fraction` along this tick's stroke
    pub fn stroke_pose(&self, fraction: f32) -> Pose {
        self.stroke_origin().lerp(self.poses.current(), fraction)
    }
}

/// A brush and its drawing strategy
pub struct Brush {
    state: BrushState,
    behavior: Box<dyn BrushBehavior>,
}

impl std::fmt::Debug for Brush {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Brush").field("state", &self.state).finish_non_exhaustive()
    }
}

impl Brush {
    /// Create a brush at `pose` drawing with `behavior`
    pub fn new(
        id: BrushId,
        config: BrushConfig,
        pose: Pose,
        behavior: impl BrushBehavior + 'static,
    ) -> Self {
        Self {
            state: BrushState::new(id, config, pose),
            behavior: Box::new(behavior),
        }
    }

    /// Create a brush with [`DefaultBehavior`]
    pub fn with_default_behavior(id: BrushId, config: BrushConfig, pose: Pose) -> Self {
        Self::new(id, config, pose, DefaultBehavior)
    }

    pub fn id(&self) -> BrushId {
        self.state.id
    }

    pub fn state(&self) -> &BrushState {
        &self.state
    }

    /// Replace the configuration. Eligibility is refreshed on the next
    /// membership change or tick.
    pub fn set_config(&mut self, config: BrushConfig) {
        self.state.config = config;
    }

    /// Report the host transform; captured by the next `prepare_for_drawing`
    pub fn set_transform(&mut self, pose: Pose) {
        self.state.transform = pose;
    }

    /// Queue a one-shot draw for the next tick regardless of movement
    pub fn draw_once(&mut self) {
        self.state.draw_once = true;
    }

    pub fn set_behavior(&mut self, behavior: impl BrushBehavior + 'static) {
        self.behavior = Box::new(behavior);
    }
}
