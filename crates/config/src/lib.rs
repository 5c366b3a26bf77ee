//! Shared configuration for Interactive World brushes
//!
//! This crate is the single source of truth for brush tuning data: when a
//! brush draws, how far it may travel per stroke step, and which drawing
//! board classes it is allowed to paint. Configuration is plain data that
//! can be built in code or loaded from JSON.

use std::fmt;

use serde::{Deserialize, Serialize};

#[cfg(feature = "bevy")]
use bevy::prelude::Component;

/// Default location tolerance used by draw-on-movement (world units)
pub const DEFAULT_LOCATION_TOLERANCE: f32 = 0.1;

/// Default rotation tolerance used by draw-on-movement (quaternion components)
pub const DEFAULT_ROTATION_TOLERANCE: f32 = 0.01;

/// Default scale tolerance used by draw-on-movement
pub const DEFAULT_SCALE_TOLERANCE: f32 = 0.1;

/// Default maximum distance covered by a single stroke step (world units)
pub const DEFAULT_MAX_DRAW_DISTANCE: f32 = 10.0;

/// Default physical brush size (world units, X = width, Y = length)
pub const DEFAULT_BRUSH_SIZE: [f32; 2] = [10.0, 10.0];

/// Errors produced while loading or validating brush configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to parse brush config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Max draw distance must be positive, got {0}")]
    InvalidMaxDrawDistance(f32),

    #[error("Movement tolerance must not be negative: {0:?}")]
    NegativeTolerance(MovementTolerance),

    #[error("Brush size must be positive, got {0:?}")]
    InvalidBrushSize([f32; 2]),
}

/// Identity of a drawing board type.
///
/// Allow-lists match on exact class identity: two boards share a class only
/// if their class names are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BoardClass(String);

impl BoardClass {
    /// Create a board class from its name
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Class name
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BoardClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for BoardClass {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

/// Independent tolerances used to decide whether a brush moved.
///
/// A difference within the tolerance counts as "unchanged".
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MovementTolerance {
    /// Per-component translation tolerance
    pub location: f32,
    /// Per-component quaternion tolerance
    pub rotation: f32,
    /// Per-component scale tolerance
    pub scale: f32,
}

impl Default for MovementTolerance {
    fn default() -> Self {
        Self {
            location: DEFAULT_LOCATION_TOLERANCE,
            rotation: DEFAULT_ROTATION_TOLERANCE,
            scale: DEFAULT_SCALE_TOLERANCE,
        }
    }
}

impl MovementTolerance {
    /// Create tolerances from the three scalars
    pub fn new(location: f32, rotation: f32, scale: f32) -> Self {
        Self {
            location,
            rotation,
            scale,
        }
    }
}

/// Brush configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "bevy", derive(Component))]
#[serde(default)]
pub struct BrushConfig {
    /// Draw on every tick regardless of movement
    pub draw_every_tick: bool,
    /// Draw when the pose changed beyond `movement_tolerance`
    pub draw_on_movement: bool,
    /// Tolerances for the movement test
    pub movement_tolerance: MovementTolerance,
    /// Split long movements into several stroke steps
    pub use_multi_draw: bool,
    /// Longest planar distance a single stroke step may cover
    pub max_draw_distance: f32,
    /// Physical brush size in world units
    pub size: [f32; 2],
    /// Restrict drawing to the board classes in `allowed_boards`
    pub use_allow_list: bool,
    /// Board classes this brush may draw on when `use_allow_list` is set
    pub allowed_boards: Vec<BoardClass>,
}

impl Default for BrushConfig {
    fn default() -> Self {
        Self {
            draw_every_tick: false,
            draw_on_movement: true,
            movement_tolerance: MovementTolerance::default(),
            use_multi_draw: false,
            max_draw_distance: DEFAULT_MAX_DRAW_DISTANCE,
            size: DEFAULT_BRUSH_SIZE,
            use_allow_list: false,
            allowed_boards: Vec::new(),
        }
    }
}

impl BrushConfig {
    /// Parse and validate a configuration from JSON
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check value ranges that the drawing code relies on
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.max_draw_distance > 0.0) {
            return Err(ConfigError::InvalidMaxDrawDistance(self.max_draw_distance));
        }
        let t = self.movement_tolerance;
        if t.location < 0.0 || t.rotation < 0.0 || t.scale < 0.0 {
            return Err(ConfigError::NegativeTolerance(t));
        }
        if !(self.size[0] > 0.0 && self.size[1] > 0.0) {
            return Err(ConfigError::InvalidBrushSize(self.size));
        }
        Ok(())
    }

    /// Whether the allow-list lets this brush draw on `class`.
    ///
    /// Always true when allow-list mode is off.
    pub fn permits(&self, class: &BoardClass) -> bool {
        !self.use_allow_list || self.allowed_boards.contains(class)
    }

    /// Builder-style helper enabling allow-list mode with the given classes
    pub fn with_allow_list<I, C>(mut self, classes: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<BoardClass>,
    {
        self.use_allow_list = true;
        self.allowed_boards = classes.into_iter().map(Into::into).collect();
        self
    }
}
