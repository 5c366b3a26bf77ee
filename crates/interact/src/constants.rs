/// Degrees in a full wheel turn.
pub const FULL_TURN_DEGREES: f32 = 360.0;

/// Roll deltas beyond this take the short path across the 0/360 seam.
pub const HALF_TURN_DEGREES: f32 = 180.0;

/// World up axis. Z is up, X is forward.
pub const WORLD_UP: glam::Vec3 = glam::Vec3::Z;

/// Fraction passed to the final draw call of every tick.
pub const FINAL_DRAW_FRACTION: f32 = 1.0;
