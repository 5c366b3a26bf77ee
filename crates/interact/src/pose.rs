//! Brush poses and the per-brush pose tracker.
//!
//! A [`Pose`] is a world transform (translation, rotation, scale). The
//! [`PoseTracker`] keeps the three poses a brush needs between ticks: the
//! pose captured this tick, the pose of the previous tick, and the pose at
//! which the brush last drew successfully. The last one anchors multi-step
//! strokes.

use glam::{EulerRot, Quat, Vec2, Vec3};
use interact_config::MovementTolerance;

use crate::constants::WORLD_UP;

/// World transform of a brush
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub translation: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
}

impl Default for Pose {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Pose {
    pub const IDENTITY: Self = Self {
        translation: Vec3::ZERO,
        rotation: Quat::IDENTITY,
        scale: Vec3::ONE,
    };

    /// Pose at `translation` with identity rotation and unit scale
    pub fn from_translation(translation: Vec3) -> Self {
        Self {
            translation,
            ..Self::IDENTITY
        }
    }

    /// Pose at `translation` with the given rotation and unit scale
    pub fn from_translation_rotation(translation: Vec3, rotation: Quat) -> Self {
        Self {
            translation,
            rotation,
            scale: Vec3::ONE,
        }
    }

    /// Build a rotation from yaw (about Z), pitch (about Y) and roll (about
    /// the forward X axis), all in degrees.
    pub fn rotation_from_degrees(yaw: f32, pitch: f32, roll: f32) -> Quat {
        Quat::from_euler(
            EulerRot::ZYX,
            yaw.to_radians(),
            pitch.to_radians(),
            roll.to_radians(),
        )
    }

    /// Translation projected onto the ground plane
    pub fn planar(&self) -> Vec2 {
        self.translation.truncate()
    }

    /// Distance to `other` ignoring the vertical axis
    pub fn planar_distance(&self, other: &Pose) -> f32 {
        self.planar().distance(other.planar())
    }

    /// Unit forward (+X) vector of this pose
    pub fn forward(&self) -> Vec3 {
        self.rotation * Vec3::X
    }

    /// Roll about the forward axis in degrees, in (-180, 180]
    pub fn roll_degrees(&self) -> f32 {
        let (_yaw, _pitch, roll) = self.rotation.to_euler(EulerRot::ZYX);
        roll.to_degrees()
    }

    /// Yaw of the frame whose Z axis is world up and whose Y axis follows
    /// the forward vector.
    ///
    /// Unlike the raw transform yaw this stays stable under roll and pitch.
    /// A forward vector pointing straight up or down yields 0.
    pub fn upright_yaw_degrees(&self) -> f32 {
        let x_axis = self.forward().cross(WORLD_UP);
        x_axis.y.atan2(x_axis.x).to_degrees()
    }

    /// Whether every component of `other` is within `tolerance` of this pose
    pub fn nearly_equal(&self, other: &Pose, tolerance: &MovementTolerance) -> bool {
        within(self.translation, other.translation, tolerance.location)
            && quat_within(self.rotation, other.rotation, tolerance.rotation)
            && within(self.scale, other.scale, tolerance.scale)
    }

    /// Interpolate toward `other`: translation and scale linearly, rotation
    /// along the shortest arc.
    pub fn lerp(&self, other: &Pose, t: f32) -> Pose {
        Pose {
            translation: self.translation.lerp(other.translation, t),
            rotation: self.rotation.slerp(other.rotation, t),
            scale: self.scale.lerp(other.scale, t),
        }
    }
}

fn within(a: Vec3, b: Vec3, tolerance: f32) -> bool {
    (a - b).abs().max_element() <= tolerance
}

// q and -q are the same rotation
fn quat_within(a: Quat, b: Quat, tolerance: f32) -> bool {
    let a = glam::Vec4::from(a);
    let b = glam::Vec4::from(b);
    (a - b).abs().max_element() <= tolerance || (a + b).abs().max_element() <= tolerance
}

/// Current, previous and last-drawn poses of a brush
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PoseTracker {
    current: Pose,
    previous: Pose,
    last_drawn: Pose,
}

impl PoseTracker {
    /// Tracker whose three poses all start at `pose`
    pub fn new(pose: Pose) -> Self {
        Self {
            current: pose,
            previous: pose,
            last_drawn: pose,
        }
    }

    /// Pose captured this tick
    pub fn current(&self) -> &Pose {
        &self.current
    }

    /// Pose of the previous tick
    pub fn previous(&self) -> &Pose {
        &self.previous
    }

    /// Pose at the last successful draw
    pub fn last_drawn(&self) -> &Pose {
        &self.last_drawn
    }

    /// Roll the current pose into the previous slot and capture `fresh`
    pub fn capture(&mut self, fresh: Pose) {
        self.previous = self.current;
        self.current = fresh;
    }

    /// End-of-tick commit. The last-drawn anchor only moves when the brush
    /// drew this tick.
    pub fn commit(&mut self, drew: bool) {
        self.previous = self.current;
        if drew {
            self.last_drawn = self.current;
        }
    }

    /// Planar distance from the last-drawn anchor to the current pose
    pub fn traveled_distance(&self) -> f32 {
        self.current.planar_distance(&self.last_drawn)
    }
}
