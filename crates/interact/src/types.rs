use std::fmt;

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Identity of a brush registered with the world
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BrushId(pub u32);

/// Identity of a drawing board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BoardId(pub u32);

/// Identity of an interact volume (zone)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ZoneId(pub u32);

impl fmt::Display for BrushId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "brush#{}", self.0)
    }
}

impl fmt::Display for BoardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "board#{}", self.0)
    }
}

impl fmt::Display for ZoneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "zone#{}", self.0)
    }
}

/// Canvas-space parameters for one wheel/track stroke step.
///
/// Produced per draw call and consumed immediately by the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct WheelData {
    /// Wheel roll at the previous and current pose, in turns
    pub uv_range: Vec2,
    /// Previous location in canvas UV space
    pub last_location: Vec2,
    /// Current location in canvas UV space
    pub current_location: Vec2,
    /// Previous rotation in canvas space (degrees)
    pub last_rotation: f32,
    /// Current rotation in canvas space (degrees)
    pub current_rotation: f32,
    /// Brush width as a fraction of the canvas width
    pub width: f32,
    /// Previous height normalized by the board's interact height
    pub last_height: f32,
    /// Current height normalized by the board's interact height
    pub current_height: f32,
}

/// GPU-compatible packing of [`WheelData`] for material parameter upload.
///
/// All fields are f32 so the layout has no implicit padding.
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
#[repr(C)]
pub struct WheelUniform {
    pub uv_range: [f32; 2],
    pub last_location: [f32; 2],
    pub current_location: [f32; 2],
    /// [last, current]
    pub rotation: [f32; 2],
    /// [last, current]
    pub height: [f32; 2],
    pub width: f32,
    /// Padding to a 16-byte multiple
    pub _padding: f32,
}

impl From<WheelData> for WheelUniform {
    fn from(data: WheelData) -> Self {
        Self {
            uv_range: data.uv_range.to_array(),
            last_location: data.last_location.to_array(),
            current_location: data.current_location.to_array(),
            rotation: [data.last_rotation, data.current_rotation],
            height: [data.last_height, data.current_height],
            width: data.width,
            _padding: 0.0,
        }
    }
}
