//! Drawing boards and their world-to-canvas mapping

use glam::Vec2;
use interact_config::BoardClass;

use crate::types::BoardId;

/// Placement of a board's canvas in the world.
///
/// The canvas covers a rectangle on the ground plane centered at `center`,
/// `2 * half_extent` world units across, rotated by `yaw` degrees. Canvas UV
/// (0, 0) is the rectangle's local min corner, (1, 1) the max corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoardMapping {
    /// Ground-plane center of the board
    pub center: Vec2,
    /// Half size of the board in world units
    pub half_extent: Vec2,
    /// Board yaw in degrees
    pub yaw: f32,
    /// Render target size in pixels
    pub resolution: Vec2,
}

impl BoardMapping {
    /// Axis-aligned mapping
    pub fn new(center: Vec2, half_extent: Vec2, resolution: Vec2) -> Self {
        Self {
            center,
            half_extent,
            yaw: 0.0,
            resolution,
        }
    }

    /// Same mapping rotated by `yaw` degrees
    pub fn with_yaw(mut self, yaw: f32) -> Self {
        self.yaw = yaw;
        self
    }

    /// Map a ground-plane world location into canvas UV space
    pub fn world_to_canvas_uv(&self, world: Vec2) -> Vec2 {
        debug_assert!(
            self.half_extent.x > 0.0 && self.half_extent.y > 0.0,
            "degenerate board extent {:?}",
            self.half_extent
        );
        let local = Vec2::from_angle(-self.yaw.to_radians()).rotate(world - self.center);
        local / (self.half_extent * 2.0) + Vec2::splat(0.5)
    }

    /// Map a world yaw (degrees) into canvas rotation (degrees)
    pub fn world_to_canvas_rotation(&self, yaw: f32) -> f32 {
        yaw - self.yaw
    }

    /// Map a world-space size into canvas pixels
    pub fn world_to_canvas_size(&self, size: Vec2) -> Vec2 {
        size / (self.half_extent * 2.0) * self.resolution
    }
}

/// A paintable surface.
///
/// Boards hold no references to brushes; brushes decide which boards they
/// may draw on.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawingBoard {
    pub id: BoardId,
    /// Concrete board type, matched exactly by brush allow-lists
    pub class: BoardClass,
    pub mapping: BoardMapping,
    /// Vertical range in world units that heights are normalized against
    pub interact_height: f32,
    /// Whether brushes must be inside one of the board's zones to draw
    pub use_interact_volume: bool,
}

impl DrawingBoard {
    /// Create a zone-gated board
    pub fn new(id: BoardId, class: impl Into<BoardClass>, mapping: BoardMapping) -> Self {
        Self {
            id,
            class: class.into(),
            mapping,
            interact_height: 1.0,
            use_interact_volume: true,
        }
    }

    /// Set the interact height
    pub fn with_interact_height(mut self, interact_height: f32) -> Self {
        self.interact_height = interact_height;
        self
    }

    /// Make the board paintable by any brush, without zone gating
    pub fn without_interact_volume(mut self) -> Self {
        self.use_interact_volume = false;
        self
    }

    /// Render target size in pixels
    pub fn resolution(&self) -> Vec2 {
        self.mapping.resolution
    }

    pub fn world_to_canvas_uv(&self, world: Vec2) -> Vec2 {
        self.mapping.world_to_canvas_uv(world)
    }

    pub fn world_to_canvas_rotation(&self, yaw: f32) -> f32 {
        self.mapping.world_to_canvas_rotation(yaw)
    }

    pub fn world_to_canvas_size(&self, size: Vec2) -> Vec2 {
        self.mapping.world_to_canvas_size(size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-4;

    fn mapping() -> BoardMapping {
        BoardMapping::new(
            Vec2::new(100.0, 50.0),
            Vec2::new(50.0, 25.0),
            Vec2::new(1024.0, 512.0),
        )
    }

    #[test]
    fn test_uv_corners() {
        let mapping = mapping();
        let center = mapping.world_to_canvas_uv(Vec2::new(100.0, 50.0));
        assert!((center - Vec2::splat(0.5)).length() < EPS);
        assert!((mapping.world_to_canvas_uv(Vec2::new(50.0, 25.0)) - Vec2::ZERO).length() < EPS);
        assert!((mapping.world_to_canvas_uv(Vec2::new(150.0, 75.0)) - Vec2::ONE).length() < EPS);
    }

    #[test]
    fn test_uv_rotated_board() {
        // Board turned 90 degrees: world +Y runs along canvas +U
        let mapping = BoardMapping::new(Vec2::ZERO, Vec2::splat(10.0), Vec2::splat(256.0))
            .with_yaw(90.0);
        let uv = mapping.world_to_canvas_uv(Vec2::new(0.0, 10.0));
        assert!((uv - Vec2::new(1.0, 0.5)).length() < EPS);
        assert!((mapping.world_to_canvas_rotation(120.0) - 30.0).abs() < EPS);
    }

    #[test]
    fn test_size_in_pixels() {
        let size = mapping().world_to_canvas_size(Vec2::new(10.0, 5.0));
        assert!((size - Vec2::new(102.4, 51.2)).length() < EPS);
    }

    #[test]
    fn test_board_builders() {
        let board = DrawingBoard::new(BoardId(1), "Snow", mapping())
            .with_interact_height(20.0)
            .without_interact_volume();
        assert_eq!(board.class.as_str(), "Snow");
        assert_eq!(board.interact_height, 20.0);
        assert!(!board.use_interact_volume);
        assert_eq!(board.resolution(), Vec2::new(1024.0, 512.0));
    }
}
