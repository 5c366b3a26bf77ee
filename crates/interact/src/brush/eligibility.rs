//! Zone membership and draw eligibility

use interact_config::BoardClass;
use tracing::debug;

use crate::board::DrawingBoard;
use crate::registry::BoardRegistry;
use crate::types::ZoneId;

use super::{Brush, BrushState};

impl BrushState {
    /// Rebuild the eligible-board set from every overlapping zone.
    ///
    /// With allow-list mode on, only boards whose class is listed are kept.
    fn recompute_eligible_boards(&mut self, registry: &BoardRegistry) {
        self.eligible_boards.clear();
        for zone in &self.zones {
            for board in registry.boards_in_zone(*zone) {
                if self.config.permits(&board.class) {
                    self.eligible_boards.insert(board.id);
                }
            }
        }
    }

    /// Whether this brush may draw on `board` this tick
    pub fn should_draw_on(&self, board: &DrawingBoard) -> bool {
        self.eligible_boards.contains(&board.id)
            || (!board.use_interact_volume && self.config.permits(&board.class))
    }
}

impl Brush {
    /// The brush started overlapping `zone`
    pub fn enter_zone(&mut self, zone: ZoneId, registry: &BoardRegistry) {
        self.state.zones.insert(zone);
        self.update_active_state(registry);
    }

    /// The brush stopped overlapping `zone`
    pub fn leave_zone(&mut self, zone: ZoneId, registry: &BoardRegistry) {
        self.state.zones.remove(&zone);
        self.update_active_state(registry);
    }

    /// Recompute eligible boards and the active-in-volume state.
    ///
    /// Entering or leaving the active state clears both drawn flags: the
    /// previous stroke cannot be continued across the change.
    pub fn update_active_state(&mut self, registry: &BoardRegistry) {
        let state = &mut self.state;
        state.recompute_eligible_boards(registry);

        let active = !state.eligible_boards.is_empty();
        if active != state.active_in_volume {
            debug!(
                "{}: active in volume {} -> {} ({} eligible boards)",
                state.id,
                state.active_in_volume,
                active,
                state.eligible_boards.len()
            );
            state.active_in_volume = active;
            state.drew_last_tick = false;
            state.drew_this_tick = false;
        }
    }

    /// Start-of-tick pose capture and draw decision.
    ///
    /// `ungated_classes` lists the classes of boards that accept brushes
    /// outside any zone. Returns true when the brush should draw this tick.
    pub fn prepare_for_drawing(&mut self, ungated_classes: &[BoardClass]) -> bool {
        let state = &mut self.state;
        state.drew_this_tick = false;
        state.poses.capture(state.transform);

        // Outside every zone only ungated boards are candidates, and at
        // least one of their classes has to pass the allow-list.
        if !state.active_in_volume && !ungated_classes.iter().any(|c| state.config.permits(c)) {
            return false;
        }

        let config = &state.config;
        let moved = config.draw_on_movement
            && !state
                .poses
                .current()
                .nearly_equal(state.poses.previous(), &config.movement_tolerance);

        if config.draw_every_tick || state.draw_once || moved {
            state.draw_once = false;
            return self.behavior.update_draw_info(&self.state);
        }
        false
    }

    /// Whether this brush may draw on `board` this tick
    pub fn should_draw_on(&self, board: &DrawingBoard) -> bool {
        self.state.should_draw_on(board)
    }
}

#[cfg(test)]
mod tests {
    use glam::{Vec2, Vec3};
    use interact_config::BrushConfig;

    use crate::board::{BoardMapping, DrawingBoard};
    use crate::brush::{Brush, BrushBehavior, BrushState, DrawRequest};
    use crate::canvas::Canvas;
    use crate::pose::Pose;
    use crate::registry::BoardRegistry;
    use crate::types::{BoardId, BrushId, ZoneId};
    use crate::zone::InteractVolume;

    use super::*;

    fn board(id: u32, class: &str) -> DrawingBoard {
        DrawingBoard::new(
            BoardId(id),
            class,
            BoardMapping::new(Vec2::ZERO, Vec2::splat(50.0), Vec2::splat(256.0)),
        )
    }

    /// Registry with gated boards 1 (Snow) and 2 (Mud) in zone 1, board 2
    /// also in zone 2, and ungated board 3 (Sand).
    fn registry() -> BoardRegistry {
        let mut registry = BoardRegistry::new();
        registry.insert_board(board(1, "Snow"));
        registry.insert_board(board(2, "Mud"));
        registry.insert_board(board(3, "Sand").without_interact_volume());
        registry.insert_zone(InteractVolume::with_boards(ZoneId(1), [BoardId(1), BoardId(2)]));
        registry.insert_zone(InteractVolume::with_boards(ZoneId(2), [BoardId(2)]));
        registry
    }

    fn brush(config: BrushConfig) -> Brush {
        Brush::with_default_behavior(BrushId(1), config, Pose::IDENTITY)
    }

    struct Veto;

    impl BrushBehavior for Veto {
        fn update_draw_info(&mut self, _brush: &BrushState) -> bool {
            false
        }

        fn draw_on(
            &mut self,
            _brush: &BrushState,
            _request: &DrawRequest<'_>,
            _canvas: &mut dyn Canvas,
        ) {
        }
    }

    #[test]
    fn test_enter_zone_collects_boards() {
        let registry = registry();
        let mut brush = brush(BrushConfig::default());

        brush.enter_zone(ZoneId(1), &registry);
        assert!(brush.state().active_in_volume());
        assert_eq!(brush.state().eligible_boards().len(), 2);

        // Board 2 reachable through both zones appears once
        brush.enter_zone(ZoneId(2), &registry);
        assert_eq!(brush.state().eligible_boards().len(), 2);
    }

    #[test]
    fn test_duplicate_enter_and_leave() {
        let registry = registry();
        let mut brush = brush(BrushConfig::default());

        brush.enter_zone(ZoneId(1), &registry);
        brush.enter_zone(ZoneId(1), &registry);
        assert_eq!(brush.state().zones().len(), 1);

        brush.leave_zone(ZoneId(1), &registry);
        brush.leave_zone(ZoneId(1), &registry);
        assert!(brush.state().zones().is_empty());
        assert!(!brush.state().active_in_volume());
    }

    #[test]
    fn test_allow_list_filters_exact_class() {
        let registry = registry();
        let mut brush = brush(BrushConfig::default().with_allow_list(["Mud"]));

        brush.enter_zone(ZoneId(1), &registry);
        let eligible: Vec<_> = brush.state().eligible_boards().iter().copied().collect();
        assert_eq!(eligible, vec![BoardId(2)]);
    }

    #[test]
    fn test_zone_without_allowed_boards_stays_inactive() {
        let registry = registry();
        let mut brush = brush(BrushConfig::default().with_allow_list(["Lava"]));

        brush.enter_zone(ZoneId(1), &registry);
        assert!(!brush.state().active_in_volume());
    }

    #[test]
    fn test_should_draw_on_flips_with_zone() {
        let registry = registry();
        let snow = registry.board(BoardId(1)).unwrap();
        let mut brush = brush(BrushConfig::default());

        assert!(!brush.should_draw_on(snow));
        brush.enter_zone(ZoneId(1), &registry);
        assert!(brush.should_draw_on(snow));
        brush.leave_zone(ZoneId(1), &registry);
        assert!(!brush.should_draw_on(snow));
    }

    #[test]
    fn test_should_draw_on_ungated_board() {
        let registry = registry();
        let sand = registry.board(BoardId(3)).unwrap();

        assert!(brush(BrushConfig::default()).should_draw_on(sand));
        assert!(brush(BrushConfig::default().with_allow_list(["Sand"])).should_draw_on(sand));
        assert!(!brush(BrushConfig::default().with_allow_list(["Snow"])).should_draw_on(sand));
    }

    #[test]
    fn test_transition_resets_drawn_flags() {
        let registry = registry();
        let config = BrushConfig {
            draw_every_tick: true,
            ..Default::default()
        };
        let mut brush = brush(config);
        brush.enter_zone(ZoneId(1), &registry);

        assert!(brush.prepare_for_drawing(&[]));
        let snow = registry.board(BoardId(1)).unwrap();
        let mut canvas = crate::canvas::RecordingCanvas::new();
        brush.dispatch_draws(snow, &mut canvas, snow.resolution());
        brush.finish_draw();
        assert!(brush.state().drew_last_tick());
        assert!(brush.state().drew_this_tick());

        // active -> inactive
        brush.leave_zone(ZoneId(1), &registry);
        assert!(!brush.state().drew_last_tick());
        assert!(!brush.state().drew_this_tick());
    }

    #[test]
    fn test_inactive_to_active_resets_drawn_flags() {
        let registry = registry();
        let config = BrushConfig {
            draw_every_tick: true,
            ..Default::default()
        };
        let mut brush = brush(config);
        let sand = registry.board(BoardId(3)).unwrap();

        assert!(brush.prepare_for_drawing(&registry.ungated_board_classes()));
        let mut canvas = crate::canvas::RecordingCanvas::new();
        brush.dispatch_draws(sand, &mut canvas, sand.resolution());
        brush.finish_draw();
        assert!(brush.state().drew_last_tick());

        brush.enter_zone(ZoneId(2), &registry);
        assert!(brush.state().active_in_volume());
        assert!(!brush.state().drew_last_tick());
        assert!(!brush.state().drew_this_tick());
    }

    #[test]
    fn test_prepare_without_zone_or_fallback() {
        let config = BrushConfig {
            draw_every_tick: true,
            ..Default::default()
        };
        let mut brush = brush(config);
        assert!(!brush.prepare_for_drawing(&[]));
    }

    #[test]
    fn test_prepare_fallback_must_pass_allow_list() {
        let config = BrushConfig {
            draw_every_tick: true,
            ..BrushConfig::default().with_allow_list(["Snow"])
        };
        let mut brush = brush(config);
        assert!(!brush.prepare_for_drawing(&[BoardClass::new("Sand")]));
        assert!(brush.prepare_for_drawing(&[BoardClass::new("Sand"), BoardClass::new("Snow")]));
    }

    #[test]
    fn test_prepare_draw_on_movement() {
        let mut brush = brush(BrushConfig::default());
        let fallback = [BoardClass::new("Sand")];

        // Not moved
        assert!(!brush.prepare_for_drawing(&fallback));

        // Moved within tolerance
        brush.set_transform(Pose::from_translation(Vec3::new(0.05, 0.0, 0.0)));
        assert!(!brush.prepare_for_drawing(&fallback));

        // Moved beyond tolerance
        brush.set_transform(Pose::from_translation(Vec3::new(1.0, 0.0, 0.0)));
        assert!(brush.prepare_for_drawing(&fallback));

        // Same pose again
        assert!(!brush.prepare_for_drawing(&fallback));
    }

    #[test]
    fn test_prepare_movement_ignored_when_disabled() {
        let config = BrushConfig {
            draw_on_movement: false,
            ..Default::default()
        };
        let mut brush = brush(config);
        brush.set_transform(Pose::from_translation(Vec3::new(100.0, 0.0, 0.0)));
        assert!(!brush.prepare_for_drawing(&[BoardClass::new("Sand")]));
    }

    #[test]
    fn test_draw_once_is_one_shot() {
        let config = BrushConfig {
            draw_on_movement: false,
            ..Default::default()
        };
        let mut brush = brush(config);
        let fallback = [BoardClass::new("Sand")];

        brush.draw_once();
        assert!(brush.state().draw_once_pending());
        assert!(brush.prepare_for_drawing(&fallback));
        assert!(!brush.state().draw_once_pending());
        assert!(!brush.prepare_for_drawing(&fallback));
    }

    #[test]
    fn test_draw_once_kept_while_gated_out() {
        let config = BrushConfig {
            draw_on_movement: false,
            ..Default::default()
        };
        let mut brush = brush(config);

        brush.draw_once();
        assert!(!brush.prepare_for_drawing(&[]));
        assert!(brush.state().draw_once_pending());
    }

    #[test]
    fn test_behavior_hook_has_final_say() {
        let config = BrushConfig {
            draw_every_tick: true,
            ..Default::default()
        };
        let mut brush = Brush::new(BrushId(2), config, Pose::IDENTITY, Veto);
        assert!(!brush.prepare_for_drawing(&[BoardClass::new("Sand")]));
    }

    #[test]
    fn test_prepare_rolls_pose() {
        let mut brush = brush(BrushConfig::default());
        let moved = Pose::from_translation(Vec3::new(3.0, 4.0, 0.0));
        brush.set_transform(moved);
        brush.prepare_for_drawing(&[]);

        assert_eq!(brush.state().poses().current(), &moved);
        assert_eq!(brush.state().poses().previous(), &Pose::IDENTITY);
    }
}
