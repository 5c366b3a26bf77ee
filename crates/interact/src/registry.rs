//! Lookup tables for drawing boards and interact volumes

use std::collections::BTreeMap;

use interact_config::BoardClass;

use crate::board::DrawingBoard;
use crate::types::{BoardId, ZoneId};
use crate::zone::InteractVolume;

/// Boards and zones known to a world, keyed by id.
///
/// Ordered maps keep tick iteration deterministic.
#[derive(Debug, Default)]
pub struct BoardRegistry {
    boards: BTreeMap<BoardId, DrawingBoard>,
    zones: BTreeMap<ZoneId, InteractVolume>,
}

impl BoardRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a board, returning the board previously stored under its id
    pub fn insert_board(&mut self, board: DrawingBoard) -> Option<DrawingBoard> {
        self.boards.insert(board.id, board)
    }

    /// Insert a zone, returning the zone previously stored under its id
    pub fn insert_zone(&mut self, zone: InteractVolume) -> Option<InteractVolume> {
        self.zones.insert(zone.id, zone)
    }

    /// Remove a board and detach it from every zone that services it.
    ///
    /// Returns the board and the zones it was detached from.
    pub fn remove_board(&mut self, id: BoardId) -> Option<(DrawingBoard, Vec<ZoneId>)> {
        let board = self.boards.remove(&id)?;
        let detached = self
            .zones
            .values_mut()
            .filter_map(|zone| zone.remove_board(id).then_some(zone.id))
            .collect();
        Some((board, detached))
    }

    pub fn remove_zone(&mut self, id: ZoneId) -> Option<InteractVolume> {
        self.zones.remove(&id)
    }

    pub fn board(&self, id: BoardId) -> Option<&DrawingBoard> {
        self.boards.get(&id)
    }

    pub fn zone(&self, id: ZoneId) -> Option<&InteractVolume> {
        self.zones.get(&id)
    }

    pub fn zone_mut(&mut self, id: ZoneId) -> Option<&mut InteractVolume> {
        self.zones.get_mut(&id)
    }

    /// All boards in id order
    pub fn boards(&self) -> impl Iterator<Item = &DrawingBoard> {
        self.boards.values()
    }

    /// All zones in id order
    pub fn zones(&self) -> impl Iterator<Item = &InteractVolume> {
        self.zones.values()
    }

    /// Boards serviced by `zone` that exist in this registry
    pub fn boards_in_zone(&self, zone: ZoneId) -> impl Iterator<Item = &DrawingBoard> {
        self.zones
            .get(&zone)
            .into_iter()
            .flat_map(|z| z.boards())
            .filter_map(|id| self.boards.get(id))
    }

    /// Distinct classes of the boards that do not use interact volumes.
    ///
    /// Brushes outside every zone may still draw when this is non-empty.
    pub fn ungated_board_classes(&self) -> Vec<BoardClass> {
        let mut classes: Vec<BoardClass> = Vec::new();
        for board in self.boards.values().filter(|b| !b.use_interact_volume) {
            if !classes.contains(&board.class) {
                classes.push(board.class.clone());
            }
        }
        classes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::BoardMapping;
    use glam::Vec2;

    fn board(id: u32, class: &str) -> DrawingBoard {
        DrawingBoard::new(
            BoardId(id),
            class,
            BoardMapping::new(Vec2::ZERO, Vec2::splat(10.0), Vec2::splat(128.0)),
        )
    }

    #[test]
    fn test_boards_in_zone_skips_missing() {
        let mut registry = BoardRegistry::new();
        registry.insert_board(board(1, "Snow"));
        registry.insert_zone(InteractVolume::with_boards(ZoneId(1), [BoardId(1), BoardId(9)]));

        let ids: Vec<_> = registry.boards_in_zone(ZoneId(1)).map(|b| b.id).collect();
        assert_eq!(ids, vec![BoardId(1)]);
        assert_eq!(registry.boards_in_zone(ZoneId(2)).count(), 0);
    }

    #[test]
    fn test_remove_board_detaches_from_zones() {
        let mut registry = BoardRegistry::new();
        registry.insert_board(board(1, "Snow"));
        registry.insert_zone(InteractVolume::with_boards(ZoneId(1), [BoardId(1)]));
        registry.insert_zone(InteractVolume::with_boards(ZoneId(2), [BoardId(1)]));
        registry.insert_zone(InteractVolume::new(ZoneId(3)));

        let (removed, zones) = registry.remove_board(BoardId(1)).unwrap();
        assert_eq!(removed.id, BoardId(1));
        assert_eq!(zones, vec![ZoneId(1), ZoneId(2)]);
        assert!(registry.zone(ZoneId(1)).unwrap().boards().is_empty());
        assert!(registry.remove_board(BoardId(1)).is_none());
    }

    #[test]
    fn test_ungated_board_classes_distinct() {
        let mut registry = BoardRegistry::new();
        registry.insert_board(board(1, "Snow"));
        registry.insert_board(board(2, "Mud").without_interact_volume());
        registry.insert_board(board(3, "Mud").without_interact_volume());
        registry.insert_board(board(4, "Sand").without_interact_volume());

        assert_eq!(
            registry.ungated_board_classes(),
            vec![BoardClass::new("Mud"), BoardClass::new("Sand")]
        );
    }
}
