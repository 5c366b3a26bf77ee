//! Interact volumes: spatial regions that gate which boards a brush may paint

use crate::types::{BoardId, ZoneId};

/// A spatial region servicing a set of drawing boards.
///
/// Overlap detection is the host's job; the volume only records which boards
/// it services. Brushes overlapping the volume are tracked by the world's
/// occupancy index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InteractVolume {
    pub id: ZoneId,
    boards: Vec<BoardId>,
}

impl InteractVolume {
    /// Create an empty volume
    pub fn new(id: ZoneId) -> Self {
        Self {
            id,
            boards: Vec::new(),
        }
    }

    /// Create a volume servicing `boards`
    pub fn with_boards(id: ZoneId, boards: impl IntoIterator<Item = BoardId>) -> Self {
        let mut volume = Self::new(id);
        for board in boards {
            volume.add_board(board);
        }
        volume
    }

    /// Boards serviced by this volume
    pub fn boards(&self) -> &[BoardId] {
        &self.boards
    }

    /// Start servicing `board`. Returns false if it was already serviced.
    pub fn add_board(&mut self, board: BoardId) -> bool {
        if self.boards.contains(&board) {
            return false;
        }
        self.boards.push(board);
        true
    }

    /// Stop servicing `board`. Returns false if it was not serviced.
    pub fn remove_board(&mut self, board: BoardId) -> bool {
        let before = self.boards.len();
        self.boards.retain(|b| *b != board);
        self.boards.len() != before
    }

    pub fn services(&self, board: BoardId) -> bool {
        self.boards.contains(&board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boards_deduplicated() {
        let volume = InteractVolume::with_boards(ZoneId(1), [BoardId(1), BoardId(2), BoardId(1)]);
        assert_eq!(volume.boards(), &[BoardId(1), BoardId(2)]);
    }

    #[test]
    fn test_add_remove_board() {
        let mut volume = InteractVolume::new(ZoneId(1));
        assert!(volume.add_board(BoardId(5)));
        assert!(!volume.add_board(BoardId(5)));
        assert!(volume.services(BoardId(5)));
        assert!(volume.remove_board(BoardId(5)));
        assert!(!volume.remove_board(BoardId(5)));
        assert!(volume.boards().is_empty());
    }
}
