//! Error types for world registry operations.

use crate::types::{BoardId, BrushId, ZoneId};

/// Errors from registry operations that must name an existing entity
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WorldError {
    #[error("Unknown brush: {0}")]
    UnknownBrush(BrushId),

    #[error("Unknown drawing board: {0}")]
    UnknownBoard(BoardId),

    #[error("Unknown interact volume: {0}")]
    UnknownZone(ZoneId),

    #[error("Brush already registered: {0}")]
    DuplicateBrush(BrushId),

    #[error("Drawing board already registered: {0}")]
    DuplicateBoard(BoardId),

    #[error("Interact volume already registered: {0}")]
    DuplicateZone(ZoneId),
}
