//! World-scoped coordinator for brushes, boards and interact volumes.
//!
//! [`InteractiveWorld`] owns every registered brush, the board/zone
//! registry and the zone occupancy index. The host forwards lifecycle and
//! overlap events to it and calls [`InteractiveWorld::tick`] once per frame.

mod collision;
mod error;
mod occupancy;

use std::collections::BTreeMap;

use tracing::{debug, info};

#[cfg(feature = "bevy")]
use bevy::prelude::Resource;

use crate::board::DrawingBoard;
use crate::brush::Brush;
use crate::canvas::CanvasProvider;
use crate::pose::Pose;
use crate::registry::BoardRegistry;
use crate::types::{BoardId, BrushId, ZoneId};
use crate::zone::InteractVolume;

pub use collision::{
    check_owner_collision, ChannelResponse, CollisionEnabled, CollisionPrimitive, OwnerCollision,
};
pub use error::WorldError;
pub use occupancy::ZoneOccupancy;

/// What happened during one tick
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TickSummary {
    /// Brushes that decided to draw
    pub brushes_drawing: usize,
    /// Brush/board pairs that received a stroke
    pub strokes: usize,
    /// Total draw calls across all strokes
    pub draw_calls: u32,
}

/// Registry and per-tick driver for an interactive world
#[derive(Debug, Default)]
#[cfg_attr(feature = "bevy", derive(Resource))]
pub struct InteractiveWorld {
    registry: BoardRegistry,
    brushes: BTreeMap<BrushId, Brush>,
    occupancy: ZoneOccupancy,
}

impl InteractiveWorld {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn registry(&self) -> &BoardRegistry {
        &self.registry
    }

    pub fn occupancy(&self) -> &ZoneOccupancy {
        &self.occupancy
    }

    pub fn brush(&self, id: BrushId) -> Option<&Brush> {
        self.brushes.get(&id)
    }

    pub fn brush_mut(&mut self, id: BrushId) -> Option<&mut Brush> {
        self.brushes.get_mut(&id)
    }

    /// Registered brushes in id order
    pub fn brushes(&self) -> impl Iterator<Item = &Brush> {
        self.brushes.values()
    }

    /// Register a drawing board
    pub fn add_board(&mut self, board: DrawingBoard) -> Result<(), WorldError> {
        if self.registry.board(board.id).is_some() {
            return Err(WorldError::DuplicateBoard(board.id));
        }
        let id = board.id;
        info!("Registered {} ({})", id, board.class);
        self.registry.insert_board(board);

        // Zones may already list the board
        let zones: Vec<ZoneId> = self
            .registry
            .zones()
            .filter(|z| z.services(id))
            .map(|z| z.id)
            .collect();
        for zone in zones {
            self.refresh_zone_occupants(zone);
        }
        Ok(())
    }

    /// Unregister a drawing board and detach it from every zone
    pub fn remove_board(&mut self, id: BoardId) -> Result<DrawingBoard, WorldError> {
        let (board, zones) = self
            .registry
            .remove_board(id)
            .ok_or(WorldError::UnknownBoard(id))?;
        info!("Unregistered {}", id);
        for zone in zones {
            self.refresh_zone_occupants(zone);
        }
        Ok(board)
    }

    /// Register an interact volume
    pub fn add_zone(&mut self, zone: InteractVolume) -> Result<(), WorldError> {
        if self.registry.zone(zone.id).is_some() {
            return Err(WorldError::DuplicateZone(zone.id));
        }
        info!("Registered {} with {} boards", zone.id, zone.boards().len());
        self.registry.insert_zone(zone);
        Ok(())
    }

    /// Unregister an interact volume; every brush inside it leaves it
    pub fn remove_zone(&mut self, id: ZoneId) -> Result<InteractVolume, WorldError> {
        let zone = self.registry.remove_zone(id).ok_or(WorldError::UnknownZone(id))?;
        for brush_id in self.occupancy.remove_zone(id) {
            if let Some(brush) = self.brushes.get_mut(&brush_id) {
                brush.leave_zone(id, &self.registry);
            }
        }
        info!("Unregistered {}", id);
        Ok(zone)
    }

    /// Make `zone` service `board`
    pub fn add_board_to_zone(&mut self, zone: ZoneId, board: BoardId) -> Result<(), WorldError> {
        let volume = self.registry.zone_mut(zone).ok_or(WorldError::UnknownZone(zone))?;
        if volume.add_board(board) {
            self.refresh_zone_occupants(zone);
        }
        Ok(())
    }

    /// Register a brush spawned inside `zones`.
    ///
    /// Logs an advisory when the owner's collision cannot be detected by
    /// interact volumes; the brush is registered either way.
    pub fn spawn_brush(
        &mut self,
        mut brush: Brush,
        owner: &OwnerCollision,
        zones: &[ZoneId],
    ) -> Result<(), WorldError> {
        let id = brush.id();
        if self.brushes.contains_key(&id) {
            return Err(WorldError::DuplicateBrush(id));
        }
        if let Some(zone) = zones.iter().find(|z| self.registry.zone(**z).is_none()) {
            return Err(WorldError::UnknownZone(*zone));
        }

        check_owner_collision(id, owner);

        brush.update_active_state(&self.registry);
        for zone in zones {
            self.occupancy.add(*zone, id);
            brush.enter_zone(*zone, &self.registry);
        }
        info!("Registered {} in {} zones", id, zones.len());
        self.brushes.insert(id, brush);
        Ok(())
    }

    /// Unregister a brush and remove it from every zone it still overlaps
    pub fn destroy_brush(&mut self, id: BrushId) -> Result<Brush, WorldError> {
        let brush = self.brushes.remove(&id).ok_or(WorldError::UnknownBrush(id))?;
        for zone in brush.state().zones() {
            self.occupancy.remove(*zone, id);
        }
        info!("Unregistered {}", id);
        Ok(brush)
    }

    /// Overlap callback: `brush` started overlapping `zone`
    pub fn enter_zone(&mut self, brush: BrushId, zone: ZoneId) -> Result<(), WorldError> {
        if self.registry.zone(zone).is_none() {
            return Err(WorldError::UnknownZone(zone));
        }
        let target = self.brushes.get_mut(&brush).ok_or(WorldError::UnknownBrush(brush))?;
        self.occupancy.add(zone, brush);
        target.enter_zone(zone, &self.registry);
        Ok(())
    }

    /// Overlap callback: `brush` stopped overlapping `zone`
    pub fn leave_zone(&mut self, brush: BrushId, zone: ZoneId) -> Result<(), WorldError> {
        let target = self.brushes.get_mut(&brush).ok_or(WorldError::UnknownBrush(brush))?;
        self.occupancy.remove(zone, brush);
        target.leave_zone(zone, &self.registry);
        Ok(())
    }

    /// Report a brush's host transform for the next tick
    pub fn set_brush_transform(&mut self, brush: BrushId, pose: Pose) -> Result<(), WorldError> {
        self.brushes
            .get_mut(&brush)
            .ok_or(WorldError::UnknownBrush(brush))?
            .set_transform(pose);
        Ok(())
    }

    /// Run one simulation tick.
    ///
    /// For each brush: refresh eligibility, decide whether to draw, dispatch
    /// strokes to every board it may draw on (boards without a canvas are
    /// skipped), then commit its poses.
    pub fn tick(&mut self, canvases: &mut dyn CanvasProvider) -> TickSummary {
        let ungated = self.registry.ungated_board_classes();
        let mut summary = TickSummary::default();

        for brush in self.brushes.values_mut() {
            brush.update_active_state(&self.registry);

            if brush.prepare_for_drawing(&ungated) {
                summary.brushes_drawing += 1;
                for board in self.registry.boards() {
                    if !brush.should_draw_on(board) {
                        continue;
                    }
                    let Some(canvas) = canvases.canvas(board.id) else {
                        debug!("{}: no canvas for {}", brush.id(), board.id);
                        continue;
                    };
                    summary.draw_calls += brush.dispatch_draws(board, canvas, board.resolution());
                    summary.strokes += 1;
                }
            }

            brush.finish_draw();
        }

        debug!(
            "Tick: {} brushes drawing, {} strokes, {} draw calls",
            summary.brushes_drawing, summary.strokes, summary.draw_calls
        );
        summary
    }

    fn refresh_zone_occupants(&mut self, zone: ZoneId) {
        for id in self.occupancy.brushes_in(zone) {
            if let Some(brush) = self.brushes.get_mut(&id) {
                brush.update_active_state(&self.registry);
            }
        }
    }
}
