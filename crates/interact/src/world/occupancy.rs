//! Zone-side half of the brush/zone membership index.
//!
//! Each brush records the zones it overlaps; this index records, per zone,
//! the brushes overlapping it. Both sides are keyed by id so neither holds a
//! reference to the other.

use std::collections::{HashMap, HashSet};

use crate::types::{BrushId, ZoneId};

/// Brushes currently overlapping each zone
#[derive(Debug, Default, Clone)]
pub struct ZoneOccupancy {
    brushes_by_zone: HashMap<ZoneId, HashSet<BrushId>>,
}

impl ZoneOccupancy {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `brush` overlaps `zone`. Returns false if already recorded.
    pub fn add(&mut self, zone: ZoneId, brush: BrushId) -> bool {
        self.brushes_by_zone.entry(zone).or_default().insert(brush)
    }

    /// Forget that `brush` overlaps `zone`. Returns false if not recorded.
    pub fn remove(&mut self, zone: ZoneId, brush: BrushId) -> bool {
        let Some(brushes) = self.brushes_by_zone.get_mut(&zone) else {
            return false;
        };
        let removed = brushes.remove(&brush);
        if brushes.is_empty() {
            self.brushes_by_zone.remove(&zone);
        }
        removed
    }

    /// Drop a zone, returning the brushes that were inside it
    pub fn remove_zone(&mut self, zone: ZoneId) -> Vec<BrushId> {
        let mut brushes: Vec<BrushId> = self
            .brushes_by_zone
            .remove(&zone)
            .map(|set| set.into_iter().collect())
            .unwrap_or_default();
        brushes.sort();
        brushes
    }

    /// Brushes overlapping `zone`, in id order
    pub fn brushes_in(&self, zone: ZoneId) -> Vec<BrushId> {
        let mut brushes: Vec<BrushId> = self
            .brushes_by_zone
            .get(&zone)
            .map(|set| set.iter().copied().collect())
            .unwrap_or_default();
        brushes.sort();
        brushes
    }

    pub fn contains(&self, zone: ZoneId, brush: BrushId) -> bool {
        self.brushes_by_zone
            .get(&zone)
            .is_some_and(|set| set.contains(&brush))
    }
}
