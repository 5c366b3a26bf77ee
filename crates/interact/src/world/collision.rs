//! Spawn-time check that a brush's owner can be seen by interact volumes.
//!
//! Zone overlap detection only reports owners with a collision primitive
//! that answers queries and does not ignore the world-dynamic channel. A
//! brush without one still draws on ungated boards, so the check only warns.

use tracing::warn;

use crate::types::BrushId;

/// Collision mode of a primitive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CollisionEnabled {
    #[default]
    NoCollision,
    QueryOnly,
    PhysicsOnly,
    QueryAndPhysics,
}

impl CollisionEnabled {
    pub fn has_query(self) -> bool {
        matches!(self, Self::QueryOnly | Self::QueryAndPhysics)
    }
}

/// Response of a primitive to a collision channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChannelResponse {
    #[default]
    Ignore,
    Overlap,
    Block,
}

/// One collision primitive of the brush owner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CollisionPrimitive {
    pub enabled: CollisionEnabled,
    pub world_dynamic: ChannelResponse,
}

impl CollisionPrimitive {
    pub fn new(enabled: CollisionEnabled, world_dynamic: ChannelResponse) -> Self {
        Self {
            enabled,
            world_dynamic,
        }
    }

    /// Whether interact volumes can detect this primitive
    pub fn detectable_by_volumes(&self) -> bool {
        self.enabled.has_query() && self.world_dynamic != ChannelResponse::Ignore
    }
}

/// Collision setup of the entity a brush is attached to
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OwnerCollision {
    pub primitives: Vec<CollisionPrimitive>,
}

impl OwnerCollision {
    /// Owner with no collision primitives at all
    pub fn none() -> Self {
        Self::default()
    }

    /// Owner with a single query-and-physics primitive overlapping world-dynamic
    pub fn overlapping() -> Self {
        Self {
            primitives: vec![CollisionPrimitive::new(
                CollisionEnabled::QueryAndPhysics,
                ChannelResponse::Overlap,
            )],
        }
    }

    pub fn detectable_by_volumes(&self) -> bool {
        self.primitives.iter().any(CollisionPrimitive::detectable_by_volumes)
    }
}

/// Log an advisory if interact volumes cannot detect the owner of `brush`.
///
/// Returns true when the owner is detectable.
pub fn check_owner_collision(brush: BrushId, owner: &OwnerCollision) -> bool {
    if owner.primitives.is_empty() {
        warn!(
            "{} is not attached to an owner with collision; interact volumes will not work with it",
            brush
        );
        return false;
    }
    if !owner.detectable_by_volumes() {
        warn!(
            "{}: owner has no primitive with query collision to world-dynamic; \
             interact volumes will not work with it",
            brush
        );
        return false;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detectable_primitives() {
        use ChannelResponse::*;
        use CollisionEnabled::*;

        let detectable = |enabled, response| {
            CollisionPrimitive::new(enabled, response).detectable_by_volumes()
        };
        assert!(detectable(QueryOnly, Overlap));
        assert!(detectable(QueryAndPhysics, Block));
        assert!(!detectable(PhysicsOnly, Block));
        assert!(!detectable(QueryOnly, Ignore));
    }

    #[test]
    fn test_check_owner_collision() {
        assert!(!check_owner_collision(BrushId(1), &OwnerCollision::none()));
        assert!(check_owner_collision(BrushId(1), &OwnerCollision::overlapping()));

        let owner = OwnerCollision {
            primitives: vec![
                CollisionPrimitive::new(CollisionEnabled::NoCollision, ChannelResponse::Overlap),
                CollisionPrimitive::new(CollisionEnabled::QueryOnly, ChannelResponse::Ignore),
            ],
        };
        assert!(!check_owner_collision(BrushId(1), &owner));
    }
}
