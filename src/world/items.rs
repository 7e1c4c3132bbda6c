//! Collectible items.

use serde::Deserialize;

use super::area::Location;
use super::geometry::{Aabb, Mobile};
use crate::player::Player;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum ItemKind {
    /// Restores one point of health.
    Heart,
    /// Unlocks the sword beam.
    SwordScroll,
    /// Ends the game once the boss is down.
    Triforce,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Item {
    pub kind: ItemKind,
    pub bounds: Aabb,
}

impl Item {
    pub fn new(kind: ItemKind, bounds: Aabb) -> Self {
        Self { kind, bounds }
    }

    pub fn touches(&self, player: &Player) -> bool {
        self.bounds.intersects(&player.hitbox())
    }
}

/// An item fixed to one room.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub location: Location,
    pub item: Item,
}

/// A room's bonus heart. Whether it spawns at all is rolled once when the
/// room is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BonusHeart {
    pub item: Item,
    pub collected: bool,
}
