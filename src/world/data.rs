//! World data structures and RON loading.

use bevy::prelude::*;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;

use super::area::{Arrivals, AreaKind, Location, Portal, Thresholds};
use super::error::DataLoadError;
use super::geometry::Aabb;
use super::room::Doorway;
use crate::enemies::EnemyKind;

/// How a layout character behaves.
pub fn tile_blocks(character: char) -> Option<bool> {
    match character {
        '.' | ' ' => Some(false),
        // rock, tree, water, statue
        '#' | 'T' | '~' | 'B' => Some(true),
        _ => None,
    }
}

/// Door state on each side of a dungeon room, in Up, Right, Down, Left order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct DoorsDef {
    pub up: Doorway,
    pub right: Doorway,
    pub down: Doorway,
    pub left: Doorway,
}

/// Enemy population for one room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct SquadDef {
    pub kind: EnemyKind,
    pub count: usize,
}

/// One occupied slot of an area grid.
#[derive(Debug, Clone, Deserialize)]
pub struct RoomDef {
    pub name: String,
    pub layout: String,
    #[serde(default)]
    pub squad: Option<SquadDef>,
    /// Dungeon rooms only.
    #[serde(default)]
    pub doors: Option<DoorsDef>,
}

/// Door-gap border segments for dungeon rooms.
#[derive(Debug, Clone, Deserialize)]
pub struct PlayerBordersDef {
    /// Always present.
    pub frame: Vec<Aabb>,
    /// Added only when that side is a wall, closing the door gap.
    pub wall_up: Aabb,
    pub wall_right: Aabb,
    pub wall_down: Aabb,
    pub wall_left: Aabb,
}

/// One area's grid and rules.
#[derive(Debug, Clone, Deserialize)]
pub struct AreaDef {
    pub kind: AreaKind,
    pub stride: usize,
    pub thresholds: Thresholds,
    pub arrivals: Arrivals,
    /// Top-left pixel of layout tile (0, 0), before the obstacle inset.
    pub terrain_origin: (i32, i32),
    /// Layout size in tiles (columns, rows).
    pub layout_size: (usize, usize),
    /// Margin trimmed from each side of a solid tile.
    pub obstacle_inset: i32,
    pub spawn_points: Vec<(i32, i32)>,
    pub enemy_borders: Vec<Aabb>,
    #[serde(default)]
    pub player_borders: Option<PlayerBordersDef>,
    /// Whether rooms roll for a bonus heart.
    #[serde(default)]
    pub bonus_hearts: bool,
    pub slots: Vec<Option<RoomDef>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlacementDef {
    pub location: Location,
    pub bounds: Aabb,
}

/// Raw world definition as read from RON.
#[derive(Debug, Clone, Deserialize)]
pub struct WorldDefinition {
    pub layouts: HashMap<String, Vec<String>>,
    pub overworld: AreaDef,
    pub dungeon: AreaDef,
    pub portals: Vec<Portal>,
    pub start: Location,
    pub start_position: (i32, i32),
    pub boss_room: Location,
    pub heart: Aabb,
    pub sword_scroll: PlacementDef,
    pub triforce: PlacementDef,
}

impl WorldDefinition {
    pub const PATH: &'static str = "assets/data/world.ron";

    /// Parse a definition from RON text. `path` is only used in error messages.
    pub fn from_ron(contents: &str, path: &str) -> Result<Self, DataLoadError> {
        ron::from_str(contents).map_err(|e| DataLoadError::ParseError {
            path: path.to_string(),
            details: e.to_string(),
        })
    }

    pub fn load() -> Result<Self, DataLoadError> {
        let contents = fs::read_to_string(Self::PATH).map_err(|e| DataLoadError::ReadError {
            path: Self::PATH.to_string(),
            details: e.to_string(),
        })?;
        let definition = Self::from_ron(&contents, Self::PATH)?;
        info!(
            "Loaded world definition: {} layouts, {} portals",
            definition.layouts.len(),
            definition.portals.len()
        );
        Ok(definition)
    }
}
