//! Area graphs and the traversal rules between rooms.
//!
//! Each area is a flat list of optional rooms read as a grid `stride` slots
//! wide. Walking past one of the area's edge thresholds moves the player to
//! the neighbouring slot and re-enters them at the opposite side. Portals
//! override that rule for specific rooms and move the player between areas.

use std::fmt;

use bevy::prelude::*;
use serde::Deserialize;

use super::error::GraphError;
use super::geometry::{Aabb, Direction, Mobile};
use super::items::Placement;
use super::room::Room;
use crate::player::Player;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum AreaKind {
    Overworld,
    Dungeon,
}

impl fmt::Display for AreaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AreaKind::Overworld => write!(f, "overworld"),
            AreaKind::Dungeon => write!(f, "dungeon"),
        }
    }
}

/// A room address: which area, which slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub struct Location {
    pub area: AreaKind,
    pub slot: usize,
}

/// Player coordinates past which the room changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct Thresholds {
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
    pub left: i32,
}

impl Thresholds {
    pub fn crossed(&self, direction: Direction, (x, y): (i32, i32)) -> bool {
        match direction {
            Direction::Up => y < self.top,
            Direction::Right => x > self.right,
            Direction::Down => y > self.bottom,
            Direction::Left => x < self.left,
        }
    }
}

/// Where the player re-enters after moving in each direction.
///
/// `up` and `down` are y coordinates, `right` and `left` are x coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct Arrivals {
    pub up: i32,
    pub right: i32,
    pub down: i32,
    pub left: i32,
}

impl Arrivals {
    fn place(&self, direction: Direction, player: &mut Player) {
        match direction {
            Direction::Up => player.y = self.up,
            Direction::Right => player.x = self.right,
            Direction::Down => player.y = self.down,
            Direction::Left => player.x = self.left,
        }
    }
}

/// What sets a portal off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum PortalTrigger {
    /// Crossing this edge of the room, in place of the usual neighbour move.
    Edge(Direction),
    /// The player's hitbox touching this zone.
    Zone(Aabb),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct Portal {
    pub from: Location,
    pub trigger: PortalTrigger,
    pub to: Location,
    pub arrival: (i32, i32),
}

/// One area's grid of rooms.
#[derive(Debug, Clone)]
pub struct AreaGraph {
    pub kind: AreaKind,
    pub stride: usize,
    pub slots: Vec<Option<Room>>,
    pub thresholds: Thresholds,
    pub arrivals: Arrivals,
}

impl AreaGraph {
    pub fn rows(&self) -> usize {
        self.slots.len() / self.stride.max(1)
    }

    pub fn room(&self, slot: usize) -> Result<&Room, GraphError> {
        self.slots
            .get(slot)
            .and_then(Option::as_ref)
            .ok_or(GraphError::EmptySlot {
                area: self.kind,
                slot,
            })
    }

    pub fn room_mut(&mut self, slot: usize) -> Result<&mut Room, GraphError> {
        let area = self.kind;
        self.slots
            .get_mut(slot)
            .and_then(Option::as_mut)
            .ok_or(GraphError::EmptySlot { area, slot })
    }

    /// Grid neighbour of `slot`. Never wraps between rows.
    pub fn neighbor_slot(&self, slot: usize, direction: Direction) -> Result<usize, GraphError> {
        let off_grid = GraphError::OffGrid {
            area: self.kind,
            slot,
            direction,
        };
        let (row, col) = (slot / self.stride, slot % self.stride);
        let (row, col) = match direction {
            Direction::Up => (row.checked_sub(1).ok_or(off_grid)?, col),
            Direction::Right if col + 1 < self.stride => (row, col + 1),
            Direction::Down if row + 1 < self.rows() => (row + 1, col),
            Direction::Left => (row, col.checked_sub(1).ok_or(off_grid)?),
            Direction::Right | Direction::Down => return Err(off_grid),
        };
        Ok(row * self.stride + col)
    }

    /// Occupied neighbour of `slot`.
    pub fn neighbor(&self, slot: usize, direction: Direction) -> Result<&Room, GraphError> {
        self.room(self.neighbor_slot(slot, direction)?)
    }
}

/// Everything the session walks around in.
#[derive(Debug, Clone)]
pub struct World {
    pub overworld: AreaGraph,
    pub dungeon: AreaGraph,
    pub portals: Vec<Portal>,
    pub start: Location,
    pub start_position: (i32, i32),
    pub boss_room: Location,
    pub sword_scroll: Placement,
    pub triforce: Placement,
}

impl World {
    pub fn graph(&self, area: AreaKind) -> &AreaGraph {
        match area {
            AreaKind::Overworld => &self.overworld,
            AreaKind::Dungeon => &self.dungeon,
        }
    }

    pub fn graph_mut(&mut self, area: AreaKind) -> &mut AreaGraph {
        match area {
            AreaKind::Overworld => &mut self.overworld,
            AreaKind::Dungeon => &mut self.dungeon,
        }
    }

    pub fn room(&self, location: Location) -> Result<&Room, GraphError> {
        self.graph(location.area).room(location.slot)
    }

    pub fn room_mut(&mut self, location: Location) -> Result<&mut Room, GraphError> {
        self.graph_mut(location.area).room_mut(location.slot)
    }

    fn portal(&self, from: Location, fired: impl Fn(&PortalTrigger) -> bool) -> Option<&Portal> {
        self.portals
            .iter()
            .find(|portal| portal.from == from && fired(&portal.trigger))
    }

    /// Applies this tick's edge and portal rules to the player.
    ///
    /// Edge rules run in Up, Right, Down, Left order against the room the
    /// previous rule landed in. A portal ends the check for the tick.
    pub fn traverse(&self, from: Location, player: &mut Player) -> Result<Location, GraphError> {
        let graph = self.graph(from.area);
        let mut at = from;

        for direction in Direction::ALL {
            if !graph.thresholds.crossed(direction, (player.x, player.y)) {
                continue;
            }
            if let Some(portal) = self.portal(at, |t| *t == PortalTrigger::Edge(direction)) {
                return Ok(self.take_portal(portal, player));
            }
            let next = graph.neighbor_slot(at.slot, direction)?;
            graph.room(next)?;
            at.slot = next;
            graph.arrivals.place(direction, player);
            info!("Moved {:?} into {} slot {}", direction, at.area, at.slot);
        }

        let hitbox = player.hitbox();
        if let Some(portal) = self.portal(at, |t| matches!(t, PortalTrigger::Zone(zone) if zone.intersects(&hitbox))) {
            return Ok(self.take_portal(portal, player));
        }
        Ok(at)
    }

    fn take_portal(&self, portal: &Portal, player: &mut Player) -> Location {
        (player.x, player.y) = portal.arrival;
        info!(
            "Portal from {} slot {} to {} slot {}",
            portal.from.area, portal.from.slot, portal.to.area, portal.to.slot
        );
        portal.to
    }
}
