//! Error types for world data loading and room-graph traversal.

use thiserror::Error;

use super::area::AreaKind;
use super::geometry::Direction;
use crate::enemies::EnemyKind;

/// Errors that can occur when loading or building world data.
#[derive(Debug, Error)]
pub enum DataLoadError {
    /// File could not be read.
    #[error("Failed to read file '{path}': {details}")]
    ReadError { path: String, details: String },

    /// RON parsing failed.
    #[error("Parse error in '{path}': {details}")]
    ParseError { path: String, details: String },

    /// A room names a layout that does not exist.
    #[error("Room '{room}' uses unknown layout '{layout}'")]
    UnknownLayout { room: String, layout: String },

    /// Layout dimensions don't match the area's tile grid.
    #[error("Grid mismatch in layout '{layout}': expected {expected_width}x{expected_height}, got {actual_width}x{actual_height}")]
    GridMismatch {
        layout: String,
        expected_width: usize,
        expected_height: usize,
        actual_width: usize,
        actual_height: usize,
    },

    /// Invalid tile character.
    #[error("Unknown tile '{character}' in layout '{layout}' at ({x}, {y})")]
    UnknownTile {
        layout: String,
        character: char,
        x: usize,
        y: usize,
    },

    /// A room asks for more enemies than the area has spawn points.
    #[error("Room '{room}' wants {requested} enemies but the area only has {available} spawn points")]
    SpawnTableExhausted {
        room: String,
        requested: usize,
        available: usize,
    },

    /// A door or open layout edge leads onto nothing.
    #[error("{area} slot {slot} opens {direction:?} onto nothing")]
    DanglingDoor {
        area: AreaKind,
        slot: usize,
        direction: Direction,
    },

    /// The slot list does not fill whole rows.
    #[error("{area} has {slots} slots, which is not a multiple of stride {stride}")]
    BadGridShape {
        area: AreaKind,
        slots: usize,
        stride: usize,
    },

    /// Something is placed in a slot that has no room.
    #[error("'{what}' is placed in empty {area} slot {slot}")]
    EmptyPlacement {
        what: String,
        area: AreaKind,
        slot: usize,
    },

    /// An enemy kind is used but has no definition.
    #[error("No definition for enemy kind {0:?}")]
    MissingEnemyDefinition(EnemyKind),
}

/// Faults while walking an area graph. These mean the world data lets the
/// player reach a place that does not exist.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GraphError {
    #[error("{area} slot {slot} has no neighbour {direction:?}: edge of the grid")]
    OffGrid {
        area: AreaKind,
        slot: usize,
        direction: Direction,
    },

    #[error("{area} slot {slot} is empty")]
    EmptySlot { area: AreaKind, slot: usize },
}
