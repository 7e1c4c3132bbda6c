//! Enemy data loading from RON files.

use bevy::prelude::*;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;

use super::components::EnemyKind;
use crate::world::DataLoadError;

fn default_retarget_delay() -> u32 {
    12
}

fn default_roll_range() -> u32 {
    10
}

/// Enemy definition loaded from `assets/data/enemies.ron`.
#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct EnemyDefinition {
    pub name: String,
    pub health: u32,
    pub speed: i32,
    /// Ticks between random direction rolls (and animation frames).
    #[serde(default = "default_retarget_delay")]
    pub retarget_delay: u32,
    /// Rolls are drawn from `0..roll_range`; only `0..4` move.
    #[serde(default = "default_roll_range")]
    pub roll_range: u32,
    /// Extra pixels per tick while charging. Chargers only.
    #[serde(default)]
    pub charge_boost: i32,
    /// Fireball speed. Turrets only.
    #[serde(default)]
    pub shot_speed: i32,
}

/// Resource holding every enemy definition, keyed by kind.
#[derive(Resource, Default, Debug, Clone)]
pub struct EnemyRegistry {
    pub definitions: HashMap<EnemyKind, EnemyDefinition>,
}

impl EnemyRegistry {
    pub const PATH: &'static str = "assets/data/enemies.ron";

    /// Get a definition, failing if the kind was never defined.
    pub fn get(&self, kind: EnemyKind) -> Result<&EnemyDefinition, DataLoadError> {
        self.definitions
            .get(&kind)
            .ok_or(DataLoadError::MissingEnemyDefinition(kind))
    }

    /// Parse a registry from RON text. `path` is only used in error messages.
    pub fn from_ron(contents: &str, path: &str) -> Result<Self, DataLoadError> {
        let definitions: HashMap<EnemyKind, EnemyDefinition> =
            ron::from_str(contents).map_err(|e| DataLoadError::ParseError {
                path: path.to_string(),
                details: e.to_string(),
            })?;
        for kind in EnemyKind::ALL {
            if !definitions.contains_key(&kind) {
                return Err(DataLoadError::MissingEnemyDefinition(kind));
            }
        }
        Ok(Self { definitions })
    }

    /// Load all enemy definitions from disk.
    pub fn load() -> Result<Self, DataLoadError> {
        let contents = fs::read_to_string(Self::PATH).map_err(|e| DataLoadError::ReadError {
            path: Self::PATH.to_string(),
            details: e.to_string(),
        })?;
        let registry = Self::from_ron(&contents, Self::PATH)?;
        for (kind, definition) in &registry.definitions {
            info!("Loaded enemy definition: {} ({:?})", definition.name, kind);
        }
        Ok(registry)
    }
}
