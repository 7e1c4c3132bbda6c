//! Gameplay tuning loaded from `assets/data/tuning.ron`.
//!
//! Numbers that shape how the game *feels* (speeds, health, invincibility
//! windows) live in [`Tuning`] so they can be tweaked without recompiling.
//! Numbers that are baked into the room art (screen size, HUD band, sprite
//! sizes) are plain constants.

use bevy::prelude::*;
use serde::Deserialize;
use std::fs;

/// Window width in pixels.
pub const SCREEN_WIDTH: i32 = 768;
/// Window height in pixels.
pub const SCREEN_HEIGHT: i32 = 672;
/// Height of the HUD band drawn above every room.
pub const HUD_HEIGHT: i32 = 150;
/// Side of one layout tile in pixels.
pub const TILE_SIZE: i32 = 48;

pub const PLAYER_SIZE: i32 = 48;
pub const PLAYER_HITBOX_INSET: i32 = 5;
pub const SWORD_REACH: i32 = 36;
pub const BEAM_LENGTH: i32 = 48;
pub const BEAM_THICKNESS: i32 = 21;

pub const ENEMY_SIZE: i32 = 48;
pub const ENEMY_HITBOX_INSET: i32 = 10;
pub const FIREBALL_SIZE: i32 = 24;

pub const BOSS_WIDTH: i32 = 72;
pub const BOSS_HEIGHT: i32 = 96;
/// Rows trimmed from the top and bottom of the boss sprite to get its hitbox.
pub const BOSS_HITBOX_TRIM: i32 = 30;

/// Player tuning.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PlayerTuning {
    pub health: u32,
    pub speed: i32,
    pub iframes: u32,
    pub knockback: i32,
    pub swing_ticks: u32,
    pub beam_speed: i32,
    /// Ticks between walk animation frames.
    pub walk_delay: u32,
}

impl Default for PlayerTuning {
    fn default() -> Self {
        Self {
            health: 7,
            speed: 5,
            iframes: 120,
            knockback: 20,
            swing_ticks: 4,
            beam_speed: 15,
            walk_delay: 3,
        }
    }
}

/// Boss tuning.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BossTuning {
    pub start: (i32, i32),
    pub health: u32,
    pub iframes: u32,
    pub patrol_speed: i32,
    /// The boss turns around once its x leaves `patrol_min..=patrol_max`.
    pub patrol_min: i32,
    pub patrol_max: i32,
    pub shot_speed: f32,
    pub spread_degrees: f32,
    /// A shot left of this x closes the boss's mouth.
    pub mouth_close_x: i32,
    /// A shot left of this x (or below `reset_y`) triggers a new volley.
    pub reset_x: i32,
    pub reset_y: i32,
    pub animation_delay: u32,
}

impl Default for BossTuning {
    fn default() -> Self {
        Self {
            start: (600, 330),
            health: 10,
            iframes: 30,
            patrol_speed: 1,
            patrol_min: 500,
            patrol_max: 620,
            shot_speed: 10.0,
            spread_degrees: 20.0,
            mouth_close_x: 0,
            reset_x: -400,
            reset_y: 1000,
            animation_delay: 10,
        }
    }
}

/// Top-level tuning resource.
#[derive(Resource, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Length of one simulation tick.
    pub tick_seconds: f64,
    pub player: PlayerTuning,
    /// Invincibility window shared by every regular enemy.
    pub enemy_iframes: u32,
    pub boss: BossTuning,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            tick_seconds: 0.02,
            player: PlayerTuning::default(),
            enemy_iframes: 30,
            boss: BossTuning::default(),
        }
    }
}

impl Tuning {
    pub const PATH: &'static str = "assets/data/tuning.ron";

    /// Load tuning from disk, falling back to defaults on any problem.
    pub fn load() -> Self {
        match fs::read_to_string(Self::PATH) {
            Ok(contents) => match ron::from_str(&contents) {
                Ok(tuning) => {
                    info!("Loaded tuning from {}", Self::PATH);
                    tuning
                }
                Err(e) => {
                    error!("Failed to parse {}: {}. Using defaults.", Self::PATH, e);
                    Self::default()
                }
            },
            Err(e) => {
                warn!("Could not read {}: {}. Using defaults.", Self::PATH, e);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_file_keeps_defaults() {
        let tuning: Tuning = ron::from_str("(enemy_iframes: 12, player: (speed: 7))").unwrap();
        assert_eq!(tuning.enemy_iframes, 12);
        assert_eq!(tuning.player.speed, 7);
        assert_eq!(tuning.player.iframes, 120);
        assert_eq!(tuning.boss.health, 10);
    }

    #[test]
    fn shipped_tuning_parses() {
        let tuning: Tuning = ron::from_str(include_str!("../../assets/data/tuning.ron")).unwrap();
        assert_eq!(tuning.player.health, 7);
        assert_eq!(tuning.boss.start, (600, 330));
    }
}
