//! Tile Quest - a top-down sword-and-dungeon adventure in Bevy.
//!
//! The game runs at a fixed 50 ticks per second. All game rules live in plain
//! structs advanced by [`core::Session::tick`]; the Bevy plugins only feed it
//! input and draw or play what it reports.
//!
//! # Architecture
//!
//! The game is organized into plugins, each handling a specific aspect:
//!
//! - **Core**: Game states, sound cues, tuning, the fixed-step session
//! - **Player**: Keyboard sampling, movement, sword and beam
//! - **Combat**: Health, invincibility, projectiles and hit resolution
//! - **Enemies**: Patrollers, chargers, turrets and the boss
//! - **World**: Geometry, rooms, area graphs and world data
//! - **Audio**: Sound effects and music
//! - **Rendering**: Camera and room drawing
//! - **UI**: Title, endings and the hearts HUD

pub mod audio;
pub mod combat;
pub mod core;
pub mod enemies;
pub mod player;
pub mod rendering;
pub mod ui;
pub mod world;

use bevy::prelude::*;

/// Main game plugin that adds all sub-plugins.
pub struct TileQuestPlugin;

impl Plugin for TileQuestPlugin {
    fn build(&self, app: &mut App) {
        app
            // Core systems (must be first)
            .add_plugins(core::CorePlugin)

            // Player input
            .add_plugins(player::PlayerPlugin)

            // World data and session setup
            .add_plugins(world::WorldPlugin)

            // Sound
            .add_plugins(audio::GameAudioPlugin)

            // Rendering systems
            .add_plugins(rendering::RenderingPlugin)

            // UI systems
            .add_plugins(ui::UiPlugin);
    }
}
