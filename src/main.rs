//! Tile Quest - Entry Point
//!
//! Controls:
//! - WASD: Move
//! - J: Attack
//! - Any key: Leave the title screen
//! - Escape: Quit from an ending screen

use bevy::prelude::*;

use tile_quest::core::tuning::{SCREEN_HEIGHT, SCREEN_WIDTH};

fn main() {
    App::new()
        // Bevy default plugins; sound goes through bevy_kira_audio instead
        .add_plugins(
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: "Tile Quest".to_string(),
                        resolution: (SCREEN_WIDTH as f32, SCREEN_HEIGHT as f32).into(),
                        resizable: false,
                        ..default()
                    }),
                    ..default()
                })
                .disable::<bevy::audio::AudioPlugin>(),
        )

        // Our game plugin
        .add_plugins(tile_quest::TileQuestPlugin)

        .run();
}
