//! Audio plugin - plays [`SoundCue`]s through bevy_kira_audio.

use bevy::prelude::*;
use bevy_kira_audio::{
    Audio, AudioApp, AudioChannel, AudioControl, AudioPlugin as KiraAudioPlugin, AudioSource,
};

use crate::core::{Cue, GameState, SoundCue};

pub struct GameAudioPlugin;

impl Plugin for GameAudioPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(KiraAudioPlugin)
            .add_audio_channel::<Music>()
            .add_systems(Startup, load_audio)
            .add_systems(OnEnter(GameState::InGame), start_music)
            .add_systems(OnExit(GameState::InGame), stop_music)
            .add_systems(Update, play_cues.run_if(resource_exists::<GameAudio>));
    }
}

/// Looping background track, kept apart so stopping it leaves effects playing.
#[derive(Resource)]
pub struct Music;

/// Sound handles, loaded once at startup.
#[derive(Resource)]
pub struct GameAudio {
    pub music: Handle<AudioSource>,
    pub player_hurt: Handle<AudioSource>,
    pub player_death: Handle<AudioSource>,
    pub enemy_hit: Handle<AudioSource>,
    pub enemy_death: Handle<AudioSource>,
    pub item_pickup: Handle<AudioSource>,
    pub boss_volley: Handle<AudioSource>,
    pub sword_slash: Handle<AudioSource>,
    pub sword_beam: Handle<AudioSource>,
    pub victory: Handle<AudioSource>,
}

impl GameAudio {
    fn for_cue(&self, cue: Cue) -> &Handle<AudioSource> {
        match cue {
            Cue::PlayerHurt => &self.player_hurt,
            Cue::PlayerDeath => &self.player_death,
            Cue::EnemyHit => &self.enemy_hit,
            Cue::EnemyDeath => &self.enemy_death,
            Cue::ItemPickup => &self.item_pickup,
            Cue::BossVolley => &self.boss_volley,
            Cue::SwordSlash => &self.sword_slash,
            Cue::SwordBeam => &self.sword_beam,
            Cue::Victory => &self.victory,
        }
    }
}

fn load_audio(mut commands: Commands, asset_server: Res<AssetServer>) {
    // Loading happens in the background; cues sent before a file is ready are dropped.
    commands.insert_resource(GameAudio {
        music: asset_server.load("sounds/overworld_theme.ogg"),
        player_hurt: asset_server.load("sounds/link_hurt.wav"),
        player_death: asset_server.load("sounds/link_die.wav"),
        enemy_hit: asset_server.load("sounds/enemy_hit.wav"),
        enemy_death: asset_server.load("sounds/enemy_die.wav"),
        item_pickup: asset_server.load("sounds/get_item.wav"),
        boss_volley: asset_server.load("sounds/boss_scream.wav"),
        sword_slash: asset_server.load("sounds/sword_slash.wav"),
        sword_beam: asset_server.load("sounds/sword_shoot.wav"),
        victory: asset_server.load("sounds/fanfare.wav"),
    });
}

fn play_cues(mut cues: EventReader<SoundCue>, audio: Res<Audio>, sounds: Res<GameAudio>) {
    for SoundCue(cue) in cues.read() {
        audio.play(sounds.for_cue(*cue).clone());
    }
}

fn start_music(music: Res<AudioChannel<Music>>, sounds: Option<Res<GameAudio>>) {
    let Some(sounds) = sounds else {
        return;
    };
    music.play(sounds.music.clone()).looped();
    debug!("Music started");
}

fn stop_music(music: Res<AudioChannel<Music>>) {
    music.stop();
    debug!("Music stopped");
}
