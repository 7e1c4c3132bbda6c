//! Audio module - sound effects and music driven by simulation cues.

mod plugin;

pub use plugin::{GameAudio, GameAudioPlugin, Music};
