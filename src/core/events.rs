//! Global events used for cross-system communication.
//!
//! The simulation never talks to audio directly. It records [`Cue`]s while it
//! ticks and the driver forwards them as [`SoundCue`] events, which the audio
//! plugin turns into fire-and-forget playback.

use bevy::prelude::*;

/// Something audible happened during a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cue {
    /// The player took a hit.
    PlayerHurt,
    PlayerDeath,
    /// An enemy or the boss took a hit and survived.
    EnemyHit,
    /// An enemy or the boss ran out of health.
    EnemyDeath,
    /// Heart or sword scroll collected.
    ItemPickup,
    /// The boss replaced its volley.
    BossVolley,
    SwordSlash,
    SwordBeam,
    /// Triforce collected.
    Victory,
}

/// Sent once per cue recorded during a simulation tick.
#[derive(Event, Debug, Clone, Copy)]
pub struct SoundCue(pub Cue);
