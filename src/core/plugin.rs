//! Core plugin that sets up game states, events, and the fixed-step simulation.

use bevy::prelude::*;

use super::events::*;
use super::session::{Session, SessionRng, TickOutcome};
use super::states::*;
use super::tuning::Tuning;
use crate::player::PlayerInput;

/// Core plugin - must be added first as other plugins depend on it.
///
/// This plugin sets up:
/// - Game states (Loading, Intro, InGame, Won, GameOver)
/// - The [`SoundCue`] event
/// - Tuning, the session random source and the fixed tick rate
/// - The system that advances the [`Session`] once per fixed tick
pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        let tuning = Tuning::load();

        app
            // Initialize game states
            .init_state::<GameState>()

            // Register global events
            .add_event::<SoundCue>()

            // Simulation clock
            .insert_resource(Time::<Fixed>::from_seconds(tuning.tick_seconds))
            .insert_resource(tuning)
            .init_resource::<SessionRng>()

            .add_systems(
                FixedUpdate,
                advance_session.run_if(in_state(GameState::InGame).and(resource_exists::<Session>)),
            );
    }
}

/// Runs one simulation tick and forwards its cues.
fn advance_session(
    mut session: ResMut<Session>,
    mut input: ResMut<PlayerInput>,
    mut rng: ResMut<SessionRng>,
    mut next_state: ResMut<NextState<GameState>>,
    mut cues: EventWriter<SoundCue>,
    mut exit: EventWriter<AppExit>,
) {
    let buttons = input.take();
    let outcome = match session.tick(&buttons, &mut rng.0) {
        Ok(outcome) => outcome,
        Err(e) => {
            error!("World graph fault: {}", e);
            exit.send(AppExit::error());
            return;
        }
    };

    for cue in session.drain_cues() {
        cues.send(SoundCue(cue));
    }

    match outcome {
        TickOutcome::Playing => {}
        TickOutcome::Won => next_state.set(GameState::Won),
        TickOutcome::Lost => next_state.set(GameState::GameOver),
    }
}
