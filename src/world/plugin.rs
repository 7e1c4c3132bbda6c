//! World plugin - data loading and session setup.

use bevy::prelude::*;

use crate::core::session::{Session, SessionRng};
use crate::core::tuning::Tuning;
use crate::core::GameState;
use crate::enemies::EnemyRegistry;

use super::builder::build_world;
use super::data::WorldDefinition;
use super::error::DataLoadError;

/// World plugin - reads the data files and builds the playthrough.
pub struct WorldPlugin;

impl Plugin for WorldPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_session);
    }
}

/// Build the session from disk, or shut down if the data is broken.
pub fn setup_session(
    mut commands: Commands,
    tuning: Res<Tuning>,
    mut rng: ResMut<SessionRng>,
    mut next_state: ResMut<NextState<GameState>>,
    mut exit: EventWriter<AppExit>,
) {
    match load_session(&tuning, &mut rng) {
        Ok(session) => {
            commands.insert_resource(session);
            next_state.set(GameState::Intro);
        }
        Err(e) => {
            error!("Could not set up the world: {}", e);
            exit.send(AppExit::error());
        }
    }
}

fn load_session(tuning: &Tuning, rng: &mut SessionRng) -> Result<Session, DataLoadError> {
    let registry = EnemyRegistry::load()?;
    let definition = WorldDefinition::load()?;
    let world = build_world(&definition, &registry, &mut rng.0)?;
    Ok(Session::new(world, tuning))
}
