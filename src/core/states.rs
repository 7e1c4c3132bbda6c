//! Game state definitions that control the overall flow of the game.
//!
//! The simulation only advances in `InGame`. Both `Won` and `GameOver` are
//! terminal: nothing transitions out of them.

use bevy::prelude::*;

/// Main game states.
///
/// - Start in `Loading` while world and enemy data are read and built
/// - Move to `Intro` once the session is ready
/// - Enter `InGame` on any key press
/// - `Won` after the triforce is collected, `GameOver` when the player dies
#[derive(States, Debug, Clone, Copy, Eq, PartialEq, Hash, Default)]
pub enum GameState {
    /// Initial state - loading data files and building the world
    #[default]
    Loading,
    /// Title screen
    Intro,
    /// Active gameplay
    InGame,
    /// Triforce collected
    Won,
    /// Player has died
    GameOver,
}
