//! Player module - the player agent, its stepping rules, and input sampling.

mod components;
mod movement;
mod plugin;

pub use components::*;
pub use plugin::PlayerPlugin;
