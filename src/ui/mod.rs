//! UI module - title and ending screens plus the hearts HUD.

mod hud;
mod plugin;

pub use plugin::UiPlugin;
