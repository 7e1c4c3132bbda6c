//! Rendering module - flat debug-style drawing of the session.

mod plugin;

pub use plugin::{world_to_screen, Palette, RenderingPlugin};
