//! Combat module - vitals, projectiles, and hit resolution.

mod components;
mod projectile;
mod systems;

pub use components::*;
pub use projectile::{Motion, Projectile};
pub use systems::{resolve_hits, Weapons};
