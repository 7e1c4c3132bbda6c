//! Enemies module - enemy variants, behaviour, data registry, and the boss.

mod ai;
mod boss;
mod components;
pub mod data;

pub use boss::{Boss, VOLLEY_SIZE};
pub use components::*;
pub use data::{EnemyDefinition, EnemyRegistry};
