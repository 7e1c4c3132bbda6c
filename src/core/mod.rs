//! Core game module - states, events, tuning and the simulation session.
//!
//! This module provides the foundation that all other game systems build upon.

mod events;
mod plugin;
pub mod session;
mod states;
pub mod tuning;

pub use events::*;
pub use plugin::CorePlugin;
pub use session::{Session, SessionRng, TickOutcome};
pub use states::*;
pub use tuning::Tuning;
