//! World module - geometry, rooms, area graphs and the data that builds them.

mod area;
mod builder;
pub mod data;
mod error;
mod geometry;
mod items;
mod plugin;
mod room;

pub use area::{Arrivals, AreaGraph, AreaKind, Location, Portal, PortalTrigger, Thresholds, World};
pub use builder::{build_world, LayoutTerrain, TerrainProvider};
pub use data::WorldDefinition;
pub use error::{DataLoadError, GraphError};
pub use geometry::{clamp, Aabb, Direction, Mobile, Obstacle};
pub use items::{BonusHeart, Item, ItemKind, Placement};
pub use plugin::WorldPlugin;
pub use room::{Doorway, Room};
