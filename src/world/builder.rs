//! World construction from data definitions.

use std::collections::HashMap;

use bevy::prelude::*;
use rand::Rng;

use super::area::{AreaGraph, AreaKind, Location, PortalTrigger, World};
use super::data::{tile_blocks, AreaDef, PlacementDef, RoomDef, WorldDefinition};
use super::error::DataLoadError;
use super::geometry::{Aabb, Direction, Obstacle};
use super::items::{BonusHeart, Item, ItemKind, Placement};
use super::room::{Doorway, Room};
use crate::core::tuning::TILE_SIZE;
use crate::enemies::{Enemy, EnemyId, EnemyRegistry};

/// Supplies the solid terrain for a named layout.
pub trait TerrainProvider {
    fn obstacles(&self, room: &str, layout: &str) -> Result<Vec<Obstacle>, DataLoadError>;
}

/// Terrain read from character grids, one obstacle per solid tile.
pub struct LayoutTerrain<'a> {
    layouts: &'a HashMap<String, Vec<String>>,
    origin: (i32, i32),
    size: (usize, usize),
    inset: i32,
}

impl<'a> LayoutTerrain<'a> {
    pub fn new(layouts: &'a HashMap<String, Vec<String>>, area: &AreaDef) -> Self {
        Self {
            layouts,
            origin: area.terrain_origin,
            size: area.layout_size,
            inset: area.obstacle_inset,
        }
    }
}

impl TerrainProvider for LayoutTerrain<'_> {
    fn obstacles(&self, room: &str, layout: &str) -> Result<Vec<Obstacle>, DataLoadError> {
        let rows = self
            .layouts
            .get(layout)
            .ok_or_else(|| DataLoadError::UnknownLayout {
                room: room.to_string(),
                layout: layout.to_string(),
            })?;

        let (width, height) = self.size;
        let actual_width = rows.iter().map(|row| row.chars().count()).max().unwrap_or(0);
        let ragged = rows.iter().any(|row| row.chars().count() != width);
        if rows.len() != height || ragged {
            return Err(DataLoadError::GridMismatch {
                layout: layout.to_string(),
                expected_width: width,
                expected_height: height,
                actual_width,
                actual_height: rows.len(),
            });
        }

        let mut obstacles = Vec::new();
        for (y, row) in rows.iter().enumerate() {
            for (x, character) in row.chars().enumerate() {
                let solid = tile_blocks(character).ok_or_else(|| DataLoadError::UnknownTile {
                    layout: layout.to_string(),
                    character,
                    x,
                    y,
                })?;
                if solid {
                    let tile = Aabb::new(
                        self.origin.0 + x as i32 * TILE_SIZE,
                        self.origin.1 + y as i32 * TILE_SIZE,
                        TILE_SIZE,
                        TILE_SIZE,
                    );
                    obstacles.push(Obstacle::new(tile.inset(self.inset)));
                }
            }
        }
        Ok(obstacles)
    }
}

/// Hands out enemy ids across the whole world.
#[derive(Default)]
struct IdSource(u32);

impl IdSource {
    fn next(&mut self) -> EnemyId {
        self.0 += 1;
        EnemyId(self.0)
    }
}

/// Build a world from its definition, validating the room graph on the way.
pub fn build_world(
    definition: &WorldDefinition,
    registry: &EnemyRegistry,
    rng: &mut impl Rng,
) -> Result<World, DataLoadError> {
    let mut ids = IdSource::default();
    let heart = Item::new(ItemKind::Heart, definition.heart);

    let overworld = build_area(
        &definition.overworld,
        &LayoutTerrain::new(&definition.layouts, &definition.overworld),
        registry,
        heart,
        &mut ids,
        rng,
    )?;
    let dungeon = build_area(
        &definition.dungeon,
        &LayoutTerrain::new(&definition.layouts, &definition.dungeon),
        registry,
        heart,
        &mut ids,
        rng,
    )?;

    let world = World {
        overworld,
        dungeon,
        portals: definition.portals.clone(),
        start: definition.start,
        start_position: definition.start_position,
        boss_room: definition.boss_room,
        sword_scroll: placement(&definition.sword_scroll, ItemKind::SwordScroll),
        triforce: placement(&definition.triforce, ItemKind::Triforce),
    };

    check_occupied(&world, "start", world.start)?;
    check_occupied(&world, "boss", world.boss_room)?;
    check_occupied(&world, "sword scroll", world.sword_scroll.location)?;
    check_occupied(&world, "triforce", world.triforce.location)?;
    for portal in &world.portals {
        check_occupied(&world, "portal entrance", portal.from)?;
        check_occupied(&world, "portal exit", portal.to)?;
    }
    check_openings(&world, &definition.overworld, &definition.layouts)?;
    check_openings(&world, &definition.dungeon, &definition.layouts)?;

    info!(
        "Built world: {} overworld rooms, {} dungeon rooms, {} enemies",
        world.overworld.slots.iter().flatten().count(),
        world.dungeon.slots.iter().flatten().count(),
        ids.0
    );
    Ok(world)
}

fn placement(definition: &PlacementDef, kind: ItemKind) -> Placement {
    Placement {
        location: definition.location,
        item: Item::new(kind, definition.bounds),
    }
}

fn build_area(
    area: &AreaDef,
    terrain: &impl TerrainProvider,
    registry: &EnemyRegistry,
    heart: Item,
    ids: &mut IdSource,
    rng: &mut impl Rng,
) -> Result<AreaGraph, DataLoadError> {
    if area.stride == 0 || area.slots.len() % area.stride != 0 {
        return Err(DataLoadError::BadGridShape {
            area: area.kind,
            slots: area.slots.len(),
            stride: area.stride,
        });
    }

    let slots = area
        .slots
        .iter()
        .enumerate()
        .map(|(slot, room)| {
            room.as_ref()
                .map(|room| build_room(area, slot, room, terrain, registry, heart, ids, rng))
                .transpose()
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(AreaGraph {
        kind: area.kind,
        stride: area.stride,
        slots,
        thresholds: area.thresholds,
        arrivals: area.arrivals,
    })
}

#[allow(clippy::too_many_arguments)]
fn build_room(
    area: &AreaDef,
    slot: usize,
    room: &RoomDef,
    terrain: &impl TerrainProvider,
    registry: &EnemyRegistry,
    heart: Item,
    ids: &mut IdSource,
    rng: &mut impl Rng,
) -> Result<Room, DataLoadError> {
    let mut enemies = Vec::new();
    if let Some(squad) = room.squad {
        if squad.count > area.spawn_points.len() {
            return Err(DataLoadError::SpawnTableExhausted {
                room: room.name.clone(),
                requested: squad.count,
                available: area.spawn_points.len(),
            });
        }
        let definition = registry.get(squad.kind)?;
        for &point in &area.spawn_points[..squad.count] {
            enemies.push(Enemy::new(ids.next(), squad.kind, definition, point, rng));
        }
    }

    let mut player_borders = Vec::new();
    if let Some(borders) = &area.player_borders {
        player_borders.extend(borders.frame.iter().copied().map(Obstacle::new));
        if let Some(doors) = room.doors {
            let sides = [
                (doors.up, borders.wall_up),
                (doors.right, borders.wall_right),
                (doors.down, borders.wall_down),
                (doors.left, borders.wall_left),
            ];
            for (doorway, fill) in sides {
                if doorway == Doorway::Wall {
                    player_borders.push(Obstacle::new(fill));
                }
            }
        }
    }

    let heart = (area.bonus_hearts && rng.gen_bool(0.5)).then_some(BonusHeart {
        item: heart,
        collected: false,
    });

    debug!(
        "Built {} slot {} '{}' with {} enemies",
        area.kind,
        slot,
        room.name,
        enemies.len()
    );

    Ok(Room {
        name: room.name.clone(),
        slot,
        terrain: terrain.obstacles(&room.name, &room.layout)?,
        player_borders,
        enemy_borders: area.enemy_borders.iter().copied().map(Obstacle::new).collect(),
        enemies,
        heart,
    })
}

fn check_occupied(world: &World, what: &str, location: Location) -> Result<(), DataLoadError> {
    world
        .room(location)
        .map(|_| ())
        .map_err(|_| DataLoadError::EmptyPlacement {
            what: what.to_string(),
            area: location.area,
            slot: location.slot,
        })
}

/// Sides of a layout grid with at least one walkable border tile, in
/// Up, Right, Down, Left order.
fn layout_openings(rows: &[String]) -> [bool; 4] {
    let walkable = |c: char| tile_blocks(c) == Some(false);
    let column = |pick: fn(&str) -> Option<char>| rows.iter().filter_map(|row| pick(row)).any(walkable);
    [
        rows.first().is_some_and(|row| row.chars().any(walkable)),
        column(|row| row.chars().last()),
        rows.last().is_some_and(|row| row.chars().any(walkable)),
        column(|row| row.chars().next()),
    ]
}

/// Every door, and every open layout edge of a room without doors, must lead
/// to an occupied neighbour or an edge portal.
fn check_openings(
    world: &World,
    area: &AreaDef,
    layouts: &HashMap<String, Vec<String>>,
) -> Result<(), DataLoadError> {
    let graph = world.graph(area.kind);
    for (slot, room) in area.slots.iter().enumerate() {
        let Some(room) = room else {
            continue;
        };
        let openings = match room.doors {
            Some(doors) => [doors.up, doors.right, doors.down, doors.left].map(|d| d == Doorway::Door),
            None => layouts
                .get(&room.layout)
                .map_or([false; 4], |rows| layout_openings(rows)),
        };
        let from = Location {
            area: area.kind,
            slot,
        };
        for (direction, open) in Direction::ALL.into_iter().zip(openings) {
            if !open {
                continue;
            }
            let portal = world
                .portals
                .iter()
                .any(|p| p.from == from && p.trigger == PortalTrigger::Edge(direction));
            if !portal && graph.neighbor(slot, direction).is_err() {
                return Err(DataLoadError::DanglingDoor {
                    area: area.kind,
                    slot,
                    direction,
                });
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::area::{Arrivals, Thresholds};
    use crate::world::data::{DoorsDef, PlayerBordersDef, SquadDef};
    use crate::enemies::EnemyKind;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const ENEMIES: &str = include_str!("../../assets/data/enemies.ron");

    /// Every layout is a single solid tile.
    struct OneRock;

    impl TerrainProvider for OneRock {
        fn obstacles(&self, _room: &str, _layout: &str) -> Result<Vec<Obstacle>, DataLoadError> {
            Ok(vec![Obstacle::new(Aabb::new(0, 0, 48, 48))])
        }
    }

    fn registry() -> EnemyRegistry {
        EnemyRegistry::from_ron(ENEMIES, "enemies.ron").unwrap()
    }

    fn room(name: &str, squad: Option<SquadDef>, doors: Option<DoorsDef>) -> Option<RoomDef> {
        Some(RoomDef {
            name: name.into(),
            layout: "plain".into(),
            squad,
            doors,
        })
    }

    fn area(slots: Vec<Option<RoomDef>>) -> AreaDef {
        AreaDef {
            kind: AreaKind::Dungeon,
            stride: 2,
            thresholds: Thresholds {
                top: 200,
                right: 670,
                bottom: 580,
                left: 50,
            },
            arrivals: Arrivals {
                up: 550,
                right: 50,
                down: 250,
                left: 650,
            },
            terrain_origin: (96, 241),
            layout_size: (3, 2),
            obstacle_inset: 10,
            spawn_points: vec![(240, 342), (480, 288)],
            enemy_borders: vec![Aabb::new(68, 218, 616, 1)],
            player_borders: Some(PlayerBordersDef {
                frame: vec![Aabb::new(83, 218, 260, 1)],
                wall_up: Aabb::new(336, 218, 96, 1),
                wall_right: Aabb::new(687, 390, 1, 48),
                wall_down: Aabb::new(336, 602, 96, 1),
                wall_left: Aabb::new(83, 390, 1, 48),
            }),
            bonus_hearts: true,
            slots,
        }
    }

    fn doors(up: Doorway, right: Doorway, down: Doorway, left: Doorway) -> Option<DoorsDef> {
        Some(DoorsDef {
            up,
            right,
            down,
            left,
        })
    }

    #[test]
    fn layout_terrain_insets_solid_tiles() {
        let mut layouts = HashMap::new();
        layouts.insert("plain".to_string(), vec!["#..".to_string(), "..T".to_string()]);
        let terrain = LayoutTerrain::new(&layouts, &area(Vec::new()));

        let obstacles = terrain.obstacles("room", "plain").unwrap();
        assert_eq!(obstacles.len(), 2);
        assert_eq!(obstacles[0].bounds(), Aabb::new(106, 251, 28, 28));
        assert_eq!(obstacles[1].bounds(), Aabb::new(202, 299, 28, 28));
    }

    #[test]
    fn layout_terrain_rejects_bad_grids() {
        let mut layouts = HashMap::new();
        layouts.insert("short".to_string(), vec!["...".to_string()]);
        layouts.insert("odd".to_string(), vec!["..?".to_string(), "...".to_string()]);
        let terrain = LayoutTerrain::new(&layouts, &area(Vec::new()));

        assert!(matches!(
            terrain.obstacles("room", "short"),
            Err(DataLoadError::GridMismatch { actual_height: 1, .. })
        ));
        assert!(matches!(
            terrain.obstacles("room", "odd"),
            Err(DataLoadError::UnknownTile { character: '?', x: 2, y: 0, .. })
        ));
        assert!(matches!(
            terrain.obstacles("room", "missing"),
            Err(DataLoadError::UnknownLayout { .. })
        ));
    }

    #[test]
    fn rooms_get_spawns_walls_and_ids() {
        use Doorway::*;
        let squad = SquadDef {
            kind: EnemyKind::Charger,
            count: 2,
        };
        let def = area(vec![
            room("a", Some(squad), doors(Wall, Door, Wall, Wall)),
            room("b", None, doors(Wall, Wall, Wall, Door)),
        ]);
        let mut rng = StdRng::seed_from_u64(5);
        let mut ids = IdSource::default();
        let heart = Item::new(ItemKind::Heart, Aabb::new(370, 262, 21, 24));

        let graph = build_area(&def, &OneRock, &registry(), heart, &mut ids, &mut rng).unwrap();
        let a = graph.room(0).unwrap();
        assert_eq!(a.enemies.len(), 2);
        assert_eq!((a.enemies[0].x, a.enemies[0].y), (240, 342));
        assert_eq!(a.enemies[1].id, EnemyId(2));
        // frame plus three walled sides
        assert_eq!(a.player_borders.len(), 4);
        assert_eq!(a.terrain.len(), 1);
        assert_eq!(graph.room(1).unwrap().player_borders.len(), 4);
    }

    #[test]
    fn oversized_squad_is_rejected() {
        let squad = SquadDef {
            kind: EnemyKind::Patroller,
            count: 3,
        };
        let def = area(vec![room("crowded", Some(squad), None), None]);
        let mut rng = StdRng::seed_from_u64(1);
        let heart = Item::new(ItemKind::Heart, Aabb::default());

        let result = build_area(&def, &OneRock, &registry(), heart, &mut IdSource::default(), &mut rng);
        assert!(matches!(
            result,
            Err(DataLoadError::SpawnTableExhausted {
                requested: 3,
                available: 2,
                ..
            })
        ));
    }

    #[test]
    fn slot_count_must_fill_rows() {
        let def = area(vec![room("a", None, None), None, room("c", None, None)]);
        let mut rng = StdRng::seed_from_u64(1);
        let heart = Item::new(ItemKind::Heart, Aabb::default());

        let result = build_area(&def, &OneRock, &registry(), heart, &mut IdSource::default(), &mut rng);
        assert!(matches!(result, Err(DataLoadError::BadGridShape { slots: 3, .. })));
    }

    #[test]
    fn layout_openings_follow_walkable_border_tiles() {
        let rows: Vec<String> = ["T#..T", "....T", "T###T"].map(String::from).to_vec();
        assert_eq!(layout_openings(&rows), [true, false, false, true]);
    }
}
