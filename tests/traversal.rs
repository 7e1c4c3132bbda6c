//! Room graph traversal against the shipped world data.

use rand::rngs::StdRng;
use rand::SeedableRng;
use tile_quest::core::tuning::PlayerTuning;
use tile_quest::enemies::EnemyRegistry;
use tile_quest::player::Player;
use tile_quest::world::{
    build_world, AreaKind, DataLoadError, Direction, GraphError, Location, World, WorldDefinition,
};

const WORLD: &str = include_str!("../assets/data/world.ron");
const ENEMIES: &str = include_str!("../assets/data/enemies.ron");

fn world() -> World {
    let mut rng = StdRng::seed_from_u64(11);
    let definition = WorldDefinition::from_ron(WORLD, "world.ron").unwrap();
    let registry = EnemyRegistry::from_ron(ENEMIES, "enemies.ron").unwrap();
    build_world(&definition, &registry, &mut rng).unwrap()
}

fn at(area: AreaKind, slot: usize) -> Location {
    Location { area, slot }
}

fn player(x: i32, y: i32) -> Player {
    Player::new(x, y, PlayerTuning::default())
}

#[test]
fn shipped_world_builds() {
    let world = world();
    assert_eq!(world.overworld.stride, 3);
    assert_eq!(world.overworld.slots.len(), 9);
    assert!(world.overworld.slots[0].is_none());
    assert_eq!(world.dungeon.stride, 4);
    assert_eq!(world.dungeon.slots.len(), 24);
    assert_eq!(world.dungeon.room(21).unwrap().name, "start");
}

#[test]
fn leaving_through_the_top_enters_the_room_above() {
    let world = world();
    let mut link = player(600, 10);

    let next = world.traverse(at(AreaKind::Dungeon, 21), &mut link).unwrap();
    assert_eq!(next, at(AreaKind::Dungeon, 17));
    assert_eq!((link.x, link.y), (600, 550));
}

#[test]
fn right_then_left_returns_to_the_same_room() {
    let world = world();
    let mut link = player(725, 400);

    let east = world.traverse(at(AreaKind::Overworld, 4), &mut link).unwrap();
    assert_eq!(east, at(AreaKind::Overworld, 5));
    assert_eq!(link.x, 50);

    link.x = -1;
    let back = world.traverse(east, &mut link).unwrap();
    assert_eq!(back, at(AreaKind::Overworld, 4));
    assert_eq!((link.x, link.y), (650, 400));
}

#[test]
fn staying_inside_the_thresholds_keeps_the_room() {
    let world = world();
    let mut link = player(300, 300);
    let here = at(AreaKind::Dungeon, 10);
    assert_eq!(world.traverse(here, &mut link), Ok(here));
    assert_eq!((link.x, link.y), (300, 300));
}

#[test]
fn cave_mouth_leads_into_the_dungeon_and_back() {
    let world = world();
    let mut link = player(192, 200);

    let inside = world.traverse(at(AreaKind::Overworld, 7), &mut link).unwrap();
    assert_eq!(inside, at(AreaKind::Dungeon, 21));
    assert_eq!((link.x, link.y), (360, 534));

    link.y = 600;
    let outside = world.traverse(inside, &mut link).unwrap();
    assert_eq!(outside, at(AreaKind::Overworld, 7));
    assert_eq!((link.x, link.y), (192, 250));

    // Arriving below the mouth does not bounce straight back in.
    assert_eq!(world.traverse(outside, &mut link), Ok(outside));
}

#[test]
fn walking_off_the_grid_is_a_fault() {
    let world = world();
    let mut link = player(10, 400);
    assert_eq!(
        world.traverse(at(AreaKind::Dungeon, 20), &mut link),
        Err(GraphError::OffGrid {
            area: AreaKind::Dungeon,
            slot: 20,
            direction: Direction::Left,
        })
    );
}

#[test]
fn walking_into_an_empty_slot_is_a_fault() {
    let world = world();
    let mut link = player(700, 400);
    assert_eq!(
        world.traverse(at(AreaKind::Dungeon, 22), &mut link),
        Err(GraphError::EmptySlot {
            area: AreaKind::Dungeon,
            slot: 23,
        })
    );
}

#[test]
fn open_layout_edge_onto_an_empty_slot_is_rejected() {
    let mut definition = WorldDefinition::from_ron(WORLD, "world.ron").unwrap();
    // Slot 3 sits below the empty top-left corner; give it an open top edge.
    if let Some(room) = definition.overworld.slots[3].as_mut() {
        room.layout = "overworld_4".into();
    }
    let registry = EnemyRegistry::from_ron(ENEMIES, "enemies.ron").unwrap();
    let result = build_world(&definition, &registry, &mut StdRng::seed_from_u64(1));
    assert!(matches!(
        result,
        Err(DataLoadError::DanglingDoor {
            area: AreaKind::Overworld,
            slot: 3,
            direction: Direction::Up,
        })
    ));
}

