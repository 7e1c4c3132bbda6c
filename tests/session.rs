//! Whole-session scenarios driven through `Session::tick`.

use rand::rngs::StdRng;
use rand::SeedableRng;
use tile_quest::core::tuning::{BossTuning, Tuning};
use tile_quest::core::{Cue, Session, TickOutcome};
use tile_quest::enemies::EnemyRegistry;
use tile_quest::player::ButtonState;
use tile_quest::world::{build_world, AreaKind, Location, WorldDefinition};

const WORLD: &str = include_str!("../assets/data/world.ron");
const ENEMIES: &str = include_str!("../assets/data/enemies.ron");

fn session_with(tuning: Tuning, seed: u64) -> (Session, StdRng) {
    let mut rng = StdRng::seed_from_u64(seed);
    let definition = WorldDefinition::from_ron(WORLD, "world.ron").unwrap();
    let registry = EnemyRegistry::from_ron(ENEMIES, "enemies.ron").unwrap();
    let world = build_world(&definition, &registry, &mut rng).unwrap();
    (Session::new(world, &tuning), rng)
}

fn session(seed: u64) -> (Session, StdRng) {
    session_with(Tuning::default(), seed)
}

fn dungeon(slot: usize) -> Location {
    Location {
        area: AreaKind::Dungeon,
        slot,
    }
}

fn idle() -> ButtonState {
    ButtonState::default()
}

fn attack() -> ButtonState {
    ButtonState {
        attack: true,
        ..Default::default()
    }
}

#[test]
fn death_is_reported_once() {
    let (mut session, mut rng) = session(21);
    for _ in 0..7 {
        session.player_mut().vitals_mut().strike(0);
    }
    assert!(session.player().is_dead());

    assert_eq!(session.tick(&idle(), &mut rng), Ok(TickOutcome::Lost));
    assert_eq!(session.drain_cues(), [Cue::PlayerDeath]);

    assert_eq!(session.tick(&idle(), &mut rng), Ok(TickOutcome::Lost));
    assert!(session.drain_cues().is_empty());
}

#[test]
fn sword_scroll_unlocks_the_beam_once() {
    let (mut session, mut rng) = session(5);
    session.warp(dungeon(4), (360, 380)).unwrap();
    assert!(session.sword_scroll_visible());

    session.tick(&idle(), &mut rng).unwrap();
    assert!(session.player().can_shoot());
    assert!(!session.sword_scroll_visible());
    assert_eq!(session.drain_cues(), [Cue::ItemPickup]);

    session.tick(&idle(), &mut rng).unwrap();
    assert!(session.drain_cues().is_empty());
}

#[test]
fn triforce_waits_for_the_boss() {
    let (mut session, mut rng) = session(8);
    session.warp(dungeon(7), (370, 408)).unwrap();
    assert!(session.triforce_visible());

    assert_eq!(session.tick(&idle(), &mut rng), Ok(TickOutcome::Playing));
    assert!(!session.drain_cues().contains(&Cue::Victory));
}

#[test]
fn slaying_the_boss_opens_the_way_to_victory() {
    let tuning = Tuning {
        boss: BossTuning {
            health: 1,
            ..Default::default()
        },
        ..Default::default()
    };
    let (mut session, mut rng) = session_with(tuning, 9);

    session.warp(dungeon(6), (520, 350)).unwrap();
    assert!(session.boss_present());
    session.tick(&attack(), &mut rng).unwrap();
    assert!(session.boss().is_dead());
    assert!(!session.boss_present());
    assert!(session.drain_cues().contains(&Cue::EnemyDeath));

    session.warp(dungeon(7), (370, 408)).unwrap();
    assert_eq!(session.tick(&idle(), &mut rng), Ok(TickOutcome::Won));
    assert!(session.drain_cues().contains(&Cue::Victory));

    // Terminal from here on.
    assert_eq!(session.tick(&attack(), &mut rng), Ok(TickOutcome::Won));
    assert!(session.drain_cues().is_empty());
}

#[test]
fn walking_right_moves_five_pixels_a_tick() {
    let (mut session, mut rng) = session(13);
    let walk = ButtonState {
        right: true,
        ..Default::default()
    };
    for _ in 0..4 {
        session.tick(&walk, &mut rng).unwrap();
    }
    assert_eq!((session.player().x, session.player().y), (160, 400));
}

#[test]
fn warping_into_an_empty_slot_is_refused() {
    let (mut session, _) = session(1);
    assert!(session.warp(dungeon(2), (300, 300)).is_err());
    assert_eq!(session.location(), session.world().start);
}

#[test]
fn walled_side_stops_the_player() {
    let (mut session, mut rng) = session(17);
    session.warp(dungeon(7), (630, 390)).unwrap();
    let walk = ButtonState {
        right: true,
        ..Default::default()
    };
    for _ in 0..10 {
        session.tick(&walk, &mut rng).unwrap();
    }
    assert_eq!(session.location(), dungeon(7));
    assert_eq!(session.player().x, 640);
}

#[test]
fn clamp_uses_the_room_just_entered() {
    // Room 0 walls its left side at this height, room 1 has a door there.
    let (mut session, mut rng) = session(19);
    session.warp(dungeon(0), (630, 390)).unwrap();
    let walk = ButtonState {
        right: true,
        ..Default::default()
    };
    for _ in 0..20 {
        session.tick(&walk, &mut rng).unwrap();
        if session.location() != dungeon(0) {
            break;
        }
    }
    assert_eq!(session.location(), dungeon(1));
    assert_eq!((session.player().x, session.player().y), (50, 390));
}

