//! One playthrough: the world, the player, the boss and the per-tick rules
//! that tie them together.

use bevy::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::events::Cue;
use super::tuning::Tuning;
use crate::enemies::Boss;
use crate::player::{ButtonState, Player};
use crate::world::{clamp, GraphError, Location, Room, World};

/// Where the playthrough stands after a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TickOutcome {
    #[default]
    Playing,
    Won,
    Lost,
}

impl TickOutcome {
    pub fn is_terminal(self) -> bool {
        self != TickOutcome::Playing
    }
}

/// Random source for the running session.
#[derive(Resource)]
pub struct SessionRng(pub StdRng);

impl Default for SessionRng {
    fn default() -> Self {
        Self(StdRng::from_entropy())
    }
}

#[derive(Resource, Debug, Clone)]
pub struct Session {
    world: World,
    player: Player,
    location: Location,
    boss: Boss,
    outcome: TickOutcome,
    enemy_iframes: u32,
    cues: Vec<Cue>,
}

impl Session {
    pub fn new(world: World, tuning: &Tuning) -> Self {
        let (x, y) = world.start_position;
        Self {
            player: Player::new(x, y, tuning.player.clone()),
            location: world.start,
            boss: Boss::new(tuning.boss.clone(), (x, y)),
            outcome: TickOutcome::Playing,
            enemy_iframes: tuning.enemy_iframes,
            cues: Vec::new(),
            world,
        }
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }

    pub fn location(&self) -> Location {
        self.location
    }

    pub fn boss(&self) -> &Boss {
        &self.boss
    }

    pub fn outcome(&self) -> TickOutcome {
        self.outcome
    }

    pub fn room(&self) -> Result<&Room, GraphError> {
        self.world.room(self.location)
    }

    /// Whether the boss is drawn and active in the current room.
    pub fn boss_present(&self) -> bool {
        self.location == self.world.boss_room && !self.boss.is_dead()
    }

    pub fn sword_scroll_visible(&self) -> bool {
        self.location == self.world.sword_scroll.location && !self.player.can_shoot()
    }

    pub fn triforce_visible(&self) -> bool {
        self.location == self.world.triforce.location
    }

    /// Puts the player straight into a room, skipping traversal rules.
    pub fn warp(&mut self, location: Location, (x, y): (i32, i32)) -> Result<(), GraphError> {
        self.world.room(location)?;
        self.location = location;
        (self.player.x, self.player.y) = (x, y);
        debug!("Warped to {} slot {}", location.area, location.slot);
        Ok(())
    }

    /// Cues recorded since the last drain, oldest first.
    pub fn drain_cues(&mut self) -> Vec<Cue> {
        std::mem::take(&mut self.cues)
    }

    /// Advances the simulation by one tick.
    ///
    /// Once the outcome is terminal, further calls change nothing.
    pub fn tick(&mut self, buttons: &ButtonState, rng: &mut impl Rng) -> Result<TickOutcome, GraphError> {
        if self.outcome.is_terminal() {
            return Ok(self.outcome);
        }

        let Self {
            world,
            player,
            location,
            boss,
            outcome,
            enemy_iframes,
            cues,
        } = self;

        player.advance(buttons, cues);

        let next = world.traverse(*location, player)?;
        if next != *location {
            debug!("Entered {} slot {}", next.area, next.slot);
            *location = next;
        }

        let room = world.room_mut(*location)?;
        clamp(player, room.player_obstacles());
        room.move_enemies(player, rng, cues);
        room.kill_enemies(player, *enemy_iframes, cues);
        room.update_heart(player, cues);

        if *location == world.boss_room && !boss.is_dead() {
            boss.update(player, cues);
        }

        let scroll = world.sword_scroll;
        if *location == scroll.location && !player.can_shoot() && scroll.item.touches(player) {
            player.unlock_beam();
            cues.push(Cue::ItemPickup);
            info!("Picked up the sword scroll");
        }

        let triforce = world.triforce;
        if *location == triforce.location && boss.is_dead() && triforce.item.touches(player) {
            *outcome = TickOutcome::Won;
            cues.push(Cue::Victory);
            info!("Triforce collected");
        }

        player.settle();

        if *outcome == TickOutcome::Playing && player.is_dead() {
            *outcome = TickOutcome::Lost;
            cues.push(Cue::PlayerDeath);
            info!("Player died in {} slot {}", location.area, location.slot);
        }
        Ok(*outcome)
    }
}
