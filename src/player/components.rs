//! The player agent and its per-tick input.

use bevy::prelude::*;

use crate::combat::{Animation, Projectile, Vitals, Weapons};
use crate::core::tuning::{
    PlayerTuning, BEAM_LENGTH, BEAM_THICKNESS, PLAYER_HITBOX_INSET, PLAYER_SIZE, SWORD_REACH,
};
use crate::core::Cue;
use crate::world::{Aabb, Direction, Mobile};

/// Logical buttons for one tick.
///
/// Directions are held state; `attack` is true only on the tick the attack
/// button went down.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ButtonState {
    pub up: bool,
    pub right: bool,
    pub down: bool,
    pub left: bool,
    pub attack: bool,
}

impl ButtonState {
    /// The direction to walk in, if any. Up wins over Right, Right over Down, Down over Left.
    pub fn heading(&self) -> Option<Direction> {
        [
            (self.up, Direction::Up),
            (self.right, Direction::Right),
            (self.down, Direction::Down),
            (self.left, Direction::Left),
        ]
        .into_iter()
        .find_map(|(held, direction)| held.then_some(direction))
    }
}

/// Input sampled every frame and consumed once per fixed tick.
///
/// Attack presses are latched so a press that lands between two ticks is
/// still seen by exactly one of them.
#[derive(Resource, Default, Debug)]
pub struct PlayerInput {
    held: ButtonState,
    attack_latched: bool,
}

impl PlayerInput {
    pub fn hold(&mut self, up: bool, right: bool, down: bool, left: bool) {
        self.held.up = up;
        self.held.right = right;
        self.held.down = down;
        self.held.left = left;
    }

    pub fn press_attack(&mut self) {
        self.attack_latched = true;
    }

    /// Buttons for the next tick. Clears the attack latch.
    pub fn take(&mut self) -> ButtonState {
        ButtonState {
            attack: std::mem::take(&mut self.attack_latched),
            ..self.held
        }
    }
}

/// The user-driven agent.
#[derive(Debug, Clone)]
pub struct Player {
    pub x: i32,
    pub y: i32,
    pub(super) facing: Direction,
    pub(super) vitals: Vitals,
    pub(super) walk: Animation,
    /// Ticks left in the current sword swing.
    pub(super) swing_left: u32,
    pub(super) beam: Projectile,
    pub(super) can_shoot: bool,
    pub(super) tuning: PlayerTuning,
}

impl Player {
    pub fn new(x: i32, y: i32, tuning: PlayerTuning) -> Self {
        Self {
            x,
            y,
            facing: Direction::Right,
            vitals: Vitals::new(tuning.health),
            walk: Animation::new(2, tuning.walk_delay),
            swing_left: 0,
            beam: Projectile::cardinal(
                x + PLAYER_SIZE / 2,
                0,
                tuning.beam_speed,
                BEAM_LENGTH,
                BEAM_THICKNESS,
            ),
            can_shoot: false,
            tuning,
        }
    }

    /// Full sprite rectangle.
    pub fn sprite(&self) -> Aabb {
        Aabb::new(self.x, self.y, PLAYER_SIZE, PLAYER_SIZE)
    }

    pub fn vitals(&self) -> &Vitals {
        &self.vitals
    }

    pub fn vitals_mut(&mut self) -> &mut Vitals {
        &mut self.vitals
    }

    pub fn health(&self) -> u32 {
        self.vitals.health()
    }

    pub fn is_dead(&self) -> bool {
        self.vitals.is_dead()
    }

    pub fn walk_frame(&self) -> usize {
        self.walk.frame()
    }

    pub fn is_swinging(&self) -> bool {
        self.swing_left > 0
    }

    /// Sword rectangle while a swing is live.
    pub fn swing(&self) -> Option<Aabb> {
        if !self.is_swinging() {
            return None;
        }
        let (x, y) = (self.x, self.y);
        Some(match self.facing {
            Direction::Up => Aabb::new(x, y - SWORD_REACH, PLAYER_SIZE, SWORD_REACH),
            Direction::Right => Aabb::new(x + PLAYER_SIZE, y, SWORD_REACH, PLAYER_SIZE),
            Direction::Down => Aabb::new(x, y + PLAYER_SIZE, PLAYER_SIZE, SWORD_REACH),
            Direction::Left => Aabb::new(x - SWORD_REACH, y, SWORD_REACH, PLAYER_SIZE),
        })
    }

    pub fn can_shoot(&self) -> bool {
        self.can_shoot
    }

    pub fn unlock_beam(&mut self) {
        self.can_shoot = true;
    }

    /// The sword beam, once unlocked.
    pub fn beam(&self) -> Option<&Projectile> {
        self.can_shoot.then_some(&self.beam)
    }

    /// Sword and beam as they stand this tick.
    pub fn weapons(&mut self) -> Weapons<'_> {
        Weapons {
            swing: self.swing(),
            beam: self.can_shoot.then_some(&mut self.beam),
        }
    }

    /// Contact damage from an enemy or boss body.
    pub fn take_body_hit(&mut self, body: &Aabb, cues: &mut Vec<Cue>) -> bool {
        if !body.intersects(&self.hitbox()) {
            return false;
        }
        self.wound(cues)
    }

    /// Damage from a hostile projectile. A shot that lands is sent out.
    pub fn take_shot(&mut self, shot: &mut Projectile, cues: &mut Vec<Cue>) -> bool {
        if !self.vitals.is_vulnerable() || !shot.hits(&self.hitbox()) {
            return false;
        }
        shot.send_out();
        self.wound(cues)
    }

    fn wound(&mut self, cues: &mut Vec<Cue>) -> bool {
        if !self.vitals.strike(self.tuning.iframes).landed() {
            return false;
        }
        let (ux, uy) = self.facing.opposite().unit();
        self.x += ux * self.tuning.knockback;
        self.y += uy * self.tuning.knockback;
        cues.push(Cue::PlayerHurt);
        true
    }
}

impl Mobile for Player {
    fn hitbox(&self) -> Aabb {
        self.sprite().inset(PLAYER_HITBOX_INSET)
    }

    fn facing(&self) -> Direction {
        self.facing
    }

    fn step(&self) -> (i32, i32) {
        (self.tuning.speed, self.tuning.speed)
    }

    fn shift(&mut self, dx: i32, dy: i32) {
        self.x += dx;
        self.y += dy;
    }
}
