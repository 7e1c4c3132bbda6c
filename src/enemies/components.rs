//! Enemy agents.

use rand::Rng;
use serde::Deserialize;

use super::data::EnemyDefinition;
use crate::combat::{Animation, Projectile, Vitals};
use crate::core::tuning::{ENEMY_HITBOX_INSET, ENEMY_SIZE, FIREBALL_SIZE};
use crate::world::{Aabb, Direction, Mobile};

/// The three enemy variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum EnemyKind {
    /// Wanders at random and hurts on contact.
    Patroller,
    /// Wanders, and lunges at a player standing in its line of sight.
    Charger,
    /// Wanders while a fireball sweeps clockwise around it. Its body is harmless.
    Turret,
}

impl EnemyKind {
    pub const ALL: [EnemyKind; 3] = [EnemyKind::Patroller, EnemyKind::Charger, EnemyKind::Turret];
}

/// Stable per-session identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EnemyId(pub u32);

/// Variant-specific state.
#[derive(Debug, Clone, PartialEq)]
pub enum Behaviour {
    Patroller,
    Charger { boost: i32 },
    Turret { fireball: Projectile },
}

#[derive(Debug, Clone)]
pub struct Enemy {
    pub id: EnemyId,
    pub x: i32,
    pub y: i32,
    pub(super) facing: Direction,
    pub(super) speed: i32,
    /// Last random roll; `0..4` maps to a walking direction.
    pub(super) roll: u32,
    pub(super) roll_range: u32,
    pub(super) animation: Animation,
    pub(super) vitals: Vitals,
    pub(super) behaviour: Behaviour,
}

impl Enemy {
    pub fn new(
        id: EnemyId,
        kind: EnemyKind,
        definition: &EnemyDefinition,
        (x, y): (i32, i32),
        rng: &mut impl Rng,
    ) -> Self {
        let behaviour = match kind {
            EnemyKind::Patroller => Behaviour::Patroller,
            EnemyKind::Charger => Behaviour::Charger {
                boost: definition.charge_boost,
            },
            EnemyKind::Turret => Behaviour::Turret {
                fireball: Projectile::cardinal(
                    x,
                    y,
                    definition.shot_speed,
                    FIREBALL_SIZE,
                    FIREBALL_SIZE,
                ),
            },
        };
        let roll_range = definition.roll_range.max(1);
        Self {
            id,
            x,
            y,
            facing: Direction::Right,
            speed: definition.speed,
            roll: rng.gen_range(0..roll_range),
            roll_range,
            animation: Animation::new(2, definition.retarget_delay),
            vitals: Vitals::new(definition.health),
            behaviour,
        }
    }

    pub fn kind(&self) -> EnemyKind {
        match self.behaviour {
            Behaviour::Patroller => EnemyKind::Patroller,
            Behaviour::Charger { .. } => EnemyKind::Charger,
            Behaviour::Turret { .. } => EnemyKind::Turret,
        }
    }

    pub fn sprite(&self) -> Aabb {
        Aabb::new(self.x, self.y, ENEMY_SIZE, ENEMY_SIZE)
    }

    pub fn vitals(&self) -> &Vitals {
        &self.vitals
    }

    pub fn vitals_mut(&mut self) -> &mut Vitals {
        &mut self.vitals
    }

    pub fn is_dead(&self) -> bool {
        self.vitals.is_dead()
    }

    pub fn frame(&self) -> usize {
        self.animation.frame()
    }

    pub fn fireball(&self) -> Option<&Projectile> {
        match &self.behaviour {
            Behaviour::Turret { fireball } => Some(fireball),
            _ => None,
        }
    }

    pub fn fireball_mut(&mut self) -> Option<&mut Projectile> {
        match &mut self.behaviour {
            Behaviour::Turret { fireball } => Some(fireball),
            _ => None,
        }
    }
}

impl Mobile for Enemy {
    fn hitbox(&self) -> Aabb {
        self.sprite().inset(ENEMY_HITBOX_INSET)
    }

    fn facing(&self) -> Direction {
        self.facing
    }

    fn step(&self) -> (i32, i32) {
        (self.speed, self.speed)
    }

    fn shift(&mut self, dx: i32, dy: i32) {
        self.x += dx;
        self.y += dy;
    }
}
