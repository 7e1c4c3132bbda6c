//! The dungeon boss: a horizontal patroller that fires a three-shot spread.
//!
//! The boss alternates between an open mouth (a volley is on its way) and a
//! closed mouth (the volley has flown past the left edge). Once any shot
//! travels far enough off-screen the whole volley is replaced at once, aimed
//! at wherever the player is standing at that moment.

use bevy::prelude::*;

use crate::combat::{resolve_hits, Animation, Projectile, Strike, Vitals};
use crate::core::tuning::{BossTuning, BOSS_HEIGHT, BOSS_HITBOX_TRIM, BOSS_WIDTH, FIREBALL_SIZE};
use crate::core::Cue;
use crate::player::Player;
use crate::world::Aabb;

/// Number of shots in one volley.
pub const VOLLEY_SIZE: usize = 3;

#[derive(Debug, Clone)]
pub struct Boss {
    pub x: i32,
    pub y: i32,
    dx: i32,
    vitals: Vitals,
    volley: [Projectile; VOLLEY_SIZE],
    attacking: bool,
    animation: Animation,
    tuning: BossTuning,
}

impl Boss {
    /// A boss at its start position, with a first volley aimed at `player`.
    pub fn new(tuning: BossTuning, player: (i32, i32)) -> Self {
        let (x, y) = tuning.start;
        Self {
            x,
            y,
            dx: tuning.patrol_speed,
            vitals: Vitals::new(tuning.health),
            volley: volley((x, y), player, &tuning),
            attacking: true,
            animation: Animation::new(2, tuning.animation_delay),
            tuning,
        }
    }

    pub fn sprite(&self) -> Aabb {
        Aabb::new(self.x, self.y, BOSS_WIDTH, BOSS_HEIGHT)
    }

    /// The body band that can hit and be hit.
    pub fn hitbox(&self) -> Aabb {
        Aabb::new(
            self.x,
            self.y + BOSS_HITBOX_TRIM,
            BOSS_WIDTH,
            BOSS_HEIGHT - 2 * BOSS_HITBOX_TRIM,
        )
    }

    pub fn vitals(&self) -> &Vitals {
        &self.vitals
    }

    pub fn is_dead(&self) -> bool {
        self.vitals.is_dead()
    }

    /// Mouth open: a volley is incoming.
    pub fn is_attacking(&self) -> bool {
        self.attacking
    }

    pub fn volley(&self) -> &[Projectile; VOLLEY_SIZE] {
        &self.volley
    }

    pub fn frame(&self) -> usize {
        self.animation.frame()
    }

    /// One tick of patrol, volley, damage intake and contact damage.
    pub fn update(&mut self, player: &mut Player, cues: &mut Vec<Cue>) {
        self.patrol();
        self.fly_volley(player, cues);
        self.reset_volley((player.x, player.y), cues);

        let mut weapons = player.weapons();
        match resolve_hits(&self.hitbox(), &mut self.vitals, self.tuning.iframes, &mut weapons) {
            Strike::Killed => {
                info!("Boss defeated");
                cues.push(Cue::EnemyDeath);
            }
            Strike::Wounded => cues.push(Cue::EnemyHit),
            Strike::Ignored => {}
        }
        self.vitals.settle();

        if !self.is_dead() {
            player.take_body_hit(&self.hitbox(), cues);
        }
        self.animation.tick();
    }

    fn patrol(&mut self) {
        self.x -= self.dx;
        if self.x < self.tuning.patrol_min || self.x > self.tuning.patrol_max {
            self.dx = -self.dx;
        }
    }

    fn fly_volley(&mut self, player: &mut Player, cues: &mut Vec<Cue>) {
        for shot in &mut self.volley {
            shot.advance((self.x, self.y));
            player.take_shot(shot, cues);
            if shot.x < self.tuning.mouth_close_x {
                self.attacking = false;
            }
            if shot.x < self.tuning.reset_x || shot.y > self.tuning.reset_y {
                shot.recall();
                self.attacking = true;
            }
        }
    }

    fn reset_volley(&mut self, player: (i32, i32), cues: &mut Vec<Cue>) {
        if !self.volley.iter().any(Projectile::is_recalled) {
            return;
        }
        self.volley = volley((self.x, self.y), player, &self.tuning);
        self.attacking = true;
        debug!("Boss volley reset at x={}", self.x);
        cues.push(Cue::BossVolley);
    }
}

/// Three shots aimed at `target`, fanned out by the spread angle.
fn volley(origin: (i32, i32), target: (i32, i32), tuning: &BossTuning) -> [Projectile; VOLLEY_SIZE] {
    let spreads = [tuning.spread_degrees, 0.0, -tuning.spread_degrees];
    spreads.map(|spread| Projectile::aimed(origin, target, tuning.shot_speed, spread, FIREBALL_SIZE))
}
