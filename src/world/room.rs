//! Rooms: one grid cell of an area, with its obstacles, enemies and bonus heart.

use bevy::prelude::*;
use rand::Rng;

use super::geometry::{clamp, Mobile, Obstacle};
use super::items::BonusHeart;
use crate::combat::{resolve_hits, Strike};
use crate::core::Cue;
use crate::enemies::Enemy;
use crate::player::Player;

/// Which sides of a dungeon room have an opening.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Deserialize)]
pub enum Doorway {
    Door,
    Wall,
}

#[derive(Debug, Clone)]
pub struct Room {
    pub name: String,
    pub slot: usize,
    /// Solid layout tiles. Block everyone.
    pub terrain: Vec<Obstacle>,
    /// Interior walls with door gaps. Block the player only.
    pub player_borders: Vec<Obstacle>,
    /// Gap-free walls that keep enemies inside the room.
    pub enemy_borders: Vec<Obstacle>,
    pub enemies: Vec<Enemy>,
    pub heart: Option<BonusHeart>,
}

impl Room {
    pub fn player_obstacles(&self) -> impl Iterator<Item = &Obstacle> {
        self.terrain.iter().chain(&self.player_borders)
    }

    pub fn is_cleared(&self) -> bool {
        self.enemies.is_empty()
    }

    /// The heart, if it spawned, is still there, and the room is cleared.
    pub fn visible_heart(&self) -> Option<&BonusHeart> {
        self.heart
            .as_ref()
            .filter(|heart| !heart.collected && self.is_cleared())
    }

    /// Advances every enemy, clamps it, then lets it hurt the player.
    ///
    /// Turrets hurt only through their fireball; everything else hurts on contact.
    pub fn move_enemies(&mut self, player: &mut Player, rng: &mut impl Rng, cues: &mut Vec<Cue>) {
        let Self {
            terrain,
            enemy_borders,
            enemies,
            ..
        } = self;
        for enemy in enemies.iter_mut() {
            enemy.advance(&player.sprite(), rng);
            clamp(enemy, terrain.iter().chain(enemy_borders.iter()));
            match enemy.fireball_mut() {
                Some(fireball) => {
                    player.take_shot(fireball, cues);
                }
                None => {
                    player.take_body_hit(&enemy.hitbox(), cues);
                }
            }
        }
    }

    /// Applies the player's sword and beam to every enemy, then removes the dead.
    ///
    /// Each death clears the player's invincibility so the next fight starts fresh.
    pub fn kill_enemies(&mut self, player: &mut Player, window: u32, cues: &mut Vec<Cue>) {
        let mut weapons = player.weapons();
        for enemy in &mut self.enemies {
            let hitbox = enemy.hitbox();
            match resolve_hits(&hitbox, enemy.vitals_mut(), window, &mut weapons) {
                Strike::Wounded => cues.push(Cue::EnemyHit),
                Strike::Killed | Strike::Ignored => {}
            }
            enemy.vitals_mut().settle();
        }

        let before = self.enemies.len();
        self.enemies.retain(|enemy| !enemy.is_dead());
        let slain = before - self.enemies.len();
        if slain > 0 {
            debug!("{} enemies slain in {}", slain, self.name);
            cues.extend(std::iter::repeat(Cue::EnemyDeath).take(slain));
            player.vitals_mut().clear_iframes();
        }
    }

    /// Hands the bonus heart to the player once the room is cleared.
    pub fn update_heart(&mut self, player: &mut Player, cues: &mut Vec<Cue>) {
        if !self.is_cleared() {
            return;
        }
        let Some(heart) = self.heart.as_mut() else {
            return;
        };
        if heart.collected || !heart.item.touches(player) {
            return;
        }
        heart.collected = true;
        player.vitals_mut().heal(1);
        cues.push(Cue::ItemPickup);
        info!("Picked up a heart in {}", self.name);
    }
}
