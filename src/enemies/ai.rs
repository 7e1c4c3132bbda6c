//! Enemy behaviour: random wandering plus per-variant extras.

use rand::Rng;

use super::components::{Behaviour, Enemy};
use crate::core::tuning::ENEMY_SIZE;
use crate::world::{Aabb, Direction};

impl Enemy {
    /// Raw movement for one tick. `player` is the player's full sprite rectangle.
    ///
    /// Obstacle clamping is left to the room, which knows the borders.
    pub fn advance(&mut self, player: &Aabb, rng: &mut impl Rng) {
        self.wander(rng);
        match self.behaviour {
            Behaviour::Patroller => {}
            Behaviour::Charger { boost } => self.charge(player, boost),
            Behaviour::Turret { ref mut fireball } => {
                if fireball.is_out_of_bounds() {
                    fireball.recall();
                    if let Some(direction) = fireball.direction() {
                        fireball.set_direction(direction.clockwise());
                    }
                }
                fireball.advance((self.x, self.y));
            }
        }
    }

    /// Re-rolls the heading whenever the animation wait runs out, then walks.
    fn wander(&mut self, rng: &mut impl Rng) {
        if self.animation.tick() {
            self.roll = rng.gen_range(0..self.roll_range);
        }
        if let Some(direction) = Direction::from_roll(self.roll) {
            self.facing = direction;
            let (ux, uy) = direction.unit();
            self.x += ux * self.speed;
            self.y += uy * self.speed;
        }
    }

    /// Lunges along the current facing if the player is lined up ahead.
    fn charge(&mut self, player: &Aabb, boost: i32) {
        let (cx, cy) = player.center();
        let across_x = self.x < cx && cx < self.x + ENEMY_SIZE;
        let across_y = self.y < cy && cy < self.y + ENEMY_SIZE;
        match self.facing {
            Direction::Up if across_x && player.y < self.y => self.y -= boost,
            Direction::Right if across_y && player.x > self.x => self.x += boost,
            Direction::Down if across_x && player.y > self.y => self.y += boost,
            Direction::Left if across_y && player.x < self.x => self.x -= boost,
            _ => {}
        }
    }
}
