//! Reusable projectiles.
//!
//! Every shooter owns its projectiles for the whole session. A shot is never
//! destroyed: it flies until it leaves the playfield, then waits for the
//! shooter to *recall* it, which snaps it back to the shooter and re-arms it.
//! Projectiles that hit something are *sent out* to a sentinel position far
//! past the boundary so they cannot trigger twice.

use crate::core::tuning::{HUD_HEIGHT, SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::world::{Aabb, Direction};

/// How a projectile moves each tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Motion {
    /// Travels along `direction` at a fixed speed and goes out of bounds at the playfield edge.
    Cardinal { direction: Direction, speed: i32 },
    /// Moves by a constant vector with no boundary checks.
    Ballistic { dx: i32, dy: i32 },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Projectile {
    pub x: i32,
    pub y: i32,
    /// Extent along the direction of travel.
    length: i32,
    /// Extent across the direction of travel.
    thickness: i32,
    motion: Motion,
    recalled: bool,
    out_of_bounds: bool,
}

impl Projectile {
    /// A cardinal shot that starts flying upward.
    pub fn cardinal(x: i32, y: i32, speed: i32, length: i32, thickness: i32) -> Self {
        Self {
            x,
            y,
            length,
            thickness,
            motion: Motion::Cardinal {
                direction: Direction::Up,
                speed,
            },
            recalled: false,
            out_of_bounds: false,
        }
    }

    /// A shot fired from `origin` toward `target`, rotated by `spread_degrees`.
    ///
    /// The velocity components are truncated toward zero.
    pub fn aimed(origin: (i32, i32), target: (i32, i32), speed: f32, spread_degrees: f32, size: i32) -> Self {
        let angle = ((target.1 - origin.1) as f32).atan2((target.0 - origin.0) as f32)
            + spread_degrees.to_radians();
        Self {
            x: origin.0,
            y: origin.1,
            length: size,
            thickness: size,
            motion: Motion::Ballistic {
                dx: (angle.cos() * speed) as i32,
                dy: (angle.sin() * speed) as i32,
            },
            recalled: false,
            out_of_bounds: false,
        }
    }

    pub fn motion(&self) -> Motion {
        self.motion
    }

    pub fn direction(&self) -> Option<Direction> {
        match self.motion {
            Motion::Cardinal { direction, .. } => Some(direction),
            Motion::Ballistic { .. } => None,
        }
    }

    /// Points a cardinal shot a new way. Ballistic shots ignore this.
    pub fn set_direction(&mut self, new_direction: Direction) {
        if let Motion::Cardinal { direction, .. } = &mut self.motion {
            *direction = new_direction;
        }
    }

    pub fn is_recalled(&self) -> bool {
        self.recalled
    }

    pub fn is_out_of_bounds(&self) -> bool {
        self.out_of_bounds
    }

    /// Asks for the shot to return to its shooter.
    ///
    /// For cardinal shots the request only sticks once the shot is out of
    /// bounds; the next [`Projectile::advance`] clears it otherwise.
    pub fn recall(&mut self) {
        self.recalled = true;
    }

    pub fn bounds(&self) -> Aabb {
        let horizontal = self.direction().is_some_and(Direction::is_horizontal);
        if horizontal {
            Aabb::new(self.x, self.y, self.length, self.thickness)
        } else {
            Aabb::new(self.x, self.y, self.thickness, self.length)
        }
    }

    pub fn hits(&self, target: &Aabb) -> bool {
        self.bounds().intersects(target)
    }

    /// Moves one tick. `shooter` is where a recalled cardinal shot snaps back to.
    pub fn advance(&mut self, shooter: (i32, i32)) {
        match self.motion {
            Motion::Cardinal { direction, speed } => {
                match direction {
                    Direction::Up => {
                        self.y = self.y.saturating_sub(speed);
                        if self.y < HUD_HEIGHT {
                            self.out_of_bounds = true;
                        }
                    }
                    Direction::Right => {
                        self.x = self.x.saturating_add(speed);
                        if self.x > SCREEN_WIDTH {
                            self.out_of_bounds = true;
                        }
                    }
                    Direction::Down => {
                        self.y = self.y.saturating_add(speed);
                        if self.y > SCREEN_HEIGHT {
                            self.out_of_bounds = true;
                        }
                    }
                    Direction::Left => {
                        self.x = self.x.saturating_sub(speed);
                        if self.x < 0 {
                            self.out_of_bounds = true;
                        }
                    }
                }
                if !self.out_of_bounds {
                    self.recalled = false;
                }
                if self.recalled {
                    (self.x, self.y) = shooter;
                    self.out_of_bounds = false;
                }
            }
            Motion::Ballistic { dx, dy } => {
                self.x = self.x.saturating_add(dx);
                self.y = self.y.saturating_add(dy);
            }
        }
    }

    /// Moves the shot past the playfield edge on its axis of travel.
    /// Ballistic shots go above the playfield.
    pub fn send_out(&mut self) {
        match self.direction() {
            Some(Direction::Up) | None => self.y = -1000,
            Some(Direction::Right) => self.x = SCREEN_WIDTH,
            Some(Direction::Down) => self.y = SCREEN_HEIGHT,
            Some(Direction::Left) => self.x = -50,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cardinal_shot_flies_until_out_of_bounds() {
        let mut shot = Projectile::cardinal(100, 200, 15, 48, 21);
        shot.advance((0, 0));
        assert_eq!((shot.x, shot.y), (100, 185));
        assert!(!shot.is_out_of_bounds());
        for _ in 0..3 {
            shot.advance((0, 0));
        }
        assert_eq!(shot.y, 140);
        assert!(shot.is_out_of_bounds());
    }

    #[test]
    fn recall_mid_flight_is_dropped() {
        let mut shot = Projectile::cardinal(100, 400, 15, 48, 21);
        shot.recall();
        shot.advance((7, 7));
        assert!(!shot.is_recalled());
        assert_eq!((shot.x, shot.y), (100, 385));
    }

    #[test]
    fn recall_after_leaving_snaps_to_shooter() {
        let mut shot = Projectile::cardinal(100, 155, 15, 48, 21);
        shot.advance((0, 0));
        assert!(shot.is_out_of_bounds());
        shot.recall();
        shot.set_direction(Direction::Left);
        shot.advance((300, 400));
        assert_eq!((shot.x, shot.y), (300, 400));
        assert!(!shot.is_out_of_bounds());
        // Next tick it flies again and the recall clears.
        shot.advance((0, 0));
        assert_eq!(shot.x, 285);
        assert!(!shot.is_recalled());
    }

    #[test]
    fn horizontal_shots_swap_extents() {
        let mut shot = Projectile::cardinal(0, 0, 15, 48, 21);
        assert_eq!(shot.bounds(), Aabb::new(0, 0, 21, 48));
        shot.set_direction(Direction::Right);
        assert_eq!(shot.bounds(), Aabb::new(0, 0, 48, 21));
    }

    #[test]
    fn send_out_uses_axis_sentinel() {
        let mut shot = Projectile::cardinal(300, 300, 10, 24, 24);
        shot.send_out();
        assert_eq!(shot.y, -1000);
        shot.set_direction(Direction::Left);
        shot.send_out();
        assert_eq!(shot.x, -50);
    }

    #[test]
    fn ballistic_send_out_lifts_above_playfield() {
        let mut shot = Projectile::aimed((600, 330), (100, 330), 10.0, 0.0, 24);
        shot.send_out();
        assert_eq!((shot.x, shot.y), (600, -1000));
        shot.advance((0, 0));
        assert_eq!((shot.x, shot.y), (590, -1000));
    }

    #[test]
    fn aimed_shot_straight_left() {
        let shot = Projectile::aimed((600, 330), (100, 330), 10.0, 0.0, 24);
        assert_eq!(shot.motion(), Motion::Ballistic { dx: -10, dy: 0 });
    }

    #[test]
    fn aimed_spread_fans_out() {
        let up = Projectile::aimed((600, 330), (100, 330), 10.0, 20.0, 24);
        let down = Projectile::aimed((600, 330), (100, 330), 10.0, -20.0, 24);
        // 200 and 160 degrees: cos = -0.9397, sin = -/+0.342
        assert_eq!(up.motion(), Motion::Ballistic { dx: -9, dy: -3 });
        assert_eq!(down.motion(), Motion::Ballistic { dx: -9, dy: 3 });
    }
}
