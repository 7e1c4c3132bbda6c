//! Per-tick player stepping: walking, swinging and the sword beam.

use super::components::{ButtonState, Player};
use crate::core::Cue;
use crate::world::Mobile;

impl Player {
    /// Raw movement for one tick. Obstacle clamping happens afterwards, once
    /// the room the player ends up in is known.
    pub fn advance(&mut self, buttons: &ButtonState, cues: &mut Vec<Cue>) {
        if buttons.attack {
            if !self.is_swinging() {
                self.swing_left = self.tuning.swing_ticks;
                cues.push(Cue::SwordSlash);
            }
            if self.can_shoot {
                self.beam.recall();
            }
        }

        // No walking mid-swing.
        let heading = if self.is_swinging() {
            None
        } else {
            buttons.heading()
        };
        if let Some(direction) = heading {
            self.facing = direction;
            let (ux, uy) = direction.unit();
            let (dx, dy) = self.step();
            self.shift(ux * dx, uy * dy);
            self.walk.tick();
        }

        if self.can_shoot {
            self.beam.advance((self.x, self.y));
            if self.beam.is_recalled() {
                self.beam.set_direction(self.facing);
                cues.push(Cue::SwordBeam);
            }
        }
    }

    /// End-of-tick bookkeeping: invincibility countdown and swing timer.
    pub fn settle(&mut self) {
        self.vitals.settle();
        self.swing_left = self.swing_left.saturating_sub(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::tuning::PlayerTuning;
    use crate::world::{Aabb, Direction};

    fn player() -> Player {
        Player::new(300, 400, PlayerTuning::default())
    }

    fn held(direction: Direction) -> ButtonState {
        ButtonState {
            up: direction == Direction::Up,
            right: direction == Direction::Right,
            down: direction == Direction::Down,
            left: direction == Direction::Left,
            attack: false,
        }
    }

    #[test]
    fn up_beats_every_other_direction() {
        let mut p = player();
        let all = ButtonState {
            up: true,
            right: true,
            down: true,
            left: true,
            attack: false,
        };
        p.advance(&all, &mut Vec::new());
        assert_eq!((p.x, p.y), (300, 395));
        assert_eq!(p.facing(), Direction::Up);
    }

    #[test]
    fn swing_blocks_walking_for_its_duration() {
        let mut p = player();
        let mut cues = Vec::new();
        let attack = ButtonState {
            right: true,
            attack: true,
            ..Default::default()
        };
        p.advance(&attack, &mut cues);
        assert_eq!(cues, [Cue::SwordSlash]);
        assert_eq!(p.x, 300);
        assert_eq!(p.swing(), Some(Aabb::new(348, 400, 36, 48)));
        p.settle();
        for _ in 0..3 {
            p.advance(&held(Direction::Right), &mut cues);
            assert!(p.swing().is_some());
            p.settle();
        }
        assert!(p.swing().is_none());
        p.advance(&held(Direction::Right), &mut cues);
        assert_eq!(p.x, 305);
    }

    #[test]
    fn swing_rect_points_where_the_player_faces() {
        let mut p = player();
        p.advance(&held(Direction::Up), &mut Vec::new());
        p.advance(
            &ButtonState {
                attack: true,
                ..Default::default()
            },
            &mut Vec::new(),
        );
        assert_eq!(p.swing(), Some(Aabb::new(300, 359, 48, 36)));
    }

    #[test]
    fn locked_beam_ignores_attack() {
        let mut p = player();
        let mut cues = Vec::new();
        for _ in 0..40 {
            p.advance(
                &ButtonState {
                    attack: true,
                    ..Default::default()
                },
                &mut cues,
            );
            p.settle();
        }
        assert!(!cues.contains(&Cue::SwordBeam));
        assert!(p.beam().is_none());
    }

    #[test]
    fn beam_fires_from_player_in_facing_direction() {
        let mut p = player();
        p.unlock_beam();
        let mut cues = Vec::new();
        // Let the parked beam drift out of bounds first.
        p.advance(&ButtonState::default(), &mut cues);
        p.advance(&held(Direction::Left), &mut cues);
        p.advance(
            &ButtonState {
                attack: true,
                ..Default::default()
            },
            &mut cues,
        );
        assert!(cues.contains(&Cue::SwordBeam));
        let beam = p.beam().unwrap();
        assert_eq!((beam.x, beam.y), (p.x, p.y));
        assert_eq!(beam.direction(), Some(Direction::Left));
        p.settle();
        p.advance(&ButtonState::default(), &mut cues);
        assert_eq!(p.beam().unwrap().x, p.x - 15);
    }

    #[test]
    fn knockback_pushes_against_facing() {
        let mut p = player();
        let mut cues = Vec::new();
        let body = p.hitbox();
        assert!(p.take_body_hit(&body, &mut cues));
        assert_eq!(p.x, 280);
        assert_eq!(p.health(), 6);
        assert_eq!(p.vitals().iframes(), 120);
        assert!(!p.take_body_hit(&p.hitbox(), &mut cues));
        assert_eq!(cues, [Cue::PlayerHurt]);
    }
}
