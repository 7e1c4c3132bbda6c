//! Health and invincibility bookkeeping shared by every combatant.

/// Result of trying to land a hit on a combatant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strike {
    /// The target was invincible (or already dead) and took no damage.
    Ignored,
    /// One point of health was removed and the target survived.
    Wounded,
    /// The hit took the last point of health.
    Killed,
}

impl Strike {
    pub fn landed(self) -> bool {
        !matches!(self, Strike::Ignored)
    }
}

/// Health plus an invincibility countdown.
///
/// The countdown is only ever reset by a landed hit and decremented by
/// [`Vitals::settle`], which callers run exactly once per tick after all hit
/// checks for that combatant are done.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vitals {
    health: u32,
    iframes: u32,
    struck: bool,
}

impl Vitals {
    pub fn new(health: u32) -> Self {
        Self {
            health,
            iframes: 0,
            struck: false,
        }
    }

    pub fn health(&self) -> u32 {
        self.health
    }

    pub fn iframes(&self) -> u32 {
        self.iframes
    }

    pub fn is_dead(&self) -> bool {
        self.health == 0
    }

    pub fn is_vulnerable(&self) -> bool {
        self.iframes == 0 && !self.is_dead()
    }

    /// Removes one point of health and opens an invincibility window of
    /// `window` ticks, unless the target is currently invincible or dead.
    pub fn strike(&mut self, window: u32) -> Strike {
        if !self.is_vulnerable() {
            return Strike::Ignored;
        }
        self.health -= 1;
        self.iframes = window;
        self.struck = true;
        if self.health == 0 {
            Strike::Killed
        } else {
            Strike::Wounded
        }
    }

    /// End-of-tick countdown: ticks down the window unless a hit landed this tick.
    pub fn settle(&mut self) {
        if !self.struck && self.iframes > 0 {
            self.iframes -= 1;
        }
        self.struck = false;
    }

    /// Drops any remaining invincibility so the next exchange starts clean.
    pub fn clear_iframes(&mut self) {
        self.iframes = 0;
    }

    pub fn heal(&mut self, amount: u32) {
        self.health = self.health.saturating_add(amount);
    }

    /// Blink hint for renderers while invincible.
    pub fn flicker(&self) -> bool {
        matches!(self.iframes % 5, 1 | 2)
    }
}

/// Frame index plus a countdown until the next frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Animation {
    frame: usize,
    frames: usize,
    wait: u32,
    delay: u32,
}

impl Animation {
    pub fn new(frames: usize, delay: u32) -> Self {
        Self {
            frame: 0,
            frames: frames.max(1),
            wait: delay,
            delay,
        }
    }

    pub fn frame(&self) -> usize {
        self.frame
    }

    /// Counts the wait down, returning true on the tick the frame changes.
    pub fn tick(&mut self) -> bool {
        if self.wait == 0 {
            self.frame = (self.frame + 1) % self.frames;
            self.wait = self.delay;
            true
        } else {
            self.wait -= 1;
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn animation_holds_each_frame_for_delay_plus_one() {
        let mut anim = Animation::new(2, 2);
        let frames: Vec<usize> = (0..6)
            .map(|_| {
                anim.tick();
                anim.frame()
            })
            .collect();
        assert_eq!(frames, [0, 0, 1, 1, 1, 0]);
    }

    #[test]
    fn second_hit_in_same_tick_is_ignored() {
        let mut vitals = Vitals::new(2);
        assert_eq!(vitals.strike(30), Strike::Wounded);
        assert_eq!(vitals.health(), 1);
        assert_eq!(vitals.iframes(), 30);
        assert_eq!(vitals.strike(30), Strike::Ignored);
        assert_eq!(vitals.health(), 1);
    }

    #[test]
    fn window_counts_down_to_zero_and_stays() {
        let mut vitals = Vitals::new(3);
        vitals.strike(4);
        // The tick the hit lands does not count.
        vitals.settle();
        assert_eq!(vitals.iframes(), 4);
        let mut last = vitals.iframes();
        for _ in 0..10 {
            vitals.settle();
            assert!(vitals.iframes() <= last);
            last = vitals.iframes();
        }
        assert_eq!(vitals.iframes(), 0);
        assert!(vitals.is_vulnerable());
    }

    #[test]
    fn dead_targets_take_no_more_damage() {
        let mut vitals = Vitals::new(1);
        assert_eq!(vitals.strike(30), Strike::Killed);
        vitals.clear_iframes();
        assert_eq!(vitals.strike(30), Strike::Ignored);
        assert_eq!(vitals.health(), 0);
    }

    #[test]
    fn flicker_follows_window() {
        let mut vitals = Vitals::new(5);
        vitals.strike(7);
        vitals.settle();
        let pattern: Vec<bool> = (0..7)
            .map(|_| {
                let f = vitals.flicker();
                vitals.settle();
                f
            })
            .collect();
        // iframes 7,6,5,4,3,2,1
        assert_eq!(pattern, [true, true, false, false, false, true, true]);
    }
}
