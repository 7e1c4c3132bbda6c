//! Axis-aligned boxes, facing directions and static obstacles.
//!
//! All coordinates are integer pixels in screen space: `x` grows to the right,
//! `y` grows downward, and the origin is the top-left corner of the window
//! (including the HUD band above the room).

use serde::Deserialize;

/// One of the four cardinal facings shared by every agent and projectile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    /// Clockwise order, which is also the order random rolls map onto.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];

    /// Maps a roll onto a direction: `0..4` are the four facings, anything else is "stay put".
    pub fn from_roll(roll: u32) -> Option<Self> {
        Self::ALL.get(roll as usize).copied()
    }

    pub fn clockwise(self) -> Self {
        match self {
            Direction::Up => Direction::Right,
            Direction::Right => Direction::Down,
            Direction::Down => Direction::Left,
            Direction::Left => Direction::Up,
        }
    }

    pub fn opposite(self) -> Self {
        self.clockwise().clockwise()
    }

    pub fn is_horizontal(self) -> bool {
        matches!(self, Direction::Left | Direction::Right)
    }

    /// Unit offset in screen space (y down).
    pub fn unit(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Right => (1, 0),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
        }
    }
}

/// Axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub struct Aabb {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Aabb {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Zero-area boxes never intersect anything.
    pub fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    pub fn center(&self) -> (i32, i32) {
        (self.x + self.width / 2, self.y + self.height / 2)
    }

    /// Strict overlap test: boxes that only share an edge do not intersect.
    pub fn intersects(&self, other: &Aabb) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }

    /// Shrinks the box by `margin` on every side.
    pub fn inset(&self, margin: i32) -> Aabb {
        Aabb::new(
            self.x + margin,
            self.y + margin,
            (self.width - 2 * margin).max(0),
            (self.height - 2 * margin).max(0),
        )
    }
}

/// Anything that moves by a fixed per-axis step and can be pushed back by terrain.
pub trait Mobile {
    fn hitbox(&self) -> Aabb;
    fn facing(&self) -> Direction;
    /// Per-axis speed `(dx, dy)`, always non-negative.
    fn step(&self) -> (i32, i32);
    fn shift(&mut self, dx: i32, dy: i32);
}

/// A static barrier owned by a room.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Obstacle {
    bounds: Aabb,
}

impl Obstacle {
    pub fn new(bounds: Aabb) -> Self {
        Self { bounds }
    }

    pub fn bounds(&self) -> Aabb {
        self.bounds
    }

    pub fn blocks(&self, hitbox: &Aabb) -> bool {
        self.bounds.intersects(hitbox)
    }
}

/// Undoes one step of `agent` along its facing axis if it overlaps any obstacle.
///
/// The push-back is the agent's own speed, not the penetration depth, so an
/// agent that moved further than one step this tick (or was knocked back) can
/// stay partially embedded. Returns whether a push-back happened.
pub fn clamp<'a, M, I>(agent: &mut M, obstacles: I) -> bool
where
    M: Mobile + ?Sized,
    I: IntoIterator<Item = &'a Obstacle>,
{
    let hitbox = agent.hitbox();
    if !obstacles.into_iter().any(|o| o.blocks(&hitbox)) {
        return false;
    }
    let (dx, dy) = agent.step();
    match agent.facing() {
        Direction::Up => agent.shift(0, dy),
        Direction::Right => agent.shift(-dx, 0),
        Direction::Down => agent.shift(0, -dy),
        Direction::Left => agent.shift(dx, 0),
    }
    true
}
