//! Hit resolution shared by enemies and the boss.

use super::components::{Strike, Vitals};
use super::projectile::Projectile;
use crate::world::Aabb;

/// The player's offensive reach for the current tick.
pub struct Weapons<'a> {
    /// Sword rectangle while a swing is live.
    pub swing: Option<Aabb>,
    /// Sword beam, once unlocked.
    pub beam: Option<&'a mut Projectile>,
}

/// Applies sword then beam hits against one target.
///
/// A beam that touches a living target is sent out whether or not the hit
/// lands, so it never passes through to a second target. Returns the
/// strongest outcome of the tick.
pub fn resolve_hits(target: &Aabb, vitals: &mut Vitals, window: u32, weapons: &mut Weapons) -> Strike {
    let mut outcome = Strike::Ignored;

    if weapons.swing.is_some_and(|swing| swing.intersects(target)) {
        outcome = vitals.strike(window);
    }

    if let Some(beam) = weapons.beam.as_deref_mut() {
        if !vitals.is_dead() && beam.hits(target) {
            beam.send_out();
            let strike = vitals.strike(window);
            if strike.landed() {
                outcome = strike;
            }
        }
    }

    outcome
}
