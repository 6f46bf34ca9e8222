//! Damage rules as plain functions over `CombatState`, free of ECS plumbing.
//!
//! Every rule is a no-op while the combatant is dead.

use crate::common::tunables::CombatTunables;
use crate::plugins::ragdoll::PartKind;

use super::state::{BurnLevels, CombatState, DeathReport};

/// Result of a velocity-gated impact that did damage.
#[derive(Debug, Clone, PartialEq)]
pub struct Impact {
    pub damage: u32,
    /// Strong enough to make Buddy say something (cooldown permitting).
    pub reacts: bool,
    pub died: Option<DeathReport>,
}

/// `floor(speed * factor)` above the threshold, nothing at or below it.
pub fn impact_damage(speed: f32, t: &CombatTunables) -> Option<u32> {
    (speed > t.impact_speed_threshold).then(|| (speed * t.impact_damage_factor).floor() as u32)
}

impl CombatState {
    /// Acid drop touching a part: burn, log, flat damage.
    pub fn acid_burn(
        &mut self,
        burns: &mut BurnLevels,
        part: PartKind,
        t: &CombatTunables,
    ) -> Option<DeathReport> {
        if self.is_dead {
            return None;
        }
        burns.add(part, t.burn_step, t.burn_cap);
        self.record(format!("Acid burn on {part}"));
        self.take_damage(t.acid_damage, t.death_report_len)
    }

    /// Collision involving a part with combined speed `speed` (units/step).
    pub fn impact(&mut self, part: PartKind, speed: f32, t: &CombatTunables) -> Option<Impact> {
        if self.is_dead {
            return None;
        }
        let damage = impact_damage(speed, t)?;
        self.record(format!("High velocity impact on {part} (Speed: {speed:.1})"));
        let died = self.take_damage(damage, t.death_report_len);
        Some(Impact {
            damage,
            reacts: speed > t.reaction_speed_threshold,
            died,
        })
    }

    /// Gun fired at Buddy: a log line only. Returns whether it was recorded.
    pub fn record_gunshot(&mut self) -> bool {
        if self.is_dead {
            return false;
        }
        self.record("Gunshot wound");
        true
    }

    /// Bat hit: guaranteed flat damage, independent of any velocity.
    pub fn melee_strike(&mut self, t: &CombatTunables) -> Option<DeathReport> {
        if self.is_dead {
            return None;
        }
        self.record("Blunt force trauma from Baseball Bat");
        self.take_damage(t.melee_damage, t.death_report_len)
    }
}
