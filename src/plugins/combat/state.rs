//! Authoritative combat facts.
//!
//! `CombatState` and `BurnLevels` are mutated only by the combat systems; everything else
//! (HUD, ragdoll tint, lifecycle) reads them or listens to the outgoing messages.

use bevy::platform::collections::HashMap;
use bevy::prelude::*;

use crate::plugins::ragdoll::PartKind;

pub const MAX_HEALTH: u32 = 1000;

/// The last few damage-log lines at the moment of death.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DeathReport {
    pub recent_damage: Vec<String>,
}

#[derive(Resource, Debug, Clone)]
pub struct CombatState {
    pub(super) health: u32,
    pub(super) max_health: u32,
    pub(super) is_dead: bool,
    pub(super) damage_log: Vec<String>,
}

impl CombatState {
    pub fn new(max_health: u32) -> Self {
        Self {
            health: max_health,
            max_health,
            is_dead: false,
            damage_log: Vec::new(),
        }
    }

    #[inline]
    pub fn health(&self) -> u32 {
        self.health
    }

    #[inline]
    pub fn max_health(&self) -> u32 {
        self.max_health
    }

    #[inline]
    pub fn is_dead(&self) -> bool {
        self.is_dead
    }

    pub fn damage_log(&self) -> &[String] {
        &self.damage_log
    }

    pub(super) fn record(&mut self, entry: impl Into<String>) {
        self.damage_log.push(entry.into());
    }

    /// Saturating subtraction. Returns the death report the first time health reaches zero.
    pub(super) fn take_damage(&mut self, amount: u32, report_len: usize) -> Option<DeathReport> {
        self.health = self.health.saturating_sub(amount);
        if self.health > 0 || self.is_dead {
            return None;
        }
        self.is_dead = true;
        let start = self.damage_log.len().saturating_sub(report_len);
        Some(DeathReport {
            recent_damage: self.damage_log[start..].to_vec(),
        })
    }

    pub(super) fn revive(&mut self) {
        self.health = self.max_health;
        self.is_dead = false;
        self.damage_log.clear();
    }

    #[cfg(test)]
    pub(crate) fn with_health(health: u32) -> Self {
        Self {
            health: health.min(MAX_HEALTH),
            ..Self::new(MAX_HEALTH)
        }
    }
}

impl Default for CombatState {
    fn default() -> Self {
        Self::new(MAX_HEALTH)
    }
}

/// Per-part burn side table, keyed by part kind (one live assembly at a time).
#[derive(Resource, Debug, Clone, Default)]
pub struct BurnLevels {
    levels: HashMap<PartKind, f32>,
}

impl BurnLevels {
    pub fn level(&self, part: PartKind) -> f32 {
        self.levels.get(&part).copied().unwrap_or(0.0)
    }

    /// Raise a part's burn by `step`, never above `cap`. Returns the new level.
    pub(super) fn add(&mut self, part: PartKind, step: f32, cap: f32) -> f32 {
        let level = self.levels.entry(part).or_insert(0.0);
        *level = (*level + step).min(cap).max(*level);
        *level
    }

    pub(super) fn clear(&mut self) {
        self.levels.clear();
    }
}
