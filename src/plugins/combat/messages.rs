//! Combat inputs and outputs.

use bevy::prelude::*;

use super::state::DeathReport;

/// Bat swing at a world point. Written by the weapon controller, resolved by combat.
#[derive(Message, Clone, Copy, Debug)]
pub struct MeleeStrike {
    pub point: Vec2,
}

/// Gun fired from a world point. Logged by combat; damage comes from the bullet's impact.
#[derive(Message, Clone, Copy, Debug)]
pub struct GunFired {
    pub point: Vec2,
}

/// Health just reached zero. Written exactly once per depletion.
#[derive(Message, Clone, Debug)]
pub struct Died {
    pub report: DeathReport,
}
