//! Animation-only weapon state: bat swing decay and gun aim angle.

use bevy::prelude::*;

use crate::common::tunables::Tunables;
use crate::plugins::ragdoll::{ActiveRagdoll, RagdollPart};

use super::components::{Pointer, WeaponCosmetics};

pub fn decay_swing(tunables: Res<Tunables>, mut cosmetics: ResMut<WeaponCosmetics>) {
    if cosmetics.swing > 0.0 {
        cosmetics.swing = (cosmetics.swing - tunables.weapons.swing_decay).max(0.0);
    }
}

/// Angle of the line from `from` to `to`; 0 without a target.
#[inline]
pub fn aim_angle(from: Vec2, to: Option<Vec2>) -> f32 {
    to.map_or(0.0, |to| {
        let d = to - from;
        d.y.atan2(d.x)
    })
}

pub fn update_aim_angle(
    pointer: Res<Pointer>,
    ragdoll: Option<Res<ActiveRagdoll>>,
    q_parts: Query<&Transform, With<RagdollPart>>,
    mut cosmetics: ResMut<WeaponCosmetics>,
) {
    let Some(from) = pointer.world else { return; };
    let torso = ragdoll
        .as_ref()
        .and_then(|r| q_parts.get(r.torso).ok())
        .map(|tf| tf.translation.truncate());
    cosmetics.aim_angle = aim_angle(from, torso);
}
