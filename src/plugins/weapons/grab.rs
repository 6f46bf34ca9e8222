//! Hand mode: hold the button to drag the nearest part toward the pointer.
//!
//! The pull is a velocity drive: each frame the held part's velocity is set to cover
//! `grab_stiffness` of the remaining gap in one step.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::common::tunables::Tunables;
use crate::plugins::combat::melee::nearest_within;
use crate::plugins::ragdoll::RagdollPart;

use super::components::{Grab, Pointer, SelectedWeapon, Weapon};

/// Velocity (units/s) that closes `stiffness` of the gap per step.
#[inline]
pub fn drag_velocity(part: Vec2, pointer: Vec2, stiffness: f32, steps_per_second: f32) -> Vec2 {
    (pointer - part) * stiffness * steps_per_second
}

pub fn drag_with_hand(
    buttons: Option<Res<ButtonInput<MouseButton>>>,
    selected: Res<SelectedWeapon>,
    pointer: Res<Pointer>,
    tunables: Res<Tunables>,
    mut grab: ResMut<Grab>,
    mut q_parts: Query<(Entity, &Transform, &mut LinearVelocity), With<RagdollPart>>,
) {
    let held = buttons.is_some_and(|b| b.pressed(MouseButton::Left));
    let (true, Weapon::Hand, Some(point)) = (held, selected.0, pointer.world) else {
        grab.target = None;
        return;
    };

    let target = match grab.target {
        Some(e) if q_parts.contains(e) => e,
        _ => {
            let candidates = q_parts.iter().map(|(e, tf, _)| (e, tf.translation.truncate()));
            let Some(e) = nearest_within(point, tunables.weapons.grab_radius, candidates) else {
                return;
            };
            grab.target = Some(e);
            e
        }
    };

    if let Ok((_, tf, mut vel)) = q_parts.get_mut(target) {
        vel.0 = drag_velocity(
            tf.translation.truncate(),
            point,
            tunables.weapons.grab_stiffness,
            tunables.steps_per_second as f32,
        );
    }
}
