//! Balance plugin: a PD controller that nudges the torso back upright.
//!
//! Gains were tuned against per-step angular velocity, so avian's rad/s is converted on the
//! way in and out. A torso already spinning fast is left to physics.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::common::{state::GameState, tunables::{BalanceTunables, Tunables}};
use crate::plugins::combat;
use crate::plugins::ragdoll::ActiveRagdoll;

use std::f32::consts::{PI, TAU};

pub fn plugin(app: &mut App) {
    app.add_systems(
        FixedUpdate,
        stabilize_torso
            .run_if(in_state(GameState::InGame))
            .run_if(combat::is_alive),
    );
}

/// Wrap an angle into (−π, π].
pub fn normalize_angle(angle: f32) -> f32 {
    let wrapped = (angle + PI).rem_euclid(TAU) - PI;
    if wrapped <= -PI { wrapped + TAU } else { wrapped }
}

/// Adjusted angular velocity (rad/step) for a torso at `angle` spinning at `omega`: the PD
/// correction is added to the current spin. `None` when spinning too fast to correct.
pub fn balance_correction(angle: f32, omega: f32, gains: &BalanceTunables) -> Option<f32> {
    if omega.abs() >= gains.max_angular_speed {
        return None;
    }
    let error = -normalize_angle(angle);
    Some(omega + error * gains.kp - omega * gains.kd)
}

pub fn stabilize_torso(
    tunables: Res<Tunables>,
    ragdoll: Option<Res<ActiveRagdoll>>,
    mut q_body: Query<(&Rotation, &mut AngularVelocity)>,
) {
    let Some(ragdoll) = ragdoll else { return; };
    let Ok((rotation, mut omega)) = q_body.get_mut(ragdoll.torso) else {
        debug!("Balance skipped: torso missing");
        return;
    };

    let per_step = tunables.per_step(omega.0);
    if let Some(next) = balance_correction(rotation.as_radians(), per_step, &tunables.balance) {
        omega.0 = tunables.per_second(next);
    }
}
