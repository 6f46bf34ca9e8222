//! Camera plugin: a 2D camera that eases toward Buddy's torso.
//!
//! The follow target is looked up through `ActiveRagdoll`, so a respawn retargets the camera
//! without any extra wiring. While no assembly exists the camera holds still.
//!
//! B0001: the torso and camera queries touch `Transform` on both sides, so each excludes the
//! other's marker.
//!
//! ```text
//! OnEnter(InGame): spawn MainCamera
//! PostUpdate:      follow_torso (before transform propagation)
//! ```

use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;
use bevy_firefly::prelude::*;

use crate::common::state::GameState;
use crate::plugins::ragdoll::{ActiveRagdoll, RagdollPart};

#[derive(Component)]
pub struct MainCamera {
    pub responsiveness: f32,
}

pub fn plugin(app: &mut App) {
    app.add_systems(OnEnter(GameState::InGame), spawn_camera)
        .add_systems(
            PostUpdate,
            follow_torso
                .before(TransformSystems::Propagate)
                .run_if(in_state(GameState::InGame)),
        );
}

fn spawn_camera(mut commands: Commands) {
    commands.spawn((
        Name::new("MainCamera"),
        Camera2d,
        MainCamera { responsiveness: 3.0 },
        FireflyConfig::default(),
        Transform::from_xyz(0.0, 0.0, 999.0),
        DespawnOnExit(GameState::InGame),
    ));
}

/// Exponential ease factor for a frame of `dt` seconds.
#[inline]
pub fn follow_alpha(responsiveness: f32, dt: f32) -> f32 {
    1.0 - (-responsiveness * dt).exp()
}

fn follow_torso(
    time: Res<Time>,
    ragdoll: Option<Res<ActiveRagdoll>>,
    q_parts: Query<&Transform, (With<RagdollPart>, Without<MainCamera>)>,
    mut q_cam: Query<(&mut Transform, &MainCamera), Without<RagdollPart>>,
) {
    let Some(ragdoll) = ragdoll else { return; };
    let Ok(tf_torso) = q_parts.get(ragdoll.torso) else { return; };
    let Ok((mut tf_cam, cam)) = q_cam.single_mut() else { return; };

    let alpha = follow_alpha(cam.responsiveness, time.delta_secs());
    let target = tf_torso.translation.truncate();
    let current = tf_cam.translation.truncate();
    let next = current + (target - current) * alpha;

    tf_cam.translation.x = next.x;
    tf_cam.translation.y = next.y;
}
