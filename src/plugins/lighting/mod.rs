//! Lighting plugin (Firefly) (render-only).
//!
//! A warm point light hovers over Buddy; acid drops get a faint green glow.

use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;
use bevy_firefly::prelude::*;

use crate::common::state::GameState;
use crate::plugins::ragdoll::{ActiveRagdoll, RagdollPart};
use crate::plugins::weapons::AcidDrop;

#[derive(Component)]
pub struct BuddyLight;

pub fn plugin(app: &mut App) {
    if !app.is_plugin_added::<FireflyPlugin>() {
        app.add_plugins(FireflyPlugin);
    }

    app.add_systems(OnEnter(GameState::InGame), setup)
        .add_systems(
            Update,
            (follow_torso_light, light_acid_drops).run_if(in_state(GameState::InGame)),
        );
}

fn setup(mut commands: Commands) {
    commands.spawn((
        Name::new("BuddyLight"),
        BuddyLight,
        PointLight2d {
            color: Color::srgb(1.0, 0.9, 0.75),
            range: 600.0,
            ..default()
        },
        Transform::from_xyz(0.0, 0.0, 10.0),
        DespawnOnExit(GameState::InGame),
    ));
}

fn follow_torso_light(
    ragdoll: Option<Res<ActiveRagdoll>>,
    q_parts: Query<&Transform, (With<RagdollPart>, Without<BuddyLight>)>,
    mut q_light: Query<&mut Transform, (With<BuddyLight>, Without<RagdollPart>)>,
) {
    let Some(ragdoll) = ragdoll else { return; };
    let Ok(tf_torso) = q_parts.get(ragdoll.torso) else { return; };
    let Ok(mut tf_light) = q_light.single_mut() else { return; };

    tf_light.translation.x = tf_torso.translation.x;
    tf_light.translation.y = tf_torso.translation.y + 80.0;
}

fn light_acid_drops(mut commands: Commands, q_new: Query<Entity, Added<AcidDrop>>) {
    for e in &q_new {
        commands.entity(e).insert(PointLight2d {
            color: Color::srgb(0.3, 1.0, 0.4),
            range: 40.0,
            ..default()
        });
    }
}
