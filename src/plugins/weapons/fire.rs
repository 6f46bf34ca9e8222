//! Strike consumer: turns each `Strike` into world mutations for the selected weapon.

use avian2d::prelude::*;
use bevy::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::state::state_scoped::DespawnOnExit;

use crate::common::{layers::transient_layers, rng::GameRng, state::GameState, tunables::Tunables};
use crate::plugins::combat::messages::{GunFired, MeleeStrike};
use crate::plugins::ragdoll::{ActiveRagdoll, RagdollPart};

use super::components::{AcidDrop, Lifetime, Projectile, SelectedWeapon, Weapon, WeaponCosmetics};
use super::messages::Strike;

/// Spawn position and velocity (units/step) of a bullet fired from `point` toward `target`.
pub fn projectile_launch(point: Vec2, target: Vec2, offset: f32, speed: f32) -> (Vec2, Vec2) {
    let dir = (target - point).try_normalize().unwrap_or(Vec2::X);
    (point + dir * offset, dir * speed)
}

pub fn spawn_projectile(commands: &mut Commands, tunables: &Tunables, pos: Vec2, vel_per_step: Vec2) -> Entity {
    let w = &tunables.weapons;
    commands
        .spawn((
            Name::new("Bullet"),
            Projectile,
            Lifetime::new(w.bullet_ttl),
            Sprite {
                color: Color::srgb(0.29, 0.33, 0.39),
                custom_size: Some(Vec2::splat(w.bullet_radius * 2.0)),
                ..default()
            },
            Transform::from_translation(pos.extend(2.0)),
            RigidBody::Dynamic,
            Collider::circle(w.bullet_radius),
            ColliderDensity(0.1),
            transient_layers(),
            LinearVelocity(vel_per_step * tunables.steps_per_second as f32),
            // Fast and small: sweep it so it cannot tunnel through a limb.
            SweptCcd::default(),
            CollisionEventsEnabled,
            DespawnOnExit(GameState::InGame),
        ))
        .id()
}

pub fn spawn_acid_drop(commands: &mut Commands, tunables: &Tunables, pos: Vec2, vel_per_step: Vec2) -> Entity {
    let w = &tunables.weapons;
    commands
        .spawn((
            Name::new("AcidDrop"),
            AcidDrop,
            Lifetime::new(w.acid_ttl),
            Sprite {
                color: Color::srgba(0.13, 0.77, 0.37, 0.8),
                custom_size: Some(Vec2::splat(w.acid_radius * 2.0)),
                ..default()
            },
            Transform::from_translation(pos.extend(2.0)),
            RigidBody::Dynamic,
            Collider::circle(w.acid_radius),
            (Friction::ZERO, Restitution::ZERO, ColliderDensity(0.005)),
            // Roughly 5% velocity loss per step.
            LinearDamping(3.0),
            transient_layers(),
            LinearVelocity(vel_per_step * tunables.steps_per_second as f32),
            CollisionEventsEnabled,
            DespawnOnExit(GameState::InGame),
        ))
        .id()
}

pub fn fire_weapons(
    mut commands: Commands,
    mut strikes: MessageReader<Strike>,
    selected: Res<SelectedWeapon>,
    tunables: Res<Tunables>,
    mut rng: ResMut<GameRng>,
    mut cosmetics: ResMut<WeaponCosmetics>,
    ragdoll: Option<Res<ActiveRagdoll>>,
    q_parts: Query<&Transform, With<RagdollPart>>,
    mut melee: MessageWriter<MeleeStrike>,
    mut gunshots: MessageWriter<GunFired>,
) {
    let w = &tunables.weapons;

    for strike in strikes.read() {
        match selected.0 {
            // Dragging is continuous; see grab.rs.
            Weapon::Hand => {}
            Weapon::Bat => {
                cosmetics.swing = 1.0;
                melee.write(MeleeStrike { point: strike.point });
            }
            Weapon::Gun => {
                // Logged even when there is nothing to aim at.
                gunshots.write(GunFired { point: strike.point });
                let torso = ragdoll
                    .as_ref()
                    .and_then(|r| q_parts.get(r.torso).ok())
                    .map(|tf| tf.translation.truncate());
                let Some(torso) = torso else {
                    debug!("Gun fired without a torso to aim at");
                    continue;
                };
                let (pos, vel) = projectile_launch(strike.point, torso, w.bullet_offset, w.bullet_speed);
                spawn_projectile(&mut commands, &tunables, pos, vel);
            }
            Weapon::Acid => {
                for _ in 0..w.acid_drops {
                    let pos = strike.point + Vec2::X * rng.spread(w.acid_jitter);
                    // Small sideways drift, falling.
                    let vel = Vec2::new(rng.spread(1.0), -rng.range(2.0, 5.0));
                    spawn_acid_drop(&mut commands, &tunables, pos, vel);
                }
            }
        }
    }
}
