//! Blueprint → entities, and teardown.

use avian2d::prelude::*;
use bevy::platform::collections::HashMap;
use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;

use crate::common::{layers::ragdoll_layers, state::GameState, tunables::Tunables};

use super::blueprint::{JointSpec, PartSpec, RagdollBlueprint, Shape, Tint};
use super::components::{ActiveRagdoll, PartKind, PartLook, RagdollId, RagdollJoint, RagdollPart};

pub fn tint_color(tint: Tint) -> Color {
    match tint {
        Tint::Skin => Color::srgb(0.96, 0.80, 0.65),
        Tint::Shirt => Color::srgb(0.23, 0.51, 0.96),
        Tint::Shoes => Color::srgb(0.22, 0.25, 0.32),
    }
}

fn collider_for(shape: Shape) -> Collider {
    match shape {
        Shape::Circle { radius } => Collider::circle(radius),
        Shape::Box { size } => Collider::rectangle(size.x, size.y),
    }
}

fn spawn_part(commands: &mut Commands, def: &PartSpec, center: Vec2, id: RagdollId) -> Entity {
    let base = tint_color(def.tint);
    let physics = (
        RigidBody::Dynamic,
        collider_for(def.shape),
        Friction::new(def.material.friction),
        Restitution::new(def.material.restitution),
        ColliderDensity(def.material.density),
        ragdoll_layers(),
        LinearVelocity::ZERO,
        AngularVelocity::ZERO,
        // Avian only writes CollisionStart for pairs where one collider opts in.
        CollisionEventsEnabled,
    );

    commands
        .spawn((
            Name::new(def.kind.to_string()),
            RagdollPart { kind: def.kind, ragdoll: id },
            PartLook { base },
            Sprite {
                color: base,
                custom_size: Some(def.shape.extent()),
                ..default()
            },
            if def.visible { Visibility::Inherited } else { Visibility::Hidden },
            Transform::from_translation((center + def.offset).extend(1.0)),
            physics,
            DespawnOnExit(GameState::InGame),
        ))
        .id()
}

fn spawn_joint(
    commands: &mut Commands,
    def: &JointSpec,
    a: Entity,
    b: Entity,
    id: RagdollId,
    tunables: &Tunables,
) -> Entity {
    commands
        .spawn((
            Name::new(def.name),
            RagdollJoint { ragdoll: id },
            DistanceJoint::new(a, b)
                .with_local_anchor1(def.anchor_a)
                .with_local_anchor2(def.anchor_b)
                .with_limits(def.rest_length, def.rest_length)
                .with_compliance(tunables.joint_compliance(def.stiffness)),
            JointDamping {
                linear: def.damping,
                angular: def.damping,
            },
            DespawnOnExit(GameState::InGame),
        ))
        .id()
}

/// Queue every part and joint of `blueprint` with the torso at `center`.
///
/// Returns `None` (and queues nothing) when the blueprint lacks a torso or head, or a joint
/// names a part that is not in the blueprint.
pub fn spawn_assembly(
    commands: &mut Commands,
    blueprint: &RagdollBlueprint,
    center: Vec2,
    id: RagdollId,
    tunables: &Tunables,
) -> Option<ActiveRagdoll> {
    blueprint.part(PartKind::Torso)?;
    blueprint.part(PartKind::Head)?;
    let complete = blueprint
        .joints
        .iter()
        .all(|j| blueprint.part(j.a).is_some() && blueprint.part(j.b).is_some());
    if !complete {
        warn!("Ragdoll blueprint has a joint with a missing endpoint; nothing spawned");
        return None;
    }

    let by_kind: HashMap<PartKind, Entity> = blueprint
        .parts
        .iter()
        .map(|def| (def.kind, spawn_part(commands, def, center, id)))
        .collect();

    let joints = blueprint
        .joints
        .iter()
        .map(|def| spawn_joint(commands, def, by_kind[&def.a], by_kind[&def.b], id, tunables))
        .collect();

    Some(ActiveRagdoll {
        id,
        torso: by_kind[&PartKind::Torso],
        head: by_kind[&PartKind::Head],
        parts: blueprint.parts.iter().map(|p| by_kind[&p.kind]).collect(),
        joints,
    })
}

/// Queue removal of every joint and part of `ragdoll`. Already-removed entities are skipped.
pub fn despawn_assembly(commands: &mut Commands, ragdoll: &ActiveRagdoll) {
    for &e in ragdoll.joints.iter().chain(ragdoll.parts.iter()) {
        commands.entity(e).try_despawn();
    }
}
