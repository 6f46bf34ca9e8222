//! World plugin: spawns the arena (ground and side walls).

use avian2d::prelude::*;
use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;

use crate::common::{layers::world_layers, state::GameState};

pub const HALF_W: f32 = 640.0;
pub const HALF_H: f32 = 360.0;
/// Top surface of the ground slab.
pub const GROUND_Y: f32 = -260.0;
const THICKNESS: f32 = 100.0;

/// Static arena geometry. Never damageable, never hit by melee.
#[derive(Component, Debug, Clone, Copy)]
pub struct Environment;

pub fn plugin(app: &mut App) {
    app.add_systems(OnEnter(GameState::InGame), spawn_arena);
}

fn spawn_arena(mut commands: Commands) {
    let ground_color = Color::srgb(0.55, 0.41, 0.26);

    let mut spawn_slab = |name: &str, pos: Vec2, size: Vec2, friction: f32, visible: bool| {
        commands.spawn((
            Name::new(name.to_string()),
            Environment,
            Sprite {
                color: ground_color,
                custom_size: Some(size),
                ..default()
            },
            if visible { Visibility::Inherited } else { Visibility::Hidden },
            Transform::from_translation(pos.extend(0.0)),
            RigidBody::Static,
            Collider::rectangle(size.x, size.y),
            Friction::new(friction),
            world_layers(),
            DespawnOnExit(GameState::InGame),
        ));
    };

    spawn_slab(
        "Ground",
        Vec2::new(0.0, GROUND_Y - THICKNESS * 0.5),
        Vec2::new(HALF_W * 2.0, THICKNESS),
        1.0,
        true,
    );
    spawn_slab(
        "WallLeft",
        Vec2::new(-HALF_W - THICKNESS * 0.5, 0.0),
        Vec2::new(THICKNESS, HALF_H * 4.0),
        0.5,
        false,
    );
    spawn_slab(
        "WallRight",
        Vec2::new(HALF_W + THICKNESS * 0.5, 0.0),
        Vec2::new(THICKNESS, HALF_H * 4.0),
        0.5,
        false,
    );
}

#[cfg(test)]
mod tests;
