//! Ragdoll plugin: builds and owns the jointed humanoid ("Buddy").
//!
//! The assembly is pure construction: `blueprint` describes parts and joints, `spawn` turns
//! them into avian bodies and `DistanceJoint`s. Per-frame behaviour lives elsewhere
//! (balance, combat, lifecycle).
//!
//! Collision filtering: every part is a member of `Layer::Ragdoll` and does not filter it,
//! so parts of the assembly never collide with each other, while the arena and transients do.

pub mod blueprint;
pub mod components;
pub mod spawn;

use bevy::prelude::*;

use crate::common::{state::GameState, tunables::Tunables};
use crate::plugins::combat::state::BurnLevels;

pub use components::*;

pub fn plugin(app: &mut App) {
    app.init_resource::<RagdollIds>()
        .add_systems(OnEnter(GameState::InGame), spawn_initial)
        .add_systems(Update, tint_burned_parts.run_if(in_state(GameState::InGame)));
}

fn spawn_initial(
    mut commands: Commands,
    mut ids: ResMut<RagdollIds>,
    tunables: Res<Tunables>,
    existing: Option<Res<ActiveRagdoll>>,
) {
    if existing.is_some() {
        return;
    }
    let blueprint = blueprint::RagdollBlueprint::buddy();
    let id = ids.next_id();
    if let Some(ragdoll) = spawn::spawn_assembly(&mut commands, &blueprint, tunables.spawn_point, id, &tunables) {
        info!("Spawned ragdoll {:?} with {} parts", ragdoll.id, ragdoll.parts.len());
        commands.insert_resource(ragdoll);
    }
}

/// Subtract `amount` from each channel, keeping alpha.
pub fn darken(color: Color, amount: f32) -> Color {
    let c = color.to_srgba();
    Color::srgba(
        (c.red - amount).max(0.0),
        (c.green - amount).max(0.0),
        (c.blue - amount).max(0.0),
        c.alpha,
    )
}

/// Presentation: parts darken as acid burns accumulate.
fn tint_burned_parts(
    burns: Res<BurnLevels>,
    mut q: Query<(&RagdollPart, &PartLook, &mut Sprite)>,
) {
    if !burns.is_changed() {
        return;
    }
    for (part, look, mut sprite) in &mut q {
        sprite.color = darken(look.base, burns.level(part.kind));
    }
}
