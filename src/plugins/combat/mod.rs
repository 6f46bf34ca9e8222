//! Combat plugin: turns collisions and bat strikes into damage, burns and reactions.
//!
//! ```text
//!   Update           weapons::fire ──MeleeStrike──▶ melee::resolve_melee_strikes
//!                    weapons::fire ──GunFired──▶ record_gunshots
//!   FixedUpdate      lifecycle ──Respawned──▶ reset_on_respawn, reaction::expire_reactions
//!   FixedPostUpdate  avian CollisionStart ──▶ collision::resolve_collisions
//!                                      │
//!                                      ├──Died──▶ lifecycle
//!                                      └──ReactionEmitted──▶ presentation
//! ```
//!
//! `CombatState`, `BurnLevels` and `Reactions` are owned here. Other modules only read them.

pub mod collision;
pub mod melee;
pub mod messages;
pub mod reaction;
pub mod rules;
pub mod state;

use avian2d::collision::narrow_phase::CollisionEventSystems;
use bevy::prelude::*;

use crate::common::{state::GameState, tunables::Tunables};
use crate::plugins::lifecycle::{self, Respawned};
use crate::plugins::weapons;

use messages::{Died, GunFired, MeleeStrike};
use reaction::{ReactionEmitted, Reactions};
use state::{BurnLevels, CombatState};

pub fn plugin(app: &mut App) {
    let max_health = app.world().resource::<Tunables>().combat.max_health;
    app.insert_resource(CombatState::new(max_health))
        .init_resource::<BurnLevels>()
        .init_resource::<Reactions>()
        .add_message::<MeleeStrike>()
        .add_message::<GunFired>()
        .add_message::<Died>()
        .add_message::<ReactionEmitted>();

    app.add_systems(
        Update,
        (melee::resolve_melee_strikes, record_gunshots)
            .after(weapons::fire::fire_weapons)
            .run_if(in_state(GameState::InGame)),
    );

    app.add_systems(
        FixedUpdate,
        (
            reset_on_respawn.after(lifecycle::tick_respawn),
            reaction::expire_reactions,
        )
            .run_if(in_state(GameState::InGame)),
    );

    app.add_systems(
        FixedPostUpdate,
        collision::resolve_collisions
            .after(CollisionEventSystems)
            .run_if(in_state(GameState::InGame)),
    );
}

/// Run condition: Buddy is alive (balance and weapon input pause while dead).
pub fn is_alive(state: Res<CombatState>) -> bool {
    !state.is_dead()
}

pub fn record_gunshots(mut shots: MessageReader<GunFired>, mut state: ResMut<CombatState>) {
    for shot in shots.read() {
        if state.record_gunshot() {
            debug!("Gunshot from {:?}", shot.point);
        }
    }
}

/// Fresh assembly, fresh combatant: full health, empty log, no burns.
pub fn reset_on_respawn(
    mut respawned: MessageReader<Respawned>,
    mut state: ResMut<CombatState>,
    mut burns: ResMut<BurnLevels>,
) {
    if respawned.read().last().is_none() {
        return;
    }
    state.revive();
    burns.clear();
    debug!("Combat state reset: health {}", state.health());
}

#[cfg(test)]
mod tests;
