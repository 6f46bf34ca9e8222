//! Lifecycle plugin: Alive → Dead → Alive.
//!
//! ```text
//! combat ──Died──▶ handle_deaths ──▶ Lifecycle::Dead { respawn_in }
//!                        └──▶ DeathNotifications (rate limited, fire-and-forget)
//! tick_respawn: timer done ──▶ tear down + rebuild assembly ──Respawned──▶ combat
//! ```
//!
//! The respawn countdown lives inside the state enum, so at most one respawn can be pending.

pub mod notify;

use bevy::prelude::*;

use crate::common::{state::GameState, tunables::Tunables};
use crate::plugins::combat::messages::Died;
use crate::plugins::ragdoll::blueprint::RagdollBlueprint;
use crate::plugins::ragdoll::spawn::{despawn_assembly, spawn_assembly};
use crate::plugins::ragdoll::{ActiveRagdoll, RagdollId, RagdollIds};

pub use notify::{DeathNotifications, DeathNotifier, LogNotifier, NotifyError, NotifyOutcome};

#[derive(Resource, Debug, Clone, Default, PartialEq, Eq)]
pub enum Lifecycle {
    #[default]
    Alive,
    Dead {
        respawn_in: Timer,
    },
}

impl Lifecycle {
    #[inline]
    pub fn is_dead(&self) -> bool {
        matches!(self, Lifecycle::Dead { .. })
    }
}

/// A fresh assembly replaced the dead one.
#[derive(Message, Clone, Copy, Debug)]
pub struct Respawned {
    pub ragdoll: RagdollId,
}

pub fn plugin(app: &mut App) {
    app.init_resource::<Lifecycle>()
        .init_resource::<DeathNotifications>()
        .add_message::<Respawned>()
        .add_systems(
            FixedUpdate,
            (handle_deaths, tick_respawn)
                .chain()
                .run_if(in_state(GameState::InGame)),
        );
}

pub fn handle_deaths(
    mut died: MessageReader<Died>,
    tunables: Res<Tunables>,
    time: Res<Time<Fixed>>,
    mut lifecycle: ResMut<Lifecycle>,
    mut notifications: ResMut<DeathNotifications>,
) {
    for Died { report } in died.read() {
        if lifecycle.is_dead() {
            debug!("Died while already dead; ignored");
            continue;
        }
        info!("Buddy is dead; respawning in {:?}", tunables.respawn_delay);
        *lifecycle = Lifecycle::Dead {
            respawn_in: Timer::new(tunables.respawn_delay, TimerMode::Once),
        };
        notifications.dispatch(report, time.elapsed(), tunables.notify_interval);
    }
}

pub fn tick_respawn(
    mut commands: Commands,
    time: Res<Time<Fixed>>,
    tunables: Res<Tunables>,
    mut lifecycle: ResMut<Lifecycle>,
    mut ids: ResMut<RagdollIds>,
    ragdoll: Option<Res<ActiveRagdoll>>,
    mut respawned: MessageWriter<Respawned>,
) {
    let Lifecycle::Dead { respawn_in } = &mut *lifecycle else {
        return;
    };
    respawn_in.tick(time.delta());
    if !respawn_in.is_finished() {
        return;
    }

    if let Some(old) = ragdoll {
        despawn_assembly(&mut commands, &old);
    }

    let id = ids.next_id();
    let blueprint = RagdollBlueprint::buddy();
    match spawn_assembly(&mut commands, &blueprint, tunables.respawn_point, id, &tunables) {
        Some(fresh) => commands.insert_resource(fresh),
        None => {
            warn!("Respawn produced no assembly");
            commands.remove_resource::<ActiveRagdoll>();
        }
    }

    *lifecycle = Lifecycle::Alive;
    respawned.write(Respawned { ragdoll: id });
    info!("Buddy respawned as {id:?}");
}
