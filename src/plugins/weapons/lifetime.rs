//! Transient cleanup: bullets and acid drops that outlive their countdown.
//!
//! The countdown is a component, so despawning the entity early (acid consumed on contact)
//! cancels it for free.

use bevy::prelude::*;

use super::components::Lifetime;

pub fn expire_transients(
    mut commands: Commands,
    time: Res<Time<Fixed>>,
    mut q: Query<(Entity, &mut Lifetime)>,
) {
    for (e, mut lt) in &mut q {
        lt.tick(time.delta());
        if lt.is_finished() {
            commands.entity(e).try_despawn();
        }
    }
}
