//! Test helpers.
//!
//! Systems that use `Commands` enqueue structural changes; applying them is normally handled by
//! `ApplyDeferred` / schedule boundaries. We call `world.flush()` after running so queued commands
//! are applied before assertions.

use std::time::Duration;

use bevy::ecs::system::{IntoSystem, RunSystemOnce};
use bevy::prelude::*;

/// Run a system once on the given world, then flush deferred commands.
/// Returns the system output.
pub fn run_system_once<T, Out, Marker>(world: &mut World, system: T) -> Out
where
    T: IntoSystem<(), Out, Marker>,
{
    let out = world.run_system_once(system).expect("system run failed");
    world.flush();
    out
}

/// Move the world's fixed clock forward by `dt`, inserting it first if needed.
pub fn advance_fixed(world: &mut World, dt: Duration) {
    if world.get_resource::<Time<Fixed>>().is_none() {
        world.insert_resource(Time::<Fixed>::default());
    }
    world.resource_mut::<Time<Fixed>>().advance_by(dt);
}

/// Read every message of type `M` currently buffered in the world.
pub fn drain_messages<M: Message + Clone>(world: &mut World) -> Vec<M> {
    if world.get_resource::<bevy::ecs::message::Messages<M>>().is_none() {
        return Vec::new();
    }
    run_system_once(world, |mut reader: bevy::ecs::message::MessageReader<M>| {
        reader.read().cloned().collect::<Vec<M>>()
    })
}
