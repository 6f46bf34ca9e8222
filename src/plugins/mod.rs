//! Feature plugins.

use bevy::prelude::*;

pub mod balance;
pub mod combat;
pub mod core;
pub mod lifecycle;
pub mod physics;
pub mod ragdoll;
pub mod weapons;
pub mod world;

// Render-only
pub mod camera;
pub mod lighting;

/// Register gameplay plugins that work in headless tests.
pub fn register_gameplay(app: &mut App) {
    // Tunables first: later plugins read them while building.
    core::plugin(app);
    physics::plugin(app);
    world::plugin(app);
    ragdoll::plugin(app);
    combat::plugin(app);
    balance::plugin(app);
    weapons::plugin(app);
    lifecycle::plugin(app);
}

/// Register render-only plugins (requires DefaultPlugins / render infra).
pub fn register_render(app: &mut App) {
    lighting::plugin(app);
    camera::plugin(app);
}
