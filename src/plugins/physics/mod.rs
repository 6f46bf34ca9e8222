//! Physics plugin: avian world setup.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::common::tunables::Tunables;

pub fn plugin(app: &mut App) {
    let tunables = app.world().resource::<Tunables>().clone();
    app.add_plugins(PhysicsPlugins::default().with_length_unit(tunables.pixels_per_meter));
    app.insert_resource(Gravity(Vec2::NEG_Y * tunables.gravity));
    // Per-step speed thresholds assume this rate.
    app.insert_resource(Time::<Fixed>::from_hz(tunables.steps_per_second));
}
