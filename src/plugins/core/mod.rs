//! Core plugin: shared resources and global settings.

use crate::common::{rng::GameRng, tunables::Tunables};
use bevy::prelude::*;

/// `init_resource` keeps values a test inserted before the plugin ran.
pub fn plugin(app: &mut App) {
    app.init_resource::<Tunables>();
    app.init_resource::<GameRng>();
    app.insert_resource(ClearColor(Color::srgb(0.82, 0.68, 0.49)));
}
