//! Integration test harness.
//!
//! Keep integration tests headless:
//! - `MinimalPlugins` provides core ECS runtime.
//! - `buddy_sandbox::game::configure_headless_seeded` installs gameplay with a fixed RNG seed.
//!
//! Virtual time advances a fixed 17 ms per `update`, so roughly one physics step runs per frame
//! regardless of how fast the test machine is.

use std::time::Duration;

use bevy::asset::AssetPlugin;
use bevy::prelude::*;
use bevy::scene::ScenePlugin;
use bevy::state::app::StatesPlugin;
use bevy::time::TimeUpdateStrategy;

use buddy_sandbox::common::state::GameState;

pub const FRAME: Duration = Duration::from_millis(17);

pub fn app_headless() -> App {
    let mut app = App::new();

    // Add AssetPlugin + ScenePlugin so SceneSpawner exists.
    app.add_plugins((
        MinimalPlugins,
        StatesPlugin,
        AssetPlugin::default(),
        ScenePlugin,
    ));
    app.insert_resource(TimeUpdateStrategy::ManualDuration(FRAME));

    buddy_sandbox::game::configure_headless_seeded(&mut app, 42);
    app
}

/// Headless app that has entered `InGame` and settled for a couple of frames.
pub fn app_in_game() -> App {
    let mut app = app_headless();
    app.world_mut()
        .resource_mut::<NextState<GameState>>()
        .set(GameState::InGame);
    for _ in 0..3 {
        app.update();
    }
    app
}

pub fn run_frames(app: &mut App, frames: usize) {
    for _ in 0..frames {
        app.update();
    }
}
