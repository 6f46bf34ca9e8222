//! App composition.
//!
//! - `configure_full`: window, renderer, logging (`DefaultPlugins`) plus every feature plugin.
//! - `configure_headless`: gameplay only, for integration tests.
//! - `configure_headless_seeded`: same, with a fixed RNG seed so spreads and dialogue repeat.

use bevy::prelude::*;
use bevy::window::WindowResolution;

use crate::common::{rng::GameRng, state::GameState};
use crate::plugins;

#[cfg(target_os = "windows")]
use bevy::render::{
    settings::{Backends, PowerPreference, WgpuSettings},
    RenderPlugin,
};

pub const WINDOW_TITLE: &str = "Buddy";

pub fn run() {
    App::new().add_plugins(configure_full).run();
}

fn primary_window() -> Window {
    Window {
        title: WINDOW_TITLE.into(),
        resolution: WindowResolution::new(1280, 720),
        ..default()
    }
}

pub fn configure_full(app: &mut App) {
    let default_plugins = DefaultPlugins.set(WindowPlugin {
        primary_window: Some(primary_window()),
        ..default()
    });

    // Vulkan is unreliable on some Windows drivers; pin DX12 and the discrete GPU there.
    #[cfg(target_os = "windows")]
    let default_plugins = default_plugins.set(RenderPlugin {
        render_creation: WgpuSettings {
            backends: Some(Backends::DX12),
            power_preference: PowerPreference::HighPerformance,
            ..default()
        }
        .into(),
        ..default()
    });

    app.add_plugins(default_plugins);
    configure_game(app);
    plugins::register_render(app);
    info!("{WINDOW_TITLE} ready");
}

/// No `DefaultPlugins`, no render-only plugins (Firefly, camera).
pub fn configure_headless(app: &mut App) {
    configure_game(app);
}

pub fn configure_headless_seeded(app: &mut App, seed: u64) {
    // The core plugin keeps a pre-inserted RNG.
    app.insert_resource(GameRng::from_seed(seed));
    configure_game(app);
}

fn configure_game(app: &mut App) {
    app.init_state::<GameState>();
    plugins::register_gameplay(app);
}
