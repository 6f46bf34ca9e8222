//! Input producers: pointer tracking, weapon selection and strike requests.
//!
//! These systems never touch the physics world; they only update input resources and write
//! `Strike` messages.

use bevy::prelude::*;
use bevy::ecs::message::MessageWriter;

use crate::plugins::camera::MainCamera;

use super::components::{Pointer, SelectedWeapon, Weapon};
use super::messages::Strike;

/// Convert the cursor into world space. Missing window/camera/cursor clears the pointer.
pub fn update_pointer(
    windows: Query<&Window>,
    q_camera: Query<(&Camera, &GlobalTransform), With<MainCamera>>,
    mut pointer: ResMut<Pointer>,
) {
    let Ok(window) = windows.single() else { return; };
    let Ok((camera, camera_tf)) = q_camera.single() else { return; };

    pointer.world = window
        .cursor_position()
        .and_then(|cursor| camera.viewport_to_world_2d(camera_tf, cursor).ok());
}

pub fn select_weapon_from_keys(
    keys: Option<Res<ButtonInput<KeyCode>>>,
    mut selected: ResMut<SelectedWeapon>,
) {
    let Some(keys) = keys else { return; };

    let choice = [
        (KeyCode::Digit1, Weapon::Hand),
        (KeyCode::Digit2, Weapon::Bat),
        (KeyCode::Digit3, Weapon::Gun),
        (KeyCode::Digit4, Weapon::Acid),
    ]
    .into_iter()
    .find_map(|(key, weapon)| keys.just_pressed(key).then_some(weapon));

    match choice {
        Some(weapon) if selected.0 != weapon => {
            info!("Weapon selected: {weapon:?}");
            selected.0 = weapon;
        }
        _ => {}
    }
}

/// Producer: a fresh left click becomes a `Strike` at the pointer.
pub fn request_strikes(
    buttons: Option<Res<ButtonInput<MouseButton>>>,
    pointer: Res<Pointer>,
    mut writer: MessageWriter<Strike>,
) {
    let Some(buttons) = buttons else { return; };
    if !buttons.just_pressed(MouseButton::Left) { return; }

    let Some(point) = pointer.world else {
        debug!("Click without a world-space pointer");
        return;
    };

    writer.write(Strike { point });
}
