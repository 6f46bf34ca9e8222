//! Weapons plugin: pointer input, weapon modes and the transients they spawn.
//!
//! Input is split producer/consumer the same way everywhere:
//! `request` samples the mouse and writes `Strike`, `fire::fire_weapons` is the only system
//! that turns a strike into world changes. Bat hits are forwarded to combat as `MeleeStrike`.
//!
//! Bullets and acid drops carry a `Lifetime` and are swept up by `lifetime::expire_transients`.

pub mod components;
pub mod cosmetics;
pub mod fire;
pub mod grab;
pub mod lifetime;
pub mod messages;
pub mod request;

use bevy::prelude::*;

use crate::common::state::GameState;
use crate::plugins::combat;

pub use components::*;
pub use messages::Strike;

pub fn plugin(app: &mut App) {
    app.init_resource::<SelectedWeapon>()
        .init_resource::<Pointer>()
        .init_resource::<WeaponCosmetics>()
        .init_resource::<Grab>()
        .add_message::<Strike>();

    app.add_systems(
        Update,
        (
            request::update_pointer,
            // Dead: no selection and no strikes; strikes from any producer expire unread.
            (
                request::select_weapon_from_keys,
                request::request_strikes,
                fire::fire_weapons,
            )
                .chain()
                .run_if(combat::is_alive),
        )
            .chain()
            .run_if(in_state(GameState::InGame)),
    );

    app.add_systems(
        Update,
        (cosmetics::decay_swing, cosmetics::update_aim_angle.after(request::update_pointer))
            .run_if(in_state(GameState::InGame)),
    );

    app.add_systems(
        FixedUpdate,
        (
            grab::drag_with_hand.run_if(combat::is_alive),
            lifetime::expire_transients,
        )
            .run_if(in_state(GameState::InGame)),
    );
}
