//! Buffered weapon input.
//!
//! Producers (mouse/touch sampling, tests, a future UI) write intent; `fire::fire_weapons`
//! is the single consumer that mutates the world.

use bevy::prelude::*;

/// A tap or click at a world point.
#[derive(Message, Clone, Copy, Debug)]
pub struct Strike {
    pub point: Vec2,
}
