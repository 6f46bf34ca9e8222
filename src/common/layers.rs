//! Collision layers.
//!
//! Ragdoll parts are members of `Ragdoll` but never list it in their filters, so the parts of
//! one assembly do not collide with each other. Transients likewise skip `Transient`.

use avian2d::prelude::*;

#[derive(PhysicsLayer, Default, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Layer {
    #[default]
    Default,
    World,
    Ragdoll,
    Transient,
}

#[inline]
pub fn world_layers() -> CollisionLayers {
    CollisionLayers::new(Layer::World, [Layer::Ragdoll, Layer::Transient])
}

#[inline]
pub fn ragdoll_layers() -> CollisionLayers {
    CollisionLayers::new(Layer::Ragdoll, [Layer::World, Layer::Transient])
}

#[inline]
pub fn transient_layers() -> CollisionLayers {
    CollisionLayers::new(Layer::Transient, [Layer::World, Layer::Ragdoll])
}
