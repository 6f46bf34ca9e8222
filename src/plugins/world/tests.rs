use bevy::prelude::*;
use avian2d::prelude::*;
use crate::common::layers::Layer;
use crate::common::test_utils::run_system_once;

#[test]
fn spawns_static_arena_on_enter() {
    let mut world = World::new();
    run_system_once(&mut world, super::spawn_arena);

    let slabs = world.query::<(&Name, &RigidBody, &super::Environment)>().iter(&world)
        .filter(|(_, rb, _)| matches!(**rb, RigidBody::Static))
        .count();
    assert_eq!(slabs, 3);
}

#[test]
fn arena_collides_with_ragdoll_and_transients() {
    let mut world = World::new();
    run_system_once(&mut world, super::spawn_arena);

    for layers in world.query::<&CollisionLayers>().iter(&world) {
        assert!(layers.memberships.has_all(Layer::World));
        assert!(layers.filters.has_all(Layer::Ragdoll));
        assert!(layers.filters.has_all(Layer::Transient));
    }
}
