//! Combat tests: collisions are injected as `CollisionStart` messages and resolved once, with
//! the fixed clock advanced by hand.

use std::time::Duration;

use avian2d::prelude::*;
use bevy::ecs::message::Messages;
use bevy::prelude::*;

use crate::common::rng::GameRng;
use crate::common::test_utils::{advance_fixed, drain_messages, run_system_once};
use crate::common::tunables::Tunables;
use crate::plugins::lifecycle::Respawned;
use crate::plugins::ragdoll::{ActiveRagdoll, PartKind, RagdollId, RagdollPart, Side};
use crate::plugins::weapons::components::AcidDrop;

use super::messages::{Died, GunFired, MeleeStrike};
use super::reaction::{ReactionEmitted, Reactions};
use super::rules::impact_damage;
use super::state::{BurnLevels, CombatState};
use super::{collision, melee, record_gunshots, reset_on_respawn};

fn combat_world(state: CombatState) -> World {
    let mut world = World::new();
    world.insert_resource(Tunables::default());
    world.insert_resource(state);
    world.insert_resource(GameRng::from_seed(11));
    world.init_resource::<BurnLevels>();
    world.init_resource::<Reactions>();
    world.init_resource::<Messages<CollisionStart>>();
    world.init_resource::<Messages<MeleeStrike>>();
    world.init_resource::<Messages<GunFired>>();
    world.init_resource::<Messages<Died>>();
    world.init_resource::<Messages<ReactionEmitted>>();
    world.init_resource::<Messages<Respawned>>();
    advance_fixed(&mut world, Duration::from_secs(1));
    world
}

/// Part moving at `speed` units/step along +x.
fn part(world: &mut World, kind: PartKind, at: Vec2, speed: f32) -> Entity {
    world
        .spawn((
            RagdollPart { kind, ragdoll: RagdollId(0) },
            Transform::from_translation(at.extend(1.0)),
            LinearVelocity(Vec2::X * speed * 60.0),
        ))
        .id()
}

fn ground(world: &mut World) -> Entity {
    world.spawn((Transform::default(), LinearVelocity::ZERO)).id()
}

fn acid(world: &mut World) -> Entity {
    world.spawn((AcidDrop, Transform::default(), LinearVelocity::ZERO)).id()
}

/// Replace the pending collision batch with `pairs` and resolve it.
fn resolve(world: &mut World, pairs: &[(Entity, Entity)]) {
    world.resource_mut::<Messages<CollisionStart>>().clear();
    for &(a, b) in pairs {
        world.write_message(CollisionStart {
            collider1: a,
            collider2: b,
            body1: Some(a),
            body2: Some(b),
        });
    }
    run_system_once(world, collision::resolve_collisions);
}

fn health(world: &World) -> u32 {
    world.resource::<CombatState>().health()
}

#[test]
fn acid_on_head_burns_and_damages() {
    let mut world = combat_world(CombatState::default());
    let head = part(&mut world, PartKind::Head, Vec2::ZERO, 0.0);
    let drop = acid(&mut world);

    resolve(&mut world, &[(drop, head)]);

    assert_eq!(health(&world), 985);
    let burn = world.resource::<BurnLevels>().level(PartKind::Head);
    assert!((burn - 0.1).abs() < 1e-6);
    assert!(world.get_entity(drop).is_err(), "acid drop is single use");
    assert_eq!(
        world.resource::<CombatState>().damage_log().last().map(String::as_str),
        Some("Acid burn on head")
    );
}

#[test]
fn one_drop_touching_two_parts_burns_once() {
    let mut world = combat_world(CombatState::default());
    let head = part(&mut world, PartKind::Head, Vec2::ZERO, 0.0);
    let torso = part(&mut world, PartKind::Torso, Vec2::ZERO, 0.0);
    let drop = acid(&mut world);

    resolve(&mut world, &[(head, drop), (drop, torso)]);

    assert_eq!(health(&world), 985);
    assert_eq!(world.resource::<BurnLevels>().level(PartKind::Torso), 0.0);
}

#[test]
fn burn_is_monotone_and_capped() {
    let t = Tunables::default().combat;
    let mut state = CombatState::default();
    let mut burns = BurnLevels::default();
    let foot = PartKind::Foot(Side::Left);

    let mut last = 0.0;
    for hit in 1..=12 {
        state.acid_burn(&mut burns, foot, &t);
        let level = burns.level(foot);
        assert!(level >= last);
        assert!(level <= 0.8 + 1e-6);
        if hit == 5 {
            assert!((level - 0.5).abs() < 1e-5);
        }
        last = level;
    }
    assert!((last - 0.8).abs() < 1e-6);
    assert_eq!(state.health(), 1000 - 12 * 15);
}

#[test]
fn slow_contacts_never_hurt() {
    let mut world = combat_world(CombatState::default());
    let torso = part(&mut world, PartKind::Torso, Vec2::ZERO, 15.0);
    let floor = ground(&mut world);

    resolve(&mut world, &[(torso, floor)]);

    assert_eq!(health(&world), 1000);
    assert!(world.resource::<CombatState>().damage_log().is_empty());
    assert_eq!(impact_damage(15.0, &Tunables::default().combat), None);
}

#[test]
fn fast_impact_deals_floored_damage() {
    let mut world = combat_world(CombatState::default());
    let arm = part(&mut world, PartKind::UpperArm(Side::Right), Vec2::ZERO, 18.0);
    let floor = ground(&mut world);

    resolve(&mut world, &[(floor, arm)]);

    // floor(18 * 0.3)
    assert_eq!(health(&world), 995);
    assert_eq!(
        world.resource::<CombatState>().damage_log().last().map(String::as_str),
        Some("High velocity impact on right upper arm (Speed: 18.0)")
    );
}

#[test]
fn lethal_impact_dies_exactly_once() {
    let mut world = combat_world(CombatState::with_health(10));
    let torso = part(&mut world, PartKind::Torso, Vec2::ZERO, 40.0);
    let floor = ground(&mut world);

    // Second event of the batch arrives after death and is ignored.
    resolve(&mut world, &[(torso, floor), (floor, torso)]);

    let state = world.resource::<CombatState>();
    assert_eq!(state.health(), 0);
    assert!(state.is_dead());
    let died = drain_messages::<Died>(&mut world);
    assert_eq!(died.len(), 1);
    assert_eq!(died[0].report.recent_damage.len(), 1);
}

#[test]
fn acid_damage_clamps_at_zero() {
    let mut world = combat_world(CombatState::with_health(5));
    let head = part(&mut world, PartKind::Head, Vec2::ZERO, 0.0);
    let drop = acid(&mut world);

    resolve(&mut world, &[(drop, head)]);

    assert_eq!(health(&world), 0);
    assert_eq!(drain_messages::<Died>(&mut world).len(), 1);
}

#[test]
fn dead_combatant_ignores_collisions() {
    let mut world = combat_world(CombatState::with_health(10));
    let torso = part(&mut world, PartKind::Torso, Vec2::ZERO, 40.0);
    let floor = ground(&mut world);
    resolve(&mut world, &[(torso, floor)]);
    let log_len = world.resource::<CombatState>().damage_log().len();

    let drop = acid(&mut world);
    resolve(&mut world, &[(drop, torso), (torso, floor)]);

    assert_eq!(world.resource::<CombatState>().damage_log().len(), log_len);
    assert_eq!(world.resource::<BurnLevels>().level(PartKind::Torso), 0.0);
}

#[test]
fn death_report_keeps_the_last_ten_entries() {
    let t = Tunables::default().combat;
    let mut state = CombatState::with_health(15 * 12);
    let mut burns = BurnLevels::default();

    let mut report = None;
    for _ in 0..12 {
        report = report.or(state.acid_burn(&mut burns, PartKind::Head, &t));
    }
    let report = report.map(|r| r.recent_damage.len());
    assert_eq!(report, Some(10));
    assert_eq!(state.damage_log().len(), 12);
}

#[test]
fn hard_hits_react_with_a_cooldown() {
    let mut world = combat_world(CombatState::default());
    let head = part(&mut world, PartKind::Head, Vec2::new(0.0, 100.0), 0.0);
    world.insert_resource(ActiveRagdoll {
        id: RagdollId(0),
        torso: head,
        head,
        parts: vec![head],
        joints: Vec::new(),
    });
    let floor = ground(&mut world);

    let hit_at = |world: &mut World, speed: f32| {
        let torso = part(world, PartKind::Torso, Vec2::ZERO, speed);
        resolve(world, &[(torso, floor)]);
        world.resource_mut::<Messages<ReactionEmitted>>().update();
        drain_messages::<ReactionEmitted>(world)
    };

    let first = hit_at(&mut world, 22.0);
    assert_eq!(first.len(), 1);
    assert_eq!(first[0].0.position, Vec2::new(0.0, 160.0));
    assert!(first[0].0.visible);

    advance_fixed(&mut world, Duration::from_millis(500));
    assert!(hit_at(&mut world, 25.0).is_empty());

    advance_fixed(&mut world, Duration::from_millis(700));
    let third = hit_at(&mut world, 25.0);
    assert_eq!(third.len(), 1);
    assert_ne!(third[0].0.id, first[0].0.id);
}

#[test]
fn moderate_hits_do_not_react() {
    let mut world = combat_world(CombatState::default());
    let head = part(&mut world, PartKind::Head, Vec2::ZERO, 0.0);
    world.insert_resource(ActiveRagdoll {
        id: RagdollId(0),
        torso: head,
        head,
        parts: vec![head],
        joints: Vec::new(),
    });
    let torso = part(&mut world, PartKind::Torso, Vec2::ZERO, 20.0);
    let floor = ground(&mut world);

    resolve(&mut world, &[(torso, floor)]);

    assert_eq!(health(&world), 994);
    assert!(drain_messages::<ReactionEmitted>(&mut world).is_empty());
}

#[test]
fn reaction_bubble_hides_after_display_time() {
    let mut reactions = Reactions::default();
    let second = Duration::from_secs(1);
    assert!(reactions.try_emit(Duration::ZERO, second, second, "Ouch!", Vec2::ZERO).is_some());

    reactions.tick(Duration::from_millis(600));
    assert!(reactions.current().is_some());
    reactions.tick(Duration::from_millis(400));
    assert!(reactions.current().is_none());
}

#[test]
fn bat_hits_nearest_part_regardless_of_its_speed() {
    let mut world = combat_world(CombatState::default());
    let foot = part(&mut world, PartKind::Foot(Side::Right), Vec2::new(0.0, -100.0), 0.0);
    let head = part(&mut world, PartKind::Head, Vec2::new(0.0, 100.0), 50.0);

    world.write_message(MeleeStrike { point: Vec2::new(10.0, -90.0) });
    run_system_once(&mut world, melee::resolve_melee_strikes);

    assert_eq!(health(&world), 950);
    assert_eq!(
        world.resource::<CombatState>().damage_log().last().map(String::as_str),
        Some("Blunt force trauma from Baseball Bat")
    );
    let kick = world.get::<LinearVelocity>(foot).map(|v| v.0);
    assert!(kick.is_some_and(|v| v.y == 180.0 && v.x.abs() <= 90.0));
    assert_eq!(world.get::<LinearVelocity>(head).map(|v| v.0), Some(Vec2::X * 3000.0));
}

#[test]
fn bat_out_of_reach_misses() {
    let mut world = combat_world(CombatState::default());
    part(&mut world, PartKind::Torso, Vec2::ZERO, 0.0);

    world.write_message(MeleeStrike { point: Vec2::new(80.0, 0.0) });
    run_system_once(&mut world, melee::resolve_melee_strikes);

    assert_eq!(health(&world), 1000);
}

#[test]
fn respawn_restores_a_fresh_combatant() {
    let mut world = combat_world(CombatState::with_health(10));
    let head = part(&mut world, PartKind::Head, Vec2::ZERO, 0.0);
    let drop = acid(&mut world);
    resolve(&mut world, &[(drop, head)]);
    assert!(world.resource::<CombatState>().is_dead());

    world.write_message(Respawned { ragdoll: RagdollId(1) });
    run_system_once(&mut world, reset_on_respawn);

    let state = world.resource::<CombatState>();
    assert_eq!(state.health(), 1000);
    assert!(!state.is_dead());
    assert!(state.damage_log().is_empty());
    assert_eq!(world.resource::<BurnLevels>().level(PartKind::Head), 0.0);
}

#[test]
fn gunshots_are_logged_without_damage() {
    let mut world = combat_world(CombatState::default());

    world.write_message(GunFired { point: Vec2::ZERO });
    world.write_message(GunFired { point: Vec2::ONE });
    run_system_once(&mut world, record_gunshots);

    let state = world.resource::<CombatState>();
    assert_eq!(state.health(), 1000);
    assert_eq!(state.damage_log(), ["Gunshot wound", "Gunshot wound"]);
}

#[test]
fn gunshots_after_death_are_not_logged() {
    let mut world = combat_world(CombatState::with_health(10));
    let head = part(&mut world, PartKind::Head, Vec2::ZERO, 0.0);
    let drop = acid(&mut world);
    resolve(&mut world, &[(drop, head)]);
    let log_len = world.resource::<CombatState>().damage_log().len();

    world.write_message(GunFired { point: Vec2::ZERO });
    run_system_once(&mut world, record_gunshots);

    assert_eq!(world.resource::<CombatState>().damage_log().len(), log_len);
}

#[test]
fn gunshot_lines_reach_the_death_report() {
    let t = Tunables::default().combat;
    let mut state = CombatState::with_health(50);
    assert!(state.record_gunshot());

    let report = state.melee_strike(&t).map(|r| r.recent_damage);
    assert_eq!(
        report,
        Some(vec![
            "Gunshot wound".to_string(),
            "Blunt force trauma from Baseball Bat".to_string(),
        ])
    );
}
