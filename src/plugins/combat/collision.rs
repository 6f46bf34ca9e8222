//! Collision classification: acid burns first, then velocity-gated impacts.
//!
//! Events of one step are read in emission order. Once a rule kills Buddy the remaining
//! events of the batch are drained without effect.

use avian2d::prelude::*;
use bevy::ecs::system::SystemParam;
use bevy::platform::collections::HashSet;
use bevy::prelude::*;

use crate::common::{rng::GameRng, tunables::Tunables};
use crate::plugins::ragdoll::{ActiveRagdoll, RagdollPart};
use crate::plugins::weapons::components::AcidDrop;

use super::messages::Died;
use super::reaction::{ReactionEmitted, Reactions, THOUGHTS};
use super::state::{BurnLevels, CombatState};

#[inline]
fn owner(collider: Entity, body: Option<Entity>) -> Entity {
    body.unwrap_or(collider)
}

/// Everything the collision rules write.
#[derive(SystemParam)]
pub struct CombatWrites<'w> {
    state: ResMut<'w, CombatState>,
    burns: ResMut<'w, BurnLevels>,
    reactions: ResMut<'w, Reactions>,
    rng: ResMut<'w, GameRng>,
    died: MessageWriter<'w, Died>,
    emitted: MessageWriter<'w, ReactionEmitted>,
}

pub fn resolve_collisions(
    mut commands: Commands,
    mut started: MessageReader<CollisionStart>,
    tunables: Res<Tunables>,
    time: Res<Time<Fixed>>,
    ragdoll: Option<Res<ActiveRagdoll>>,
    q_parts: Query<&RagdollPart>,
    q_acid: Query<(), With<AcidDrop>>,
    q_bodies: Query<(Option<&LinearVelocity>, Option<&Transform>)>,
    mut out: CombatWrites,
    // Acid drops already used up this step.
    mut consumed: Local<HashSet<Entity>>,
) {
    consumed.clear();
    let rules = &tunables.combat;

    for ev in started.read() {
        if out.state.is_dead() {
            // Drain the batch; nothing applies until respawn.
            continue;
        }

        let a = owner(ev.collider1, ev.body1);
        let b = owner(ev.collider2, ev.body2);
        let part_a = q_parts.get(a).ok().map(|p| p.kind);
        let part_b = q_parts.get(b).ok().map(|p| p.kind);

        // Rule 1: acid drop on a part.
        let acid_hit = match (q_acid.contains(a), q_acid.contains(b)) {
            (true, false) => part_b.map(|part| (a, part)),
            (false, true) => part_a.map(|part| (b, part)),
            _ => None,
        };
        if let Some((drop, part)) = acid_hit {
            if !consumed.insert(drop) {
                continue;
            }
            commands.entity(drop).try_despawn();
            let died = out.state.acid_burn(&mut out.burns, part, rules);
            debug!("Acid burn on {part}: burn {:.1}, health {}", out.burns.level(part), out.state.health());
            if let Some(report) = died {
                info!("Buddy died (acid)");
                out.died.write(Died { report });
            }
            continue;
        }

        // Rule 2: velocity-gated impact.
        let Some(part) = part_a.or(part_b) else {
            continue;
        };
        if consumed.contains(&a) || consumed.contains(&b) {
            continue;
        }

        let speed_of = |e: Entity| {
            q_bodies
                .get(e)
                .ok()
                .and_then(|(v, _)| v)
                .map_or(0.0, |v| tunables.per_step(v.0.length()))
        };
        let speed = speed_of(a) + speed_of(b);

        let Some(hit) = out.state.impact(part, speed, rules) else {
            continue;
        };
        debug!("Impact on {part} at {speed:.1}: -{} -> {}", hit.damage, out.state.health());

        if hit.reacts && out.reactions.ready(time.elapsed(), rules.reaction_cooldown) {
            let head = ragdoll
                .as_ref()
                .and_then(|r| q_bodies.get(r.head).ok())
                .and_then(|(_, tf)| tf)
                .map(|tf| tf.translation.truncate());
            match head {
                Some(head) => {
                    let text = out.rng.pick(&THOUGHTS).copied().unwrap_or(THOUGHTS[0]);
                    if let Some(event) = out.reactions.try_emit(
                        time.elapsed(),
                        rules.reaction_cooldown,
                        rules.reaction_display,
                        text,
                        head + Vec2::Y * rules.reaction_height,
                    ) {
                        out.emitted.write(ReactionEmitted(event));
                    }
                }
                None => debug!("No head to anchor a reaction bubble"),
            }
        }

        if let Some(report) = hit.died {
            info!("Buddy died (impact on {part})");
            out.died.write(Died { report });
        }
    }
}
