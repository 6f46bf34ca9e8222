//! Direct bat strikes. Not collision driven: the hit is guaranteed once a part is in reach.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::common::{rng::GameRng, tunables::Tunables};
use crate::plugins::ragdoll::RagdollPart;
use crate::plugins::world::Environment;

use super::messages::{Died, MeleeStrike};
use super::state::CombatState;

/// Closest candidate strictly within `radius` of `point`.
pub fn nearest_within<T: Copy>(
    point: Vec2,
    radius: f32,
    candidates: impl IntoIterator<Item = (T, Vec2)>,
) -> Option<T> {
    let r2 = radius * radius;
    candidates
        .into_iter()
        .map(|(item, pos)| (item, pos.distance_squared(point)))
        .filter(|&(_, d2)| d2 < r2)
        .min_by(|x, y| x.1.total_cmp(&y.1))
        .map(|(item, _)| item)
}

pub fn resolve_melee_strikes(
    mut strikes: MessageReader<MeleeStrike>,
    tunables: Res<Tunables>,
    mut state: ResMut<CombatState>,
    mut rng: ResMut<GameRng>,
    // Static arena bodies never qualify as a target.
    mut q_parts: Query<(Entity, &RagdollPart, &Transform, &mut LinearVelocity), Without<Environment>>,
    mut died: MessageWriter<Died>,
) {
    let rules = &tunables.combat;

    for strike in strikes.read() {
        if state.is_dead() {
            continue;
        }

        let candidates = q_parts
            .iter()
            .map(|(e, _, tf, _)| (e, tf.translation.truncate()));
        let Some(target) = nearest_within(strike.point, rules.melee_radius, candidates) else {
            debug!("Bat swing at {:?} hit nothing", strike.point);
            continue;
        };
        let Ok((_, part, _, mut vel)) = q_parts.get_mut(target) else {
            continue;
        };

        vel.0 += Vec2::new(rng.spread(rules.melee_kick.x), rules.melee_kick.y);
        let part = part.kind;

        let report = state.melee_strike(rules);
        debug!("Bat hit {part}: health {}", state.health());
        if let Some(report) = report {
            info!("Buddy died (bat)");
            died.write(Died { report });
        }
    }
}
