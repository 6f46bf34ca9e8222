//! Reaction bubbles: rate-limited lines of dialogue after hard hits.

use std::time::Duration;

use bevy::prelude::*;

pub const THOUGHTS: [&str; 7] = [
    "Ouch!",
    "Please Stop!",
    "Oh my god!!",
    "Why me?",
    "That hurts!",
    "Mercy!",
    "I'm just cardboard!",
];

#[derive(Debug, Clone, PartialEq)]
pub struct ReactionEvent {
    pub id: u64,
    pub text: String,
    pub position: Vec2,
    pub visible: bool,
}

/// Pushed to the presentation layer whenever a new bubble appears.
#[derive(Message, Debug, Clone)]
pub struct ReactionEmitted(pub ReactionEvent);

/// Cooldown bookkeeping plus the bubble currently on screen.
#[derive(Resource, Debug, Default)]
pub struct Reactions {
    last_emitted: Option<Duration>,
    next_id: u64,
    current: Option<ReactionEvent>,
    remaining: Duration,
}

impl Reactions {
    pub fn current(&self) -> Option<&ReactionEvent> {
        self.current.as_ref()
    }

    #[inline]
    pub fn ready(&self, now: Duration, cooldown: Duration) -> bool {
        self.last_emitted
            .is_none_or(|last| now.saturating_sub(last) >= cooldown)
    }

    /// Start a bubble at `now` unless the previous one is younger than `cooldown`.
    pub(super) fn try_emit(
        &mut self,
        now: Duration,
        cooldown: Duration,
        display: Duration,
        text: &str,
        position: Vec2,
    ) -> Option<ReactionEvent> {
        if !self.ready(now, cooldown) {
            return None;
        }
        let event = ReactionEvent {
            id: self.next_id,
            text: text.to_string(),
            position,
            visible: true,
        };
        self.next_id += 1;
        self.last_emitted = Some(now);
        self.current = Some(event.clone());
        self.remaining = display;
        Some(event)
    }

    /// Count the on-screen bubble down; it disappears at zero.
    pub(super) fn tick(&mut self, dt: Duration) {
        if self.current.is_none() {
            return;
        }
        self.remaining = self.remaining.saturating_sub(dt);
        if self.remaining.is_zero() {
            self.current = None;
        }
    }
}

pub fn expire_reactions(time: Res<Time<Fixed>>, mut reactions: ResMut<Reactions>) {
    reactions.tick(time.delta());
}
