use std::fmt;

use bevy::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub const BOTH: [Side; 2] = [Side::Left, Side::Right];

    /// -1 for left, +1 for right.
    #[inline]
    pub fn sign(self) -> f32 {
        match self {
            Side::Left => -1.0,
            Side::Right => 1.0,
        }
    }
}

/// Closed set of body parts; also the stable key for per-part state (burn levels).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PartKind {
    Head,
    Torso,
    UpperArm(Side),
    Forearm(Side),
    LegBone(Side),
    Foot(Side),
}

impl PartKind {
    pub const ALL: [PartKind; 10] = [
        PartKind::Head,
        PartKind::Torso,
        PartKind::UpperArm(Side::Left),
        PartKind::UpperArm(Side::Right),
        PartKind::Forearm(Side::Left),
        PartKind::Forearm(Side::Right),
        PartKind::LegBone(Side::Left),
        PartKind::LegBone(Side::Right),
        PartKind::Foot(Side::Left),
        PartKind::Foot(Side::Right),
    ];
}

impl fmt::Display for PartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (side, name) = match self {
            PartKind::Head => (None, "head"),
            PartKind::Torso => (None, "torso"),
            PartKind::UpperArm(s) => (Some(s), "upper arm"),
            PartKind::Forearm(s) => (Some(s), "forearm"),
            PartKind::LegBone(s) => (Some(s), "leg"),
            PartKind::Foot(s) => (Some(s), "foot"),
        };
        match side {
            Some(Side::Left) => write!(f, "left {name}"),
            Some(Side::Right) => write!(f, "right {name}"),
            None => f.write_str(name),
        }
    }
}

/// Identifies one assembly instance. Every part and joint of an assembly carries the same id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RagdollId(pub u32);

#[derive(Component, Debug, Clone, Copy)]
pub struct RagdollPart {
    pub kind: PartKind,
    pub ragdoll: RagdollId,
}

#[derive(Component, Debug, Clone, Copy)]
pub struct RagdollJoint {
    pub ragdoll: RagdollId,
}

/// Unburned sprite colour, used to derive the burn tint.
#[derive(Component, Debug, Clone, Copy)]
pub struct PartLook {
    pub base: Color,
}

/// Hands out a fresh `RagdollId` per assembly.
#[derive(Resource, Debug, Default)]
pub struct RagdollIds {
    next: u32,
}

impl RagdollIds {
    pub fn next_id(&mut self) -> RagdollId {
        let id = RagdollId(self.next);
        self.next = self.next.wrapping_add(1);
        id
    }
}

/// Handles to the live assembly.
///
/// Present only while an assembly exists in the world; respawn replaces it.
#[derive(Resource, Debug, Clone)]
pub struct ActiveRagdoll {
    pub id: RagdollId,
    pub torso: Entity,
    pub head: Entity,
    pub parts: Vec<Entity>,
    pub joints: Vec<Entity>,
}
