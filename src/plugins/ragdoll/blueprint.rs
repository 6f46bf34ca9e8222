//! Pure description of the assembly: part shapes, materials, placements and joints.
//!
//! Nothing here touches the ECS. The spawner turns a complete blueprint into entities in one
//! command batch, so an assembly is either fully present or absent.
//!
//! Offsets are relative to the torso centre, y-up.
//!
//! ```text
//!              (head)
//!              ||   <- two neck joints
//!   [ua]-o  ( torso )  o-[ua]     o = shoulder
//!    (f)       || ||      (f)     f = fist / forearm
//!             [lb] [lb]           lb = invisible leg bone (two hip joints each)
//!             [ft] [ft]           ft = foot (ankle joint)
//! ```

use bevy::prelude::*;

use super::components::{PartKind, Side};

pub const HEAD_RADIUS: f32 = 25.0;
pub const TORSO_RADIUS: f32 = 40.0;
pub const ARM_SIZE: Vec2 = Vec2::new(15.0, 35.0);
pub const FIST_RADIUS: f32 = 12.0;
pub const LEG_SIZE: Vec2 = Vec2::new(14.0, 60.0);
pub const FOOT_SIZE: Vec2 = Vec2::new(28.0, 16.0);

/// Arms are deliberately floppy compared to hips and ankles.
pub const LIMB_STIFFNESS: f32 = 0.15;
pub const NECK_STIFFNESS: f32 = 0.7;
pub const HIP_STIFFNESS: f32 = 0.6;
pub const ANKLE_STIFFNESS: f32 = 0.8;
pub const JOINT_DAMPING: f32 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Circle { radius: f32 },
    Box { size: Vec2 },
}

impl Shape {
    /// Axis-aligned extent at rest, used for sprites.
    pub fn extent(self) -> Vec2 {
        match self {
            Shape::Circle { radius } => Vec2::splat(radius * 2.0),
            Shape::Box { size } => size,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    pub friction: f32,
    pub restitution: f32,
    pub density: f32,
}

impl Material {
    pub const BODY: Material = Material {
        friction: 0.5,
        restitution: 0.2,
        density: 0.01,
    };
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Tint {
    Skin,
    Shirt,
    Shoes,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PartSpec {
    pub kind: PartKind,
    pub shape: Shape,
    pub offset: Vec2,
    pub material: Material,
    pub tint: Tint,
    pub visible: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JointSpec {
    pub name: &'static str,
    pub a: PartKind,
    pub b: PartKind,
    pub anchor_a: Vec2,
    pub anchor_b: Vec2,
    pub stiffness: f32,
    pub damping: f32,
    pub rest_length: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RagdollBlueprint {
    pub parts: Vec<PartSpec>,
    pub joints: Vec<JointSpec>,
}

impl RagdollBlueprint {
    /// The standard humanoid: 10 parts, 12 joints.
    pub fn buddy() -> Self {
        let mut parts = vec![
            PartSpec {
                kind: PartKind::Head,
                shape: Shape::Circle { radius: HEAD_RADIUS },
                offset: Vec2::new(0.0, 70.0),
                material: Material::BODY,
                tint: Tint::Skin,
                visible: true,
            },
            PartSpec {
                kind: PartKind::Torso,
                shape: Shape::Circle { radius: TORSO_RADIUS },
                offset: Vec2::ZERO,
                material: Material::BODY,
                tint: Tint::Shirt,
                visible: true,
            },
        ];

        // Dual neck joints resist head rotation relative to the torso.
        let mut joints: Vec<JointSpec> = Side::BOTH
            .iter()
            .map(|side| JointSpec {
                name: match side {
                    Side::Left => "NeckLeft",
                    Side::Right => "NeckRight",
                },
                a: PartKind::Torso,
                b: PartKind::Head,
                anchor_a: Vec2::new(8.0 * side.sign(), TORSO_RADIUS - 5.0),
                anchor_b: Vec2::new(8.0 * side.sign(), -(HEAD_RADIUS - 5.0)),
                stiffness: NECK_STIFFNESS,
                damping: JOINT_DAMPING,
                rest_length: 0.0,
            })
            .collect();

        for side in Side::BOTH {
            let (arm_parts, arm_joints) = arm(side);
            parts.extend(arm_parts);
            joints.extend(arm_joints);
        }
        for side in Side::BOTH {
            let (leg_parts, leg_joints) = leg(side);
            parts.extend(leg_parts);
            joints.extend(leg_joints);
        }

        Self { parts, joints }
    }

    pub fn part(&self, kind: PartKind) -> Option<&PartSpec> {
        self.parts.iter().find(|p| p.kind == kind)
    }

    /// World position of a part when the torso sits at `center`.
    pub fn position_of(&self, kind: PartKind, center: Vec2) -> Option<Vec2> {
        self.part(kind).map(|p| center + p.offset)
    }
}

fn arm(side: Side) -> ([PartSpec; 2], [JointSpec; 2]) {
    let s = side.sign();
    let x = (TORSO_RADIUS + 10.0) * s;
    let half_h = ARM_SIZE.y * 0.5;

    let upper = PartSpec {
        kind: PartKind::UpperArm(side),
        shape: Shape::Box { size: ARM_SIZE },
        offset: Vec2::new(x, 20.0),
        material: Material::BODY,
        tint: Tint::Skin,
        visible: true,
    };
    let fist = PartSpec {
        kind: PartKind::Forearm(side),
        shape: Shape::Circle { radius: FIST_RADIUS },
        offset: Vec2::new(x, -10.0),
        material: Material::BODY,
        tint: Tint::Skin,
        visible: true,
    };

    let shoulder = JointSpec {
        name: "Shoulder",
        a: PartKind::Torso,
        b: upper.kind,
        anchor_a: Vec2::new(30.0 * s, 10.0),
        anchor_b: Vec2::new(0.0, half_h - 5.0),
        stiffness: LIMB_STIFFNESS,
        damping: JOINT_DAMPING,
        rest_length: 0.0,
    };
    let elbow = JointSpec {
        name: "Elbow",
        a: upper.kind,
        b: fist.kind,
        anchor_a: Vec2::new(0.0, -(half_h - 5.0)),
        anchor_b: Vec2::new(0.0, 5.0),
        stiffness: LIMB_STIFFNESS,
        damping: JOINT_DAMPING,
        rest_length: 10.0,
    };

    ([upper, fist], [shoulder, elbow])
}

fn leg(side: Side) -> ([PartSpec; 2], [JointSpec; 3]) {
    let s = side.sign();
    let x = 20.0 * s;
    let half_len = LEG_SIZE.y * 0.5;
    let hip_y = -TORSO_RADIUS * 0.8;

    // Heavy and hidden: lowers the centre of mass.
    let bone = PartSpec {
        kind: PartKind::LegBone(side),
        shape: Shape::Box { size: LEG_SIZE },
        offset: Vec2::new(x, -60.0),
        material: Material {
            density: 0.04,
            ..Material::BODY
        },
        tint: Tint::Skin,
        visible: false,
    };
    // A box for flat ground contact; drawn round. High friction stops sliding.
    let foot = PartSpec {
        kind: PartKind::Foot(side),
        shape: Shape::Box { size: FOOT_SIZE },
        offset: Vec2::new(x, -60.0 - half_len - 5.0),
        material: Material {
            friction: 1.0,
            density: 0.1,
            ..Material::BODY
        },
        tint: Tint::Shoes,
        visible: true,
    };

    // Two hip joints spaced apart act as a quasi-rigid hip; a single point joint would let the
    // leg swing freely and the body could not stand.
    let hip = |name: &'static str, lateral: f32| JointSpec {
        name,
        a: PartKind::Torso,
        b: bone.kind,
        anchor_a: Vec2::new(x + 8.0 * lateral, hip_y),
        anchor_b: Vec2::new(7.0 * lateral, half_len),
        stiffness: HIP_STIFFNESS,
        damping: JOINT_DAMPING,
        rest_length: 0.0,
    };
    let ankle = JointSpec {
        name: "Ankle",
        a: bone.kind,
        b: foot.kind,
        anchor_a: Vec2::new(0.0, -half_len),
        anchor_b: Vec2::new(0.0, 5.0),
        stiffness: ANKLE_STIFFNESS,
        damping: JOINT_DAMPING,
        rest_length: 0.0,
    };

    ([bone, foot], [hip("HipInner", -1.0), hip("HipOuter", 1.0), ankle])
}
