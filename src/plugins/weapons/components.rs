use bevy::prelude::*;

/// Weapon modes. `Hand` drags parts around; the others damage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Weapon {
    Hand,
    #[default]
    Bat,
    Gun,
    Acid,
}

#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelectedWeapon(pub Weapon);

/// Pointer position in world space. `None` while the cursor is outside the window.
#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct Pointer {
    pub world: Option<Vec2>,
}

/// Animation-only weapon state read by the presentation layer.
#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct WeaponCosmetics {
    /// 1.0 right after a bat swing, decays to 0.
    pub swing: f32,
    /// Gun angle from the pointer toward the torso; 0 without a torso.
    pub aim_angle: f32,
}

/// Part currently held by the hand.
#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct Grab {
    pub target: Option<Entity>,
}

#[derive(Component, Debug, Clone, Copy)]
pub struct Projectile;

/// Single-use corrosive particle: consumed by the first part it touches.
#[derive(Component, Debug, Clone, Copy)]
pub struct AcidDrop;

/// Countdown to removal, ticked once per fixed step.
#[derive(Component, Deref, DerefMut)]
pub struct Lifetime(pub Timer);

impl Lifetime {
    pub fn new(ttl: std::time::Duration) -> Self {
        Self(Timer::new(ttl, TimerMode::Once))
    }
}
