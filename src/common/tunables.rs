//! Tunable gameplay constants.
//!
//! Speeds and angular velocities are "per step" values (world units per fixed step), which is
//! how the damage thresholds and the balance gains were tuned. `per_step` / `per_second`
//! convert to and from the per-second values avian stores.

use std::time::Duration;

use bevy::prelude::*;

#[derive(Resource, Debug, Clone)]
pub struct Tunables {
    pub pixels_per_meter: f32,
    pub steps_per_second: f64,
    pub gravity: f32,
    pub spawn_point: Vec2,
    pub respawn_point: Vec2,
    /// Compliance of a joint with stiffness `s` is `(1 / s - 1) * joint_compliance_scale`.
    pub joint_compliance_scale: f32,
    pub balance: BalanceTunables,
    pub combat: CombatTunables,
    pub weapons: WeaponTunables,
    pub respawn_delay: Duration,
    pub notify_interval: Duration,
}

#[derive(Debug, Clone)]
pub struct BalanceTunables {
    pub kp: f32,
    pub kd: f32,
    /// Above this angular speed (rad/step) the torso is left alone.
    pub max_angular_speed: f32,
}

#[derive(Debug, Clone)]
pub struct CombatTunables {
    pub max_health: u32,
    pub impact_speed_threshold: f32,
    pub impact_damage_factor: f32,
    pub reaction_speed_threshold: f32,
    pub reaction_cooldown: Duration,
    pub reaction_display: Duration,
    pub reaction_height: f32,
    pub acid_damage: u32,
    pub burn_step: f32,
    pub burn_cap: f32,
    pub melee_radius: f32,
    pub melee_damage: u32,
    /// Horizontal half-spread and upward component of the melee kick, units/s.
    pub melee_kick: Vec2,
    pub death_report_len: usize,
}

#[derive(Debug, Clone)]
pub struct WeaponTunables {
    pub bullet_offset: f32,
    /// Units per step.
    pub bullet_speed: f32,
    pub bullet_radius: f32,
    pub bullet_ttl: Duration,
    pub acid_drops: usize,
    pub acid_jitter: f32,
    pub acid_radius: f32,
    pub acid_ttl: Duration,
    pub swing_decay: f32,
    pub grab_radius: f32,
    pub grab_stiffness: f32,
}

impl Tunables {
    /// Convert a per-second magnitude (avian velocity) into units per step.
    #[inline]
    pub fn per_step(&self, per_second: f32) -> f32 {
        per_second / self.steps_per_second as f32
    }

    /// Convert a per-step magnitude back into units per second.
    #[inline]
    pub fn per_second(&self, per_step: f32) -> f32 {
        per_step * self.steps_per_second as f32
    }

    #[inline]
    pub fn joint_compliance(&self, stiffness: f32) -> f32 {
        let s = stiffness.clamp(0.01, 1.0);
        (1.0 / s - 1.0) * self.joint_compliance_scale
    }
}

impl Default for Tunables {
    fn default() -> Self {
        Self {
            pixels_per_meter: 20.0,
            steps_per_second: 60.0,
            gravity: 1000.0,
            spawn_point: Vec2::new(0.0, -140.0),
            respawn_point: Vec2::new(0.0, -40.0),
            joint_compliance_scale: 1.0e-5,
            balance: BalanceTunables {
                kp: 0.08,
                kd: 0.15,
                max_angular_speed: 0.5,
            },
            combat: CombatTunables {
                max_health: 1000,
                impact_speed_threshold: 15.0,
                impact_damage_factor: 0.3,
                reaction_speed_threshold: 20.0,
                reaction_cooldown: Duration::from_millis(1000),
                reaction_display: Duration::from_millis(1000),
                reaction_height: 60.0,
                acid_damage: 15,
                burn_step: 0.1,
                burn_cap: 0.8,
                melee_radius: 80.0,
                melee_damage: 50,
                melee_kick: Vec2::new(90.0, 180.0),
                death_report_len: 10,
            },
            weapons: WeaponTunables {
                bullet_offset: 40.0,
                bullet_speed: 45.0,
                bullet_radius: 5.0,
                bullet_ttl: Duration::from_millis(2000),
                acid_drops: 5,
                acid_jitter: 5.0,
                acid_radius: 4.0,
                acid_ttl: Duration::from_millis(3000),
                swing_decay: 0.1,
                grab_radius: 80.0,
                grab_stiffness: 0.2,
            },
            respawn_delay: Duration::from_millis(2000),
            notify_interval: Duration::from_secs(60),
        }
    }
}
