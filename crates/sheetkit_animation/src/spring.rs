//! Spring physics animation
//!
//! RK4-integrated spring physics for the sheet's open, close, and settle
//! motions. Supports preset configurations and custom spring parameters.

/// Configuration for a spring animation
#[derive(Clone, Copy, Debug)]
pub struct SpringConfig {
    pub stiffness: f32,
    pub damping: f32,
    pub mass: f32,
    /// Pin the value to the target the moment it would pass it, instead of
    /// oscillating around it
    pub overshoot_clamping: bool,
}

impl SpringConfig {
    /// Create a new spring configuration
    pub fn new(stiffness: f32, damping: f32, mass: f32) -> Self {
        Self {
            stiffness,
            damping,
            mass,
            overshoot_clamping: false,
        }
    }

    /// Enable overshoot clamping
    pub fn with_overshoot_clamping(mut self) -> Self {
        self.overshoot_clamping = true;
        self
    }

    /// Entrance spring tuned for iOS-native motion feel
    pub fn sheet_open_ios() -> Self {
        Self::new(190.0, 24.0, 1.0)
    }

    /// Entrance spring tuned for Android-native motion feel (slightly softer)
    pub fn sheet_open_android() -> Self {
        Self::new(140.0, 20.0, 1.0)
    }

    /// Entrance spring for the current platform
    pub fn sheet_open() -> Self {
        if cfg!(target_os = "ios") {
            Self::sheet_open_ios()
        } else {
            Self::sheet_open_android()
        }
    }

    /// Exit spring; clamped so the sheet never bounces past the hidden
    /// position
    pub fn sheet_close() -> Self {
        Self::new(160.0, 26.0, 1.0).with_overshoot_clamping()
    }

    /// Spring used to return the sheet after a released drag, with a little
    /// bounce
    pub fn settle_back() -> Self {
        Self::new(180.0, 16.0, 1.0)
    }

    /// Calculate critical damping for this spring's stiffness and mass
    pub fn critical_damping(&self) -> f32 {
        2.0 * (self.stiffness * self.mass).sqrt()
    }

    /// Check if the spring is underdamped (will oscillate)
    pub fn is_underdamped(&self) -> bool {
        self.damping < self.critical_damping()
    }

    /// Check if the spring is overdamped (slow settling, no oscillation)
    pub fn is_overdamped(&self) -> bool {
        self.damping > self.critical_damping()
    }
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self::sheet_open()
    }
}

/// A spring-based animator
#[derive(Clone, Copy, Debug)]
pub struct Spring {
    config: SpringConfig,
    value: f32,
    velocity: f32,
    target: f32,
    /// Value when the current target was set; determines the direction of
    /// travel for overshoot clamping
    origin: f32,
}

impl Spring {
    pub fn new(config: SpringConfig, initial: f32) -> Self {
        Self {
            config,
            value: initial,
            velocity: 0.0,
            target: initial,
            origin: initial,
        }
    }

    /// Create a spring with explicit value and velocity, already aimed at a
    /// target
    ///
    /// Used when retargeting an in-flight animation so motion continuity is
    /// preserved.
    pub fn with_state(config: SpringConfig, value: f32, velocity: f32, target: f32) -> Self {
        Self {
            config,
            value,
            velocity,
            target,
            origin: value,
        }
    }

    pub fn config(&self) -> SpringConfig {
        self.config
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    pub fn set_target(&mut self, target: f32) {
        self.origin = self.value;
        self.target = target;
    }

    /// Check if the spring has settled (within epsilon of target with minimal velocity)
    pub fn is_settled(&self) -> bool {
        // Being within 0.5px with velocity under 5px/s is imperceptible
        const EPSILON: f32 = 0.5;
        const VELOCITY_EPSILON: f32 = 5.0;

        (self.value - self.target).abs() < EPSILON && self.velocity.abs() < VELOCITY_EPSILON
    }

    /// Step the spring simulation using RK4 integration
    pub fn step(&mut self, dt: f32) {
        if self.is_settled() {
            self.value = self.target;
            self.velocity = 0.0;
            return;
        }

        // RK4 integration for accurate spring physics
        let k1_v = self.acceleration(self.value, self.velocity);
        let k1_x = self.velocity;

        let k2_v = self.acceleration(
            self.value + k1_x * dt * 0.5,
            self.velocity + k1_v * dt * 0.5,
        );
        let k2_x = self.velocity + k1_v * dt * 0.5;

        let k3_v = self.acceleration(
            self.value + k2_x * dt * 0.5,
            self.velocity + k2_v * dt * 0.5,
        );
        let k3_x = self.velocity + k2_v * dt * 0.5;

        let k4_v = self.acceleration(self.value + k3_x * dt, self.velocity + k3_v * dt);
        let k4_x = self.velocity + k3_v * dt;

        self.velocity += (k1_v + 2.0 * k2_v + 2.0 * k3_v + k4_v) * dt / 6.0;
        self.value += (k1_x + 2.0 * k2_x + 2.0 * k3_x + k4_x) * dt / 6.0;

        if self.config.overshoot_clamping {
            self.clamp_overshoot();
        }
    }

    /// Pin the value to the target once it crosses it in the direction of
    /// travel
    fn clamp_overshoot(&mut self) {
        let travelling_up = self.target > self.origin;
        let overshot = if travelling_up {
            self.value > self.target
        } else {
            self.value < self.target
        };
        if overshot {
            self.value = self.target;
            self.velocity = 0.0;
        }
    }

    fn acceleration(&self, x: f32, v: f32) -> f32 {
        let spring_force = -self.config.stiffness * (x - self.target);
        let damping_force = -self.config.damping * v;
        (spring_force + damping_force) / self.config.mass
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spring_settles_to_target() {
        let mut spring = Spring::new(SpringConfig::sheet_open_android(), 260.0);
        spring.set_target(0.0);

        // Simulate for 4 seconds at 60fps
        for _ in 0..240 {
            spring.step(1.0 / 60.0);
        }

        assert!(spring.is_settled());
        assert!(spring.value().abs() < 0.6);
    }

    #[test]
    fn test_spring_inherits_velocity() {
        let mut spring = Spring::new(SpringConfig::settle_back(), 0.0);
        spring.set_target(100.0);

        // Let it get some velocity
        for _ in 0..10 {
            spring.step(1.0 / 60.0);
        }

        let velocity = spring.velocity();
        assert!(velocity > 0.0);

        // Change target mid-flight - velocity should continue
        spring.set_target(50.0);
        assert_eq!(spring.velocity(), velocity);
    }

    #[test]
    fn test_spring_with_state_preserves_motion() {
        let spring = Spring::with_state(SpringConfig::sheet_close(), 120.0, 300.0, 260.0);
        assert_eq!(spring.value(), 120.0);
        assert_eq!(spring.velocity(), 300.0);
        assert_eq!(spring.target(), 260.0);
    }

    #[test]
    fn test_overshoot_clamping_never_passes_target() {
        // A bouncy config that would normally oscillate past the target
        let config = SpringConfig::new(180.0, 10.0, 1.0).with_overshoot_clamping();
        let mut spring = Spring::new(config, 0.0);
        spring.set_target(100.0);

        for _ in 0..600 {
            spring.step(1.0 / 60.0);
            assert!(spring.value() <= 100.0);
        }
        assert!(spring.is_settled());
    }

    #[test]
    fn test_overshoot_clamping_downward() {
        let config = SpringConfig::new(180.0, 10.0, 1.0).with_overshoot_clamping();
        let mut spring = Spring::new(config, 260.0);
        spring.set_target(0.0);

        for _ in 0..600 {
            spring.step(1.0 / 60.0);
            assert!(spring.value() >= 0.0);
        }
        assert!(spring.is_settled());
    }

    #[test]
    fn test_spring_presets() {
        // Entrance and settle-back springs are underdamped for natural feel
        assert!(SpringConfig::sheet_open_ios().is_underdamped());
        assert!(SpringConfig::sheet_open_android().is_underdamped());
        assert!(SpringConfig::settle_back().is_underdamped());

        // The iOS entrance is stiffer than Android
        assert!(
            SpringConfig::sheet_open_ios().stiffness > SpringConfig::sheet_open_android().stiffness
        );

        // Exit spring clamps overshoot
        assert!(SpringConfig::sheet_close().overshoot_clamping);
    }

    #[test]
    fn test_spring_rk4_stability() {
        // RK4 integration remains stable even with large time steps
        let mut spring = Spring::new(SpringConfig::sheet_open_android(), 0.0);
        spring.set_target(1000.0);

        for _ in 0..100 {
            spring.step(0.1);
            assert!(spring.value() < 2000.0);
            assert!(spring.value() > -500.0);
        }
    }
}
