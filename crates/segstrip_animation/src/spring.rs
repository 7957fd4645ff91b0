//! Damped spring integration
//!
//! A spring animates a single scalar toward a target. The indicator uses one
//! spring on its x origin; width/height changes are applied directly by
//! relayout. Integration is classic RK4 on the (position, velocity) pair.

/// Spring tuning parameters
#[derive(Clone, Copy, Debug)]
pub struct SpringConfig {
    /// Spring stiffness (restoring force per unit displacement)
    pub stiffness: f32,
    /// Damping coefficient (force per unit velocity)
    pub damping: f32,
    /// Mass of the animated value
    pub mass: f32,
    /// Displacement threshold below which the spring counts as settled
    pub rest_delta: f32,
    /// Velocity threshold below which the spring counts as settled
    pub rest_speed: f32,
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self::gentle()
    }
}

impl SpringConfig {
    /// Soft, slightly underdamped motion
    pub fn gentle() -> Self {
        Self {
            stiffness: 120.0,
            damping: 14.0,
            mass: 1.0,
            rest_delta: 0.001,
            rest_speed: 0.001,
        }
    }

    /// Fast motion with minimal overshoot
    pub fn snappy() -> Self {
        Self {
            stiffness: 500.0,
            damping: 30.0,
            mass: 1.0,
            rest_delta: 0.001,
            rest_speed: 0.001,
        }
    }

    /// Tuned for the selection indicator: pixel-space values settling in
    /// roughly 0.3 seconds with a spring-damped tail.
    pub fn indicator() -> Self {
        Self {
            stiffness: 220.0,
            damping: 26.0,
            mass: 1.0,
            rest_delta: 0.1,
            rest_speed: 0.1,
        }
    }
}

/// A damped spring animating a scalar value toward a target
pub struct Spring {
    config: SpringConfig,
    value: f32,
    velocity: f32,
    target: f32,
}

impl Spring {
    /// Create a spring already at rest at `value`
    pub fn new(config: SpringConfig, value: f32) -> Self {
        Self {
            config,
            value,
            velocity: 0.0,
            target: value,
        }
    }

    /// Current animated value
    pub fn value(&self) -> f32 {
        self.value
    }

    /// Current velocity
    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    /// Current target
    pub fn target(&self) -> f32 {
        self.target
    }

    /// Redirect the spring toward a new target. Velocity is inherited, so a
    /// retarget mid-flight bends the motion instead of restarting it.
    pub fn set_target(&mut self, target: f32) {
        if (target - self.target).abs() > f32::EPSILON {
            tracing::trace!(from = self.target, to = target, "spring retargeted");
        }
        self.target = target;
    }

    /// Jump to a value with no animation (used when layout rebuilds geometry)
    pub fn snap_to(&mut self, value: f32) {
        self.value = value;
        self.target = value;
        self.velocity = 0.0;
    }

    /// Whether the spring has effectively reached its target
    pub fn is_settled(&self) -> bool {
        (self.value - self.target).abs() < self.config.rest_delta
            && self.velocity.abs() < self.config.rest_speed
    }

    /// Advance the spring by `dt` seconds using RK4 integration.
    ///
    /// Snaps exactly to the target once within the rest thresholds, so
    /// downstream geometry comparisons see the true final value.
    pub fn step(&mut self, dt: f32) {
        if dt <= 0.0 || self.is_settled() {
            return;
        }

        let SpringConfig {
            stiffness,
            damping,
            mass,
            ..
        } = self.config;
        let target = self.target;
        let accel =
            move |x: f32, v: f32| -> f32 { (-stiffness * (x - target) - damping * v) / mass };

        let (x0, v0) = (self.value, self.velocity);

        let k1x = v0;
        let k1v = accel(x0, v0);

        let k2x = v0 + 0.5 * dt * k1v;
        let k2v = accel(x0 + 0.5 * dt * k1x, v0 + 0.5 * dt * k1v);

        let k3x = v0 + 0.5 * dt * k2v;
        let k3v = accel(x0 + 0.5 * dt * k2x, v0 + 0.5 * dt * k2v);

        let k4x = v0 + dt * k3v;
        let k4v = accel(x0 + dt * k3x, v0 + dt * k3v);

        self.value = x0 + (dt / 6.0) * (k1x + 2.0 * k2x + 2.0 * k3x + k4x);
        self.velocity = v0 + (dt / 6.0) * (k1v + 2.0 * k2v + 2.0 * k3v + k4v);

        if self.is_settled() {
            self.value = self.target;
            self.velocity = 0.0;
        }
    }
}
