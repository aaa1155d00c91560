//! Spring physics for the sliding indicator.
//!
//! The motion is the closed-form solution of a damped harmonic oscillator, so
//! very stiff presets stay stable no matter how far apart frames land.

use std::time::Instant;

const REST_DISPLACEMENT: f64 = 0.001;
const REST_SPEED: f64 = 0.001;

/// Physics parameters of a spring.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringPreset {
    pub stiffness: f64,
    pub damping: f64,
    pub mass: f64,
}

impl SpringPreset {
    /// Moderate glide between segments.
    pub const NORMAL: Self = Self {
        stiffness: 150.0,
        damping: 20.0,
        mass: 1.0,
    };

    /// Stiff enough to read as a snap.
    pub const INSTANT: Self = Self {
        stiffness: 1_500_000.0,
        damping: 20_000.0,
        mass: 1.0,
    };

    pub fn for_flag(disable_animation: bool) -> Self {
        if disable_animation {
            Self::INSTANT
        } else {
            Self::NORMAL
        }
    }

    fn natural_frequency(&self) -> f64 {
        (self.stiffness / self.mass).sqrt()
    }

    fn damping_ratio(&self) -> f64 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }
}

/// Position and velocity relative to the target, `t` seconds into a flight.
fn sample(preset: SpringPreset, x0: f64, v0: f64, t: f64) -> (f64, f64) {
    let omega = preset.natural_frequency();
    let zeta = preset.damping_ratio();

    if (zeta - 1.0).abs() < 1e-6 {
        let envelope = (-omega * t).exp();
        let b = v0 + omega * x0;
        let x = (x0 + b * t) * envelope;
        let v = b * envelope - omega * x;
        (x, v)
    } else if zeta < 1.0 {
        let decay = zeta * omega;
        let omega_d = omega * (1.0 - zeta * zeta).sqrt();
        let envelope = (-decay * t).exp();
        let b = (v0 + decay * x0) / omega_d;
        let (sin, cos) = (omega_d * t).sin_cos();
        let x = envelope * (x0 * cos + b * sin);
        let v = -decay * x + envelope * omega_d * (b * cos - x0 * sin);
        (x, v)
    } else {
        let root = (zeta * zeta - 1.0).sqrt();
        let r1 = -omega * (zeta - root);
        let r2 = -omega * (zeta + root);
        let c2 = (v0 - r1 * x0) / (r2 - r1);
        let c1 = x0 - c2;
        let (e1, e2) = ((r1 * t).exp(), (r2 * t).exp());
        (c1 * e1 + c2 * e2, r1 * c1 * e1 + r2 * c2 * e2)
    }
}

#[derive(Debug, Clone, Copy)]
struct Flight {
    start: Instant,
    displacement: f64,
    velocity: f64,
    preset: SpringPreset,
}

/// A single animated scalar. A new target supersedes the one in flight and
/// keeps the current position and velocity.
#[derive(Debug, Clone)]
pub struct Spring {
    value: f64,
    velocity: f64,
    target: f64,
    flight: Option<Flight>,
}

impl Spring {
    pub fn new(value: f32) -> Self {
        Self {
            value: f64::from(value),
            velocity: 0.0,
            target: f64::from(value),
            flight: None,
        }
    }

    pub fn value(&self) -> f32 {
        self.value as f32
    }

    pub fn target(&self) -> f32 {
        self.target as f32
    }

    pub fn velocity(&self) -> f32 {
        self.velocity as f32
    }

    #[inline]
    pub fn is_animating(&self) -> bool {
        self.flight.is_some()
    }

    /// Jump to `value` and stop.
    pub fn snap_to(&mut self, value: f32) {
        self.value = f64::from(value);
        self.target = self.value;
        self.velocity = 0.0;
        self.flight = None;
    }

    pub fn retarget(&mut self, target: f32, preset: SpringPreset, now: Instant) {
        if self.flight.is_some() {
            self.tick(now);
        }

        self.target = f64::from(target);
        let displacement = self.value - self.target;

        if displacement.abs() < REST_DISPLACEMENT && self.velocity.abs() < REST_SPEED {
            self.snap_to(target);
            return;
        }

        self.flight = Some(Flight {
            start: now,
            displacement,
            velocity: self.velocity,
            preset,
        });
    }

    /// Advance to `now` and return the current value.
    pub fn tick(&mut self, now: Instant) -> f32 {
        let Some(flight) = self.flight else {
            return self.value();
        };

        let t = now.saturating_duration_since(flight.start).as_secs_f64();
        let (x, v) = sample(flight.preset, flight.displacement, flight.velocity, t);

        if x.abs() < REST_DISPLACEMENT && v.abs() < REST_SPEED {
            self.snap_to(self.target as f32);
        } else {
            self.value = self.target + x;
            self.velocity = v;
        }

        self.value()
    }
}

impl Default for Spring {
    fn default() -> Self {
        Self::new(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    const FRAME: Duration = Duration::from_millis(16);

    fn frames_to_rest(preset: SpringPreset) -> usize {
        let start = Instant::now();
        let mut spring = Spring::new(0.0);
        spring.retarget(100.0, preset, start);

        let mut frames = 0;
        let mut now = start;
        while spring.is_animating() {
            frames += 1;
            now += FRAME;
            spring.tick(now);
            assert!(frames < 10_000, "spring never settled");
        }
        frames
    }

    #[test]
    fn settles_exactly_on_target() {
        let start = Instant::now();
        let mut spring = Spring::new(0.0);
        spring.retarget(100.0, SpringPreset::NORMAL, start);
        assert!(spring.is_animating());

        spring.tick(start + Duration::from_secs(5));
        assert!(!spring.is_animating());
        assert_eq!(spring.value(), 100.0);
        assert_eq!(spring.velocity(), 0.0);
    }

    #[test]
    fn normal_preset_glides() {
        let start = Instant::now();
        let mut spring = Spring::new(0.0);
        spring.retarget(100.0, SpringPreset::NORMAL, start);

        let value = spring.tick(start + Duration::from_millis(50));
        assert!(value > 0.0 && value < 100.0, "value {value} after 50ms");
        assert!(spring.velocity() > 0.0);
    }

    #[test]
    fn instant_preset_settles_in_far_fewer_frames() {
        let normal = frames_to_rest(SpringPreset::NORMAL);
        let instant = frames_to_rest(SpringPreset::INSTANT);

        assert!(instant * 4 < normal, "instant {instant} vs normal {normal}");
    }

    #[test]
    fn instant_preset_is_nearly_there_after_one_frame() {
        let start = Instant::now();
        let mut spring = Spring::new(0.0);
        spring.retarget(100.0, SpringPreset::INSTANT, start);

        let value = spring.tick(start + FRAME);
        assert!(value > 50.0, "value {value}");
        assert!(value <= 100.0 + 1e-3);
    }

    #[test]
    fn retarget_mid_flight_keeps_position() {
        let start = Instant::now();
        let mut spring = Spring::new(0.0);
        spring.retarget(100.0, SpringPreset::NORMAL, start);

        let mid = start + Duration::from_millis(100);
        let position = spring.tick(mid);
        spring.retarget(-50.0, SpringPreset::NORMAL, mid);

        assert_eq!(spring.target(), -50.0);
        assert!((spring.tick(mid) - position).abs() < 1e-3);

        spring.tick(mid + Duration::from_secs(5));
        assert_eq!(spring.value(), -50.0);
    }

    #[test]
    fn retarget_to_current_value_does_not_animate() {
        let mut spring = Spring::new(42.0);
        spring.retarget(42.0, SpringPreset::NORMAL, Instant::now());
        assert!(!spring.is_animating());
    }

    #[test]
    fn critically_damped_preset_converges() {
        let preset = SpringPreset {
            stiffness: 100.0,
            damping: 20.0,
            mass: 1.0,
        };
        assert!(frames_to_rest(preset) > 0);
    }
}
