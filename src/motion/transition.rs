//! Time-based interpolation for the entrance animations.
//!
//! Every curve here is a pure function of elapsed milliseconds, so the
//! browser frame clock and the unit tests sample them the same way.

use serde::{Deserialize, Serialize};

/// Fraction of the starting displacement below which a spring counts as at rest.
const REST_FRACTION: f64 = 0.001;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    Linear,
    #[default]
    EaseInOutQuad,
}

impl Easing {
    pub fn apply(self, progress: f64) -> f64 {
        let p = progress.clamp(0.0, 1.0);
        match self {
            Easing::Linear => p,
            Easing::EaseInOutQuad => {
                if p < 0.5 {
                    2.0 * p * p
                } else {
                    1.0 - (-2.0 * p + 2.0).powi(2) / 2.0
                }
            }
        }
    }
}

/// Damped harmonic oscillator released from rest.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringConfig {
    pub damping: f64,
    pub stiffness: f64,
    pub mass: f64,
}

impl SpringConfig {
    pub const fn new(damping: f64, stiffness: f64) -> Self {
        Self {
            damping,
            stiffness,
            mass: 1.0,
        }
    }

    fn natural_frequency(&self) -> f64 {
        (self.stiffness / self.mass).sqrt()
    }

    fn damping_ratio(&self) -> f64 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }

    /// Remaining displacement after `secs`, for a unit start displacement.
    fn unit_displacement(&self, secs: f64) -> f64 {
        let omega = self.natural_frequency();
        let zeta = self.damping_ratio();
        if (zeta - 1.0).abs() < 1e-6 {
            (-omega * secs).exp() * (1.0 + omega * secs)
        } else if zeta < 1.0 {
            let damped = omega * (1.0 - zeta * zeta).sqrt();
            (-zeta * omega * secs).exp()
                * ((damped * secs).cos() + (zeta * omega / damped) * (damped * secs).sin())
        } else {
            let root = (zeta * zeta - 1.0).sqrt();
            let slow = -omega * (zeta - root);
            let fast = -omega * (zeta + root);
            let a = fast / (fast - slow);
            let b = -slow / (fast - slow);
            a * (slow * secs).exp() + b * (fast * secs).exp()
        }
    }

    /// Milliseconds until the decay envelope drops under [`REST_FRACTION`].
    fn settle_ms(&self) -> f64 {
        let omega = self.natural_frequency();
        let zeta = self.damping_ratio();
        let secs = if (zeta - 1.0).abs() < 1e-6 {
            // (1 + x) e^-x <= 1.22 e^(-x/2)
            (1.22 / REST_FRACTION).ln() / (omega / 2.0)
        } else if zeta < 1.0 {
            let amplitude = 1.0 / (1.0 - zeta * zeta).sqrt();
            (amplitude / REST_FRACTION).ln() / (zeta * omega)
        } else {
            let root = (zeta * zeta - 1.0).sqrt();
            let slow = omega * (zeta - root);
            let fast = omega * (zeta + root);
            let amplitude = fast / (fast - slow);
            (amplitude / REST_FRACTION).ln() / slow
        };
        secs * 1000.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Transition {
    Timing { duration_ms: f64, easing: Easing },
    Spring(SpringConfig),
}

impl Transition {
    pub const fn timing(duration_ms: f64) -> Self {
        Self::Timing {
            duration_ms,
            easing: Easing::EaseInOutQuad,
        }
    }

    pub const fn spring(damping: f64, stiffness: f64) -> Self {
        Self::Spring(SpringConfig::new(damping, stiffness))
    }

    /// Fraction of the way from start to target. Springs may exceed 1.0
    /// briefly while overshooting.
    pub fn progress(&self, elapsed_ms: f64) -> f64 {
        if elapsed_ms <= 0.0 {
            return 0.0;
        }
        if elapsed_ms >= self.duration_ms() {
            return 1.0;
        }
        match self {
            Transition::Timing {
                duration_ms,
                easing,
            } => easing.apply(elapsed_ms / duration_ms),
            Transition::Spring(config) => 1.0 - config.unit_displacement(elapsed_ms / 1000.0),
        }
    }

    /// Time after which the transition reports exactly its target.
    pub fn duration_ms(&self) -> f64 {
        match self {
            Transition::Timing { duration_ms, .. } => duration_ms.max(0.0),
            Transition::Spring(config) => config.settle_ms(),
        }
    }
}

/// One animated scalar: a start value, a target and how to get there.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Track {
    pub from: f64,
    pub to: f64,
    pub transition: Transition,
}

impl Track {
    pub const fn new(from: f64, to: f64, transition: Transition) -> Self {
        Self {
            from,
            to,
            transition,
        }
    }

    pub fn sample(&self, elapsed_ms: f64) -> f64 {
        let progress = self.transition.progress(elapsed_ms);
        if progress >= 1.0 && elapsed_ms >= self.transition.duration_ms() {
            return self.to;
        }
        self.from + (self.to - self.from) * progress
    }

    pub fn is_settled(&self, elapsed_ms: f64) -> bool {
        elapsed_ms >= self.transition.duration_ms()
    }
}

/// Endless back-and-forth between `rest` and `peak`, starting at `rest`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pulse {
    pub rest: f64,
    pub peak: f64,
    pub half_period_ms: f64,
    pub easing: Easing,
}

impl Pulse {
    pub const fn new(rest: f64, peak: f64, half_period_ms: f64) -> Self {
        Self {
            rest,
            peak,
            half_period_ms,
            easing: Easing::EaseInOutQuad,
        }
    }

    pub fn sample(&self, elapsed_ms: f64) -> f64 {
        if elapsed_ms <= 0.0 || self.half_period_ms <= 0.0 {
            return self.rest;
        }
        let phase = elapsed_ms % (2.0 * self.half_period_ms);
        let (from, to, t) = if phase < self.half_period_ms {
            (self.rest, self.peak, phase)
        } else {
            (self.peak, self.rest, phase - self.half_period_ms)
        };
        from + (to - from) * self.easing.apply(t / self.half_period_ms)
    }
}
