use super::choreography::{ElementMotion, ElementStyle};

/// Two-state, edge-triggered latch behind every entrance animation.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum RevealTrigger {
    #[default]
    Pending,
    Fired {
        at_ms: f64,
    },
}

impl RevealTrigger {
    /// Feed the latest visibility flag. Returns `true` only for the call
    /// that moves the trigger from pending to fired; repeated `true`s and
    /// any `false` leave it untouched.
    pub fn on_visibility_change(&mut self, is_visible: bool, now_ms: f64) -> bool {
        match *self {
            RevealTrigger::Pending if is_visible => {
                *self = RevealTrigger::Fired { at_ms: now_ms };
                true
            }
            _ => false,
        }
    }

    pub fn fired_at(&self) -> Option<f64> {
        match self {
            RevealTrigger::Pending => None,
            RevealTrigger::Fired { at_ms } => Some(*at_ms),
        }
    }

    pub fn is_fired(&self) -> bool {
        self.fired_at().is_some()
    }
}

/// Sample one element against a trigger; hidden until the trigger fires.
pub fn sample(motion: &ElementMotion, trigger: RevealTrigger, now_ms: f64) -> ElementStyle {
    match trigger.fired_at() {
        None => motion.hidden(),
        Some(at) => motion.at(now_ms - at),
    }
}
