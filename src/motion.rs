//! Scroll-driven reveal choreography.
//!
//! Nothing in here touches the DOM: scroll offsets and frame timestamps go
//! in, visibility flags and sampled styles come out. The components under
//! `app` wire these to the browser.

pub mod choreography;
pub mod counter;
pub mod presenter;
pub mod scroll;
pub mod section;
pub mod transition;

use serde::{Deserialize, Serialize};

use counter::{COUNTER_DURATION_MS, COUNTER_STEPS};
use scroll::SCROLL_THROTTLE_MS;

/// Tunables that may be overridden from the `settings` object of the
/// content document.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MotionSettings {
    pub scroll_throttle_ms: f64,
    pub counter_duration_ms: f64,
    pub counter_steps: u32,
    /// Rebuild section thresholds when the window is resized. Off by
    /// default: thresholds are taken from the viewport at mount.
    pub recompute_on_resize: bool,
}

impl Default for MotionSettings {
    fn default() -> Self {
        Self {
            scroll_throttle_ms: SCROLL_THROTTLE_MS,
            counter_duration_ms: COUNTER_DURATION_MS,
            counter_steps: COUNTER_STEPS,
            recompute_on_resize: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_defaults_fill_gaps() {
        let settings: MotionSettings =
            serde_json::from_str(r#"{ "recompute_on_resize": true }"#).unwrap();
        assert!(settings.recompute_on_resize);
        assert_eq!(settings.scroll_throttle_ms, 16.0);
        assert_eq!(settings.counter_duration_ms, 800.0);
        assert_eq!(settings.counter_steps, 30);

        let settings: MotionSettings = serde_json::from_str("{}").unwrap();
        assert_eq!(settings, MotionSettings::default());
    }
}
