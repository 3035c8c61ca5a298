/// Minimum spacing between two scroll offsets forwarded downstream, ~60/s.
pub const SCROLL_THROTTLE_MS: f64 = 16.0;

/// Leading-edge throttle that remembers the last swallowed value so the
/// final position of a scroll burst is never lost.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Throttle {
    interval_ms: f64,
    last_emit_ms: Option<f64>,
    pending: Option<f64>,
}

impl Throttle {
    pub fn new(interval_ms: f64) -> Self {
        Self {
            interval_ms: interval_ms.max(0.0),
            last_emit_ms: None,
            pending: None,
        }
    }

    pub fn interval_ms(&self) -> f64 {
        self.interval_ms
    }

    fn is_open(&self, now_ms: f64) -> bool {
        self.last_emit_ms
            .map_or(true, |last| now_ms - last >= self.interval_ms || now_ms < last)
    }

    /// Offer a value. Returns it when it may go out now, otherwise parks it.
    pub fn offer(&mut self, value: f64, now_ms: f64) -> Option<f64> {
        if self.is_open(now_ms) {
            self.last_emit_ms = Some(now_ms);
            self.pending = None;
            Some(value)
        } else {
            self.pending = Some(value);
            None
        }
    }

    /// Release the parked value once the interval has passed.
    pub fn flush(&mut self, now_ms: f64) -> Option<f64> {
        if self.pending.is_some() && self.is_open(now_ms) {
            self.last_emit_ms = Some(now_ms);
            return self.pending.take();
        }
        None
    }

    /// Milliseconds until a parked value can be flushed.
    pub fn wait_ms(&self, now_ms: f64) -> Option<f64> {
        self.pending?;
        let last = self.last_emit_ms?;
        Some((self.interval_ms - (now_ms - last)).max(0.0))
    }
}

/// Bookkeeping of the page's scroll container: the live offset, the
/// throttle in front of the visibility tracker and where the contact
/// section sits.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollHost {
    offset: f64,
    throttle: Throttle,
    contact_anchor: Option<f64>,
}

impl Default for ScrollHost {
    fn default() -> Self {
        Self::new(SCROLL_THROTTLE_MS)
    }
}

impl ScrollHost {
    pub fn new(throttle_ms: f64) -> Self {
        Self {
            offset: 0.0,
            throttle: Throttle::new(throttle_ms),
            contact_anchor: None,
        }
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// Raw scroll event. The live offset always updates; the returned
    /// offset (if any) is what the visibility tracker should see.
    pub fn on_scroll(&mut self, offset: f64, now_ms: f64) -> Option<f64> {
        if !offset.is_finite() {
            return None;
        }
        self.offset = offset;
        self.throttle.offer(offset, now_ms)
    }

    /// Trailing edge of a throttled burst.
    pub fn flush(&mut self, now_ms: f64) -> Option<f64> {
        self.throttle.flush(now_ms)
    }

    pub fn flush_wait_ms(&self, now_ms: f64) -> Option<f64> {
        self.throttle.wait_ms(now_ms)
    }

    /// Record where the contact section was laid out. Only the first
    /// finite measurement counts; returns whether this one was kept.
    pub fn on_contact_layout(&mut self, y: f64) -> bool {
        if self.contact_anchor.is_some() || !y.is_finite() {
            return false;
        }
        self.contact_anchor = Some(y.max(0.0));
        true
    }

    pub fn contact_anchor(&self) -> Option<f64> {
        self.contact_anchor
    }

    /// Where "get in touch" scrolls to; the top of the page until the
    /// contact section has been measured.
    pub fn contact_target(&self) -> f64 {
        self.contact_anchor.unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_throttle_bounds_rate() {
        let mut host = ScrollHost::default();
        let mut forwarded = 0;
        // a 1kHz trackpad for one second
        for ms in 0..1000 {
            if host.on_scroll(ms as f64, ms as f64).is_some() {
                forwarded += 1;
            }
        }
        assert!(forwarded <= 63, "forwarded {forwarded}");
        assert!(forwarded >= 58, "forwarded {forwarded}");
        // live offset is never throttled
        assert_eq!(host.offset(), 999.0);
    }

    #[test]
    fn test_trailing_value_is_flushed() {
        let mut host = ScrollHost::default();
        assert_eq!(host.on_scroll(10.0, 0.0), Some(10.0));
        assert_eq!(host.on_scroll(40.0, 5.0), None);
        assert_eq!(host.on_scroll(90.0, 9.0), None);
        assert_eq!(host.flush_wait_ms(9.0), Some(7.0));
        assert_eq!(host.flush(10.0), None);
        assert_eq!(host.flush(16.0), Some(90.0));
        assert_eq!(host.flush(40.0), None);
        assert_eq!(host.flush_wait_ms(40.0), None);
    }

    #[test]
    fn test_non_finite_offsets_are_dropped() {
        let mut host = ScrollHost::default();
        host.on_scroll(120.0, 0.0);
        assert_eq!(host.on_scroll(f64::NAN, 100.0), None);
        assert_eq!(host.offset(), 120.0);
        // overscroll bounce is passed through for the tracker to clamp
        assert_eq!(host.on_scroll(-30.0, 200.0), Some(-30.0));
    }

    #[test]
    fn test_clock_going_backwards_reopens() {
        let mut throttle = Throttle::new(16.0);
        assert!(throttle.offer(1.0, 1000.0).is_some());
        assert!(throttle.offer(2.0, 10.0).is_some());
    }

    #[test]
    fn test_contact_target_before_layout() {
        let host = ScrollHost::default();
        assert_eq!(host.contact_anchor(), None);
        assert_eq!(host.contact_target(), 0.0);
    }

    #[test]
    fn test_contact_layout_recorded_once() {
        let mut host = ScrollHost::default();
        assert!(!host.on_contact_layout(f64::NAN));
        assert!(host.on_contact_layout(4321.0));
        assert!(!host.on_contact_layout(5000.0));
        assert_eq!(host.contact_target(), 4321.0);
    }
}
