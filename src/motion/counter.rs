/// Run length of the stat counters.
pub const COUNTER_DURATION_MS: f64 = 800.0;
/// Updates per counter run.
pub const COUNTER_STEPS: u32 = 30;

/// Integer count-up from zero to `target` in a fixed number of steps.
///
/// The value shown after step `s` is `floor(target * s / steps)`, so the
/// display never passes the target and lands on it exactly on the last
/// step. After that [`CountUp::tick`] yields nothing and the caller is
/// expected to drop its timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountUp {
    target: u32,
    steps: u32,
    step: u32,
}

impl CountUp {
    pub fn new(target: u32) -> Self {
        Self::with_steps(target, COUNTER_STEPS)
    }

    pub fn with_steps(target: u32, steps: u32) -> Self {
        Self {
            target,
            steps: steps.max(1),
            step: 0,
        }
    }

    pub fn target(&self) -> u32 {
        self.target
    }

    pub fn value(&self) -> u32 {
        (u64::from(self.target) * u64::from(self.step) / u64::from(self.steps)) as u32
    }

    /// Delay between two ticks for a run lasting `duration_ms`.
    pub fn interval_ms(&self, duration_ms: f64) -> f64 {
        duration_ms.max(0.0) / f64::from(self.steps)
    }

    pub fn is_finished(&self) -> bool {
        self.step >= self.steps || (self.step > 0 && self.value() >= self.target)
    }

    /// Advance one step and return the value to display, or `None` once the
    /// run is over.
    pub fn tick(&mut self) -> Option<u32> {
        if self.is_finished() {
            return None;
        }
        self.step += 1;
        if self.value() >= self.target {
            self.step = self.steps;
            return Some(self.target);
        }
        Some(self.value())
    }
}

/// What a counter's timer should do after a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterTick {
    /// Show the value and keep ticking.
    Show(u32),
    /// Show the final value and clear the timer.
    Last(u32),
    /// No run in progress; nothing to show.
    Idle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Idle,
    Scheduled,
    Running,
    Finished,
    Cancelled,
}

/// Timer bookkeeping around a [`CountUp`]: one delayed start, one interval,
/// and exactly one request to clear it, either when the count lands or when
/// the card goes away first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CounterRun {
    count: CountUp,
    phase: Phase,
}

impl CounterRun {
    pub fn new(count: CountUp) -> Self {
        Self {
            count,
            phase: Phase::Idle,
        }
    }

    pub fn value(&self) -> u32 {
        self.count.value()
    }

    pub fn interval_ms(&self, duration_ms: f64) -> f64 {
        self.count.interval_ms(duration_ms)
    }

    pub fn is_finished(&self) -> bool {
        self.phase == Phase::Finished
    }

    /// Returns `true` when the delayed start should be scheduled. Only the
    /// first call on a fresh run does.
    pub fn schedule(&mut self) -> bool {
        if self.phase != Phase::Idle {
            return false;
        }
        self.phase = Phase::Scheduled;
        true
    }

    /// The delay elapsed. Returns `true` when the interval should start.
    pub fn start(&mut self) -> bool {
        if self.phase != Phase::Scheduled {
            return false;
        }
        self.phase = Phase::Running;
        true
    }

    pub fn tick(&mut self) -> CounterTick {
        if self.phase != Phase::Running {
            return CounterTick::Idle;
        }
        match self.count.tick() {
            Some(value) if self.count.is_finished() => {
                self.phase = Phase::Finished;
                CounterTick::Last(value)
            }
            Some(value) => CounterTick::Show(value),
            None => {
                self.phase = Phase::Finished;
                CounterTick::Last(self.count.value())
            }
        }
    }

    /// The owner is going away. Returns `true` when a timer is still
    /// pending and must be cleared.
    pub fn cancel(&mut self) -> bool {
        let pending = matches!(self.phase, Phase::Scheduled | Phase::Running);
        if self.phase != Phase::Finished {
            self.phase = Phase::Cancelled;
        }
        pending
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_to_target_without_overshoot() {
        let mut counter = CountUp::new(15);
        assert_eq!(counter.value(), 0);
        let mut shown = Vec::new();
        while let Some(v) = counter.tick() {
            assert!(v <= 15, "displayed {v}");
            shown.push(v);
        }
        assert_eq!(shown.len(), COUNTER_STEPS as usize);
        assert_eq!(shown.last(), Some(&15));
        assert!(shown.windows(2).all(|w| w[0] <= w[1]));
        assert!(counter.is_finished());
        assert_eq!(counter.value(), 15);
        // finished counters stay put
        assert_eq!(counter.tick(), None);
        assert_eq!(counter.value(), 15);
    }

    #[test]
    fn test_step_values_are_floored() {
        let mut counter = CountUp::new(20);
        assert_eq!(counter.tick(), Some(0));
        assert_eq!(counter.tick(), Some(1));
        assert_eq!(counter.tick(), Some(2));
        for _ in 3..29 {
            counter.tick();
        }
        assert_eq!(counter.value(), 19);
        assert_eq!(counter.tick(), Some(20));
        assert_eq!(counter.tick(), None);
    }

    #[test]
    fn test_interval() {
        let counter = CountUp::new(6);
        assert!((counter.interval_ms(COUNTER_DURATION_MS) - 800.0 / 30.0).abs() < 1e-9);
        assert_eq!(counter.interval_ms(-5.0), 0.0);
    }

    #[test]
    fn test_zero_target_finishes_immediately() {
        let mut counter = CountUp::new(0);
        assert!(!counter.is_finished());
        assert_eq!(counter.tick(), Some(0));
        assert!(counter.is_finished());
        assert_eq!(counter.tick(), None);
    }

    #[test]
    fn test_large_target_and_single_step() {
        let mut counter = CountUp::new(u32::MAX);
        for _ in 0..COUNTER_STEPS {
            assert!(counter.tick().is_some());
        }
        assert_eq!(counter.value(), u32::MAX);

        let mut counter = CountUp::with_steps(9, 0);
        assert_eq!(counter.tick(), Some(9));
        assert_eq!(counter.tick(), None);
    }

    fn run_to_end(run: &mut CounterRun) -> (Vec<u32>, usize) {
        let mut shown = Vec::new();
        let mut clears = 0;
        loop {
            match run.tick() {
                CounterTick::Show(v) => shown.push(v),
                CounterTick::Last(v) => {
                    shown.push(v);
                    clears += 1;
                }
                CounterTick::Idle => break,
            }
        }
        (shown, clears)
    }

    #[test]
    fn test_run_clears_once_when_finished() {
        let mut run = CounterRun::new(CountUp::new(15));
        assert_eq!(run.tick(), CounterTick::Idle);
        assert!(run.schedule());
        assert_eq!(run.tick(), CounterTick::Idle);
        assert!(run.start());

        let (shown, clears) = run_to_end(&mut run);
        assert_eq!(shown.len(), COUNTER_STEPS as usize);
        assert_eq!(shown.last(), Some(&15));
        assert_eq!(clears, 1);
        assert!(run.is_finished());
        // unmounting afterwards has nothing left to clear
        assert!(!run.cancel());
        assert_eq!(run.tick(), CounterTick::Idle);
        assert_eq!(run.value(), 15);
    }

    #[test]
    fn test_run_clears_once_on_unmount() {
        let mut run = CounterRun::new(CountUp::new(20));
        run.schedule();
        run.start();
        assert_eq!(run.tick(), CounterTick::Show(0));
        assert_eq!(run.tick(), CounterTick::Show(1));

        assert!(run.cancel());
        assert!(!run.cancel());
        assert_eq!(run.tick(), CounterTick::Idle);
        assert!(!run.is_finished());
        assert!(!run.start());

        // unmounted while still waiting out the card's delay
        let mut run = CounterRun::new(CountUp::new(6));
        run.schedule();
        assert!(run.cancel());
        assert!(!run.start());
        assert_eq!(run.tick(), CounterTick::Idle);
    }

    #[test]
    fn test_run_is_not_rescheduled() {
        let mut run = CounterRun::new(CountUp::new(6));
        assert!(run.schedule());
        assert!(!run.schedule());
        assert!(run.start());
        assert!(!run.start());
        assert!(!run.schedule());
        run_to_end(&mut run);
        assert!(!run.schedule());

        let mut run = CounterRun::new(CountUp::new(6));
        assert!(!run.cancel());
        assert!(!run.schedule());
    }

    #[test]
    fn test_zero_target_run() {
        let mut run = CounterRun::new(CountUp::new(0));
        run.schedule();
        run.start();
        assert_eq!(run.tick(), CounterTick::Last(0));
        assert_eq!(run.tick(), CounterTick::Idle);
        assert!(!run.cancel());
    }
}
