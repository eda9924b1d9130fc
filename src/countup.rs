//! Count-up tween for the stats band.
//!
//! The machine itself knows nothing about the browser: it reacts to
//! visibility edges and timer fires, and tells its driver which timer to
//! arm next. The Yew side (`components::stat_counter`) owns the actual
//! `gloo_timers` handles.

/// Number of display updates over one full animation.
pub const STEPS: u32 = 60;

/// Wall-clock length of the animation, from first tick to last.
pub const DURATION_MS: u32 = 2_000;

/// Interval between ticks. Integer division puts the 60th tick at
/// ~1980 ms; the step count stays fixed either way.
pub const TICK_INTERVAL_MS: u32 = DURATION_MS / STEPS;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Waiting,
    Animating,
    Done,
}

/// Immutable per-instance configuration.
///
/// `target` and `start_delay_ms` are unsigned: a negative target or
/// delay is not representable.
#[derive(Debug, Clone, PartialEq)]
pub struct CountupSpec {
    pub target: u64,
    pub start_delay_ms: u32,
    /// Appended verbatim after the formatted value, e.g. `"+"`. Not animated.
    pub suffix: String,
}

/// What the driver must do with its scheduler after feeding an event in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Arm a one-shot timer; its fire is reported via [`Countup::on_delay_elapsed`].
    ScheduleDelay { after_ms: u32 },
    /// Arm a repeating timer; each fire is reported via [`Countup::on_tick`].
    StartTicking { every_ms: u32 },
}

/// Outcome of one tick-timer fire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// Value advanced, keep the interval running.
    Advanced,
    /// Terminal value reached; the driver must drop its interval.
    Finished,
    /// Fire arrived outside `Animating` (stale timer, disposed instance). Nothing happened.
    Ignored,
}

/// The `Idle → Waiting → Animating → Done` state machine behind one
/// animated statistic.
///
/// The visibility latch is one-way: only the first `true` while `Idle`
/// arms the animation, every later toggle is ignored, so a card that
/// scrolls out and back in never restarts.
#[derive(Debug)]
pub struct Countup {
    spec: CountupSpec,
    phase: Phase,
    step: u32,
    value: u64,
    disposed: bool,
}

impl Countup {
    /// No timers are armed and no side effects happen here; the machine
    /// sits in `Idle` until the first visibility signal.
    pub fn new(spec: CountupSpec) -> Self {
        Self {
            spec,
            phase: Phase::Idle,
            step: 0,
            value: 0,
            disposed: false,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn value(&self) -> u64 {
        self.value
    }

    pub fn step(&self) -> u32 {
        self.step
    }

    /// Feed a visibility edge in. Returns the delay command exactly once,
    /// on the first `true` while `Idle`.
    pub fn on_visibility(&mut self, visible: bool) -> Option<Command> {
        if self.disposed || !visible || self.phase != Phase::Idle {
            return None;
        }
        self.phase = Phase::Waiting;
        Some(Command::ScheduleDelay {
            after_ms: self.spec.start_delay_ms,
        })
    }

    /// The start delay elapsed. A fire in any phase other than `Waiting`
    /// (or after disposal) is a stale timer and is ignored.
    pub fn on_delay_elapsed(&mut self) -> Option<Command> {
        if self.disposed || self.phase != Phase::Waiting {
            return None;
        }
        self.phase = Phase::Animating;
        Some(Command::StartTicking {
            every_ms: TICK_INTERVAL_MS,
        })
    }

    /// One tick-timer fire.
    ///
    /// Finishes after the fixed step count, or earlier when rounding
    /// lands a small target exactly; a zero target always runs the full
    /// 60 steps displaying `0`. The terminal value is forced to `target`
    /// so rounding drift can never show through.
    pub fn on_tick(&mut self) -> Tick {
        if self.disposed || self.phase != Phase::Animating {
            return Tick::Ignored;
        }
        self.step += 1;
        let scaled =
            (self.spec.target as f64 * self.step as f64 / STEPS as f64).round() as u64;
        self.value = scaled.min(self.spec.target);

        let finished = self.step >= STEPS
            || (self.spec.target > 0 && self.value == self.spec.target);
        if finished {
            self.value = self.spec.target;
            self.phase = Phase::Done;
            Tick::Finished
        } else {
            Tick::Advanced
        }
    }

    /// The string to render right now: grouped digits plus the verbatim suffix.
    pub fn display(&self) -> String {
        format!("{}{}", format_grouped(self.value), self.spec.suffix)
    }

    /// Tear the instance down. Idempotent, valid in any phase; every
    /// event fed in afterwards is a no-op. The driver drops its timer
    /// handles alongside this call.
    pub fn dispose(&mut self) {
        self.disposed = true;
    }
}

/// `2847` → `"2,847"`. Comma grouping, matching what the rest of the
/// site's en-US copy expects.
pub fn format_grouped(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Deterministic stand-in for the browser scheduler: one optional
    /// one-shot and one optional repeating timer, a virtual clock, and a
    /// log of every value the machine produced.
    struct Sim {
        machine: Countup,
        now_ms: u64,
        delay_due: Option<u64>,
        tick_due: Option<u64>,
        tick_every: u64,
        samples: Vec<u64>,
    }

    impl Sim {
        fn new(target: u64, start_delay_ms: u32, suffix: &str) -> Self {
            Self {
                machine: Countup::new(CountupSpec {
                    target,
                    start_delay_ms,
                    suffix: suffix.to_string(),
                }),
                now_ms: 0,
                delay_due: None,
                tick_due: None,
                tick_every: 0,
                samples: Vec::new(),
            }
        }

        fn signal(&mut self, visible: bool) {
            if let Some(Command::ScheduleDelay { after_ms }) =
                self.machine.on_visibility(visible)
            {
                self.delay_due = Some(self.now_ms + u64::from(after_ms));
            }
        }

        fn advance(&mut self, ms: u64) {
            let deadline = self.now_ms + ms;
            loop {
                // At most one timer is armed at a time, same as the real driver.
                let due = self.delay_due.or(self.tick_due);
                match due {
                    Some(at) if at <= deadline => {
                        self.now_ms = at;
                        if self.delay_due.take().is_some() {
                            if let Some(Command::StartTicking { every_ms }) =
                                self.machine.on_delay_elapsed()
                            {
                                self.tick_every = u64::from(every_ms);
                                self.tick_due = Some(self.now_ms + self.tick_every);
                            }
                        } else {
                            self.tick_due = None;
                            match self.machine.on_tick() {
                                Tick::Advanced => {
                                    self.samples.push(self.machine.value());
                                    self.tick_due =
                                        Some(self.now_ms + self.tick_every);
                                }
                                Tick::Finished => {
                                    self.samples.push(self.machine.value());
                                }
                                Tick::Ignored => {}
                            }
                        }
                    }
                    _ => {
                        self.now_ms = deadline;
                        return;
                    }
                }
            }
        }

        /// Dispose the machine but leave the simulated timers armed, the
        /// way an in-flight browser timer outlives its component.
        fn dispose_machine_only(&mut self) {
            self.machine.dispose();
        }
    }

    #[test]
    fn runs_to_target_without_overshoot() {
        let mut sim = Sim::new(2_847, 0, "");
        sim.signal(true);
        sim.advance(5_000);

        assert_eq!(sim.machine.phase(), Phase::Done);
        assert_eq!(sim.machine.value(), 2_847);
        assert_eq!(sim.machine.display(), "2,847");
        assert!(sim.samples.windows(2).all(|w| w[0] <= w[1]));
        assert!(sim.samples.iter().all(|&v| v <= 2_847));
        assert_eq!(*sim.samples.last().unwrap(), 2_847);
    }

    #[test]
    fn suffix_is_appended_verbatim() {
        let mut sim = Sim::new(2_847, 0, "+");
        assert_eq!(sim.machine.display(), "0+");
        sim.signal(true);
        sim.advance(5_000);
        assert_eq!(sim.machine.display(), "2,847+");
    }

    #[test]
    fn zero_target_runs_all_steps_showing_zero() {
        let mut sim = Sim::new(0, 0, "");
        sim.signal(true);
        sim.advance(u64::from(DURATION_MS) / 2);
        assert_eq!(sim.machine.phase(), Phase::Animating);
        assert_eq!(sim.machine.display(), "0");

        sim.advance(5_000);
        assert_eq!(sim.machine.phase(), Phase::Done);
        assert_eq!(sim.machine.value(), 0);
        assert_eq!(sim.samples.len(), STEPS as usize);
        assert!(sim.samples.iter().all(|&v| v == 0));
    }

    #[test]
    fn small_target_finishes_as_soon_as_rounding_lands_on_it() {
        let mut sim = Sim::new(1, 0, "");
        sim.signal(true);
        sim.advance(5_000);
        assert_eq!(sim.machine.phase(), Phase::Done);
        assert_eq!(sim.machine.value(), 1);
        assert!(sim.samples.len() < STEPS as usize);
    }

    #[test]
    fn no_tick_before_the_start_delay() {
        let mut sim = Sim::new(150, 400, "");
        sim.signal(true);
        sim.advance(399);
        assert_eq!(sim.machine.phase(), Phase::Waiting);
        assert!(sim.samples.is_empty());

        // First tick lands one interval after the delay elapses and shows
        // round(150 * 1/60) = 3.
        sim.advance(1 + u64::from(TICK_INTERVAL_MS));
        assert_eq!(sim.samples, vec![3]);
        assert_eq!(sim.machine.phase(), Phase::Animating);

        sim.advance(10_000);
        assert_eq!(sim.machine.phase(), Phase::Done);
        assert_eq!(sim.machine.value(), 150);
        assert!(sim.now_ms >= 400 + u64::from(TICK_INTERVAL_MS) * u64::from(STEPS));
    }

    #[test]
    fn redundant_visibility_toggles_do_not_change_the_run() {
        let mut once = Sim::new(620, 200, "");
        once.signal(true);
        once.advance(5_000);

        let mut noisy = Sim::new(620, 200, "");
        noisy.signal(true);
        noisy.signal(false);
        noisy.signal(true);
        noisy.advance(100);
        noisy.signal(true);
        noisy.advance(700);
        noisy.signal(false);
        noisy.signal(true);
        noisy.advance(4_200);

        assert_eq!(once.samples, noisy.samples);
        assert_eq!(noisy.machine.phase(), Phase::Done);
    }

    #[test]
    fn hidden_signal_while_idle_does_not_arm() {
        let mut sim = Sim::new(50, 0, "");
        sim.signal(false);
        sim.advance(5_000);
        assert_eq!(sim.machine.phase(), Phase::Idle);
        assert!(sim.samples.is_empty());
    }

    #[test]
    fn retrigger_after_done_never_restarts() {
        let mut sim = Sim::new(75, 0, "");
        sim.signal(true);
        sim.advance(5_000);
        assert_eq!(sim.machine.phase(), Phase::Done);
        let finished_samples = sim.samples.len();

        sim.signal(true);
        sim.advance(5_000);
        assert_eq!(sim.machine.phase(), Phase::Done);
        assert_eq!(sim.machine.value(), 75);
        assert_eq!(sim.samples.len(), finished_samples);
    }

    #[test]
    fn stray_tick_after_done_is_ignored() {
        let mut sim = Sim::new(75, 0, "");
        sim.signal(true);
        sim.advance(5_000);
        assert_eq!(sim.machine.on_tick(), Tick::Ignored);
        assert_eq!(sim.machine.value(), 75);
        assert_eq!(sim.machine.step(), STEPS);
    }

    #[test]
    fn dispose_while_waiting_silences_the_delay_timer() {
        let mut sim = Sim::new(500, 400, "");
        sim.signal(true);
        sim.dispose_machine_only();
        sim.advance(5_000);

        assert_eq!(sim.machine.phase(), Phase::Waiting);
        assert_eq!(sim.machine.value(), 0);
        assert!(sim.samples.is_empty());
    }

    #[test]
    fn dispose_while_animating_freezes_the_value() {
        let mut sim = Sim::new(500, 0, "");
        sim.signal(true);
        sim.advance(1_000);
        let frozen = sim.machine.value();
        let seen = sim.samples.len();

        sim.dispose_machine_only();
        sim.machine.dispose(); // idempotent
        sim.advance(5_000);

        assert_eq!(sim.machine.value(), frozen);
        assert_eq!(sim.samples.len(), seen);
        assert_eq!(sim.machine.on_visibility(true), None);
    }

    #[test]
    fn dispose_after_done_is_safe() {
        let mut sim = Sim::new(10, 0, "");
        sim.signal(true);
        sim.advance(5_000);
        sim.machine.dispose();
        assert_eq!(sim.machine.value(), 10);
        assert_eq!(sim.machine.phase(), Phase::Done);
    }

    #[test]
    fn grouping_separators() {
        assert_eq!(format_grouped(0), "0");
        assert_eq!(format_grouped(999), "999");
        assert_eq!(format_grouped(1_000), "1,000");
        assert_eq!(format_grouped(2_847), "2,847");
        assert_eq!(format_grouped(12_400), "12,400");
        assert_eq!(format_grouped(1_234_567), "1,234,567");
    }
}
