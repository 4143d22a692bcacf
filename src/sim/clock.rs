// Pick clock state machine.
//
// Two states: counting down toward an automatic pick, or idle (stopped
// between picks, or the draft is over). Pure and synchronous; the runner
// owns the wall-clock timer and feeds ticks in.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockPhase {
    /// Counting down; the slot auto-advances when the countdown hits zero.
    Counting { remaining: u32 },
    /// Not counting.
    Idle,
}

/// What a single one-second tick did to the clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Countdown decremented, time still on the clock.
    Running { remaining: u32 },
    /// Countdown reached zero on this tick.
    Expired,
    /// Clock was idle; the tick was a no-op.
    Idle,
}

#[derive(Debug, Clone)]
pub struct PickClock {
    phase: ClockPhase,
    pick_seconds: u32,
}

impl PickClock {
    pub fn new(pick_seconds: u32) -> Self {
        PickClock {
            phase: ClockPhase::Idle,
            pick_seconds,
        }
    }

    /// Start (or restart) the countdown for the next pick.
    pub fn arm(&mut self) {
        self.phase = ClockPhase::Counting {
            remaining: self.pick_seconds,
        };
    }

    pub fn stop(&mut self) {
        self.phase = ClockPhase::Idle;
    }

    pub fn phase(&self) -> ClockPhase {
        self.phase
    }

    /// Seconds left on the clock, or `None` when idle.
    pub fn remaining(&self) -> Option<u32> {
        match self.phase {
            ClockPhase::Counting { remaining } => Some(remaining),
            ClockPhase::Idle => None,
        }
    }

    /// Advance the clock by one second.
    pub fn tick(&mut self) -> TickOutcome {
        match self.phase {
            ClockPhase::Idle => TickOutcome::Idle,
            ClockPhase::Counting { remaining } => {
                let remaining = remaining.saturating_sub(1);
                if remaining == 0 {
                    self.phase = ClockPhase::Idle;
                    TickOutcome::Expired
                } else {
                    self.phase = ClockPhase::Counting { remaining };
                    TickOutcome::Running { remaining }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_idle() {
        let clock = PickClock::new(30);
        assert_eq!(clock.phase(), ClockPhase::Idle);
        assert_eq!(clock.remaining(), None);
    }

    #[test]
    fn arm_loads_full_countdown() {
        let mut clock = PickClock::new(30);
        clock.arm();
        assert_eq!(clock.remaining(), Some(30));
    }

    #[test]
    fn ticks_count_down_to_expiry() {
        let mut clock = PickClock::new(3);
        clock.arm();
        assert_eq!(clock.tick(), TickOutcome::Running { remaining: 2 });
        assert_eq!(clock.tick(), TickOutcome::Running { remaining: 1 });
        assert_eq!(clock.tick(), TickOutcome::Expired);
        // Expiry lands back in Idle until the next arm.
        assert_eq!(clock.phase(), ClockPhase::Idle);
        assert_eq!(clock.tick(), TickOutcome::Idle);
    }

    #[test]
    fn one_second_clock_expires_on_first_tick() {
        let mut clock = PickClock::new(1);
        clock.arm();
        assert_eq!(clock.tick(), TickOutcome::Expired);
    }

    #[test]
    fn rearming_resets_the_countdown() {
        let mut clock = PickClock::new(5);
        clock.arm();
        clock.tick();
        clock.tick();
        clock.arm();
        assert_eq!(clock.remaining(), Some(5));
    }

    #[test]
    fn stop_freezes_ticking() {
        let mut clock = PickClock::new(5);
        clock.arm();
        clock.tick();
        clock.stop();
        assert_eq!(clock.tick(), TickOutcome::Idle);
        assert_eq!(clock.remaining(), None);
    }

    #[test]
    fn idle_ticks_are_no_ops() {
        let mut clock = PickClock::new(5);
        for _ in 0..10 {
            assert_eq!(clock.tick(), TickOutcome::Idle);
        }
    }
}
