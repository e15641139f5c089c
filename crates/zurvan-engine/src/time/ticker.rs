use std::time::{Duration, Instant};

/// Tick snapshot stamped onto each rendered frame.
#[derive(Debug, Copy, Clone)]
pub struct TickTime {
    /// Monotonic timestamp taken at the stamp.
    pub now: Instant,

    /// Number of scheduler deadlines reached so far.
    ///
    /// Host-initiated redraws between deadlines (resize, expose) share the
    /// index of the most recent tick.
    pub tick_index: u64,
}

/// Fixed-period deadline scheduler.
///
/// `Ticker` produces deadlines one period apart. When the loop stalls past
/// several deadlines (debugger pause, suspend), missed ticks are skipped
/// rather than replayed; the next deadline is always in the future.
///
/// Cancellation is implicit: the ticker stops being polled when the event
/// loop exits.
#[derive(Debug, Clone)]
pub struct Ticker {
    period: Duration,
    next: Instant,
    tick_index: u64,
}

impl Ticker {
    /// Creates a ticker whose first deadline is one period from now.
    pub fn new(period: Duration) -> Self {
        debug_assert!(period > Duration::ZERO);
        Self {
            period,
            next: Instant::now() + period,
            tick_index: 0,
        }
    }

    /// Returns the next deadline, for the event loop's timed wait.
    pub fn deadline(&self) -> Instant {
        self.next
    }

    /// Reports whether `now` has reached the deadline.
    ///
    /// On `true`, the tick counter advances and the deadline is rescheduled
    /// past `now`, skipping any periods missed while the loop was stalled.
    pub fn due(&mut self, now: Instant) -> bool {
        if now < self.next {
            return false;
        }

        while self.next <= now {
            self.next += self.period;
        }
        self.tick_index = self.tick_index.wrapping_add(1);

        true
    }

    /// Stamps the current frame with a snapshot of tick state.
    pub fn stamp(&self) -> TickTime {
        TickTime {
            now: Instant::now(),
            tick_index: self.tick_index,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PERIOD: Duration = Duration::from_secs(1);

    #[test]
    fn not_due_before_deadline() {
        let mut ticker = Ticker::new(PERIOD);
        let early = ticker.deadline() - Duration::from_millis(1);
        assert!(!ticker.due(early));
        assert_eq!(ticker.stamp().tick_index, 0);
    }

    #[test]
    fn due_at_deadline_advances_index() {
        let mut ticker = Ticker::new(PERIOD);
        let at = ticker.deadline();
        assert!(ticker.due(at));
        assert_eq!(ticker.stamp().tick_index, 1);
        assert!(ticker.deadline() > at);
    }

    #[test]
    fn missed_deadlines_are_skipped_not_replayed() {
        let mut ticker = Ticker::new(PERIOD);
        let late = ticker.deadline() + 3 * PERIOD;

        // One wake covers all overdue periods.
        assert!(ticker.due(late));
        assert_eq!(ticker.stamp().tick_index, 1);

        // The rescheduled deadline is strictly in the future relative to `late`.
        assert!(ticker.deadline() > late);
        assert!(!ticker.due(late));
    }

    #[test]
    fn consecutive_periods_tick_once_each() {
        let mut ticker = Ticker::new(PERIOD);
        let first = ticker.deadline();
        assert!(ticker.due(first));
        let second = ticker.deadline();
        assert_eq!(second, first + PERIOD);
        assert!(ticker.due(second));
        assert_eq!(ticker.stamp().tick_index, 2);
    }
}
