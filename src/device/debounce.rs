//! Trailing-edge debounce, driven by an external clock.
//!
//! The debouncer never sleeps or schedules anything itself. Callers feed it
//! calls with the time they happened and ask it, later, whether the quiet
//! period has elapsed. In the browser the clock is `performance.now()` and
//! the "later" is a `setTimeout`; in tests it is whatever the test says.

use std::time::Duration;

/// Quiet period used for viewport re-evaluation.
pub const RESIZE_DEBOUNCE: Duration = Duration::from_millis(250);

#[derive(Debug, Clone, PartialEq)]
struct Pending<T> {
    args: T,
    due: Duration,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Debouncer<T> {
    wait: Duration,
    pending: Option<Pending<T>>,
}

impl<T> Debouncer<T> {
    pub fn new(wait: Duration) -> Self {
        Self {
            wait,
            pending: None,
        }
    }

    pub fn wait(&self) -> Duration {
        self.wait
    }

    /// Records a call made at `now`, replacing any earlier pending arguments.
    /// Returns the instant at which the call becomes due.
    pub fn call(&mut self, args: T, now: Duration) -> Duration {
        let due = now + self.wait;
        self.pending = Some(Pending { args, due });
        due
    }

    /// Hands out the pending arguments once their quiet period is over.
    pub fn take_due(&mut self, now: Duration) -> Option<T> {
        match &self.pending {
            Some(p) if now >= p.due => self.pending.take().map(|p| p.args),
            _ => None,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }
}

/// Wraps `f` so that bursts of calls collapse into one invocation.
///
/// `fire` must be invoked when the timer armed for the last call elapses;
/// it runs `f` with that call's arguments if nothing newer arrived.
pub struct Debounced<T, F>
where
    F: FnMut(T),
{
    inner: Debouncer<T>,
    f: F,
}

impl<T, F> Debounced<T, F>
where
    F: FnMut(T),
{
    pub fn call(&mut self, args: T, now: Duration) -> Duration {
        self.inner.call(args, now)
    }

    /// Returns `true` when `f` ran.
    pub fn fire(&mut self, now: Duration) -> bool {
        match self.inner.take_due(now) {
            Some(args) => {
                (self.f)(args);
                true
            }
            None => false,
        }
    }

    pub fn cancel(&mut self) {
        self.inner.cancel();
    }
}

pub fn debounce<T, F>(f: F, wait: Duration) -> Debounced<T, F>
where
    F: FnMut(T),
{
    Debounced {
        inner: Debouncer::new(wait),
        f,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_take_due_waits_for_quiet_period() {
        let mut d = Debouncer::new(ms(100));
        d.call(1, ms(0));

        assert_eq!(d.take_due(ms(99)), None);
        assert_eq!(d.take_due(ms(100)), Some(1));
        assert!(!d.is_pending());
    }

    #[test]
    fn test_cancel_drops_pending_call() {
        let mut d = Debouncer::new(ms(10));
        d.call("x", ms(0));
        d.cancel();

        assert_eq!(d.take_due(ms(50)), None);
    }
}
