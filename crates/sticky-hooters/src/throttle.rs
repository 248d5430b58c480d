//! Coalescing scroll throttle
//!
//! A call outside the window fires immediately. A call inside the window
//! replaces any pending call with one due a full window later, carrying the
//! newest arguments. There is no event loop here: the owner polls with the
//! current time and runs whatever comes back.

use std::time::Duration;

#[derive(Debug, Clone)]
struct Pending<A> {
    /// When the deferred call becomes due
    due: Duration,
    /// Time of the call that scheduled it
    called_at: Duration,
    args: A,
}

/// Leading + trailing rate limiter
#[derive(Debug, Clone)]
pub struct Throttle<A> {
    window: Duration,
    last: Option<Duration>,
    pending: Option<Pending<A>>,
}

impl<A> Throttle<A> {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            last: None,
            pending: None,
        }
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    /// Record a call at `now`. Returns the arguments when the call should run
    /// immediately; otherwise it is deferred.
    pub fn call(&mut self, now: Duration, args: A) -> Option<A> {
        match self.last {
            Some(last) if now < last + self.window => {
                self.pending = Some(Pending {
                    due: now + self.window,
                    called_at: now,
                    args,
                });
                None
            }
            _ => {
                self.last = Some(now);
                Some(args)
            }
        }
    }

    /// Take the deferred call if it is due at `now`.
    ///
    /// The window restarts from the time the deferred call was made, not from
    /// when it fires.
    pub fn poll(&mut self, now: Duration) -> Option<A> {
        if self.pending.as_ref().is_some_and(|p| p.due <= now) {
            let pending = self.pending.take()?;
            self.last = Some(pending.called_at);
            return Some(pending.args);
        }
        None
    }

    /// Due time of the deferred call, if any
    pub fn next_due(&self) -> Option<Duration> {
        self.pending.as_ref().map(|p| p.due)
    }

    /// Drop any deferred call
    pub fn cancel(&mut self) {
        self.pending = None;
    }
}
