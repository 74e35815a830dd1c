//! Countdown ticking on the tokio runtime.
//!
//! A [`CountdownGuard`] owns the task that sends one [`TimerToken`] per
//! period. Dropping the guard aborts the task. [`Countdown`] holds at most one
//! guard and swaps it whenever the session's token changes, so exactly one
//! tick task is live and it always carries the current token.
//!
//! Even if a tick already in the channel outlives its guard, the session
//! refuses it as stale.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::trace;

use crate::session::TimerToken;

/// Running tick task for one countdown. Aborted on drop.
#[derive(Debug)]
pub struct CountdownGuard {
    token: TimerToken,
    handle: JoinHandle<()>,
}

impl CountdownGuard {
    /// Start sending `token` every `period`, first send one period from now.
    ///
    /// Must be called inside a tokio runtime.
    pub fn spawn(token: TimerToken, period: Duration, ticks: mpsc::Sender<TimerToken>) -> Self {
        let handle = tokio::spawn(async move {
            let mut interval = interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                interval.tick().await;
                if ticks.send(token).await.is_err() {
                    break;
                }
            }
        });
        trace!(epoch = token.epoch(), "countdown started");
        Self { token, handle }
    }

    #[must_use]
    pub fn token(&self) -> TimerToken {
        self.token
    }

    /// Whether the task has stopped (receiver gone or aborted).
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

impl Drop for CountdownGuard {
    fn drop(&mut self) {
        self.handle.abort();
        trace!(epoch = self.token.epoch(), "countdown cancelled");
    }
}

/// Slot holding the single live countdown.
#[derive(Debug)]
pub struct Countdown {
    period: Duration,
    ticks: mpsc::Sender<TimerToken>,
    active: Option<CountdownGuard>,
}

impl Countdown {
    /// Create an idle slot that will send ticks on `ticks`.
    #[must_use]
    pub fn new(ticks: mpsc::Sender<TimerToken>, period: Duration) -> Self {
        Self {
            period,
            ticks,
            active: None,
        }
    }

    /// Match the running countdown to the session's current token.
    ///
    /// Same token: the running task is kept. Different or no token: the old
    /// task is cancelled and, if a token is given, a new one started.
    pub fn sync(&mut self, token: Option<TimerToken>) {
        if self.active.as_ref().map(CountdownGuard::token) == token {
            return;
        }
        self.active = None;
        self.active = token.map(|token| {
            CountdownGuard::spawn(token, self.period, self.ticks.clone())
        });
    }

    /// Token of the live countdown, if any.
    #[must_use]
    pub fn active_token(&self) -> Option<TimerToken> {
        self.active.as_ref().map(CountdownGuard::token)
    }
}
