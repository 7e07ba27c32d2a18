//! Timer abstraction for autoplay
//!
//! The controller never sleeps. It asks a [`Scheduler`] to deliver a
//! [`TickToken`] after a period and later receives that token back through
//! `PlaybackController::tick`. Only the most recently scheduled token is ever
//! honoured, so a late or cancelled timer cannot advance playback.

use std::time::{Duration, Instant};

/// Identifies one scheduled tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TickToken(pub u64);

/// Something that can fire a single tick after a delay
pub trait Scheduler {
    /// Arrange for `token` to be delivered after `period`.
    ///
    /// Replaces anything previously scheduled.
    fn schedule(&mut self, token: TickToken, period: Duration);

    /// Drop `token` if it is still pending
    fn cancel(&mut self, token: TickToken);
}

/// Deadline-based scheduler polled from an event loop.
///
/// Holds a single slot: at most one tick is ever pending.
#[derive(Debug, Default)]
pub struct DeadlineScheduler {
    slot: Option<(TickToken, Instant)>,
}

impl DeadlineScheduler {
    pub fn new() -> Self {
        DeadlineScheduler { slot: None }
    }

    /// When the pending tick is due
    pub fn next_deadline(&self) -> Option<Instant> {
        self.slot.map(|(_, deadline)| deadline)
    }

    /// Time left until the pending tick, zero if already due
    pub fn time_until_due(&self, now: Instant) -> Option<Duration> {
        self.next_deadline()
            .map(|deadline| deadline.saturating_duration_since(now))
    }

    /// Take the pending token if its deadline has passed
    pub fn take_due(&mut self, now: Instant) -> Option<TickToken> {
        match self.slot {
            Some((token, deadline)) if deadline <= now => {
                self.slot = None;
                Some(token)
            }
            _ => None,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.slot.is_some()
    }
}

impl Scheduler for DeadlineScheduler {
    fn schedule(&mut self, token: TickToken, period: Duration) {
        self.slot = Some((token, Instant::now() + period));
    }

    fn cancel(&mut self, token: TickToken) {
        if matches!(self.slot, Some((pending, _)) if pending == token) {
            self.slot = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_take_due_only_after_deadline() {
        let mut scheduler = DeadlineScheduler::new();
        let before = Instant::now();
        scheduler.schedule(TickToken(1), Duration::from_secs(60));

        assert_eq!(scheduler.take_due(before), None);
        assert!(scheduler.is_pending());

        let later = before + Duration::from_secs(120);
        assert_eq!(scheduler.take_due(later), Some(TickToken(1)));
        assert_eq!(scheduler.take_due(later), None);
    }

    #[test]
    fn test_schedule_replaces_pending() {
        let mut scheduler = DeadlineScheduler::new();
        scheduler.schedule(TickToken(1), Duration::ZERO);
        scheduler.schedule(TickToken(2), Duration::ZERO);

        let later = Instant::now() + Duration::from_secs(1);
        assert_eq!(scheduler.take_due(later), Some(TickToken(2)));
        assert_eq!(scheduler.take_due(later), None);
    }

    #[test]
    fn test_cancel_ignores_stale_token() {
        let mut scheduler = DeadlineScheduler::new();
        scheduler.schedule(TickToken(3), Duration::ZERO);
        scheduler.cancel(TickToken(2));
        assert!(scheduler.is_pending());

        scheduler.cancel(TickToken(3));
        assert!(!scheduler.is_pending());
        assert_eq!(scheduler.time_until_due(Instant::now()), None);
    }
}
