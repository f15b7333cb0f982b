//! Transient notifications and the activity log.

use crate::consts::cli_consts::{MAX_ACTIVITY_LOGS, NOTIFICATION_TTL_SECS};
use crate::events::Event;
use std::collections::VecDeque;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub event: Event,
    pub raised_at: Instant,
}

impl Notification {
    pub fn ttl() -> Duration {
        Duration::from_secs(NOTIFICATION_TTL_SECS)
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.raised_at) >= Self::ttl()
    }
}

/// Live notifications (auto-dismissed) plus a bounded history of every event.
#[derive(Debug, Default)]
pub struct Notifications {
    live: VecDeque<Notification>,
    activity: VecDeque<Event>,
}

impl Notifications {
    pub fn push(&mut self, event: Event) {
        self.push_at(event, Instant::now());
    }

    pub fn push_at(&mut self, event: Event, raised_at: Instant) {
        log::log!(log::Level::from(event.log_level), "{}: {}", event.source, event.msg);
        if self.activity.len() >= MAX_ACTIVITY_LOGS {
            self.activity.pop_front();
        }
        self.activity.push_back(event.clone());
        self.live.push_back(Notification { event, raised_at });
    }

    /// Drops notifications older than the display time.
    pub fn prune(&mut self, now: Instant) {
        self.live.retain(|n| !n.is_expired(now));
    }

    /// Notifications still on screen at `now`, oldest first.
    pub fn live(&self, now: Instant) -> impl Iterator<Item = &Notification> {
        self.live.iter().filter(move |n| !n.is_expired(now))
    }

    #[cfg(test)]
    pub fn latest(&self) -> Option<&Event> {
        self.activity.back()
    }

    pub fn activity(&self) -> &VecDeque<Event> {
        &self.activity
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::Source;

    #[test]
    /// A notification disappears four seconds after it was raised.
    fn notifications_expire_after_four_seconds() {
        let start = Instant::now();
        let mut notifications = Notifications::default();
        notifications.push_at(Event::success(Source::Users, "User created"), start);

        assert_eq!(notifications.live(start + Duration::from_millis(3999)).count(), 1);
        assert_eq!(notifications.live(start + Duration::from_secs(4)).count(), 0);

        notifications.prune(start + Duration::from_secs(5));
        assert_eq!(notifications.live(start).count(), 0);
        // History is kept after the toast is gone
        assert_eq!(notifications.activity().len(), 1);
    }

    #[test]
    fn activity_log_is_bounded() {
        let mut notifications = Notifications::default();
        for i in 0..(MAX_ACTIVITY_LOGS + 5) {
            notifications.push(Event::refresh(Source::Shops, format!("event {i}")));
        }
        assert_eq!(notifications.activity().len(), MAX_ACTIVITY_LOGS);
        assert_eq!(
            notifications.latest().map(|e| e.msg.as_str()),
            Some(format!("event {}", MAX_ACTIVITY_LOGS + 4).as_str())
        );
    }
}
