use std::time::{Duration, Instant};

/// Deferred world mutations. The arcade loop has exactly two of these:
/// the delayed enemy respawn after a kill and the end of a player
/// invincibility window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerEvent {
    SpawnEnemy,
    InvincibilityOver,
}

/// Fire-once delayed callbacks, polled by the main loop.
///
/// Deadlines are wall-clock: a timer scheduled before a pause still comes
/// due on schedule while paused. The queue is owned by the session, so a
/// full restart drops anything still pending instead of letting it fire
/// into the new session's state.
#[derive(Debug, Default)]
pub struct TimerQueue {
    pending: Vec<(Instant, TimerEvent)>,
}

impl TimerQueue {
    pub fn new() -> Self {
        Self {
            pending: Vec::new(),
        }
    }

    /// Schedules `event` to fire once `delay` from now.
    pub fn after(&mut self, delay: Duration, event: TimerEvent) {
        self.pending.push((Instant::now() + delay, event));
    }

    /// Removes and returns every event whose deadline has passed.
    pub fn drain_due(&mut self, now: Instant) -> Vec<TimerEvent> {
        let mut due = Vec::new();
        self.pending.retain(|(deadline, event)| {
            if *deadline <= now {
                due.push(*event);
                false
            } else {
                true
            }
        });
        due
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }
}
