//! Notification lifecycle: capacity-bounded visible queue with auto-dismiss.

use std::collections::{HashMap, VecDeque};
use std::time::{Duration, Instant};

use tracing::debug;

use super::{Notification, NotificationId, Severity, DEFAULT_CAPACITY, DEFAULT_DISMISS_AFTER};
use crate::timer::{TimerId, TimerQueue};

type ChangeListener = Box<dyn FnMut(&[Notification])>;

/// Owns the visible notifications and their dismissal timers.
///
/// Each visible notification is removed exactly once: by its timer, by an
/// explicit [`dismiss`](Self::dismiss), or by eviction when capacity is
/// exceeded. Removal always cancels the timer, so a late expiry can never
/// touch a notification that is already gone.
pub struct NotificationCenter {
    visible: VecDeque<Notification>,
    timers: TimerQueue<NotificationId>,
    /// Pending timer per visible notification
    timer_ids: HashMap<NotificationId, TimerId>,
    listeners: Vec<ChangeListener>,
    next_id: u64,
    capacity: usize,
    default_dismiss_after: Option<Duration>,
}

impl NotificationCenter {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Create a center showing at most `capacity` notifications (minimum 1).
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            visible: VecDeque::new(),
            timers: TimerQueue::new(),
            timer_ids: HashMap::new(),
            listeners: Vec::new(),
            next_id: 1,
            capacity: capacity.max(1),
            default_dismiss_after: Some(DEFAULT_DISMISS_AFTER),
        }
    }

    /// Override the auto-dismiss delay used by [`notify`](Self::notify).
    pub fn with_default_dismiss_after(mut self, dismiss_after: Option<Duration>) -> Self {
        self.default_dismiss_after = dismiss_after;
        self
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Register a callback invoked with the visible sequence after each change.
    ///
    /// An insert that evicts older notifications reports twice: once after
    /// the eviction and once after the insert.
    pub fn on_change(&mut self, listener: impl FnMut(&[Notification]) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Show a notification with the default auto-dismiss delay.
    pub fn notify(
        &mut self,
        now: Instant,
        message: impl Into<String>,
        severity: Severity,
    ) -> NotificationId {
        let dismiss_after = self.default_dismiss_after;
        self.notify_with(now, message, severity, dismiss_after)
    }

    /// Show a notification; `dismiss_after = None` keeps it until dismissed.
    pub fn notify_with(
        &mut self,
        now: Instant,
        message: impl Into<String>,
        severity: Severity,
        dismiss_after: Option<Duration>,
    ) -> NotificationId {
        let id = NotificationId(self.next_id);
        self.next_id += 1;

        // Make room first so the new notification never counts against itself
        let mut evicted = false;
        while self.visible.len() >= self.capacity {
            let Some(oldest) = self.visible.pop_front() else {
                break;
            };
            self.cancel_timer(oldest.id);
            debug!(id = %oldest.id, "notification evicted");
            evicted = true;
        }
        if evicted {
            self.emit_change();
        }

        if let Some(delay) = dismiss_after {
            let timer = self.timers.schedule(now, delay, id);
            self.timer_ids.insert(id, timer);
        }

        let notification = Notification {
            id,
            message: message.into(),
            severity,
            created_at: now,
            dismiss_after,
        };
        debug!(%id, %severity, message = %notification.message, "notification shown");
        self.visible.push_back(notification);
        self.emit_change();

        id
    }

    /// Remove a notification. Unknown or already-removed ids are ignored.
    ///
    /// Returns whether anything was removed.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        let Some(index) = self.visible.iter().position(|n| n.id == id) else {
            return false;
        };
        self.cancel_timer(id);
        self.visible.remove(index);
        debug!(%id, "notification dismissed");
        self.emit_change();
        true
    }

    /// Dismiss the most recently shown notification.
    pub fn dismiss_latest(&mut self) -> Option<NotificationId> {
        let id = self.visible.back()?.id;
        self.dismiss(id);
        Some(id)
    }

    /// Remove every visible notification and cancel their timers.
    pub fn clear(&mut self) {
        if self.visible.is_empty() {
            return;
        }
        self.visible.clear();
        self.timers.clear();
        self.timer_ids.clear();
        self.emit_change();
    }

    /// Fire due dismissal timers, returning the ids that expired.
    pub fn tick(&mut self, now: Instant) -> Vec<NotificationId> {
        let mut expired = Vec::new();
        for (timer, id) in self.timers.drain_due(now) {
            // A timer only counts if it is still the one owned by `id`
            if self.timer_ids.get(&id) != Some(&timer) {
                continue;
            }
            self.timer_ids.remove(&id);
            if let Some(index) = self.visible.iter().position(|n| n.id == id) {
                self.visible.remove(index);
                debug!(%id, "notification expired");
                expired.push(id);
            }
        }
        if !expired.is_empty() {
            self.emit_change();
        }
        expired
    }

    /// Earliest pending auto-dismiss deadline
    pub fn next_deadline(&self) -> Option<Instant> {
        self.timers.next_deadline()
    }

    /// Visible notifications, oldest first
    pub fn visible(&self) -> Vec<&Notification> {
        self.visible.iter().collect()
    }

    pub fn get(&self, id: NotificationId) -> Option<&Notification> {
        self.visible.iter().find(|n| n.id == id)
    }

    pub fn is_visible(&self, id: NotificationId) -> bool {
        self.get(id).is_some()
    }

    /// Whether `id` still has a pending auto-dismiss timer
    pub fn has_pending_timer(&self, id: NotificationId) -> bool {
        self.timer_ids
            .get(&id)
            .is_some_and(|timer| self.timers.is_pending(*timer))
    }

    pub fn len(&self) -> usize {
        self.visible.len()
    }

    pub fn is_empty(&self) -> bool {
        self.visible.is_empty()
    }

    fn cancel_timer(&mut self, id: NotificationId) {
        if let Some(timer) = self.timer_ids.remove(&id) {
            self.timers.cancel(timer);
        }
    }

    fn emit_change(&mut self) {
        if self.listeners.is_empty() {
            return;
        }
        let snapshot: Vec<Notification> = self.visible.iter().cloned().collect();
        for listener in &mut self.listeners {
            listener(&snapshot);
        }
    }
}

impl Default for NotificationCenter {
    fn default() -> Self {
        Self::new()
    }
}
