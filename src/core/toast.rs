//! Transient toast notifications with timed expiry

use std::time::{Duration, Instant};

/// Severity of a toast
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Info,
    Warning,
    Error,
}

impl ToastKind {
    pub fn label(&self) -> &'static str {
        match self {
            ToastKind::Success => "ok",
            ToastKind::Info => "info",
            ToastKind::Warning => "warn",
            ToastKind::Error => "error",
        }
    }
}

/// A short-lived notification, removed once `expires_at` passes
#[derive(Debug, Clone)]
pub struct ToastRecord {
    pub id: u64,
    pub description: String,
    pub kind: ToastKind,
    pub expires_at: Instant,
}

/// Ordered queue of auto-expiring toasts.
///
/// Ids are monotonic for the lifetime of the queue and never reused,
/// even after dismissal. Records render in insertion order.
#[derive(Debug)]
pub struct ToastQueue {
    records: Vec<ToastRecord>,
    next_id: u64,
    ttl: Duration,
}

pub const DEFAULT_TOAST_TTL: Duration = Duration::from_millis(4000);

impl Default for ToastQueue {
    fn default() -> Self {
        Self::new(DEFAULT_TOAST_TTL)
    }
}

impl ToastQueue {
    pub fn new(ttl: Duration) -> Self {
        Self {
            records: Vec::new(),
            next_id: 1,
            ttl,
        }
    }

    /// Append a toast and return its id for possible manual dismissal
    pub fn push(&mut self, description: impl Into<String>, kind: ToastKind, now: Instant) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.records.push(ToastRecord {
            id,
            description: description.into(),
            kind,
            expires_at: now + self.ttl,
        });
        id
    }

    /// Remove the record with this id; silent no-op when absent
    pub fn dismiss(&mut self, id: u64) {
        self.records.retain(|record| record.id != id);
    }

    /// Drop every record whose expiry has passed
    pub fn tick(&mut self, now: Instant) {
        self.records.retain(|record| record.expires_at > now);
    }

    pub fn records(&self) -> &[ToastRecord] {
        &self.records
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expiry_sweep_keeps_unexpired() {
        let now = Instant::now();
        let mut queue = ToastQueue::new(Duration::from_millis(100));
        queue.push("first", ToastKind::Info, now);
        queue.push("second", ToastKind::Success, now + Duration::from_millis(80));

        queue.tick(now + Duration::from_millis(120));
        assert_eq!(queue.len(), 1);
        assert_eq!(queue.records()[0].description, "second");
    }

    #[test]
    fn dismiss_absent_id_is_noop() {
        let now = Instant::now();
        let mut queue = ToastQueue::default();
        let id = queue.push("only", ToastKind::Warning, now);
        queue.dismiss(id + 100);
        assert_eq!(queue.len(), 1);
        queue.dismiss(id);
        assert!(queue.is_empty());
    }
}
