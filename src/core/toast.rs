//! # Toasts
//!
//! Transient notifications that hide themselves after `TOAST_DURATION`.
//!
//! Policy for overlapping toasts is last-write-wins with timer reset:
//!
//! ```text
//! show("A") ── id 1, dismiss(1) scheduled at t+2.5s
//! show("B") ── id 2, pending dismiss(1) aborted, dismiss(2) at t'+2.5s
//! dismiss(1) (if it ever arrives) ── ignored, id no longer current
//! ```
//!
//! `ToastSlot` is the pure part owned by `App`. `ToastTimer` is the
//! cancellable scheduled task owned by the UI adapter.

use std::time::Duration;

use tokio::task::AbortHandle;

pub const TOAST_DURATION: Duration = Duration::from_millis(2500);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub message: String,
    pub kind: ToastKind,
}

/// The single visible toast, plus the id counter.
#[derive(Debug, Default)]
pub struct ToastSlot {
    current: Option<Toast>,
    next_id: u64,
}

impl ToastSlot {
    /// Replaces whatever is showing and returns the new toast's id.
    pub fn show(&mut self, message: impl Into<String>, kind: ToastKind) -> u64 {
        self.next_id += 1;
        self.current = Some(Toast {
            id: self.next_id,
            message: message.into(),
            kind,
        });
        self.next_id
    }

    /// Hides the toast if `id` is still the one showing. Returns whether it hid.
    pub fn dismiss(&mut self, id: u64) -> bool {
        if self.current.as_ref().is_some_and(|t| t.id == id) {
            self.current = None;
            true
        } else {
            false
        }
    }

    pub fn current(&self) -> Option<&Toast> {
        self.current.as_ref()
    }

    pub fn is_visible(&self) -> bool {
        self.current.is_some()
    }
}

/// Holds at most one pending dismissal task.
#[derive(Default)]
pub struct ToastTimer {
    pending: Option<AbortHandle>,
}

impl ToastTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Aborts any pending dismissal, then runs `on_fire` after `delay`.
    /// Must be called from within a tokio runtime.
    pub fn schedule<F>(&mut self, delay: Duration, on_fire: F)
    where
        F: FnOnce() + Send + 'static,
    {
        self.cancel();
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            on_fire();
        });
        self.pending = Some(handle.abort_handle());
    }

    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.as_ref().is_some_and(|h| !h.is_finished())
    }
}

impl Drop for ToastTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[test]
    fn test_show_assigns_increasing_ids() {
        let mut slot = ToastSlot::default();
        let a = slot.show("Note saved!", ToastKind::Info);
        let b = slot.show("Copied AI response!", ToastKind::Info);
        assert!(b > a);
        assert_eq!(slot.current().unwrap().message, "Copied AI response!");
    }

    #[test]
    fn test_stale_dismiss_is_ignored() {
        let mut slot = ToastSlot::default();
        let first = slot.show("first", ToastKind::Info);
        let second = slot.show("second", ToastKind::Error);

        assert!(!slot.dismiss(first));
        assert_eq!(slot.current().unwrap().id, second);

        assert!(slot.dismiss(second));
        assert!(!slot.is_visible());
    }

    #[tokio::test(start_paused = true)]
    async fn test_timer_fires_after_delay() {
        let fired = Arc::new(Mutex::new(Vec::new()));
        let mut timer = ToastTimer::new();

        let sink = fired.clone();
        timer.schedule(TOAST_DURATION, move || sink.lock().unwrap().push(1));
        assert!(timer.is_pending());

        tokio::time::sleep(Duration::from_millis(2400)).await;
        assert!(fired.lock().unwrap().is_empty());

        tokio::time::sleep(Duration::from_millis(200)).await;
        assert_eq!(*fired.lock().unwrap(), vec![1]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_reschedule_cancels_previous_dismissal() {
        let fired = Arc::new(Mutex::new(Vec::new()));
        let mut timer = ToastTimer::new();

        let sink = fired.clone();
        timer.schedule(TOAST_DURATION, move || sink.lock().unwrap().push(1));

        tokio::time::sleep(Duration::from_millis(2000)).await;
        let sink = fired.clone();
        timer.schedule(TOAST_DURATION, move || sink.lock().unwrap().push(2));

        // Past the first deadline: only the restarted timer is alive
        tokio::time::sleep(Duration::from_millis(1000)).await;
        assert!(fired.lock().unwrap().is_empty());

        tokio::time::sleep(Duration::from_millis(1600)).await;
        assert_eq!(*fired.lock().unwrap(), vec![2]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_prevents_firing() {
        let fired = Arc::new(Mutex::new(false));
        let mut timer = ToastTimer::new();
        let sink = fired.clone();
        timer.schedule(TOAST_DURATION, move || *sink.lock().unwrap() = true);
        timer.cancel();
        assert!(!timer.is_pending());

        tokio::time::sleep(TOAST_DURATION * 2).await;
        assert!(!*fired.lock().unwrap());
    }
}
