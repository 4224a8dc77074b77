//! Single-handle timer slots.
//!
//! Each recurring timer (slideshow advance, mascot cycle, fast-mode revert)
//! lives in its own [`TimerSlot`]. Arming a slot aborts whatever task it
//! held before, so a slot never has two live timers.

use std::future::Future;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::task::JoinHandle;

#[derive(Debug, Default)]
pub struct TimerSlot {
    handle: Mutex<Option<JoinHandle<()>>>,
}

impl TimerSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Spawn `task` in this slot, aborting the previous occupant first.
    pub fn arm<F>(&self, task: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let mut handle = self.handle.lock();
        if let Some(previous) = handle.take() {
            previous.abort();
        }
        *handle = Some(tokio::spawn(task));
    }

    /// Run `tick` every `period`, first call after one full period.
    pub fn arm_repeating<F>(&self, period: Duration, mut tick: F)
    where
        F: FnMut() -> bool + Send + 'static,
    {
        self.arm(async move {
            loop {
                tokio::time::sleep(period).await;
                if !tick() {
                    break;
                }
            }
        });
    }

    /// Run `fire` once after `delay`.
    pub fn arm_once<F>(&self, delay: Duration, fire: F)
    where
        F: FnOnce() + Send + 'static,
    {
        self.arm(async move {
            tokio::time::sleep(delay).await;
            fire();
        });
    }

    /// Abort the current task. Returns whether one was still running.
    pub fn cancel(&self) -> bool {
        match self.handle.lock().take() {
            Some(handle) => {
                let live = !handle.is_finished();
                handle.abort();
                live
            }
            None => false,
        }
    }

    /// Whether a task is armed and has not completed
    pub fn is_armed(&self) -> bool {
        self.handle
            .lock()
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }
}

impl Drop for TimerSlot {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.get_mut().take() {
            handle.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[tokio::test(start_paused = true)]
    async fn test_rearm_cancels_previous() {
        let slot = TimerSlot::new();
        let first = Arc::new(AtomicUsize::new(0));
        let second = Arc::new(AtomicUsize::new(0));

        let counter = first.clone();
        slot.arm_repeating(Duration::from_millis(100), move || {
            counter.fetch_add(1, Ordering::SeqCst);
            true
        });
        tokio::time::sleep(Duration::from_millis(250)).await;
        assert_eq!(first.load(Ordering::SeqCst), 2);

        let counter = second.clone();
        slot.arm_repeating(Duration::from_millis(100), move || {
            counter.fetch_add(1, Ordering::SeqCst);
            true
        });
        tokio::time::sleep(Duration::from_millis(350)).await;

        assert_eq!(first.load(Ordering::SeqCst), 2, "old timer must stop");
        assert_eq!(second.load(Ordering::SeqCst), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_repeating_stops_when_tick_returns_false() {
        let slot = TimerSlot::new();
        let count = Arc::new(AtomicUsize::new(0));
        let counter = count.clone();
        slot.arm_repeating(Duration::from_millis(10), move || {
            counter.fetch_add(1, Ordering::SeqCst) < 2
        });

        tokio::time::sleep(Duration::from_millis(100)).await;
        assert_eq!(count.load(Ordering::SeqCst), 3);
        assert!(!slot.is_armed());
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel() {
        let slot = TimerSlot::new();
        let fired = Arc::new(AtomicUsize::new(0));
        let flag = fired.clone();
        slot.arm_once(Duration::from_millis(50), move || {
            flag.fetch_add(1, Ordering::SeqCst);
        });

        assert!(slot.is_armed());
        assert!(slot.cancel());
        assert!(!slot.is_armed());
        assert!(!slot.cancel());

        tokio::time::sleep(Duration::from_millis(100)).await;
        assert_eq!(fired.load(Ordering::SeqCst), 0);
    }
}
