//! Reschedulable periodic tasks on tokio.
//!
//! Each task sleeps for its current interval, sends a clone of its trigger
//! into the scheduler's channel and repeats. The interval lives in a `watch`
//! channel so the owner can change it while the task is waiting; the pending
//! wait then restarts with the new interval.

use std::time::Duration;

use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;

/// Shortest accepted period
pub const MIN_INTERVAL: Duration = Duration::from_millis(1);

fn clamp(interval: Duration) -> Duration {
    interval.max(MIN_INTERVAL)
}

/// Spawns periodic tasks that all feed one receiver
#[derive(Debug)]
pub struct Scheduler<T> {
    tx: mpsc::UnboundedSender<T>,
}

impl<T> Clone for Scheduler<T> {
    fn clone(&self) -> Self {
        Self {
            tx: self.tx.clone(),
        }
    }
}

impl<T: Clone + Send + Sync + 'static> Scheduler<T> {
    /// Create a scheduler and the receiver its tasks deliver to
    pub fn new() -> (Self, mpsc::UnboundedReceiver<T>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }

    /// Send `trigger` every `interval` until the handle is dropped
    ///
    /// Must be called from within a tokio runtime.
    pub fn schedule_repeating(&self, trigger: T, interval: Duration) -> TaskHandle {
        let (interval_tx, interval_rx) = watch::channel(clamp(interval));
        let task = tokio::spawn(run_repeating(trigger, self.tx.clone(), interval_rx));
        TaskHandle { interval_tx, task }
    }
}

async fn run_repeating<T: Clone>(
    trigger: T,
    tx: mpsc::UnboundedSender<T>,
    mut interval_rx: watch::Receiver<Duration>,
) {
    loop {
        let period = *interval_rx.borrow_and_update();
        tokio::select! {
            _ = tokio::time::sleep(period) => {
                if tx.send(trigger.clone()).is_err() {
                    // Receiver gone: nobody is listening any more.
                    break;
                }
            }
            changed = interval_rx.changed() => {
                if changed.is_err() {
                    break;
                }
            }
        }
    }
}

/// Owner side of a periodic task; dropping it cancels the task
#[derive(Debug)]
pub struct TaskHandle {
    interval_tx: watch::Sender<Duration>,
    task: JoinHandle<()>,
}

impl TaskHandle {
    pub fn interval(&self) -> Duration {
        *self.interval_tx.borrow()
    }

    /// Change the period. Returns false if it already was `interval`.
    pub fn reschedule(&self, interval: Duration) -> bool {
        let interval = clamp(interval);
        self.interval_tx.send_if_modified(|current| {
            if *current == interval {
                return false;
            }
            *current = interval;
            true
        })
    }

    pub fn cancel(self) {
        drop(self);
    }

    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

impl Drop for TaskHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::Instant;
    use tokio_test::assert_pending;

    fn assert_close(actual: Duration, expected: Duration) {
        let slack = Duration::from_millis(2);
        assert!(
            actual >= expected && actual <= expected + slack,
            "expected ~{expected:?}, got {actual:?}"
        );
    }

    #[tokio::test(start_paused = true)]
    async fn delivers_trigger_every_interval() {
        let (scheduler, mut rx) = Scheduler::new();
        let _handle = scheduler.schedule_repeating(7u8, Duration::from_millis(100));

        let start = Instant::now();
        for n in 1..=3u64 {
            assert_eq!(rx.recv().await, Some(7));
            assert_close(start.elapsed(), Duration::from_millis(100 * n));
        }
    }

    #[tokio::test(start_paused = true)]
    async fn reschedule_applies_to_pending_wait() {
        let (scheduler, mut rx) = Scheduler::new();
        let handle = scheduler.schedule_repeating(1u8, Duration::from_millis(100));

        rx.recv().await;
        assert!(handle.reschedule(Duration::from_millis(30)));
        assert_eq!(handle.interval(), Duration::from_millis(30));

        let before = Instant::now();
        rx.recv().await;
        assert_close(before.elapsed(), Duration::from_millis(30));
    }

    #[tokio::test(start_paused = true)]
    async fn reschedule_to_same_interval_is_noop() {
        let (scheduler, _rx) = Scheduler::new();
        let handle = scheduler.schedule_repeating((), Duration::from_millis(100));
        assert!(!handle.reschedule(Duration::from_millis(100)));
    }

    #[tokio::test(start_paused = true)]
    async fn zero_interval_is_clamped() {
        let (scheduler, _rx) = Scheduler::new();
        let handle = scheduler.schedule_repeating((), Duration::ZERO);
        assert_eq!(handle.interval(), MIN_INTERVAL);
    }

    #[tokio::test(start_paused = true)]
    async fn cancelled_task_sends_nothing() {
        let (scheduler, mut rx) = Scheduler::new();
        let handle = scheduler.schedule_repeating(1u8, Duration::from_millis(50));
        handle.cancel();

        tokio::time::sleep(Duration::from_millis(200)).await;

        let mut recv = tokio_test::task::spawn(rx.recv());
        assert_pending!(recv.poll());
    }

    #[tokio::test(start_paused = true)]
    async fn task_ends_when_receiver_dropped() {
        let (scheduler, rx) = Scheduler::new();
        let handle = scheduler.schedule_repeating(1u8, Duration::from_millis(50));
        drop(rx);

        tokio::time::sleep(Duration::from_millis(150)).await;
        tokio::task::yield_now().await;

        assert!(handle.is_finished());
    }
}
