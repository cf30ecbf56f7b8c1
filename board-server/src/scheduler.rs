//! The recurring update timer.
//!
//! Sleeps an initial delay, fires the first tick, then ticks at a fixed
//! interval until stopped. The original board never tore its timer down;
//! here the handle is explicit so a host can cancel the loop when the
//! widget goes away.

use std::future::Future;
use std::time::Duration;

use tokio::task::JoinHandle;

/// Handle to a repeating update task.
pub struct UpdateTimer {
    handle: JoinHandle<()>,
}

impl UpdateTimer {
    /// Spawn the timer.
    ///
    /// `tick` runs once after `initial_delay`, then once every `every`.
    /// A tick that overruns the interval delays the next one rather than
    /// stacking; `every` must be non-zero.
    pub fn start<F, Fut>(initial_delay: Duration, every: Duration, mut tick: F) -> Self
    where
        F: FnMut() -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let handle = tokio::spawn(async move {
            tokio::time::sleep(initial_delay).await;
            let mut interval = tokio::time::interval(every);
            loop {
                interval.tick().await;
                tick().await;
            }
        });

        Self { handle }
    }

    /// Cancel the timer. No further ticks run after this returns.
    pub fn stop(&self) {
        self.handle.abort();
    }

    /// Whether the timer task has exited.
    pub fn is_stopped(&self) -> bool {
        self.handle.is_finished()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn counting_timer(
        initial_delay: Duration,
        every: Duration,
    ) -> (UpdateTimer, Arc<AtomicUsize>) {
        let count = Arc::new(AtomicUsize::new(0));
        let ticks = count.clone();
        let timer = UpdateTimer::start(initial_delay, every, move || {
            let ticks = ticks.clone();
            async move {
                ticks.fetch_add(1, Ordering::SeqCst);
            }
        });
        (timer, count)
    }

    #[tokio::test(start_paused = true)]
    async fn first_tick_after_initial_delay() {
        let (timer, count) = counting_timer(Duration::from_secs(2), Duration::from_secs(300));

        tokio::time::sleep(Duration::from_millis(1900)).await;
        assert_eq!(count.load(Ordering::SeqCst), 0);

        tokio::time::sleep(Duration::from_millis(200)).await;
        assert_eq!(count.load(Ordering::SeqCst), 1);

        timer.stop();
    }

    #[tokio::test(start_paused = true)]
    async fn ticks_repeat_at_interval() {
        let (timer, count) = counting_timer(Duration::ZERO, Duration::from_secs(300));

        tokio::time::sleep(Duration::from_secs(1)).await;
        assert_eq!(count.load(Ordering::SeqCst), 1);

        tokio::time::sleep(Duration::from_secs(300)).await;
        assert_eq!(count.load(Ordering::SeqCst), 2);

        tokio::time::sleep(Duration::from_secs(600)).await;
        assert_eq!(count.load(Ordering::SeqCst), 4);

        timer.stop();
    }

    #[tokio::test(start_paused = true)]
    async fn stop_cancels_future_ticks() {
        let (timer, count) = counting_timer(Duration::ZERO, Duration::from_secs(300));

        tokio::time::sleep(Duration::from_secs(1)).await;
        assert_eq!(count.load(Ordering::SeqCst), 1);

        timer.stop();
        tokio::time::sleep(Duration::from_secs(900)).await;

        assert_eq!(count.load(Ordering::SeqCst), 1);
        assert!(timer.is_stopped());
    }
}
