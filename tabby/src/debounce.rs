//! Debounced resize rechecks.
//!
//! Every [`Debouncer::schedule`] cancels the pending timer and starts a new
//! one, so a burst of resizes produces a single tick once the viewport has
//! been quiet for the whole period.

use std::time::Duration;

use log::trace;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

/// Quiet period before a resize burst is acted on.
pub const RESIZE_QUIET_PERIOD: Duration = Duration::from_millis(100);

/// Cancellable timer that sends a tick once the quiet period elapses.
///
/// Scheduling spawns onto the current tokio runtime.
#[derive(Debug)]
pub struct Debouncer {
    delay: Duration,
    tx: mpsc::Sender<u64>,
    generation: u64,
    pending: Option<CancellationToken>,
}

/// Receiving side of a [`Debouncer`].
#[derive(Debug)]
pub struct DebounceTicks {
    rx: mpsc::Receiver<u64>,
}

impl DebounceTicks {
    /// Wait for the next tick. Pass the value to [`Debouncer::fire`].
    pub async fn recv(&mut self) -> Option<u64> {
        self.rx.recv().await
    }
}

impl Debouncer {
    pub fn new(delay: Duration) -> (Self, DebounceTicks) {
        let (tx, rx) = mpsc::channel(4);
        (
            Self {
                delay,
                tx,
                generation: 0,
                pending: None,
            },
            DebounceTicks { rx },
        )
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Restart the timer, dropping any tick that has not fired yet.
    pub fn schedule(&mut self) {
        self.cancel();

        self.generation += 1;
        let generation = self.generation;
        let token = CancellationToken::new();
        let cancelled = token.clone();
        let tx = self.tx.clone();
        let delay = self.delay;

        tokio::spawn(async move {
            tokio::select! {
                _ = cancelled.cancelled() => {}
                _ = tokio::time::sleep(delay) => {
                    // Receiver dropped = runtime shut down
                    let _ = tx.send(generation).await;
                }
            }
        });

        trace!("debounce timer #{generation} scheduled");
        self.pending = Some(token);
    }

    /// Cancel the pending timer. Returns true if one was pending.
    pub fn cancel(&mut self) -> bool {
        match self.pending.take() {
            Some(token) => {
                token.cancel();
                true
            }
            None => false,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Accept a tick. Returns false for ticks of timers that were cancelled
    /// after they had already fired.
    pub fn fire(&mut self, generation: u64) -> bool {
        if generation != self.generation || self.pending.is_none() {
            trace!("dropping stale debounce tick #{generation}");
            return false;
        }
        self.pending = None;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_single_schedule_fires_after_delay() {
        let (mut debouncer, mut ticks) = Debouncer::new(RESIZE_QUIET_PERIOD);

        debouncer.schedule();
        assert!(debouncer.is_pending());

        let generation = ticks.recv().await.unwrap();
        assert!(debouncer.fire(generation));
        assert!(!debouncer.is_pending());
    }

    #[tokio::test(start_paused = true)]
    async fn test_burst_collapses_to_last_tick() {
        let (mut debouncer, mut ticks) = Debouncer::new(RESIZE_QUIET_PERIOD);

        for _ in 0..5 {
            debouncer.schedule();
            tokio::time::sleep(Duration::from_millis(40)).await;
        }

        let generation = ticks.recv().await.unwrap();
        assert_eq!(generation, 5);
        assert!(debouncer.fire(generation));

        tokio::time::sleep(Duration::from_millis(500)).await;
        assert!(ticks.rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_prevents_tick() {
        let (mut debouncer, mut ticks) = Debouncer::new(RESIZE_QUIET_PERIOD);

        debouncer.schedule();
        assert!(debouncer.cancel());
        assert!(!debouncer.cancel());

        tokio::time::sleep(Duration::from_millis(500)).await;
        assert!(ticks.rx.try_recv().is_err());
    }

    #[test]
    fn test_stale_generation_rejected() {
        let (mut debouncer, _ticks) = Debouncer::new(RESIZE_QUIET_PERIOD);
        assert!(!debouncer.fire(0));
        assert!(!debouncer.fire(7));
    }
}
