use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::sync::broadcast;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};

use crate::amara::config::SamplingConfig;
use crate::amara::signals::SignalCollector;

/// Background task that samples elapsed time, silence and read depth on fixed intervals.
pub struct SignalSampler {
    shutdown_tx: broadcast::Sender<()>,
    handle: Option<JoinHandle<()>>,
}

impl SignalSampler {
    /// Returns `None` when called outside a tokio runtime; signals then stay at their last value.
    pub fn start(collector: Arc<Mutex<SignalCollector>>, config: &SamplingConfig) -> Option<Self> {
        let runtime = match tokio::runtime::Handle::try_current() {
            Ok(handle) => handle,
            Err(_) => {
                tracing::debug!("no tokio runtime, signal sampler not started");
                return None;
            }
        };

        let (shutdown_tx, mut shutdown_rx) = broadcast::channel(1);
        let tick_every = Duration::from_millis(config.tick_interval_ms.max(1));
        let depth_every = Duration::from_millis(config.read_depth_interval_ms.max(1));

        // First samples land one full period after start.
        let now = Instant::now();
        let handle = runtime.spawn(async move {
            let mut tick = tokio::time::interval_at(now + tick_every, tick_every);
            let mut depth = tokio::time::interval_at(now + depth_every, depth_every);
            tick.set_missed_tick_behavior(MissedTickBehavior::Delay);
            depth.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                tokio::select! {
                    _ = shutdown_rx.recv() => break,
                    _ = tick.tick() => collector.lock().tick(),
                    _ = depth.tick() => collector.lock().sample_read_depth(),
                }
            }
            tracing::debug!("signal sampler loop exited");
        });

        Some(Self {
            shutdown_tx,
            handle: Some(handle),
        })
    }

    pub async fn stop(mut self) {
        let _ = self.shutdown_tx.send(());
        if let Some(handle) = self.handle.take() {
            if let Err(err) = handle.await {
                tracing::warn!(error = %err, "signal sampler task failed");
            }
        }
        tracing::info!("signal sampler stopped");
    }

    pub fn is_running(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| !h.is_finished())
    }
}

impl Drop for SignalSampler {
    fn drop(&mut self) {
        if self.handle.is_some() {
            let _ = self.shutdown_tx.send(());
        }
    }
}
