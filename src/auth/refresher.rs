use super::TokenManager;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// Control handle for a running refresh loop.
///
/// Stopping is cooperative: the loop exits at its next scheduling point, and a refresh
/// that is already executing runs to completion. Dropping the handle stops the loop.
#[derive(Debug)]
pub struct RefreshHandle {
    cancel: CancellationToken,
    join: Option<JoinHandle<()>>,
}

impl RefreshHandle {
    /// Signal the loop to stop scheduling refreshes.
    pub fn stop(&self) {
        self.cancel.cancel();
    }

    pub fn is_stopped(&self) -> bool {
        self.cancel.is_cancelled()
    }

    /// Whether the loop task has exited.
    pub fn is_finished(&self) -> bool {
        self.join.as_ref().map_or(true, |join| join.is_finished())
    }

    /// Stop the loop and wait for the task to exit.
    pub async fn shutdown(mut self) {
        self.cancel.cancel();
        if let Some(join) = self.join.take() {
            if let Err(e) = join.await {
                if e.is_panic() {
                    warn!("token refresher panicked: {}", e);
                }
            }
        }
    }
}

impl Drop for RefreshHandle {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

pub(super) fn spawn(manager: Arc<TokenManager>, interval: Duration) -> RefreshHandle {
    let cancel = CancellationToken::new();
    let stop = cancel.clone();

    let join = tokio::spawn(async move {
        // The caller has just refreshed, so the first tick is one full interval out.
        let mut ticker = tokio::time::interval_at(Instant::now() + interval, interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        info!(interval_secs = interval.as_secs_f64(), "token refresher started");

        loop {
            tokio::select! {
                biased;
                _ = stop.cancelled() => break,
                _ = ticker.tick() => {
                    match manager.refresh().await {
                        Ok(()) => debug!("scheduled token refresh succeeded"),
                        Err(e) => warn!(error = %e, "failed to refresh token, keeping previous token"),
                    }
                }
            }
        }

        info!("token refresher stopped");
    });

    RefreshHandle {
        cancel,
        join: Some(join),
    }
}
