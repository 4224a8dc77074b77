//! Keep-alive ping.
//!
//! Free hosting tiers put idle servers to sleep. The client pings the
//! liveness endpoint once at start and then on a fixed interval. Each ping
//! runs on its own task with a timeout, so a failed or stalled request never
//! delays the next one.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinSet;
use tokio::time::MissedTickBehavior;

use crate::backend::Backend;
use crate::config::{GalleryConfig, MIN_PING_INTERVAL, PING_TIMEOUT};
use crate::timer::TimerSlot;

/// Clamp a requested interval to the 5 minute floor.
pub fn effective_interval(requested: Duration) -> Duration {
    if requested < MIN_PING_INTERVAL {
        tracing::warn!(
            "Keep-alive interval {:?} is below the {:?} floor, clamping",
            requested,
            MIN_PING_INTERVAL
        );
        MIN_PING_INTERVAL
    } else {
        requested
    }
}

pub struct PeriodicPing<B: Backend> {
    backend: Arc<B>,
    interval: Duration,
    timer: TimerSlot,
}

impl<B: Backend> PeriodicPing<B> {
    pub fn new(backend: Arc<B>, config: &GalleryConfig) -> Self {
        Self {
            backend,
            interval: effective_interval(config.ping_interval),
            timer: TimerSlot::new(),
        }
    }

    /// Interval in effect after clamping
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Ping now, then every interval. Restarting replaces the schedule.
    pub fn start(&self) {
        let backend = Arc::clone(&self.backend);
        let period = self.interval;
        self.timer.arm(async move {
            let mut ticker = tokio::time::interval(period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            // dropped with the schedule, which aborts pings still in flight
            let mut in_flight = JoinSet::new();
            loop {
                // first tick completes immediately
                ticker.tick().await;
                while in_flight.try_join_next().is_some() {}
                in_flight.spawn(ping_once(Arc::clone(&backend), PING_TIMEOUT));
            }
        });
        tracing::info!(
            "Keep-alive ping every {} minutes",
            self.interval.as_secs() / 60
        );
    }

    pub fn stop(&self) {
        self.timer.cancel();
    }

    pub fn is_running(&self) -> bool {
        self.timer.is_armed()
    }
}

async fn ping_once<B: Backend>(backend: Arc<B>, limit: Duration) {
    tracing::debug!("Sending keep-alive ping");
    match tokio::time::timeout(limit, backend.ping()).await {
        Ok(Ok(status)) if (200..300).contains(&status) => {
            tracing::debug!("Keep-alive ping ok");
        }
        Ok(Ok(status)) => {
            tracing::warn!("Keep-alive ping got non-2xx status: {}", status);
        }
        Ok(Err(e)) => {
            tracing::warn!("Keep-alive ping failed: {}", e);
        }
        Err(_) => {
            tracing::warn!("Keep-alive ping timed out after {:?}", limit);
        }
    }
}
