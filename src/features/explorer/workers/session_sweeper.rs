use std::sync::Arc;
use std::time::Duration;
use tokio::time::interval;

use crate::features::explorer::services::ExplorerService;

/// Background worker that unmounts abandoned explorer sessions
pub struct SessionSweeper {
    service: Arc<ExplorerService>,
    every: Duration,
}

impl SessionSweeper {
    pub fn new(service: Arc<ExplorerService>, every: Duration) -> Self {
        Self { service, every }
    }

    /// Run the sweeper in a background loop
    pub async fn run(&self) {
        tracing::info!(
            "Starting explorer session sweeper (every {}s)",
            self.every.as_secs()
        );

        let mut interval = interval(self.every);

        loop {
            interval.tick().await;
            self.sweep_once().await;
        }
    }

    async fn sweep_once(&self) -> usize {
        let swept = self.service.sweep_idle().await;
        if swept > 0 {
            tracing::debug!(
                "{} explorer sessions still live after sweep",
                self.service.session_count().await
            );
        }
        swept
    }
}
