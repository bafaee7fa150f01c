use std::sync::Arc;

use crate::config::Configuration;
use crate::console::Printer;
use crate::ping::{self, PingOutcome};

pub struct Service<P: Printer> {
    pub config: Arc<Configuration>,
    pub console: P,
}

impl<P: Printer> Service<P> {
    /// Runs the single health check against the configured endpoint.
    pub async fn run_ping(&self) -> PingOutcome {
        tracing::debug!("Pinging backend at {} ...", self.config.endpoint);

        ping::run(&self.config.endpoint, self.config.timeout, &self.console).await
    }
}
