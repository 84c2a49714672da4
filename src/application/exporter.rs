use crate::domain::errors::{ExporterError, FetchError};
use crate::domain::ports::ShopFetcher;
use crate::infrastructure::observability::{Metrics, RecordedSamples};
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, info};

/// Where the poll loop stands with respect to its fatality rule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExporterPhase {
    /// No fetch has succeeded yet; the next failure is fatal
    AwaitingFirstSuccess,
    /// At least one fetch succeeded; failures keep the last values
    Serving,
}

/// Outcome of a single poll that did not terminate the loop
#[derive(Debug)]
pub enum PollOutcome {
    Updated {
        items: usize,
        samples: RecordedSamples,
    },
    /// The fetch failed after an earlier success; gauges keep their values
    Tolerated(FetchError),
}

/// Polls the shop and mirrors it into the metrics registry.
pub struct Exporter {
    fetcher: Arc<dyn ShopFetcher>,
    metrics: Metrics,
    interval: Duration,
    verbose: bool,
    phase: ExporterPhase,
}

impl Exporter {
    pub fn new(
        fetcher: Arc<dyn ShopFetcher>,
        metrics: Metrics,
        interval: Duration,
        verbose: bool,
    ) -> Self {
        Self {
            fetcher,
            metrics,
            interval,
            verbose,
            phase: ExporterPhase::AwaitingFirstSuccess,
        }
    }

    pub fn phase(&self) -> ExporterPhase {
        self.phase
    }

    /// Run one fetch and apply the result.
    ///
    /// Returns `Err` only when the fetch failed before any success.
    pub async fn poll_once(&mut self) -> Result<PollOutcome, ExporterError> {
        match self.fetcher.fetch().await {
            Ok(items) => {
                let samples = self.metrics.record_items(&items);
                if self.verbose {
                    info!("Successfully fetched {} shop items", items.len());
                }
                self.phase = ExporterPhase::Serving;
                Ok(PollOutcome::Updated {
                    items: items.len(),
                    samples,
                })
            }
            Err(e) => match self.phase {
                ExporterPhase::AwaitingFirstSuccess => Err(ExporterError::InitialFetch(e)),
                ExporterPhase::Serving => {
                    error!(error = ?e, "Failed to fetch data: {}", e);
                    Ok(PollOutcome::Tolerated(e))
                }
            },
        }
    }

    /// Poll forever, sleeping `interval` after every attempt.
    ///
    /// The sleep also runs after a fatal first failure, so the process exits
    /// one interval after the failed fetch.
    pub async fn run(mut self) -> Result<(), ExporterError> {
        info!(
            "Polling shop every {:?} (verbose: {})",
            self.interval, self.verbose
        );

        loop {
            let outcome = self.poll_once().await;
            tokio::time::sleep(self.interval).await;
            outcome?;
        }
    }

    /// Run until `interrupt` resolves. A successful interrupt is a clean stop;
    /// failing to listen for it is an error like any other.
    pub async fn run_until<S>(self, interrupt: S) -> Result<(), ExporterError>
    where
        S: Future<Output = std::io::Result<()>>,
    {
        tokio::select! {
            result = self.run() => result,
            signal = interrupt => {
                signal.map_err(ExporterError::Signal)?;
                debug!("Interrupted, shutting down");
                Ok(())
            }
        }
    }
}
