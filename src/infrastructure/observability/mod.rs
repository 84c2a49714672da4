//! Pull-based observability for the shop exporter
//!
//! Shop data is held in Prometheus gauges and served over HTTP for scraping.

pub mod logging;
pub mod metrics;
pub mod server;

pub use metrics::{Metrics, RecordedSamples};
pub use server::MetricsServer;
