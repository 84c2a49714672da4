//! SOM Shop Exporter
//!
//! Polls the Summer of Making shop API and serves stock and price gauges for
//! Prometheus to scrape.
//!
//! # Usage
//! ```sh
//! som-shop-exporter --port 9040 --interval 10 -v
//! ```

use anyhow::Result;
use clap::Parser;
use som_shop_exporter::application::Exporter;
use som_shop_exporter::config::{Cli, ExporterConfig};
use som_shop_exporter::infrastructure::ShopApiClient;
use som_shop_exporter::infrastructure::observability::{Metrics, MetricsServer, logging};
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    let config = ExporterConfig::from(Cli::parse());

    logging::init();

    let metrics = Metrics::new()?;
    let server = MetricsServer::start(config.listen_addr, metrics.clone()).await?;
    info!("Started metrics exporter: {}", config.metrics_url());

    let fetcher = Arc::new(ShopApiClient::with_url(config.shop_api_url.clone()));
    let exporter = Exporter::new(fetcher, metrics, config.interval, config.verbose);

    let result = exporter.run_until(tokio::signal::ctrl_c()).await;
    server.shutdown();
    Ok(result?)
}
