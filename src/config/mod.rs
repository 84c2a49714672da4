//! Configuration for the shop exporter.
//!
//! Everything comes from the command line; there is no config file and no
//! environment lookup beyond `RUST_LOG` for log filtering.

mod cli;

pub use cli::Cli;

use crate::infrastructure::shop_api::SHOP_API_URL;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::time::Duration;

/// Resolved exporter settings
#[derive(Debug, Clone)]
pub struct ExporterConfig {
    pub listen_addr: SocketAddr,
    pub interval: Duration,
    pub verbose: bool,
    pub shop_api_url: String,
}

impl Default for ExporterConfig {
    fn default() -> Self {
        Self {
            listen_addr: SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), 9040),
            interval: Duration::from_secs(10),
            verbose: false,
            shop_api_url: SHOP_API_URL.to_string(),
        }
    }
}

impl From<Cli> for ExporterConfig {
    fn from(cli: Cli) -> Self {
        Self {
            listen_addr: SocketAddr::new(cli.bind_address, cli.port),
            interval: Duration::from_secs(cli.interval),
            verbose: cli.verbose > 0,
            shop_api_url: SHOP_API_URL.to_string(),
        }
    }
}

impl ExporterConfig {
    /// URL printed at startup for the scrape endpoint
    pub fn metrics_url(&self) -> String {
        format!("http://localhost:{}/metrics", self.listen_addr.port())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_config_from_default_cli() {
        let cli = Cli::try_parse_from(["som-shop-exporter"]).unwrap();
        let config = ExporterConfig::from(cli);
        assert_eq!(config.listen_addr.port(), 9040);
        assert_eq!(config.interval, Duration::from_secs(10));
        assert!(!config.verbose);
        assert_eq!(config.shop_api_url, SHOP_API_URL);
        assert_eq!(config.metrics_url(), "http://localhost:9040/metrics");
    }

    #[test]
    fn test_any_verbose_count_enables_logging() {
        let cli = Cli::try_parse_from(["som-shop-exporter", "-v"]).unwrap();
        assert!(ExporterConfig::from(cli).verbose);
    }

    #[test]
    fn test_default_matches_cli_defaults() {
        let cli = Cli::try_parse_from(["som-shop-exporter"]).unwrap();
        let from_cli = ExporterConfig::from(cli);
        let default = ExporterConfig::default();
        assert_eq!(from_cli.listen_addr, default.listen_addr);
        assert_eq!(from_cli.interval, default.interval);
    }
}
