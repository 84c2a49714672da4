//! Prometheus metrics definitions for the shop exporter
//!
//! All shop metrics use the `som_shop_` prefix.

use crate::domain::regions::region_name;
use crate::domain::shop::ShopItem;
use prometheus::{GaugeVec, Opts, Registry, TextEncoder};
use std::sync::Arc;

const ITEM_LABELS: [&str; 5] = [
    "item_id",
    "item_name",
    "item_image",
    "shop_type",
    "item_description",
];

const PRICE_LABELS: [&str; 7] = [
    "item_id",
    "item_name",
    "item_image",
    "shop_type",
    "item_description",
    "region",
    "region_name",
];

/// Number of samples written by one call to [`Metrics::record_items`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RecordedSamples {
    pub stock: usize,
    pub price: usize,
}

/// Prometheus metrics for the shop
#[derive(Clone)]
pub struct Metrics {
    registry: Arc<Registry>,
    /// Stock remaining per item, positive infinity when unlimited
    pub stock: GaugeVec,
    /// Price per item and region, in shells
    pub price_shells: GaugeVec,
}

impl Metrics {
    /// Create a new Metrics instance with both gauge families registered
    pub fn new() -> anyhow::Result<Self> {
        let registry = Registry::new();

        let stock = GaugeVec::new(
            Opts::new("som_shop_stock", "Stock remaining for shop items"),
            &ITEM_LABELS,
        )?;
        registry.register(Box::new(stock.clone()))?;

        let price_shells = GaugeVec::new(
            Opts::new("som_shop_price_shells", "Price for shop items"),
            &PRICE_LABELS,
        )?;
        registry.register(Box::new(price_shells.clone()))?;

        #[cfg(target_os = "linux")]
        registry.register(Box::new(
            prometheus::process_collector::ProcessCollector::for_self(),
        ))?;

        Ok(Self {
            registry: Arc::new(registry),
            stock,
            price_shells,
        })
    }

    /// Render all metrics in Prometheus text format
    pub fn render(&self) -> String {
        let encoder = TextEncoder::new();
        let metric_families = self.registry.gather();
        encoder
            .encode_to_string(&metric_families)
            .unwrap_or_default()
    }

    /// Set the stock sample and one price sample per region for an item.
    ///
    /// Returns the number of price samples written.
    pub fn record_item(&self, item: &ShopItem) -> usize {
        let item_id = item.item_id_label();
        let shop_type = item.shop_type.as_str();

        self.stock
            .with_label_values(&[
                item_id.as_str(),
                item.title.as_str(),
                item.image_url.as_str(),
                shop_type,
                item.description.as_str(),
            ])
            .set(item.stock_value());

        for (region, price) in &item.prices {
            self.price_shells
                .with_label_values(&[
                    item_id.as_str(),
                    item.title.as_str(),
                    item.image_url.as_str(),
                    shop_type,
                    item.description.as_str(),
                    region.as_str(),
                    region_name(region),
                ])
                .set(*price as f64);
        }

        item.prices.len()
    }

    pub fn record_items(&self, items: &[ShopItem]) -> RecordedSamples {
        items
            .iter()
            .fold(RecordedSamples::default(), |mut samples, item| {
                samples.stock += 1;
                samples.price += self.record_item(item);
                samples
            })
    }
}
