#![allow(dead_code)]

use async_trait::async_trait;
use serde_json::{Value, json};
use som_shop_exporter::domain::errors::FetchError;
use som_shop_exporter::domain::ports::ShopFetcher;
use som_shop_exporter::domain::shop::{ShopItem, ShopType};
use std::collections::{BTreeMap, VecDeque};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Fetcher that replays a fixed list of results, then fails with `NoData`.
pub struct ScriptedFetcher {
    responses: Mutex<VecDeque<Result<Vec<ShopItem>, FetchError>>>,
    calls: AtomicUsize,
}

impl ScriptedFetcher {
    pub fn new(responses: Vec<Result<Vec<ShopItem>, FetchError>>) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ShopFetcher for ScriptedFetcher {
    async fn fetch(&self) -> Result<Vec<ShopItem>, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Err(FetchError::NoData))
    }
}

pub fn shop_item(id: i64, prices: &[(&str, i64)], stock: Option<i64>) -> ShopItem {
    ShopItem {
        id,
        title: format!("Item {id}"),
        image_url: format!("https://cdn.example/{id}.png"),
        description: format!("Description {id}"),
        purchase_url: None,
        shop_type: ShopType::PublicShop,
        prices: prices
            .iter()
            .map(|(region, price)| (region.to_string(), *price))
            .collect::<BTreeMap<_, _>>(),
        stock_remaining: stock,
    }
}

/// One upstream record in wire format
pub fn wire_item(id: i64, shop_type: &str) -> Value {
    json!({
        "title": format!("Item {id}"),
        "imageUrl": format!("https://cdn.example/{id}.png"),
        "description": format!("Description {id}"),
        "purchaseUrl": format!("https://shop.example/buy/{id}"),
        "id": id,
        "shopType": shop_type,
        "prices": { "US": 100 + id, "EU": 90 + id, "ZZ": 50 },
        "stockRemaining": id * 2
    })
}

/// Lines of the exposition output that belong to the shop gauges
pub fn shop_samples(body: &str) -> Vec<&str> {
    body.lines()
        .filter(|line| line.starts_with("som_shop_"))
        .collect()
}

/// Numeric value of one exposition line, whatever spelling the encoder uses for infinity
pub fn sample_value(line: &str) -> Option<f64> {
    line.rsplit(' ').next()?.parse::<f64>().ok()
}
