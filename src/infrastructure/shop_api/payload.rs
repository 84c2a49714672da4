//! Decoding of the `/api/shop` response body.
//!
//! The body is decoded in two steps: first into a list of untyped JSON values,
//! then each value into an item. A record that fails the second step is logged
//! and dropped so one bad listing never hides the rest of the shop.

use crate::domain::errors::{FetchError, ItemValidationError};
use crate::domain::shop::{ShopItem, UnvalidatedItem};
use serde::Deserialize;
use std::collections::{BTreeMap, HashSet};
use tracing::warn;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ShopItemDto {
    title: String,
    image_url: String,
    description: String,
    #[serde(default)]
    purchase_url: Option<String>,
    id: i64,
    shop_type: String,
    prices: BTreeMap<String, i64>,
    #[serde(default)]
    stock_remaining: Option<i64>,
}

impl From<ShopItemDto> for UnvalidatedItem {
    fn from(dto: ShopItemDto) -> Self {
        Self {
            id: dto.id,
            title: dto.title,
            image_url: dto.image_url,
            description: dto.description,
            purchase_url: dto.purchase_url,
            shop_type: dto.shop_type,
            prices: dto.prices,
            stock_remaining: dto.stock_remaining,
        }
    }
}

/// Result of decoding one response body
#[derive(Debug)]
pub struct DecodedShop {
    pub items: Vec<ShopItem>,
    pub rejected: Vec<(usize, ItemValidationError)>,
}

/// Decode a single record into a validated item.
pub fn decode_item(value: serde_json::Value) -> Result<ShopItem, ItemValidationError> {
    let dto: ShopItemDto =
        serde_json::from_value(value).map_err(|e| ItemValidationError::Malformed {
            reason: e.to_string(),
        })?;
    ShopItem::try_from(UnvalidatedItem::from(dto))
}

/// Decode a full response body, keeping the valid records.
///
/// Fails with [`FetchError::NoData`] when the body carries nothing and with
/// [`FetchError::NoValidItems`] when every record was rejected.
pub fn decode_shop(body: &str) -> Result<DecodedShop, FetchError> {
    if body.trim().is_empty() {
        return Err(FetchError::NoData);
    }

    let records: Option<Vec<serde_json::Value>> =
        serde_json::from_str(body).map_err(|e| FetchError::Decode {
            reason: e.to_string(),
        })?;
    let records = match records {
        Some(records) if !records.is_empty() => records,
        _ => return Err(FetchError::NoData),
    };

    let mut seen_ids = HashSet::new();
    let mut items = Vec::with_capacity(records.len());
    let mut rejected = Vec::new();

    for (index, record) in records.into_iter().enumerate() {
        let decoded = decode_item(record).and_then(|item| {
            if seen_ids.insert(item.id) {
                Ok(item)
            } else {
                Err(ItemValidationError::DuplicateId { id: item.id })
            }
        });

        match decoded {
            Ok(item) => items.push(item),
            Err(e) => {
                warn!(index, error = %e, "Failed to parse shop item");
                rejected.push((index, e));
            }
        }
    }

    if items.is_empty() {
        return Err(FetchError::NoValidItems {
            rejected: rejected.len(),
        });
    }

    Ok(DecodedShop { items, rejected })
}
