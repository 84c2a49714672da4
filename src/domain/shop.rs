use crate::domain::errors::ItemValidationError;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Shop category an item is listed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShopType {
    PublicShop,
    BlackMarket,
    Stickerlode,
}

impl ShopType {
    /// Label value used in exported metrics
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PublicShop => "public_shop",
            Self::BlackMarket => "black_market",
            Self::Stickerlode => "stickerlode",
        }
    }
}

impl fmt::Display for ShopType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ShopType {
    type Err = ItemValidationError;

    /// Accepts both the upstream codes (`regular`, `blackMarket`) and the
    /// canonical category names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "regular" | "public_shop" => Ok(Self::PublicShop),
            "blackMarket" | "black_market" => Ok(Self::BlackMarket),
            "stickerlode" => Ok(Self::Stickerlode),
            other => Err(ItemValidationError::UnknownShopType {
                code: other.to_string(),
            }),
        }
    }
}

/// A validated shop listing from a single poll.
#[derive(Debug, Clone, PartialEq)]
pub struct ShopItem {
    pub id: i64,
    pub title: String,
    pub image_url: String,
    pub description: String,
    pub purchase_url: Option<String>,
    pub shop_type: ShopType,
    /// Region code -> price in shells
    pub prices: BTreeMap<String, i64>,
    /// `None` means the item has no stock limit
    pub stock_remaining: Option<i64>,
}

impl ShopItem {
    /// Value reported on the stock gauge. Unlimited stock maps to positive infinity.
    pub fn stock_value(&self) -> f64 {
        self.stock_remaining
            .map(|stock| stock as f64)
            .unwrap_or(f64::INFINITY)
    }

    pub fn item_id_label(&self) -> String {
        self.id.to_string()
    }
}

/// Item fields as they arrive from upstream, before normalization.
#[derive(Debug, Clone)]
pub struct UnvalidatedItem {
    pub id: i64,
    pub title: String,
    pub image_url: String,
    pub description: String,
    pub purchase_url: Option<String>,
    pub shop_type: String,
    pub prices: BTreeMap<String, i64>,
    pub stock_remaining: Option<i64>,
}

impl TryFrom<UnvalidatedItem> for ShopItem {
    type Error = ItemValidationError;

    fn try_from(raw: UnvalidatedItem) -> Result<Self, Self::Error> {
        if raw.title.is_empty() {
            return Err(ItemValidationError::EmptyTitle { id: raw.id });
        }
        let shop_type = raw.shop_type.parse::<ShopType>()?;

        Ok(Self {
            id: raw.id,
            title: raw.title,
            image_url: raw.image_url,
            description: raw.description,
            purchase_url: raw.purchase_url,
            shop_type,
            prices: raw.prices,
            stock_remaining: raw.stock_remaining,
        })
    }
}
