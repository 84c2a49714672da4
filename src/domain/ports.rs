use crate::domain::errors::FetchError;
use crate::domain::shop::ShopItem;
use async_trait::async_trait;

#[async_trait]
pub trait ShopFetcher: Send + Sync {
    /// Fetch the current shop listing.
    ///
    /// Individually invalid records are dropped; the call only fails when the
    /// request fails or nothing usable came back.
    async fn fetch(&self) -> Result<Vec<ShopItem>, FetchError>;
}
