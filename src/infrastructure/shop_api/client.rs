use crate::domain::errors::FetchError;
use crate::domain::ports::ShopFetcher;
use crate::domain::shop::ShopItem;
use crate::infrastructure::http_client_factory::HttpClientFactory;
use crate::infrastructure::shop_api::payload::decode_shop;
use async_trait::async_trait;
use reqwest::Client;
use std::error::Error;
use tracing::debug;

pub const SHOP_API_URL: &str = "https://summer.skyfall.dev/api/shop";

/// Fetches the shop listing from the Summer of Making shop API.
pub struct ShopApiClient {
    client: Client,
    url: String,
}

impl ShopApiClient {
    /// Point the client at another endpoint serving the same schema.
    pub fn with_url(url: impl Into<String>) -> Self {
        Self {
            client: HttpClientFactory::create_client(),
            url: url.into(),
        }
    }
}

#[async_trait]
impl ShopFetcher for ShopApiClient {
    async fn fetch(&self) -> Result<Vec<ShopItem>, FetchError> {
        debug!(url = %self.url, "Fetching shop items");

        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| FetchError::Transport {
                reason: error_chain(&e),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::HttpStatus {
                status: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(|e| FetchError::Transport {
            reason: format!("failed to read response body: {}", error_chain(&e)),
        })?;

        let decoded = decode_shop(&body)?;
        debug!(
            accepted = decoded.items.len(),
            rejected = decoded.rejected.len(),
            "Decoded shop response"
        );
        Ok(decoded.items)
    }
}

/// reqwest keeps the underlying cause in the source chain, not in Display.
fn error_chain(err: &dyn Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
