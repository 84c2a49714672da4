use reqwest::Client;
use std::time::Duration;

pub struct HttpClientFactory;

impl HttpClientFactory {
    /// Creates the HTTP client used for upstream requests.
    ///
    /// Retries are deliberately absent: a failed request is reported to the
    /// poll loop, which retries on its next tick.
    pub fn create_client() -> Client {
        Client::builder()
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10))
            .build()
            .unwrap_or_else(|_| Client::new())
    }
}
