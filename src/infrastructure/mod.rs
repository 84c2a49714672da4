pub mod http_client_factory;
pub mod observability;
pub mod shop_api;

pub use shop_api::ShopApiClient;
